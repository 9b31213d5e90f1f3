use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The device cannot start with automated checks enabled.
    #[error("invalid configuration: {0}")]
    ConfigurationInvalid(String),

    /// Transport failure, unexpected status or unreadable response. The
    /// control loop treats it as "no plate" for the current check.
    #[error("plate recognition unavailable: {0}")]
    RecognitionUnavailable(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::RecognitionUnavailable(format!("malformed response: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
