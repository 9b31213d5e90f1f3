//! Request and response format of the Plate Recognizer cloud API
//! (`POST /v1/plate-reader/`).
//!
//! Only the encoding lives here. The transport belongs to the platform, which
//! sends [`request_body`] with [`headers`] and hands the raw answer to
//! [`parse_response`].

use serde::Deserialize;

use crate::config::RecognizerConfig;
use crate::error::{Error, Result};
use crate::svc::Recognition;

pub const DEFAULT_URL: &str = "https://api.platerecognizer.com/v1/plate-reader/";

const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Deserialize)]
struct Response {
    results: Option<Vec<PlateResult>>,
}

#[derive(Debug, Deserialize)]
struct PlateResult {
    plate: Option<String>,
    score: Option<f32>,
}

/// The length is sent explicitly: without it the body goes out chunked,
/// which the form endpoint does not read.
pub fn headers(config: &RecognizerConfig, body: &str) -> [(&'static str, String); 3] {
    [
        ("Authorization", format!("Token {}", config.token)),
        ("Content-Type", CONTENT_TYPE.to_owned()),
        ("Content-Length", body.len().to_string()),
    ]
}

/// The service downloads the image itself from `image_url`.
pub fn request_body(config: &RecognizerConfig, image_url: &str) -> String {
    if config.regions.is_empty() {
        format!("upload_url={image_url}")
    } else {
        format!("upload_url={image_url}&regions={}", config.regions)
    }
}

pub fn parse_response(status: u16, body: &[u8]) -> Result<Option<Recognition>> {
    if !matches!(status, 200 | 201) {
        return Err(Error::RecognitionUnavailable(format!(
            "HTTP {status} - {}",
            String::from_utf8_lossy(body)
        )));
    }

    let response: Response = serde_json::from_slice(body)?;

    let first = response.results.and_then(|results| results.into_iter().next());

    match first {
        Some(result) => Ok(Some(Recognition {
            plate: result.plate.unwrap_or_default(),
            confidence: result.score.unwrap_or_default(),
        })),
        None => {
            log::warn!("No results. Response: {}", String::from_utf8_lossy(body));
            Ok(None)
        }
    }
}
