use crate::error::Result;

/// First plate found in the submitted image.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    /// Text as returned by the service, not normalized.
    pub plate: String,
    pub confidence: f32,
}

/// Remote license-plate recognition.
///
/// `Ok(None)` means the service answered but found no plate. Callers treat
/// errors the same way: nothing was recognized this time.
pub trait PlateRecognizer {
    fn recognize(&self, image_url: &str) -> Result<Option<Recognition>>;
}
