use thiserror::Error;

pub const NO_IMAGE_DATA_MESSAGE: &str = "No image data found in the response.";
pub const GENERATION_FALLBACK_MESSAGE: &str = "Failed to generate image.";

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    /// Error body returned by the generation API; carries the provider message as-is.
    #[error("{0}")]
    ApiError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("{}", NO_IMAGE_DATA_MESSAGE)]
    NoImageData,
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),
    #[error("Unsupported image type: {0}")]
    UnsupportedImageType(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StudioError>;

/// Failure reported by an image generator. The message is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenerationError {
    pub message: String,
}

impl GenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self {
                message: GENERATION_FALLBACK_MESSAGE.to_string(),
            };
        }
        Self { message }
    }
}

impl From<StudioError> for GenerationError {
    fn from(err: StudioError) -> Self {
        GenerationError::new(err.to_string())
    }
}

impl From<reqwest::Error> for StudioError {
    fn from(err: reqwest::Error) -> Self {
        StudioError::RequestError(err.to_string())
    }
}

impl From<serde_json::Error> for StudioError {
    fn from(err: serde_json::Error) -> Self {
        StudioError::SerializationError(err.to_string())
    }
}
