pub mod image_client;

use crate::{
    config::GeminiConfig,
    error::{GenerationError, Result, StudioError},
    models::GenerationRequest,
};
use async_trait::async_trait;

pub use image_client::{build_prompt, extract_image, ImageClient};

/// Turns a generation request into a displayable data URL.
///
/// [`ImageClient`] talks to the Gemini API; the studio controller only depends on
/// this trait so it can be driven by a fake in tests.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> std::result::Result<String, GenerationError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    image_client: ImageClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| StudioError::ConfigError("Gemini API key is required (set GEMINI_API_KEY)".into()))?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("nanobanana-studio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            image_client: ImageClient::new(http, api_key, config.model, config.base_url),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
