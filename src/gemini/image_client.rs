use crate::{
    error::{GenerationError, Result, StudioError},
    gemini::ImageGenerator,
    logger,
    models::{
        to_data_url, ApiErrorResponse, ArtStyle, Content, GenerateContentRequest,
        GenerateContentResponse, GenerationConfig, GenerationRequest, ImageConfig, ModelCapability,
        ModelInfo, Part, DEFAULT_MIME_TYPE,
    },
};
use async_trait::async_trait;
use reqwest::Client;

/// Appends the style clause unless the style is the "No Style" sentinel.
pub fn build_prompt(prompt: &str, style: ArtStyle) -> String {
    if style.is_no_style() {
        prompt.to_string()
    } else {
        format!("{}, in the style of {}, high quality, detailed", prompt, style)
    }
}

/// Returns the first inline image of the first candidate as a data URL.
pub fn extract_image(response: &GenerateContentResponse) -> Result<String> {
    let parts = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| content.parts.as_slice())
        .unwrap_or_default();

    parts
        .iter()
        .filter_map(|part| part.inline_data.as_ref())
        .find(|inline| !inline.data.is_empty())
        .map(|inline| {
            let mime_type = inline
                .mime_type
                .as_deref()
                .filter(|mime| !mime.is_empty())
                .unwrap_or(DEFAULT_MIME_TYPE);
            to_data_url(mime_type, &inline.data)
        })
        .ok_or(StudioError::NoImageData)
}

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ImageClient {
    pub fn new(client: Client, api_key: String, model: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn supported_models() -> Vec<ModelInfo> {
        vec![ModelInfo {
            id: crate::config::DEFAULT_MODEL.to_string(),
            name: "Gemini 2.5 Flash Image (Nano Banana)".to_string(),
            provider: "Google".to_string(),
            capabilities: vec![ModelCapability::TextToImage, ModelCapability::ImageEditing],
        }]
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// The source image (if any) goes first, followed by the text prompt.
    pub fn build_payload(request: &GenerationRequest) -> GenerateContentRequest {
        let mut parts = Vec::with_capacity(2);
        if let Some(source) = &request.source_image {
            parts.push(Part::inline_image(source.mime_type(), source.payload()));
        }
        parts.push(Part::text(build_prompt(&request.prompt, request.style)));

        GenerateContentRequest {
            contents: vec![Content { parts, role: None }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: request.aspect_ratio.as_str().to_string(),
                },
            },
        }
    }

    async fn send(&self, payload: &GenerateContentRequest) -> Result<GenerateContentResponse> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .ok()
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| format!("Request failed with status {}", status));
            return Err(StudioError::ApiError(message));
        }

        serde_json::from_str(&body).map_err(|e| StudioError::ResponseError(e.to_string()))
    }

    pub async fn generate_image(&self, request: &GenerationRequest) -> Result<String> {
        let payload = Self::build_payload(request);
        log::info!(
            "🎨 {} with {} ({}, {})",
            if request.is_edit() { "Editing image" } else { "Generating image" },
            self.model,
            request.style,
            request.aspect_ratio
        );
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Prompt sent: {}", build_prompt(&request.prompt, request.style));
        }

        let _timer = logger::timer("Gemini generateContent");
        let response = self.send(&payload).await?;

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            log::warn!("Prompt was blocked: {}", reason);
        }

        extract_image(&response)
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, request: &GenerationRequest) -> std::result::Result<String, GenerationError> {
        self.generate_image(request).await.map_err(|e| {
            log::error!("Gemini API error: {}", e);
            GenerationError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AspectRatio, SourceImage};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/models/gemini-2.5-flash-image:generateContent";

    fn parse_response(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    /// Mounts a single `generateContent` reply that must be hit exactly once.
    async fn mount_reply(server: &MockServer, reply: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(reply)
            .expect(1)
            .mount(server)
            .await;
    }

    fn client_for(base_url: String) -> ImageClient {
        ImageClient::new(
            Client::builder().no_proxy().build().unwrap(),
            "test-key".into(),
            "gemini-2.5-flash-image".into(),
            base_url,
        )
    }

    #[test]
    fn test_build_prompt_appends_style_clause() {
        assert_eq!(
            build_prompt("A cat", ArtStyle::Anime),
            "A cat, in the style of Anime, high quality, detailed"
        );
        assert_eq!(build_prompt("A cat", ArtStyle::None), "A cat");
        assert_eq!(
            build_prompt("A dog", ArtStyle::HyperRealistic),
            "A dog, in the style of Hyper-realistic, high quality, detailed"
        );
    }

    #[test]
    fn test_payload_for_text_to_image() {
        let request = GenerationRequest::new("A futuristic city on Mars")
            .with_style(ArtStyle::None)
            .with_aspect_ratio(AspectRatio::Landscape);
        let payload = serde_json::to_value(ImageClient::build_payload(&request)).unwrap();

        assert_eq!(
            payload,
            json!({
                "contents": [{ "parts": [{ "text": "A futuristic city on Mars" }] }],
                "generationConfig": { "imageConfig": { "aspectRatio": "16:9" } }
            })
        );
    }

    #[test]
    fn test_payload_puts_source_image_first() {
        let source = SourceImage::from_data_url("data:image/jpeg;base64,AAA=").unwrap();
        let request = GenerationRequest::new("Make it a sketch")
            .with_style(ArtStyle::Watercolor)
            .with_source_image(source);
        let payload = serde_json::to_value(ImageClient::build_payload(&request)).unwrap();

        let parts = &payload["contents"][0]["parts"];
        assert_eq!(
            parts[0],
            json!({ "inlineData": { "mimeType": "image/jpeg", "data": "AAA=" } })
        );
        assert_eq!(
            parts[1]["text"],
            "Make it a sketch, in the style of Watercolor, high quality, detailed"
        );
        assert_eq!(payload["generationConfig"]["imageConfig"]["aspectRatio"], "1:1");
    }

    #[test]
    fn test_extract_image_skips_text_parts() {
        let response = parse_response(json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "x" },
                    { "inlineData": { "mimeType": "image/webp", "data": "BBB=" } }
                ]}
            }]
        }));
        assert_eq!(extract_image(&response).unwrap(), "data:image/webp;base64,BBB=");
    }

    #[test]
    fn test_extract_image_defaults_mime_type() {
        let response = parse_response(json!({
            "candidates": [{ "content": { "parts": [{ "inlineData": { "data": "CCC=" } }] } }]
        }));
        assert_eq!(extract_image(&response).unwrap(), "data:image/png;base64,CCC=");
    }

    #[test]
    fn test_extract_image_only_reads_first_candidate() {
        let response = parse_response(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "sorry" }] } },
                { "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "DDD=" } }] } }
            ]
        }));
        let err = extract_image(&response).unwrap_err();
        assert_eq!(err.to_string(), "No image data found in the response.");
    }

    #[test]
    fn test_extract_image_without_candidates() {
        let response = parse_response(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
        assert!(matches!(extract_image(&response), Err(StudioError::NoImageData)));
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = client_for("https://example.test/v1beta/".into());
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_round_trip_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{ "parts": [
                    { "text": "A cat, in the style of Anime, high quality, detailed" }
                ]}],
                "generationConfig": { "imageConfig": { "aspectRatio": "1:1" } }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [
                    { "text": "here you go" },
                    { "inlineData": { "mimeType": "image/png", "data": "EEE=" } }
                ]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = GenerationRequest::new("A cat").with_style(ArtStyle::Anime);
        let image = client_for(server.uri()).generate(&request).await.unwrap();
        assert_eq!(image, "data:image/png;base64,EEE=");
    }

    #[tokio::test]
    async fn test_generate_surfaces_provider_message() {
        let server = MockServer::start().await;
        mount_reply(
            &server,
            ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
            })),
        )
        .await;

        let err = client_for(server.uri())
            .generate(&GenerationRequest::new("A cat"))
            .await
            .unwrap_err();
        assert_eq!(err.message, "API key not valid.");
    }

    #[tokio::test]
    async fn test_generate_falls_back_to_status_for_plain_text_errors() {
        let server = MockServer::start().await;
        mount_reply(
            &server,
            ResponseTemplate::new(500).set_body_string("upstream connect error"),
        )
        .await;

        let err = client_for(server.uri())
            .generate_image(&GenerationRequest::new("A cat"))
            .await
            .unwrap_err();
        assert!(matches!(&err, StudioError::ApiError(_)));
        assert_eq!(err.to_string(), "Request failed with status 500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_generate_falls_back_when_error_message_is_blank() {
        let server = MockServer::start().await;
        mount_reply(
            &server,
            ResponseTemplate::new(503).set_body_json(json!({ "error": { "code": 503, "message": " " } })),
        )
        .await;

        let err = client_for(server.uri())
            .generate(&GenerationRequest::new("A cat"))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Request failed with status 503 Service Unavailable");
    }

    #[tokio::test]
    async fn test_generate_reports_missing_image() {
        let server = MockServer::start().await;
        mount_reply(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(json!({ "candidates": [{ "content": { "parts": [{ "text": "no" }] } }] })),
        )
        .await;

        let err = client_for(server.uri())
            .generate(&GenerationRequest::new("A cat"))
            .await
            .unwrap_err();
        assert_eq!(err.message, "No image data found in the response.");
    }
}
