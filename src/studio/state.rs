use crate::models::{ArtStyle, AspectRatio, GenerationRequest, GenerationResult, SourceImage};

pub const EMPTY_DESCRIPTION_MESSAGE: &str = "Please enter a description for your image.";
pub const EMPTY_INSTRUCTIONS_MESSAGE: &str = "Please enter instructions for editing the image.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Lifecycle of the current submission. Exactly one is current at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(GenerationResult),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Form fields plus request lifecycle. Only [`crate::studio::update`] mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudioState {
    pub(super) prompt: String,
    pub(super) style: ArtStyle,
    pub(super) aspect_ratio: AspectRatio,
    pub(super) source_image: Option<SourceImage>,
    pub(super) request: RequestState,
    pub(super) in_flight: Option<GenerationRequest>,
}

impl StudioState {
    pub fn new(style: ArtStyle, aspect_ratio: AspectRatio) -> Self {
        Self {
            style,
            aspect_ratio,
            ..Default::default()
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> ArtStyle {
        self.style
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    pub fn source_image(&self) -> Option<&SourceImage> {
        self.source_image.as_ref()
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_loading()
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.request.result()
    }

    pub fn error(&self) -> Option<&str> {
        self.request.error()
    }

    /// Editing an uploaded image rather than generating from scratch.
    pub fn is_edit_mode(&self) -> bool {
        self.source_image.is_some()
    }

    pub fn has_prompt(&self) -> bool {
        !self.prompt.trim().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.has_prompt()
    }

    pub(super) fn current_request(&self) -> GenerationRequest {
        GenerationRequest {
            prompt: self.prompt.clone(),
            style: self.style,
            aspect_ratio: self.aspect_ratio,
            source_image: self.source_image.clone(),
        }
    }

    pub(super) fn validation_message(&self) -> &'static str {
        if self.is_edit_mode() {
            EMPTY_INSTRUCTIONS_MESSAGE
        } else {
            EMPTY_DESCRIPTION_MESSAGE
        }
    }
}
