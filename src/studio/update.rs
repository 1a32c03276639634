use super::state::{RequestState, StudioState, GENERIC_FAILURE_MESSAGE};
use crate::{
    error::GenerationError,
    gemini::build_prompt,
    models::{ArtStyle, AspectRatio, GenerationRequest, GenerationResult, SourceImage},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PromptChanged(String),
    StyleChanged(ArtStyle),
    AspectRatioChanged(AspectRatio),
    /// `None` clears the source image.
    SourceImageChanged(Option<SourceImage>),
    Submit,
    GenerationSettled(Result<String, GenerationError>),
}

/// Work the caller must perform after an event has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Generate(GenerationRequest),
}

pub fn update(state: &mut StudioState, event: Event) -> Effect {
    match event {
        Event::PromptChanged(prompt) => {
            state.prompt = prompt;
            Effect::None
        }
        Event::StyleChanged(style) => {
            state.style = style;
            Effect::None
        }
        Event::AspectRatioChanged(aspect_ratio) => {
            state.aspect_ratio = aspect_ratio;
            Effect::None
        }
        Event::SourceImageChanged(source_image) => {
            state.source_image = source_image;
            Effect::None
        }
        Event::Submit => submit(state),
        Event::GenerationSettled(outcome) => settle(state, outcome),
    }
}

fn submit(state: &mut StudioState) -> Effect {
    if state.is_loading() {
        log::warn!("Ignoring submit while a generation is already in flight");
        return Effect::None;
    }

    if !state.has_prompt() {
        state.request = RequestState::Failed(state.validation_message().to_string());
        return Effect::None;
    }

    let request = state.current_request();
    state.request = RequestState::Loading;
    state.in_flight = Some(request.clone());
    Effect::Generate(request)
}

fn settle(state: &mut StudioState, outcome: Result<String, GenerationError>) -> Effect {
    let Some(request) = state.in_flight.take().filter(|_| state.is_loading()) else {
        log::warn!("Dropping generation outcome with no request in flight");
        return Effect::None;
    };

    state.request = match outcome {
        Ok(image_url) => RequestState::Succeeded(GenerationResult {
            image_url: Some(image_url),
            prompt_used: build_prompt(&request.prompt, request.style),
        }),
        Err(err) if err.message.trim().is_empty() => {
            RequestState::Failed(GENERIC_FAILURE_MESSAGE.to_string())
        }
        Err(err) => RequestState::Failed(err.message),
    };
    Effect::None
}
