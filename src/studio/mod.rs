pub mod state;
pub mod update;

pub use state::{RequestState, StudioState};
pub use update::{update, Effect, Event};

use crate::{
    error::GenerationError,
    gemini::ImageGenerator,
    models::{ArtStyle, AspectRatio, SourceImage},
};
use state::GENERIC_FAILURE_MESSAGE;

/// Owns the studio state and the image generator, and runs the generate effect.
pub struct Studio<G> {
    state: StudioState,
    generator: G,
}

impl<G: ImageGenerator> Studio<G> {
    pub fn new(generator: G) -> Self {
        Self::with_defaults(generator, ArtStyle::default(), AspectRatio::default())
    }

    pub fn with_defaults(generator: G, style: ArtStyle, aspect_ratio: AspectRatio) -> Self {
        Self {
            state: StudioState::new(style, aspect_ratio),
            generator,
        }
    }

    pub fn state(&self) -> &StudioState {
        &self.state
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Applies one event without running its effect.
    pub fn dispatch(&mut self, event: Event) -> Effect {
        update(&mut self.state, event)
    }

    pub fn update_prompt(&mut self, prompt: impl Into<String>) {
        self.dispatch(Event::PromptChanged(prompt.into()));
    }

    pub fn update_style(&mut self, style: ArtStyle) {
        self.dispatch(Event::StyleChanged(style));
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.dispatch(Event::AspectRatioChanged(aspect_ratio));
    }

    pub fn set_source_image(&mut self, source_image: Option<SourceImage>) {
        self.dispatch(Event::SourceImageChanged(source_image));
    }

    /// Validates the prompt, calls the generator once and settles the request.
    ///
    /// If the returned future is dropped while the generator is still running,
    /// the request settles as a generic failure so the form is usable again.
    pub async fn submit(&mut self) -> &RequestState {
        if let Effect::Generate(request) = update(&mut self.state, Event::Submit) {
            let pending = PendingSettle::new(&mut self.state);
            let outcome = self.generator.generate(&request).await;
            match &outcome {
                Ok(_) => log::info!("✅ Image ready"),
                Err(e) => log::warn!("Generation failed: {}", e),
            }
            pending.settle(outcome);
        }
        self.state.request_state()
    }
}

/// Settles the in-flight request exactly once, even when the submit future is cancelled.
struct PendingSettle<'a> {
    state: &'a mut StudioState,
    armed: bool,
}

impl<'a> PendingSettle<'a> {
    fn new(state: &'a mut StudioState) -> Self {
        Self { state, armed: true }
    }

    fn settle(mut self, outcome: std::result::Result<String, GenerationError>) {
        self.armed = false;
        update(self.state, Event::GenerationSettled(outcome));
    }
}

impl Drop for PendingSettle<'_> {
    fn drop(&mut self) {
        if self.armed {
            log::warn!("⚠️ Generation was cancelled before it settled");
            update(
                self.state,
                Event::GenerationSettled(Err(GenerationError::new(GENERIC_FAILURE_MESSAGE))),
            );
        }
    }
}
