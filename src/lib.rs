//! NanoBanana Studio: compose a prompt, pick an art style and aspect ratio, and
//! generate (or edit) an image with Gemini's image model.
//!
//! The [`studio`] module holds the form state and request lifecycle as a reducer,
//! [`gemini`] maps requests onto the `generateContent` API, and [`views`] derives
//! what the front end shows from the current state.

pub mod commands;
pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod studio;
pub mod views;

pub use config::{GeminiConfig, StudioConfig};
pub use error::{GenerationError, Result, StudioError};
pub use gemini::{GeminiClient, ImageClient, ImageGenerator};
pub use models::*;
pub use studio::{Effect, Event, RequestState, Studio, StudioState};
pub use views::{render, StudioView};
