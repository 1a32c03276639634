//! Pure view models derived from [`StudioState`], plus a plain-text renderer.

pub mod panels;
pub mod result;

pub use panels::{
    config_panel_view, submit_button_view, upload_view, ConfigPanelView, OptionView,
    SubmitButtonView, UploadView,
};
pub use result::{error_banner_view, result_pane_view, ErrorBannerView, ResultPaneView};

use crate::studio::StudioState;
use colored::*;

pub const PRODUCT_NAME: &str = "NanoBanana Studio";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioView {
    pub model: String,
    pub upload: UploadView,
    pub config: ConfigPanelView,
    pub submit: SubmitButtonView,
    pub result: ResultPaneView,
    pub error: Option<ErrorBannerView>,
}

impl StudioView {
    pub fn from_state(state: &StudioState, model: &str) -> Self {
        Self {
            model: model.to_string(),
            upload: upload_view(state),
            config: config_panel_view(state),
            submit: submit_button_view(state),
            result: result_pane_view(state),
            error: error_banner_view(state),
        }
    }
}

fn paint(text: &str, use_colors: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if use_colors {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Renders the whole studio as terminal text.
pub fn render(view: &StudioView, use_colors: bool) -> String {
    let mut out = Vec::new();

    out.push(format!(
        "{}  [{}]",
        paint(PRODUCT_NAME, use_colors, |s| s.yellow().bold()),
        view.model
    ));

    out.push(String::new());
    out.push("Source Image (Optional)".to_string());
    match &view.upload {
        UploadView::Empty { hint } => out.push(format!("  {}", hint)),
        UploadView::Loaded {
            mime_type,
            size_bytes,
            caption,
            ..
        } => out.push(format!("  {} ({}, {} bytes)", caption, mime_type, size_bytes)),
    }

    out.push(String::new());
    out.push(format!("{}:", view.config.prompt_label));
    if view.config.prompt.trim().is_empty() {
        out.push(format!(
            "  {}",
            paint(view.config.prompt_placeholder, use_colors, |s| s.bright_black())
        ));
    } else {
        out.push(format!("  {}", view.config.prompt));
    }

    let style = view
        .config
        .styles
        .iter()
        .find(|option| option.selected)
        .map(|option| option.label)
        .unwrap_or_default();
    out.push(format!("Artistic Style: {}", style));

    let ratios: Vec<String> = view
        .config
        .aspect_ratios
        .iter()
        .map(|option| {
            if option.selected {
                paint(&format!("[{}]", option.label), use_colors, |s| s.yellow().bold())
            } else {
                format!(" {} ", option.label)
            }
        })
        .collect();
    out.push(format!("Aspect Ratio: {}", ratios.join(" ")));

    out.push(String::new());
    let button = format!("< {} >", view.submit.label);
    out.push(if view.submit.disabled {
        paint(&button, use_colors, |s| s.bright_black())
    } else {
        paint(&button, use_colors, |s| s.green().bold())
    });

    if let Some(error) = &view.error {
        out.push(paint(&format!("! {}", error.message), use_colors, |s| s.red()));
    }

    out.push(String::new());
    out.push("Result".to_string());
    match &view.result {
        ResultPaneView::Loading { message } | ResultPaneView::Empty { message } => {
            out.push(format!("  {}", message))
        }
        ResultPaneView::Image {
            data_url,
            badge,
            caption_title,
            prompt_used,
            download_label,
        } => {
            out.push(format!(
                "  {} ({} bytes encoded)",
                paint(badge, use_colors, |s| s.green()),
                data_url.len()
            ));
            out.push(format!("  {}: {}", caption_title, prompt_used));
            out.push(format!("  {}: type `save`", download_label));
        }
    }

    out.join("\n")
}
