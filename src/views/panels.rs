use crate::{
    models::{ArtStyle, AspectRatio},
    studio::StudioState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadView {
    Empty {
        hint: &'static str,
    },
    Loaded {
        mime_type: String,
        size_bytes: usize,
        caption: &'static str,
        clear_hint: &'static str,
    },
}

/// Size of the decoded payload, computed from the base64 length.
fn decoded_len(payload: &str) -> usize {
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    (payload.len() / 4 * 3).saturating_sub(padding)
}

pub fn upload_view(state: &StudioState) -> UploadView {
    match state.source_image() {
        None => UploadView::Empty {
            hint: "Click to upload an image to edit",
        },
        Some(image) => UploadView::Loaded {
            mime_type: image.mime_type().to_string(),
            size_bytes: decoded_len(image.payload()),
            caption: "Image Loaded",
            clear_hint: "Remove image",
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView<T> {
    pub value: T,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPanelView {
    pub prompt_label: &'static str,
    pub prompt_placeholder: &'static str,
    pub prompt: String,
    pub styles: Vec<OptionView<ArtStyle>>,
    pub aspect_ratios: Vec<OptionView<AspectRatio>>,
}

pub fn config_panel_view(state: &StudioState) -> ConfigPanelView {
    let (prompt_label, prompt_placeholder) = if state.is_edit_mode() {
        (
            "Instructions",
            "Describe how you want to change the image... (e.g., Make it look like a sketch)",
        )
    } else {
        (
            "Description",
            "Describe your imagination... (e.g., A futuristic city on Mars)",
        )
    };

    ConfigPanelView {
        prompt_label,
        prompt_placeholder,
        prompt: state.prompt().to_string(),
        styles: ArtStyle::ALL
            .into_iter()
            .map(|style| OptionView {
                value: style,
                label: style.label(),
                selected: style == state.style(),
            })
            .collect(),
        aspect_ratios: AspectRatio::ALL
            .into_iter()
            .map(|ratio| OptionView {
                value: ratio,
                label: ratio.as_str(),
                selected: ratio == state.aspect_ratio(),
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonView {
    pub label: &'static str,
    pub disabled: bool,
    pub busy: bool,
}

pub fn submit_button_view(state: &StudioState) -> SubmitButtonView {
    let busy = state.is_loading();
    let label = match (busy, state.is_edit_mode()) {
        (true, true) => "Editing...",
        (true, false) => "Generating...",
        (false, true) => "Generate Edit",
        (false, false) => "Generate Image",
    };
    SubmitButtonView {
        label,
        disabled: !state.can_submit(),
        busy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceImage;
    use crate::studio::{update, Event};

    fn with_image(state: &mut StudioState) {
        let image = SourceImage::from_data_url("data:image/jpeg;base64,YWJjZA==").unwrap();
        update(state, Event::SourceImageChanged(Some(image)));
    }

    #[test]
    fn test_upload_view_switches_on_source_image() {
        let mut state = StudioState::default();
        assert!(matches!(upload_view(&state), UploadView::Empty { .. }));

        with_image(&mut state);
        match upload_view(&state) {
            UploadView::Loaded {
                mime_type,
                size_bytes,
                ..
            } => {
                assert_eq!(mime_type, "image/jpeg");
                assert_eq!(size_bytes, 4);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_config_panel_marks_selection() {
        let mut state = StudioState::default();
        update(&mut state, Event::AspectRatioChanged(AspectRatio::Portrait));
        let panel = config_panel_view(&state);

        assert_eq!(panel.styles.len(), ArtStyle::ALL.len());
        assert_eq!(panel.aspect_ratios.len(), 5);
        let selected: Vec<_> = panel.aspect_ratios.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "9:16");
        assert!(panel
            .styles
            .iter()
            .any(|o| o.selected && o.value == ArtStyle::Photorealistic));
        assert_eq!(panel.prompt_label, "Description");

        with_image(&mut state);
        assert_eq!(config_panel_view(&state).prompt_label, "Instructions");
    }

    #[test]
    fn test_submit_button_states() {
        let mut state = StudioState::default();
        let button = submit_button_view(&state);
        assert_eq!(button.label, "Generate Image");
        assert!(button.disabled);

        update(&mut state, Event::PromptChanged("  ".into()));
        assert!(submit_button_view(&state).disabled);

        update(&mut state, Event::PromptChanged("A cat".into()));
        assert!(!submit_button_view(&state).disabled);

        with_image(&mut state);
        assert_eq!(submit_button_view(&state).label, "Generate Edit");

        update(&mut state, Event::Submit);
        let button = submit_button_view(&state);
        assert_eq!(button.label, "Editing...");
        assert!(button.disabled);
        assert!(button.busy);
    }
}
