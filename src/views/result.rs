use crate::studio::StudioState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultPaneView {
    Loading {
        message: &'static str,
    },
    Empty {
        message: &'static str,
    },
    Image {
        data_url: String,
        badge: &'static str,
        caption_title: &'static str,
        prompt_used: String,
        download_label: &'static str,
    },
}

pub fn result_pane_view(state: &StudioState) -> ResultPaneView {
    if state.is_loading() {
        return ResultPaneView::Loading {
            message: "Dreaming up your image...",
        };
    }

    match state.result() {
        Some(result) => match &result.image_url {
            Some(data_url) => {
                let (badge, caption_title) = if state.is_edit_mode() {
                    ("Edit Complete", "Instructions Used")
                } else {
                    ("Generation Complete", "Prompt Used")
                };
                ResultPaneView::Image {
                    data_url: data_url.clone(),
                    badge,
                    caption_title,
                    prompt_used: result.prompt_used.clone(),
                    download_label: "Download Image",
                }
            }
            None => empty(),
        },
        None => empty(),
    }
}

fn empty() -> ResultPaneView {
    ResultPaneView::Empty {
        message: "Your creation will appear here",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBannerView {
    pub message: String,
}

/// Present only while the request state is `Failed`.
pub fn error_banner_view(state: &StudioState) -> Option<ErrorBannerView> {
    state.error().map(|message| ErrorBannerView {
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use crate::studio::{update, Event};

    #[test]
    fn test_result_pane_is_mutually_exclusive() {
        let mut state = StudioState::default();
        assert!(matches!(result_pane_view(&state), ResultPaneView::Empty { .. }));

        update(&mut state, Event::PromptChanged("A cat".into()));
        update(&mut state, Event::Submit);
        assert!(matches!(result_pane_view(&state), ResultPaneView::Loading { .. }));
        assert_eq!(error_banner_view(&state), None);

        update(
            &mut state,
            Event::GenerationSettled(Ok("data:image/png;base64,AAA=".into())),
        );
        match result_pane_view(&state) {
            ResultPaneView::Image {
                data_url,
                badge,
                caption_title,
                ..
            } => {
                assert_eq!(data_url, "data:image/png;base64,AAA=");
                assert_eq!(badge, "Generation Complete");
                assert_eq!(caption_title, "Prompt Used");
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_error_banner_only_when_failed() {
        let mut state = StudioState::default();
        assert_eq!(error_banner_view(&state), None);

        update(&mut state, Event::PromptChanged("A cat".into()));
        update(&mut state, Event::Submit);
        update(
            &mut state,
            Event::GenerationSettled(Err(GenerationError::new("Quota exceeded"))),
        );
        assert_eq!(
            error_banner_view(&state),
            Some(ErrorBannerView {
                message: "Quota exceeded".into()
            })
        );
        assert!(matches!(result_pane_view(&state), ResultPaneView::Empty { .. }));
    }
}
