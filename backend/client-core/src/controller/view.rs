//! Pure mapping from controller state to what the page shows.

use crate::controller::state::VerificationState;
use crate::link::{NO_SHORTHAND, OptionSet, PageOrigin};

/// Prefix on every displayed error message.
pub const ERROR_MARKER: &str = "🔥 ";

pub const SHORTHAND_PREVIEW_TITLE: &str = "EP1 VU";
pub const FULL_NAME_PREVIEW_TITLE: &str = "Einführung in die Programmierung 1 VU";

/// Sample event shown next to the options so users see what a flag changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    pub title: &'static str,
    pub lecture_name_visible: bool,
}

impl Preview {
    pub fn for_options(options: &OptionSet) -> Self {
        if options.is_enabled(NO_SHORTHAND.key) {
            Self {
                title: FULL_NAME_PREVIEW_TITLE,
                lecture_name_visible: false,
            }
        } else {
            Self {
                title: SHORTHAND_PREVIEW_TITLE,
                lecture_name_visible: true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub derived_url: Option<String>,
    pub placeholder_visible: bool,
    pub error_text: Option<String>,
    pub copy_enabled: bool,
    pub import_tip_visible: bool,
    pub copy_feedback_visible: bool,
    pub preview: Preview,
}

pub fn render(
    state: &VerificationState,
    options: &OptionSet,
    origin: &PageOrigin,
    copied: bool,
) -> View {
    let preview = Preview::for_options(options);

    match state {
        VerificationState::Verified(source) => View {
            derived_url: Some(source.derive(origin, options)),
            placeholder_visible: false,
            error_text: None,
            copy_enabled: true,
            import_tip_visible: true,
            copy_feedback_visible: copied,
            preview,
        },
        VerificationState::Error(message) => View {
            error_text: Some(format!("{ERROR_MARKER}{message}")),
            ..hidden_output(preview)
        },
        VerificationState::Disabled => hidden_output(preview),
    }
}

fn hidden_output(preview: Preview) -> View {
    View {
        derived_url: None,
        placeholder_visible: true,
        error_text: None,
        copy_enabled: false,
        import_tip_visible: false,
        copy_feedback_visible: false,
        preview,
    }
}
