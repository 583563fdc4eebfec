use crate::controller::{Preview, VerificationState, render};
use crate::controller::view::{FULL_NAME_PREVIEW_TITLE, SHORTHAND_PREVIEW_TITLE};
use crate::link::{NO_SHORTHAND, OptionSet, PageOrigin, VerifiedSource};

fn origin() -> PageOrigin {
    PageOrigin::parse("https://bettercal.example").unwrap()
}

/// **VALUE**: Verifies the disabled view hides every output affordance.
#[test]
fn given_disabled_state_when_rendered_then_placeholder_shown_and_copy_disabled() {
    let view = render(&VerificationState::Disabled, &OptionSet::builtin(), &origin(), false);

    assert_eq!(view.derived_url, None);
    assert!(view.placeholder_visible);
    assert_eq!(view.error_text, None);
    assert!(!view.copy_enabled);
    assert!(!view.import_tip_visible);
    assert!(!view.copy_feedback_visible);
}

#[test]
fn given_verified_state_when_rendered_then_link_and_tip_shown() {
    let source = VerifiedSource::parse("https://example.com/?token=t&locale=en").unwrap();

    let view = render(
        &VerificationState::Verified(source),
        &OptionSet::builtin(),
        &origin(),
        true,
    );

    assert_eq!(
        view.derived_url.as_deref(),
        Some("https://bettercal.example/personal.ics?token=t&locale=en")
    );
    assert!(!view.placeholder_visible);
    assert!(view.copy_enabled);
    assert!(view.import_tip_visible);
    assert!(view.copy_feedback_visible);
}

/// **VALUE**: Verifies errors carry the visual marker and keep output hidden.
#[test]
fn given_error_state_when_rendered_then_marked_error_text_and_no_link() {
    let state = VerificationState::Error("token expired".to_string());

    let view = render(&state, &OptionSet::builtin(), &origin(), true);

    assert_eq!(view.error_text.as_deref(), Some("🔥 token expired"));
    assert_eq!(view.derived_url, None);
    assert!(view.placeholder_visible);
    assert!(!view.copy_enabled);
    assert!(!view.copy_feedback_visible, "Feedback only applies to a shown link");
}

#[test]
fn given_no_shorthand_option_when_previewed_then_full_name_and_lecture_line_hidden() {
    let mut options = OptionSet::builtin();

    assert_eq!(
        Preview::for_options(&options),
        Preview {
            title: SHORTHAND_PREVIEW_TITLE,
            lecture_name_visible: true
        }
    );

    options.set(NO_SHORTHAND.key, true).unwrap();

    let preview = Preview::for_options(&options);
    assert_eq!(preview.title, FULL_NAME_PREVIEW_TITLE);
    assert!(!preview.lecture_name_visible);
}
