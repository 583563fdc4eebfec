use crate::error::link::LinkError;
use crate::link::{GOOGLE, NO_SHORTHAND, OptionSet, PageOrigin, VerifiedSource, derive_url};

const SOURCE: &str =
    "https://tiss.tuwien.ac.at/events/rest/calendar/personal?token=abc123&locale=de";

fn origin() -> PageOrigin {
    PageOrigin::parse("https://bettercal.example").unwrap()
}

/// **VALUE**: Verifies the base shape of the derived URL with no options.
///
/// **WHY THIS MATTERS**: This is the URL users paste into their calendar app.
/// Any deviation breaks every subscription created from it.
#[test]
fn given_source_with_token_and_locale_when_derived_without_options_then_base_url_returned() {
    let derived = derive_url(&origin(), SOURCE, &OptionSet::builtin()).unwrap();

    assert_eq!(
        derived,
        "https://bettercal.example/personal.ics?token=abc123&locale=de"
    );
}

#[test]
fn given_google_enabled_when_derived_then_google_flag_appended_once() {
    let options = OptionSet::with_enabled(&[GOOGLE, NO_SHORTHAND], ["google"]).unwrap();

    let derived = derive_url(&origin(), SOURCE, &options).unwrap();

    assert!(derived.ends_with("&locale=de&google"));
    assert_eq!(derived.matches("google").count(), 1);
}

#[test]
fn given_no_shorthand_enabled_when_derived_then_noshorthand_flag_appended() {
    let options = OptionSet::with_enabled(&[GOOGLE, NO_SHORTHAND], ["no_shorthand"]).unwrap();

    let derived = derive_url(&origin(), SOURCE, &options).unwrap();

    assert!(derived.ends_with("&locale=de&noshorthand"));
}

#[test]
fn given_both_options_when_derived_then_flags_in_fixed_order() {
    let mut options = OptionSet::builtin();
    options.set(NO_SHORTHAND.key, true).unwrap();
    options.set(GOOGLE.key, true).unwrap();

    let derived = derive_url(&origin(), SOURCE, &options).unwrap();

    assert_eq!(
        derived,
        "https://bettercal.example/personal.ics?token=abc123&locale=de&google&noshorthand"
    );
}

/// **VALUE**: Verifies derivation is a pure function of its inputs.
#[test]
fn given_same_inputs_when_derived_repeatedly_then_identical_output() {
    let options = OptionSet::with_enabled(&[GOOGLE, NO_SHORTHAND], ["google"]).unwrap();

    let first = derive_url(&origin(), SOURCE, &options).unwrap();
    for _ in 0..5 {
        assert_eq!(derive_url(&origin(), SOURCE, &options).unwrap(), first);
    }
}

/// **VALUE**: Verifies missing parameters render as the literal `null`.
///
/// **WHY THIS MATTERS**: The server then replies with a clear "invalid token"
/// instead of the page silently producing a URL with an empty parameter.
#[test]
fn given_source_without_parameters_when_derived_then_null_placeholders_used() {
    let derived = derive_url(&origin(), "https://example.com/cal", &OptionSet::builtin()).unwrap();

    assert_eq!(
        derived,
        "https://bettercal.example/personal.ics?token=null&locale=null"
    );
}

#[test]
fn given_encoded_parameters_when_derived_then_values_reencoded_as_components() {
    let source = "https://example.com/cal?locale=en&token=a%2Bb+c%2Fd";

    let derived = derive_url(&origin(), source, &OptionSet::builtin()).unwrap();

    assert_eq!(
        derived,
        "https://bettercal.example/personal.ics?token=a%2Bb%20c%2Fd&locale=en"
    );
}

#[test]
fn given_repeated_token_when_parsed_then_first_value_wins() {
    let source = VerifiedSource::parse("https://example.com/cal?token=first&token=second").unwrap();

    assert_eq!(source.token().map(|t| t.as_str()), Some("first"));
    assert_eq!(source.locale(), None);
}

#[test]
fn given_unparseable_source_when_derived_then_invalid_source_error() {
    let result = derive_url(&origin(), "not a url", &OptionSet::builtin());

    assert!(matches!(result, Err(LinkError::InvalidSourceUrl { .. })));
}

/// **BUG THIS CATCHES**: Would catch `Debug` output leaking the calendar token
/// through the raw URL field.
#[test]
fn given_verified_source_when_debug_formatted_then_token_not_shown() {
    let source = VerifiedSource::parse(SOURCE).unwrap();

    let debug = format!("{:?}", source);

    assert!(!debug.contains("abc123"));
    assert!(debug.contains("de"));
}

#[test]
fn given_url_with_path_and_port_when_parsed_as_origin_then_only_origin_kept() {
    let origin = PageOrigin::parse("http://localhost:8080/some/page?x=1").unwrap();

    assert_eq!(origin.as_str(), "http://localhost:8080");
}

#[test]
fn given_default_port_when_parsed_as_origin_then_port_omitted() {
    let origin = PageOrigin::parse("https://bettercal.example:443/").unwrap();

    assert_eq!(origin.to_string(), "https://bettercal.example");
}

#[test]
fn given_opaque_origin_when_parsed_then_invalid_origin_error() {
    assert!(matches!(
        PageOrigin::parse("data:text/plain,hello"),
        Err(LinkError::InvalidOrigin { .. })
    ));
    assert!(matches!(
        PageOrigin::parse("nope"),
        Err(LinkError::InvalidOrigin { .. })
    ));
}
