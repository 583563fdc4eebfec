use crate::link::encode_component;

/// **VALUE**: Verifies query values are escaped with URI component rules.
///
/// **WHY THIS MATTERS**: Calendar clients compare feed URLs byte for byte. If the
/// encoding drifts (e.g. `+` for space), users end up with duplicate subscriptions.
///
/// **BUG THIS CATCHES**: Would catch switching to form encoding or forgetting to
/// un-escape the `!*'()` characters that URI components keep literal.
#[test]
fn given_special_characters_when_encoded_then_matches_uri_component_rules() {
    assert_eq!(encode_component("abc123"), "abc123");
    assert_eq!(encode_component("a b"), "a%20b");
    assert_eq!(encode_component("a+b=c&d"), "a%2Bb%3Dc%26d");
    assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(encode_component("/?#"), "%2F%3F%23");
    assert_eq!(encode_component("ü"), "%C3%BC");
}

#[test]
fn given_already_escaped_text_when_encoded_then_percent_sign_is_escaped() {
    assert_eq!(encode_component("%21"), "%2521");
    assert_eq!(encode_component("%28x%29"), "%2528x%2529");
}
