use crate::error::link::LinkError;
use crate::link::{BUILTIN_OPTIONS, GOOGLE, LinkOption, NO_SHORTHAND, OptionSet};

/// **VALUE**: Verifies flags come out in declaration order whatever the toggle order.
///
/// **WHY THIS MATTERS**: The derived URL must be deterministic for a given set of
/// options, otherwise the same choice yields different subscriptions.
#[test]
fn given_options_toggled_in_reverse_when_listing_flags_then_declaration_order_kept() {
    let mut options = OptionSet::builtin();

    options.set(NO_SHORTHAND.key, true).unwrap();
    options.set(GOOGLE.key, true).unwrap();

    let flags: Vec<_> = options.enabled_flags().collect();
    assert_eq!(flags, vec!["google", "noshorthand"]);
}

#[test]
fn given_fresh_option_set_when_listing_flags_then_none_enabled() {
    let options = OptionSet::default();

    assert_eq!(options.enabled_flags().count(), 0);
    assert_eq!(options.declared(), BUILTIN_OPTIONS);
}

#[test]
fn given_option_switched_off_again_when_listing_flags_then_flag_removed() {
    let mut options = OptionSet::builtin();
    options.set(GOOGLE.key, true).unwrap();

    options.set(GOOGLE.key, false).unwrap();

    assert!(!options.is_enabled(GOOGLE.key));
    assert_eq!(options.enabled_flags().count(), 0);
}

/// **BUG THIS CATCHES**: Would catch typos in config files being silently ignored.
#[test]
fn given_unknown_key_when_set_then_returns_unknown_option_error() {
    let mut options = OptionSet::builtin();

    let result = options.set("dark_mode", true);

    match result {
        Err(LinkError::UnknownOption { key, .. }) => assert_eq!(key, "dark_mode"),
        other => panic!("Expected UnknownOption, got {:?}", other),
    }
}

/// **VALUE**: Verifies a custom catalog works without touching derivation code.
#[test]
fn given_custom_catalog_when_built_with_enabled_keys_then_only_those_flags_emitted() {
    const HOLIDAYS: LinkOption = LinkOption {
        key: "holidays",
        flag: "holidays",
        description: "Include public holidays",
    };
    let catalog = [GOOGLE, HOLIDAYS, NO_SHORTHAND];

    let options = OptionSet::with_enabled(&catalog, ["no_shorthand", "holidays"]).unwrap();

    let flags: Vec<_> = options.enabled_flags().collect();
    assert_eq!(flags, vec!["holidays", "noshorthand"]);
    assert!(options.is_declared("holidays"));
}
