//! Derived calendar link construction.
//!
//! A verified TISS calendar URL carries a personal `token` and a `locale`.
//! This module pulls both out and re-roots them on the BetterCal origin,
//! appending one flag per enabled option.

pub mod encoding;
pub mod normalize;
pub mod options;
pub mod source;

pub use encoding::encode_component;
pub use normalize::normalize_source_input;
pub use options::{BUILTIN_OPTIONS, GOOGLE, LinkOption, NO_SHORTHAND, OptionSet};
pub use source::{PERSONAL_CALENDAR_PATH, PageOrigin, VerifiedSource, derive_url};
