use crate::error::link::LinkError;

use common::ErrorLocation;

use std::panic::Location;

/// A boolean switch that appends a bare flag to the derived URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkOption {
    /// Stable identifier used by config files and the CLI.
    pub key: &'static str,
    /// Query-string flag appended when enabled.
    pub flag: &'static str,
    pub description: &'static str,
}

pub const GOOGLE: LinkOption = LinkOption {
    key: "google",
    flag: "google",
    description: "Tweak the feed for Google Calendar",
};

pub const NO_SHORTHAND: LinkOption = LinkOption {
    key: "no_shorthand",
    flag: "noshorthand",
    description: "Use full lecture names instead of abbreviations",
};

/// Options offered by the link page, in the order their flags are emitted.
pub const BUILTIN_OPTIONS: &[LinkOption] = &[GOOGLE, NO_SHORTHAND];

/// The declared option catalog plus which entries are switched on.
///
/// Flags always come out in declaration order, independent of the order
/// the switches were toggled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    declared: Vec<LinkOption>,
    enabled: Vec<bool>,
}

impl OptionSet {
    /// All options of `declared`, switched off.
    pub fn new(declared: &[LinkOption]) -> Self {
        Self {
            declared: declared.to_vec(),
            enabled: vec![false; declared.len()],
        }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_OPTIONS)
    }

    /// Catalog with the options named in `keys` switched on.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::UnknownOption`] for a key not in `declared`.
    #[track_caller]
    pub fn with_enabled<I, S>(declared: &[LinkOption], keys: I) -> Result<Self, LinkError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::new(declared);
        for key in keys {
            options.set(key.as_ref(), true)?;
        }
        Ok(options)
    }

    pub fn declared(&self) -> &[LinkOption] {
        &self.declared
    }

    /// Switch an option on or off.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::UnknownOption`] if `key` is not declared.
    #[track_caller]
    pub fn set(&mut self, key: &str, enabled: bool) -> Result<(), LinkError> {
        let index = self.index_of(key).ok_or_else(|| LinkError::UnknownOption {
            key: key.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        self.enabled[index] = enabled;
        Ok(())
    }

    pub fn is_enabled(&self, key: &str) -> bool {
        self.index_of(key).is_some_and(|index| self.enabled[index])
    }

    pub fn is_declared(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    /// Flags of the enabled options in declaration order.
    pub fn enabled_flags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.declared
            .iter()
            .zip(&self.enabled)
            .filter(|(_, enabled)| **enabled)
            .map(|(option, _)| option.flag)
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.declared.iter().position(|option| option.key == key)
    }
}

impl Default for OptionSet {
    fn default() -> Self {
        Self::builtin()
    }
}
