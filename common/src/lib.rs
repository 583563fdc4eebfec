//! Shared leaf types for BetterCal.
//!
//! This crate holds the small value types every other crate leans on:
//! error locations, HTTP status codes and secret-bearing strings. It has
//! no business logic of its own.
//!
//! ## Architecture
//!
//! - **common** (this crate): Leaf value types
//! - **client-core**: Link derivation, verification and statistics
//! - **bettercal**: Command-line application wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;
