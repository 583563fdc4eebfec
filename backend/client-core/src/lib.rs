pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod link;
pub mod statistics;
pub mod verify_client;

#[cfg(test)]
mod tests;

pub const BETTERCAL_DEFAULT_HOSTNAME: &str = "127.0.0.1:5000";
pub const BETTERCAL_DEFAULT_ORIGIN: &str =
    const_format::concatcp!("http://", BETTERCAL_DEFAULT_HOSTNAME);
