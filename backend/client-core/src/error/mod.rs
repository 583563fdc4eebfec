pub mod clipboard;
pub mod config;
pub mod link;
pub mod statistics;
pub mod verify_client;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    VerifyClient(#[from] verify_client::VerifyClientError),

    #[error(transparent)]
    Link(#[from] link::LinkError),

    #[error(transparent)]
    Clipboard(#[from] clipboard::ClipboardError),

    #[error(transparent)]
    Statistics(#[from] statistics::StatisticsError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
