//! Command dispatch.
//!
//! Results go to `out`; logs and the clipboard escape sequence go elsewhere,
//! so `bettercal link ... > link.txt` captures only the link.

use crate::cli::CliCommand;
use crate::error::BetterCalError;

use client_core::clipboard::{Clipboard, CopyOutcome};
use client_core::config::AppConfig;
use client_core::controller::LinkController;
use client_core::link::{GOOGLE, NO_SHORTHAND, PageOrigin};
use client_core::statistics::{UsageSummary, chart_config, parse_rows};
use client_core::verify_client::VerifyClient;

use common::ErrorLocation;

use std::io::Write;
use std::panic::Location;
use std::path::Path;

use log::{info, warn};

pub async fn run(
    command: CliCommand,
    config: &AppConfig,
    config_dir: &Path,
    out: &mut dyn Write,
    clipboard: &mut dyn Clipboard,
) -> Result<(), BetterCalError> {
    match command {
        CliCommand::Link {
            url,
            google,
            no_shorthand,
            copy,
            origin,
        } => {
            let origin = origin.unwrap_or_else(|| config.server.origin.clone());
            link(config, &origin, &url, google, no_shorthand, copy, out, clipboard).await
        }
        CliCommand::Chart { path } => {
            let rows = parse_rows(&std::fs::read_to_string(&path)?)?;
            let rendered = serde_json::to_string_pretty(&chart_config(&rows)).map_err(|e| {
                BetterCalError::App {
                    message: format!("Failed to render chart config: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;
            writeln!(out, "{rendered}")?;
            Ok(())
        }
        CliCommand::Summary { path } => {
            let rows = parse_rows(&std::fs::read_to_string(&path)?)?;
            let summary = UsageSummary::from_rows(&rows);
            writeln!(out, "{}", summary.headline())?;
            writeln!(out, "daily: {}", summary.daily_users)?;
            writeln!(out, "monthly: {}", summary.monthly_users)?;
            writeln!(out, "total: {}", summary.total_users)?;
            Ok(())
        }
        CliCommand::Config { init } => {
            if init {
                config.save(config_dir)?;
                writeln!(out, "Wrote {}", config_dir.join("config.json").display())?;
            } else {
                let rendered = serde_json::to_string_pretty(config).map_err(|e| {
                    BetterCalError::App {
                        message: format!("Failed to render config: {e}"),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;
                writeln!(out, "{rendered}")?;
            }
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn link(
    config: &AppConfig,
    origin: &str,
    url: &str,
    google: bool,
    no_shorthand: bool,
    copy: bool,
    out: &mut dyn Write,
    clipboard: &mut dyn Clipboard,
) -> Result<(), BetterCalError> {
    let page_origin = PageOrigin::parse(origin)?;
    let mut options = config.option_set()?;
    if google {
        options.set(GOOGLE.key, true)?;
    }
    if no_shorthand {
        options.set(NO_SHORTHAND.key, true)?;
    }

    let client = VerifyClient::with_timeout(page_origin.as_str(), config.request_timeout())?;
    let mut controller = LinkController::new(page_origin, options);

    controller.edit(url);
    controller.verify(&client).await;

    let view = controller.view();
    let Some(derived_url) = view.derived_url else {
        let message = view
            .error_text
            .unwrap_or_else(|| "Verification did not complete".to_string());
        return Err(BetterCalError::Verification {
            message,
            location: ErrorLocation::from(Location::caller()),
        });
    };

    writeln!(out, "{derived_url}")?;

    if copy {
        match controller.copy(clipboard) {
            CopyOutcome::Copied => info!("Link copied to clipboard"),
            CopyOutcome::Failed(reason) => warn!("Could not copy link: {reason}"),
            CopyOutcome::Skipped => {}
        }
    }

    Ok(())
}
