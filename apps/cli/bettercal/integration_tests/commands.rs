use bettercal::cli::CliCommand;
use bettercal::commands::run;
use bettercal::error::BetterCalError;
use bettercal::terminal_clipboard::{TerminalClipboard, osc52_sequence};

use client_core::config::AppConfig;

use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SOURCE: &str = "https://tiss.example/cal?token=abc123&locale=en";

fn link_command(url: &str, origin: &str) -> CliCommand {
    CliCommand::Link {
        url: url.to_string(),
        google: true,
        no_shorthand: false,
        copy: true,
        origin: Some(origin.to_string()),
    }
}

/// **VALUE**: End-to-end `bettercal link`: verify, print, copy.
#[tokio::test]
async fn given_accepted_url_when_link_run_then_link_printed_and_copied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/verify"))
        .and(query_param("url", SOURCE))
        .respond_with(ResponseTemplate::new(200).set_body_string("Ok"))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();
    let mut clipboard = TerminalClipboard::new(Vec::new());

    run(
        link_command(&format!("{SOURCE} Download"), &server.uri()),
        &AppConfig::default(),
        dir.path(),
        &mut out,
        &mut clipboard,
    )
    .await
    .unwrap();

    let expected = format!("{}/personal.ics?token=abc123&locale=en&google", server.uri());
    assert_eq!(String::from_utf8(out).unwrap(), format!("{expected}\n"));
    assert_eq!(
        String::from_utf8(clipboard.into_inner()).unwrap(),
        osc52_sequence(&expected)
    );
}

#[tokio::test]
async fn given_rejected_url_when_link_run_then_verification_error_and_nothing_copied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/verify"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("The url must point to the TISS calendar"),
        )
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();
    let mut clipboard = TerminalClipboard::new(Vec::new());

    let result = run(
        link_command("https://example.com", &server.uri()),
        &AppConfig::default(),
        dir.path(),
        &mut out,
        &mut clipboard,
    )
    .await;

    match result {
        Err(BetterCalError::Verification { message, .. }) => {
            assert_eq!(message, "🔥 The url must point to the TISS calendar");
        }
        other => panic!("Expected Verification error, got {:?}", other),
    }
    assert!(out.is_empty());
    assert!(clipboard.into_inner().is_empty());
}

#[tokio::test]
async fn given_rows_file_when_chart_run_then_chart_config_printed() {
    let dir = TempDir::new().unwrap();
    let rows_path = dir.path().join("rows.json");
    std::fs::write(&rows_path, r#"[["2023-07-17", 1, 2, 3]]"#).unwrap();
    let mut out = Vec::new();
    let mut clipboard = TerminalClipboard::new(Vec::new());

    run(
        CliCommand::Chart { path: rows_path },
        &AppConfig::default(),
        dir.path(),
        &mut out,
        &mut clipboard,
    )
    .await
    .unwrap();

    let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(printed["data"]["labels"][0], "2023-07-17");
    assert_eq!(printed["data"]["datasets"][1]["data"][0], 2);
}

#[tokio::test]
async fn given_rows_file_when_summary_run_then_headline_printed() {
    let dir = TempDir::new().unwrap();
    let rows_path = dir.path().join("rows.json");
    std::fs::write(&rows_path, r#"[["2023-07-17", 1, 2, 3], ["2023-07-18", 4, 5, 6]]"#).unwrap();
    let mut out = Vec::new();
    let mut clipboard = TerminalClipboard::new(Vec::new());

    run(
        CliCommand::Summary { path: rows_path },
        &AppConfig::default(),
        dir.path(),
        &mut out,
        &mut clipboard,
    )
    .await
    .unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.starts_with("Used by 6 students\n"));
    assert!(printed.contains("monthly: 5"));
}

#[tokio::test]
async fn given_missing_rows_file_when_chart_run_then_app_error() {
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();
    let mut clipboard = TerminalClipboard::new(Vec::new());

    let result = run(
        CliCommand::Chart {
            path: dir.path().join("missing.json"),
        },
        &AppConfig::default(),
        dir.path(),
        &mut out,
        &mut clipboard,
    )
    .await;

    assert!(matches!(result, Err(BetterCalError::App { .. })));
}

#[tokio::test]
async fn given_init_flag_when_config_run_then_config_file_written() {
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();
    let mut clipboard = TerminalClipboard::new(Vec::new());

    run(
        CliCommand::Config { init: true },
        &AppConfig::default(),
        dir.path(),
        &mut out,
        &mut clipboard,
    )
    .await
    .unwrap();

    assert!(dir.path().join("config.json").exists());
    assert_eq!(AppConfig::load(dir.path()).unwrap(), AppConfig::default());
}
