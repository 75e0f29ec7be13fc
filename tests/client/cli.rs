use std::process::{Command, Output};

use serde_json::Value;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

use crate::helpers::{mount_response, sample_response, unreachable_url};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn run_imagefetch(args: &[&str], api_url: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imagefetch"))
        .args(args)
        .env("IMAGEFETCH_API_URL", api_url)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to run imagefetch")
}

async fn run_imagefetch_async(args: Vec<String>, api_url: String) -> Output {
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_imagefetch(&args, &api_url)
    })
    .await
    .expect("CLI task panicked")
}

#[test]
fn example_prints_request_json() {
    let output = run_imagefetch(&["example"], "http://127.0.0.1:9");

    assert!(
        output.status.success(),
        "example should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let request: Value = serde_json::from_slice(&output.stdout).expect("Should output JSON");
    assert_eq!(request["itemName"], "MacBook Pro");
    assert_eq!(request["optionName"], "16-inch");
    assert_eq!(request["imageUrl"], "https://via.placeholder.com/600x400.png");
    assert_eq!(request["salesUrl"], "https://www.apple.com/kr/macbook-pro/");
    assert_eq!(request["salesChannel"], "NAVER");
}

#[test]
fn fetch_without_item_name_fails_validation() {
    let output = run_imagefetch(&["fetch"], &unreachable_url());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Item name is required"), "stderr: {stderr}");
}

#[test]
fn fetch_against_unreachable_backend_reports_connectivity() {
    let output = run_imagefetch(&["fetch", "--item-name", "Chair"], &unreachable_url());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot connect to server"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_prints_cards_as_json() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(200).set_body_json(sample_response()),
    )
    .await;

    let output = run_imagefetch_async(
        args(&["fetch", "--item-name", "MacBook", "--json"]),
        server.uri(),
    )
    .await;

    assert!(
        output.status.success(),
        "fetch should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let results: Value = serde_json::from_slice(&output.stdout).expect("Should output JSON");
    assert_eq!(results["total_loading_time_ms"], 1830);
    let cards = results["cards"].as_array().expect("cards array");
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0]["number"], 1);
    assert_eq!(cards[0]["file_size"], "2 KB");
    assert_eq!(cards[1]["resolution"], "unknown");
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_writes_html_page() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(200).set_body_json(sample_response()),
    )
    .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("results.html");
    let html_arg = path.display().to_string();

    let output = run_imagefetch_async(
        args(&["fetch", "--item-name", "MacBook", "--html", &html_arg]),
        server.uri(),
    )
    .await;
    assert!(
        output.status.success(),
        "fetch should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#1 [Direct URL] https://cdn.example.com/macbook-front.png"));

    let html = std::fs::read_to_string(&path).expect("HTML file written");
    assert_eq!(html.matches("class=\"image-card\"").count(), 3);
    assert!(html.contains("<title>MacBook - imagefetch</title>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_reports_server_error_message() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(404).set_body_string("not here"),
    )
    .await;

    let output =
        run_imagefetch_async(args(&["fetch", "--item-name", "Chair"]), server.uri()).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("API endpoint not found"), "stderr: {stderr}");
}

#[test]
fn copy_rejects_card_zero() {
    let output = run_imagefetch(
        &["fetch", "--item-name", "Chair", "--copy", "0"],
        &unreachable_url(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--copy"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn copy_reports_feedback_for_card() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(200).set_body_json(sample_response()),
    )
    .await;

    let output = run_imagefetch_async(
        args(&["fetch", "--item-name", "MacBook", "--copy", "2"]),
        server.uri(),
    )
    .await;

    assert!(
        output.status.success(),
        "fetch should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("#2: Copied!"), "stderr: {stderr}");
    assert!(stderr.contains("\x1b]52;c;"), "stderr: {stderr}");
}
