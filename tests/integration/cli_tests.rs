//! Command-line tests for the `link-harvest` binary
//!
//! These run the built executable against wiremock pages and check what it
//! prints on stdout and how it exits.

use std::path::Path;
use std::process::Output;
use tempfile::TempDir;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Runs the binary directly (never through a proxy) with quiet logging
async fn run_harvest(input: &Path, output: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_link-harvest"))
        .arg("--input")
        .arg(input)
        .arg("--output")
        .arg(output)
        .arg("--direct")
        .arg("--quiet")
        .env_remove("LINK_HARVEST_PROXY")
        .output()
        .await
        .expect("Failed to run link-harvest")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_progress_and_summary_lines() {
    let server = MockServer::start().await;
    for route in ["/a", "/b"] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>ok</p>"))
            .mount(&server)
            .await;
    }

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("url.txt");
    let output = dir.path().join("data.json");
    let a = format!("{}/a", server.uri());
    let b = format!("{}/b", server.uri());
    std::fs::write(&input, format!("{}\n{}\n", a, b)).unwrap();

    let run = run_harvest(&input, &output).await;
    assert!(run.status.success(), "stderr: {}", String::from_utf8_lossy(&run.stderr));

    let lines = stdout_lines(&run);
    assert_eq!(lines.len(), 3, "stdout: {:?}", lines);

    let mut completed = lines[..2].to_vec();
    completed.sort();
    assert_eq!(
        completed,
        vec![format!("Completed scraping: {}", a), format!("Completed scraping: {}", b)]
    );
    assert_eq!(lines[2], "Successfully scraped 2 URLs");
    assert!(output.exists());
}

#[tokio::test]
async fn test_failed_fetch_still_reports_completion() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("url.txt");
    let output = dir.path().join("data.json");
    std::fs::write(&input, format!("{}\n", url)).unwrap();

    let run = run_harvest(&input, &output).await;
    assert!(run.status.success());
    assert_eq!(
        stdout_lines(&run),
        vec![
            format!("Completed scraping: {}", url),
            "Successfully scraped 1 URLs".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_missing_input_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("data.json");

    let run = run_harvest(&input, &output).await;
    assert!(!run.status.success());
    assert!(stdout_lines(&run).is_empty());
    assert!(!run.stderr.is_empty());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_empty_input_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("url.txt");
    let output = dir.path().join("data.json");
    std::fs::write(&input, "\n  \n").unwrap();

    let run = run_harvest(&input, &output).await;
    assert!(!run.status.success());
    assert!(stdout_lines(&run).is_empty());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unwritable_output_exits_without_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("url.txt");
    let output = dir.path().join("no-such-dir").join("data.json");
    std::fs::write(&input, format!("{}\n", server.uri())).unwrap();

    let run = run_harvest(&input, &output).await;
    assert!(!run.status.success());
    let lines = stdout_lines(&run);
    assert!(!lines.iter().any(|l| l.starts_with("Successfully scraped")));
}
