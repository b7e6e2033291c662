use crate::app::{run, AppError};
use crate::cli::tests::fake_args;
use crate::loader::errors::LoadError;
use crate::loader::transport::DefaultTransport;
use crate::locations::errors::ParseError;
use crate::map::errors::RenderError;
use std::fs;
use tempfile::TempDir;

fn write_input(directory: &TempDir, body: &str) -> String {
    let path = directory.path().join("history.json");
    fs::write(&path, body).expect("Failed to write the input file.");
    path.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_run_writes_heatmap_page() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory.");
    let input = write_input(
        &directory,
        r#"{"locations": [
            {"latitudeE7": 377788014, "longitudeE7": -1224155326},
            {"latitudeE7": 377733334, "longitudeE7": 377788884}
        ]}"#,
    );
    let output = directory.path().join("heatmap.html");
    let args = fake_args(&input, output.clone());

    let summary = run(&args, DefaultTransport::new())
        .await
        .expect("Pipeline failed.");

    assert_eq!(summary.points, 2);
    assert_eq!(summary.output, output);
    let html = fs::read_to_string(&output).expect("Output was not written.");
    assert!(html.contains(r#"const map = L.map("map");"#));
    assert!(html.contains("map.setView([37.7749,-122.4194], 11);"));
    assert!(html.contains("L.heatLayer([[37.7788014"));
}

#[tokio::test]
async fn test_run_surfaces_error_marker() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory.");
    let input = write_input(&directory, r#"{"error": "any error"}"#);
    let args = fake_args(&input, directory.path().join("heatmap.html"));

    let result = run(&args, DefaultTransport::new()).await;

    assert!(matches!(result, Err(AppError::Load(LoadError::Fetch { .. }))));
    assert!(!directory.path().join("heatmap.html").exists());
}

#[tokio::test]
async fn test_run_surfaces_malformed_input() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory.");
    let input = write_input(&directory, r#"{"key": "any content"}"#);
    let args = fake_args(&input, directory.path().join("heatmap.html"));

    let result = run(&args, DefaultTransport::new()).await;

    assert!(matches!(
        result,
        Err(AppError::Parse(ParseError::MalformedInput(_)))
    ));
}

#[tokio::test]
async fn test_run_gives_up_on_missing_file() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory.");
    let missing = directory.path().join("missing.json");
    let args = fake_args(&missing.to_string_lossy(), directory.path().join("heatmap.html"));

    let result = run(&args, DefaultTransport::new()).await;

    assert!(matches!(
        result,
        Err(AppError::Load(LoadError::Stalled { status: 404, .. }))
    ));
}

#[tokio::test]
async fn test_run_surfaces_render_error() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory.");
    let input = write_input(&directory, r#"{"locations": []}"#);
    let mut args = fake_args(&input, directory.path().join("heatmap.html"));
    args.container_id = String::from("not valid");

    let result = run(&args, DefaultTransport::new()).await;

    assert!(matches!(
        result,
        Err(AppError::Render(RenderError::InvalidContainerId(_)))
    ));
}
