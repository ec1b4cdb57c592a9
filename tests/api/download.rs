use crate::helpers::*;
use portfolio::domain::{RESUME_DOWNLOAD_NAME, RESUME_FILE};
use reqwest::header;
use serde_json::Value;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Large enough to be sent in several chunks.
fn resume_contents() -> Vec<u8> {
    (0..200_000u32).map(|i| (i % 251) as u8).collect()
}

async fn assert_attachment_is_served(path: &str) {
    // Arrange
    let app = TestApp::spawn().await;
    let contents = resume_contents();
    app.write_file(RESUME_FILE, &contents);

    // Act
    let response = app.get(path).await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_owned();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains(RESUME_DOWNLOAD_NAME));
    assert_eq!(response.headers()[header::CONTENT_TYPE], DOCX_MIME);
    assert_eq!(Some(contents.len() as u64), response.content_length());

    let body = response.bytes().await.unwrap();
    assert_eq!(body.len(), contents.len());
    assert_eq!(body.as_ref(), contents.as_slice());
}

async fn assert_missing_attachment_is_a_404(path: &str) {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let response = app.get(path).await;

    // Assert
    assert_eq!(404, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Resume file not found");
}

async fn assert_unreadable_attachment_is_a_500(path: &str) {
    // Arrange
    let app = TestApp::spawn().await;
    std::fs::create_dir(app.document_root.path().join(RESUME_FILE)).unwrap();

    // Act
    let response = app.get(path).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Error downloading resume");
}

#[tokio::test]
async fn download_resume_streams_the_file_under_its_download_name() {
    assert_attachment_is_served("/download-resume").await;
}

#[tokio::test]
async fn download_resume_returns_a_404_when_the_file_is_missing() {
    assert_missing_attachment_is_a_404("/download-resume").await;
}

#[tokio::test]
async fn api_resume_sends_the_file_under_its_download_name() {
    assert_attachment_is_served("/api/resume").await;
}

#[tokio::test]
async fn api_resume_returns_a_404_when_the_file_is_missing() {
    assert_missing_attachment_is_a_404("/api/resume").await;
}

#[tokio::test]
async fn an_empty_resume_is_served_as_an_empty_attachment() {
    // Arrange
    let app = TestApp::spawn().await;
    app.write_file(RESUME_FILE, b"");

    // Act
    let response = app.get("/download-resume").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn download_resume_returns_a_500_when_the_resume_cannot_be_read() {
    assert_unreadable_attachment_is_a_500("/download-resume").await;
}

#[tokio::test]
async fn api_resume_returns_a_500_when_the_resume_cannot_be_read() {
    assert_unreadable_attachment_is_a_500("/api/resume").await;
}
