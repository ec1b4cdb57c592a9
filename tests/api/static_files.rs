use crate::helpers::*;
use portfolio::domain::ENTRY_DOCUMENT;
use reqwest::header;

#[tokio::test]
async fn the_root_path_serves_the_entry_document() {
    // Arrange
    let app = TestApp::spawn().await;
    app.write_file(ENTRY_DOCUMENT, "<h1>Portfolio</h1>");
    app.write_file("index.html", "<h1>Not this one</h1>");

    // Act
    let response = app.get("/").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    assert_eq!(response.text().await.unwrap(), "<h1>Portfolio</h1>");
}

#[tokio::test]
async fn the_root_path_returns_a_404_without_an_entry_document() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let response = app.get("/").await;

    // Assert
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn files_under_the_document_root_are_served() {
    // Arrange
    let app = TestApp::spawn().await;
    app.write_file("styles.css", "body { margin: 0; }");

    // Act
    let response = app.get("/styles.css").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/css"));
    assert_eq!(response.text().await.unwrap(), "body { margin: 0; }");
}

#[tokio::test]
async fn missing_files_return_a_404() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let response = app.get("/Pt.jpg").await;

    // Assert
    assert_eq!(404, response.status().as_u16());
}
