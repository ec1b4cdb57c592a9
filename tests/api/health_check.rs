use crate::helpers::*;
use serde_json::Value;

#[tokio::test]
async fn health_check_works() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let response = app.get("/api/health").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Server is healthy");
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    for service in ["contact", "resume_download", "static_files"] {
        assert_eq!(body["services"][service], "active");
    }
}

#[tokio::test]
async fn health_check_works_in_demo_mode_with_an_empty_root() {
    // Arrange
    let app = TestApp::spawn_in_demo_mode().await;

    // Act
    let response = app.get("/api/health").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}
