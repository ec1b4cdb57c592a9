use crate::domain::{DocumentRoot, EXPECTED_FILES};
use actix_web::{get, web::Data, HttpResponse};
use serde::Serialize;
use tokio::fs;

#[derive(Serialize)]
struct FileCheck {
    success: bool,
    files: Vec<FileStatus>,
}

#[derive(Serialize)]
struct FileStatus {
    file: &'static str,
    exists: bool,
    path: String,
}

/// Reports which of the expected site files are present under the document root.
#[get("/api/check-files")]
#[tracing::instrument(name = "Checking the expected site files", skip_all)]
pub async fn check_files(root: Data<DocumentRoot>) -> HttpResponse {
    let mut files = Vec::with_capacity(EXPECTED_FILES.len());
    for file in EXPECTED_FILES {
        let path = root.resolve(file);
        let exists = fs::try_exists(&path).await.unwrap_or(false);
        files.push(FileStatus {
            file,
            exists,
            path: path.display().to_string(),
        });
    }

    HttpResponse::Ok().json(FileCheck {
        success: true,
        files,
    })
}
