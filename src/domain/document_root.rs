use std::{
    io,
    path::{Path, PathBuf},
};

/// Served at `/`.
pub const ENTRY_DOCUMENT: &str = "index2.html";
/// Résumé as stored on disk.
pub const RESUME_FILE: &str = "Aniket Ressume.docx";
/// Résumé as presented to the client.
pub const RESUME_DOWNLOAD_NAME: &str = "Aniket_Igade_Resume.docx";
/// Files reported by the file check endpoint.
pub const EXPECTED_FILES: [&str; 3] = [ENTRY_DOCUMENT, RESUME_FILE, "Pt.jpg"];

/// Absolute base directory every served file is resolved under.
#[derive(Debug, Clone)]
pub struct DocumentRoot(PathBuf);

impl DocumentRoot {
    /// Anchors `path` to the current working directory unless it is already absolute.
    /// `.` segments are dropped; symlinks are left alone.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        let root = std::path::absolute(path)?;
        Ok(Self(root))
    }

    pub fn resolve(&self, file_name: &str) -> PathBuf {
        self.0.join(file_name)
    }

    pub fn entry_document(&self) -> PathBuf {
        self.resolve(ENTRY_DOCUMENT)
    }

    pub fn resume(&self) -> Attachment {
        Attachment {
            path: self.resolve(RESUME_FILE),
            download_name: RESUME_DOWNLOAD_NAME.to_owned(),
        }
    }
}

impl AsRef<Path> for DocumentRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// A file sent to the client under a different name than the one it has on disk.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub path: PathBuf,
    pub download_name: String,
}

impl Attachment {
    pub fn extension(&self) -> &str {
        Path::new(&self.download_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
    }
}
