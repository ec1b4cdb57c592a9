mod contact_submission;
mod document_root;

pub use contact_submission::{ContactForm, ContactSubmission};
pub use document_root::{
    Attachment, DocumentRoot, ENTRY_DOCUMENT, EXPECTED_FILES, RESUME_DOWNLOAD_NAME, RESUME_FILE,
};
