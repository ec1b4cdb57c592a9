use crate::domain::DocumentRoot;
use actix_files::NamedFile;
use actix_web::{get, web::Data};

#[get("/")]
pub async fn home(root: Data<DocumentRoot>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(root.entry_document()).await?)
}
