use crate::{
    domain::{Attachment, DocumentRoot},
    utils,
};
use actix_files::{file_extension_to_mime, NamedFile};
use actix_web::{
    body::SizedStream,
    get,
    http::{
        header::{ContentDisposition, ContentType, DispositionParam, DispositionType},
        StatusCode,
    },
    web::Data,
    HttpRequest, HttpResponse, ResponseError,
};
use futures::{stream, StreamExt, TryStreamExt};
use std::{fmt::Debug, io};
use tokio::fs::{self, File};
use tokio_util::io::ReaderStream;

#[get("/download-resume")]
#[tracing::instrument(name = "Streaming the résumé", skip_all)]
pub async fn download_resume(root: Data<DocumentRoot>) -> Result<HttpResponse, DownloadError> {
    stream_attachment(&root.resume()).await
}

#[get("/api/resume")]
#[tracing::instrument(name = "Sending the résumé", skip_all)]
pub async fn resume(
    req: HttpRequest,
    root: Data<DocumentRoot>,
) -> Result<HttpResponse, DownloadError> {
    send_attachment(&req, &root.resume()).await
}

/// Streams the file by hand with a `Content-Length` taken from its size on disk.
///
/// The first chunk is read before the headers are built, so a file that cannot be
/// read at all still gets the 500 envelope. Past that point a read failure can only
/// cut the body short: it is logged and the client sees a truncated download.
pub async fn stream_attachment(attachment: &Attachment) -> Result<HttpResponse, DownloadError> {
    ensure_regular_file(attachment).await?;

    let file = File::open(&attachment.path).await?;
    let size = file.metadata().await?.len();
    tracing::info!(path = %attachment.path.display(), size, "Attachment found, streaming");

    let mut chunks = ReaderStream::new(file);
    let first = chunks.try_next().await.map_err(DownloadError::StreamError)?;
    let body = stream::iter(first.map(Ok::<_, io::Error>))
        .chain(chunks)
        .inspect_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Attachment stream failed after the headers were sent",
            );
        });

    Ok(HttpResponse::Ok()
        .insert_header(ContentType(file_extension_to_mime(attachment.extension())))
        .insert_header(content_disposition(attachment))
        .body(SizedStream::new(size, body)))
}

/// Hands the transfer over to `NamedFile`, which also answers range and
/// conditional requests.
pub async fn send_attachment(
    req: &HttpRequest,
    attachment: &Attachment,
) -> Result<HttpResponse, DownloadError> {
    ensure_regular_file(attachment).await?;

    let file = NamedFile::open_async(&attachment.path).await?;
    tracing::info!(path = %attachment.path.display(), "Attachment found, sending");

    Ok(file
        .set_content_type(file_extension_to_mime(attachment.extension()))
        .set_content_disposition(content_disposition(attachment))
        .into_response(req))
}

/// Anything at the path that is not a regular file cannot be read as one.
async fn ensure_regular_file(attachment: &Attachment) -> Result<(), DownloadError> {
    match fs::metadata(&attachment.path).await.map_err(DownloadError::from) {
        Ok(metadata) if metadata.is_file() => Ok(()),
        Ok(_) => Err(DownloadError::StreamError(io::Error::other(format!(
            "{} is not a regular file",
            attachment.path.display()
        )))),
        Err(DownloadError::NotFound) => {
            tracing::warn!(path = %attachment.path.display(), "Attachment not found");
            Err(DownloadError::NotFound)
        }
        Err(e) => Err(e),
    }
}

fn content_disposition(attachment: &Attachment) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(attachment.download_name.clone())],
    }
}

#[derive(thiserror::Error)]
pub enum DownloadError {
    #[error("Resume file not found")]
    NotFound,
    #[error("Error downloading resume")]
    StreamError(#[source] io::Error),
}

impl From<io::Error> for DownloadError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => DownloadError::NotFound,
            _ => DownloadError::StreamError(e),
        }
    }
}

impl Debug for DownloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

impl ResponseError for DownloadError {
    fn status_code(&self) -> StatusCode {
        match self {
            DownloadError::NotFound => StatusCode::NOT_FOUND,
            DownloadError::StreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let DownloadError::StreamError(e) = self {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to start the attachment transfer",
            );
        }
        utils::json_error(self.status_code(), &self.to_string())
    }
}
