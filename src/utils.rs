use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// `{success, message}` body shared by every JSON reply.
#[derive(Serialize)]
pub struct Envelope<'a> {
    pub success: bool,
    pub message: &'a str,
}

pub fn json_error(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(Envelope {
        success: false,
        message,
    })
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
