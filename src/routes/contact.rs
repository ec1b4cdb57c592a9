use crate::{
    domain::{ContactForm, ContactSubmission},
    email_client::EmailClient,
    utils,
};
use actix_web::{
    http::StatusCode,
    post,
    web::{Bytes, Data},
    HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use anyhow::Context;
use serde::Serialize;
use std::fmt::Debug;

const SENT_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
const DEMO_MESSAGE: &str =
    "Thank you for your message! I will get back to you soon. (Demo mode)";

#[derive(Serialize)]
struct ContactReply {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    demo: Option<bool>,
}

/// Accepts a JSON or form-encoded submission and forwards it to the owner mailbox.
///
/// Without provider credentials the submission is acknowledged in demo mode and
/// nothing leaves the process.
#[post("/api/contact")]
#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip_all,
    fields(
        submitter_name = tracing::field::Empty,
        submitter_email = tracing::field::Empty,
    )
)]
pub async fn submit_contact(
    req: HttpRequest,
    body: Bytes,
    email_client: Data<Option<EmailClient>>,
) -> Result<HttpResponse, ContactError> {
    let form = parse_form(&req, &body);
    let submission: ContactSubmission =
        form.try_into().map_err(ContactError::ValidationError)?;

    tracing::Span::current()
        .record("submitter_name", tracing::field::display(&submission.name))
        .record("submitter_email", tracing::field::display(&submission.email));
    tracing::info!(subject = %submission.subject, "Contact form submission received");

    let Some(email_client) = email_client.get_ref().as_ref() else {
        tracing::info!("Email is not configured, simulating success");
        return Ok(HttpResponse::Ok().json(ContactReply {
            success: true,
            message: DEMO_MESSAGE,
            demo: Some(true),
        }));
    };

    send_notification(email_client, &submission)
        .await
        .context("Failed to send the contact notification to the owner mailbox")
        .map_err(ContactError::DispatchError)?;
    tracing::info!("Contact notification sent");

    Ok(HttpResponse::Ok().json(ContactReply {
        success: true,
        message: SENT_MESSAGE,
        demo: None,
    }))
}

/// Reads the body as JSON when declared so, as a urlencoded form otherwise.
/// An unreadable body counts as a submission with every field missing.
fn parse_form(req: &HttpRequest, body: &[u8]) -> ContactForm {
    let parsed = if is_json(req) {
        serde_json::from_slice(body).map_err(anyhow::Error::from)
    } else {
        serde_urlencoded::from_bytes(body).map_err(anyhow::Error::from)
    };

    parsed.unwrap_or_else(|e| {
        tracing::warn!(error.message = %e, "Failed to parse the contact form body");
        ContactForm::default()
    })
}

/// `application/json` and any `application/*+json`, in any letter case.
fn is_json(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(essence)) => {
            essence.type_() == mime::APPLICATION
                && (essence.subtype() == mime::JSON || essence.suffix() == Some(mime::JSON))
        }
        _ => false,
    }
}

#[tracing::instrument(name = "Sending the contact notification", skip_all)]
async fn send_notification(
    email_client: &EmailClient,
    submission: &ContactSubmission,
) -> Result<(), reqwest::Error> {
    email_client
        .send_email(
            email_client.sender(),
            &submission.subject_line(),
            &submission.html_body(),
            &submission.text_body(),
        )
        .await
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("All fields are required")]
    ValidationError(String),
    #[error("Failed to send message. Please try again later.")]
    DispatchError(#[source] anyhow::Error),
}

impl Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::DispatchError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ContactError::ValidationError(reason) => {
                tracing::warn!(reason = %reason, "Rejected an incomplete contact form");
            }
            ContactError::DispatchError(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to relay a contact form submission",
                );
            }
        }
        utils::json_error(self.status_code(), &self.to_string())
    }
}
