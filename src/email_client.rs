use anyhow::Context;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;

/// Client for the mail provider's HTTP API.
#[derive(Debug)]
pub struct EmailClient {
    client: Client,
    url: Url,
    sender: String,
    auth_token: SecretString,
}

impl EmailClient {
    pub fn new(
        base_url: &str,
        sender: String,
        auth_token: SecretString,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let url = Url::parse(base_url)
            .and_then(|base| base.join("email"))
            .with_context(|| format!("Invalid mail provider url: {base_url}"))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the mail provider http client")?;

        Ok(Self {
            client,
            url,
            sender,
            auth_token,
        })
    }

    /// The mailbox notifications are sent from.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<(), reqwest::Error> {
        let body = SendEmailRequest {
            from: &self.sender,
            to: recipient,
            subject,
            html_body,
            text_body,
        };

        self.client
            .post(self.url.clone())
            .header("X-Postmark-Server-Token", self.auth_token.expose_secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}
