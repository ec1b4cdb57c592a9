use crate::email_client::EmailClient;
use config::{Config, File};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::{env, error::Error, path::PathBuf, time::Duration};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// Base directory for static files and the résumé document.
    /// Relative paths are resolved against the working directory.
    pub document_root: PathBuf,
}

#[derive(Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    /// Owner mailbox. Notifications are sent from and to this address.
    pub username: Option<String>,
    pub secret: Option<SecretString>,
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    /// Builds the provider client, or `None` when the credentials are missing
    /// and the contact form should run in demo mode.
    pub fn client(&self) -> anyhow::Result<Option<EmailClient>> {
        let username = self.username.as_deref().filter(|u| !u.is_empty());
        let secret = self
            .secret
            .as_ref()
            .filter(|s| !s.expose_secret().is_empty());

        match (username, secret) {
            (Some(username), Some(secret)) => {
                let client = EmailClient::new(
                    &self.base_url,
                    username.to_owned(),
                    secret.clone(),
                    self.timeout(),
                )?;
                Ok(Some(client))
            }
            _ => Ok(None),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

pub fn get() -> Result<Settings, Box<dyn Error>> {
    let config_path = env::current_dir()?.join("config");

    let app_env: Environment = env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()?;

    let settings = Config::builder()
        .add_source(File::from(config_path.join("Base.toml")))
        .add_source(File::from(config_path.join(app_env.file_name())))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .set_override_option("application.port", env::var("PORT").ok())?
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }

    fn file_name(&self) -> &'static str {
        match self {
            Self::Local => "Local.toml",
            Self::Production => "Production.toml",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl TryFrom<&str> for Environment {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. \
                Use either `local` or `production`.",
            )),
        }
    }
}
