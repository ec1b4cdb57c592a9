use htmlescape::encode_minimal;
use serde::Deserialize;

/// Raw contact form payload. Every field may be missing.
#[derive(Deserialize, Default, Debug)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A contact form submission with all four fields present and non-empty.
///
/// Nothing beyond presence is checked: whitespace-only values, malformed
/// addresses and long messages are all accepted.
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn parse(form: ContactForm) -> Result<Self, String> {
        let required = |field: Option<String>, label: &str| {
            field
                .filter(|v| !v.is_empty())
                .ok_or_else(|| format!("The {label} field is missing."))
        };

        Ok(Self {
            name: required(form.name, "name")?,
            email: required(form.email, "email")?,
            subject: required(form.subject, "subject")?,
            message: required(form.message, "message")?,
        })
    }

    pub fn subject_line(&self) -> String {
        format!("Portfolio Contact: {}", self.subject)
    }

    pub fn html_body(&self) -> String {
        let message = encode_minimal(&self.message).replace('\n', "<br>");
        format!(
            "<h2>New Contact Form Submission</h2>\
            <p><strong>Name:</strong> {}</p>\
            <p><strong>Email:</strong> {}</p>\
            <p><strong>Subject:</strong> {}</p>\
            <p><strong>Message:</strong></p>\
            <p>{}</p>",
            encode_minimal(&self.name),
            encode_minimal(&self.email),
            encode_minimal(&self.subject),
            message,
        )
    }

    pub fn text_body(&self) -> String {
        format!(
            "New Contact Form Submission\n\n\
            Name: {}\nEmail: {}\nSubject: {}\n\n{}",
            self.name, self.email, self.subject, self.message,
        )
    }
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = String;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        Self::parse(form)
    }
}
