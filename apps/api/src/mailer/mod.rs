//! Resend client — the single point of entry for outbound email.
//!
//! One request, one response: a failure is surfaced once to the caller as a
//! `MailerError`, never retried here.

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },
}

/// A fully composed outbound message.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    /// Set to the requester's address so the recipient can reply directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

#[derive(Clone)]
pub struct ResendClient {
    client: Client,
    api_key: String,
}

impl ResendClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    pub async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError> {
        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Email relayed: {}", email.subject);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_email_serializes_without_null_reply_to() {
        let email = OutboundEmail {
            from: "a@example.com".to_string(),
            to: vec!["b@example.com".to_string()],
            subject: "Hi".to_string(),
            html: "<p>Hi</p>".to_string(),
            reply_to: None,
        };
        let json = serde_json::to_string(&email).unwrap();
        assert!(!json.contains("reply_to"));
    }

    #[test]
    fn test_outbound_email_serializes_reply_to_when_set() {
        let email = OutboundEmail {
            from: "a@example.com".to_string(),
            to: vec!["b@example.com".to_string()],
            subject: "Hi".to_string(),
            html: "<p>Hi</p>".to_string(),
            reply_to: Some("c@example.com".to_string()),
        };
        let json = serde_json::to_string(&email).unwrap();
        assert!(json.contains("\"reply_to\":\"c@example.com\""));
    }
}
