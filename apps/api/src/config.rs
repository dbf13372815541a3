use anyhow::{Context, Result};

const DEFAULT_EMAIL_TO: &str = "requestjobappid@gmail.com";
const DEFAULT_EMAIL_FROM: &str = "JobAppID <noreply@jobappid.com>";

/// Application configuration loaded from environment variables.
/// Missing required credentials fail at startup, never per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_service_role_key: String,
    pub resend_api_key: String,
    pub email_to: String,
    pub email_from: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            supabase_url: require_env("SUPABASE_URL")?,
            supabase_service_role_key: require_env("SUPABASE_SERVICE_ROLE_KEY")?,
            resend_api_key: require_env("RESEND_API_KEY")?,
            email_to: std::env::var("EMAIL_TO").unwrap_or_else(|_| DEFAULT_EMAIL_TO.to_string()),
            email_from: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| DEFAULT_EMAIL_FROM.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}
