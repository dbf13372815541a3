//! Supabase client — the single point of entry for all upstream data reads.
//!
//! The service owns no data. Everything it shows comes from the public
//! PostgREST view `business_hiring_public`, queried read-only with the
//! service-role key. No other module may talk to Supabase directly.

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Public view exposing hiring records for consumption by this service.
const PUBLIC_VIEW: &str = "business_hiring_public";
const SELECT_COLUMNS: &str = "business_id,business_name,state,city,zip,is_hiring,open_positions";
/// Server-side ordering so row order is stable before we ever touch it.
const ORDER: &str = "state.asc,city.asc,business_name.asc";

#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    rest_url: String,
    service_role_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, service_role_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            rest_url: format!("{}/rest/v1", base_url.trim_end_matches('/')),
            service_role_key,
        }
    }

    /// Fetches raw hiring rows, optionally filtered by state and city. Rows
    /// come back as loose JSON; the normalizer downstream deals with their
    /// shape.
    pub async fn fetch_hiring(
        &self,
        state: Option<&str>,
        city: Option<&str>,
    ) -> Result<Vec<Value>, SupabaseError> {
        let rows = self.get_rows(PUBLIC_VIEW, &hiring_query(state, city)).await?;
        debug!("Fetched {} hiring rows", rows.len());
        Ok(rows)
    }

    /// Fetches the city column for one state. Callers canonicalize and dedupe;
    /// PostgREST has no distinct, so duplicates are expected here.
    pub async fn fetch_cities(&self, state: &str) -> Result<Vec<String>, SupabaseError> {
        let query: Vec<(&str, String)> = vec![
            ("select", "city".to_string()),
            ("state", format!("eq.{state}")),
            ("order", "city.asc".to_string()),
        ];

        let rows = self.get_rows(PUBLIC_VIEW, &query).await?;
        Ok(rows
            .iter()
            .filter_map(|row| row.get("city").and_then(Value::as_str))
            .map(str::to_string)
            .collect())
    }

    async fn get_rows(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<Value>, SupabaseError> {
        let response = self
            .client
            .get(format!("{}/{table}", self.rest_url))
            .query(query)
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Array(rows)) => Ok(rows),
            Ok(other) => Err(SupabaseError::UnexpectedShape(format!(
                "expected a JSON array of rows, got {other}"
            ))),
            Err(e) => Err(SupabaseError::UnexpectedShape(format!(
                "response was not JSON: {e}"
            ))),
        }
    }
}

/// Query params for the hiring view. State codes are canonicalized by the
/// caller, so an exact `eq.` match is safe there; city values come from the
/// title-cased dropdown while the stored column has arbitrary casing, so the
/// city filter uses `ilike.` (no wildcards: a case-insensitive equality).
fn hiring_query(state: Option<&str>, city: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query: Vec<(&str, String)> = vec![
        ("select", SELECT_COLUMNS.to_string()),
        ("order", ORDER.to_string()),
    ];
    if let Some(state) = non_blank(state) {
        query.push(("state", format!("eq.{state}")));
    }
    if let Some(city) = non_blank(city) {
        query.push(("city", format!("ilike.{city}")));
    }
    query
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_filters_empty_and_whitespace() {
        assert_eq!(non_blank(Some(" TX ")), Some("TX"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_hiring_query_city_filter_is_case_insensitive() {
        // The dropdown hands back title-cased names ("Cedar Rapids") while
        // stored rows may be "cedar rapids"; ilike without wildcards matches
        // both without losing exactness.
        let query = hiring_query(Some("IA"), Some("Cedar Rapids"));
        assert!(query.contains(&("state", "eq.IA".to_string())));
        assert!(query.contains(&("city", "ilike.Cedar Rapids".to_string())));
    }

    #[test]
    fn test_hiring_query_omits_blank_filters() {
        let query = hiring_query(None, Some("  "));
        let keys: Vec<&str> = query.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["select", "order"]);
    }

    #[test]
    fn test_rest_url_strips_trailing_slashes() {
        let client = SupabaseClient::new("https://example.supabase.co///", "key".to_string());
        assert_eq!(client.rest_url, "https://example.supabase.co/rest/v1");
    }
}
