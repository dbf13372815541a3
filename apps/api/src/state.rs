use crate::config::Config;
use crate::mailer::ResendClient;
use crate::supabase::SupabaseClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub supabase: SupabaseClient,
    pub mailer: ResendClient,
    pub config: Config,
}
