mod config;
mod directory;
mod errors;
mod mailer;
mod models;
mod requests;
mod routes;
mod state;
mod supabase;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::mailer::ResendClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::supabase::SupabaseClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobAppID API v{}", env!("CARGO_PKG_VERSION"));

    // Upstream data source (read-only PostgREST view)
    let supabase = SupabaseClient::new(
        &config.supabase_url,
        config.supabase_service_role_key.clone(),
    );
    info!("Supabase client initialized");

    // Outbound email relay
    let mailer = ResendClient::new(config.resend_api_key.clone());
    info!("Resend client initialized");

    let state = AppState {
        supabase,
        mailer,
        config: config.clone(),
    };

    // Public directory: wide-open CORS is intentional, matching the static
    // front-end deployments that call this API cross-origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
