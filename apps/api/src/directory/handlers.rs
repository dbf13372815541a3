use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::directory::grouping::{group, member_total, GroupingOptions};
use crate::directory::normalize::normalize;
use crate::directory::render::render_groups_html;
use crate::directory::states::{all_states, is_valid_code, StateEntry};
use crate::directory::text::canonical_city_list;
use crate::errors::AppError;
use crate::models::business::{CanonicalBusinessRecord, CityGroup};
use crate::models::Envelope;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    pub state: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CitiesQuery {
    pub state: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GroupedResponse {
    pub ok: bool,
    pub data: Vec<CityGroup>,
    pub total: usize,
}

/// GET /api/public/states
pub async fn handle_states() -> Json<Envelope<Vec<StateEntry>>> {
    Json(Envelope::new(all_states()))
}

/// GET /api/public/cities?state=XX
///
/// Distinct city names for a state, canonicalized with the same title-case
/// function the row normalizer uses.
pub async fn handle_cities(
    State(state): State<AppState>,
    Query(params): Query<CitiesQuery>,
) -> Result<Json<Envelope<Vec<String>>>, AppError> {
    let code = require_state_code(params.state.as_deref())?;
    let raw = state.supabase.fetch_cities(&code).await?;
    Ok(Json(Envelope::new(canonical_city_list(raw))))
}

/// GET /api/public/hiring?state=XX&city=Name
///
/// The flat variant: fetch, normalize each row, no grouping.
pub async fn handle_hiring(
    State(state): State<AppState>,
    Query(params): Query<DirectoryQuery>,
) -> Result<Json<Envelope<Vec<CanonicalBusinessRecord>>>, AppError> {
    let state_code = state_filter(&params)?;
    let records = fetch_normalized(&state, state_code.as_deref(), params.city.as_deref()).await?;
    Ok(Json(Envelope::new(records)))
}

/// GET /api/public/hiring/grouped?state=XX&city=Name
///
/// Fetch + normalize + group. `total` always equals the fetched row count.
pub async fn handle_hiring_grouped(
    State(state): State<AppState>,
    Query(params): Query<DirectoryQuery>,
) -> Result<Json<GroupedResponse>, AppError> {
    let state_code = state_filter(&params)?;
    let records = fetch_normalized(&state, state_code.as_deref(), params.city.as_deref()).await?;
    let groups = group(records, &grouping_options(state_code.as_deref()));
    let total = member_total(&groups);
    Ok(Json(GroupedResponse {
        ok: true,
        data: groups,
        total,
    }))
}

/// GET /api/public/hiring/html?state=XX&city=Name
///
/// The same pipeline rendered as an escaped HTML fragment, ready for direct
/// insertion into the results pane.
pub async fn handle_hiring_html(
    State(state): State<AppState>,
    Query(params): Query<DirectoryQuery>,
) -> Result<Html<String>, AppError> {
    let state_code = state_filter(&params)?;
    let records = fetch_normalized(&state, state_code.as_deref(), params.city.as_deref()).await?;
    let groups = group(records, &grouping_options(state_code.as_deref()));
    Ok(Html(render_groups_html(&groups)))
}

async fn fetch_normalized(
    state: &AppState,
    state_code: Option<&str>,
    city: Option<&str>,
) -> Result<Vec<CanonicalBusinessRecord>, AppError> {
    let rows = state.supabase.fetch_hiring(state_code, city).await?;
    Ok(rows.iter().map(normalize).collect())
}

/// Optional state filter: absent/blank means "all states"; anything else must
/// be a known code and is canonicalized to uppercase, since that is how the
/// upstream column stores codes and the exact-match query is case-sensitive.
fn state_filter(params: &DirectoryQuery) -> Result<Option<String>, AppError> {
    let code = params.state.as_deref().map(str::trim).unwrap_or_default();
    if code.is_empty() {
        return Ok(None);
    }
    if !is_valid_code(code) {
        return Err(AppError::Validation(format!("Unknown state code '{code}'.")));
    }
    Ok(Some(code.to_uppercase()))
}

/// State-level sorting is a no-op once the caller fixed the state filter.
fn grouping_options(state_code: Option<&str>) -> GroupingOptions {
    if state_code.is_some() {
        GroupingOptions::state_filtered()
    } else {
        GroupingOptions::default()
    }
}

fn require_state_code(value: Option<&str>) -> Result<String, AppError> {
    let code = value.map(str::trim).unwrap_or_default();
    if code.is_empty() {
        return Err(AppError::Validation(
            "Query parameter 'state' is required.".to_string(),
        ));
    }
    if !is_valid_code(code) {
        return Err(AppError::Validation(format!("Unknown state code '{code}'.")));
    }
    Ok(code.to_uppercase())
}
