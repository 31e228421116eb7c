//! Species sprite and search endpoints.
//!
//! These never fail because of PokeAPI: an unreachable catalog yields a
//! placeholder sprite or an empty suggestion list.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use pokerun_roster::RosterStore;
use pokerun_species::DEFAULT_SEARCH_LIMIT;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Upper bound on `limit` for species search.
pub const MAX_SEARCH_LIMIT: usize = 50;

/// Query parameters for `GET /api/species/sprite`.
#[derive(Debug, Deserialize)]
pub struct SpriteQuery {
    /// Species name as typed by a player.
    pub name: Option<String>,
}

/// Query parameters for `GET /api/species/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring to look for.
    pub q: Option<String>,
    /// Maximum number of hits (default 10, at most 50).
    pub limit: Option<usize>,
}

/// Sprite for a species name.
pub async fn sprite<S: RosterStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<SpriteQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let name = params
        .name
        .ok_or_else(|| ApiError::BadRequest(String::from("missing query parameter 'name'")))?;
    Ok(Json(state.species.sprite(&name).await))
}

/// Species whose slug contains `q`.
pub async fn search<S: RosterStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let query = params.q.unwrap_or_default();
    let limit = params
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);
    let matches = state.species.search(&query, limit).await;
    Ok(Json(serde_json::json!({
        "count": matches.len(),
        "matches": matches,
    })))
}
