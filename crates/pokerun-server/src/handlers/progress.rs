//! Badge progress and ranking endpoints.

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use pokerun_roster::RosterStore;
use pokerun_types::{BadgeCount, Progress};
use serde::Deserialize;

use crate::auth::CurrentPlayer;
use crate::error::ApiError;
use crate::state::AppState;

/// Body of `PUT /api/me/progress`.
#[derive(Debug, Deserialize)]
pub struct BadgesBody {
    /// Raw badge count; clamped to `0..=8` and truncated.
    pub badges: f64,
}

/// The caller's progress. A player who never saved has zero badges.
pub async fn get_mine<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
) -> Result<impl IntoResponse, ApiError> {
    let progress = state.roster.progress(actor).await?.unwrap_or(Progress {
        owner_id: actor,
        badges: BadgeCount::default(),
        updated_at: None,
    });
    Ok(Json(progress))
}

/// Save the caller's badge count.
pub async fn save<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
    Json(body): Json<BadgesBody>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.save_badges(actor, body.badges).await?))
}

/// Every player ranked by badges.
pub async fn ranking<S: RosterStore>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.ranking().await?))
}
