//! Rules, active game and lookup data.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use pokerun_roster::RosterStore;
use pokerun_types::GameId;
use serde::Deserialize;

use crate::auth::CurrentPlayer;
use crate::error::ApiError;
use crate::state::AppState;

/// Body of `PUT /api/rules`.
#[derive(Debug, Deserialize)]
pub struct RulesBody {
    /// New rules text.
    pub content: String,
}

/// Body of `PUT /api/run`.
#[derive(Debug, Deserialize)]
pub struct RunBody {
    /// Game whose routes are offered for new captures.
    pub active_game_id: GameId,
}

/// Query parameters for `GET /api/routes`.
#[derive(Debug, Deserialize)]
pub struct RoutesQuery {
    /// Restrict to one game.
    pub game_id: Option<i64>,
}

/// The rules document.
pub async fn get_rules<S: RosterStore>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.rules().await?))
}

/// Replace the rules document. Admin only.
pub async fn put_rules<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
    Json(body): Json<RulesBody>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.update_rules(actor, &body.content).await?))
}

/// The run context.
pub async fn get_run<S: RosterStore>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.run_context().await?))
}

/// Switch the active game. Admin only.
pub async fn put_run<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
    Json(body): Json<RunBody>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.set_active_game(actor, body.active_game_id).await?))
}

/// Every game.
pub async fn list_games<S: RosterStore>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.games().await?))
}

/// Routes, optionally of one game.
pub async fn list_routes<S: RosterStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<RoutesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.routes(params.game_id.map(GameId)).await?))
}

/// Routes of the active game; empty when none is active.
pub async fn offerable_routes<S: RosterStore>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.offerable_routes().await?))
}
