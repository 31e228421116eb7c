//! Profile endpoints.

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use pokerun_roster::RosterStore;
use serde::Deserialize;

use crate::auth::CurrentPlayer;
use crate::error::ApiError;
use crate::state::AppState;

/// Body of `PUT /api/me`.
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    /// Name shown on the boards.
    pub display_name: String,
}

/// Body of `PUT /api/me/avatar`.
#[derive(Debug, Deserialize)]
pub struct AvatarBody {
    /// Key from the avatar catalog.
    pub avatar_key: String,
}

/// List every player, sorted by display name.
pub async fn list_players<S: RosterStore>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, ApiError> {
    let players = state.roster.players().await?;
    Ok(Json(serde_json::json!({
        "count": players.len(),
        "players": players,
    })))
}

/// The caller's profile.
pub async fn get_me<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.profile(actor).await?))
}

/// Create the caller's profile or change its display name.
pub async fn put_me<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
    Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.register_profile(actor, &body.display_name).await?))
}

/// Pick the caller's profile avatar.
pub async fn put_avatar<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
    Json(body): Json<AvatarBody>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.update_avatar(actor, &body.avatar_key).await?))
}
