//! Capture endpoints: the caller's own captures and the shared board.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use pokerun_roster::{NewCapture, RosterStore};
use pokerun_types::{CaptureId, CaptureStatus};
use serde::Deserialize;

use crate::auth::CurrentPlayer;
use crate::error::ApiError;
use crate::handlers::parse_path_id;
use crate::state::AppState;

/// Body of `PATCH /api/me/captures/{id}`.
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    /// New status.
    pub status: CaptureStatus,
}

/// Query parameters for `GET /api/captures`.
#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    /// Only show captures in this status: `alive`, `dead` or
    /// `not_captured`. Absent or `all` shows everything.
    pub status: Option<String>,
}

fn parse_status_filter(raw: Option<&str>) -> Result<Option<CaptureStatus>, ApiError> {
    match raw.map(str::trim) {
        None | Some("" | "all") => Ok(None),
        Some(other) => CaptureStatus::parse(other)
            .map(Some)
            .ok_or_else(|| ApiError::BadRequest(format!("unknown status filter '{other}'"))),
    }
}

/// The caller's captures, newest first.
pub async fn list_mine<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
) -> Result<impl IntoResponse, ApiError> {
    let captures = state.roster.captures(actor).await?;
    Ok(Json(serde_json::json!({
        "count": captures.len(),
        "captures": captures,
    })))
}

/// Record a capture on one of the active game's routes.
pub async fn create<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
    Json(body): Json<NewCapture>,
) -> Result<impl IntoResponse, ApiError> {
    let capture = state.roster.record_capture(actor, body).await?;
    Ok((StatusCode::CREATED, Json(capture)))
}

/// Change a capture's status; the response lists any slots that were
/// cleared as a result.
pub async fn update_status<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> Result<impl IntoResponse, ApiError> {
    let id = CaptureId(parse_path_id(&id, "capture id")?);
    Ok(Json(state.roster.set_capture_status(actor, id, body.status).await?))
}

/// Delete a capture and clear it from the team.
pub async fn delete<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = CaptureId(parse_path_id(&id, "capture id")?);
    Ok(Json(state.roster.delete_capture(actor, id).await?))
}

/// Every player's captures, grouped per player.
pub async fn board<S: RosterStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<BoardQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = parse_status_filter(params.status.as_deref())?;
    Ok(Json(state.roster.capture_board(filter).await?))
}
