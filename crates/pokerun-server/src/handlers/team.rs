//! Team endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use pokerun_roster::{RosterError, RosterStore};
use pokerun_types::SlotNumber;
use serde::Deserialize;

use crate::auth::CurrentPlayer;
use crate::error::ApiError;
use crate::handlers::parse_path_id;
use crate::state::AppState;

/// Body of `PUT /api/me/team/{slot}`.
#[derive(Debug, Deserialize)]
pub struct AssignBody {
    /// Creature to place; must be one of the caller's alive captures.
    pub creature_name: String,
}

/// Query parameters for `GET /api/me/team/eligible`.
#[derive(Debug, Deserialize)]
pub struct EligibleQuery {
    /// Slot being edited. Its current occupant stays eligible.
    pub slot: Option<i64>,
}

fn parse_slot(raw: &str) -> Result<SlotNumber, ApiError> {
    let n = parse_path_id(raw, "slot")?;
    Ok(SlotNumber::new(n).map_err(RosterError::from)?)
}

/// The caller's filled slots, in slot order.
pub async fn get_team<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.team(actor).await?))
}

/// Captures that may be placed in the given slot.
pub async fn eligible<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
    Query(params): Query<EligibleQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let slot = params
        .slot
        .map(SlotNumber::new)
        .transpose()
        .map_err(RosterError::from)?;
    Ok(Json(state.roster.list_eligible(actor, slot).await?))
}

/// Place a creature in a slot.
pub async fn assign<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
    Path(slot): Path<String>,
    Json(body): Json<AssignBody>,
) -> Result<impl IntoResponse, ApiError> {
    let slot = parse_slot(&slot)?;
    Ok(Json(state.roster.assign_slot(actor, slot, &body.creature_name).await?))
}

/// Empty a slot. Clearing an empty slot succeeds with `cleared: null`.
pub async fn clear<S: RosterStore>(
    State(state): State<AppState<S>>,
    CurrentPlayer(actor): CurrentPlayer,
    Path(slot): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let slot = parse_slot(&slot)?;
    let cleared = state.roster.clear_slot(actor, slot).await?;
    Ok(Json(serde_json::json!({
        "slot": slot,
        "cleared": cleared,
    })))
}

/// Every player's team.
pub async fn team_board<S: RosterStore>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.roster.team_board().await?))
}
