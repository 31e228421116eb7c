//! REST API endpoint handlers.
//!
//! Handlers are generic over the [`RosterStore`](pokerun_roster::RosterStore)
//! behind [`AppState`](crate::state::AppState). Routes under `/api/me` act
//! on behalf of the [`CurrentPlayer`](crate::auth::CurrentPlayer).
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Liveness |
//! | `GET` | `/api/players` | All profiles |
//! | `GET`/`PUT` | `/api/me` | Own profile / register or rename |
//! | `PUT` | `/api/me/avatar` | Pick a profile avatar |
//! | `GET`/`POST` | `/api/me/captures` | Own captures / record one |
//! | `PATCH`/`DELETE` | `/api/me/captures/{id}` | Change status / delete |
//! | `GET` | `/api/me/team` | Own team |
//! | `GET` | `/api/me/team/eligible` | Captures offerable for a slot |
//! | `PUT`/`DELETE` | `/api/me/team/{slot}` | Assign / clear a slot |
//! | `GET`/`PUT` | `/api/me/progress` | Own badges / save badges |
//! | `GET` | `/api/ranking` | Badge ranking |
//! | `GET` | `/api/teams` | Team board |
//! | `GET` | `/api/captures` | Capture board |
//! | `GET`/`PUT` | `/api/rules` | Rules document |
//! | `GET`/`PUT` | `/api/run` | Active game |
//! | `GET` | `/api/games` | Games |
//! | `GET` | `/api/routes` | Routes |
//! | `GET` | `/api/routes/offerable` | Routes of the active game |
//! | `GET` | `/api/species/sprite` | Sprite for a species name |
//! | `GET` | `/api/species/search` | Species name suggestions |

pub mod captures;
pub mod players;
pub mod progress;
pub mod run;
pub mod species;
pub mod team;

use axum::Json;
use axum::response::IntoResponse;

use crate::error::ApiError;

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Parse a numeric path segment.
pub(crate) fn parse_path_id(raw: &str, what: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ApiError::BadRequest(format!("invalid {what} '{raw}': {e}")))
}
