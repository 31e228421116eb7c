//! Error types for the Pokerun HTTP API.
//!
//! [`ApiError`] unifies domain and request failures into a single enum
//! that converts into an Axum response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pokerun_roster::RosterError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A roster, capture, progress or admin operation failed.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// The request carried no usable `x-player-id` header.
    #[error("missing or invalid player identity")]
    Unauthenticated,

    /// A path or query parameter could not be parsed.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    /// HTTP status and machine-readable kind for this error.
    pub const fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Unauthenticated => (StatusCode::UNAUTHORIZED, "unauthenticated"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Self::Roster(err) => match err {
                RosterError::InvalidSlot(_) => (StatusCode::BAD_REQUEST, "invalid_slot"),
                RosterError::MissingField(_) => (StatusCode::BAD_REQUEST, "missing_field"),
                RosterError::IneligibleCreature { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "ineligible_creature")
                }
                RosterError::DuplicateInRoster { .. } => (StatusCode::CONFLICT, "duplicate_in_roster"),
                RosterError::CaptureNotFound(_) => (StatusCode::NOT_FOUND, "capture_not_found"),
                RosterError::ProfileNotFound(_) => (StatusCode::NOT_FOUND, "profile_not_found"),
                RosterError::UnknownGame(_) => (StatusCode::NOT_FOUND, "unknown_game"),
                RosterError::Forbidden { .. } => (StatusCode::FORBIDDEN, "forbidden"),
                RosterError::NoActiveGame => (StatusCode::UNPROCESSABLE_ENTITY, "no_active_game"),
                RosterError::InvalidRoute { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_route"),
                RosterError::UnknownAvatar(_) => (StatusCode::UNPROCESSABLE_ENTITY, "unknown_avatar"),
                RosterError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
                RosterError::Store(_) => (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable"),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.classify();
        if let Self::Roster(err) = &self {
            if !err.is_validation() {
                tracing::warn!(error = %err, status = status.as_u16(), "request failed");
            }
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "kind": kind,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pokerun_roster::StoreError;
    use pokerun_types::{CaptureId, SlotNumber};

    use super::*;

    fn status_of(err: RosterError) -> StatusCode {
        ApiError::from(err).classify().0
    }

    #[test]
    fn validation_statuses() {
        assert_eq!(status_of(RosterError::MissingField("nickname")), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(RosterError::IneligibleCreature {
                creature: String::from("Mew")
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(RosterError::DuplicateInRoster {
                creature: String::from("Pikachu"),
                slot: SlotNumber::new(1).unwrap(),
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(RosterError::CaptureNotFound(CaptureId(9))), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(RosterError::Forbidden { action: "update_rules" }),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn infrastructure_statuses() {
        assert_eq!(
            status_of(RosterError::Timeout {
                operation: "list_captures",
                timeout_ms: 6000
            }),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status_of(RosterError::Store(StoreError::Unavailable(String::from("down")))),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(ApiError::Unauthenticated.classify().0, StatusCode::UNAUTHORIZED);
    }
}
