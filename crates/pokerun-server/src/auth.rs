//! Caller identity.
//!
//! Authentication happens upstream. The identity provider's session layer
//! forwards the signed-in player's id in the [`PLAYER_HEADER`] header, and
//! handlers that act on behalf of a player take a [`CurrentPlayer`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use pokerun_types::PlayerId;
use uuid::Uuid;

use crate::error::ApiError;

/// Header carrying the caller's player id.
pub const PLAYER_HEADER: &str = "x-player-id";

/// The authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentPlayer(pub PlayerId);

/// Parse a header value into a player id.
pub fn parse_player_id(raw: &str) -> Option<PlayerId> {
    Uuid::parse_str(raw.trim()).ok().map(PlayerId::from)
}

impl<S: Send + Sync> FromRequestParts<S> for CurrentPlayer {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(PLAYER_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_player_id)
            .map(Self)
            .ok_or(ApiError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hyphenated_uuid() {
        let id = PlayerId::new();
        assert_eq!(parse_player_id(&format!(" {id} ")), Some(id));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_player_id(""), None);
        assert_eq!(parse_player_id("player-one"), None);
    }
}
