//! Error types for the roster domain layer.
//!
//! Validation failures are returned before any write happens, so a
//! rejected operation never leaves partial state behind. Store failures and
//! timeouts are surfaced as-is; nothing in this crate retries.

use pokerun_types::{CaptureId, GameId, PlayerId, RouteId, SlotNumber, SlotOutOfRange};

/// Failures reported by a [`RosterStore`](crate::store::RosterStore)
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached or rejected the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A row that must exist (a singleton, a freshly written row) is missing.
    #[error("row not found: {0}")]
    NotFound(String),

    /// A stored row could not be mapped onto a domain value.
    #[error("corrupt row: {0}")]
    Corrupt(String),
}

/// Errors that can occur in roster, capture, progress and admin operations.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Slot number outside `1..=6`.
    #[error("invalid slot: {0}")]
    InvalidSlot(#[from] SlotOutOfRange),

    /// A required text field was empty after trimming.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The creature is not among the owner's alive captures.
    #[error("{creature} is not an alive capture of this player")]
    IneligibleCreature {
        /// Creature name as supplied by the caller.
        creature: String,
    },

    /// The creature already occupies another slot of the same team.
    #[error("{creature} is already on the team in slot {slot}")]
    DuplicateInRoster {
        /// Creature name as supplied by the caller.
        creature: String,
        /// The slot it currently occupies.
        slot: SlotNumber,
    },

    /// The capture does not exist or belongs to another player.
    #[error("capture not found: {0}")]
    CaptureNotFound(CaptureId),

    /// The caller has no profile yet.
    #[error("profile not found: {0}")]
    ProfileNotFound(PlayerId),

    /// The caller lacks the admin role.
    #[error("{action} requires the admin role")]
    Forbidden {
        /// What the caller attempted.
        action: &'static str,
    },

    /// Captures cannot be recorded until an admin picks the active game.
    #[error("no active game has been selected")]
    NoActiveGame,

    /// The route does not exist or does not belong to the active game.
    #[error("route {route_id} is not offered for game {game_id}")]
    InvalidRoute {
        /// Route supplied by the caller.
        route_id: RouteId,
        /// The currently active game.
        game_id: GameId,
    },

    /// The game id is not in the lookup data.
    #[error("unknown game: {0}")]
    UnknownGame(GameId),

    /// The avatar key is not in the avatar catalog.
    #[error("unknown avatar: {0}")]
    UnknownAvatar(String),

    /// A store call exceeded the configured bound.
    #[error("{operation} timed out after {timeout_ms} ms")]
    Timeout {
        /// Store operation that timed out.
        operation: &'static str,
        /// The bound that was exceeded.
        timeout_ms: u64,
    },

    /// The store reported a failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RosterError {
    /// Whether this error is a rejected request rather than an
    /// infrastructure fault.
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Timeout { .. } | Self::Store(_))
    }
}
