//! Type-safe identifier wrappers.
//!
//! Players are keyed by the UUID the identity provider issues. Every other
//! table uses a `bigserial` primary key, so those identifiers wrap `i64`.
//! Keeping them as distinct types prevents passing a route id where a
//! capture id is expected.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around a `bigserial` row id.
macro_rules! define_serial_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(#[ts(type = "number")] pub i64);

        impl $name {
            /// Return the inner row id.
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

/// Unique identifier for a player, issued by the identity provider.
///
/// The identity provider owns this value; the run tracker never mints
/// player ids outside of tests and local development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Create a fresh random identifier (tests, local development).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// First six characters of the hyphenated id, used for display
    /// fallbacks when a player has not chosen a name.
    pub fn short(&self) -> String {
        self.0.to_string().chars().take(6).collect()
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<PlayerId> for Uuid {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

define_serial_id! {
    /// Unique identifier for a capture record.
    CaptureId
}

define_serial_id! {
    /// Unique identifier for a team slot row.
    TeamSlotId
}

define_serial_id! {
    /// Unique identifier for a game (region) in the lookup data.
    GameId
}

define_serial_id! {
    /// Unique identifier for a route within a game.
    RouteId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&CaptureId(42)).ok();
        assert_eq!(json.as_deref(), Some("42"));
        let back: Result<RouteId, _> = serde_json::from_str("7");
        assert_eq!(back.ok(), Some(RouteId(7)));
    }

    #[test]
    fn player_id_short_takes_six_chars() {
        let id = PlayerId(Uuid::nil());
        assert_eq!(id.short(), "000000");
    }

    #[test]
    fn player_id_display_matches_uuid() {
        let id = PlayerId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}
