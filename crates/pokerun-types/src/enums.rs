//! Enumeration types shared by the store, the domain layer and the API.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Capture status
// ---------------------------------------------------------------------------

/// In-run status of a capture.
///
/// Every transition between any two states is permitted. Only `Alive`
/// captures may occupy a team slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum CaptureStatus {
    /// Captured and still usable.
    Alive,
    /// Fainted for good.
    Dead,
    /// The encounter happened but the creature was not caught.
    NotCaptured,
}

impl CaptureStatus {
    /// The storage representation used in the `captures.status` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
            Self::NotCaptured => "not_captured",
        }
    }

    /// Parse the storage representation.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "alive" => Some(Self::Alive),
            "dead" => Some(Self::Dead),
            "not_captured" => Some(Self::NotCaptured),
            _ => None,
        }
    }

    /// Whether a capture in this status may be placed on the team.
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl core::fmt::Display for CaptureStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Player role
// ---------------------------------------------------------------------------

/// Permission level of a player profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Role {
    /// Regular participant.
    #[default]
    Player,
    /// May edit the rules document and switch the active game.
    Admin,
}

impl Role {
    /// The storage representation used in the `profiles.role` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Admin => "admin",
        }
    }

    /// Parse the storage representation.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "player" => Some(Self::Player),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}
