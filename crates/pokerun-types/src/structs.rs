//! Core entity structs for the run tracker.
//!
//! These mirror the logical tables: `profiles`, `captures`, `team_slots`,
//! `progress`, `rules`, `runs`, `games` and `routes`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{CaptureStatus, Role};
use crate::ids::{CaptureId, GameId, PlayerId, RouteId, TeamSlotId};
use crate::values::{BadgeCount, SlotNumber};

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A participant in the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Player {
    /// Identity-provider issued id.
    pub id: PlayerId,
    /// Name shown on boards; may be blank if never set.
    pub display_name: String,
    /// Permission level.
    pub role: Role,
    /// Chosen profile avatar (a key of the avatar catalog).
    pub avatar_key: Option<String>,
}

impl Player {
    /// Display name with a fallback for players who never set one.
    pub fn label(&self) -> String {
        let trimmed = self.display_name.trim();
        if trimmed.is_empty() {
            format!("Player {}", self.id.short())
        } else {
            trimmed.to_owned()
        }
    }

    /// Whether this player may edit the rules and the active game.
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

// ---------------------------------------------------------------------------
// Capture
// ---------------------------------------------------------------------------

/// A record of a player having encountered a creature on a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Capture {
    /// Row id.
    pub id: CaptureId,
    /// Player who made the capture.
    pub owner_id: PlayerId,
    /// Creature name as typed at creation (trimmed, casing preserved).
    pub creature_name: String,
    /// Display label chosen by the owner.
    pub nickname: String,
    /// Route where the encounter happened.
    pub route_id: Option<RouteId>,
    /// Route name copied at creation time.
    pub route_name: Option<String>,
    /// Game that was active when the capture was recorded.
    pub game_id: Option<GameId>,
    /// In-run status.
    pub status: CaptureStatus,
    /// Creation timestamp, also the tie-break for duplicate names.
    pub captured_at: DateTime<Utc>,
}

/// Values needed to insert a capture row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureDraft {
    /// Owner of the new capture.
    pub owner_id: PlayerId,
    /// Creature name, already trimmed.
    pub creature_name: String,
    /// Nickname, already trimmed.
    pub nickname: String,
    /// Initial status.
    pub status: CaptureStatus,
    /// Active game at creation time.
    pub game_id: GameId,
    /// Route of the encounter.
    pub route_id: RouteId,
    /// Route display name.
    pub route_name: String,
}

// ---------------------------------------------------------------------------
// Team slot
// ---------------------------------------------------------------------------

/// One filled position of a player's six-slot team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TeamSlot {
    /// Row id.
    pub id: TeamSlotId,
    /// Player who owns the team.
    pub owner_id: PlayerId,
    /// Position on the team.
    pub slot: SlotNumber,
    /// Creature name copied from the assigned capture.
    pub creature_name: String,
    /// Nickname copied from the assigned capture at assignment time.
    pub nickname: Option<String>,
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Badge progress of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Progress {
    /// Player the progress belongs to.
    pub owner_id: PlayerId,
    /// Badges earned so far.
    pub badges: BadgeCount,
    /// When the count was last saved.
    pub updated_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Singletons
// ---------------------------------------------------------------------------

/// The shared rules document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RuleDocument {
    /// Free-form text.
    pub content: String,
    /// Last edit time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// The global switch selecting which game's routes are offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RunContext {
    /// The active game, if an admin has chosen one.
    pub active_game_id: Option<GameId>,
    /// Last change time.
    pub updated_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Lookup data
// ---------------------------------------------------------------------------

/// A game (region) of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Game {
    /// Row id.
    pub id: GameId,
    /// Display name, e.g. `Kanto`.
    pub name: String,
}

/// A route (location) belonging to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Route {
    /// Row id.
    pub id: RouteId,
    /// Game the route belongs to.
    pub game_id: GameId,
    /// English name.
    pub name: String,
    /// Localized (Spanish) name when the catalog has one.
    pub name_es: Option<String>,
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn player_label_falls_back_to_short_id() {
        let player = Player {
            id: PlayerId(Uuid::nil()),
            display_name: String::from("   "),
            role: Role::Player,
            avatar_key: None,
        };
        assert_eq!(player.label(), "Player 000000");
    }

    #[test]
    fn player_label_trims_name() {
        let player = Player {
            id: PlayerId::new(),
            display_name: String::from(" Ash "),
            role: Role::Admin,
            avatar_key: Some(String::from("pikachu")),
        };
        assert_eq!(player.label(), "Ash");
        assert!(player.is_admin());
    }
}
