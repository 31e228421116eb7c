//! Row structs as read from `PostgreSQL`, and their conversion into the
//! shared entity types.
//!
//! Text columns holding enums and small integer columns holding bounded
//! values are validated here; anything out of range becomes
//! [`DbError::Corrupt`] instead of a panic or a silently clamped value.

use chrono::{DateTime, Utc};
use pokerun_types::{
    BadgeCount, Capture, CaptureId, CaptureStatus, Game, GameId, MAX_BADGES, Player, PlayerId,
    Progress, Role, Route, RouteId, RuleDocument, RunContext, SlotNumber, TeamSlot, TeamSlotId,
};
use uuid::Uuid;

use crate::error::DbError;

/// A row from the `profiles` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRow {
    /// Player id.
    pub id: Uuid,
    /// Display name.
    pub display_name: String,
    /// `player` or `admin`.
    pub role: String,
    /// Avatar catalog key.
    pub avatar_key: Option<String>,
}

impl TryFrom<ProfileRow> for Player {
    type Error = DbError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role).ok_or_else(|| DbError::Corrupt {
            table: "profiles",
            detail: format!("unknown role '{}'", row.role),
        })?;
        Ok(Self {
            id: PlayerId(row.id),
            display_name: row.display_name,
            role,
            avatar_key: row.avatar_key,
        })
    }
}

/// A row from the `captures` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CaptureRow {
    /// Serial id.
    pub id: i64,
    /// Owner.
    pub owner_id: Uuid,
    /// Creature name.
    pub creature_name: String,
    /// Nickname.
    pub nickname: String,
    /// Route of the encounter.
    pub route_id: Option<i64>,
    /// Route display name.
    pub route_name: Option<String>,
    /// Game active at creation.
    pub game_id: Option<i64>,
    /// Status text.
    pub status: String,
    /// Creation time.
    pub captured_at: DateTime<Utc>,
}

impl TryFrom<CaptureRow> for Capture {
    type Error = DbError;

    fn try_from(row: CaptureRow) -> Result<Self, Self::Error> {
        let status = CaptureStatus::parse(&row.status).ok_or_else(|| DbError::Corrupt {
            table: "captures",
            detail: format!("unknown status '{}' on capture {}", row.status, row.id),
        })?;
        Ok(Self {
            id: CaptureId(row.id),
            owner_id: PlayerId(row.owner_id),
            creature_name: row.creature_name,
            nickname: row.nickname,
            route_id: row.route_id.map(RouteId),
            route_name: row.route_name,
            game_id: row.game_id.map(GameId),
            status,
            captured_at: row.captured_at,
        })
    }
}

/// A row from the `team_slots` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamSlotRow {
    /// Serial id.
    pub id: i64,
    /// Owner.
    pub owner_id: Uuid,
    /// Slot number.
    pub slot: i16,
    /// Creature name.
    pub creature_name: String,
    /// Nickname at assignment time.
    pub nickname: Option<String>,
}

impl TryFrom<TeamSlotRow> for TeamSlot {
    type Error = DbError;

    fn try_from(row: TeamSlotRow) -> Result<Self, Self::Error> {
        let slot = SlotNumber::new(i64::from(row.slot)).map_err(|e| DbError::Corrupt {
            table: "team_slots",
            detail: e.to_string(),
        })?;
        Ok(Self {
            id: TeamSlotId(row.id),
            owner_id: PlayerId(row.owner_id),
            slot,
            creature_name: row.creature_name,
            nickname: row.nickname,
        })
    }
}

/// A row from the `progress` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProgressRow {
    /// Owner.
    pub owner_id: Uuid,
    /// Badge count.
    pub badges: i16,
    /// Last save.
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ProgressRow> for Progress {
    type Error = DbError;

    fn try_from(row: ProgressRow) -> Result<Self, Self::Error> {
        if !(0..=i16::from(MAX_BADGES)).contains(&row.badges) {
            return Err(DbError::Corrupt {
                table: "progress",
                detail: format!("badge count {} out of range", row.badges),
            });
        }
        Ok(Self {
            owner_id: PlayerId(row.owner_id),
            badges: BadgeCount::from(i64::from(row.badges)),
            updated_at: row.updated_at,
        })
    }
}

/// The singleton row of the `rules` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RuleRow {
    /// Document text.
    pub content: String,
    /// Last edit.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<RuleRow> for RuleDocument {
    fn from(row: RuleRow) -> Self {
        Self {
            content: row.content,
            updated_at: row.updated_at,
        }
    }
}

/// The singleton row of the `runs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RunRow {
    /// Active game.
    pub active_game_id: Option<i64>,
    /// Last change.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<RunRow> for RunContext {
    fn from(row: RunRow) -> Self {
        Self {
            active_game_id: row.active_game_id.map(GameId),
            updated_at: row.updated_at,
        }
    }
}

/// A row from the `games` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GameRow {
    /// Serial id.
    pub id: i64,
    /// Display name.
    pub name: String,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Self {
            id: GameId(row.id),
            name: row.name,
        }
    }
}

/// A row from the `routes` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RouteRow {
    /// Serial id.
    pub id: i64,
    /// Owning game.
    pub game_id: i64,
    /// English name.
    pub name: String,
    /// Spanish name.
    pub name_es: Option<String>,
}

impl From<RouteRow> for Route {
    fn from(row: RouteRow) -> Self {
        Self {
            id: RouteId(row.id),
            game_id: GameId(row.game_id),
            name: row.name,
            name_es: row.name_es,
        }
    }
}

/// Convert every row, failing on the first corrupt one.
pub(crate) fn convert_all<R, T>(rows: Vec<R>) -> Result<Vec<T>, DbError>
where
    T: TryFrom<R, Error = DbError>,
{
    rows.into_iter().map(T::try_from).collect()
}
