//! Team slot persistence.
//!
//! Slots are keyed by `(owner_id, slot)`; an upsert on that pair replaces
//! the creature and keeps the row id.

use pokerun_types::{PlayerId, SlotNumber, TeamSlot};
use sqlx::PgPool;

use crate::error::DbError;
use crate::rows::{TeamSlotRow, convert_all};

/// Operations on the `team_slots` table.
pub struct TeamStore<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamStore<'a> {
    /// Create a new team store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert or replace one slot.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the upsert fails.
    pub async fn upsert(
        &self,
        owner: PlayerId,
        slot: SlotNumber,
        creature_name: &str,
        nickname: Option<&str>,
    ) -> Result<TeamSlot, DbError> {
        let row = sqlx::query_as::<_, TeamSlotRow>(
            r"INSERT INTO team_slots (owner_id, slot, creature_name, nickname)
              VALUES ($1, $2, $3, $4)
              ON CONFLICT (owner_id, slot)
              DO UPDATE SET creature_name = EXCLUDED.creature_name, nickname = EXCLUDED.nickname
              RETURNING id, owner_id, slot, creature_name, nickname",
        )
        .bind(owner.into_inner())
        .bind(i16::from(slot.get()))
        .bind(creature_name)
        .bind(nickname)
        .fetch_one(self.pool)
        .await?;
        TeamSlot::try_from(row)
    }

    /// Remove one slot, returning it if it was filled.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the delete fails.
    pub async fn delete(
        &self,
        owner: PlayerId,
        slot: SlotNumber,
    ) -> Result<Option<TeamSlot>, DbError> {
        sqlx::query_as::<_, TeamSlotRow>(
            r"DELETE FROM team_slots
              WHERE owner_id = $1 AND slot = $2
              RETURNING id, owner_id, slot, creature_name, nickname",
        )
        .bind(owner.into_inner())
        .bind(i16::from(slot.get()))
        .fetch_optional(self.pool)
        .await?
        .map(TeamSlot::try_from)
        .transpose()
    }

    /// Filled slots of one owner.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails or a row is corrupt.
    pub async fn list_by_owner(&self, owner: PlayerId) -> Result<Vec<TeamSlot>, DbError> {
        let rows = sqlx::query_as::<_, TeamSlotRow>(
            r"SELECT id, owner_id, slot, creature_name, nickname
              FROM team_slots
              WHERE owner_id = $1
              ORDER BY slot",
        )
        .bind(owner.into_inner())
        .fetch_all(self.pool)
        .await?;
        convert_all(rows)
    }

    /// Every filled slot.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails or a row is corrupt.
    pub async fn list_all(&self) -> Result<Vec<TeamSlot>, DbError> {
        let rows = sqlx::query_as::<_, TeamSlotRow>(
            r"SELECT id, owner_id, slot, creature_name, nickname
              FROM team_slots
              ORDER BY owner_id, slot",
        )
        .fetch_all(self.pool)
        .await?;
        convert_all(rows)
    }
}
