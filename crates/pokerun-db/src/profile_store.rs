//! Profile and progress persistence.

use chrono::{DateTime, Utc};
use pokerun_types::{BadgeCount, Player, PlayerId, Progress};
use sqlx::PgPool;

use crate::error::DbError;
use crate::rows::{ProfileRow, ProgressRow, convert_all};

/// Operations on the `profiles` and `progress` tables.
pub struct ProfileStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfileStore<'a> {
    /// Create a new profile store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch one profile.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails or the row is corrupt.
    pub async fn get(&self, id: PlayerId) -> Result<Option<Player>, DbError> {
        sqlx::query_as::<_, ProfileRow>(
            "SELECT id, display_name, role, avatar_key FROM profiles WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?
        .map(Player::try_from)
        .transpose()
    }

    /// Every profile.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails or a row is corrupt.
    pub async fn list(&self) -> Result<Vec<Player>, DbError> {
        let rows = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, display_name, role, avatar_key FROM profiles ORDER BY created_at",
        )
        .fetch_all(self.pool)
        .await?;
        convert_all(rows)
    }

    /// Create a profile or rename an existing one. Role and avatar of an
    /// existing profile are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the upsert fails.
    pub async fn upsert(&self, id: PlayerId, display_name: &str) -> Result<Player, DbError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r"INSERT INTO profiles (id, display_name)
              VALUES ($1, $2)
              ON CONFLICT (id) DO UPDATE SET display_name = EXCLUDED.display_name
              RETURNING id, display_name, role, avatar_key",
        )
        .bind(id.into_inner())
        .bind(display_name)
        .fetch_one(self.pool)
        .await?;
        Player::try_from(row)
    }

    /// Set the avatar key of an existing profile.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the update fails.
    pub async fn set_avatar(&self, id: PlayerId, avatar_key: &str) -> Result<Option<Player>, DbError> {
        sqlx::query_as::<_, ProfileRow>(
            r"UPDATE profiles SET avatar_key = $2 WHERE id = $1
              RETURNING id, display_name, role, avatar_key",
        )
        .bind(id.into_inner())
        .bind(avatar_key)
        .fetch_optional(self.pool)
        .await?
        .map(Player::try_from)
        .transpose()
    }

    /// Fetch one player's progress.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails or the row is corrupt.
    pub async fn get_progress(&self, owner: PlayerId) -> Result<Option<Progress>, DbError> {
        sqlx::query_as::<_, ProgressRow>(
            "SELECT owner_id, badges, updated_at FROM progress WHERE owner_id = $1",
        )
        .bind(owner.into_inner())
        .fetch_optional(self.pool)
        .await?
        .map(Progress::try_from)
        .transpose()
    }

    /// Every progress row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails or a row is corrupt.
    pub async fn list_progress(&self) -> Result<Vec<Progress>, DbError> {
        let rows =
            sqlx::query_as::<_, ProgressRow>("SELECT owner_id, badges, updated_at FROM progress")
                .fetch_all(self.pool)
                .await?;
        convert_all(rows)
    }

    /// Insert or replace one player's progress.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the upsert fails.
    pub async fn upsert_progress(
        &self,
        owner: PlayerId,
        badges: BadgeCount,
        updated_at: DateTime<Utc>,
    ) -> Result<Progress, DbError> {
        let row = sqlx::query_as::<_, ProgressRow>(
            r"INSERT INTO progress (owner_id, badges, updated_at)
              VALUES ($1, $2, $3)
              ON CONFLICT (owner_id)
              DO UPDATE SET badges = EXCLUDED.badges, updated_at = EXCLUDED.updated_at
              RETURNING owner_id, badges, updated_at",
        )
        .bind(owner.into_inner())
        .bind(i16::from(badges.get()))
        .bind(updated_at)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(player_id = %owner, badges = badges.get(), "Upserted progress");
        Progress::try_from(row)
    }
}
