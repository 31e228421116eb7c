//! Capture persistence.

use pokerun_types::{Capture, CaptureDraft, CaptureId, CaptureStatus, PlayerId};
use sqlx::PgPool;

use crate::error::DbError;
use crate::rows::{CaptureRow, convert_all};

const CAPTURE_COLUMNS: &str =
    "id, owner_id, creature_name, nickname, route_id, route_name, game_id, status, captured_at";

/// Operations on the `captures` table.
pub struct CaptureStore<'a> {
    pool: &'a PgPool,
}

impl<'a> CaptureStore<'a> {
    /// Create a new capture store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a capture; the database stamps `captured_at`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert(&self, draft: &CaptureDraft) -> Result<Capture, DbError> {
        let row = sqlx::query_as::<_, CaptureRow>(&format!(
            "INSERT INTO captures (owner_id, creature_name, nickname, route_id, route_name, game_id, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {CAPTURE_COLUMNS}"
        ))
        .bind(draft.owner_id.into_inner())
        .bind(&draft.creature_name)
        .bind(&draft.nickname)
        .bind(draft.route_id.into_inner())
        .bind(&draft.route_name)
        .bind(draft.game_id.into_inner())
        .bind(draft.status.as_str())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(capture_id = row.id, "Inserted capture");
        Capture::try_from(row)
    }

    /// Fetch one capture by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails or the row is corrupt.
    pub async fn get(&self, id: CaptureId) -> Result<Option<Capture>, DbError> {
        sqlx::query_as::<_, CaptureRow>(&format!(
            "SELECT {CAPTURE_COLUMNS} FROM captures WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?
        .map(Capture::try_from)
        .transpose()
    }

    /// Set the status of a capture.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the update fails or the row is corrupt.
    pub async fn update_status(
        &self,
        id: CaptureId,
        status: CaptureStatus,
    ) -> Result<Option<Capture>, DbError> {
        sqlx::query_as::<_, CaptureRow>(&format!(
            "UPDATE captures SET status = $2 WHERE id = $1 RETURNING {CAPTURE_COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(status.as_str())
        .fetch_optional(self.pool)
        .await?
        .map(Capture::try_from)
        .transpose()
    }

    /// Delete a capture, returning the removed row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the delete fails.
    pub async fn delete(&self, id: CaptureId) -> Result<Option<Capture>, DbError> {
        sqlx::query_as::<_, CaptureRow>(&format!(
            "DELETE FROM captures WHERE id = $1 RETURNING {CAPTURE_COLUMNS}"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?
        .map(Capture::try_from)
        .transpose()
    }

    /// Captures of one owner, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails or a row is corrupt.
    pub async fn list_by_owner(&self, owner: PlayerId) -> Result<Vec<Capture>, DbError> {
        let rows = sqlx::query_as::<_, CaptureRow>(&format!(
            "SELECT {CAPTURE_COLUMNS} FROM captures
             WHERE owner_id = $1
             ORDER BY captured_at DESC, id DESC"
        ))
        .bind(owner.into_inner())
        .fetch_all(self.pool)
        .await?;
        convert_all(rows)
    }

    /// Every capture, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails or a row is corrupt.
    pub async fn list_all(&self) -> Result<Vec<Capture>, DbError> {
        let rows = sqlx::query_as::<_, CaptureRow>(&format!(
            "SELECT {CAPTURE_COLUMNS} FROM captures ORDER BY captured_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;
        convert_all(rows)
    }
}
