//! Run-wide data: the rules and run singletons, games and routes.
//!
//! Both singleton rows are created by the initial migration with `id = 1`
//! and are only ever updated in place. A missing singleton means the
//! database was not migrated and is reported as [`DbError::Missing`].

use chrono::{DateTime, Utc};
use pokerun_types::{Game, GameId, Route, RouteId, RuleDocument, RunContext};
use sqlx::PgPool;

use crate::error::DbError;
use crate::rows::{GameRow, RouteRow, RuleRow, RunRow};

/// Operations on `rules`, `runs`, `games` and `routes`.
pub struct RunStore<'a> {
    pool: &'a PgPool,
}

impl<'a> RunStore<'a> {
    /// Create a new run store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Read the rules document.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Missing`] if the singleton row is absent.
    pub async fn rules(&self) -> Result<RuleDocument, DbError> {
        sqlx::query_as::<_, RuleRow>("SELECT content, updated_at FROM rules WHERE id = 1")
            .fetch_optional(self.pool)
            .await?
            .map(RuleDocument::from)
            .ok_or(DbError::Missing("rules"))
    }

    /// Replace the rules document.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Missing`] if the singleton row is absent.
    pub async fn update_rules(
        &self,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<RuleDocument, DbError> {
        sqlx::query_as::<_, RuleRow>(
            r"UPDATE rules SET content = $1, updated_at = $2 WHERE id = 1
              RETURNING content, updated_at",
        )
        .bind(content)
        .bind(updated_at)
        .fetch_optional(self.pool)
        .await?
        .map(RuleDocument::from)
        .ok_or(DbError::Missing("rules"))
    }

    /// Read the run context.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Missing`] if the singleton row is absent.
    pub async fn run_context(&self) -> Result<RunContext, DbError> {
        sqlx::query_as::<_, RunRow>("SELECT active_game_id, updated_at FROM runs WHERE id = 1")
            .fetch_optional(self.pool)
            .await?
            .map(RunContext::from)
            .ok_or(DbError::Missing("runs"))
    }

    /// Point the run context at a game.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Missing`] if the singleton row is absent.
    pub async fn set_active_game(
        &self,
        game_id: GameId,
        updated_at: DateTime<Utc>,
    ) -> Result<RunContext, DbError> {
        let run = sqlx::query_as::<_, RunRow>(
            r"UPDATE runs SET active_game_id = $1, updated_at = $2 WHERE id = 1
              RETURNING active_game_id, updated_at",
        )
        .bind(game_id.into_inner())
        .bind(updated_at)
        .fetch_optional(self.pool)
        .await?
        .map(RunContext::from)
        .ok_or(DbError::Missing("runs"))?;

        tracing::info!(game_id = %game_id, "Active game updated");
        Ok(run)
    }

    /// Every game, by name.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn games(&self) -> Result<Vec<Game>, DbError> {
        let rows = sqlx::query_as::<_, GameRow>("SELECT id, name FROM games ORDER BY name")
            .fetch_all(self.pool)
            .await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    /// Fetch one game.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn game(&self, id: GameId) -> Result<Option<Game>, DbError> {
        let row = sqlx::query_as::<_, GameRow>("SELECT id, name FROM games WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(self.pool)
            .await?;
        Ok(row.map(Game::from))
    }

    /// Routes, optionally restricted to one game.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn routes(&self, game: Option<GameId>) -> Result<Vec<Route>, DbError> {
        let rows = sqlx::query_as::<_, RouteRow>(
            r"SELECT id, game_id, name, name_es
              FROM routes
              WHERE $1::BIGINT IS NULL OR game_id = $1
              ORDER BY id",
        )
        .bind(game.map(GameId::into_inner))
        .fetch_all(self.pool)
        .await?;
        Ok(rows.into_iter().map(Route::from).collect())
    }

    /// Fetch one route.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn route(&self, id: RouteId) -> Result<Option<Route>, DbError> {
        let row = sqlx::query_as::<_, RouteRow>(
            "SELECT id, game_id, name, name_es FROM routes WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?;
        Ok(row.map(Route::from))
    }

    /// Insert a game, returning the existing row if the name is taken.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the upsert fails.
    pub async fn insert_game(&self, name: &str) -> Result<Game, DbError> {
        let row = sqlx::query_as::<_, GameRow>(
            r"INSERT INTO games (name) VALUES ($1)
              ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
              RETURNING id, name",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;
        Ok(Game::from(row))
    }

    /// Insert a route of a game, updating the localized name if the route
    /// already exists.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the upsert fails.
    pub async fn insert_route(
        &self,
        game_id: GameId,
        name: &str,
        name_es: Option<&str>,
    ) -> Result<Route, DbError> {
        let row = sqlx::query_as::<_, RouteRow>(
            r"INSERT INTO routes (game_id, name, name_es) VALUES ($1, $2, $3)
              ON CONFLICT (game_id, name) DO UPDATE SET name_es = EXCLUDED.name_es
              RETURNING id, game_id, name, name_es",
        )
        .bind(game_id.into_inner())
        .bind(name)
        .bind(name_es)
        .fetch_one(self.pool)
        .await?;
        Ok(Route::from(row))
    }
}
