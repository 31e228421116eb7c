//! [`RosterStore`] backed by `PostgreSQL`.
//!
//! Each trait method borrows the pool into the matching table store and
//! converts [`DbError`](crate::error::DbError) into [`StoreError`] at the
//! boundary.

use chrono::{DateTime, Utc};
use pokerun_roster::{RosterStore, StoreError};
use pokerun_types::{
    BadgeCount, Capture, CaptureDraft, CaptureId, CaptureStatus, Game, GameId, Player, PlayerId,
    Progress, Route, RouteId, RuleDocument, RunContext, SlotNumber, TeamSlot,
};

use crate::capture_store::CaptureStore;
use crate::postgres::PostgresPool;
use crate::profile_store::ProfileStore;
use crate::run_store::RunStore;
use crate::team_store::TeamStore;

/// The run tracker's tables in `PostgreSQL`.
#[derive(Debug, Clone)]
pub struct PgRosterStore {
    pool: PostgresPool,
}

impl PgRosterStore {
    /// Wrap a connected (and migrated) pool.
    pub const fn new(pool: PostgresPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub const fn pool(&self) -> &PostgresPool {
        &self.pool
    }

    fn captures(&self) -> CaptureStore<'_> {
        CaptureStore::new(self.pool.pool())
    }

    fn team(&self) -> TeamStore<'_> {
        TeamStore::new(self.pool.pool())
    }

    fn profiles(&self) -> ProfileStore<'_> {
        ProfileStore::new(self.pool.pool())
    }

    fn run(&self) -> RunStore<'_> {
        RunStore::new(self.pool.pool())
    }
}

impl RosterStore for PgRosterStore {
    async fn insert_capture(&self, draft: CaptureDraft) -> Result<Capture, StoreError> {
        Ok(self.captures().insert(&draft).await?)
    }

    async fn get_capture(&self, id: CaptureId) -> Result<Option<Capture>, StoreError> {
        Ok(self.captures().get(id).await?)
    }

    async fn update_capture_status(
        &self,
        id: CaptureId,
        status: CaptureStatus,
    ) -> Result<Option<Capture>, StoreError> {
        Ok(self.captures().update_status(id, status).await?)
    }

    async fn delete_capture(&self, id: CaptureId) -> Result<Option<Capture>, StoreError> {
        Ok(self.captures().delete(id).await?)
    }

    async fn list_captures(&self, owner: PlayerId) -> Result<Vec<Capture>, StoreError> {
        Ok(self.captures().list_by_owner(owner).await?)
    }

    async fn list_all_captures(&self) -> Result<Vec<Capture>, StoreError> {
        Ok(self.captures().list_all().await?)
    }

    async fn upsert_team_slot(
        &self,
        owner: PlayerId,
        slot: SlotNumber,
        creature_name: &str,
        nickname: Option<&str>,
    ) -> Result<TeamSlot, StoreError> {
        Ok(self.team().upsert(owner, slot, creature_name, nickname).await?)
    }

    async fn delete_team_slot(
        &self,
        owner: PlayerId,
        slot: SlotNumber,
    ) -> Result<Option<TeamSlot>, StoreError> {
        Ok(self.team().delete(owner, slot).await?)
    }

    async fn list_team_slots(&self, owner: PlayerId) -> Result<Vec<TeamSlot>, StoreError> {
        Ok(self.team().list_by_owner(owner).await?)
    }

    async fn list_all_team_slots(&self) -> Result<Vec<TeamSlot>, StoreError> {
        Ok(self.team().list_all().await?)
    }

    async fn get_profile(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self.profiles().get(id).await?)
    }

    async fn list_profiles(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.profiles().list().await?)
    }

    async fn upsert_profile(&self, id: PlayerId, display_name: &str) -> Result<Player, StoreError> {
        Ok(self.profiles().upsert(id, display_name).await?)
    }

    async fn set_avatar(&self, id: PlayerId, avatar_key: &str) -> Result<Option<Player>, StoreError> {
        Ok(self.profiles().set_avatar(id, avatar_key).await?)
    }

    async fn get_progress(&self, owner: PlayerId) -> Result<Option<Progress>, StoreError> {
        Ok(self.profiles().get_progress(owner).await?)
    }

    async fn list_progress(&self) -> Result<Vec<Progress>, StoreError> {
        Ok(self.profiles().list_progress().await?)
    }

    async fn upsert_progress(
        &self,
        owner: PlayerId,
        badges: BadgeCount,
        updated_at: DateTime<Utc>,
    ) -> Result<Progress, StoreError> {
        Ok(self
            .profiles()
            .upsert_progress(owner, badges, updated_at)
            .await?)
    }

    async fn get_rules(&self) -> Result<RuleDocument, StoreError> {
        Ok(self.run().rules().await?)
    }

    async fn update_rules(
        &self,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<RuleDocument, StoreError> {
        Ok(self.run().update_rules(content, updated_at).await?)
    }

    async fn get_run_context(&self) -> Result<RunContext, StoreError> {
        Ok(self.run().run_context().await?)
    }

    async fn set_active_game(
        &self,
        game_id: GameId,
        updated_at: DateTime<Utc>,
    ) -> Result<RunContext, StoreError> {
        Ok(self.run().set_active_game(game_id, updated_at).await?)
    }

    async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
        Ok(self.run().games().await?)
    }

    async fn get_game(&self, id: GameId) -> Result<Option<Game>, StoreError> {
        Ok(self.run().game(id).await?)
    }

    async fn list_routes(&self, game: Option<GameId>) -> Result<Vec<Route>, StoreError> {
        Ok(self.run().routes(game).await?)
    }

    async fn get_route(&self, id: RouteId) -> Result<Option<Route>, StoreError> {
        Ok(self.run().route(id).await?)
    }
}
