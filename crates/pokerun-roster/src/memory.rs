//! In-memory [`RosterStore`] implementation.
//!
//! Tables are `BTreeMap`s behind a single [`tokio::sync::RwLock`], so list
//! operations come back in key order without extra sorting. Used by the
//! test suites and by the server when no database URL is configured.
//!
//! An optional per-call latency simulates a remote round-trip, which lets
//! tests exercise the service's timeout bound.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use pokerun_types::{
    BadgeCount, Capture, CaptureDraft, CaptureId, CaptureStatus, Game, GameId, Player, PlayerId,
    Progress, Role, Route, RouteId, RuleDocument, RunContext, SlotNumber, TeamSlot, TeamSlotId,
};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::RosterStore;

/// All tables of the in-memory store.
#[derive(Debug)]
struct Tables {
    profiles: BTreeMap<PlayerId, Player>,
    captures: BTreeMap<CaptureId, Capture>,
    team_slots: BTreeMap<(PlayerId, SlotNumber), TeamSlot>,
    progress: BTreeMap<PlayerId, Progress>,
    rules: RuleDocument,
    run: RunContext,
    games: BTreeMap<GameId, Game>,
    routes: BTreeMap<RouteId, Route>,
    next_capture_id: i64,
    next_slot_id: i64,
    next_game_id: i64,
    next_route_id: i64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            profiles: BTreeMap::new(),
            captures: BTreeMap::new(),
            team_slots: BTreeMap::new(),
            progress: BTreeMap::new(),
            rules: RuleDocument {
                content: String::new(),
                updated_at: None,
            },
            run: RunContext {
                active_game_id: None,
                updated_at: None,
            },
            games: BTreeMap::new(),
            routes: BTreeMap::new(),
            next_capture_id: 1,
            next_slot_id: 1,
            next_game_id: 1,
            next_route_id: 1,
        }
    }
}

/// Take the current value of a serial counter and advance it.
fn next_serial(counter: &mut i64) -> i64 {
    let id = *counter;
    *counter = counter.saturating_add(1);
    id
}

/// Newest first, highest id breaking ties.
fn newest_first(captures: &mut [Capture]) {
    captures.sort_by(|a, b| b.captured_at.cmp(&a.captured_at).then(b.id.cmp(&a.id)));
}

/// Roster tables held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    latency: Option<Duration>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every call by `latency` before touching the tables.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Add a game to the lookup data.
    pub async fn insert_game(&self, name: &str) -> Game {
        let mut tables = self.tables.write().await;
        let id = GameId(next_serial(&mut tables.next_game_id));
        let game = Game {
            id,
            name: name.to_owned(),
        };
        tables.games.insert(id, game.clone());
        game
    }

    /// Add a route to the lookup data.
    pub async fn insert_route(&self, game_id: GameId, name: &str, name_es: Option<&str>) -> Route {
        let mut tables = self.tables.write().await;
        let id = RouteId(next_serial(&mut tables.next_route_id));
        let route = Route {
            id,
            game_id,
            name: name.to_owned(),
            name_es: name_es.map(str::to_owned),
        };
        tables.routes.insert(id, route.clone());
        route
    }

    /// Insert or replace a full profile, including its role.
    ///
    /// Roles are granted out of band; this is the hook for doing so.
    pub async fn put_profile(&self, player: Player) {
        self.tables.write().await.profiles.insert(player.id, player);
    }

    /// Change the role of an existing profile. Returns `false` if there is
    /// no such profile.
    pub async fn set_role(&self, id: PlayerId, role: Role) -> bool {
        let mut tables = self.tables.write().await;
        tables.profiles.get_mut(&id).is_some_and(|p| {
            p.role = role;
            true
        })
    }

    async fn round_trip(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl RosterStore for MemoryStore {
    async fn insert_capture(&self, draft: CaptureDraft) -> Result<Capture, StoreError> {
        self.round_trip().await;
        let mut tables = self.tables.write().await;
        let id = CaptureId(next_serial(&mut tables.next_capture_id));
        let capture = Capture {
            id,
            owner_id: draft.owner_id,
            creature_name: draft.creature_name,
            nickname: draft.nickname,
            route_id: Some(draft.route_id),
            route_name: Some(draft.route_name),
            game_id: Some(draft.game_id),
            status: draft.status,
            captured_at: Utc::now(),
        };
        tables.captures.insert(id, capture.clone());
        Ok(capture)
    }

    async fn get_capture(&self, id: CaptureId) -> Result<Option<Capture>, StoreError> {
        self.round_trip().await;
        Ok(self.tables.read().await.captures.get(&id).cloned())
    }

    async fn update_capture_status(
        &self,
        id: CaptureId,
        status: CaptureStatus,
    ) -> Result<Option<Capture>, StoreError> {
        self.round_trip().await;
        let mut tables = self.tables.write().await;
        Ok(tables.captures.get_mut(&id).map(|capture| {
            capture.status = status;
            capture.clone()
        }))
    }

    async fn delete_capture(&self, id: CaptureId) -> Result<Option<Capture>, StoreError> {
        self.round_trip().await;
        Ok(self.tables.write().await.captures.remove(&id))
    }

    async fn list_captures(&self, owner: PlayerId) -> Result<Vec<Capture>, StoreError> {
        self.round_trip().await;
        let mut captures: Vec<Capture> = self
            .tables
            .read()
            .await
            .captures
            .values()
            .filter(|c| c.owner_id == owner)
            .cloned()
            .collect();
        newest_first(&mut captures);
        Ok(captures)
    }

    async fn list_all_captures(&self) -> Result<Vec<Capture>, StoreError> {
        self.round_trip().await;
        let mut captures: Vec<Capture> =
            self.tables.read().await.captures.values().cloned().collect();
        newest_first(&mut captures);
        Ok(captures)
    }

    async fn upsert_team_slot(
        &self,
        owner: PlayerId,
        slot: SlotNumber,
        creature_name: &str,
        nickname: Option<&str>,
    ) -> Result<TeamSlot, StoreError> {
        self.round_trip().await;
        let mut tables = self.tables.write().await;
        let existing = tables.team_slots.get(&(owner, slot)).map(|row| row.id);
        let id = match existing {
            Some(id) => id,
            None => TeamSlotId(next_serial(&mut tables.next_slot_id)),
        };
        let row = TeamSlot {
            id,
            owner_id: owner,
            slot,
            creature_name: creature_name.to_owned(),
            nickname: nickname.map(str::to_owned),
        };
        tables.team_slots.insert((owner, slot), row.clone());
        Ok(row)
    }

    async fn delete_team_slot(
        &self,
        owner: PlayerId,
        slot: SlotNumber,
    ) -> Result<Option<TeamSlot>, StoreError> {
        self.round_trip().await;
        Ok(self.tables.write().await.team_slots.remove(&(owner, slot)))
    }

    async fn list_team_slots(&self, owner: PlayerId) -> Result<Vec<TeamSlot>, StoreError> {
        self.round_trip().await;
        Ok(self
            .tables
            .read()
            .await
            .team_slots
            .values()
            .filter(|s| s.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn list_all_team_slots(&self) -> Result<Vec<TeamSlot>, StoreError> {
        self.round_trip().await;
        Ok(self.tables.read().await.team_slots.values().cloned().collect())
    }

    async fn get_profile(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        self.round_trip().await;
        Ok(self.tables.read().await.profiles.get(&id).cloned())
    }

    async fn list_profiles(&self) -> Result<Vec<Player>, StoreError> {
        self.round_trip().await;
        Ok(self.tables.read().await.profiles.values().cloned().collect())
    }

    async fn upsert_profile(&self, id: PlayerId, display_name: &str) -> Result<Player, StoreError> {
        self.round_trip().await;
        let mut tables = self.tables.write().await;
        let player = tables.profiles.entry(id).or_insert_with(|| Player {
            id,
            display_name: String::new(),
            role: Role::Player,
            avatar_key: None,
        });
        display_name.clone_into(&mut player.display_name);
        Ok(player.clone())
    }

    async fn set_avatar(&self, id: PlayerId, avatar_key: &str) -> Result<Option<Player>, StoreError> {
        self.round_trip().await;
        let mut tables = self.tables.write().await;
        Ok(tables.profiles.get_mut(&id).map(|player| {
            player.avatar_key = Some(avatar_key.to_owned());
            player.clone()
        }))
    }

    async fn get_progress(&self, owner: PlayerId) -> Result<Option<Progress>, StoreError> {
        self.round_trip().await;
        Ok(self.tables.read().await.progress.get(&owner).cloned())
    }

    async fn list_progress(&self) -> Result<Vec<Progress>, StoreError> {
        self.round_trip().await;
        Ok(self.tables.read().await.progress.values().cloned().collect())
    }

    async fn upsert_progress(
        &self,
        owner: PlayerId,
        badges: BadgeCount,
        updated_at: DateTime<Utc>,
    ) -> Result<Progress, StoreError> {
        self.round_trip().await;
        let row = Progress {
            owner_id: owner,
            badges,
            updated_at: Some(updated_at),
        };
        self.tables.write().await.progress.insert(owner, row.clone());
        Ok(row)
    }

    async fn get_rules(&self) -> Result<RuleDocument, StoreError> {
        self.round_trip().await;
        Ok(self.tables.read().await.rules.clone())
    }

    async fn update_rules(
        &self,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<RuleDocument, StoreError> {
        self.round_trip().await;
        let mut tables = self.tables.write().await;
        tables.rules = RuleDocument {
            content: content.to_owned(),
            updated_at: Some(updated_at),
        };
        Ok(tables.rules.clone())
    }

    async fn get_run_context(&self) -> Result<RunContext, StoreError> {
        self.round_trip().await;
        Ok(self.tables.read().await.run.clone())
    }

    async fn set_active_game(
        &self,
        game_id: GameId,
        updated_at: DateTime<Utc>,
    ) -> Result<RunContext, StoreError> {
        self.round_trip().await;
        let mut tables = self.tables.write().await;
        tables.run = RunContext {
            active_game_id: Some(game_id),
            updated_at: Some(updated_at),
        };
        Ok(tables.run.clone())
    }

    async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
        self.round_trip().await;
        let mut games: Vec<Game> = self.tables.read().await.games.values().cloned().collect();
        games.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(games)
    }

    async fn get_game(&self, id: GameId) -> Result<Option<Game>, StoreError> {
        self.round_trip().await;
        Ok(self.tables.read().await.games.get(&id).cloned())
    }

    async fn list_routes(&self, game: Option<GameId>) -> Result<Vec<Route>, StoreError> {
        self.round_trip().await;
        Ok(self
            .tables
            .read()
            .await
            .routes
            .values()
            .filter(|r| game.is_none_or(|g| r.game_id == g))
            .cloned()
            .collect())
    }

    async fn get_route(&self, id: RouteId) -> Result<Option<Route>, StoreError> {
        self.round_trip().await;
        Ok(self.tables.read().await.routes.get(&id).cloned())
    }
}
