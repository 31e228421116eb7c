//! The persistent store collaborator.
//!
//! [`RosterStore`] is the seam between the domain layer and whatever holds
//! the tables. The workspace ships two implementations: the in-memory
//! [`MemoryStore`](crate::memory::MemoryStore) for tests and local runs, and
//! the `PostgreSQL` store in `pokerun-db`.
//!
//! Methods are plain result-or-error table operations. All invariants
//! (eligibility, uniqueness, cascades, permissions) live in
//! [`RosterService`](crate::service::RosterService); a store never
//! second-guesses the rows it is given.

use core::future::Future;

use chrono::{DateTime, Utc};
use pokerun_types::{
    BadgeCount, Capture, CaptureDraft, CaptureId, CaptureStatus, Game, GameId, Player, PlayerId,
    Progress, Route, RouteId, RuleDocument, RunContext, SlotNumber, TeamSlot,
};

use crate::error::StoreError;

/// Table operations required by the roster domain layer.
///
/// List methods return rows in the order documented on each method so
/// that callers do not need to re-sort.
pub trait RosterStore: Send + Sync + 'static {
    // -- captures ----------------------------------------------------------

    /// Insert a capture, stamping `captured_at` with the current time.
    fn insert_capture(
        &self,
        draft: CaptureDraft,
    ) -> impl Future<Output = Result<Capture, StoreError>> + Send;

    /// Fetch one capture.
    fn get_capture(
        &self,
        id: CaptureId,
    ) -> impl Future<Output = Result<Option<Capture>, StoreError>> + Send;

    /// Change the status of a capture. Returns `None` if the row is gone.
    fn update_capture_status(
        &self,
        id: CaptureId,
        status: CaptureStatus,
    ) -> impl Future<Output = Result<Option<Capture>, StoreError>> + Send;

    /// Delete a capture and return the removed row.
    fn delete_capture(
        &self,
        id: CaptureId,
    ) -> impl Future<Output = Result<Option<Capture>, StoreError>> + Send;

    /// Captures of one owner, newest first.
    fn list_captures(
        &self,
        owner: PlayerId,
    ) -> impl Future<Output = Result<Vec<Capture>, StoreError>> + Send;

    /// Every capture, newest first.
    fn list_all_captures(&self) -> impl Future<Output = Result<Vec<Capture>, StoreError>> + Send;

    // -- team slots --------------------------------------------------------

    /// Insert or replace the slot keyed by `(owner, slot)`.
    fn upsert_team_slot(
        &self,
        owner: PlayerId,
        slot: SlotNumber,
        creature_name: &str,
        nickname: Option<&str>,
    ) -> impl Future<Output = Result<TeamSlot, StoreError>> + Send;

    /// Remove the slot keyed by `(owner, slot)` and return it.
    fn delete_team_slot(
        &self,
        owner: PlayerId,
        slot: SlotNumber,
    ) -> impl Future<Output = Result<Option<TeamSlot>, StoreError>> + Send;

    /// Filled slots of one owner, by slot number.
    fn list_team_slots(
        &self,
        owner: PlayerId,
    ) -> impl Future<Output = Result<Vec<TeamSlot>, StoreError>> + Send;

    /// Every filled slot, by owner then slot number.
    fn list_all_team_slots(&self)
    -> impl Future<Output = Result<Vec<TeamSlot>, StoreError>> + Send;

    // -- profiles ----------------------------------------------------------

    /// Fetch one profile.
    fn get_profile(
        &self,
        id: PlayerId,
    ) -> impl Future<Output = Result<Option<Player>, StoreError>> + Send;

    /// Every profile.
    fn list_profiles(&self) -> impl Future<Output = Result<Vec<Player>, StoreError>> + Send;

    /// Create a profile with the `player` role, or rename an existing one
    /// keeping its role and avatar.
    fn upsert_profile(
        &self,
        id: PlayerId,
        display_name: &str,
    ) -> impl Future<Output = Result<Player, StoreError>> + Send;

    /// Set the avatar of an existing profile. Returns `None` if there is no
    /// such profile.
    fn set_avatar(
        &self,
        id: PlayerId,
        avatar_key: &str,
    ) -> impl Future<Output = Result<Option<Player>, StoreError>> + Send;

    // -- progress ----------------------------------------------------------

    /// Fetch one player's progress.
    fn get_progress(
        &self,
        owner: PlayerId,
    ) -> impl Future<Output = Result<Option<Progress>, StoreError>> + Send;

    /// Every stored progress row.
    fn list_progress(&self) -> impl Future<Output = Result<Vec<Progress>, StoreError>> + Send;

    /// Insert or replace one player's progress.
    fn upsert_progress(
        &self,
        owner: PlayerId,
        badges: BadgeCount,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<Progress, StoreError>> + Send;

    // -- singletons --------------------------------------------------------

    /// The rules document.
    fn get_rules(&self) -> impl Future<Output = Result<RuleDocument, StoreError>> + Send;

    /// Replace the rules document.
    fn update_rules(
        &self,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<RuleDocument, StoreError>> + Send;

    /// The run context.
    fn get_run_context(&self) -> impl Future<Output = Result<RunContext, StoreError>> + Send;

    /// Point the run context at a game.
    fn set_active_game(
        &self,
        game_id: GameId,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<RunContext, StoreError>> + Send;

    // -- lookup data -------------------------------------------------------

    /// Every game, by name.
    fn list_games(&self) -> impl Future<Output = Result<Vec<Game>, StoreError>> + Send;

    /// Fetch one game.
    fn get_game(
        &self,
        id: GameId,
    ) -> impl Future<Output = Result<Option<Game>, StoreError>> + Send;

    /// Routes, optionally restricted to one game, by id.
    fn list_routes(
        &self,
        game: Option<GameId>,
    ) -> impl Future<Output = Result<Vec<Route>, StoreError>> + Send;

    /// Fetch one route.
    fn get_route(
        &self,
        id: RouteId,
    ) -> impl Future<Output = Result<Option<Route>, StoreError>> + Send;
}
