//! Rules document, run context and lookup data.
//!
//! Reads are open to everyone. Editing the rules and switching the active
//! game require the admin role.

use chrono::Utc;
use pokerun_types::{Game, GameId, PlayerId, Route, RuleDocument, RunContext};
use tracing::info;

use crate::error::RosterError;
use crate::service::RosterService;
use crate::store::RosterStore;

impl<S: RosterStore> RosterService<S> {
    /// The shared rules document.
    pub async fn rules(&self) -> Result<RuleDocument, RosterError> {
        self.call("get_rules", self.store.get_rules()).await
    }

    /// Replace the rules document. Admin only.
    pub async fn update_rules(
        &self,
        actor: PlayerId,
        content: &str,
    ) -> Result<RuleDocument, RosterError> {
        self.require_admin(actor, "update_rules").await?;
        let rules = self
            .call("update_rules", self.store.update_rules(content, Utc::now()))
            .await?;
        info!(player_id = %actor, length = content.len(), "rules updated");
        Ok(rules)
    }

    /// The current run context.
    pub async fn run_context(&self) -> Result<RunContext, RosterError> {
        self.call("get_run_context", self.store.get_run_context()).await
    }

    /// Switch the game whose routes are offered for new captures. Admin
    /// only.
    pub async fn set_active_game(
        &self,
        actor: PlayerId,
        game_id: GameId,
    ) -> Result<RunContext, RosterError> {
        self.require_admin(actor, "set_active_game").await?;
        let game = self
            .call("get_game", self.store.get_game(game_id))
            .await?
            .ok_or(RosterError::UnknownGame(game_id))?;
        let run = self
            .call("set_active_game", self.store.set_active_game(game.id, Utc::now()))
            .await?;
        info!(player_id = %actor, game_id = %game.id, game = %game.name, "active game changed");
        Ok(run)
    }

    /// Every game.
    pub async fn games(&self) -> Result<Vec<Game>, RosterError> {
        self.call("list_games", self.store.list_games()).await
    }

    /// Routes, optionally restricted to one game.
    pub async fn routes(&self, game: Option<GameId>) -> Result<Vec<Route>, RosterError> {
        self.call("list_routes", self.store.list_routes(game)).await
    }

    /// Routes a new capture may be recorded on: those of the active game,
    /// or none when no game is active.
    pub async fn offerable_routes(&self) -> Result<Vec<Route>, RosterError> {
        let run = self.run_context().await?;
        match run.active_game_id {
            Some(game) => self.routes(Some(game)).await,
            None => Ok(Vec::new()),
        }
    }
}
