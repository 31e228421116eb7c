//! Player profiles.

use pokerun_types::{Player, PlayerId};
use tracing::info;

use crate::avatar;
use crate::error::RosterError;
use crate::service::RosterService;
use crate::store::RosterStore;

impl<S: RosterStore> RosterService<S> {
    /// The caller's own profile.
    pub async fn profile(&self, actor: PlayerId) -> Result<Player, RosterError> {
        self.call("get_profile", self.store.get_profile(actor))
            .await?
            .ok_or(RosterError::ProfileNotFound(actor))
    }

    /// Create the caller's profile, or rename it. New profiles get the
    /// `player` role; existing roles are kept.
    pub async fn register_profile(
        &self,
        actor: PlayerId,
        display_name: &str,
    ) -> Result<Player, RosterError> {
        let name = display_name.trim();
        if name.is_empty() {
            return Err(RosterError::MissingField("display_name"));
        }
        let player = self
            .call("upsert_profile", self.store.upsert_profile(actor, name))
            .await?;
        info!(player_id = %actor, display_name = %player.display_name, "profile saved");
        Ok(player)
    }

    /// Change the caller's avatar to one of the catalog entries.
    pub async fn update_avatar(&self, actor: PlayerId, key: &str) -> Result<Player, RosterError> {
        let key = key.trim();
        if !avatar::is_known_avatar(key) {
            return Err(RosterError::UnknownAvatar(key.to_owned()));
        }
        let player = self
            .call("set_avatar", self.store.set_avatar(actor, key))
            .await?
            .ok_or(RosterError::ProfileNotFound(actor))?;
        info!(player_id = %actor, avatar = key, "avatar changed");
        Ok(player)
    }

    /// Every player, ordered by display label.
    pub async fn players(&self) -> Result<Vec<Player>, RosterError> {
        let mut players = self.call("list_profiles", self.store.list_profiles()).await?;
        players.sort_by_cached_key(Player::label);
        Ok(players)
    }
}
