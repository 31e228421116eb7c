//! Capture lifecycle: recording, status changes and deletion.
//!
//! Status changes and deletions run the team cascade right after the write
//! and return the cleared slots alongside the capture, so a client only has
//! to refresh what actually changed.

use pokerun_types::{Capture, CaptureDraft, CaptureId, CaptureStatus, PlayerId, RouteId, TeamSlot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RosterError;
use crate::roster::CaptureChange;
use crate::service::RosterService;
use crate::store::RosterStore;

/// A capture as submitted by its owner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCapture {
    /// Creature name; casing is kept, surrounding whitespace is not.
    pub creature_name: String,
    /// Display label.
    pub nickname: String,
    /// Route of the encounter. Must belong to the active game.
    pub route_id: RouteId,
    /// Initial status.
    pub status: CaptureStatus,
}

/// Result of a status change or deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureUpdate {
    /// The capture after the change (or as it was before deletion).
    pub capture: Capture,
    /// Team slots that were emptied as a consequence.
    pub cleared_slots: Vec<TeamSlot>,
}

impl<S: RosterStore> RosterService<S> {
    /// Record a new capture on one of the active game's routes.
    pub async fn record_capture(
        &self,
        owner: PlayerId,
        new: NewCapture,
    ) -> Result<Capture, RosterError> {
        let creature_name = new.creature_name.trim();
        if creature_name.is_empty() {
            return Err(RosterError::MissingField("creature_name"));
        }
        let nickname = new.nickname.trim();
        if nickname.is_empty() {
            return Err(RosterError::MissingField("nickname"));
        }

        let run = self.call("get_run_context", self.store.get_run_context()).await?;
        let game_id = run.active_game_id.ok_or(RosterError::NoActiveGame)?;

        let route = self
            .call("get_route", self.store.get_route(new.route_id))
            .await?
            .filter(|r| r.game_id == game_id)
            .ok_or(RosterError::InvalidRoute {
                route_id: new.route_id,
                game_id,
            })?;

        let draft = CaptureDraft {
            owner_id: owner,
            creature_name: creature_name.to_owned(),
            nickname: nickname.to_owned(),
            status: new.status,
            game_id,
            route_id: route.id,
            route_name: route.name,
        };
        let capture = self.call("insert_capture", self.store.insert_capture(draft)).await?;
        info!(
            player_id = %owner,
            capture_id = %capture.id,
            creature = %capture.creature_name,
            status = %capture.status,
            "capture recorded"
        );
        Ok(capture)
    }

    /// Change the status of one of the owner's captures.
    ///
    /// Leaving `alive` clears the creature from the team.
    pub async fn set_capture_status(
        &self,
        owner: PlayerId,
        id: CaptureId,
        status: CaptureStatus,
    ) -> Result<CaptureUpdate, RosterError> {
        self.owned_capture(owner, id).await?;
        let capture = self
            .call("update_capture_status", self.store.update_capture_status(id, status))
            .await?
            .ok_or(RosterError::CaptureNotFound(id))?;
        info!(player_id = %owner, capture_id = %id, status = %status, "capture status changed");

        let cleared_slots = self
            .on_capture_changed(owner, &capture.creature_name, CaptureChange::Status(status))
            .await?;
        Ok(CaptureUpdate {
            capture,
            cleared_slots,
        })
    }

    /// Delete one of the owner's captures and clear it from the team.
    pub async fn delete_capture(
        &self,
        owner: PlayerId,
        id: CaptureId,
    ) -> Result<CaptureUpdate, RosterError> {
        self.owned_capture(owner, id).await?;
        let capture = self
            .call("delete_capture", self.store.delete_capture(id))
            .await?
            .ok_or(RosterError::CaptureNotFound(id))?;
        info!(player_id = %owner, capture_id = %id, "capture deleted");

        let cleared_slots = self
            .on_capture_changed(owner, &capture.creature_name, CaptureChange::Deleted)
            .await?;
        Ok(CaptureUpdate {
            capture,
            cleared_slots,
        })
    }

    /// The owner's captures, newest first.
    pub async fn captures(&self, owner: PlayerId) -> Result<Vec<Capture>, RosterError> {
        self.call("list_captures", self.store.list_captures(owner)).await
    }

    /// Fetch a capture, hiding other players' captures behind
    /// `CaptureNotFound`.
    async fn owned_capture(&self, owner: PlayerId, id: CaptureId) -> Result<Capture, RosterError> {
        match self.call("get_capture", self.store.get_capture(id)).await? {
            Some(capture) if capture.owner_id == owner => Ok(capture),
            Some(_) => {
                debug!(player_id = %owner, capture_id = %id, "capture belongs to another player");
                Err(RosterError::CaptureNotFound(id))
            }
            None => Err(RosterError::CaptureNotFound(id)),
        }
    }
}
