//! Team slot rules.
//!
//! A slot may only hold a creature that matches one of the owner's `alive`
//! captures, and a creature may occupy at most one slot of the same team.
//! Both checks compare [`CreatureKey`]s, so `"pikachu "` and `"Pikachu"`
//! are the same creature.
//!
//! When a capture leaves `alive` or is deleted, every slot of that owner
//! holding the same creature is cleared (see
//! [`RosterService::on_capture_changed`]). Becoming `alive` again never
//! restores a slot.

use pokerun_types::{Capture, CaptureStatus, PlayerId, SlotNumber, TeamSlot};
use tracing::{debug, info};

use crate::error::RosterError;
use crate::normalize::CreatureKey;
use crate::service::RosterService;
use crate::store::RosterStore;

/// What happened to a capture, as seen by the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureChange {
    /// The capture moved to this status.
    Status(CaptureStatus),
    /// The capture was deleted.
    Deleted,
}

impl CaptureChange {
    /// Whether the creature can no longer be on the team.
    pub const fn leaves_roster(self) -> bool {
        match self {
            Self::Status(status) => !status.is_alive(),
            Self::Deleted => true,
        }
    }
}

/// Pick the capture a slot should copy from among the owner's captures.
///
/// Only `alive` captures qualify. When several share the name the newest
/// wins, then the highest id.
pub fn pick_alive_capture<'a>(captures: &'a [Capture], key: &CreatureKey) -> Option<&'a Capture> {
    captures
        .iter()
        .filter(|c| c.status.is_alive() && key.matches(&c.creature_name))
        .max_by(|a, b| a.captured_at.cmp(&b.captured_at).then(a.id.cmp(&b.id)))
}

impl<S: RosterStore> RosterService<S> {
    /// Place one of the owner's alive captures in a slot.
    ///
    /// Re-assigning the creature to the slot it already holds succeeds and
    /// refreshes the copied nickname. Nothing is written on rejection.
    pub async fn assign_slot(
        &self,
        owner: PlayerId,
        slot: SlotNumber,
        creature_name: &str,
    ) -> Result<TeamSlot, RosterError> {
        let key = CreatureKey::new(creature_name).ok_or(RosterError::MissingField("creature_name"))?;

        let captures = self.call("list_captures", self.store.list_captures(owner)).await?;
        let Some(source) = pick_alive_capture(&captures, &key) else {
            debug!(player_id = %owner, creature = %key, "assignment refused: not an alive capture");
            return Err(RosterError::IneligibleCreature {
                creature: creature_name.trim().to_owned(),
            });
        };

        let slots = self.call("list_team_slots", self.store.list_team_slots(owner)).await?;
        if let Some(taken) = slots
            .iter()
            .find(|s| s.slot != slot && key.matches(&s.creature_name))
        {
            debug!(player_id = %owner, creature = %key, slot = %taken.slot, "assignment refused: already on team");
            return Err(RosterError::DuplicateInRoster {
                creature: creature_name.trim().to_owned(),
                slot: taken.slot,
            });
        }

        let stored = self
            .call(
                "upsert_team_slot",
                self.store.upsert_team_slot(
                    owner,
                    slot,
                    &source.creature_name,
                    Some(source.nickname.as_str()),
                ),
            )
            .await?;
        info!(player_id = %owner, slot = %slot, creature = %stored.creature_name, "team slot assigned");
        Ok(stored)
    }

    /// Empty a slot. Clearing an empty slot is a no-op.
    pub async fn clear_slot(
        &self,
        owner: PlayerId,
        slot: SlotNumber,
    ) -> Result<Option<TeamSlot>, RosterError> {
        let removed = self
            .call("delete_team_slot", self.store.delete_team_slot(owner, slot))
            .await?;
        if removed.is_some() {
            info!(player_id = %owner, slot = %slot, "team slot cleared");
        }
        Ok(removed)
    }

    /// React to a capture changing status or being deleted.
    ///
    /// Returns the slots that were cleared. Safe to call more than once for
    /// the same change.
    pub async fn on_capture_changed(
        &self,
        owner: PlayerId,
        creature_name: &str,
        change: CaptureChange,
    ) -> Result<Vec<TeamSlot>, RosterError> {
        if !change.leaves_roster() {
            return Ok(Vec::new());
        }
        let Some(key) = CreatureKey::new(creature_name) else {
            return Ok(Vec::new());
        };

        let slots = self.call("list_team_slots", self.store.list_team_slots(owner)).await?;
        let affected: Vec<SlotNumber> = slots
            .iter()
            .filter(|s| key.matches(&s.creature_name))
            .map(|s| s.slot)
            .collect();

        let mut cleared = Vec::with_capacity(affected.len());
        for slot in affected {
            if let Some(removed) = self
                .call("delete_team_slot", self.store.delete_team_slot(owner, slot))
                .await?
            {
                cleared.push(removed);
            }
        }
        if !cleared.is_empty() {
            info!(player_id = %owner, creature = %key, cleared = cleared.len(), ?change, "cleared team slots after capture change");
        }
        Ok(cleared)
    }

    /// Alive captures that could go into `for_slot`.
    ///
    /// Creatures already in another slot are excluded; the creature in
    /// `for_slot` itself stays listed so it can be re-picked. With `None`
    /// every occupied slot counts.
    pub async fn list_eligible(
        &self,
        owner: PlayerId,
        for_slot: Option<SlotNumber>,
    ) -> Result<Vec<Capture>, RosterError> {
        let captures = self.call("list_captures", self.store.list_captures(owner)).await?;
        let slots = self.call("list_team_slots", self.store.list_team_slots(owner)).await?;

        let occupied: Vec<CreatureKey> = slots
            .iter()
            .filter(|s| Some(s.slot) != for_slot)
            .filter_map(|s| CreatureKey::new(&s.creature_name))
            .collect();

        let mut eligible: Vec<Capture> = captures
            .into_iter()
            .filter(|c| c.status.is_alive())
            .filter(|c| {
                CreatureKey::new(&c.creature_name).is_some_and(|k| !occupied.contains(&k))
            })
            .collect();
        eligible.sort_by(|a, b| b.captured_at.cmp(&a.captured_at).then(b.id.cmp(&a.id)));
        Ok(eligible)
    }

    /// The owner's filled slots in slot order.
    pub async fn team(&self, owner: PlayerId) -> Result<Vec<TeamSlot>, RosterError> {
        let mut slots = self.call("list_team_slots", self.store.list_team_slots(owner)).await?;
        slots.sort_by_key(|s| s.slot);
        Ok(slots)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pokerun_types::{CaptureId, GameId, RouteId};

    use super::*;

    fn capture(id: i64, name: &str, status: CaptureStatus, second: u32) -> Capture {
        Capture {
            id: CaptureId(id),
            owner_id: PlayerId::default(),
            creature_name: name.to_owned(),
            nickname: format!("nick{id}"),
            route_id: Some(RouteId(1)),
            route_name: Some(String::from("Route 1")),
            game_id: Some(GameId(1)),
            status,
            captured_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, second).unwrap(),
        }
    }

    #[test]
    fn only_non_alive_and_deletion_leave_the_roster() {
        assert!(!CaptureChange::Status(CaptureStatus::Alive).leaves_roster());
        assert!(CaptureChange::Status(CaptureStatus::Dead).leaves_roster());
        assert!(CaptureChange::Status(CaptureStatus::NotCaptured).leaves_roster());
        assert!(CaptureChange::Deleted.leaves_roster());
    }

    #[test]
    fn pick_prefers_newest_alive() {
        let captures = vec![
            capture(1, "Pikachu", CaptureStatus::Alive, 0),
            capture(2, "pikachu", CaptureStatus::Alive, 30),
            capture(3, "PIKACHU", CaptureStatus::Dead, 59),
        ];
        let key = CreatureKey::new("Pikachu").unwrap();
        assert_eq!(pick_alive_capture(&captures, &key).map(|c| c.id), Some(CaptureId(2)));
    }

    #[test]
    fn pick_breaks_timestamp_ties_by_id() {
        let captures = vec![
            capture(7, "Eevee", CaptureStatus::Alive, 5),
            capture(4, "Eevee", CaptureStatus::Alive, 5),
        ];
        let key = CreatureKey::new("eevee").unwrap();
        assert_eq!(pick_alive_capture(&captures, &key).map(|c| c.id), Some(CaptureId(7)));
    }

    #[test]
    fn pick_ignores_non_alive() {
        let captures = vec![capture(1, "Zubat", CaptureStatus::NotCaptured, 0)];
        let key = CreatureKey::new("zubat").unwrap();
        assert!(pick_alive_capture(&captures, &key).is_none());
    }
}
