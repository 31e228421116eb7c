//! Public boards: every player's team and every player's captures.

use pokerun_types::{Capture, CaptureStatus, Player, PlayerId, SlotNumber, TeamSlot};
use serde::Serialize;

use crate::avatar::{avatar_src, trainer_avatar_url};
use crate::error::RosterError;
use crate::service::RosterService;
use crate::store::RosterStore;

/// One position on a team card. Empty slots have no creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    /// Position.
    pub slot: SlotNumber,
    /// Creature in the slot.
    pub creature_name: Option<String>,
    /// Nickname copied at assignment time.
    pub nickname: Option<String>,
}

/// A player's team as shown on the team board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCard {
    /// The player.
    pub player_id: PlayerId,
    /// Name with the short-id fallback applied.
    pub display_name: String,
    /// Profile avatar sprite.
    pub avatar_url: String,
    /// Trainer sprite derived from the player id.
    pub trainer_url: String,
    /// All six positions in order.
    pub slots: Vec<SlotView>,
    /// Number of filled positions.
    pub filled: usize,
}

/// A player's captures as shown on the capture board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureCard {
    /// The player.
    pub player_id: PlayerId,
    /// Name with the short-id fallback applied.
    pub display_name: String,
    /// Number of captures regardless of the filter.
    pub total: usize,
    /// Number of captures shown after filtering.
    pub shown: usize,
    /// Captures matching the filter, newest first.
    pub captures: Vec<Capture>,
}

/// Build the team board: fullest teams first, ties by name.
pub fn build_team_board(players: &[Player], slots: &[TeamSlot]) -> Vec<TeamCard> {
    let mut cards: Vec<TeamCard> = players
        .iter()
        .map(|player| {
            let views: Vec<SlotView> = SlotNumber::all()
                .map(|number| {
                    let filled = slots
                        .iter()
                        .find(|s| s.owner_id == player.id && s.slot == number);
                    SlotView {
                        slot: number,
                        creature_name: filled.map(|s| s.creature_name.clone()),
                        nickname: filled.and_then(|s| s.nickname.clone()),
                    }
                })
                .collect();
            let filled = views.iter().filter(|v| v.creature_name.is_some()).count();
            TeamCard {
                player_id: player.id,
                display_name: player.label(),
                avatar_url: avatar_src(player.avatar_key.as_deref()),
                trainer_url: trainer_avatar_url(player.id),
                slots: views,
                filled,
            }
        })
        .collect();
    cards.sort_by(|a, b| {
        b.filled
            .cmp(&a.filled)
            .then_with(|| a.display_name.cmp(&b.display_name))
    });
    cards
}

/// Build the capture board: most captures first, ties by name.
pub fn build_capture_board(
    players: &[Player],
    captures: &[Capture],
    filter: Option<CaptureStatus>,
) -> Vec<CaptureCard> {
    let mut cards: Vec<CaptureCard> = players
        .iter()
        .map(|player| {
            let own: Vec<&Capture> = captures.iter().filter(|c| c.owner_id == player.id).collect();
            let mut shown: Vec<Capture> = own
                .iter()
                .filter(|c| filter.is_none_or(|status| c.status == status))
                .map(|c| (*c).clone())
                .collect();
            shown.sort_by(|a, b| b.captured_at.cmp(&a.captured_at).then(b.id.cmp(&a.id)));
            CaptureCard {
                player_id: player.id,
                display_name: player.label(),
                total: own.len(),
                shown: shown.len(),
                captures: shown,
            }
        })
        .collect();
    cards.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.display_name.cmp(&b.display_name))
    });
    cards
}

impl<S: RosterStore> RosterService<S> {
    /// Every player's team.
    pub async fn team_board(&self) -> Result<Vec<TeamCard>, RosterError> {
        let players = self.call("list_profiles", self.store.list_profiles()).await?;
        let slots = self
            .call("list_all_team_slots", self.store.list_all_team_slots())
            .await?;
        Ok(build_team_board(&players, &slots))
    }

    /// Every player's captures, optionally filtered by status.
    pub async fn capture_board(
        &self,
        filter: Option<CaptureStatus>,
    ) -> Result<Vec<CaptureCard>, RosterError> {
        let players = self.call("list_profiles", self.store.list_profiles()).await?;
        let captures = self
            .call("list_all_captures", self.store.list_all_captures())
            .await?;
        Ok(build_capture_board(&players, &captures, filter))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use pokerun_types::{CaptureId, GameId, Role, RouteId, TeamSlotId};

    use super::*;

    fn player(name: &str) -> Player {
        Player {
            id: PlayerId::new(),
            display_name: name.to_owned(),
            role: Role::Player,
            avatar_key: None,
        }
    }

    fn slot(owner: PlayerId, number: i64, name: &str) -> TeamSlot {
        TeamSlot {
            id: TeamSlotId(number),
            owner_id: owner,
            slot: SlotNumber::new(number).unwrap(),
            creature_name: name.to_owned(),
            nickname: None,
        }
    }

    fn capture(id: i64, owner: PlayerId, status: CaptureStatus) -> Capture {
        Capture {
            id: CaptureId(id),
            owner_id: owner,
            creature_name: format!("Creature{id}"),
            nickname: format!("Nick{id}"),
            route_id: Some(RouteId(1)),
            route_name: None,
            game_id: Some(GameId(1)),
            status,
            captured_at: Utc::now(),
        }
    }

    #[test]
    fn team_board_lists_six_slots_and_sorts_by_filled() {
        let may = player("May");
        let red = player("Red");
        let slots = vec![
            slot(red.id, 1, "Pikachu"),
            slot(may.id, 2, "Torchic"),
            slot(may.id, 5, "Wingull"),
        ];
        let board = build_team_board(&[red.clone(), may.clone()], &slots);
        assert_eq!(board[0].player_id, may.id);
        assert_eq!(board[0].filled, 2);
        assert_eq!(board[0].slots.len(), 6);
        assert!(board[0].slots[0].creature_name.is_none());
        assert_eq!(board[0].slots[1].creature_name.as_deref(), Some("Torchic"));
        assert_eq!(board[1].player_id, red.id);
    }

    #[test]
    fn capture_board_filters_but_counts_everything() {
        let lyra = player("Lyra");
        let ethan = player("Ethan");
        let captures = vec![
            capture(1, lyra.id, CaptureStatus::Alive),
            capture(2, lyra.id, CaptureStatus::Dead),
            capture(3, lyra.id, CaptureStatus::Dead),
            capture(4, ethan.id, CaptureStatus::Alive),
        ];
        let board = build_capture_board(&[ethan, lyra.clone()], &captures, Some(CaptureStatus::Dead));
        assert_eq!(board[0].player_id, lyra.id);
        assert_eq!(board[0].total, 3);
        assert_eq!(board[0].shown, 2);
        assert_eq!(board[1].shown, 0);
        assert_eq!(board[1].total, 1);
    }
}
