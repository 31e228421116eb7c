//! Badge progress and the ranking board.

use chrono::{DateTime, Utc};
use pokerun_types::{BadgeCount, Player, PlayerId, Progress};
use serde::Serialize;
use tracing::info;

use crate::error::RosterError;
use crate::service::RosterService;
use crate::store::RosterStore;

/// Clamp raw badge input into `0..=8`.
///
/// Non-finite input becomes `0`; fractions are floored.
pub fn clamp_badges(raw: f64) -> BadgeCount {
    BadgeCount::clamp_from(raw)
}

/// One row of the ranking board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    /// 1-based position. Players with equal badges and timestamps still get
    /// distinct positions.
    pub position: usize,
    /// The player.
    pub player_id: PlayerId,
    /// Name with the short-id fallback applied.
    pub display_name: String,
    /// Badge count; `0` for players who never saved progress.
    pub badges: BadgeCount,
    /// When the count was last saved.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Order players by badges (desc), then by who reached the count first,
/// then by name. Players without saved progress rank as zero badges and
/// sort after anyone with a timestamp.
pub fn rank_players(players: &[Player], progress: &[Progress]) -> Vec<RankingEntry> {
    let mut rows: Vec<RankingEntry> = players
        .iter()
        .map(|player| {
            let saved = progress.iter().find(|p| p.owner_id == player.id);
            RankingEntry {
                position: 0,
                player_id: player.id,
                display_name: player.label(),
                badges: saved.map(|p| p.badges).unwrap_or_default(),
                updated_at: saved.and_then(|p| p.updated_at),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.badges
            .cmp(&a.badges)
            .then_with(|| match (a.updated_at, b.updated_at) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => core::cmp::Ordering::Less,
                (None, Some(_)) => core::cmp::Ordering::Greater,
                (None, None) => core::cmp::Ordering::Equal,
            })
            .then_with(|| a.display_name.cmp(&b.display_name))
    });
    for (index, row) in rows.iter_mut().enumerate() {
        row.position = index.saturating_add(1);
    }
    rows
}

impl<S: RosterStore> RosterService<S> {
    /// Save the owner's badge count, clamping the input.
    pub async fn save_badges(&self, owner: PlayerId, raw: f64) -> Result<Progress, RosterError> {
        let badges = clamp_badges(raw);
        let saved = self
            .call("upsert_progress", self.store.upsert_progress(owner, badges, Utc::now()))
            .await?;
        info!(player_id = %owner, badges = badges.get(), "badges saved");
        Ok(saved)
    }

    /// The owner's progress, if any was ever saved.
    pub async fn progress(&self, owner: PlayerId) -> Result<Option<Progress>, RosterError> {
        self.call("get_progress", self.store.get_progress(owner)).await
    }

    /// Every player ranked by badges.
    pub async fn ranking(&self) -> Result<Vec<RankingEntry>, RosterError> {
        let players = self.call("list_profiles", self.store.list_profiles()).await?;
        let progress = self.call("list_progress", self.store.list_progress()).await?;
        Ok(rank_players(&players, &progress))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use pokerun_types::Role;
    use proptest::prelude::*;

    use super::*;

    fn player(name: &str) -> Player {
        Player {
            id: PlayerId::new(),
            display_name: name.to_owned(),
            role: Role::Player,
            avatar_key: None,
        }
    }

    fn saved(owner: PlayerId, badges: i64, minute: u32) -> Progress {
        Progress {
            owner_id: owner,
            badges: BadgeCount::from(badges),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 6, 1, 10, minute, 0).unwrap()),
        }
    }

    #[test]
    fn clamp_examples() {
        let stored: Vec<u8> = [-5.0, 3.7, 8.0, 20.0]
            .into_iter()
            .map(|raw| clamp_badges(raw).get())
            .collect();
        assert_eq!(stored, vec![0, 3, 8, 8]);
    }

    #[test]
    fn ranking_orders_by_badges_then_time_then_name() {
        let misty = player("Misty");
        let brock = player("Brock");
        let ash = player("Ash");
        let gary = player("Gary");
        let progress = vec![
            saved(misty.id, 3, 30),
            saved(brock.id, 5, 45),
            saved(ash.id, 3, 10),
        ];
        let ranking = rank_players(&[misty, brock, ash, gary], &progress);
        let names: Vec<&str> = ranking.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["Brock", "Ash", "Misty", "Gary"]);
        let positions: Vec<usize> = ranking.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
        assert_eq!(ranking[3].badges.get(), 0);
        assert!(ranking[3].updated_at.is_none());
    }

    proptest! {
        #[test]
        fn clamp_always_in_range(raw in proptest::num::f64::ANY) {
            prop_assert!(clamp_badges(raw).get() <= pokerun_types::MAX_BADGES);
        }

        #[test]
        fn clamp_is_identity_on_valid_counts(n in 0u8..=8) {
            prop_assert_eq!(clamp_badges(f64::from(n)).get(), n);
        }
    }
}
