//! Loading fixture data into the in-memory store.

use chrono::Utc;
use pokerun_roster::{MemoryStore, RosterStore, StoreError};
use pokerun_types::{Player, PlayerId, Role};
use tracing::{info, warn};

use crate::config::SeedSection;

/// Counts of what [`seed_memory_store`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Games inserted.
    pub games: usize,
    /// Routes inserted.
    pub routes: usize,
    /// Admin profiles created or promoted.
    pub admins: usize,
    /// Whether an active game was selected.
    pub active_game: bool,
}

/// Insert the configured games, routes and admins, then select the active
/// game. An `active_game` naming no seeded game is logged and skipped.
///
/// # Errors
///
/// Returns [`StoreError`] if selecting the active game fails.
pub async fn seed_memory_store(
    store: &MemoryStore,
    seed: &SeedSection,
) -> Result<SeedSummary, StoreError> {
    let mut summary = SeedSummary::default();

    for entry in &seed.games {
        let game = store.insert_game(&entry.name).await;
        summary.games = summary.games.saturating_add(1);
        for route in &entry.routes {
            store.insert_route(game.id, route, None).await;
            summary.routes = summary.routes.saturating_add(1);
        }
    }

    for &id in &seed.admins {
        let id = PlayerId::from(id);
        if !store.set_role(id, Role::Admin).await {
            store
                .put_profile(Player {
                    id,
                    display_name: String::new(),
                    role: Role::Admin,
                    avatar_key: None,
                })
                .await;
        }
        summary.admins = summary.admins.saturating_add(1);
    }

    if let Some(name) = &seed.active_game {
        let games = store.list_games().await?;
        match games.iter().find(|g| g.name.eq_ignore_ascii_case(name.trim())) {
            Some(game) => {
                store.set_active_game(game.id, Utc::now()).await?;
                summary.active_game = true;
            }
            None => warn!(game = %name, "seed active_game names no seeded game, skipping"),
        }
    }

    info!(
        games = summary.games,
        routes = summary.routes,
        admins = summary.admins,
        active_game = summary.active_game,
        "In-memory store seeded"
    );
    Ok(summary)
}
