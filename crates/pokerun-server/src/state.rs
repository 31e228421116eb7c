//! Shared application state for the HTTP API.

use std::sync::Arc;

use pokerun_roster::{RosterService, RosterStore};
use pokerun_species::SpeciesSource;

/// State shared by every handler.
///
/// Cloning is cheap: the store and the species catalog sit behind `Arc`s.
#[derive(Debug)]
pub struct AppState<S> {
    /// Roster consistency service over the configured store.
    pub roster: RosterService<S>,
    /// Lazily loaded species catalog.
    pub species: Arc<SpeciesSource>,
}

impl<S: RosterStore> AppState<S> {
    /// Bundle a roster service and a species source.
    pub const fn new(roster: RosterService<S>, species: Arc<SpeciesSource>) -> Self {
        Self { roster, species }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            roster: self.roster.clone(),
            species: Arc::clone(&self.species),
        }
    }
}
