//! Error types for the species source.
//!
//! These never reach a player: sprite lookup and search degrade to a
//! placeholder or an empty list. They exist so the degradation can be
//! logged with a cause.

/// Errors that can occur while loading the species catalog.
#[derive(Debug, thiserror::Error)]
pub enum SpeciesError {
    /// The HTTP request could not be completed.
    #[error("PokeAPI request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// PokeAPI answered with a non-success status.
    #[error("PokeAPI returned status {0}")]
    Status(u16),

    /// The HTTP client could not be built.
    #[error("HTTP client setup failed: {0}")]
    Client(String),
}
