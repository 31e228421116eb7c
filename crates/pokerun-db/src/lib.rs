//! `PostgreSQL` data layer for the Pokerun run tracker.
//!
//! Provides [`PgRosterStore`], the production implementation of
//! [`pokerun_roster::RosterStore`], built from one small store per group of
//! tables:
//!
//! ```text
//! PgRosterStore
//!     |-- CaptureStore   (captures)
//!     |-- TeamStore      (team_slots)
//!     |-- ProfileStore   (profiles, progress)
//!     +-- RunStore       (rules, runs, games, routes)
//! ```
//!
//! # Modules
//!
//! - [`postgres`] -- Connection pool, configuration and migrations
//! - [`rows`] -- Row structs and their conversion into entity types
//! - [`capture_store`], [`team_store`], [`profile_store`], [`run_store`] -- Table operations
//! - [`roster_store`] -- The [`RosterStore`](pokerun_roster::RosterStore) implementation
//! - [`error`] -- [`DbError`]

pub mod capture_store;
pub mod error;
pub mod postgres;
pub mod profile_store;
pub mod roster_store;
pub mod rows;
pub mod run_store;
pub mod team_store;

pub use capture_store::CaptureStore;
pub use error::DbError;
pub use postgres::{PostgresConfig, PostgresPool};
pub use profile_store::ProfileStore;
pub use roster_store::PgRosterStore;
pub use run_store::RunStore;
pub use team_store::TeamStore;
