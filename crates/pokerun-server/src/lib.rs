//! HTTP API for the Pokerun run tracker.
//!
//! Exposes the roster service and the species catalog as JSON over HTTP.
//! Handlers are generic over the store, so the same router serves the
//! `PostgreSQL` store in production and the in-memory store in tests and
//! local development.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration with environment overrides
//! - [`auth`] -- Caller identity from the `x-player-id` header
//! - [`handlers`] -- Endpoint handlers
//! - [`router`] -- Route table, CORS and tracing layers
//! - [`seed`] -- Fixture data for the in-memory store
//! - [`server`] -- Listener and graceful shutdown
//! - [`state`] -- Shared handler state
//! - [`error`] -- [`ApiError`] and its status mapping

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod seed;
pub mod server;
pub mod state;

pub use auth::{CurrentPlayer, PLAYER_HEADER};
pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
