//! Roster consistency and the rest of the run tracker's domain logic.
//!
//! Everything here operates through the [`RosterStore`] trait and never
//! touches a database or the network directly. The `PostgreSQL` store lives
//! in `pokerun-db`; [`MemoryStore`] backs tests and local runs.
//!
//! # Modules
//!
//! - [`roster`] -- Slot assignment, eligibility and the capture cascade
//! - [`captures`] -- Recording, status changes and deletion of captures
//! - [`progress`] -- Badge clamping, saving and the ranking board
//! - [`admin`] -- Rules document, run context and lookup data
//! - [`profiles`] -- Player profiles and avatars
//! - [`board`] -- Public team and capture boards
//! - [`avatar`] -- Avatar catalog and trainer sprite hashing
//! - [`identity`] -- Current-user source with change subscription
//! - [`normalize`] -- Creature name keys
//! - [`store`] -- The persistent store trait
//! - [`memory`] -- In-memory store
//! - [`service`] -- [`RosterService`] handle and the store call timeout
//! - [`error`] -- [`RosterError`] and [`StoreError`]

pub mod admin;
pub mod avatar;
pub mod board;
pub mod captures;
pub mod error;
pub mod identity;
pub mod memory;
pub mod normalize;
pub mod profiles;
pub mod progress;
pub mod roster;
pub mod service;
pub mod store;

pub use board::{CaptureCard, SlotView, TeamCard};
pub use captures::{CaptureUpdate, NewCapture};
pub use error::{RosterError, StoreError};
pub use identity::{IdentityProvider, SessionIdentity};
pub use memory::MemoryStore;
pub use normalize::CreatureKey;
pub use progress::{RankingEntry, clamp_badges};
pub use roster::CaptureChange;
pub use service::{DEFAULT_CALL_TIMEOUT_MS, RosterService};
pub use store::RosterStore;
