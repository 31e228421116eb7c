//! Shared type definitions for the Pokerun run tracker.
//!
//! This crate is the single source of truth for the entity types used by the
//! store, the roster domain layer and the HTTP API. Types flow downstream to
//! `TypeScript` via `ts-rs` for the web front-end.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifier wrappers
//! - [`enums`] -- Capture status and player role
//! - [`values`] -- Validated values (`SlotNumber`, `BadgeCount`)
//! - [`structs`] -- Entity structs (players, captures, team slots, progress, lookup data)

pub mod enums;
pub mod ids;
pub mod structs;
pub mod values;

// Re-export all public types at crate root for convenience.
pub use enums::{CaptureStatus, Role};
pub use ids::{CaptureId, GameId, PlayerId, RouteId, TeamSlotId};
pub use structs::{
    Capture, CaptureDraft, Game, Player, Progress, Route, RuleDocument, RunContext, TeamSlot,
};
pub use values::{BadgeCount, MAX_BADGES, SlotNumber, SlotOutOfRange, TEAM_SIZE};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Exporting writes the files to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::PlayerId::export_all();
        let _ = crate::ids::CaptureId::export_all();
        let _ = crate::ids::TeamSlotId::export_all();
        let _ = crate::ids::GameId::export_all();
        let _ = crate::ids::RouteId::export_all();

        let _ = crate::enums::CaptureStatus::export_all();
        let _ = crate::enums::Role::export_all();

        let _ = crate::values::SlotNumber::export_all();
        let _ = crate::values::BadgeCount::export_all();

        let _ = crate::structs::Player::export_all();
        let _ = crate::structs::Capture::export_all();
        let _ = crate::structs::TeamSlot::export_all();
        let _ = crate::structs::Progress::export_all();
        let _ = crate::structs::RuleDocument::export_all();
        let _ = crate::structs::RunContext::export_all();
        let _ = crate::structs::Game::export_all();
        let _ = crate::structs::Route::export_all();
    }
}
