//! Validated value types.
//!
//! A [`SlotNumber`] is always within `1..=6` and a [`BadgeCount`] is always
//! within `0..=8`. Both reject or clamp at construction so the rest of the
//! workspace never re-checks bounds.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of positions on a player's team.
pub const TEAM_SIZE: u8 = 6;

/// Number of gym badges in a run.
pub const MAX_BADGES: u8 = 8;

/// A slot number outside `1..=6` was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("slot number {0} is outside 1..={TEAM_SIZE}")]
pub struct SlotOutOfRange(pub i64);

/// One of the six team positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "i64", into = "u8")]
#[ts(export, export_to = "bindings/")]
pub struct SlotNumber(u8);

impl SlotNumber {
    /// Validate a raw slot number.
    pub fn new(raw: i64) -> Result<Self, SlotOutOfRange> {
        u8::try_from(raw)
            .ok()
            .filter(|n| (1..=TEAM_SIZE).contains(n))
            .map(Self)
            .ok_or(SlotOutOfRange(raw))
    }

    /// The slot number as stored.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// All six slots in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=TEAM_SIZE).map(Self)
    }
}

impl TryFrom<i64> for SlotNumber {
    type Error = SlotOutOfRange;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<SlotNumber> for u8 {
    fn from(slot: SlotNumber) -> Self {
        slot.0
    }
}

impl core::fmt::Display for SlotNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of badges a player has earned, always within `0..=8`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(from = "i64", into = "u8")]
#[ts(export, export_to = "bindings/")]
pub struct BadgeCount(u8);

impl BadgeCount {
    /// Clamp arbitrary user input into a badge count.
    ///
    /// Non-finite input becomes zero; fractional input is floored.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamp_from(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self(0);
        }
        let floored = raw.floor();
        if floored <= 0.0 {
            Self(0)
        } else if floored >= f64::from(MAX_BADGES) {
            Self(MAX_BADGES)
        } else {
            // Range-checked above, the conversion is exact.
            Self(floored as u8)
        }
    }

    /// The badge count as stored.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<i64> for BadgeCount {
    fn from(raw: i64) -> Self {
        Self(u8::try_from(raw.clamp(0, i64::from(MAX_BADGES))).unwrap_or(0))
    }
}

impl From<BadgeCount> for u8 {
    fn from(count: BadgeCount) -> Self {
        count.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_bounds() {
        assert!(SlotNumber::new(0).is_err());
        assert_eq!(SlotNumber::new(1).map(SlotNumber::get), Ok(1));
        assert_eq!(SlotNumber::new(6).map(SlotNumber::get), Ok(6));
        assert_eq!(SlotNumber::new(7), Err(SlotOutOfRange(7)));
        assert!(SlotNumber::new(-1).is_err());
    }

    #[test]
    fn slot_all_is_one_through_six() {
        let all: Vec<u8> = SlotNumber::all().map(SlotNumber::get).collect();
        assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn slot_deserialize_rejects_out_of_range() {
        let bad: Result<SlotNumber, _> = serde_json::from_str("9");
        assert!(bad.is_err());
        let good: Result<SlotNumber, _> = serde_json::from_str("3");
        assert_eq!(good.ok().map(SlotNumber::get), Some(3));
    }

    #[test]
    fn badge_clamp_examples() {
        assert_eq!(BadgeCount::clamp_from(-5.0).get(), 0);
        assert_eq!(BadgeCount::clamp_from(3.7).get(), 3);
        assert_eq!(BadgeCount::clamp_from(8.0).get(), 8);
        assert_eq!(BadgeCount::clamp_from(20.0).get(), 8);
    }

    #[test]
    fn badge_clamp_non_finite_is_zero() {
        assert_eq!(BadgeCount::clamp_from(f64::NAN).get(), 0);
        assert_eq!(BadgeCount::clamp_from(f64::INFINITY).get(), 0);
        assert_eq!(BadgeCount::clamp_from(f64::NEG_INFINITY).get(), 0);
    }

    #[test]
    fn badge_from_stored_value_clamps() {
        assert_eq!(BadgeCount::from(12).get(), 8);
        assert_eq!(BadgeCount::from(-1).get(), 0);
    }
}
