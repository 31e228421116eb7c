//! Profile avatars and trainer sprites.
//!
//! Profile avatars are a fixed catalog of creature sprites the player picks
//! from. Trainer sprites decorate the team board and are derived from the
//! player id, so every player keeps the same trainer without storing it.

use pokerun_types::PlayerId;
use serde::Serialize;

/// Base URL of the creature sprite set.
pub const POKEMON_SPRITE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Base URL of the trainer sprite set.
pub const TRAINER_SPRITE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/trainers";

/// One selectable profile avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Avatar {
    /// Stored key.
    pub key: &'static str,
    /// Display label.
    pub label: &'static str,
    /// National dex number used to build the sprite URL.
    pub dex_number: u16,
}

impl Avatar {
    /// Sprite URL.
    pub fn src(&self) -> String {
        format!("{POKEMON_SPRITE_BASE}/{}.png", self.dex_number)
    }
}

/// The avatar catalog. The first entry is the default.
pub const AVATARS: [Avatar; 10] = [
    Avatar { key: "pikachu", label: "Pikachu", dex_number: 25 },
    Avatar { key: "bulbasaur", label: "Bulbasaur", dex_number: 1 },
    Avatar { key: "charmander", label: "Charmander", dex_number: 4 },
    Avatar { key: "squirtle", label: "Squirtle", dex_number: 7 },
    Avatar { key: "eevee", label: "Eevee", dex_number: 133 },
    Avatar { key: "snorlax", label: "Snorlax", dex_number: 143 },
    Avatar { key: "gengar", label: "Gengar", dex_number: 94 },
    Avatar { key: "lucario", label: "Lucario", dex_number: 448 },
    Avatar { key: "mew", label: "Mew", dex_number: 151 },
    Avatar { key: "rayquaza", label: "Rayquaza", dex_number: 384 },
];

/// Trainer sprite names, indexed by [`trainer_avatar_index`].
pub const TRAINER_SPRITES: [&str; 8] =
    ["red", "leaf", "ethan", "lyra", "brendan", "may", "lucas", "dawn"];

/// Whether `key` names a catalog avatar.
pub fn is_known_avatar(key: &str) -> bool {
    AVATARS.iter().any(|a| a.key == key)
}

/// Sprite URL for a stored avatar key, falling back to the default avatar.
pub fn avatar_src(key: Option<&str>) -> String {
    key.and_then(|k| AVATARS.iter().find(|a| a.key == k))
        .unwrap_or(&AVATARS[0])
        .src()
}

/// Map a player id onto `0..modulus`.
///
/// Rolling hash `h = h * 31 + unit` over the UTF-16 code units of the id,
/// wrapping at 32 bits. Returns `0` when `modulus` is `0`.
pub fn trainer_avatar_index(user_id: &str, modulus: usize) -> usize {
    let hash = user_id
        .encode_utf16()
        .fold(0_u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)));
    usize::try_from(hash)
        .ok()
        .and_then(|h| h.checked_rem(modulus))
        .unwrap_or(0)
}

/// Trainer sprite URL for a player.
pub fn trainer_avatar_url(id: PlayerId) -> String {
    let index = trainer_avatar_index(&id.to_string(), TRAINER_SPRITES.len());
    let name = TRAINER_SPRITES.get(index).copied().unwrap_or("red");
    format!("{TRAINER_SPRITE_BASE}/{name}.png")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn unknown_avatar_falls_back_to_default() {
        assert_eq!(avatar_src(Some("missingno")), format!("{POKEMON_SPRITE_BASE}/25.png"));
        assert_eq!(avatar_src(None), format!("{POKEMON_SPRITE_BASE}/25.png"));
        assert_eq!(avatar_src(Some("gengar")), format!("{POKEMON_SPRITE_BASE}/94.png"));
    }

    #[test]
    fn catalog_keys_are_known() {
        assert!(AVATARS.iter().all(|a| is_known_avatar(a.key)));
        assert!(!is_known_avatar("Pikachu"));
    }

    #[test]
    fn hash_matches_rolling_formula() {
        assert_eq!(trainer_avatar_index("a", 8), 1);
        assert_eq!(trainer_avatar_index("ab", 8), 1);
        assert_eq!(trainer_avatar_index("ab", 1000), 105);
        assert_eq!(trainer_avatar_index("anything", 0), 0);
    }

    #[test]
    fn hash_wraps_on_long_ids() {
        assert_eq!(trainer_avatar_index("67e55044-10b1-426f-9247-bb680e5fe0c8", 8), 0);
        assert_eq!(trainer_avatar_index("00000000-0000-0000-0000-000000000000", 8), 0);
    }

    #[test]
    fn trainer_url_is_stable() {
        let id = PlayerId(Uuid::nil());
        assert_eq!(trainer_avatar_url(id), format!("{TRAINER_SPRITE_BASE}/red.png"));
        assert_eq!(trainer_avatar_url(id), trainer_avatar_url(id));
    }
}
