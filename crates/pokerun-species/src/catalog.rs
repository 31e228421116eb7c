//! The name-to-id species catalog.
//!
//! Built once from PokeAPI's `/pokemon?limit=N` listing. Each listing entry
//! carries a slug and a resource URL ending in `/pokemon/<id>/`; entries
//! whose URL has no numeric id are skipped.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_species_name, pretty_name};

/// Base URL of the official artwork sprite set.
pub const ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Base URL of the classic sprite set.
pub const CLASSIC_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Raw `/pokemon` listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonListing {
    /// Listing entries in PokeAPI order.
    #[serde(default)]
    pub results: Vec<ListingEntry>,
}

/// One entry of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    /// Species slug, e.g. `mr-mime`.
    pub name: String,
    /// Resource URL, e.g. `https://pokeapi.co/api/v2/pokemon/122/`.
    pub url: String,
}

/// How to draw a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Sprite {
    /// The species is in the catalog.
    Known {
        /// National dex id.
        id: u32,
        /// Official artwork URL.
        artwork_url: String,
        /// Classic sprite URL, for when the artwork fails to load.
        classic_url: String,
    },
    /// Unknown species or catalog unavailable: draw a letter instead.
    Placeholder {
        /// First character of the name, uppercased, or `?`.
        letter: String,
    },
}

impl Sprite {
    /// Sprite for a known dex id.
    pub fn known(id: u32) -> Self {
        Self::Known {
            id,
            artwork_url: format!("{ARTWORK_BASE}/{id}.png"),
            classic_url: format!("{CLASSIC_BASE}/{id}.png"),
        }
    }

    /// Letter placeholder for `name`.
    pub fn placeholder(name: &str) -> Self {
        let letter = name
            .trim()
            .chars()
            .next()
            .map_or_else(|| String::from("?"), |c| c.to_uppercase().collect());
        Self::Placeholder { letter }
    }
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesMatch {
    /// PokeAPI slug.
    pub slug: String,
    /// Display name derived from the slug.
    pub display_name: String,
}

/// Extract the numeric id from a `/pokemon/<id>/` resource URL.
pub fn parse_species_id(url: &str) -> Option<u32> {
    let (_, tail) = url.rsplit_once("/pokemon/")?;
    let digits = tail.strip_suffix('/')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Slugs and ids of every known species.
#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    ids: HashMap<String, u32>,
    order: Vec<String>,
}

impl SpeciesCatalog {
    /// Build a catalog from a listing, skipping entries without an id.
    pub fn from_listing(listing: PokemonListing) -> Self {
        let mut catalog = Self::default();
        for entry in listing.results {
            let Some(id) = parse_species_id(&entry.url) else {
                tracing::debug!(name = %entry.name, url = %entry.url, "skipping listing entry without id");
                continue;
            };
            if catalog.ids.insert(entry.name.clone(), id).is_none() {
                catalog.order.push(entry.name);
            }
        }
        catalog
    }

    /// Number of species.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Dex id of a typed species name.
    pub fn id_of(&self, name: &str) -> Option<u32> {
        self.ids.get(&normalize_species_name(name)).copied()
    }

    /// Sprite for a typed species name.
    pub fn sprite(&self, name: &str) -> Sprite {
        self.id_of(name)
            .map_or_else(|| Sprite::placeholder(name), Sprite::known)
    }

    /// Up to `limit` slugs containing the trimmed, lowercased query, in
    /// catalog order. An empty query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SpeciesMatch> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.order
            .iter()
            .filter(|slug| slug.contains(&needle))
            .take(limit)
            .map(|slug| SpeciesMatch {
                slug: slug.clone(),
                display_name: pretty_name(slug),
            })
            .collect()
    }
}
