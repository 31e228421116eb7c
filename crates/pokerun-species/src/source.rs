//! PokeAPI-backed species source.
//!
//! The catalog is fetched once and shared by every caller. Concurrent
//! first calls wait on the same in-flight request. A failed load leaves the
//! cell empty, so the next call tries again.
//!
//! Species data is presentation only: [`SpeciesSource::sprite`] and
//! [`SpeciesSource::search`] never fail, they degrade to a placeholder or
//! an empty list and log the cause.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::catalog::{PokemonListing, SpeciesCatalog, SpeciesMatch, Sprite};
use crate::error::SpeciesError;

/// Default PokeAPI base URL.
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Number of listing entries requested; covers every species and form.
pub const DEFAULT_CATALOG_LIMIT: u32 = 2000;

/// Default number of search hits.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Configuration for the species source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeciesConfig {
    /// PokeAPI base URL, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Listing size requested when loading the catalog.
    #[serde(default = "default_catalog_limit")]
    pub catalog_limit: u32,
    /// Timeout for the catalog request, in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_owned()
}

const fn default_catalog_limit() -> u32 {
    DEFAULT_CATALOG_LIMIT
}

const fn default_request_timeout_ms() -> u64 {
    10_000
}

impl Default for SpeciesConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            catalog_limit: default_catalog_limit(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Lazily loaded, shared species catalog.
#[derive(Debug)]
pub struct SpeciesSource {
    client: reqwest::Client,
    config: SpeciesConfig,
    catalog: OnceCell<Arc<SpeciesCatalog>>,
}

impl SpeciesSource {
    /// Create a source. Nothing is fetched until the first lookup.
    ///
    /// # Errors
    ///
    /// Returns [`SpeciesError::Client`] if the HTTP client cannot be built.
    pub fn new(config: SpeciesConfig) -> Result<Self, SpeciesError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| SpeciesError::Client(e.to_string()))?;
        Ok(Self {
            client,
            config,
            catalog: OnceCell::new(),
        })
    }

    /// The active configuration.
    pub const fn config(&self) -> &SpeciesConfig {
        &self.config
    }

    /// The catalog, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`SpeciesError`] if the listing cannot be fetched or parsed.
    pub async fn catalog(&self) -> Result<Arc<SpeciesCatalog>, SpeciesError> {
        self.catalog
            .get_or_try_init(|| async { self.fetch_catalog().await.map(Arc::new) })
            .await
            .map(Arc::clone)
    }

    /// Sprite for a typed species name. Never fails.
    pub async fn sprite(&self, name: &str) -> Sprite {
        match self.catalog().await {
            Ok(catalog) => catalog.sprite(name),
            Err(err) => {
                tracing::warn!(error = %err, "species catalog unavailable, using placeholder sprite");
                Sprite::placeholder(name)
            }
        }
    }

    /// Up to `limit` species whose slug contains `query`. Never fails.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<SpeciesMatch> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        match self.catalog().await {
            Ok(catalog) => catalog.search(query, limit),
            Err(err) => {
                tracing::warn!(error = %err, "species catalog unavailable, returning no matches");
                Vec::new()
            }
        }
    }

    async fn fetch_catalog(&self) -> Result<SpeciesCatalog, SpeciesError> {
        let url = format!("{}/pokemon", self.config.api_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("limit", self.config.catalog_limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeciesError::Status(status.as_u16()));
        }

        let listing: PokemonListing = response.json().await?;
        let catalog = SpeciesCatalog::from_listing(listing);
        tracing::info!(species = catalog.len(), "Loaded species catalog");
        Ok(catalog)
    }
}
