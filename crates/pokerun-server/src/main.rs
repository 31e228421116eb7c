//! Pokerun server binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `pokerun-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Create the species source (the catalog loads on first use)
//! 4. Connect to `PostgreSQL` and migrate, or seed the in-memory store
//! 5. Serve the HTTP API until `Ctrl-C`

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use pokerun_db::{PgRosterStore, PostgresConfig, PostgresPool};
use pokerun_roster::{MemoryStore, RosterService, RosterStore};
use pokerun_server::config::{CONFIG_FILE, LoggingSection};
use pokerun_server::seed::seed_memory_store;
use pokerun_server::{AppConfig, AppState, start_server};
use pokerun_species::SpeciesSource;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE))
        .context("failed to load configuration")?;

    init_tracing(&config.logging);
    info!(
        host = %config.server.host,
        port = config.server.port,
        call_timeout_ms = config.store.call_timeout_ms,
        species_api = %config.species.api_url,
        persistent = config.store.database_url.is_some(),
        "pokerun-server starting"
    );

    let species = Arc::new(
        SpeciesSource::new(config.species.clone()).context("failed to create species source")?,
    );

    if let Some(url) = &config.store.database_url {
        let pg_config = PostgresConfig::new(url).with_max_connections(config.store.max_connections);
        let pool = PostgresPool::connect(&pg_config)
            .await
            .context("failed to connect to PostgreSQL")?;
        if config.store.run_migrations {
            pool.run_migrations()
                .await
                .context("failed to run migrations")?;
        }

        let store = Arc::new(PgRosterStore::new(pool.clone()));
        let result = serve(&config, store, species).await;
        pool.close().await;
        result
    } else {
        info!("No database configured, using the in-memory store");
        let store = MemoryStore::new();
        seed_memory_store(&store, &config.seed)
            .await
            .context("failed to seed the in-memory store")?;
        serve(&config, Arc::new(store), species).await
    }
}

async fn serve<S: RosterStore>(
    config: &AppConfig,
    store: Arc<S>,
    species: Arc<SpeciesSource>,
) -> anyhow::Result<()> {
    let roster = RosterService::new(store, Duration::from_millis(config.store.call_timeout_ms));
    let state = AppState::new(roster, species);
    start_server(&config.server, state)
        .await
        .context("HTTP server failed")?;
    Ok(())
}

/// `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingSection) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
