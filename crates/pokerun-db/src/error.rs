//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`], which wraps the underlying
//! [`sqlx`] errors. At the [`RosterStore`](pokerun_roster::RosterStore)
//! boundary they are flattened into [`StoreError`].

use pokerun_roster::StoreError;

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored value does not map onto a domain type.
    #[error("Corrupt row in {table}: {detail}")]
    Corrupt {
        /// Table the row came from.
        table: &'static str,
        /// What was wrong with it.
        detail: String,
    },

    /// A row that must always exist is missing.
    #[error("Missing row: {0}")]
    Missing(&'static str),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Corrupt { .. } => Self::Corrupt(err.to_string()),
            DbError::Missing(what) => Self::NotFound(what.to_owned()),
            DbError::Postgres(_) | DbError::Migration(_) | DbError::Config(_) => {
                Self::Unavailable(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_rows_stay_corrupt_at_the_boundary() {
        let err = DbError::Corrupt {
            table: "captures",
            detail: String::from("unknown status 'vivo'"),
        };
        assert!(matches!(StoreError::from(err), StoreError::Corrupt(msg) if msg.contains("vivo")));
    }

    #[test]
    fn connection_failures_become_unavailable() {
        let err = DbError::Postgres(sqlx::Error::PoolTimedOut);
        assert!(matches!(StoreError::from(err), StoreError::Unavailable(_)));
        assert!(matches!(
            StoreError::from(DbError::Missing("rules")),
            StoreError::NotFound(_)
        ));
    }
}
