//! The roster service handle.
//!
//! [`RosterService`] owns a shared store and the per-call timeout. The
//! operations themselves are split across the sibling modules
//! ([`roster`](crate::roster), [`captures`](crate::captures),
//! [`progress`](crate::progress), [`admin`](crate::admin),
//! [`profiles`](crate::profiles), [`board`](crate::board)) as further
//! `impl` blocks on this type.

use core::future::Future;
use std::sync::Arc;
use std::time::Duration;

use pokerun_types::{Player, PlayerId};
use tracing::{debug, warn};

use crate::error::{RosterError, StoreError};
use crate::store::RosterStore;

/// Default bound on a single store call, in milliseconds.
pub const DEFAULT_CALL_TIMEOUT_MS: u64 = 6000;

/// Domain operations over a [`RosterStore`].
///
/// Cloning is cheap; clones share the same store.
#[derive(Debug)]
pub struct RosterService<S> {
    pub(crate) store: Arc<S>,
    call_timeout: Duration,
}

impl<S> Clone for RosterService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            call_timeout: self.call_timeout,
        }
    }
}

impl<S: RosterStore> RosterService<S> {
    /// Create a service over `store`, bounding every store call by
    /// `call_timeout`.
    pub const fn new(store: Arc<S>, call_timeout: Duration) -> Self {
        Self {
            store,
            call_timeout,
        }
    }

    /// Create a service with the default call timeout.
    pub const fn with_default_timeout(store: Arc<S>) -> Self {
        Self::new(store, Duration::from_millis(DEFAULT_CALL_TIMEOUT_MS))
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The configured per-call bound.
    pub const fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Run one store call under the timeout.
    pub(crate) async fn call<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<T, StoreError>> + Send,
    ) -> Result<T, RosterError> {
        match tokio::time::timeout(self.call_timeout, fut).await {
            Ok(result) => result.map_err(|err| {
                warn!(operation, error = %err, "store call failed");
                RosterError::Store(err)
            }),
            Err(_elapsed) => {
                let timeout_ms = u64::try_from(self.call_timeout.as_millis()).unwrap_or(u64::MAX);
                warn!(operation, timeout_ms, "store call timed out");
                Err(RosterError::Timeout {
                    operation,
                    timeout_ms,
                })
            }
        }
    }

    /// Load the actor's profile and require the admin role.
    pub(crate) async fn require_admin(
        &self,
        actor: PlayerId,
        action: &'static str,
    ) -> Result<Player, RosterError> {
        let profile = self.call("get_profile", self.store.get_profile(actor)).await?;
        match profile {
            Some(player) if player.is_admin() => Ok(player),
            _ => {
                debug!(player_id = %actor, action, "admin action refused");
                Err(RosterError::Forbidden { action })
            }
        }
    }
}
