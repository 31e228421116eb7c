//! Who is acting.
//!
//! The identity provider owns authentication; this crate only needs the
//! current user's id and a way to hear about sign-in and sign-out.
//! Subscribers get a [`watch::Receiver`] that always holds the latest
//! value, so nobody has to poll.

use pokerun_types::PlayerId;
use tokio::sync::watch;
use tracing::info;

/// Source of the current user.
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, or `None`. Absence is not an error.
    fn current_user(&self) -> Option<PlayerId>;

    /// Receive every subsequent sign-in and sign-out.
    fn subscribe(&self) -> watch::Receiver<Option<PlayerId>>;
}

/// In-process identity for embedded clients and tests.
#[derive(Debug)]
pub struct SessionIdentity {
    current: watch::Sender<Option<PlayerId>>,
}

impl SessionIdentity {
    /// Start signed out.
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self { current }
    }

    /// Start signed in as `id`.
    pub fn signed_in(id: PlayerId) -> Self {
        let (current, _) = watch::channel(Some(id));
        Self { current }
    }

    /// Sign in as `id`. Returns `false` if `id` was already signed in.
    pub fn sign_in(&self, id: PlayerId) -> bool {
        let changed = self.replace(Some(id));
        if changed {
            info!(player_id = %id, "signed in");
        }
        changed
    }

    /// Sign out. Returns `false` if nobody was signed in.
    pub fn sign_out(&self) -> bool {
        let changed = self.replace(None);
        if changed {
            info!("signed out");
        }
        changed
    }

    fn replace(&self, next: Option<PlayerId>) -> bool {
        self.current.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for SessionIdentity {
    fn current_user(&self) -> Option<PlayerId> {
        *self.current.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<Option<PlayerId>> {
        self.current.subscribe()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn signed_out_has_no_user() {
        assert_eq!(SessionIdentity::new().current_user(), None);
        assert!(!SessionIdentity::new().sign_out());
    }

    #[tokio::test]
    async fn subscribers_see_sign_in_and_sign_out() {
        let identity = SessionIdentity::new();
        let mut rx = identity.subscribe();
        let id = PlayerId::new();

        assert!(identity.sign_in(id));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Some(id));
        assert_eq!(identity.current_user(), Some(id));

        assert!(!identity.sign_in(id));
        assert!(!rx.has_changed().unwrap());

        assert!(identity.sign_out());
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), None);
    }
}
