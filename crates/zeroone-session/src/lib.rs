use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};
use tracing::{debug, warn};

use zeroone_types::events::SessionEvent;
use zeroone_types::models::CurrentUser;

/// Signed-in user, bearer token and unread notification count.
///
/// One `Session` is created by the composition root and handed to whatever
/// needs it; clones share state. Components that want change notifications
/// take a [`Subscription`] and drop it when they go away.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    /// Change feed: every subscriber sees every event published after it subscribed
    events_tx: broadcast::Sender<SessionEvent>,

    auth: RwLock<Option<Auth>>,

    unread: RwLock<u64>,
}

#[derive(Clone)]
struct Auth {
    user: CurrentUser,
    token: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let (events_tx, _) = broadcast::channel(64);
        Self {
            inner: Arc::new(SessionInner {
                events_tx,
                auth: RwLock::new(None),
                unread: RwLock::new(0),
            }),
        }
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.inner.events_tx.send(event);
    }

    /// Subscribe to session changes.
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.inner.events_tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.events_tx.receiver_count()
    }

    // -- Auth --

    pub async fn sign_in(&self, user: CurrentUser, token: String) {
        debug!(user_id = user.id, "Session signed in as {}", user.username);
        *self.inner.auth.write().await = Some(Auth {
            user: user.clone(),
            token,
        });
        self.publish(SessionEvent::SignedIn { user });
    }

    /// Clear auth and the unread counter.
    pub async fn sign_out(&self) {
        let was_signed_in = self.inner.auth.write().await.take().is_some();
        *self.inner.unread.write().await = 0;
        if was_signed_in {
            self.publish(SessionEvent::SignedOut);
        }
    }

    pub async fn current_user(&self) -> Option<CurrentUser> {
        self.inner.auth.read().await.as_ref().map(|a| a.user.clone())
    }

    pub async fn token(&self) -> Option<String> {
        self.inner.auth.read().await.as_ref().map(|a| a.token.clone())
    }

    pub async fn is_signed_in(&self) -> bool {
        self.inner.auth.read().await.is_some()
    }

    pub async fn is_admin(&self) -> bool {
        self.inner
            .auth
            .read()
            .await
            .as_ref()
            .is_some_and(|a| a.user.is_admin())
    }

    // -- Unread notifications --

    pub async fn unread_count(&self) -> u64 {
        *self.inner.unread.read().await
    }

    /// Store a server-reported count. Publishes only when it changes.
    pub async fn set_unread_count(&self, count: u64) {
        let changed = {
            let mut unread = self.inner.unread.write().await;
            let changed = *unread != count;
            *unread = count;
            changed
        };
        if changed {
            self.publish(SessionEvent::UnreadCount { count });
        }
    }

    /// Local decrement after a notification was read. Saturates at zero.
    pub async fn decrement_unread(&self) {
        let count = {
            let mut unread = self.inner.unread.write().await;
            if *unread == 0 {
                return;
            }
            *unread -= 1;
            *unread
        };
        self.publish(SessionEvent::UnreadCount { count });
    }
}

/// A scoped view of the session change feed. Dropping it unsubscribes.
pub struct Subscription {
    rx: broadcast::Receiver<SessionEvent>,
}

impl Subscription {
    /// Next event, or `None` once every `Session` handle is gone.
    pub async fn recv(&mut self) -> Option<SessionEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("Session subscriber lagged by {} events", n);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Explicit teardown, for call sites where a drop would be easy to miss.
    pub fn close(self) {}
}
