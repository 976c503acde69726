//! Optimistic mutations for toggle-style and destructive user actions.
//!
//! A like, follow or mark-read is applied to the caller's entity right away,
//! the request goes out, and the entity is restored to its exact prior
//! values if the request fails. Deletes are confirmed first and only applied
//! after the server agrees.

pub mod actions;
pub mod coordinator;
pub mod guard;
pub mod ports;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use actions::{DELETE_COMMENT_PROMPT, DELETE_POST_PROMPT, DELETE_USER_PROMPT, PostHandle};
pub use coordinator::{Applied, Coordinator, DeleteOutcome, Outcome};
pub use guard::{ActionKey, ActionKind, InFlight, InFlightToken, Target};
pub use ports::{ConfirmGate, Network, Notifier, NullNotifier, TracingNotifier};

/// An entity owned by a view and lent to the coordinator.
pub type Shared<T> = Arc<Mutex<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(Mutex::new(value))
}

/// Lock, recovering from poisoning. Entity locks are only held for
/// synchronous field updates, so a poisoned entity is still consistent.
pub fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
