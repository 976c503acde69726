use tracing::{debug, info, warn};

use zeroone_types::api::Mutation;

use crate::guard::{ActionKey, InFlight};
use crate::ports::{ConfirmGate, Network, Notifier};
use crate::{Shared, lock};

/// How an optimistic invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded; the local state stands.
    Confirmed,
    /// The request failed; the local state was restored and the user notified.
    RolledBack,
    /// Nothing was applied or sent: the same action was already in flight
    /// for this entity, or there was nothing to change.
    Ignored,
}

/// How a confirmed removal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user said no; nothing was sent.
    Declined,
    /// The server confirmed and the item was removed from the collection.
    Deleted,
    /// The server refused; the collection is untouched and the user notified.
    Failed,
    /// A delete for this item was already in flight.
    Ignored,
}

/// Result of the synchronous half of an optimistic action: what to send,
/// how to undo, and what to tell the user if it has to be undone.
pub struct Applied<S> {
    pub snapshot: S,
    pub mutation: Mutation,
    pub failure_message: String,
}

impl<S> Applied<S> {
    pub fn new(snapshot: S, mutation: Mutation, failure_message: impl Into<String>) -> Self {
        Self {
            snapshot,
            mutation,
            failure_message: failure_message.into(),
        }
    }
}

/// Applies local changes immediately, sends the matching request and
/// reconciles once it settles.
///
/// At most one action per [`ActionKey`] is in flight; a second invocation
/// while the first is outstanding returns [`Outcome::Ignored`] without
/// touching the entity or the network. Failures are never retried.
pub struct Coordinator<N, T> {
    network: N,
    notifier: T,
    in_flight: InFlight,
}

impl<N: Network, T: Notifier> Coordinator<N, T> {
    pub fn new(network: N, notifier: T) -> Self {
        Self {
            network,
            notifier,
            in_flight: InFlight::new(),
        }
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    /// Run one optimistic action against `entity`.
    ///
    /// `mutate` sees the pre-mutation state: it captures a snapshot, picks
    /// the request from that state, then mutates. Returning `None` means
    /// there is nothing to do. On failure `restore` receives the snapshot
    /// back; it must write those exact values, not compute an inverse.
    pub async fn apply<E, S, M, R>(
        &self,
        key: ActionKey,
        entity: &Shared<E>,
        mutate: M,
        restore: R,
    ) -> Outcome
    where
        M: FnOnce(&mut E) -> Option<Applied<S>>,
        R: FnOnce(&mut E, S),
    {
        let Some(_token) = self.in_flight.try_acquire(key) else {
            debug!(%key, "Already in flight, ignoring");
            return Outcome::Ignored;
        };

        let applied = {
            let mut entity = lock(entity);
            mutate(&mut *entity)
        };
        let Some(Applied {
            snapshot,
            mutation,
            failure_message,
        }) = applied
        else {
            debug!(%key, "Nothing to apply");
            return Outcome::Ignored;
        };

        debug!(%key, %mutation, "Applied locally, dispatching");

        match self.network.send(mutation).await {
            Ok(()) => {
                info!(%key, "Confirmed");
                Outcome::Confirmed
            }
            Err(e) => {
                {
                    let mut entity = lock(entity);
                    restore(&mut *entity, snapshot);
                }
                warn!(%key, error = %e, "Request failed, rolled back");
                self.notifier.notify(&failure_message);
                Outcome::RolledBack
            }
        }
    }

    /// Ask, send, and only then remove the first item matching `matches`.
    #[allow(clippy::too_many_arguments)]
    pub async fn remove_confirmed<E, F, G>(
        &self,
        key: ActionKey,
        collection: &Shared<Vec<E>>,
        matches: F,
        gate: &G,
        prompt: &str,
        mutation: Mutation,
        failure_message: &str,
    ) -> DeleteOutcome
    where
        F: Fn(&E) -> bool,
        G: ConfirmGate + ?Sized,
    {
        let Some(_token) = self.in_flight.try_acquire(key) else {
            debug!(%key, "Already in flight, ignoring");
            return DeleteOutcome::Ignored;
        };

        if !gate.confirm(prompt) {
            debug!(%key, "Declined by user");
            return DeleteOutcome::Declined;
        }

        debug!(%key, %mutation, "Dispatching");

        match self.network.send(mutation).await {
            Ok(()) => {
                let mut items = lock(collection);
                if let Some(pos) = items.iter().position(|item| matches(item)) {
                    items.remove(pos);
                }
                info!(%key, "Deleted");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!(%key, error = %e, "Delete failed");
                self.notifier.notify(failure_message);
                DeleteOutcome::Failed
            }
        }
    }

    /// Plain guarded request with no local state to reconcile.
    pub async fn submit(&self, key: ActionKey, mutation: Mutation, failure_message: &str) -> Outcome {
        let Some(_token) = self.in_flight.try_acquire(key) else {
            debug!(%key, "Already in flight, ignoring");
            return Outcome::Ignored;
        };

        debug!(%key, %mutation, "Dispatching");

        match self.network.send(mutation).await {
            Ok(()) => {
                info!(%key, "Confirmed");
                Outcome::Confirmed
            }
            Err(e) => {
                warn!(%key, error = %e, "Request failed");
                self.notifier.notify(failure_message);
                Outcome::RolledBack
            }
        }
    }
}
