use std::fmt;
use std::future::Future;
use std::sync::Arc;

use zeroone_types::api::Mutation;

/// Transport for mutations. Implemented by the REST client; tests plug in
/// scripted fakes.
pub trait Network: Send + Sync {
    type Error: fmt::Display + Send;

    fn send(&self, mutation: Mutation) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl<N: Network> Network for Arc<N> {
    type Error = N::Error;

    fn send(&self, mutation: Mutation) -> impl Future<Output = Result<(), Self::Error>> + Send {
        (**self).send(mutation)
    }
}

/// User-visible, fire-and-forget message (a toast in the web client).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

impl<T: Notifier> Notifier for Arc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// Notifier that writes to the log.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(target: "zeroone::notify", "{}", message);
    }
}

/// No-op notifier.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str) {}
}

/// Synchronous yes/no question to the user, asked before destructive actions.
pub trait ConfirmGate {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> ConfirmGate for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
