use tokio::task::JoinHandle;
use tracing::info;

use zeroone_session::Subscription;
use zeroone_types::events::SessionEvent;

/// Log unread-count changes until the session goes away. Resolves to the
/// last count seen.
pub fn watch_unread(mut events: Subscription) -> JoinHandle<Option<u64>> {
    tokio::spawn(async move {
        let mut last = None;
        while let Some(event) = events.recv().await {
            if let SessionEvent::UnreadCount { count } = event {
                info!(count, "Unread notifications");
                last = Some(count);
            }
        }
        last
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeroone_session::Session;

    #[tokio::test]
    async fn drains_events_published_before_the_session_drops() {
        let session = Session::new();
        let watcher = watch_unread(session.subscribe());

        session.set_unread_count(3).await;
        session.decrement_unread().await;
        drop(session);

        assert_eq!(watcher.await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn no_changes_means_none() {
        let session = Session::new();
        let watcher = watch_unread(session.subscribe());
        drop(session);
        assert_eq!(watcher.await.unwrap(), None);
    }
}
