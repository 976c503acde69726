mod common;

use std::cell::Cell;

use futures_util::poll;

use common::{MockNetwork, RecordingNotifier, notification, post};
use zeroone_optimistic::{
    Coordinator, DELETE_POST_PROMPT, DeleteOutcome, Outcome, lock, shared,
};
use zeroone_types::api::{Mutation, ReportRequest, ReportTarget};

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let coordinator = Coordinator::new(MockNetwork::ok(), RecordingNotifier::default());
    let posts = shared(vec![post(1, 0, false), post(2, 0, false)]);
    let asked = Cell::new(None::<String>);

    let gate = |prompt: &str| {
        asked.set(Some(prompt.to_string()));
        false
    };

    assert_eq!(coordinator.delete_post(&posts, 1, &gate).await, DeleteOutcome::Declined);
    assert!(coordinator.network().sent().is_empty());
    assert_eq!(lock(&posts).len(), 2);
    assert_eq!(asked.take().as_deref(), Some(DELETE_POST_PROMPT));
}

#[tokio::test]
async fn failed_delete_keeps_item_and_notifies() {
    let notifier = RecordingNotifier::default();
    let coordinator = Coordinator::new(MockNetwork::failing(), &notifier);
    let posts = shared(vec![post(1, 0, false), post(2, 0, false)]);

    let outcome = coordinator.delete_post(&posts, 2, &|_: &str| true).await;

    assert_eq!(outcome, DeleteOutcome::Failed);
    assert_eq!(lock(&posts).iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(notifier.messages(), vec!["Failed to delete post".to_string()]);
}

#[tokio::test]
async fn confirmed_delete_removes_exactly_once_after_server_agrees() {
    let coordinator = Coordinator::new(MockNetwork::ok().held(), RecordingNotifier::default());
    let posts = shared(vec![post(1, 0, false), post(2, 0, false), post(3, 0, false)]);
    let yes = |_: &str| true;

    let pending = coordinator.delete_post(&posts, 2, &yes);
    tokio::pin!(pending);
    assert!(poll!(&mut pending).is_pending());

    // No optimistic removal.
    assert_eq!(lock(&posts).len(), 3);
    assert_eq!(
        coordinator.delete_post(&posts, 2, &yes).await,
        DeleteOutcome::Ignored
    );

    coordinator.network().release(1);
    assert_eq!(pending.await, DeleteOutcome::Deleted);
    assert_eq!(lock(&posts).iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(coordinator.network().sent(), vec![Mutation::DeletePost(2)]);
}

#[tokio::test]
async fn delete_works_on_lists_of_shared_posts() {
    let coordinator = Coordinator::new(MockNetwork::ok(), RecordingNotifier::default());
    let feed = shared(vec![shared(post(7, 0, false)), shared(post(8, 0, false))]);

    let outcome = coordinator.admin_delete_post(&feed, 8, &|_: &str| true).await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(lock(&feed).len(), 1);
    assert_eq!(lock(&lock(&feed)[0]).id, 7);
    assert_eq!(coordinator.network().sent(), vec![Mutation::AdminDeletePost(8)]);
}

#[tokio::test]
async fn mark_read_is_optimistic_and_skips_read_items() {
    let notifier = RecordingNotifier::default();
    let coordinator = Coordinator::new(MockNetwork::scripted(&[false]), &notifier);
    let unread = shared(notification(1, false));
    let read = shared(notification(2, true));

    assert_eq!(coordinator.mark_read(&read).await, Outcome::Ignored);
    assert!(coordinator.network().sent().is_empty());

    assert_eq!(coordinator.mark_read(&unread).await, Outcome::RolledBack);
    assert!(!lock(&unread).is_read);
    assert_eq!(coordinator.mark_read(&unread).await, Outcome::Confirmed);
    assert!(lock(&unread).is_read);

    assert_eq!(
        coordinator.network().sent(),
        vec![Mutation::MarkRead(1), Mutation::MarkRead(1)]
    );
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn mark_all_read_rolls_back_each_flag() {
    let notifier = RecordingNotifier::default();
    let coordinator = Coordinator::new(MockNetwork::failing().held(), &notifier);
    let inbox = shared(vec![notification(1, true), notification(2, false), notification(3, false)]);

    let pending = coordinator.mark_all_read(&inbox);
    tokio::pin!(pending);
    assert!(poll!(&mut pending).is_pending());
    assert!(lock(&inbox).iter().all(|n| n.is_read));

    // The view appends a fresh notification while the request is out.
    lock(&inbox).push(notification(4, false));

    coordinator.network().release(1);
    assert_eq!(pending.await, Outcome::RolledBack);
    assert_eq!(
        lock(&inbox).iter().map(|n| n.is_read).collect::<Vec<_>>(),
        vec![true, false, false, false]
    );
    assert_eq!(
        notifier.messages(),
        vec!["Failed to mark notifications as read".to_string()]
    );
}

#[tokio::test]
async fn mark_all_read_with_nothing_unread_is_a_no_op() {
    let coordinator = Coordinator::new(MockNetwork::ok(), RecordingNotifier::default());
    let inbox = shared(vec![notification(1, true)]);
    assert_eq!(coordinator.mark_all_read(&inbox).await, Outcome::Ignored);
    assert!(coordinator.network().sent().is_empty());
}

#[tokio::test]
async fn hide_post_rolls_back_on_failure() {
    let notifier = RecordingNotifier::default();
    let coordinator = Coordinator::new(MockNetwork::scripted(&[false]), &notifier);
    let entity = shared(post(5, 0, false));

    assert_eq!(coordinator.hide_post(&entity).await, Outcome::RolledBack);
    assert!(!lock(&entity).is_hidden);
    assert_eq!(coordinator.hide_post(&entity).await, Outcome::Confirmed);
    assert!(lock(&entity).is_hidden);
    assert_eq!(coordinator.hide_post(&entity).await, Outcome::Ignored);
    assert_eq!(notifier.messages(), vec!["Failed to hide post".to_string()]);
}

#[tokio::test]
async fn duplicate_report_submission_is_ignored() {
    let coordinator = Coordinator::new(MockNetwork::ok().held(), RecordingNotifier::default());
    let report = ReportRequest {
        target_id: 11,
        target_type: ReportTarget::User,
        reason: "spam".into(),
    };

    let first = coordinator.submit_report(report.clone());
    tokio::pin!(first);
    assert!(poll!(&mut first).is_pending());
    assert_eq!(coordinator.submit_report(report.clone()).await, Outcome::Ignored);

    coordinator.network().release(1);
    assert_eq!(first.await, Outcome::Confirmed);
    assert_eq!(coordinator.network().sent(), vec![Mutation::Report(report)]);
}
