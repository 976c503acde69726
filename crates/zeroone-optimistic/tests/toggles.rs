mod common;

use futures_util::poll;

use common::{MockNetwork, RecordingNotifier, post, profile};
use zeroone_optimistic::{Coordinator, Outcome, lock, shared};
use zeroone_types::api::Mutation;

#[tokio::test]
async fn like_applies_before_the_request_settles() {
    let coordinator = Coordinator::new(MockNetwork::ok().held(), RecordingNotifier::default());
    let entity = shared(post(1, 5, false));

    let pending = coordinator.toggle_like(&entity);
    tokio::pin!(pending);
    assert!(poll!(&mut pending).is_pending());

    {
        let p = lock(&entity);
        assert!(p.liked_by_current_user);
        assert_eq!(p.like_count, 6);
    }
    assert_eq!(coordinator.network().sent(), vec![Mutation::Like(1)]);

    coordinator.network().release(1);
    assert_eq!(pending.await, Outcome::Confirmed);
    assert!(coordinator.in_flight().is_empty());
}

#[tokio::test]
async fn failed_like_restores_snapshot_and_notifies_once() {
    let notifier = RecordingNotifier::default();
    let coordinator = Coordinator::new(MockNetwork::failing(), &notifier);
    let entity = shared(post(1, 5, false));

    assert_eq!(coordinator.toggle_like(&entity).await, Outcome::RolledBack);

    let p = lock(&entity);
    assert!(!p.liked_by_current_user);
    assert_eq!(p.like_count, 5);
    assert_eq!(notifier.messages(), vec!["Failed to like post".to_string()]);
}

#[tokio::test]
async fn double_trigger_while_outstanding_counts_once() {
    let coordinator = Coordinator::new(MockNetwork::ok().held(), RecordingNotifier::default());
    let entity = shared(post(1, 5, false));

    let first = coordinator.toggle_like(&entity);
    tokio::pin!(first);
    assert!(poll!(&mut first).is_pending());

    assert_eq!(coordinator.toggle_like(&entity).await, Outcome::Ignored);
    assert_eq!(lock(&entity).like_count, 6);
    assert_eq!(coordinator.network().sent().len(), 1);

    coordinator.network().release(1);
    assert_eq!(first.await, Outcome::Confirmed);
    assert_eq!(lock(&entity).like_count, 6);
}

#[tokio::test]
async fn guard_is_released_after_failure_so_user_can_retry() {
    let notifier = RecordingNotifier::default();
    let coordinator = Coordinator::new(MockNetwork::scripted(&[false, true]), &notifier);
    let entity = shared(post(3, 0, false));

    assert_eq!(coordinator.toggle_like(&entity).await, Outcome::RolledBack);
    assert_eq!(coordinator.toggle_like(&entity).await, Outcome::Confirmed);

    let p = lock(&entity);
    assert!(p.liked_by_current_user);
    assert_eq!(p.like_count, 1);
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn unlike_is_chosen_from_pre_mutation_state() {
    let coordinator = Coordinator::new(MockNetwork::ok(), RecordingNotifier::default());
    let entity = shared(post(4, 2, true));

    assert_eq!(coordinator.toggle_like(&entity).await, Outcome::Confirmed);
    assert_eq!(coordinator.network().sent(), vec![Mutation::Unlike(4)]);
    let p = lock(&entity);
    assert!(!p.liked_by_current_user);
    assert_eq!(p.like_count, 1);
}

#[tokio::test]
async fn unlike_never_drives_count_negative() {
    let notifier = RecordingNotifier::default();
    let coordinator = Coordinator::new(MockNetwork::failing(), &notifier);
    // Server says liked but reports zero likes: a stale count.
    let entity = shared(post(5, 0, true));

    let pending = coordinator.toggle_like(&entity);
    assert_eq!(pending.await, Outcome::RolledBack);

    let p = lock(&entity);
    assert_eq!(p.like_count, 0);
    assert!(p.liked_by_current_user);
    assert_eq!(notifier.messages(), vec!["Failed to unlike post".to_string()]);
}

#[tokio::test]
async fn rollback_restores_snapshot_not_inverse() {
    let notifier = RecordingNotifier::default();
    let coordinator = Coordinator::new(MockNetwork::failing().held(), &notifier);
    let entity = shared(post(6, 10, false));

    let pending = coordinator.toggle_like(&entity);
    tokio::pin!(pending);
    assert!(poll!(&mut pending).is_pending());

    // A server refresh lands while the like is in flight.
    lock(&entity).like_count = 42;

    coordinator.network().release(1);
    assert_eq!(pending.await, Outcome::RolledBack);
    assert_eq!(lock(&entity).like_count, 10);
}

#[tokio::test]
async fn different_posts_do_not_block_each_other() {
    let coordinator = Coordinator::new(MockNetwork::ok().held(), RecordingNotifier::default());
    let a = shared(post(1, 0, false));
    let b = shared(post(2, 0, false));

    let first = coordinator.toggle_like(&a);
    let second = coordinator.toggle_like(&b);
    tokio::pin!(first, second);
    assert!(poll!(&mut first).is_pending());
    assert!(poll!(&mut second).is_pending());
    assert_eq!(coordinator.in_flight().len(), 2);

    coordinator.network().release(2);
    assert_eq!(second.await, Outcome::Confirmed);
    assert_eq!(first.await, Outcome::Confirmed);
}

#[tokio::test]
async fn follow_toggle_round_trip() {
    let notifier = RecordingNotifier::default();
    let coordinator = Coordinator::new(MockNetwork::scripted(&[true, false]), &notifier);
    let user = shared(profile(9, 100, false));

    assert_eq!(coordinator.toggle_follow(&user).await, Outcome::Confirmed);
    {
        let u = lock(&user);
        assert!(u.is_followed_by_current_user);
        assert_eq!(u.follower_count, 101);
    }

    assert_eq!(coordinator.toggle_follow(&user).await, Outcome::RolledBack);
    {
        let u = lock(&user);
        assert!(u.is_followed_by_current_user);
        assert_eq!(u.follower_count, 101);
    }

    assert_eq!(
        coordinator.network().sent(),
        vec![Mutation::Follow(9), Mutation::Unfollow(9)]
    );
    assert_eq!(notifier.messages(), vec!["Failed to unfollow user".to_string()]);
}
