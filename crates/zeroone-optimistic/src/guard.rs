use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;

use zeroone_types::models::{CommentId, NotificationId, PostId, ReportId, UserId};

use crate::lock;

/// The entity an action is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Post(PostId),
    User(UserId),
    Notification(NotificationId),
    Comment(CommentId),
    Report(ReportId),
    /// The current user's notification inbox as a whole
    Inbox,
}

/// Action families. A toggle and its inverse share one kind so that
/// like-then-unlike can't overlap either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Like,
    Follow,
    MarkRead,
    MarkAllRead,
    Hide,
    Delete,
    Report,
    Ban,
    Resolve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionKey {
    pub target: Target,
    pub kind: ActionKind,
}

impl ActionKey {
    pub fn new(target: Target, kind: ActionKind) -> Self {
        Self { target, kind }
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Target::Post(id) => write!(f, "{:?}(post={})", self.kind, id),
            Target::User(id) => write!(f, "{:?}(user={})", self.kind, id),
            Target::Notification(id) => write!(f, "{:?}(notification={})", self.kind, id),
            Target::Comment(id) => write!(f, "{:?}(comment={})", self.kind, id),
            Target::Report(id) => write!(f, "{:?}(report={})", self.kind, id),
            Target::Inbox => write!(f, "{:?}(inbox)", self.kind),
        }
    }
}

/// Set of actions whose request has been dispatched but not yet settled.
#[derive(Default)]
pub struct InFlight {
    keys: Mutex<HashSet<ActionKey>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key`. Returns `None` if it is already in flight. The key is
    /// released when the returned token is dropped.
    pub fn try_acquire(&self, key: ActionKey) -> Option<InFlightToken<'_>> {
        if lock(&self.keys).insert(key) {
            Some(InFlightToken { owner: self, key })
        } else {
            None
        }
    }

    pub fn contains(&self, key: &ActionKey) -> bool {
        lock(&self.keys).contains(key)
    }

    pub fn len(&self) -> usize {
        lock(&self.keys).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[must_use = "the key is released as soon as the token is dropped"]
pub struct InFlightToken<'a> {
    owner: &'a InFlight,
    key: ActionKey,
}

impl InFlightToken<'_> {
    pub fn key(&self) -> ActionKey {
        self.key
    }
}

impl Drop for InFlightToken<'_> {
    fn drop(&mut self) {
        lock(&self.owner.keys).remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_rejected_until_release() {
        let guard = InFlight::new();
        let key = ActionKey::new(Target::Post(1), ActionKind::Like);

        let token = guard.try_acquire(key).unwrap();
        assert!(guard.try_acquire(key).is_none());
        assert!(guard.contains(&key));

        drop(token);
        assert!(guard.is_empty());
        assert!(guard.try_acquire(key).is_some());
    }

    #[test]
    fn keys_are_per_entity_and_kind() {
        let guard = InFlight::new();
        let _a = guard.try_acquire(ActionKey::new(Target::Post(1), ActionKind::Like)).unwrap();
        let _b = guard.try_acquire(ActionKey::new(Target::Post(2), ActionKind::Like)).unwrap();
        let _c = guard.try_acquire(ActionKey::new(Target::Post(1), ActionKind::Delete)).unwrap();
        let _d = guard.try_acquire(ActionKey::new(Target::User(1), ActionKind::Follow)).unwrap();
        assert_eq!(guard.len(), 4);
    }

    #[test]
    fn display_names_the_target() {
        let key = ActionKey::new(Target::Notification(7), ActionKind::MarkRead);
        assert_eq!(key.to_string(), "MarkRead(notification=7)");
        let key = ActionKey::new(Target::Inbox, ActionKind::MarkAllRead);
        assert_eq!(key.to_string(), "MarkAllRead(inbox)");
    }
}
