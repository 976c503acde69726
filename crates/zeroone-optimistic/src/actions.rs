use std::collections::HashMap;

use zeroone_types::api::{Mutation, ReportRequest, ReportTarget};
use zeroone_types::models::{
    AdminUser, Comment, CommentId, Notification, NotificationId, Post, PostId, Report, ReportStatus,
    UserId, UserProfile,
};

use crate::coordinator::{Applied, Coordinator, DeleteOutcome, Outcome};
use crate::guard::{ActionKey, ActionKind, Target};
use crate::ports::{ConfirmGate, Network, Notifier};
use crate::{Shared, lock};

pub const DELETE_POST_PROMPT: &str =
    "Are you sure you want to delete this post? This action is irreversible.";
pub const DELETE_COMMENT_PROMPT: &str = "Are you sure you want to delete this comment?";
pub const DELETE_USER_PROMPT: &str = "Delete this user? This is irreversible.";

/// Anything a post list can hold: plain posts or shared handles to them.
pub trait PostHandle {
    fn post_id(&self) -> PostId;
}

impl PostHandle for Post {
    fn post_id(&self) -> PostId {
        self.id
    }
}

impl PostHandle for Shared<Post> {
    fn post_id(&self) -> PostId {
        lock(self).id
    }
}

struct LikeSnapshot {
    liked: bool,
    like_count: u64,
}

struct FollowSnapshot {
    following: bool,
    follower_count: u64,
}

impl<N: Network, T: Notifier> Coordinator<N, T> {
    /// Like an unliked post or unlike a liked one.
    pub async fn toggle_like(&self, post: &Shared<Post>) -> Outcome {
        let id = lock(post).id;
        self.apply(
            ActionKey::new(Target::Post(id), ActionKind::Like),
            post,
            |p| {
                let snapshot = LikeSnapshot {
                    liked: p.liked_by_current_user,
                    like_count: p.like_count,
                };
                let applied = if p.liked_by_current_user {
                    p.liked_by_current_user = false;
                    p.like_count = p.like_count.saturating_sub(1);
                    Applied::new(snapshot, Mutation::Unlike(p.id), "Failed to unlike post")
                } else {
                    p.liked_by_current_user = true;
                    p.like_count += 1;
                    Applied::new(snapshot, Mutation::Like(p.id), "Failed to like post")
                };
                Some(applied)
            },
            |p, s| {
                p.liked_by_current_user = s.liked;
                p.like_count = s.like_count;
            },
        )
        .await
    }

    /// Follow or unfollow the profile's user.
    pub async fn toggle_follow(&self, profile: &Shared<UserProfile>) -> Outcome {
        let id = lock(profile).id;
        self.apply(
            ActionKey::new(Target::User(id), ActionKind::Follow),
            profile,
            |u| {
                let snapshot = FollowSnapshot {
                    following: u.is_followed_by_current_user,
                    follower_count: u.follower_count,
                };
                let applied = if u.is_followed_by_current_user {
                    u.is_followed_by_current_user = false;
                    u.follower_count = u.follower_count.saturating_sub(1);
                    Applied::new(snapshot, Mutation::Unfollow(u.id), "Failed to unfollow user")
                } else {
                    u.is_followed_by_current_user = true;
                    u.follower_count += 1;
                    Applied::new(snapshot, Mutation::Follow(u.id), "Failed to follow user")
                };
                Some(applied)
            },
            |u, s| {
                u.is_followed_by_current_user = s.following;
                u.follower_count = s.follower_count;
            },
        )
        .await
    }

    pub async fn mark_read(&self, notification: &Shared<Notification>) -> Outcome {
        let id = lock(notification).id;
        self.apply(
            ActionKey::new(Target::Notification(id), ActionKind::MarkRead),
            notification,
            |n| {
                if n.is_read {
                    return None;
                }
                n.is_read = true;
                Some(Applied::new(
                    false,
                    Mutation::MarkRead(n.id),
                    "Failed to mark notification as read",
                ))
            },
            |n, was_read| n.is_read = was_read,
        )
        .await
    }

    /// Mark every notification in the list read with a single request.
    pub async fn mark_all_read(&self, notifications: &Shared<Vec<Notification>>) -> Outcome {
        self.apply(
            ActionKey::new(Target::Inbox, ActionKind::MarkAllRead),
            notifications,
            |list| {
                if list.iter().all(|n| n.is_read) {
                    return None;
                }
                // Keyed by id: the owning view may reload the list meanwhile.
                let snapshot: HashMap<NotificationId, bool> =
                    list.iter().map(|n| (n.id, n.is_read)).collect();
                for n in list.iter_mut() {
                    n.is_read = true;
                }
                Some(Applied::new(
                    snapshot,
                    Mutation::MarkAllRead,
                    "Failed to mark notifications as read",
                ))
            },
            |list, snapshot| {
                for n in list.iter_mut() {
                    if let Some(was_read) = snapshot.get(&n.id) {
                        n.is_read = *was_read;
                    }
                }
            },
        )
        .await
    }

    /// Admin moderation: hide a post from everyone else.
    pub async fn hide_post(&self, post: &Shared<Post>) -> Outcome {
        let id = lock(post).id;
        self.apply(
            ActionKey::new(Target::Post(id), ActionKind::Hide),
            post,
            |p| {
                if p.is_hidden {
                    return None;
                }
                p.is_hidden = true;
                Some(Applied::new(false, Mutation::HidePost(p.id), "Failed to hide post"))
            },
            |p, was_hidden| p.is_hidden = was_hidden,
        )
        .await
    }

    /// Delete one of the current user's posts after confirmation.
    pub async fn delete_post<P, G>(&self, posts: &Shared<Vec<P>>, id: PostId, gate: &G) -> DeleteOutcome
    where
        P: PostHandle,
        G: ConfirmGate + ?Sized,
    {
        self.remove_confirmed(
            ActionKey::new(Target::Post(id), ActionKind::Delete),
            posts,
            |p| p.post_id() == id,
            gate,
            DELETE_POST_PROMPT,
            Mutation::DeletePost(id),
            "Failed to delete post",
        )
        .await
    }

    /// Admin variant of [`Self::delete_post`] for posts the admin doesn't own.
    pub async fn admin_delete_post<P, G>(
        &self,
        posts: &Shared<Vec<P>>,
        id: PostId,
        gate: &G,
    ) -> DeleteOutcome
    where
        P: PostHandle,
        G: ConfirmGate + ?Sized,
    {
        self.remove_confirmed(
            ActionKey::new(Target::Post(id), ActionKind::Delete),
            posts,
            |p| p.post_id() == id,
            gate,
            DELETE_POST_PROMPT,
            Mutation::AdminDeletePost(id),
            "Failed to delete post",
        )
        .await
    }

    /// Report a post or a user. Reports have no local state to reconcile;
    /// the guard only keeps a double submit from filing two reports.
    pub async fn submit_report(&self, report: ReportRequest) -> Outcome {
        let target = match report.target_type {
            ReportTarget::Post => Target::Post(report.target_id),
            ReportTarget::User => Target::User(report.target_id),
            ReportTarget::Comment => Target::Comment(report.target_id),
        };
        self.submit(
            ActionKey::new(target, ActionKind::Report),
            Mutation::Report(report),
            "Failed to submit report",
        )
        .await
    }

    /// Remove a comment after confirmation. Only the author or an admin
    /// is allowed by the server.
    pub async fn delete_comment<G>(
        &self,
        comments: &Shared<Vec<Comment>>,
        id: CommentId,
        gate: &G,
    ) -> DeleteOutcome
    where
        G: ConfirmGate + ?Sized,
    {
        self.remove_confirmed(
            ActionKey::new(Target::Comment(id), ActionKind::Delete),
            comments,
            |c| c.id == id,
            gate,
            DELETE_COMMENT_PROMPT,
            Mutation::DeleteComment(id),
            "Failed to delete comment",
        )
        .await
    }

    // -- Admin moderation --

    /// Ban an active account or lift an existing ban.
    pub async fn toggle_ban(&self, user: &Shared<AdminUser>) -> Outcome {
        let id = lock(user).id;
        self.apply(
            ActionKey::new(Target::User(id), ActionKind::Ban),
            user,
            |u| {
                let was_blocked = u.is_blocked;
                u.is_blocked = !was_blocked;
                let applied = if was_blocked {
                    Applied::new(was_blocked, Mutation::Unban(u.id), "Failed to unban user")
                } else {
                    Applied::new(was_blocked, Mutation::Ban(u.id), "Failed to ban user")
                };
                Some(applied)
            },
            |u, was_blocked| u.is_blocked = was_blocked,
        )
        .await
    }

    pub async fn admin_delete_user<G>(
        &self,
        users: &Shared<Vec<AdminUser>>,
        id: UserId,
        gate: &G,
    ) -> DeleteOutcome
    where
        G: ConfirmGate + ?Sized,
    {
        self.remove_confirmed(
            ActionKey::new(Target::User(id), ActionKind::Delete),
            users,
            |u| u.id == id,
            gate,
            DELETE_USER_PROMPT,
            Mutation::AdminDeleteUser(id),
            "Failed to delete user",
        )
        .await
    }

    /// Mark a new report reviewed. Reports already past `New` are ignored.
    pub async fn resolve_report(&self, report: &Shared<Report>) -> Outcome {
        let id = lock(report).id;
        self.apply(
            ActionKey::new(Target::Report(id), ActionKind::Resolve),
            report,
            |r| {
                if r.status != ReportStatus::New {
                    return None;
                }
                let previous = r.status;
                r.status = ReportStatus::Reviewed;
                Some(Applied::new(
                    previous,
                    Mutation::ResolveReport(r.id),
                    "Failed to resolve report",
                ))
            },
            |r, previous| r.status = previous,
        )
        .await
    }
}
