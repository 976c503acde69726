#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use tokio::sync::Semaphore;

use zeroone_optimistic::{Network, Notifier};
use zeroone_types::api::{Mutation, ReportTarget};
use zeroone_types::models::{
    AdminUser, Author, Comment, Notification, NotificationKind, Post, Report, ReportStatus,
    UserProfile,
};

/// Scripted network. Records every mutation at dispatch time, optionally
/// holds each request until released, then answers from the script
/// (success once the script runs dry).
pub struct MockNetwork {
    sent: Mutex<Vec<Mutation>>,
    script: Mutex<VecDeque<bool>>,
    gate: Option<Semaphore>,
}

impl MockNetwork {
    pub fn ok() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            script: Mutex::new(VecDeque::new()),
            gate: None,
        }
    }

    pub fn failing() -> Self {
        Self::scripted(&[false; 16])
    }

    pub fn scripted(results: &[bool]) -> Self {
        let net = Self::ok();
        net.script.lock().unwrap().extend(results.iter().copied());
        net
    }

    /// Requests stay pending until [`Self::release`] is called.
    pub fn held(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    pub fn sent(&self) -> Vec<Mutation> {
        self.sent.lock().unwrap().clone()
    }
}

impl Network for MockNetwork {
    type Error = String;

    async fn send(&self, mutation: Mutation) -> Result<(), String> {
        self.sent.lock().unwrap().push(mutation);

        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        let ok = self.script.lock().unwrap().pop_front().unwrap_or(true);
        if ok { Ok(()) } else { Err("500 Internal Server Error".into()) }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub fn post(id: i64, like_count: u64, liked: bool) -> Post {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Post {
        id,
        content: format!("post {}", id),
        media: vec![],
        author: Author::default(),
        created_at: at,
        updated_at: at,
        like_count,
        comment_count: 0,
        liked_by_current_user: liked,
        is_hidden: false,
    }
}

pub fn profile(id: i64, followers: u64, following: bool) -> UserProfile {
    UserProfile {
        id,
        username: format!("user{}", id),
        email: None,
        bio: None,
        profile_picture: None,
        created_at: None,
        follower_count: followers,
        following_count: 0,
        is_followed_by_current_user: following,
    }
}

pub fn notification(id: i64, read: bool) -> Notification {
    Notification {
        id,
        message: "liked your post".into(),
        is_read: read,
        created_at: None,
        kind: NotificationKind::Like,
        related_post_id: Some(1),
        from_user: None,
    }
}

pub fn comment(id: i64, post_id: i64) -> Comment {
    Comment {
        id,
        content: format!("comment {}", id),
        created_at: None,
        author_id: 2,
        author_username: "bo".into(),
        author_profile_picture: None,
        post_id: Some(post_id),
    }
}

pub fn admin_user(id: i64, blocked: bool) -> AdminUser {
    AdminUser {
        id,
        username: format!("user{}", id),
        email: None,
        role: Some("ROLE_USER".into()),
        is_blocked: blocked,
        created_at: None,
    }
}

pub fn report(id: i64, status: ReportStatus) -> Report {
    Report {
        id,
        target_type: ReportTarget::Post,
        target_id: 1,
        reason: "spam".into(),
        status,
        created_at: None,
    }
}
