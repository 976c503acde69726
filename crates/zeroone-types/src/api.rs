use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{CommentId, CurrentUser, NotificationId, PostId, ReportId, UserId};

// -- Auth --

#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Sign-in response. Older backends call the token `token`, newer ones
/// `accessToken`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default = "default_token_type", alias = "type")]
    pub token_type: String,
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_token_type() -> String {
    "Bearer".into()
}

fn default_role() -> String {
    "ROLE_USER".into()
}

impl JwtResponse {
    pub fn user(&self) -> CurrentUser {
        CurrentUser {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

// -- Reports --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportTarget {
    Post,
    User,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub target_id: i64,
    pub target_type: ReportTarget,
    pub reason: String,
}

// -- Content --

/// Body for creating or editing a text post. Attachments are referenced by
/// URL only; uploading them is out of scope.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentRequest {
    pub content: String,
}

// -- Mutations --

/// A state-changing request issued on behalf of a user action.
///
/// The REST shape of each variant is owned by the API client; this enum
/// only names what is being asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Like(PostId),
    Unlike(PostId),
    Follow(UserId),
    Unfollow(UserId),
    DeletePost(PostId),
    MarkRead(NotificationId),
    MarkAllRead,
    HidePost(PostId),
    AdminDeletePost(PostId),
    Report(ReportRequest),
    DeleteComment(CommentId),
    Ban(UserId),
    Unban(UserId),
    AdminDeleteUser(UserId),
    ResolveReport(ReportId),
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Like(id) => write!(f, "like post={}", id),
            Self::Unlike(id) => write!(f, "unlike post={}", id),
            Self::Follow(id) => write!(f, "follow user={}", id),
            Self::Unfollow(id) => write!(f, "unfollow user={}", id),
            Self::DeletePost(id) => write!(f, "delete post={}", id),
            Self::MarkRead(id) => write!(f, "mark_read notification={}", id),
            Self::MarkAllRead => write!(f, "mark_all_read"),
            Self::HidePost(id) => write!(f, "hide post={}", id),
            Self::AdminDeletePost(id) => write!(f, "admin_delete post={}", id),
            Self::Report(req) => write!(
                f,
                "report target={:?} id={}",
                req.target_type, req.target_id
            ),
            Self::DeleteComment(id) => write!(f, "delete comment={}", id),
            Self::Ban(id) => write!(f, "ban user={}", id),
            Self::Unban(id) => write!(f, "unban user={}", id),
            Self::AdminDeleteUser(id) => write!(f, "admin_delete user={}", id),
            Self::ResolveReport(id) => write!(f, "resolve report={}", id),
        }
    }
}
