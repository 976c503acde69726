use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PostId = i64;
pub type UserId = i64;
pub type NotificationId = i64;
pub type CommentId = i64;
pub type ReportId = i64;

/// Upper bound on attachments per post. The backend rejects more.
pub const MAX_MEDIA: usize = 10;

pub const DEFAULT_USERNAME: &str = "Anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    /// Lenient parse used for server-supplied kinds. Accepts bare kinds
    /// ("video") and MIME types ("video/mp4"); anything else is an image.
    pub fn from_loose(raw: &str) -> Self {
        let raw = raw.trim().to_ascii_lowercase();
        if raw == "video" || raw.starts_with("video/") {
            Self::Video
        } else {
            Self::Image
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    pub kind: MediaKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: UserId,
    pub username: String,
    pub avatar_url: Option<String>,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            id: 0,
            username: DEFAULT_USERNAME.to_string(),
            avatar_url: None,
        }
    }
}

/// Canonical post shape. Every view consumes this, whatever the server sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub media: Vec<Media>,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub like_count: u64,
    pub comment_count: u64,
    pub liked_by_current_user: bool,
    pub is_hidden: bool,
}

impl Post {
    pub fn media_urls(&self) -> Vec<&str> {
        self.media.iter().map(|m| m.url.as_str()).collect()
    }

    pub fn media_kinds(&self) -> Vec<MediaKind> {
        self.media.iter().map(|m| m.kind).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default, deserialize_with = "crate::time::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub follower_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub is_followed_by_current_user: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[serde(alias = "LIKE")]
    Like,
    #[serde(alias = "COMMENT")]
    Comment,
    #[serde(alias = "FOLLOW")]
    Follow,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationUser {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    /// Jackson derives `read` from the `isRead()` getter.
    #[serde(default, alias = "read")]
    pub is_read: bool,
    #[serde(default, deserialize_with = "crate::time::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    #[serde(default)]
    pub related_post_id: Option<PostId>,
    #[serde(default)]
    pub from_user: Option<NotificationUser>,
}

/// A comment under a post. The backend sends the author flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "crate::time::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author_id: UserId,
    #[serde(default = "default_username")]
    pub author_username: String,
    #[serde(default)]
    pub author_profile_picture: Option<String>,
    #[serde(default)]
    pub post_id: Option<PostId>,
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

/// Account row in the admin user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, alias = "blocked")]
    pub is_blocked: bool,
    #[serde(default, deserialize_with = "crate::time::optional")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    #[default]
    New,
    Reviewed,
    Pending,
    Approved,
    Rejected,
}

/// A filed report as listed on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    pub target_type: crate::api::ReportTarget,
    pub target_id: i64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default, deserialize_with = "crate::time::optional")]
    pub created_at: Option<DateTime<Utc>>,
}

pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}
