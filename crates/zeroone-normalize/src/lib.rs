//! Post normalization.
//!
//! The backend has changed its post schema several times (single legacy
//! attachment, attachment arrays, Cloudinary uploads, flattened vs nested
//! author) and all of those shapes are still served. Everything that reaches
//! a view goes through here first and comes out as a canonical [`Post`].

pub mod media;
pub mod raw;

use chrono::{DateTime, Utc};
use serde_json::Value;

use zeroone_types::models::{Author, DEFAULT_USERNAME, Post};
use zeroone_types::time::parse_timestamp;

pub use media::resolve_media;
pub use raw::{RawAuthor, RawMedia, RawPost};

use raw::non_blank;

/// Normalize one server post record. Never fails; see [`normalize_post_at`].
pub fn normalize_post(value: &Value) -> Post {
    normalize_post_at(value, Utc::now())
}

/// Normalize with an explicit clock. `now` is only used when the record
/// carries no parseable creation date.
pub fn normalize_post_at(value: &Value, now: DateTime<Utc>) -> Post {
    RawPost::from_value(value).into_post(now)
}

/// Normalize a batch. Order and length are preserved.
pub fn normalize_posts(values: &[Value]) -> Vec<Post> {
    let now = Utc::now();
    values.iter().map(|v| normalize_post_at(v, now)).collect()
}

fn first_timestamp(candidates: [&Option<String>; 3]) -> Option<DateTime<Utc>> {
    candidates
        .into_iter()
        .find_map(|v| v.as_deref().and_then(parse_timestamp))
}

fn count(v: Option<i64>) -> u64 {
    v.map(|n| n.max(0) as u64).unwrap_or(0)
}

impl RawPost {
    pub fn author(&self) -> Author {
        let nested = [self.author.as_ref(), self.user.as_ref()];
        let nested = nested.iter().flatten();

        let id = nested
            .clone()
            .find_map(|a| a.id)
            .or(self.author_id)
            .unwrap_or(0);

        let username = nested
            .clone()
            .find_map(|a| non_blank(a.username.as_deref()))
            .or_else(|| non_blank(self.author_username.as_deref()))
            .unwrap_or(DEFAULT_USERNAME)
            .to_string();

        let avatar_url = nested
            .clone()
            .find_map(|a| a.avatar())
            .or_else(|| non_blank(self.author_profile_picture.as_deref()))
            .map(str::to_string);

        Author {
            id,
            username,
            avatar_url,
        }
    }

    pub fn into_post(self, now: DateTime<Utc>) -> Post {
        let media = resolve_media(&self);
        let author = self.author();

        let created_at = first_timestamp([
            &self.created_at,
            &self.created_at_snake,
            &self.created_date,
        ]);
        let updated_at = first_timestamp([
            &self.updated_at,
            &self.updated_at_snake,
            &self.updated_date,
        ]);
        let created_at = created_at.or(updated_at).unwrap_or(now);
        let updated_at = updated_at.unwrap_or(created_at);

        Post {
            id: self.id.unwrap_or(0),
            content: self.content.unwrap_or_default(),
            media,
            author,
            created_at,
            updated_at,
            like_count: count(self.like_count.or(self.likes)),
            comment_count: count(self.comment_count),
            liked_by_current_user: self.liked_by_current_user.unwrap_or(false),
            is_hidden: self.is_hidden.or(self.hidden).unwrap_or(false),
        }
    }
}
