//! Partial post records as they arrive from the server.
//!
//! Every field is optional and decoded leniently: a value of the wrong JSON
//! type is dropped instead of failing the record. Several backend revisions
//! are live at once, so the same concept may appear under more than one key;
//! each spelling gets its own field and precedence is resolved later.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMedia {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub type_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAuthor {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
    #[serde(rename = "avatarUrl", default, deserialize_with = "lenient")]
    pub avatar_url: Option<String>,
    #[serde(rename = "profilePicture", default, deserialize_with = "lenient")]
    pub profile_picture: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar: Option<String>,
}

impl RawAuthor {
    pub fn avatar(&self) -> Option<&str> {
        [&self.avatar_url, &self.profile_picture, &self.avatar]
            .into_iter()
            .find_map(|v| non_blank(v.as_deref()))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPost {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<String>,

    // media, newest shape first
    #[serde(default, deserialize_with = "lenient")]
    pub media: Option<Vec<RawMedia>>,
    #[serde(rename = "mediaUrls", default, deserialize_with = "lenient")]
    pub media_urls: Option<Vec<Value>>,
    #[serde(rename = "mediaTypes", default, deserialize_with = "lenient")]
    pub media_types: Option<Vec<Value>>,
    #[serde(rename = "mediaUrl", default, deserialize_with = "lenient")]
    pub media_url: Option<String>,
    #[serde(rename = "mediaType", default, deserialize_with = "lenient")]
    pub media_type: Option<String>,
    #[serde(rename = "cloudinaryUrl", default, deserialize_with = "lenient")]
    pub cloudinary_url: Option<String>,

    // author, nested or flattened
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<RawAuthor>,
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<RawAuthor>,
    #[serde(rename = "authorId", default, deserialize_with = "lenient")]
    pub author_id: Option<i64>,
    #[serde(rename = "authorUsername", default, deserialize_with = "lenient")]
    pub author_username: Option<String>,
    #[serde(rename = "authorProfilePicture", default, deserialize_with = "lenient")]
    pub author_profile_picture: Option<String>,

    // dates
    #[serde(rename = "createdAt", default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(rename = "created_at", default, deserialize_with = "lenient")]
    pub created_at_snake: Option<String>,
    #[serde(rename = "createdDate", default, deserialize_with = "lenient")]
    pub created_date: Option<String>,
    #[serde(rename = "updatedAt", default, deserialize_with = "lenient")]
    pub updated_at: Option<String>,
    #[serde(rename = "updated_at", default, deserialize_with = "lenient")]
    pub updated_at_snake: Option<String>,
    #[serde(rename = "updatedDate", default, deserialize_with = "lenient")]
    pub updated_date: Option<String>,

    // counters and flags
    #[serde(rename = "likeCount", default, deserialize_with = "lenient")]
    pub like_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub likes: Option<i64>,
    #[serde(rename = "commentCount", default, deserialize_with = "lenient")]
    pub comment_count: Option<i64>,
    #[serde(rename = "likedByCurrentUser", default, deserialize_with = "lenient")]
    pub liked_by_current_user: Option<bool>,
    #[serde(rename = "isHidden", default, deserialize_with = "lenient")]
    pub is_hidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub hidden: Option<bool>,
}

impl RawPost {
    /// Read a partial record out of any JSON value. Non-objects yield an
    /// empty record.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

pub(crate) fn non_blank(v: Option<&str>) -> Option<&str> {
    v.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrong_types_are_dropped_not_fatal() {
        let raw = RawPost::from_value(&json!({
            "id": 4,
            "content": 12,
            "likeCount": "lots",
            "mediaUrls": "not-a-list",
            "author": "nobody"
        }));
        assert_eq!(raw.id, Some(4));
        assert!(raw.content.is_none());
        assert!(raw.like_count.is_none());
        assert!(raw.media_urls.is_none());
        assert!(raw.author.is_none());
    }

    #[test]
    fn non_object_is_empty() {
        let raw = RawPost::from_value(&json!([1, 2, 3]));
        assert!(raw.id.is_none());
        let raw = RawPost::from_value(&Value::Null);
        assert!(raw.content.is_none());
    }

    #[test]
    fn avatar_spellings() {
        let author: RawAuthor = serde_json::from_value(json!({
            "id": 1,
            "avatarUrl": "  ",
            "profilePicture": "/uploads/a.png"
        }))
        .unwrap();
        assert_eq!(author.avatar(), Some("/uploads/a.png"));
    }
}
