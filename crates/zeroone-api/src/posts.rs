use reqwest::Method;
use serde_json::Value;

use zeroone_normalize::{normalize_post, normalize_posts};
use zeroone_types::api::PostRequest;
use zeroone_types::models::{Post, PostId, UserId};

use crate::client::{ApiClient, decode};
use crate::error::ApiError;

impl ApiClient {
    /// Posts from followed users, normalized.
    pub async fn feed(&self) -> Result<Vec<Post>, ApiError> {
        self.get_posts("/posts/feed").await
    }

    pub async fn all_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_posts("/posts").await
    }

    pub async fn user_posts(&self, user_id: UserId) -> Result<Vec<Post>, ApiError> {
        self.get_posts(&format!("/posts/user/{}", user_id)).await
    }

    pub async fn post(&self, id: PostId) -> Result<Post, ApiError> {
        let value: Value = self.get_json(&format!("/posts/{}", id)).await?;
        if !value.is_object() {
            return Err(ApiError::Decode(format!("post {} is not an object", id)));
        }
        Ok(normalize_post(&value))
    }

    /// Publish a text post. Returns the stored post, normalized.
    pub async fn create_post(&self, request: &PostRequest) -> Result<Post, ApiError> {
        self.write_post(Method::POST, "/posts".into(), request).await
    }

    pub async fn update_post(&self, id: PostId, request: &PostRequest) -> Result<Post, ApiError> {
        self.write_post(Method::PUT, format!("/posts/{}", id), request).await
    }

    /// Every post including hidden ones. Admin only.
    pub async fn admin_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_posts("/admin/posts").await
    }

    async fn write_post(
        &self,
        method: Method,
        path: String,
        request: &PostRequest,
    ) -> Result<Post, ApiError> {
        let req = self.request(method, &path).await.json(request);
        let value: Value = decode(self.execute(req).await?).await?;
        if !value.is_object() {
            return Err(ApiError::Decode(format!(
                "expected a post from {}, got {}",
                path,
                kind_of(&value)
            )));
        }
        Ok(normalize_post(&value))
    }

    async fn get_posts(&self, path: &str) -> Result<Vec<Post>, ApiError> {
        let value: Value = self.get_json(path).await?;
        match value {
            Value::Array(items) => Ok(normalize_posts(&items)),
            other => Err(ApiError::Decode(format!(
                "expected a list of posts from {}, got {}",
                path,
                kind_of(&other)
            ))),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
