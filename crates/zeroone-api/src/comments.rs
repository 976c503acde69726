use reqwest::Method;

use zeroone_types::api::CommentRequest;
use zeroone_types::models::{Comment, CommentId, PostId};

use crate::client::{ApiClient, decode};
use crate::error::ApiError;

impl ApiClient {
    pub async fn comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&format!("/comments/post/{}", post_id)).await
    }

    pub async fn create_comment(&self, post_id: PostId, content: &str) -> Result<Comment, ApiError> {
        let body = CommentRequest {
            content: content.to_string(),
        };
        let path = format!("/comments/post/{}", post_id);
        let req = self.request(Method::POST, &path).await.json(&body);
        decode(self.execute(req).await?).await
    }

    pub async fn update_comment(&self, id: CommentId, content: &str) -> Result<Comment, ApiError> {
        let body = CommentRequest {
            content: content.to_string(),
        };
        let path = format!("/comments/{}", id);
        let req = self.request(Method::PUT, &path).await.json(&body);
        decode(self.execute(req).await?).await
    }
}
