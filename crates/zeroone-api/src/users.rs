use reqwest::Method;

use zeroone_types::models::{UserId, UserProfile};

use crate::client::{ApiClient, decode};
use crate::error::ApiError;

impl ApiClient {
    pub async fn user(&self, id: UserId) -> Result<UserProfile, ApiError> {
        self.get_json(&format!("/users/{}", id)).await
    }

    pub async fn search_users(&self, query: &str) -> Result<Vec<UserProfile>, ApiError> {
        let req = self
            .request(Method::GET, "/users/search")
            .await
            .query(&[("query", query)]);
        decode(self.execute(req).await?).await
    }

    pub async fn followers(&self, id: UserId) -> Result<Vec<UserProfile>, ApiError> {
        self.get_json(&format!("/users/{}/followers", id)).await
    }

    pub async fn following(&self, id: UserId) -> Result<Vec<UserProfile>, ApiError> {
        self.get_json(&format!("/users/{}/following", id)).await
    }
}
