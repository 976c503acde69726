use tracing::debug;

use zeroone_types::models::Notification;

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_json("/notifications").await
    }

    pub async fn unread_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_json("/notifications/unread").await
    }

    pub async fn unread_count(&self) -> Result<u64, ApiError> {
        self.get_json("/notifications/count").await
    }

    /// Fetch the unread count and store it in the session. Returns the
    /// stored value.
    pub async fn refresh_unread_count(&self) -> Result<u64, ApiError> {
        let count = self.unread_count().await?;
        debug!(count, "Unread count refreshed");
        self.session().set_unread_count(count).await;
        Ok(count)
    }
}
