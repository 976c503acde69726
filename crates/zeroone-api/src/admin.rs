use zeroone_types::models::{AdminUser, Report};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.get_json("/admin/users").await
    }

    /// Reports still waiting for review.
    pub async fn admin_reports(&self) -> Result<Vec<Report>, ApiError> {
        self.get_json("/admin/reports").await
    }
}
