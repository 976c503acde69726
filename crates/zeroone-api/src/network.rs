use reqwest::Method;

use zeroone_optimistic::Network;
use zeroone_types::api::Mutation;

use crate::client::ApiClient;
use crate::error::ApiError;

/// HTTP method and path for a mutation, relative to the API base URL.
pub fn route(mutation: &Mutation) -> (Method, String) {
    match mutation {
        Mutation::Like(id) => (Method::POST, format!("/likes/post/{}", id)),
        Mutation::Unlike(id) => (Method::DELETE, format!("/likes/post/{}", id)),
        Mutation::Follow(id) => (Method::POST, format!("/follows/follow/{}", id)),
        Mutation::Unfollow(id) => (Method::DELETE, format!("/follows/unfollow/{}", id)),
        Mutation::DeletePost(id) => (Method::DELETE, format!("/posts/{}", id)),
        Mutation::MarkRead(id) => (Method::POST, format!("/notifications/{}/read", id)),
        Mutation::MarkAllRead => (Method::POST, "/notifications/read-all".into()),
        Mutation::HidePost(id) => (Method::POST, format!("/admin/posts/{}/hide", id)),
        Mutation::AdminDeletePost(id) => (Method::DELETE, format!("/admin/posts/{}", id)),
        Mutation::Report(_) => (Method::POST, "/reports".into()),
        Mutation::DeleteComment(id) => (Method::DELETE, format!("/comments/{}", id)),
        Mutation::Ban(id) => (Method::POST, format!("/admin/ban/{}", id)),
        Mutation::Unban(id) => (Method::POST, format!("/admin/unban/{}", id)),
        Mutation::AdminDeleteUser(id) => (Method::DELETE, format!("/admin/users/{}", id)),
        Mutation::ResolveReport(id) => {
            (Method::POST, format!("/admin/reports/{}/resolve", id))
        }
    }
}

impl Network for ApiClient {
    type Error = ApiError;

    async fn send(&self, mutation: Mutation) -> Result<(), ApiError> {
        let (method, path) = route(&mutation);
        let mut req = self.request(method, &path).await;
        if let Mutation::Report(report) = &mutation {
            req = req.json(report);
        }
        self.execute(req).await?;

        // Keep the badge in step with confirmed reads.
        match mutation {
            Mutation::MarkRead(_) => self.session().decrement_unread().await,
            Mutation::MarkAllRead => self.session().set_unread_count(0).await,
            _ => {}
        }
        Ok(())
    }
}
