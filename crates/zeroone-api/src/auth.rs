use reqwest::Method;
use tracing::info;

use zeroone_types::api::{JwtResponse, SignInRequest, SignUpRequest};
use zeroone_types::models::CurrentUser;

use crate::client::{ApiClient, decode};
use crate::error::ApiError;

impl ApiClient {
    /// Exchange credentials for a token and store both in the session.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<CurrentUser, ApiError> {
        let body = SignInRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let req = self.request(Method::POST, "/auth/signin").await.json(&body);
        let jwt: JwtResponse = decode(self.execute(req).await?).await?;

        let user = jwt.user();
        self.session().sign_in(user.clone(), jwt.access_token).await;
        info!(user_id = user.id, "Signed in as {}", user.username);
        Ok(user)
    }

    /// Register an account. Does not sign in.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<(), ApiError> {
        let req = self.request(Method::POST, "/auth/signup").await.json(request);
        self.execute(req).await?;
        info!("Registered {}", request.username);
        Ok(())
    }

    pub async fn sign_out(&self) {
        self.session().sign_out().await;
    }
}
