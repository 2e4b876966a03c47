use contracts::shared::api::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_client::{ApiClient, NoQuery};

const LOGIN_PATH: &str = "/api/login";
const LOGOUT_PATH: &str = "/api/logout";

/// Exchanges credentials for a bearer token and the session user
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    ApiClient::new(None).post(LOGIN_PATH, &request).await
}

/// Revokes the token server-side
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client.post_ack(LOGOUT_PATH, &NoQuery {}).await
}
