use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api_utils::ApiClient;

/// Login with username and password
pub async fn login(
    client: &ApiClient,
    username: String,
    password: String,
) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };
    client
        .post_json("/api/auth/login", &request)
        .await
        .map_err(|e| format!("Login failed: {}", e))
}

/// Get current user info for the client's token
pub async fn get_current_user(client: &ApiClient) -> Result<UserInfo, String> {
    client.get_json("/api/auth/me").await
}

/// Logout (revoke the token server-side)
pub async fn logout(client: &ApiClient) -> Result<(), String> {
    client
        .post_json::<_, serde_json::Value>("/api/auth/logout", &serde_json::json!({}))
        .await
        .map(|_| ())
}
