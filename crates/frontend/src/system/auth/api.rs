use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::api_utils::{get_json, post_json, ApiError};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    post_json("/api/auth/login", &LoginRequest { username, password }).await
}

/// Exchange a refresh token for a new access token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    post_json("/api/auth/refresh", &RefreshRequest { refresh_token }).await
}

pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    get_json("/api/auth/me", Some(access_token)).await
}
