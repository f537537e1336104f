use contracts::system::auth::{AuthResponse, LoginRequest, RegisterRequest};

use crate::shared::api::{ApiClient, ApiError};

/// Exchange credentials for a session token.
pub async fn login(api: &ApiClient, email: String, password: String) -> Result<AuthResponse, ApiError> {
    let request = LoginRequest { email, password };
    api.post_json("/api/auth/login", &request).await
}

/// Create an account and receive a session token.
pub async fn register(
    api: &ApiClient,
    email: String,
    password: String,
    name: String,
) -> Result<AuthResponse, ApiError> {
    let request = RegisterRequest {
        email,
        password,
        name,
    };
    api.post_json("/api/auth/register", &request).await
}
