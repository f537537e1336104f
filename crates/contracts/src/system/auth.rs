use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Session payload from `POST /api/auth/login` and `/api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_login_response() {
        let json = r#"{
            "token": "eyJhbGciOiJIUzI1NiJ9.x.y",
            "user": {"id": 1, "email": "a@b.c", "name": "A", "is_admin": false}
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(resp.token.starts_with("eyJ"));
        assert_eq!(resp.user.unwrap().email, "a@b.c");
    }
}
