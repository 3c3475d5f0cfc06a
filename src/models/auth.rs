use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /users/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<LoginData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginData {
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,
}

impl LoginResponse {
    /// Issued token, only when the backend reported success and the token is non-empty
    pub fn access_token(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.data
            .as_ref()
            .and_then(|data| data.access_token.as_deref())
            .filter(|token| !token.is_empty())
    }
}
