use serde::{Deserialize, Serialize};

/// Current user, as returned by `GET /users/me`. Read-only on this client.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
}

impl UserProfile {
    /// Avatar URL, ignoring empty strings
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub data: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_accepts_mongo_style_id() {
        let body = r#"{"statusCode":200,"data":{"_id":"u1","username":"ana","avatar":"http://img/a.png"}}"#;
        let response: UserResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.id, "u1");
        assert_eq!(response.data.avatar_url(), Some("http://img/a.png"));
        assert_eq!(response.data.full_name, None);
    }

    #[test]
    fn virtual_id_next_to_mongo_id_is_ignored() {
        let body = r#"{"data":{"_id":"u1","id":"u1","username":"ana"}}"#;
        let response: UserResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.id, "u1");
    }

    #[test]
    fn empty_avatar_is_hidden() {
        let body = r#"{"data":{"_id":"u2","avatar":""}}"#;
        let response: UserResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.id, "u2");
        assert_eq!(response.data.avatar_url(), None);
    }
}
