use serde::{Deserialize, Serialize};

/// Signed-in user as reported by `GET /verify-token`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
}

/// Response of `GET /verify-token`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

impl VerifyTokenResponse {
    /// The session user, only when the backend confirms authentication
    pub fn into_user(self) -> Option<UserInfo> {
        if self.authenticated {
            self.user
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_authenticated_user() {
        let resp: VerifyTokenResponse = serde_json::from_value(json!({
            "authenticated": true,
            "user": { "name": "Ana", "email": "ana@example.com" }
        }))
        .unwrap();
        assert_eq!(
            resp.into_user(),
            Some(UserInfo {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string()
            })
        );
    }

    #[test]
    fn test_false_flag_discards_user() {
        let resp: VerifyTokenResponse = serde_json::from_value(json!({
            "authenticated": false,
            "user": { "name": "Ana", "email": "ana@example.com" }
        }))
        .unwrap();
        assert_eq!(resp.into_user(), None);
    }

    #[test]
    fn test_missing_fields() {
        let resp: VerifyTokenResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(resp.into_user(), None);
    }
}
