use serde::{Deserialize, Serialize};

use crate::system::users::Role;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `data` of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserInfo,
}

/// The signed-in user, as returned by `/auth/login` and `/auth/me` and kept
/// in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl UserInfo {
    /// First role name, "client" when the user has none.
    pub fn role(&self) -> &str {
        self.roles.first().map(|r| r.name.as_str()).unwrap_or("client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_data() {
        let data: LoginData = serde_json::from_str(
            r#"{"token": "1|abc", "user": {"id": 1, "name": "Admin", "email": "admin@example.com",
                "roles": [{"id": 1, "name": "admin"}]}}"#,
        )
        .unwrap();
        assert_eq!(data.token, "1|abc");
        assert_eq!(data.user.role(), "admin");
    }

    #[test]
    fn test_role_defaults_to_client() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id": 2, "name": "Guest", "email": "g@example.com"}"#).unwrap();
        assert_eq!(user.role(), "client");
    }
}
