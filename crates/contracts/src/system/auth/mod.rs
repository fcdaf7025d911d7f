use serde::{Deserialize, Serialize};

use crate::shared::person_label;
use crate::system::users::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Currently signed-in admin user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_location_manager(&self) -> bool {
        self.role == UserRole::LocationManager
    }

    /// Name shown in the top header, or the email when unnamed.
    pub fn display_label(&self) -> String {
        person_label(
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            &self.email,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> UserInfo {
        UserInfo {
            id: "usr_01".to_string(),
            email: "anna@example.com".to_string(),
            first_name: Some("Anna".to_string()),
            last_name: None,
            role,
        }
    }

    #[test]
    fn test_roles() {
        assert!(user(UserRole::Admin).is_admin());
        assert!(!user(UserRole::Admin).is_location_manager());
        assert!(user(UserRole::LocationManager).is_location_manager());
    }

    #[test]
    fn test_display_label() {
        let mut info = user(UserRole::Admin);
        assert_eq!(info.display_label(), "Anna");
        info.first_name = None;
        assert_eq!(info.display_label(), "anna@example.com");
    }
}
