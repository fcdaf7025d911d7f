use serde::{Deserialize, Serialize};

use crate::shared::person_label;

/// Role of an admin-panel user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    /// Dealer managing the customers of one store location.
    LocationManager,
    Member,
    Developer,
}

impl UserRole {
    /// Value used by the `role` query parameter of `/admin/users`.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::LocationManager => "location_manager",
            UserRole::Member => "member",
            UserRole::Developer => "developer",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,

    /// Customers assigned to a dealer; only filled for `location_manager`.
    #[serde(default)]
    pub customers: Vec<AssignedCustomer>,
}

/// Customer reference embedded in a dealer account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignedCustomer {
    pub id: String,
}

impl User {
    /// Label shown in dealer pickers: the full name, or the email when unnamed.
    pub fn display_label(&self) -> String {
        person_label(
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            &self.email,
        )
    }
}

/// Envelope of `GET /admin/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}
