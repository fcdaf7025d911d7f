use contracts::system::users::{User, UserRole, UsersResponse};

use crate::shared::api_utils::get_json;

/// Fetch admin users, optionally restricted to one role
pub async fn fetch_users(role: Option<UserRole>) -> Result<Vec<User>, String> {
    let path = match role {
        Some(role) => format!("/admin/users?role={}", role.as_str()),
        None => "/admin/users".to_string(),
    };
    let response: UsersResponse = get_json(&path).await?;
    Ok(response.users)
}
