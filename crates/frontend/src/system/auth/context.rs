use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Session restore from `localStorage` has finished.
    pub restored: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user_info.as_ref().is_some_and(UserInfo::is_admin)
    }

    pub fn is_location_manager(&self) -> bool {
        self.user_info
            .as_ref()
            .is_some_and(UserInfo::is_location_manager)
    }
}

/// Validates the stored access token, falling back to the refresh token.
async fn restore_session() -> Option<(String, UserInfo)> {
    let access_token = storage::get_access_token()?;

    if let Ok(user_info) = api::get_current_user(&access_token).await {
        return Some((access_token, user_info));
    }

    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return None;
    };

    match api::refresh_token(refresh_token).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            match api::get_current_user(&response.access_token).await {
                Ok(user_info) => Some((response.access_token, user_info)),
                Err(e) => {
                    log::warn!("Session restore failed after refresh: {}", e);
                    None
                }
            }
        }
        Err(e) => {
            log::info!("Refresh token rejected: {}", e);
            storage::clear_tokens();
            None
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let restored = restore_session().await;
            set_auth_state.set(match restored {
                Some((access_token, user_info)) => AuthState {
                    access_token: Some(access_token),
                    user_info: Some(user_info),
                    restored: true,
                },
                None => AuthState {
                    restored: true,
                    ..AuthState::default()
                },
            });
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Sign in and publish the new session
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(email, password).await?;

    storage::save_tokens(&response.access_token, &response.refresh_token);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
        restored: true,
    });

    Ok(())
}

/// Revoke the session and clear local state
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("Logout request failed: {}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState {
        restored: true,
        ..AuthState::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UserRole;

    fn signed_in(role: UserRole) -> AuthState {
        AuthState {
            access_token: Some("token".to_string()),
            user_info: Some(UserInfo {
                id: "usr_01".to_string(),
                email: "admin@example.com".to_string(),
                first_name: None,
                last_name: None,
                role,
            }),
            restored: true,
        }
    }

    #[test]
    fn test_role_helpers() {
        assert!(signed_in(UserRole::Admin).is_admin());
        assert!(!signed_in(UserRole::Admin).is_location_manager());
        assert!(signed_in(UserRole::LocationManager).is_location_manager());
        assert!(!signed_in(UserRole::Member).is_admin());
    }

    #[test]
    fn test_anonymous_state() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
    }
}
