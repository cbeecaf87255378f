use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// A stored token is still being validated.
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn user_name(&self) -> Option<String> {
        self.user_info.as_ref().map(|u| u.name.clone())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let stored = storage::get_access_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: stored.is_some(),
        ..Default::default()
    });

    if let Some(access_token) = stored {
        spawn_local(async move {
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                        restoring: false,
                    });
                }
                Err(e) => {
                    // Expired or signed with a previous secret.
                    log::info!("Stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    }

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

/// Signs in and stores the session.
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(username, password).await?;

    storage::save_access_token(&response.access_token);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
        restoring: false,
    });

    Ok(())
}

/// Tokens are stateless on the server, dropping them locally is enough.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_defaults_to_signed_out() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.restoring);
        assert_eq!(state.user_name(), None);
    }

    #[test]
    fn test_user_name() {
        let state = AuthState {
            access_token: Some("t".into()),
            user_info: Some(UserInfo {
                id: "3".into(),
                name: "Ana López".into(),
                rfid: "E2003412".into(),
            }),
            restoring: false,
        };
        assert!(state.is_authenticated());
        assert_eq!(state.user_name().as_deref(), Some("Ana López"));
    }
}
