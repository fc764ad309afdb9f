use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::storage::StoredTokens;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    spawn_local(restore_session(set_auth_state));

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

/// Store the tokens of a successful login and publish the new session
pub fn complete_login(response: LoginResponse, set_auth_state: WriteSignal<AuthState>) {
    StoredTokens::save(&response.access_token, &response.refresh_token);
    log::info!("Logged in as {}", response.user.username);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });
}

/// Restore the session saved in localStorage, refreshing the access token
/// once if the server rejects it.
async fn restore_session(set_auth_state: WriteSignal<AuthState>) {
    let tokens = StoredTokens::load();
    let Some(access_token) = tokens.access_token else {
        return;
    };

    match api::get_current_user(&access_token).await {
        Ok(user_info) => {
            set_auth_state.set(AuthState {
                access_token: Some(access_token),
                user_info: Some(user_info),
            });
            return;
        }
        Err(e) => log::debug!("Stored access token rejected: {}", e),
    }

    let Some(refresh_token) = tokens.refresh_token else {
        StoredTokens::clear();
        return;
    };

    let refreshed = match api::refresh_token(refresh_token).await {
        Ok(response) => response.access_token,
        Err(e) => {
            log::info!("Session refresh failed, logging out: {}", e);
            StoredTokens::clear();
            return;
        }
    };
    StoredTokens::save_access_token(&refreshed);

    match api::get_current_user(&refreshed).await {
        Ok(user_info) => set_auth_state.set(AuthState {
            access_token: Some(refreshed),
            user_info: Some(user_info),
        }),
        Err(e) => log::warn!("Failed to load current user: {}", e),
    }
}
