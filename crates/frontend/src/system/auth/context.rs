use contracts::system::auth::UserInfo;
use contracts::system::tabs::AuthChange;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::events::{use_auth_events, AuthEvents};
use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    let events = use_auth_events();

    // Try to restore session from localStorage on mount
    create_effect(move |_| {
        let events = events.clone();
        spawn_local(async move {
            if let Some(access_token) = storage::get_access_token() {
                // Validate token by fetching current user
                match api::get_current_user(&access_token).await {
                    Ok(user_info) => {
                        signed_in(set_auth_state, &events, access_token, user_info);
                    }
                    Err(_) => {
                        // Token invalid, try refresh
                        if let Some(refresh_token) = storage::get_refresh_token() {
                            match api::refresh_token(refresh_token).await {
                                Ok(response) => {
                                    storage::save_access_token(&response.access_token);

                                    // Get user info with new token
                                    if let Ok(user_info) =
                                        api::get_current_user(&response.access_token).await
                                    {
                                        signed_in(
                                            set_auth_state,
                                            &events,
                                            response.access_token,
                                            user_info,
                                        );
                                    }
                                }
                                Err(_) => {
                                    // Refresh failed, clear tokens
                                    storage::clear_tokens();
                                }
                            }
                        } else {
                            // No refresh token, clear everything
                            storage::clear_tokens();
                        }
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

fn signed_in(
    set_auth_state: WriteSignal<AuthState>,
    events: &AuthEvents,
    access_token: String,
    user_info: UserInfo,
) {
    let user_id = user_info.id;
    set_auth_state.set(AuthState {
        access_token: Some(access_token),
        user_info: Some(user_info),
    });
    events.emit(&AuthChange::signed_in(user_id));
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    events: AuthEvents,
    username: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(username, password).await?;

    // Save tokens
    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);

    signed_in(set_auth_state, &events, response.access_token, response.user);

    Ok(())
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>, events: AuthEvents) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        let _ = api::logout(refresh_token).await;
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
    events.emit(&AuthChange::signed_out());
}
