use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Восстановить сессию из localStorage
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            if let Ok(user_info) = api::get_current_user(&access_token).await {
                set_auth_state.set(AuthState {
                    access_token: Some(access_token),
                    user_info: Some(user_info),
                });
                return;
            }
            // Токен истёк: пробуем refresh
            let Some(refresh_token) = storage::get_refresh_token() else {
                storage::clear_tokens();
                return;
            };
            match api::refresh_token(refresh_token).await {
                Ok(response) => {
                    storage::save_access_token(&response.access_token);
                    if let Ok(user_info) = api::get_current_user(&response.access_token).await {
                        set_auth_state.set(AuthState {
                            access_token: Some(response.access_token),
                            user_info: Some(user_info),
                        });
                    }
                }
                Err(_) => storage::clear_tokens(),
            }
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

/// Сохранить токены входа и открыть сессию
pub fn start_session(set_auth_state: WriteSignal<AuthState>, response: LoginResponse) {
    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });
}

/// Отозвать refresh-токен и закрыть сессию
pub async fn end_session(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("Logout request failed: {}", e);
        }
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
