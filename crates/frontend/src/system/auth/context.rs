use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::ApiClient;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// A stored token is being validated against the API
    pub restoring: bool,
}

/// Explicit session shared through context.
///
/// Created once in `App`; the only place that reads or writes token storage.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<AuthState>,
    api_base: StoredValue<String>,
}

impl SessionContext {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            api_base: StoredValue::new(api_base.into()),
        }
    }

    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Picks up a token left by a previous visit and validates it.
    pub fn restore(self) {
        let Some(access_token) = storage::get_access_token() else {
            return;
        };
        self.state.set(AuthState {
            access_token: Some(access_token.clone()),
            user_info: None,
            restoring: true,
        });
        let client = ApiClient::new(self.api_base.get_value(), Some(access_token.clone()));

        spawn_local(async move {
            match api::get_current_user(&client).await {
                Ok(user_info) => {
                    log::debug!("Session restored for {}", user_info.username);
                    self.state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                        restoring: false,
                    });
                }
                Err(e) => {
                    log::warn!("Stored session rejected: {}", e);
                    storage::clear_tokens();
                    self.state.set(AuthState::default());
                }
            }
        });
    }

    pub async fn login(self, username: String, password: String) -> Result<(), String> {
        let client = ApiClient::new(self.api_base.get_value(), None);
        let response = api::login(&client, username, password).await?;

        storage::save_access_token(&response.access_token);
        self.state.set(AuthState {
            access_token: Some(response.access_token),
            user_info: Some(response.user),
            restoring: false,
        });
        Ok(())
    }

    pub fn logout(self) {
        let client = self.client();
        storage::clear_tokens();
        self.state.set(AuthState::default());

        if client.has_token() {
            spawn_local(async move {
                if let Err(e) = api::logout(&client).await {
                    log::warn!("Logout request failed: {}", e);
                }
            });
        }
    }

    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.access_token.clone())
    }

    /// Reactive: true once a token is held
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user_info.clone())
    }

    /// API client carrying the current bearer token
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.api_base.get_value(), self.token())
    }
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
