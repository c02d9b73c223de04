use contracts::system::auth::UserInfo;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, cookie};
use crate::shared::api_error::ApiError;
use crate::shared::config::app_config;

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    /// True until the first `verify-token` answer arrives
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// State after the session check; any failure means signed out
    pub fn resolved(result: Result<Option<UserInfo>, ApiError>) -> Self {
        Self {
            user: result.ok().flatten(),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Session store shared through context
#[derive(Clone, Copy)]
pub struct Session(pub RwSignal<SessionState>);

/// Session context provider component
///
/// Checks the session once, when the application mounts.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(SessionState::default());
    provide_context(Session(session));

    spawn_local(async move {
        let result = api::verify_token().await;
        match &result {
            Ok(Some(user)) => log::debug!("[Session] signed in as {}", user.email),
            Ok(None) => log::debug!("[Session] not authenticated"),
            Err(e) => log::warn!("[Session] verify-token failed: {}", e),
        }
        session.set(SessionState::resolved(result));
    });

    children()
}

/// Hook to access the session state
pub fn use_session() -> RwSignal<SessionState> {
    use_context::<Session>()
        .expect("SessionProvider not found in component tree")
        .0
}

/// Session from context when one is mounted
pub fn try_use_session() -> Option<RwSignal<SessionState>> {
    use_context::<Session>().map(|s| s.0)
}

/// Drops the user when the backend rejected the session cookie; the guard
/// then sends the browser to the login screen.
pub fn sign_out_if_unauthorized(session: Option<RwSignal<SessionState>>, err: &ApiError) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    log::warn!("[Session] backend answered 401, signing out");
    if let Some(session) = session {
        let _ = session.try_set(SessionState::signed_out());
    }
    true
}

/// End the session and leave for `/login`
///
/// A failing backend call is logged and leaves the session untouched.
pub fn do_logout(session: RwSignal<SessionState>) {
    spawn_local(async move {
        if let Err(e) = api::logout().await {
            log::error!("[Session] logout failed: {}", e);
            return;
        }
        cookie::expire_cookie(cookie::ACCESS_TOKEN_COOKIE);
        let _ = session.try_set(SessionState::signed_out());

        TimeoutFuture::new(app_config().logout_redirect_delay_ms).await;
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href("/login") {
                log::error!("[Session] redirect to /login failed: {:?}", e);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> UserInfo {
        UserInfo {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        }
    }

    #[test]
    fn test_starts_loading() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_resolved_with_user() {
        let state = SessionState::resolved(Ok(Some(ana())));
        assert!(!state.loading);
        assert_eq!(state.user, Some(ana()));
    }

    #[test]
    fn test_only_401_signs_out() {
        assert!(sign_out_if_unauthorized(None, &ApiError::from_response(401, "")));
        assert!(!sign_out_if_unauthorized(None, &ApiError::from_response(500, "")));
        assert!(!sign_out_if_unauthorized(None, &ApiError::Network("offline".to_string())));
    }

    #[test]
    fn test_any_failure_clears_user() {
        let state = SessionState::resolved(Err(ApiError::from_response(401, "")));
        assert!(!state.loading);
        assert!(state.user.is_none());

        let state = SessionState::resolved(Ok(None));
        assert!(!state.loading);
        assert!(state.user.is_none());
    }
}
