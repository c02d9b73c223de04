use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use thaw::*;

use super::context::{use_session, SessionState};

pub const LOGIN_PATH: &str = "/login";

/// Query parameter carrying the location to return to after login
pub const FROM_PARAM: &str = "from";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Requires a signed-in user
    Private,
    /// Rendered regardless of the session (login screen)
    Public,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Render,
    Redirect(String),
}

pub fn guard_decision(session: &SessionState, access: Access, origin: &str) -> GuardDecision {
    if session.loading {
        return GuardDecision::Loading;
    }
    match access {
        Access::Private if !session.is_authenticated() => {
            GuardDecision::Redirect(login_redirect_path(origin))
        }
        _ => GuardDecision::Render,
    }
}

/// `/login?from=<origin>`
pub fn login_redirect_path(origin: &str) -> String {
    format!(
        "{}?{}={}",
        LOGIN_PATH,
        FROM_PARAM,
        urlencoding::encode(origin)
    )
}

/// Path plus query of the current location
pub fn origin_of(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Where to go after login; only same-origin paths outside `/login` are honoured
///
/// Browsers treat `\` like `/` and strip tabs and newlines from URLs.
pub fn return_path(from: Option<&str>) -> String {
    match from {
        Some(p)
            if p.starts_with('/')
                && !p.starts_with("//")
                && !p.contains('\\')
                && !p.chars().any(|c| c.is_ascii_control())
                && p != LOGIN_PATH
                && !p.starts_with("/login?") =>
        {
            p.to_string()
        }
        _ => "/".to_string(),
    }
}

#[component]
pub fn FullPageSpinner() -> impl IntoView {
    view! {
        <div style="display: flex; align-items: center; justify-content: center; min-height: 100vh;">
            <Spinner />
        </div>
    }
}

fn guarded(access: Access, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let decision = Memo::new(move |_| {
        let origin = origin_of(&location.pathname.get(), &location.search.get());
        session.with(|s| guard_decision(s, access, &origin))
    });

    move || match decision.get() {
        GuardDecision::Loading => view! { <FullPageSpinner /> }.into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(path) => {
            log::debug!("[Guard] redirecting to {}", path);
            view! { <Redirect path=path /> }.into_any()
        }
    }
}

/// Renders children only for a signed-in user, else sends to the login screen
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Access::Private, children)
}

/// Waits for the session check, then renders children
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Access::Public, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserInfo;

    fn signed_in() -> SessionState {
        SessionState {
            user: Some(UserInfo {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
            }),
            loading: false,
        }
    }

    #[test]
    fn test_anonymous_private_redirects_with_origin() {
        assert_eq!(
            guard_decision(&SessionState::signed_out(), Access::Private, "/inventory?page=2"),
            GuardDecision::Redirect("/login?from=%2Finventory%3Fpage%3D2".to_string())
        );
    }

    #[test]
    fn test_authenticated_private_renders() {
        assert_eq!(
            guard_decision(&signed_in(), Access::Private, "/stores"),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_loading_waits_for_both_variants() {
        let loading = SessionState::default();
        assert_eq!(guard_decision(&loading, Access::Private, "/"), GuardDecision::Loading);
        assert_eq!(guard_decision(&loading, Access::Public, "/login"), GuardDecision::Loading);
    }

    #[test]
    fn test_public_renders_regardless() {
        assert_eq!(
            guard_decision(&SessionState::signed_out(), Access::Public, "/login"),
            GuardDecision::Render
        );
        assert_eq!(
            guard_decision(&signed_in(), Access::Public, "/login"),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_origin_of() {
        assert_eq!(origin_of("/sales", ""), "/sales");
        assert_eq!(origin_of("/sales", "?a=1"), "/sales?a=1");
        assert_eq!(origin_of("/sales", "a=1"), "/sales?a=1");
    }

    #[test]
    fn test_return_path() {
        assert_eq!(return_path(Some("/inventory?page=2")), "/inventory?page=2");
        assert_eq!(return_path(None), "/");
        assert_eq!(return_path(Some("https://evil.example")), "/");
        assert_eq!(return_path(Some("//evil.example")), "/");
        assert_eq!(return_path(Some("/login")), "/");
        assert_eq!(return_path(Some("/login?from=%2F")), "/");
    }

    #[test]
    fn test_return_path_rejects_backslash_and_control_chars() {
        assert_eq!(return_path(Some("/\\evil.example")), "/");
        assert_eq!(return_path(Some("/\\/evil.example")), "/");
        assert_eq!(return_path(Some("/\t/evil.example")), "/");
        assert_eq!(return_path(Some("/\n/evil.example")), "/");
        assert_eq!(return_path(Some("/stores\\x")), "/");
        assert_eq!(return_path(Some("/sales?page=2")), "/sales?page=2");
    }
}
