use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

/// Session cookie set by the backend after the OAuth callback
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Leftover cookie of the OAuth handshake
pub const SESSION_COOKIE: &str = "session";

const EPOCH: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// `Set-Cookie` string that makes the browser drop `name`
pub fn expired_cookie(name: &str, domain: Option<&str>) -> String {
    match domain {
        Some(domain) => format!("{name}=; expires={EPOCH}; path=/; domain={domain}; samesite=lax"),
        None => format!("{name}=; expires={EPOCH}; path=/;"),
    }
}

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

fn page_hostname() -> Option<String> {
    window()?.location().hostname().ok()
}

/// Expire `name` for the current host
pub fn expire_cookie(name: &str) {
    let Some(document) = html_document() else {
        return;
    };
    let host = page_hostname();
    if let Err(e) = document.set_cookie(&expired_cookie(name, host.as_deref())) {
        log::warn!("[Session] could not expire cookie {}: {:?}", name, e);
    }
}

/// Expire `name` without a domain attribute
pub fn expire_host_only_cookie(name: &str) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(&expired_cookie(name, None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_cookie_with_domain() {
        assert_eq!(
            expired_cookie(ACCESS_TOKEN_COOKIE, Some("localhost")),
            "access_token=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/; domain=localhost; samesite=lax"
        );
    }

    #[test]
    fn test_expired_cookie_host_only() {
        assert_eq!(
            expired_cookie(SESSION_COOKIE, None),
            "session=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/;"
        );
    }
}
