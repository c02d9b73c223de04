//! Client configuration.
//!
//! The backend origin can be pinned at build time through the
//! `FRUIT_CHECKER_API_BASE` environment variable (e.g.
//! `FRUIT_CHECKER_API_BASE=https://api.example.com trunk build`). Without it
//! the origin is derived from the page location with the backend port 8000.

use once_cell::sync::Lazy;

/// Backend port used when no explicit origin is configured
pub const DEFAULT_API_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin without trailing slash, e.g. `http://localhost:8000`
    pub api_base: String,
    /// Auto-hide delay of notifications on resource screens
    pub notification_timeout_ms: u32,
    /// Auto-hide delay of notifications on the classification screen
    pub classify_notification_timeout_ms: u32,
    /// Pause between clearing the session and leaving for `/login`
    pub logout_redirect_delay_ms: u32,
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let (protocol, hostname) = window_origin();
    let config = AppConfig {
        api_base: resolve_api_base(option_env!("FRUIT_CHECKER_API_BASE"), &protocol, &hostname),
        notification_timeout_ms: 6000,
        classify_notification_timeout_ms: 4000,
        logout_redirect_delay_ms: 100,
    };
    log::debug!("[Config] api_base = {}", config.api_base);
    config
});

/// Process-wide configuration, built on first use
pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

fn window_origin() -> (String, String) {
    let Some(window) = web_sys::window() else {
        return ("http:".to_string(), "localhost".to_string());
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    (protocol, hostname)
}

/// Backend origin from an optional override and the page location
pub fn resolve_api_base(override_base: Option<&str>, protocol: &str, hostname: &str) -> String {
    if let Some(base) = override_base.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    let hostname = if hostname.is_empty() { "localhost" } else { hostname };
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_from_location() {
        assert_eq!(
            resolve_api_base(None, "http:", "localhost"),
            "http://localhost:8000"
        );
        assert_eq!(
            resolve_api_base(None, "https:", "frutas.example.com"),
            "https://frutas.example.com:8000"
        );
        assert_eq!(resolve_api_base(None, "http:", ""), "http://localhost:8000");
    }

    #[test]
    fn test_override_wins_and_is_trimmed() {
        assert_eq!(
            resolve_api_base(Some("https://api.example.com/"), "http:", "localhost"),
            "https://api.example.com"
        );
        assert_eq!(
            resolve_api_base(Some("  "), "http:", "localhost"),
            "http://localhost:8000"
        );
    }
}
