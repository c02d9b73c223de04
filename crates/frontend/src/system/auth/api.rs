use contracts::system::auth::{UserInfo, VerifyTokenResponse};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, get_json, post_json};

/// Current user behind the session cookie, `None` when not signed in
pub async fn verify_token() -> Result<Option<UserInfo>, ApiError> {
    get_json::<VerifyTokenResponse>("/verify-token")
        .await
        .map(VerifyTokenResponse::into_user)
}

/// Invalidate the session on the backend
pub async fn logout() -> Result<(), ApiError> {
    post_json("/logout", &serde_json::json!({})).await
}

/// Entry point of the Google OAuth flow; the browser navigates there
pub fn google_login_url() -> String {
    api_url("/login/google")
}
