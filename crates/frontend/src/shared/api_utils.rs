//! API utilities for frontend-backend communication
//!
//! Every request carries the browser credentials so the backend session cookie
//! travels with it. Non-2xx answers are turned into [`ApiError::Http`] with the
//! backend `detail` message attached.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{FormData, RequestCredentials};

use super::api_error::ApiError;
use super::config::app_config;

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/stores/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", app_config().api_base, path)
}

fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    log::warn!("[Api] {} {} -> {}", status, response.url(), body);
    Err(err)
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET {path}` decoded as JSON
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = with_credentials(Request::get(&api_url(path)))
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    decode(send(request).await?).await
}

/// `POST {path}` with a JSON body; the response body is ignored
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = with_credentials(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send(request).await.map(|_| ())
}

/// `PUT {path}` with a JSON body; the response body is ignored
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = with_credentials(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send(request).await.map(|_| ())
}

/// `DELETE {path}`
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let request = with_credentials(Request::delete(&api_url(path)))
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send(request).await.map(|_| ())
}

/// `POST {path}` with a multipart body, response decoded as JSON
pub async fn post_multipart<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, ApiError> {
    let request = with_credentials(Request::post(&api_url(path)))
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    decode(send(request).await?).await
}
