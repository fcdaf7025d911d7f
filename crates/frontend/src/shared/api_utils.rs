//! API utilities for frontend-backend communication
//!
//! Every helper maps each failure stage (serialize, send, status, parse)
//! to a readable message so views can show it as-is.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Same protocol and host as the admin page, backend on port 3000.
/// Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/admin/" or "/auth/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> Result<RequestBuilder, String> {
    let token = storage::get_access_token().ok_or("Not authenticated")?;
    Ok(builder.header("Authorization", &format!("Bearer {}", token)))
}

/// Authenticated GET returning a JSON body
pub async fn get_json<T>(path: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let response = with_auth(Request::get(&api_url(path)))?
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Authenticated POST with a JSON body, returning a JSON body
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = with_auth(Request::post(&api_url(path)))?
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Authenticated POST whose response body is ignored
pub async fn post_empty<B>(path: &str, body: Option<&B>) -> Result<(), String>
where
    B: Serialize,
{
    let builder = with_auth(Request::post(&api_url(path)))?;
    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?,
        None => builder
            .build()
            .map_err(|e| format!("Failed to build request: {}", e))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    Ok(())
}
