//! The three session actions. Each is a single cookie-authenticated
//! network call with no retry; the caller dispatches the outcome into
//! the auth store.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::models::{AuthPayload, LoginRequest};

/// Ask the backend whether the ambient session cookie is still valid.
///
/// Failure here is the normal anonymous state, not an error condition.
pub async fn check_auth() -> Result<AuthPayload, String> {
    let url = format!("{}/api/v1/auth/check", CONFIG.backend_url());

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Not authenticated".to_string());
    }

    response
        .json::<AuthPayload>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Exchange credentials for a session cookie (set by the backend).
pub async fn login(username: &str, password: &str) -> Result<AuthPayload, String> {
    let url = format!("{}/api/v1/auth/login", CONFIG.backend_url());
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Logging in as {}", username);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(&body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Incorrect credentials".to_string());
    }

    response
        .json::<AuthPayload>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Clear the session cookie server-side.
pub async fn logout() -> Result<(), String> {
    let url = format!("{}/api/v1/auth/logout", CONFIG.backend_url());

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Error logging out".to_string());
    }

    Ok(())
}
