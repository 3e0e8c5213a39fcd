//! Simple API Key Authentication (Bearer Token)

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

/// API Key from secrets
static API_KEY: std::sync::OnceLock<String> = std::sync::OnceLock::new();

/// Initialize the API key
pub fn init_api_key(key: String) {
    let _ = API_KEY.set(key);
}

fn get_api_key() -> Option<&'static str> {
    API_KEY.get().map(|s| s.as_str())
}

/// Check an `Authorization` header value against the configured key.
///
/// An absent or empty key disables authentication.
pub fn authorize(api_key: Option<&str>, auth_header: Option<&str>) -> Result<(), StatusCode> {
    let api_key = match api_key {
        Some(key) if !key.is_empty() => key,
        _ => return Ok(()),
    };

    match auth_header {
        Some(header) => match header.strip_prefix("Bearer ") {
            Some(token) if token == api_key => Ok(()),
            Some(_) => {
                tracing::warn!("Invalid API key attempted");
                Err(StatusCode::UNAUTHORIZED)
            }
            None => {
                tracing::warn!("Invalid Authorization header format");
                Err(StatusCode::UNAUTHORIZED)
            }
        },
        None => {
            tracing::warn!("Missing Authorization header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

/// Authentication middleware
/// Validates Bearer token against the API key
pub async fn auth_middleware(request: Request, next: Next) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    authorize(get_api_key(), auth_header)?;
    Ok(next.run(request).await)
}
