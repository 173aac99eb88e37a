// Server-only session helpers shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, Role};

use crate::auth::cookies;
use crate::auth::middleware::SessionToken;
use crate::error_convert::AppErrorExt;

/// Read the caller's upstream token from the current request, if any.
/// Checks the middleware-injected extension first, falls back to cookie
/// parsing.
pub(crate) fn session_token() -> Option<String> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(token) = parts.extensions.get::<SessionToken>() {
        return Some(token.0.clone());
    }

    let headers = parts.headers.clone();
    cookies::extract_session_token(&headers)
}

/// Extract the caller's upstream token or fail with an auth error.
pub(crate) fn require_session() -> Result<String, ServerFnError> {
    session_token()
        .ok_or_else(|| AppError::unauthorized("Please sign in to continue").into_server_fn_error())
}

/// Fetch the caller's profile from the upstream service.
pub(crate) async fn fetch_session_user(token: &str) -> Result<AuthUser, AppError> {
    crate::upstream::get_json("/auth/me", Some(token)).await
}

/// Require an authenticated caller with the admin role. The upstream
/// service re-checks the token on the forwarded call; this check exists
/// to fail fast with a friendly error.
pub(crate) async fn require_admin() -> Result<String, ServerFnError> {
    let token = require_session()?;
    let user = fetch_session_user(&token)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    if user.role != Role::Admin {
        return Err(AppError::forbidden("Manager access required").into_server_fn_error());
    }
    Ok(token)
}
