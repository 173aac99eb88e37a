use dioxus::prelude::*;
use shared_types::{AuthUser, LoginRequest, RegisterRequest};

/// Upstream session payload: opaque bearer token plus the profile.
#[cfg(feature = "server")]
#[derive(Debug, serde::Deserialize)]
struct UpstreamSession {
    token: String,
    user: AuthUser,
}

/// Sign in against the upstream service and store the returned token in
/// the HTTP-only session cookie.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn login(request: LoginRequest) -> Result<AuthUser, ServerFnError> {
    use crate::auth::cookies;
    use crate::error_convert::{AppErrorExt, ValidateRequest};

    request
        .validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let session: UpstreamSession = crate::upstream::post_json("/auth/login", None, &request)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    cookies::schedule_session_cookie(&session.token);
    tracing::info!(email = %session.user.email, role = ?session.user.role, "user signed in");

    Ok(session.user)
}

/// Create an account upstream. Does not sign the caller in — the login
/// screen is the single place a session starts.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn register(request: RegisterRequest) -> Result<AuthUser, ServerFnError> {
    use crate::error_convert::{AppErrorExt, ValidateRequest};

    request
        .validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let user: AuthUser = crate::upstream::post_json("/auth/register", None, &request)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(email = %user.email, "account created");
    Ok(user)
}

/// Drop the session cookie. The upstream token is stateless from our
/// side, so there is nothing to revoke.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::cookies;

    cookies::schedule_clear_session();
    tracing::debug!("session cookie cleared");
    Ok(())
}

/// Resolve the caller's session. `None` means Guest: no cookie, or a
/// token the upstream no longer accepts (in which case the stale cookie
/// is dropped).
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::api::session;
    use crate::auth::cookies;
    use crate::error_convert::AppErrorExt;
    use shared_types::AppErrorKind;

    let Some(token) = session::session_token() else {
        return Ok(None);
    };

    match session::fetch_session_user(&token).await {
        Ok(user) => Ok(Some(user)),
        Err(err) if matches!(err.kind, AppErrorKind::Unauthorized | AppErrorKind::Forbidden) => {
            cookies::schedule_clear_session();
            tracing::debug!("stale session token rejected upstream, cookie cleared");
            Ok(None)
        }
        Err(err) => Err(err.into_server_fn_error()),
    }
}
