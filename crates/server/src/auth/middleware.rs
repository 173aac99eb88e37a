use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction, SESSION_TTL_HOURS};

/// Opaque upstream token for the current request, inserted by the
/// session middleware when the session cookie is present.
#[derive(Clone, Debug)]
pub struct SessionToken(pub String);

/// Permissive session middleware.
///
/// On each request:
/// 1. Copies the session cookie value into request extensions
/// 2. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 3. After the handler runs, applies any pending cookie action to the response
///
/// Does NOT reject unauthenticated requests — server functions decide
/// authorization, and the upstream service is the authority on the token.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    if let Some(token) = cookies::extract_session_token(req.headers()) {
        req.extensions_mut().insert(SessionToken(token));
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some(action) = cookie_slot.0.lock().unwrap().take() {
        match action {
            PendingCookieAction::Set { token } => {
                match cookies::build_session_cookie(&token, SESSION_TTL_HOURS) {
                    Some(value) => {
                        response.headers_mut().append(header::SET_COOKIE, value);
                    }
                    None => {
                        // Upstream handed us a token we cannot store.
                        tracing::warn!("session token is not header-safe, clearing session");
                        response
                            .headers_mut()
                            .append(header::SET_COOKIE, cookies::build_clear_session_cookie());
                    }
                }
            }
            PendingCookieAction::Clear => {
                response
                    .headers_mut()
                    .append(header::SET_COOKIE, cookies::build_clear_session_cookie());
            }
        }
    }

    response
}
