use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use crate::config;

/// Name of the HTTP-only cookie holding the upstream bearer token.
pub const SESSION_COOKIE: &str = "ef_session";

/// Session cookie lifetime. The upstream token is opaque to us, so the
/// cookie expiry is the only client-side bound on the session.
pub const SESSION_TTL_HOURS: i64 = 12;

/// Build a Set-Cookie header value for the session token.
///
/// The token comes from the upstream service, so it is treated as
/// untrusted: returns `None` if it would not form a valid header value.
pub fn build_session_cookie(token: &str, max_age_hours: i64) -> Option<HeaderValue> {
    let cfg = config::config();
    let mut cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_hours * 3600))
        .secure(cfg.cookie_secure);

    if let Some(domain) = cfg.cookie_domain.clone() {
        cookie = cookie.domain(domain);
    }

    HeaderValue::from_str(&cookie.build().to_string()).ok()
}

/// Build a Set-Cookie header that clears the session cookie.
pub fn build_clear_session_cookie() -> HeaderValue {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();

    HeaderValue::from_str(&cookie.to_string()).expect("clear cookie should be valid")
}

/// Extract the session token from request cookies.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, SESSION_COOKIE)
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Pending cookie action to be picked up by the session middleware.
#[derive(Clone, Debug)]
pub enum PendingCookieAction {
    Set { token: String },
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the
/// middleware. Stored in request extensions as `Arc<Mutex<>>` so server
/// functions can populate it.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

/// Schedule the session cookie to be set by the middleware.
/// Called from server functions — reads the CookieSlot from
/// FullstackContext extensions.
pub fn schedule_session_cookie(token: &str) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            *slot.0.lock().unwrap() = Some(PendingCookieAction::Set {
                token: token.to_string(),
            });
        }
    }
}

/// Schedule the session cookie to be cleared by the middleware.
pub fn schedule_clear_session() {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            *slot.0.lock().unwrap() = Some(PendingCookieAction::Clear);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_session_token_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; ef_session=tok-123; lang=fr");
        assert_eq!(extract_session_token(&headers), Some("tok-123".to_string()));
    }

    #[test]
    fn missing_session_cookie_yields_none() {
        let headers = headers_with_cookie("theme=dark");
        assert_eq!(extract_session_token(&headers), None);
    }

    #[test]
    fn session_cookie_is_http_only_with_max_age() {
        let value = build_session_cookie("tok-123", SESSION_TTL_HOURS).unwrap();
        let rendered = value.to_str().unwrap();
        assert!(rendered.starts_with("ef_session=tok-123"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains(&format!("Max-Age={}", SESSION_TTL_HOURS * 3600)));
        assert!(rendered.contains("Path=/"));
    }

    #[test]
    fn header_invalid_token_builds_no_cookie() {
        assert!(build_session_cookie("tok\nSet-Cookie: evil", SESSION_TTL_HOURS).is_none());
        assert!(build_session_cookie("tok\u{1}", SESSION_TTL_HOURS).is_none());
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let value = build_clear_session_cookie();
        let rendered = value.to_str().unwrap();
        assert!(rendered.starts_with("ef_session="));
        assert!(rendered.contains("Max-Age=0"));
    }
}
