//! Thin HTTP client for the upstream ExpressFood API.
//!
//! Every server function funnels through here: the helpers attach the
//! caller's bearer token, enforce the configured timeout, and translate
//! upstream failures into structured `AppError`s.

use std::collections::HashMap;
use std::sync::OnceLock;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::AppError;

use crate::config;

static CLIENT: OnceLock<Client> = OnceLock::new();

fn http_client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .timeout(config::config().request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Join the configured base URL with an endpoint path.
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn request(method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
    let url = join_url(&config::config().upstream_base_url, path);
    let mut req = http_client().request(method, url);
    if let Some(token) = token {
        req = req.bearer_auth(token);
    }
    req
}

fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::upstream("The food service took too long to respond")
    } else {
        tracing::warn!(%err, "upstream request failed");
        AppError::upstream("Could not reach the food service")
    }
}

async fn dispatch<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, AppError> {
    let response = req.send().await.map_err(transport_error)?;
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| {
                tracing::warn!(%err, "upstream returned an unreadable body");
                AppError::upstream("The food service returned an invalid response")
            })
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(status_to_app_error(status, &body))
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, AppError> {
    dispatch(request(Method::GET, path, token)).await
}

pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, AppError> {
    dispatch(request(Method::POST, path, token).json(body)).await
}

pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, AppError> {
    dispatch(request(Method::PUT, path, token).json(body)).await
}

/// DELETE an upstream resource. Accepts any success status and ignores
/// the body (the upstream returns 204 on delete).
pub async fn delete(path: &str, token: Option<&str>) -> Result<(), AppError> {
    let response = request(Method::DELETE, path, token)
        .send()
        .await
        .map_err(transport_error)?;
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(status_to_app_error(status, &body))
    }
}

/// Error body shape the upstream emits. `message` is either a plain
/// string or an array of strings; `errors` maps field names to messages.
#[derive(Debug, Default, serde::Deserialize)]
struct UpstreamErrorBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<HashMap<String, String>>,
}

fn body_message(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Array(parts) => {
            let joined = parts
                .iter()
                .filter_map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            (!joined.is_empty()).then_some(joined)
        }
        _ => None,
    }
}

/// Translate an upstream HTTP failure into an `AppError`.
pub fn status_to_app_error(status: StatusCode, body: &str) -> AppError {
    let parsed: UpstreamErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed.message.as_ref().and_then(body_message);
    let field_errors = parsed.errors.unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED => {
            AppError::unauthorized(message.unwrap_or_else(|| "Please sign in to continue".into()))
        }
        StatusCode::FORBIDDEN => {
            AppError::forbidden(message.unwrap_or_else(|| "You are not allowed to do that".into()))
        }
        StatusCode::NOT_FOUND => {
            AppError::not_found(message.unwrap_or_else(|| "Resource not found".into()))
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            let message = message.unwrap_or_else(|| "The request was rejected".into());
            if field_errors.is_empty() {
                AppError::bad_request(message)
            } else {
                AppError::validation(message, field_errors)
            }
        }
        _ => AppError::upstream(
            message.unwrap_or_else(|| format!("The food service failed ({status})")),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;

    #[test]
    fn joins_base_and_path_without_doubled_slashes() {
        assert_eq!(
            join_url("http://localhost:3001/", "/recipes"),
            "http://localhost:3001/recipes"
        );
        assert_eq!(
            join_url("http://localhost:3001", "recipes/42"),
            "http://localhost:3001/recipes/42"
        );
    }

    #[test]
    fn unauthorized_maps_to_unauthorized_kind() {
        let err = status_to_app_error(StatusCode::UNAUTHORIZED, r#"{"message":"Token expired"}"#);
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Token expired");
    }

    #[test]
    fn not_found_without_body_uses_default_message() {
        let err = status_to_app_error(StatusCode::NOT_FOUND, "");
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Resource not found");
    }

    #[test]
    fn bad_request_with_field_errors_maps_to_validation() {
        let body = r#"{"message":"Validation failed","errors":{"price":"Price must be zero or more"}}"#;
        let err = status_to_app_error(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(
            err.field_errors.get("price").map(String::as_str),
            Some("Price must be zero or more")
        );
    }

    #[test]
    fn array_messages_are_joined() {
        let body = r#"{"message":["name should not be empty","image should not be empty"]}"#;
        let err = status_to_app_error(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(
            err.message,
            "name should not be empty; image should not be empty"
        );
    }

    #[test]
    fn server_errors_map_to_upstream_kind() {
        let err = status_to_app_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(err.kind, AppErrorKind::UpstreamError);
    }
}
