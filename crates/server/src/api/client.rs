use dioxus::prelude::*;
use shared_types::{Client, CreateClientRequest, UpdateClientRequest};

// ── Client Server Functions (manager back-office) ──────

/// List all registered clients. Manager only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_clients() -> Result<Vec<Client>, ServerFnError> {
    use crate::api::session;
    use crate::error_convert::AppErrorExt;

    let token = session::require_admin().await?;
    crate::upstream::get_json("/clients", Some(&token))
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Fetch a single client for the edit form. Manager only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_client(id: String) -> Result<Client, ServerFnError> {
    use crate::api::session;
    use crate::error_convert::AppErrorExt;

    let token = session::require_admin().await?;
    crate::upstream::get_json(&format!("/clients/{id}"), Some(&token))
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Create a client record. Manager only.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn create_client(request: CreateClientRequest) -> Result<Client, ServerFnError> {
    use crate::api::session;
    use crate::error_convert::{AppErrorExt, ValidateRequest};

    let token = session::require_admin().await?;
    request
        .validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let client: Client = crate::upstream::post_json("/clients", Some(&token), &request)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(client = %client.email, "client created");
    Ok(client)
}

/// Update a client record. Manager only.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn update_client(request: UpdateClientRequest) -> Result<Client, ServerFnError> {
    use crate::api::session;
    use crate::error_convert::{AppErrorExt, ValidateRequest};

    let token = session::require_admin().await?;
    request
        .validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let client: Client =
        crate::upstream::put_json(&format!("/clients/{}", request.id), Some(&token), &request)
            .await
            .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(client = %client.email, "client updated");
    Ok(client)
}

/// Delete a client record. Manager only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_client(id: String) -> Result<(), ServerFnError> {
    use crate::api::session;
    use crate::error_convert::AppErrorExt;

    let token = session::require_admin().await?;
    crate::upstream::delete(&format!("/clients/{id}"), Some(&token))
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(%id, "client deleted");
    Ok(())
}
