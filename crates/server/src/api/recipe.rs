use dioxus::prelude::*;
use shared_types::{CreateRecipeRequest, Recipe, UpdateRecipeRequest};

// ── Recipe Server Functions ────────────────────────────

/// List the full menu. Public — the menu is browsable without a session.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_recipes() -> Result<Vec<Recipe>, ServerFnError> {
    use crate::api::session;
    use crate::error_convert::AppErrorExt;

    let token = session::session_token();
    crate::upstream::get_json("/recipes", token.as_deref())
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Fetch a single recipe by id.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_recipe(id: String) -> Result<Recipe, ServerFnError> {
    use crate::api::session;
    use crate::error_convert::AppErrorExt;

    let token = session::session_token();
    crate::upstream::get_json(&format!("/recipes/{id}"), token.as_deref())
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Create a recipe. Manager only.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn create_recipe(request: CreateRecipeRequest) -> Result<Recipe, ServerFnError> {
    use crate::api::session;
    use crate::error_convert::{AppErrorExt, ValidateRequest};

    let token = session::require_admin().await?;
    request
        .validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let recipe: Recipe = crate::upstream::post_json("/recipes", Some(&token), &request)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(recipe = %recipe.name, "recipe created");
    Ok(recipe)
}

/// Update an existing recipe. Manager only.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn update_recipe(request: UpdateRecipeRequest) -> Result<Recipe, ServerFnError> {
    use crate::api::session;
    use crate::error_convert::{AppErrorExt, ValidateRequest};

    let token = session::require_admin().await?;
    request
        .validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let recipe: Recipe =
        crate::upstream::put_json(&format!("/recipes/{}", request.id), Some(&token), &request)
            .await
            .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(recipe = %recipe.name, "recipe updated");
    Ok(recipe)
}

/// Delete a recipe. Manager only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_recipe(id: String) -> Result<(), ServerFnError> {
    use crate::api::session;
    use crate::error_convert::AppErrorExt;

    let token = session::require_admin().await?;
    crate::upstream::delete(&format!("/recipes/{id}"), Some(&token))
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(%id, "recipe deleted");
    Ok(())
}
