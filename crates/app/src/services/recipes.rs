use dioxus::prelude::*;
use shared_types::{AppError, CreateRecipeRequest, Recipe, UpdateRecipeRequest};

use super::{map_server_error, use_mutation, MutationHandle};

/// The full menu, refreshed with `.restart()` after mutations.
pub fn use_recipe_list() -> Resource<Result<Vec<Recipe>, AppError>> {
    use_resource(move || async move {
        server::api::list_recipes().await.map_err(map_server_error)
    })
}

pub fn use_recipe(id: String) -> Resource<Result<Recipe, AppError>> {
    use_resource(use_reactive!(|(id,)| async move {
        server::api::get_recipe(id).await.map_err(map_server_error)
    }))
}

pub fn use_create_recipe(
    on_success: impl FnMut(Recipe) + Clone + 'static,
    on_error: impl FnMut(AppError) + Clone + 'static,
) -> MutationHandle<CreateRecipeRequest> {
    use_mutation(server::api::create_recipe, on_success, on_error)
}

pub fn use_update_recipe(
    on_success: impl FnMut(Recipe) + Clone + 'static,
    on_error: impl FnMut(AppError) + Clone + 'static,
) -> MutationHandle<UpdateRecipeRequest> {
    use_mutation(server::api::update_recipe, on_success, on_error)
}

pub fn use_delete_recipe(
    on_success: impl FnMut(()) + Clone + 'static,
    on_error: impl FnMut(AppError) + Clone + 'static,
) -> MutationHandle<String> {
    use_mutation(server::api::delete_recipe, on_success, on_error)
}
