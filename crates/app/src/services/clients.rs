use dioxus::prelude::*;
use shared_types::{AppError, Client, CreateClientRequest, UpdateClientRequest};

use super::{map_server_error, use_mutation, MutationHandle};

pub fn use_client_list() -> Resource<Result<Vec<Client>, AppError>> {
    use_resource(move || async move {
        server::api::list_clients().await.map_err(map_server_error)
    })
}

pub fn use_client(id: String) -> Resource<Result<Client, AppError>> {
    use_resource(use_reactive!(|(id,)| async move {
        server::api::get_client(id).await.map_err(map_server_error)
    }))
}

pub fn use_create_client(
    on_success: impl FnMut(Client) + Clone + 'static,
    on_error: impl FnMut(AppError) + Clone + 'static,
) -> MutationHandle<CreateClientRequest> {
    use_mutation(server::api::create_client, on_success, on_error)
}

pub fn use_update_client(
    on_success: impl FnMut(Client) + Clone + 'static,
    on_error: impl FnMut(AppError) + Clone + 'static,
) -> MutationHandle<UpdateClientRequest> {
    use_mutation(server::api::update_client, on_success, on_error)
}

pub fn use_delete_client(
    on_success: impl FnMut(()) + Clone + 'static,
    on_error: impl FnMut(AppError) + Clone + 'static,
) -> MutationHandle<String> {
    use_mutation(server::api::delete_client, on_success, on_error)
}
