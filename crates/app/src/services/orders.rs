use dioxus::prelude::*;
use shared_types::{AppError, CreateOrderRequest, Order, OrderStatus};

use super::{map_server_error, use_mutation, MutationHandle};

/// Orders of the signed-in client.
pub fn use_my_orders() -> Resource<Result<Vec<Order>, AppError>> {
    use_resource(move || async move {
        server::api::list_my_orders().await.map_err(map_server_error)
    })
}

/// Every order in the system — manager dashboard only.
pub fn use_all_orders() -> Resource<Result<Vec<Order>, AppError>> {
    use_resource(move || async move {
        server::api::list_all_orders()
            .await
            .map_err(map_server_error)
    })
}

pub fn use_place_order(
    on_success: impl FnMut(Order) + Clone + 'static,
    on_error: impl FnMut(AppError) + Clone + 'static,
) -> MutationHandle<CreateOrderRequest> {
    use_mutation(server::api::place_order, on_success, on_error)
}

pub fn use_update_order_status(
    on_success: impl FnMut(Order) + Clone + 'static,
    on_error: impl FnMut(AppError) + Clone + 'static,
) -> MutationHandle<(String, OrderStatus)> {
    use_mutation(
        |(id, status): (String, OrderStatus)| server::api::update_order_status(id, status),
        on_success,
        on_error,
    )
}
