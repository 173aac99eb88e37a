use dioxus::prelude::*;
use shared_types::{CreateOrderRequest, Order, OrderStatus};

// ── Order Server Functions ─────────────────────────────

/// List the caller's own orders, newest first upstream.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_my_orders() -> Result<Vec<Order>, ServerFnError> {
    use crate::api::session;
    use crate::error_convert::AppErrorExt;

    let token = session::require_session()?;
    crate::upstream::get_json("/orders/mine", Some(&token))
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Submit the cart as a new order for the signed-in client.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn place_order(request: CreateOrderRequest) -> Result<Order, ServerFnError> {
    use crate::api::session;
    use crate::error_convert::{AppErrorExt, ValidateRequest};

    let token = session::require_session()?;
    request
        .validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let order: Order = crate::upstream::post_json("/orders", Some(&token), &request)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(order = %order.id, lines = order.lines.len(), "order placed");
    Ok(order)
}

/// List every order in the system. Manager only — feeds the dashboard.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_all_orders() -> Result<Vec<Order>, ServerFnError> {
    use crate::api::session;
    use crate::error_convert::AppErrorExt;

    let token = session::require_admin().await?;
    crate::upstream::get_json("/orders", Some(&token))
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Move an order to a new status. Manager only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_order_status(id: String, status: OrderStatus) -> Result<Order, ServerFnError> {
    use crate::api::session;
    use crate::error_convert::AppErrorExt;

    let token = session::require_admin().await?;
    let body = serde_json::json!({ "status": status });
    let order: Order = crate::upstream::put_json(&format!("/orders/{id}"), Some(&token), &body)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(order = %order.id, status = ?order.status, "order status updated");
    Ok(order)
}
