use dioxus::prelude::*;
use shared_types::OrderStatus;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    PageHeader, PageTitle, Skeleton,
};

use crate::format_helpers::{format_order_date, format_price};
use crate::routes::Route;
use crate::services::orders::use_my_orders;

pub(crate) fn status_badge_variant(status: OrderStatus) -> BadgeVariant {
    match status {
        OrderStatus::Pending => BadgeVariant::Secondary,
        OrderStatus::Preparing => BadgeVariant::Primary,
        OrderStatus::Delivering => BadgeVariant::Primary,
        OrderStatus::Delivered => BadgeVariant::Outline,
        OrderStatus::Cancelled => BadgeVariant::Destructive,
    }
}

/// The signed-in client's past orders.
#[component]
pub fn OrderHistory() -> Element {
    let orders = use_my_orders();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./cart.css") }
        document::Link { rel: "stylesheet", href: asset!("./orders.css") }

        PageHeader {
            PageTitle { "Mes commandes" }
        }

        match &*orders.read() {
            Some(Ok(orders)) if orders.is_empty() => rsx! {
                div { class: "cart-empty",
                    p { "Vous n'avez pas encore commandé." }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator().push(Route::Menu {});
                        },
                        "Parcourir la carte"
                    }
                }
            },
            Some(Ok(orders)) => rsx! {
                div { class: "order-list",
                    for order in orders.iter() {
                        Card { key: "{order.id}",
                            CardHeader {
                                div { class: "order-card-head",
                                    CardTitle { {format_order_date(&order.placed_at)} }
                                    Badge {
                                        variant: status_badge_variant(order.status),
                                        {order.status.label()}
                                    }
                                }
                            }
                            CardContent {
                                ul { class: "checkout-lines",
                                    for line in order.lines.iter() {
                                        li { key: "{line.recipe_id}",
                                            span { "{line.quantity} × {line.name}" }
                                            span { {format_price(line.subtotal())} }
                                        }
                                    }
                                }
                                p { class: "cart-total", "Total : " {format_price(order.total)} }
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                div { class: "session-loading",
                    p { "{err.message}" }
                }
            },
            None => rsx! {
                Skeleton { style: "height: 10rem;" }
                Skeleton { style: "height: 10rem; margin-top: 1rem;" }
            },
        }
    }
}
