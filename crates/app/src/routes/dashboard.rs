use dioxus::prelude::*;
use shared_types::{Order, OrderStatus};
use shared_ui::{
    use_toast, Badge, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, FormSelect, PageHeader,
    PageTitle, Skeleton, ToastOptions,
};

use crate::format_helpers::{format_order_date, format_price};
use crate::routes::order_history::status_badge_variant;
use crate::services::orders::{use_all_orders, use_update_order_status};

const STATUS_CHOICES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Preparing,
    OrderStatus::Delivering,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

fn status_value(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "pending",
        OrderStatus::Preparing => "preparing",
        OrderStatus::Delivering => "delivering",
        OrderStatus::Delivered => "delivered",
        OrderStatus::Cancelled => "cancelled",
    }
}

fn status_from_value(value: &str) -> Option<OrderStatus> {
    STATUS_CHOICES
        .into_iter()
        .find(|status| status_value(*status) == value)
}

/// Orders still needing attention come first, newest within a group.
fn active_first(orders: &[Order]) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(|a, b| {
        let rank = |o: &Order| match o.status {
            OrderStatus::Pending => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::Delivering => 2,
            OrderStatus::Delivered => 3,
            OrderStatus::Cancelled => 4,
        };
        rank(a).cmp(&rank(b)).then(b.placed_at.cmp(&a.placed_at))
    });
    sorted
}

fn open_count(orders: &[Order]) -> usize {
    orders
        .iter()
        .filter(|o| {
            matches!(
                o.status,
                OrderStatus::Pending | OrderStatus::Preparing | OrderStatus::Delivering
            )
        })
        .count()
}

fn delivered_revenue(orders: &[Order]) -> f64 {
    orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .map(|o| o.total)
        .sum()
}

/// Manager landing page: every order in the system with inline status
/// changes.
#[component]
pub fn Dashboard() -> Element {
    let mut orders = use_all_orders();
    let toast = use_toast();

    let update_status = use_update_order_status(
        move |_| {
            orders.restart();
            toast.success("Statut mis à jour".to_string(), ToastOptions::new());
        },
        move |err| {
            toast.error(err.message.clone(), ToastOptions::new());
        },
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./manager.css") }

        PageHeader {
            PageTitle { "Tableau de bord" }
        }

        match &*orders.read() {
            Some(Ok(list)) => rsx! {
                div { class: "dashboard-stats",
                    Card {
                        CardHeader { CardTitle { "Commandes" } }
                        CardContent {
                            p { class: "dashboard-stat-value", "{list.len()}" }
                        }
                    }
                    Card {
                        CardHeader { CardTitle { "En cours" } }
                        CardContent {
                            p { class: "dashboard-stat-value", "{open_count(list)}" }
                        }
                    }
                    Card {
                        CardHeader { CardTitle { "Chiffre livré" } }
                        CardContent {
                            p { class: "dashboard-stat-value", {format_price(delivered_revenue(list))} }
                        }
                    }
                }

                if list.is_empty() {
                    p { class: "manager-empty", "Aucune commande pour le moment." }
                } else {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Date" }
                            DataTableColumn { "Client" }
                            DataTableColumn { "Articles" }
                            DataTableColumn { "Total" }
                            DataTableColumn { "Statut" }
                            DataTableColumn { "" }
                        }
                        DataTableBody {
                            for order in active_first(list) {
                                DataTableRow { key: "{order.id}",
                                    DataTableCell { {format_order_date(&order.placed_at)} }
                                    DataTableCell { "{order.client_email}" }
                                    DataTableCell {
                                        {order.lines.iter().map(|l| l.quantity).sum::<u32>().to_string()}
                                    }
                                    DataTableCell { {format_price(order.total)} }
                                    DataTableCell {
                                        Badge {
                                            variant: status_badge_variant(order.status),
                                            {order.status.label()}
                                        }
                                    }
                                    DataTableCell {
                                        FormSelect {
                                            value: status_value(order.status).to_string(),
                                            disabled: update_status.is_pending(),
                                            onchange: {
                                                let order_id = order.id.clone();
                                                move |evt: Event<FormData>| {
                                                    if let Some(status) = status_from_value(&evt.value()) {
                                                        update_status.mutate((order_id.clone(), status));
                                                    }
                                                }
                                            },
                                            for choice in STATUS_CHOICES {
                                                option {
                                                    value: status_value(choice),
                                                    selected: choice == order.status,
                                                    {choice.label()}
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                p { class: "manager-error", "{err.message}" }
            },
            None => rsx! {
                Skeleton { style: "height: 16rem;" }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn order(id: &str, status: OrderStatus, total: f64, day: u32) -> Order {
        Order {
            id: id.into(),
            client_email: "client@exemple.fr".into(),
            lines: vec![],
            total,
            status,
            placed_at: Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).single().unwrap(),
        }
    }

    #[test]
    fn status_values_round_trip() {
        for status in STATUS_CHOICES {
            assert_eq!(status_from_value(status_value(status)), Some(status));
        }
        assert_eq!(status_from_value("bogus"), None);
    }

    #[test]
    fn open_orders_sort_ahead_of_finished_ones() {
        let orders = vec![
            order("done", OrderStatus::Delivered, 20.0, 5),
            order("new", OrderStatus::Pending, 15.0, 1),
            order("gone", OrderStatus::Cancelled, 8.0, 9),
        ];

        let sorted = active_first(&orders);
        assert_eq!(sorted[0].id, "new");
        assert_eq!(sorted[1].id, "done");
        assert_eq!(sorted[2].id, "gone");
    }

    #[test]
    fn stats_count_only_what_they_should() {
        let orders = vec![
            order("a", OrderStatus::Pending, 10.0, 1),
            order("b", OrderStatus::Delivering, 12.0, 2),
            order("c", OrderStatus::Delivered, 30.0, 3),
            order("d", OrderStatus::Cancelled, 99.0, 4),
        ];

        assert_eq!(open_count(&orders), 2);
        assert_eq!(delivered_revenue(&orders), 30.0);
    }
}
