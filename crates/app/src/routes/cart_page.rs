use dioxus::prelude::*;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageTitle,
};

use crate::cart::use_cart;
use crate::format_helpers::format_price;
use crate::routes::Route;
use crate::session::use_session;

/// The cart. Entirely client-local — the order only exists once the
/// checkout submits it.
#[component]
pub fn CartPage() -> Element {
    let mut cart = use_cart();
    let session = use_session();

    let lines = cart.cart.read().lines.clone();
    let total = cart.total();

    let handle_checkout = move |_| {
        if session.is_authenticated() {
            navigator().push(Route::Checkout {});
        } else {
            navigator().push(Route::Login {});
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./cart.css") }

        PageHeader {
            PageTitle { "Votre panier" }
        }

        if lines.is_empty() {
            div { class: "cart-empty",
                p { "Votre panier est vide." }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        navigator().push(Route::Menu {});
                    },
                    "Parcourir la carte"
                }
            }
        } else {
            Card {
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Plat" }
                            DataTableColumn { "Prix unitaire" }
                            DataTableColumn { "Quantité" }
                            DataTableColumn { "Sous-total" }
                            DataTableColumn { "" }
                        }
                        DataTableBody {
                            for line in lines.iter().cloned() {
                                DataTableRow { key: "{line.recipe_id}",
                                    DataTableCell { "{line.name}" }
                                    DataTableCell { {format_price(line.unit_price)} }
                                    DataTableCell {
                                        div { class: "cart-quantity",
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: {
                                                    let id = line.recipe_id.clone();
                                                    let quantity = line.quantity;
                                                    move |_| cart.set_quantity(&id, quantity.saturating_sub(1))
                                                },
                                                "−"
                                            }
                                            span { "{line.quantity}" }
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: {
                                                    let id = line.recipe_id.clone();
                                                    let quantity = line.quantity;
                                                    move |_| cart.set_quantity(&id, quantity + 1)
                                                },
                                                "+"
                                            }
                                        }
                                    }
                                    DataTableCell { {format_price(line.subtotal())} }
                                    DataTableCell {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: {
                                                let id = line.recipe_id.clone();
                                                move |_| cart.remove(&id)
                                            },
                                            "Retirer"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "cart-summary",
                        span { class: "cart-total", "Total : " {format_price(total)} }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: handle_checkout,
                            "Commander"
                        }
                    }
                }
            }
        }
    }
}
