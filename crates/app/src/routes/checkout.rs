use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    ToastOptions,
};

use crate::cart::use_cart;
use crate::format_helpers::format_price;
use crate::routes::Route;
use crate::services::orders::use_place_order;

/// Checkout: the cart recap and the confirm button that turns it into
/// an order. Lives behind the USER guard.
#[component]
pub fn Checkout() -> Element {
    let cart = use_cart();
    let toast = use_toast();

    let place_order = use_place_order(
        move |_| {
            let mut cart = cart;
            cart.clear();
            toast.success("Commande confirmée !".to_string(), ToastOptions::new());
            navigator().push(Route::OrderHistory {});
        },
        move |err| {
            toast.error(err.message.clone(), ToastOptions::new());
        },
    );

    let lines = cart.cart.read().lines.clone();
    let total = cart.total();

    let handle_confirm = move |_| {
        place_order.mutate(cart.cart.read().to_request());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./cart.css") }
        document::Link { rel: "stylesheet", href: asset!("./orders.css") }

        if lines.is_empty() {
            div { class: "cart-empty",
                p { "Votre panier est vide, rien à commander." }
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
                CardHeader {
                    CardTitle { "Récapitulatif de commande" }
                    CardDescription { "Vérifiez votre commande avant de confirmer." }
                }
                CardContent {
                    ul { class: "checkout-lines",
                        for line in lines.iter() {
                            li { key: "{line.recipe_id}",
                                span { "{line.quantity} × {line.name}" }
                                span { {format_price(line.subtotal())} }
                            }
                        }
                    }

                    div { class: "cart-summary",
                        span { class: "cart-total", "Total : " {format_price(total)} }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: place_order.is_pending(),
                            onclick: handle_confirm,
                            if place_order.is_pending() { "Envoi..." } else { "Confirmer la commande" }
                        }
                    }
                }
            }
        }
    }
}
