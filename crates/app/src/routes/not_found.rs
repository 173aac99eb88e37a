use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    rsx! {
        div { class: "session-loading",
            div { style: "text-align: center;",
                h1 { "404" }
                p { "La page /{route.join(\"/\")} n'existe pas." }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        navigator().push(Route::Home {});
                    },
                    "Retour à l'accueil"
                }
            }
        }
    }
}
