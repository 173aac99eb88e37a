use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardTitle, Skeleton};

use crate::format_helpers::format_price;
use crate::routes::Route;
use crate::services::recipes::use_recipe_list;

/// Landing page: hero banner plus a taste of the menu.
#[component]
pub fn Home() -> Element {
    let recipes = use_recipe_list();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        section { class: "hero",
            h1 { "Des plats frais, livrés chez vous" }
            p {
                "Chaque jour, notre chef compose une carte courte de plats et de "
                "desserts faits maison. Commandez en ligne, on s'occupe du reste."
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    navigator().push(Route::Menu {});
                },
                "Voir la carte"
            }
        }

        section { class: "home-featured",
            h2 { "À la carte aujourd'hui" }
            div { class: "home-featured-grid",
                match &*recipes.read() {
                    Some(Ok(list)) => {
                        let featured: Vec<_> = list.iter().filter(|r| r.available).take(3).cloned().collect();
                        rsx! {
                            for recipe in featured {
                                Card {
                                    key: "{recipe.id}",
                                    img { class: "home-featured-image", src: "{recipe.image}", alt: "{recipe.name}" }
                                    CardContent {
                                        CardTitle { "{recipe.name}" }
                                        p { class: "home-featured-price", {format_price(recipe.price)} }
                                        Link { to: Route::RecipeDetail { id: recipe.id.clone() }, "Découvrir" }
                                    }
                                }
                            }
                        }
                    }
                    Some(Err(_)) => rsx! {
                        p { class: "home-featured-error", "La carte est momentanément indisponible." }
                    },
                    None => rsx! {
                        for i in 0..3 {
                            Skeleton { key: "{i}", style: "height: 14rem;" }
                        }
                    },
                }
            }
        }
    }
}
