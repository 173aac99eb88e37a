use dioxus::prelude::*;
use shared_types::RecipeKind;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, Skeleton,
    ToastOptions,
};

use crate::cart::use_cart;
use crate::format_helpers::format_price;
use crate::routes::Route;
use crate::services::recipes::use_recipe;

/// Full view of one recipe, with add-to-cart.
#[component]
pub fn RecipeDetail(id: String) -> Element {
    let recipe = use_recipe(id);
    let mut cart = use_cart();
    let toast = use_toast();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./recipe_detail.css") }

        match &*recipe.read() {
            Some(Ok(recipe)) => {
                let recipe = recipe.clone();
                rsx! {
                    Card {
                        div { class: "recipe-detail",
                            img { class: "recipe-detail-image", src: "{recipe.image}", alt: "{recipe.name}" }
                            CardContent {
                                div { class: "recipe-detail-head",
                                    h1 { "{recipe.name}" }
                                    Badge {
                                        variant: match recipe.kind {
                                            RecipeKind::Dish => BadgeVariant::Primary,
                                            RecipeKind::Dessert => BadgeVariant::Secondary,
                                        },
                                        {recipe.kind.label()}
                                    }
                                }
                                p { class: "recipe-detail-description", "{recipe.description}" }
                                p { class: "recipe-detail-price", {format_price(recipe.price)} }

                                div { class: "recipe-detail-actions",
                                    if recipe.available {
                                        Button {
                                            variant: ButtonVariant::Primary,
                                            onclick: {
                                                let recipe = recipe.clone();
                                                move |_| {
                                                    cart.add(&recipe);
                                                    toast.success(
                                                        format!("{} ajouté au panier", recipe.name),
                                                        ToastOptions::new(),
                                                    );
                                                }
                                            },
                                            "Ajouter au panier"
                                        }
                                    } else {
                                        Badge { variant: BadgeVariant::Outline, "Épuisé" }
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| {
                                            navigator().push(Route::Menu {});
                                        },
                                        "Retour à la carte"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(err)) => rsx! {
                div { class: "session-loading",
                    p { "{err.message}" }
                }
            },
            None => rsx! {
                Skeleton { style: "height: 20rem;" }
            },
        }
    }
}
