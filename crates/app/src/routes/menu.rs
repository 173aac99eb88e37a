use dioxus::prelude::*;
use shared_types::{Recipe, RecipeKind};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardTitle,
    PageHeader, PageTitle, Skeleton, ToastOptions,
};

use crate::cart::use_cart;
use crate::format_helpers::format_price;
use crate::routes::Route;
use crate::services::recipes::use_recipe_list;

/// Which part of the menu is shown.
#[derive(Clone, Copy, PartialEq)]
enum MenuFilter {
    All,
    Kind(RecipeKind),
}

fn filter_menu(recipes: &[Recipe], filter: MenuFilter) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| match filter {
            MenuFilter::All => true,
            MenuFilter::Kind(kind) => r.kind == kind,
        })
        .cloned()
        .collect()
}

/// The menu: every recipe, filterable by plat/dessert, with add-to-cart
/// on available items.
#[component]
pub fn Menu() -> Element {
    let recipes = use_recipe_list();
    let mut cart = use_cart();
    let toast = use_toast();
    let mut filter = use_signal(|| MenuFilter::All);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./menu.css") }

        PageHeader {
            PageTitle { "La carte" }
        }

        div { class: "menu-filters",
            Button {
                variant: if filter() == MenuFilter::All { ButtonVariant::Primary } else { ButtonVariant::Outline },
                onclick: move |_| filter.set(MenuFilter::All),
                "Tout"
            }
            Button {
                variant: if filter() == MenuFilter::Kind(RecipeKind::Dish) { ButtonVariant::Primary } else { ButtonVariant::Outline },
                onclick: move |_| filter.set(MenuFilter::Kind(RecipeKind::Dish)),
                "Plats"
            }
            Button {
                variant: if filter() == MenuFilter::Kind(RecipeKind::Dessert) { ButtonVariant::Primary } else { ButtonVariant::Outline },
                onclick: move |_| filter.set(MenuFilter::Kind(RecipeKind::Dessert)),
                "Desserts"
            }
        }

        div { class: "menu-grid",
            match &*recipes.read() {
                Some(Ok(list)) => {
                    let visible = filter_menu(list, filter());
                    rsx! {
                        if visible.is_empty() {
                            p { class: "menu-empty", "Rien dans cette catégorie pour le moment." }
                        }
                        for recipe in visible {
                            Card { key: "{recipe.id}",
                                Link { to: Route::RecipeDetail { id: recipe.id.clone() },
                                    img { class: "menu-card-image", src: "{recipe.image}", alt: "{recipe.name}" }
                                }
                                CardContent {
                                    div { class: "menu-card-top",
                                        CardTitle { "{recipe.name}" }
                                        Badge {
                                            variant: match recipe.kind {
                                                RecipeKind::Dish => BadgeVariant::Primary,
                                                RecipeKind::Dessert => BadgeVariant::Secondary,
                                            },
                                            {recipe.kind.label()}
                                        }
                                    }
                                    p { class: "menu-card-price", {format_price(recipe.price)} }
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
                                }
                            }
                        }
                    }
                }
                Some(Err(err)) => rsx! {
                    p { class: "menu-empty", "{err.message}" }
                },
                None => rsx! {
                    for i in 0..6 {
                        Skeleton { key: "{i}", style: "height: 16rem;" }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn recipe(id: &str, kind: RecipeKind) -> Recipe {
        Recipe {
            id: id.into(),
            name: id.into(),
            description: "".into(),
            image: "".into(),
            price: 10.0,
            quantity: 5,
            available: true,
            kind,
        }
    }

    #[test]
    fn kind_filter_keeps_only_that_kind() {
        let menu = vec![
            recipe("soup", RecipeKind::Dish),
            recipe("tarte", RecipeKind::Dessert),
            recipe("gratin", RecipeKind::Dish),
        ];

        let dishes = filter_menu(&menu, MenuFilter::Kind(RecipeKind::Dish));
        assert_eq!(dishes.len(), 2);
        assert!(dishes.iter().all(|r| r.kind == RecipeKind::Dish));

        let all = filter_menu(&menu, MenuFilter::All);
        assert_eq!(all.len(), 3);
    }
}
