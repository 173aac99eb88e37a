use dioxus::prelude::*;
use shared_types::{CreateRecipeRequest, Recipe, RecipeKind, UpdateRecipeRequest};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Form, FormSelect, Input, Modal,
    ModalClose, ModalDescription, ModalFooter, ModalHeader, ModalTitle, PageActions, PageHeader,
    PageTitle, Skeleton, Textarea, ToastOptions,
};
use std::collections::HashMap;

use crate::format_helpers::format_price;
use crate::services::recipes::{
    use_create_recipe, use_delete_recipe, use_recipe_list, use_update_recipe,
};

/// Editable form state for the add/edit dialog. Numeric fields stay
/// strings until validation so the inputs can hold whatever was typed.
#[derive(Clone, Debug, PartialEq)]
struct RecipeDraft {
    name: String,
    description: String,
    image: String,
    price: String,
    quantity: String,
    kind: RecipeKind,
    available: bool,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            image: String::new(),
            price: String::new(),
            quantity: String::new(),
            kind: RecipeKind::Dish,
            available: true,
        }
    }
}

impl RecipeDraft {
    fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            image: recipe.image.clone(),
            price: format!("{}", recipe.price),
            quantity: recipe.quantity.to_string(),
            kind: recipe.kind,
            available: recipe.available,
        }
    }

    /// Validate the draft. An `Err` means no request is built and no
    /// call leaves the page — the map feeds the inline field errors.
    fn validate(&self) -> Result<(f64, i64), HashMap<String, String>> {
        let mut errors = HashMap::new();

        if self.name.trim().is_empty() {
            errors.insert("name".into(), "Le nom est requis".into());
        }
        if self.description.trim().is_empty() {
            errors.insert("description".into(), "La description est requise".into());
        }
        if self.image.trim().is_empty() {
            errors.insert("image".into(), "L'image est requise".into());
        }

        let price = match self.price.trim().replace(',', ".").parse::<f64>() {
            Ok(p) if p >= 0.0 => p,
            Ok(_) => {
                errors.insert("price".into(), "Le prix doit être positif ou nul".into());
                0.0
            }
            Err(_) => {
                errors.insert("price".into(), "Prix invalide".into());
                0.0
            }
        };

        let quantity = match self.quantity.trim().parse::<i64>() {
            Ok(q) if q >= 0 => q,
            Ok(_) => {
                errors.insert(
                    "quantity".into(),
                    "La quantité doit être positive ou nulle".into(),
                );
                0
            }
            Err(_) => {
                errors.insert("quantity".into(), "Quantité invalide".into());
                0
            }
        };

        if errors.is_empty() {
            Ok((price, quantity))
        } else {
            Err(errors)
        }
    }

    fn to_create_request(&self) -> Result<CreateRecipeRequest, HashMap<String, String>> {
        let (price, quantity) = self.validate()?;
        Ok(CreateRecipeRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            price,
            quantity,
            kind: self.kind,
        })
    }

    fn to_update_request(&self, id: &str) -> Result<UpdateRecipeRequest, HashMap<String, String>> {
        let (price, quantity) = self.validate()?;
        Ok(UpdateRecipeRequest {
            id: id.to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            price,
            quantity,
            available: self.available,
            kind: self.kind,
        })
    }
}

/// Table order: plats first, then desserts, alphabetical within a kind.
fn sorted_by_kind(recipes: &[Recipe]) -> Vec<Recipe> {
    let mut sorted = recipes.to_vec();
    sorted.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
    sorted
}

/// Back-office recipe management: the table plus the add/edit dialog
/// and the delete confirmation.
#[component]
pub fn ManageRecipes() -> Element {
    let mut recipes = use_recipe_list();
    let toast = use_toast();

    // One dialog serves both add and edit; `editing` decides which.
    let mut show_dialog = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Recipe>::None);
    let mut draft = use_signal(RecipeDraft::default);
    let mut draft_errors = use_signal(HashMap::<String, String>::new);
    let mut confirm_delete = use_signal(|| Option::<Recipe>::None);

    // Closing the dialog always resets the draft, so a reopened dialog
    // never shows the previous recipe's values.
    let mut close_dialog = move || {
        show_dialog.set(false);
        editing.set(None);
        draft.set(RecipeDraft::default());
        draft_errors.set(HashMap::new());
    };

    let create = use_create_recipe(
        move |_| {
            recipes.restart();
            close_dialog();
            toast.success("Recette ajoutée".to_string(), ToastOptions::new());
        },
        move |err| {
            if err.field_errors.is_empty() {
                toast.error(err.message.clone(), ToastOptions::new());
            } else {
                draft_errors.set(err.field_errors.clone());
            }
        },
    );

    let update = use_update_recipe(
        move |_| {
            recipes.restart();
            close_dialog();
            toast.success("Recette mise à jour".to_string(), ToastOptions::new());
        },
        move |err| {
            if err.field_errors.is_empty() {
                toast.error(err.message.clone(), ToastOptions::new());
            } else {
                draft_errors.set(err.field_errors.clone());
            }
        },
    );

    let delete = use_delete_recipe(
        move |_| {
            recipes.restart();
            confirm_delete.set(None);
            toast.success("Recette supprimée".to_string(), ToastOptions::new());
        },
        move |err| {
            confirm_delete.set(None);
            toast.error(err.message.clone(), ToastOptions::new());
        },
    );

    let open_create = move |_| {
        editing.set(None);
        draft.set(RecipeDraft::default());
        draft_errors.set(HashMap::new());
        show_dialog.set(true);
    };

    let handle_save = move |_: FormEvent| {
        let current = draft();
        let result = match editing() {
            Some(recipe) => current.to_update_request(&recipe.id).map(|req| {
                update.mutate(req);
            }),
            None => current.to_create_request().map(|req| {
                create.mutate(req);
            }),
        };

        if let Err(errors) = result {
            draft_errors.set(errors);
        }
    };

    let pending = create.is_pending() || update.is_pending();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./manager.css") }

        PageHeader {
            PageTitle { "Gestion des recettes" }
            PageActions {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: open_create,
                    "Ajouter une recette"
                }
            }
        }

        match &*recipes.read() {
            Some(Ok(list)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Nom" }
                        DataTableColumn { "Type" }
                        DataTableColumn { "Prix" }
                        DataTableColumn { "Stock" }
                        DataTableColumn { "Disponible" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        for recipe in sorted_by_kind(list) {
                            DataTableRow { key: "{recipe.id}",
                                DataTableCell { "{recipe.name}" }
                                DataTableCell {
                                    Badge {
                                        variant: match recipe.kind {
                                            RecipeKind::Dish => BadgeVariant::Primary,
                                            RecipeKind::Dessert => BadgeVariant::Secondary,
                                        },
                                        {recipe.kind.label()}
                                    }
                                }
                                DataTableCell { {format_price(recipe.price)} }
                                DataTableCell { "{recipe.quantity}" }
                                DataTableCell {
                                    if recipe.available { "Oui" } else { "Non" }
                                }
                                DataTableCell {
                                    div { class: "manager-row-actions",
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let recipe = recipe.clone();
                                                move |_| {
                                                    draft.set(RecipeDraft::from_recipe(&recipe));
                                                    draft_errors.set(HashMap::new());
                                                    editing.set(Some(recipe.clone()));
                                                    show_dialog.set(true);
                                                }
                                            },
                                            "Modifier"
                                        }
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let recipe = recipe.clone();
                                                move |_| confirm_delete.set(Some(recipe.clone()))
                                            },
                                            "Supprimer"
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

        // Add / edit dialog
        Modal {
            open: show_dialog(),
            on_close: move |_| close_dialog(),
            ModalHeader {
                ModalTitle {
                    if editing().is_some() { "Modifier la recette" } else { "Nouvelle recette" }
                }
                ModalDescription { "Les champs marqués sont obligatoires." }
                ModalClose { on_close: move |_| close_dialog() }
            }
            Form { onsubmit: handle_save,
                Input {
                    label: "Nom",
                    value: draft().name,
                    on_input: move |evt: FormEvent| draft.write().name = evt.value(),
                }
                if let Some(msg) = draft_errors().get("name") {
                    p { class: "manager-field-error", "{msg}" }
                }

                Textarea {
                    label: "Description",
                    value: draft().description,
                    on_input: move |evt: FormEvent| draft.write().description = evt.value(),
                }
                if let Some(msg) = draft_errors().get("description") {
                    p { class: "manager-field-error", "{msg}" }
                }

                Input {
                    label: "Image (URL)",
                    value: draft().image,
                    on_input: move |evt: FormEvent| draft.write().image = evt.value(),
                }
                if let Some(msg) = draft_errors().get("image") {
                    p { class: "manager-field-error", "{msg}" }
                }

                div { class: "manager-form-row",
                    div {
                        Input {
                            label: "Prix (€)",
                            value: draft().price,
                            on_input: move |evt: FormEvent| draft.write().price = evt.value(),
                        }
                        if let Some(msg) = draft_errors().get("price") {
                            p { class: "manager-field-error", "{msg}" }
                        }
                    }
                    div {
                        Input {
                            label: "Quantité",
                            value: draft().quantity,
                            on_input: move |evt: FormEvent| draft.write().quantity = evt.value(),
                        }
                        if let Some(msg) = draft_errors().get("quantity") {
                            p { class: "manager-field-error", "{msg}" }
                        }
                    }
                }

                FormSelect {
                    label: "Type",
                    value: (draft().kind as u8).to_string(),
                    onchange: move |evt: Event<FormData>| {
                        let kind = if evt.value() == "1" { RecipeKind::Dessert } else { RecipeKind::Dish };
                        draft.write().kind = kind;
                    },
                    for kind in RecipeKind::ALL {
                        option { value: (kind as u8).to_string(), {kind.label()} }
                    }
                }

                if editing().is_some() {
                    label { class: "manager-checkbox",
                        input {
                            r#type: "checkbox",
                            checked: draft().available,
                            onchange: move |evt: Event<FormData>| {
                                draft.write().available = evt.checked();
                            },
                        }
                        "Disponible à la commande"
                    }
                }

                ModalFooter {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| close_dialog(),
                        "Annuler"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: pending,
                        attributes: vec![Attribute::new("type", "submit", None, false)],
                        if pending { "Enregistrement..." } else { "Enregistrer" }
                    }
                }
            }
        }

        // Delete confirmation
        Modal {
            open: confirm_delete().is_some(),
            on_close: move |_| confirm_delete.set(None),
            ModalHeader {
                ModalTitle { "Supprimer la recette" }
                if let Some(recipe) = confirm_delete() {
                    ModalDescription {
                        "« {recipe.name} » sera retirée définitivement de la carte."
                    }
                }
            }
            ModalFooter {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| confirm_delete.set(None),
                    "Annuler"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: delete.is_pending(),
                    onclick: move |_| {
                        if let Some(recipe) = confirm_delete() {
                            delete.mutate(recipe.id);
                        }
                    },
                    "Supprimer"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_draft() -> RecipeDraft {
        RecipeDraft {
            name: "Blanquette de veau".into(),
            description: "Mijotée au vin blanc".into(),
            image: "https://img.example/blanquette.jpg".into(),
            price: "13.50".into(),
            quantity: "8".into(),
            kind: RecipeKind::Dish,
            available: true,
        }
    }

    #[test]
    fn valid_draft_becomes_a_create_request() {
        let request = valid_draft().to_create_request().unwrap();
        assert_eq!(request.name, "Blanquette de veau");
        assert_eq!(request.price, 13.5);
        assert_eq!(request.quantity, 8);
    }

    #[test]
    fn french_decimal_comma_is_accepted() {
        let mut draft = valid_draft();
        draft.price = "13,50".into();
        assert_eq!(draft.to_create_request().unwrap().price, 13.5);
    }

    #[test]
    fn negative_price_yields_a_field_error_and_no_request() {
        let mut draft = valid_draft();
        draft.price = "-2".into();
        let errors = draft.to_create_request().unwrap_err();
        assert!(errors.contains_key("price"));
    }

    #[test]
    fn negative_quantity_yields_a_field_error_and_no_request() {
        let mut draft = valid_draft();
        draft.quantity = "-1".into();
        let errors = draft.to_update_request("r1").unwrap_err();
        assert!(errors.contains_key("quantity"));
    }

    #[test]
    fn empty_required_fields_are_all_reported() {
        let draft = RecipeDraft {
            price: "5".into(),
            quantity: "1".into(),
            ..RecipeDraft::default()
        };
        let errors = draft.to_create_request().unwrap_err();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("description"));
        assert!(errors.contains_key("image"));
    }

    #[test]
    fn reopening_a_draft_from_a_recipe_prefills_every_field() {
        let recipe = Recipe {
            id: "r1".into(),
            name: "Tarte tatin".into(),
            description: "Caramélisée".into(),
            image: "tatin.jpg".into(),
            price: 6.5,
            quantity: 4,
            available: false,
            kind: RecipeKind::Dessert,
        };

        let draft = RecipeDraft::from_recipe(&recipe);
        assert_eq!(draft.name, "Tarte tatin");
        assert_eq!(draft.price, "6.5");
        assert_eq!(draft.quantity, "4");
        assert_eq!(draft.kind, RecipeKind::Dessert);
        assert!(!draft.available);

        // A fresh default draft carries none of it — what a closed
        // dialog resets to.
        assert_eq!(RecipeDraft::default().name, "");
        assert!(RecipeDraft::default().available);
    }

    #[test]
    fn table_sorts_dishes_before_desserts() {
        let list = vec![
            Recipe {
                id: "d".into(),
                name: "Île flottante".into(),
                description: "".into(),
                image: "".into(),
                price: 5.0,
                quantity: 2,
                available: true,
                kind: RecipeKind::Dessert,
            },
            Recipe {
                id: "p".into(),
                name: "Bœuf bourguignon".into(),
                description: "".into(),
                image: "".into(),
                price: 14.0,
                quantity: 3,
                available: true,
                kind: RecipeKind::Dish,
            },
        ];

        let sorted = sorted_by_kind(&list);
        assert_eq!(sorted[0].kind, RecipeKind::Dish);
        assert_eq!(sorted[1].kind, RecipeKind::Dessert);
    }
}
