use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::RecipeKind;

/// Request DTO for logging in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Please enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Request DTO for creating an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Please enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please enter a name"))
    )]
    pub display_name: String,
}

/// Request DTO for creating a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateRecipeRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please enter a name"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please enter a description"))
    )]
    pub description: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please add an image"))
    )]
    pub image: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Price must be zero or more"))
    )]
    pub price: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0, message = "Quantity must be zero or more"))
    )]
    pub quantity: i64,
    #[serde(rename = "type")]
    pub kind: RecipeKind,
}

/// Request DTO for updating a recipe. Same constraints as creation; the
/// `available` flag is carried through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdateRecipeRequest {
    pub id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please enter a name"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please enter a description"))
    )]
    pub description: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please add an image"))
    )]
    pub image: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Price must be zero or more"))
    )]
    pub price: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0, message = "Quantity must be zero or more"))
    )]
    pub quantity: i64,
    pub available: bool,
    #[serde(rename = "type")]
    pub kind: RecipeKind,
}

/// Request DTO for creating a client record from the back-office.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateClientRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please enter a name"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Please enter a valid email address"))
    )]
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Request DTO for updating a client record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdateClientRequest {
    pub id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please enter a name"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Please enter a valid email address"))
    )]
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// One line of a new order: the recipe and how many of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct OrderLineInput {
    pub recipe_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Quantity must be at least 1"))
    )]
    pub quantity: u32,
}

/// Request DTO for placing an order from the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateOrderRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Your cart is empty"), nested)
    )]
    pub lines: Vec<OrderLineInput>,
}

/// Flatten `validator::ValidationErrors` into a field → message map for
/// inline display next to form fields.
#[cfg(feature = "validation")]
pub fn validation_error_map(
    errors: &validator::ValidationErrors,
) -> std::collections::HashMap<String, String> {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                (field.to_string(), message)
            })
        })
        .collect()
}

#[cfg(all(test, feature = "validation"))]
mod tests {
    use super::*;
    use validator::Validate;

    fn draft() -> CreateRecipeRequest {
        CreateRecipeRequest {
            name: "Crème brûlée".into(),
            description: "Vanilla custard, caramelized sugar".into(),
            image: "https://img.example/creme.jpg".into(),
            price: 6.5,
            quantity: 10,
            kind: RecipeKind::Dessert,
        }
    }

    #[test]
    fn valid_recipe_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut req = draft();
        req.price = -1.0;
        let errors = req.validate().unwrap_err();
        let map = validation_error_map(&errors);
        assert_eq!(map.get("price").map(String::as_str), Some("Price must be zero or more"));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let mut req = draft();
        req.quantity = -3;
        let errors = req.validate().unwrap_err();
        assert!(validation_error_map(&errors).contains_key("quantity"));
    }

    #[test]
    fn empty_name_and_image_are_both_reported() {
        let mut req = draft();
        req.name.clear();
        req.image.clear();
        let map = validation_error_map(&req.validate().unwrap_err());
        assert!(map.contains_key("name"));
        assert!(map.contains_key("image"));
    }

    #[test]
    fn empty_order_is_rejected() {
        let req = CreateOrderRequest { lines: vec![] };
        assert!(req.validate().is_err());
    }
}
