use serde::{Deserialize, Serialize};

/// Category of a recipe. The upstream service encodes this as an integer
/// (0 = dish, 1 = dessert), so it serializes through `u8`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum RecipeKind {
    #[default]
    Dish,
    Dessert,
}

impl RecipeKind {
    /// Display label shown in menus and tables.
    pub fn label(&self) -> &'static str {
        match self {
            RecipeKind::Dish => "Plat",
            RecipeKind::Dessert => "Dessert",
        }
    }

    pub const ALL: [RecipeKind; 2] = [RecipeKind::Dish, RecipeKind::Dessert];
}

impl From<RecipeKind> for u8 {
    fn from(kind: RecipeKind) -> u8 {
        match kind {
            RecipeKind::Dish => 0,
            RecipeKind::Dessert => 1,
        }
    }
}

impl TryFrom<u8> for RecipeKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RecipeKind::Dish),
            1 => Ok(RecipeKind::Dessert),
            other => Err(format!("unknown recipe kind: {other}")),
        }
    }
}

/// A recipe as owned by the upstream service. The UI only ever holds a
/// transient cached copy of these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub quantity: i64,
    pub available: bool,
    #[serde(rename = "type")]
    pub kind: RecipeKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recipe_kind_round_trips_through_wire_integers() {
        let json = serde_json::to_string(&RecipeKind::Dessert).unwrap();
        assert_eq!(json, "1");
        let kind: RecipeKind = serde_json::from_str("0").unwrap();
        assert_eq!(kind, RecipeKind::Dish);
    }

    #[test]
    fn unknown_kind_integer_is_rejected() {
        assert!(serde_json::from_str::<RecipeKind>("7").is_err());
    }

    #[test]
    fn recipe_deserializes_upstream_shape() {
        let json = r#"{
            "id": "r1",
            "name": "Tartiflette",
            "description": "Potatoes, reblochon, lardons",
            "image": "https://img.example/tartiflette.jpg",
            "price": 12.5,
            "quantity": 8,
            "available": true,
            "type": 0
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.kind, RecipeKind::Dish);
        assert_eq!(recipe.price, 12.5);
    }
}
