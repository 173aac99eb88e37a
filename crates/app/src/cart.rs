use dioxus::prelude::*;
use shared_types::{CreateOrderRequest, OrderLineInput, Recipe};

/// One line of the client-local cart.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub recipe_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// The cart lives entirely on the client; it only crosses the wire when
/// the checkout converts it into an order request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Add one unit of a recipe. Adding a recipe already in the cart
    /// increments its line instead of duplicating it.
    pub fn add(&mut self, recipe: &Recipe) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.recipe_id == recipe.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                recipe_id: recipe.id.clone(),
                name: recipe.name.clone(),
                unit_price: recipe.price,
                quantity: 1,
            });
        }
    }

    pub fn remove(&mut self, recipe_id: &str) {
        self.lines.retain(|l| l.recipe_id != recipe_id);
    }

    /// Set a line's quantity, floored at 1. Removing a line entirely
    /// goes through `remove`.
    pub fn set_quantity(&mut self, recipe_id: &str, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.recipe_id == recipe_id) {
            line.quantity = quantity.max(1);
        }
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Convert the cart into the order payload sent at checkout.
    pub fn to_request(&self) -> CreateOrderRequest {
        CreateOrderRequest {
            lines: self
                .lines
                .iter()
                .map(|l| OrderLineInput {
                    recipe_id: l.recipe_id.clone(),
                    quantity: l.quantity,
                })
                .collect(),
        }
    }
}

/// Global cart state, provided once at the app root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartState {
    pub cart: Signal<Cart>,
}

impl CartState {
    pub fn new() -> Self {
        Self {
            cart: Signal::new(Cart::default()),
        }
    }

    pub fn add(&mut self, recipe: &Recipe) {
        self.cart.write().add(recipe);
    }

    pub fn remove(&mut self, recipe_id: &str) {
        self.cart.write().remove(recipe_id);
    }

    pub fn set_quantity(&mut self, recipe_id: &str, quantity: u32) {
        self.cart.write().set_quantity(recipe_id, quantity);
    }

    pub fn clear(&mut self) {
        self.cart.write().clear();
    }

    pub fn item_count(&self) -> u32 {
        self.cart.read().item_count()
    }

    pub fn total(&self) -> f64 {
        self.cart.read().total()
    }
}

/// Hook to access the shared cart.
pub fn use_cart() -> CartState {
    use_context::<CartState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::RecipeKind;

    fn recipe(id: &str, price: f64) -> Recipe {
        Recipe {
            id: id.into(),
            name: format!("Recette {id}"),
            description: "".into(),
            image: "".into(),
            price,
            quantity: 10,
            available: true,
            kind: RecipeKind::Dish,
        }
    }

    #[test]
    fn adding_twice_increments_the_existing_line() {
        let mut cart = Cart::default();
        cart.add(&recipe("r1", 8.0));
        cart.add(&recipe("r1", 8.0));

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn quantity_never_drops_below_one() {
        let mut cart = Cart::default();
        cart.add(&recipe("r1", 8.0));
        cart.set_quantity("r1", 0);

        assert_eq!(cart.lines[0].quantity, 1);
    }

    #[test]
    fn removing_a_line_leaves_the_rest() {
        let mut cart = Cart::default();
        cart.add(&recipe("r1", 8.0));
        cart.add(&recipe("r2", 5.5));
        cart.remove("r1");

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].recipe_id, "r2");
    }

    #[test]
    fn total_sums_line_subtotals() {
        let mut cart = Cart::default();
        cart.add(&recipe("r1", 8.0));
        cart.set_quantity("r1", 3);
        cart.add(&recipe("r2", 5.5));

        assert_eq!(cart.total(), 29.5);
    }

    #[test]
    fn checkout_request_carries_every_line() {
        let mut cart = Cart::default();
        cart.add(&recipe("r1", 8.0));
        cart.set_quantity("r1", 2);
        cart.add(&recipe("r2", 5.5));

        let request = cart.to_request();
        assert_eq!(request.lines.len(), 2);
        assert_eq!(request.lines[0].recipe_id, "r1");
        assert_eq!(request.lines[0].quantity, 2);
        assert_eq!(request.lines[1].quantity, 1);
    }

    #[test]
    fn clearing_empties_the_cart() {
        let mut cart = Cart::default();
        cart.add(&recipe("r1", 8.0));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
