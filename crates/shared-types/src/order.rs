use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of an order as reported by the upstream service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Delivering,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "En attente",
            OrderStatus::Preparing => "En préparation",
            OrderStatus::Delivering => "En livraison",
            OrderStatus::Delivered => "Livrée",
            OrderStatus::Cancelled => "Annulée",
        }
    }
}

/// One recipe line inside an order. Name and unit price are denormalized at
/// order time so history stays stable when recipes change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub recipe_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl OrderLine {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// An order placed by a customer. Opaque passthrough record — fetched and
/// mutated through the service layer, owned by the upstream service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub client_email: String,
    pub lines: Vec<OrderLine>,
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}
