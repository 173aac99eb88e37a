use serde::{Deserialize, Serialize};

/// A customer record managed from the back-office. CRUD passthrough — the
/// upstream service owns the schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
}
