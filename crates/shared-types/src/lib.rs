pub mod error;

// Auth / session types
pub mod models;
pub mod requests;

// ExpressFood domain modules
pub mod client;
pub mod order;
pub mod recipe;

pub use error::*;
pub use models::*;
pub use requests::*;

pub use client::*;
pub use order::*;
pub use recipe::*;
