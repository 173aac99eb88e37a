#[cfg(feature = "server")]
pub(crate) mod session;

mod auth;
pub use auth::*;

mod recipe;
pub use recipe::*;

mod client;
pub use client::*;

mod order;
pub use order::*;
