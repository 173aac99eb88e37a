// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form;
pub mod form_select;
pub mod input;
pub mod modal;
pub mod page_header;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod avatar;
pub mod dropdown_menu;
pub mod toast;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dropdown_menu::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use modal::*;
pub use page_header::*;
pub use skeleton::*;
pub use textarea::*;
pub use toast::*;
