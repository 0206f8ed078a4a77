//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod card;
mod footer;
mod navbar;
mod task_manager;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use footer::Footer;
pub use navbar::Navbar;
pub use task_manager::TaskManager;
