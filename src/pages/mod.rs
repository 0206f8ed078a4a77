//! Pages
//!
//! One module per navigable page.

mod about;
mod home;
mod posts;

pub use about::AboutPage;
pub use home::HomePage;
pub use posts::PostsPage;
