mod app;
mod card;
pub mod footer;
pub mod navbar;

pub use app::{load_recipes, App, LoadStatus, BANNER_ALT, BANNER_SRC};
pub use card::{format_rating, Card};
pub use footer::Footer;
pub use navbar::NavBar;
