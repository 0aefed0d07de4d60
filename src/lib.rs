//! Fetch a recipe list from a remote API and render it as a card grid page.
//!
//! The [`App`] component owns the list. Mounting it starts a single fetch
//! through an injected [`RecipeFetcher`]; rendering is a pure projection of
//! whatever list the app holds at that moment.
//!
//! ```no_run
//! use recipe_grid::{render_page, AppConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), recipe_grid::Error> {
//! let html = render_page(&AppConfig::default()).await?;
//! println!("{}", html);
//! # Ok(())
//! # }
//! ```

pub mod components;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fetchers;
pub mod model;

use std::sync::Arc;

pub use components::{App, Card, Footer, LoadStatus, NavBar};
pub use config::{ApiConfig, AppConfig};
pub use diagnostics::{DiagnosticSink, LogSink};
pub use error::{Error, LoadError};
pub use fetchers::{RecipeFetcher, RequestFetcher};
pub use model::{Recipe, RecipesResponse};

/// Fetch recipes from the configured endpoint and render the full page
///
/// A failed fetch is logged and the page is rendered without cards; only
/// building the HTTP client can fail here.
pub async fn render_page(config: &AppConfig) -> Result<String, Error> {
    let fetcher = RequestFetcher::from_config(&config.api)?;
    Ok(render_page_with(config, Arc::new(fetcher)).await)
}

/// Same as [`render_page`] with a caller-supplied fetcher
pub async fn render_page_with(
    config: &AppConfig,
    fetcher: Arc<dyn RecipeFetcher>,
) -> String {
    let mut app = App::new(config.api.detail_base_url.clone());
    app.mount(fetcher);
    app.wait_for_load().await;
    app.render_document().into_string()
}
