mod request;

pub use request::RequestFetcher;

use crate::error::LoadError;
use crate::model::RecipesResponse;
use async_trait::async_trait;

/// Capability to read the recipe list from somewhere
///
/// The app only ever talks to this trait, so tests and embedders can hand
/// it a stub instead of a live HTTP client.
#[async_trait]
pub trait RecipeFetcher: Send + Sync {
    /// Fetch the recipes envelope. Takes no parameters: the source is fixed
    /// when the fetcher is built.
    async fn fetch(&self) -> Result<RecipesResponse, LoadError>;
}
