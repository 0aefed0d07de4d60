//! Render the page from an in-memory fetcher
//!
//! Shows how to plug a custom `RecipeFetcher` into the app, for example to
//! serve recipes from a fixture instead of the network.

use async_trait::async_trait;
use recipe_grid::{
    render_page_with, AppConfig, LoadError, Recipe, RecipeFetcher, RecipesResponse,
};
use std::sync::Arc;

struct FixtureFetcher;

#[async_trait]
impl RecipeFetcher for FixtureFetcher {
    async fn fetch(&self) -> Result<RecipesResponse, LoadError> {
        Ok(RecipesResponse::new(vec![
            Recipe {
                id: 1,
                name: "Classic Margherita Pizza".to_string(),
                image: "https://cdn.dummyjson.com/recipe-images/1.webp".to_string(),
                rating: 4.6,
                tags: vec!["Pizza".to_string(), "Italian".to_string()],
            },
            Recipe {
                id: 2,
                name: "Vegetarian Stir-Fry".to_string(),
                image: "https://cdn.dummyjson.com/recipe-images/2.webp".to_string(),
                rating: 4.7,
                tags: vec!["Vegetarian".to_string(), "Stir-fry".to_string()],
            },
        ]))
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let page = render_page_with(&AppConfig::default(), Arc::new(FixtureFetcher)).await;
    println!("{}", page);
}
