use serde::Deserialize;

/// A recipe as served by the recipes API
///
/// Every field is required; a recipe missing one makes the whole response
/// malformed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub rating: f64,
    pub tags: Vec<String>,
}

/// Body of the recipes endpoint
///
/// `recipes` stays optional here so an absent field can be told apart from
/// an empty list. Paging fields the API adds (`total`, `skip`, `limit`) are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecipesResponse {
    #[serde(default)]
    pub recipes: Option<Vec<Recipe>>,
}

impl RecipesResponse {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Some(recipes),
        }
    }
}
