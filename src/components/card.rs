use crate::model::Recipe;
use maud::{html, Markup, Render};

/// One recipe rendered as a card
///
/// Pure projection of the recipe: every identifier and the detail link are
/// derived from `recipe.id`.
pub struct Card<'a> {
    recipe: &'a Recipe,
    detail_base_url: &'a str,
}

impl<'a> Card<'a> {
    pub fn new(recipe: &'a Recipe, detail_base_url: &'a str) -> Self {
        Self {
            recipe,
            detail_base_url,
        }
    }

    /// Detail page URL: the base with the id appended verbatim
    pub fn detail_url(&self) -> String {
        format!("{}{}", self.detail_base_url, self.recipe.id)
    }

    fn test_id(&self, kind: &str) -> String {
        format!("{}-recipe-{}", kind, self.recipe.id)
    }
}

/// Shortest decimal form of a rating: `4.5` stays `4.5`, `5.0` becomes `5`
pub fn format_rating(rating: f64) -> String {
    rating.to_string()
}

impl Render for Card<'_> {
    fn render(&self) -> Markup {
        let recipe = self.recipe;
        html! {
            div class="col" data-testid=(self.test_id("card")) {
                div class="card h-100 shadow-sm" {
                    img class="card-img-top"
                        data-testid=(self.test_id("img"))
                        src=(recipe.image)
                        alt=(recipe.name);
                    div class="card-body" {
                        h5 class="card-title" data-testid=(self.test_id("title")) { (recipe.name) }
                        p class="card-text" {
                            "Rating: "
                            span data-testid=(self.test_id("rating")) { (format_rating(recipe.rating)) }
                        }
                        ul class="list-inline" data-testid=(self.test_id("tags")) {
                            @for tag in &recipe.tags {
                                li class="list-inline-item badge text-bg-secondary" { (tag) }
                            }
                        }
                        a class="btn btn-primary"
                            data-testid=(self.test_id("link"))
                            href=(self.detail_url()) { "View Recipe" }
                    }
                }
            }
        }
    }
}
