use maud::{html, Markup, Render};

pub const TITLE: &str = "My Recipe";

/// Title bar with the search form
///
/// Submitting the form only cancels the browser's default submission.
#[derive(Debug, Default, Clone, Copy)]
pub struct NavBar;

impl Render for NavBar {
    fn render(&self) -> Markup {
        html! {
            nav class="navbar bg-body-tertiary" {
                div class="container-fluid" {
                    span class="navbar-brand mb-0 h1" data-testid="my-recipe" { (TITLE) }
                    form class="d-flex" data-testid="form-search" role="search"
                        onsubmit="event.preventDefault()" {
                        input class="form-control me-2"
                            data-testid="search-input"
                            type="search"
                            name="q"
                            aria-label="Search";
                        button class="btn btn-outline-success" type="submit" { "Search" }
                    }
                }
            }
        }
    }
}
