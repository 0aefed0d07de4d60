#![allow(dead_code)]

use async_trait::async_trait;
use recipe_grid::{DiagnosticSink, LoadError, Recipe, RecipeFetcher, RecipesResponse};
use scraper::{ElementRef, Html, Selector};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

/// Find the element carrying `data-testid="<id>"`
pub fn by_test_id<'a>(doc: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(&format!(r#"[data-testid="{}"]"#, id)).unwrap();
    doc.select(&selector).next()
}

/// All test ids starting with `prefix`, in document order
pub fn test_ids_with_prefix(doc: &Html, prefix: &str) -> Vec<String> {
    let selector = Selector::parse(&format!(r#"[data-testid^="{}"]"#, prefix)).unwrap();
    doc.select(&selector)
        .filter_map(|el| el.value().attr("data-testid"))
        .map(str::to_string)
        .collect()
}

pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

pub fn recipe(id: u64, name: &str, image: &str, rating: f64, tags: &[&str]) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        image: image.to_string(),
        rating,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The three recipes the browser tests mock the API with
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        recipe(1, "Recipe 1", "image1.jpg", 4.5, &["tag1", "tag2"]),
        recipe(2, "Recipe 2", "image2.jpg", 3.5, &["tag3", "tag4"]),
        recipe(3, "Recipe 3", "image3.jpg", 5.0, &["tag5", "tag6"]),
    ]
}

/// Answers every fetch with the same outcome and counts calls
pub struct StubFetcher {
    outcome: Result<RecipesResponse, LoadError>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn ok(recipes: Vec<Recipe>) -> Self {
        Self::with_outcome(Ok(RecipesResponse::new(recipes)))
    }

    pub fn failing(err: LoadError) -> Self {
        Self::with_outcome(Err(err))
    }

    pub fn with_outcome(outcome: Result<RecipesResponse, LoadError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeFetcher for StubFetcher {
    async fn fetch(&self) -> Result<RecipesResponse, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Holds the fetch open until the test releases it
pub struct GatedFetcher {
    gate: Mutex<Option<oneshot::Receiver<Result<RecipesResponse, LoadError>>>>,
}

impl GatedFetcher {
    pub fn new() -> (Self, oneshot::Sender<Result<RecipesResponse, LoadError>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                gate: Mutex::new(Some(rx)),
            },
            tx,
        )
    }
}

#[async_trait]
impl RecipeFetcher for GatedFetcher {
    async fn fetch(&self) -> Result<RecipesResponse, LoadError> {
        let rx = self.gate.lock().unwrap().take().expect("fetched twice");
        rx.await
            .unwrap_or_else(|_| Err(LoadError::NetworkFailure("gate dropped".to_string())))
    }
}

/// Keeps every reported error
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<LoadError>>,
}

impl RecordingSink {
    pub fn reports(&self) -> Vec<LoadError> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, error: &LoadError) {
        self.reports.lock().unwrap().push(error.clone());
    }
}
