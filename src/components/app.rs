use crate::components::{Card, Footer, NavBar};
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::error::LoadError;
use crate::fetchers::RecipeFetcher;
use crate::model::Recipe;
use log::{debug, error, info, warn};
use maud::{html, Markup, DOCTYPE};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub const BANNER_SRC: &str =
    "https://www.instacart.com/company/wp-content/uploads/2022/11/cooking-statistics-hero.jpg";
pub const BANNER_ALT: &str = "banner";

/// Where the one-shot load stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Not mounted yet
    Idle,
    /// Fetch in flight
    Loading,
    /// List replaced by a response
    Loaded,
    /// Fetch failed; list left as it was
    Errored,
}

#[derive(Debug)]
struct AppState {
    status: LoadStatus,
    recipes: Arc<[Recipe]>,
    mounted: bool,
}

/// Root component: owns the recipe list and the single mount-time fetch
pub struct App {
    state: Arc<Mutex<AppState>>,
    diagnostics: Arc<dyn DiagnosticSink>,
    detail_base_url: String,
    task: Option<JoinHandle<()>>,
}

impl App {
    /// A fresh, unmounted app with an empty list, reporting failures to the log
    pub fn new(detail_base_url: impl Into<String>) -> Self {
        Self::with_diagnostics(detail_base_url, Arc::new(LogSink))
    }

    pub fn with_diagnostics(
        detail_base_url: impl Into<String>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState {
                status: LoadStatus::Idle,
                recipes: Arc::from(Vec::new()),
                mounted: false,
            })),
            diagnostics,
            detail_base_url: detail_base_url.into(),
            task: None,
        }
    }

    /// Mount the app and start the recipe load on the current Tokio runtime
    ///
    /// Moves Idle to Loading before returning. Only the first call does
    /// anything; the load runs at most once per app. Outside a Tokio runtime
    /// nothing is started and the app stays Idle.
    pub fn mount(&mut self, fetcher: Arc<dyn RecipeFetcher>) {
        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(err) => {
                error!("Cannot mount app without a Tokio runtime: {}", err);
                return;
            }
        };

        {
            let mut state = lock(&self.state);
            if state.status != LoadStatus::Idle {
                debug!("App already mounted, ignoring mount");
                return;
            }
            state.status = LoadStatus::Loading;
            state.mounted = true;
        }

        let state = Arc::clone(&self.state);
        let diagnostics = Arc::clone(&self.diagnostics);
        self.task = Some(runtime.spawn(async move {
            let outcome = load_recipes(fetcher.as_ref()).await;
            if let Err(err) = &outcome {
                diagnostics.report(err);
            }

            let mut state = lock(&state);
            if !state.mounted {
                debug!("Discarding recipe load that resolved after unmount");
                return;
            }
            match outcome {
                Ok(recipes) => {
                    info!("Loaded {} recipes", recipes.len());
                    state.recipes = Arc::from(recipes);
                    state.status = LoadStatus::Loaded;
                }
                Err(_) => state.status = LoadStatus::Errored,
            }
        }));
    }

    /// Wait until the mount-time load has settled. Returns at once if the app
    /// was never mounted or the load already finished.
    pub async fn wait_for_load(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                error!("Recipe load task failed: {}", err);
            }
        }
    }

    /// Tear down: a load still in flight will not touch the state afterwards.
    /// The request itself is left to finish.
    pub fn unmount(&mut self) {
        lock(&self.state).mounted = false;
    }

    pub fn status(&self) -> LoadStatus {
        lock(&self.state).status
    }

    /// Snapshot of the current list
    pub fn recipes(&self) -> Arc<[Recipe]> {
        Arc::clone(&lock(&self.state).recipes)
    }

    /// Banner, nav bar, one card per recipe, footer
    pub fn render(&self) -> Markup {
        let recipes = self.recipes();
        html! {
            div class="app" {
                img class="img-fluid w-100" data-testid="image-banner" src=(BANNER_SRC) alt=(BANNER_ALT);
                (NavBar)
                main class="container my-4" {
                    div class="row row-cols-1 row-cols-md-3 g-4" data-testid="recipe-list" {
                        @for recipe in recipes.iter() {
                            (Card::new(recipe, &self.detail_base_url))
                        }
                    }
                }
                (Footer)
            }
        }
    }

    /// [`render`](Self::render) wrapped in a complete HTML document
    pub fn render_document(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (crate::components::navbar::TITLE) }
                }
                body {
                    (self.render())
                }
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Fetch once and turn the envelope into the list to show
///
/// An absent `recipes` field yields an empty list.
pub async fn load_recipes(fetcher: &dyn RecipeFetcher) -> Result<Vec<Recipe>, LoadError> {
    let response = fetcher.fetch().await?;
    let recipes = response.recipes.unwrap_or_else(|| {
        warn!("Recipes response has no `recipes` field, showing an empty list");
        Vec::new()
    });

    let mut seen = HashSet::with_capacity(recipes.len());
    for recipe in &recipes {
        if !seen.insert(recipe.id) {
            warn!("Duplicate recipe id {} in response", recipe.id);
        }
    }

    Ok(recipes)
}

// The state is only ever written whole, so a poisoned lock is still usable.
fn lock(state: &Mutex<AppState>) -> MutexGuard<'_, AppState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
