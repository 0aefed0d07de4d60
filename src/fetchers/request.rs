use super::RecipeFetcher;
use crate::config::ApiConfig;
use crate::error::LoadError;
use crate::model::RecipesResponse;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeGrid/0.1)";

/// Fetches recipes over HTTP with a single GET
pub struct RequestFetcher {
    client: Client,
    endpoint: String,
}

impl RequestFetcher {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        Self::new(config.endpoint.clone(), Some(config.timeout()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecipeFetcher for RequestFetcher {
    async fn fetch(&self) -> Result<RecipesResponse, LoadError> {
        debug!("Fetching recipes from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let recipes = serde_json::from_str(&body)?;
        Ok(recipes)
    }
}
