use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response, Url};
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::{RecipeError, Result};
use crate::model::{Recipe, SearchResultItem};
use crate::wire::{self, FailureBody, UploadPayload};

/// Remote recipe API as seen by the state operations
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// `GET {API_URL}/{id}`
    async fn get_recipe(&self, id: &str) -> Result<Recipe>;

    /// `GET {API_URL}?search={query}`
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>>;

    /// `POST {API_URL}` with the upload payload; returns the stored recipe
    async fn upload(&self, payload: &UploadPayload) -> Result<Recipe>;
}

pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
    key: Option<String>,
}

impl HttpRecipeApi {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            key: config.key.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>, key: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            key,
        }
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }

    /// `{base_url}/{id}` with `id` escaped as a single path segment
    fn recipe_url(&self, id: &str) -> Result<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| RecipeError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| RecipeError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn read_body(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<FailureBody>(&body)
                .map(|failure| failure.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(RecipeError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn get_recipe(&self, id: &str) -> Result<Recipe> {
        let url = self.recipe_url(id)?;
        debug!("GET {}", url);

        let response = self.with_key(self.client.get(url)).send().await?;
        let body = Self::read_body(response).await?;
        wire::decode_recipe(&body)
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>> {
        debug!("GET {}?search={}", self.base_url, query);

        let request = self.client.get(&self.base_url).query(&[("search", query)]);
        let response = self.with_key(request).send().await?;
        let body = Self::read_body(response).await?;
        wire::decode_search_results(&body)
    }

    async fn upload(&self, payload: &UploadPayload) -> Result<Recipe> {
        debug!("POST {} ({})", self.base_url, payload.title);

        let request = self.client.post(&self.base_url).json(payload);
        let response = self.with_key(request).send().await?;
        let body = Self::read_body(response).await?;
        wire::decode_recipe(&body)
    }
}
