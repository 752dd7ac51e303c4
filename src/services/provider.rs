// src/services/provider.rs

//! Search provider abstraction and its HTTP implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{ProviderConfig, RawSearchHit, parse_response};
use crate::utils::http;

/// Remote search capability.
///
/// Implementations return hits already validated through
/// [`RawSearchHit::from_value`]; any failure is reported as an error and
/// collapses to a single failure state in the session.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<RawSearchHit>>;
}

/// Request body sent to the search endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: &'a str,
    num_results: usize,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    include_domains: &'a [String],
}

/// Provider backed by a JSON search API over HTTP.
pub struct HttpSearchProvider {
    config: ProviderConfig,
    client: Client,
    api_key: String,
}

impl HttpSearchProvider {
    /// Create a provider, reading the API key from the configured variable.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            AppError::config(format!(
                "Missing API key: set the {} environment variable",
                config.api_key_env
            ))
        })?;
        Self::with_api_key(config, api_key)
    }

    /// Create a provider with an explicit API key.
    pub fn with_api_key(config: ProviderConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = http::create_async_client(&config)?;
        Ok(Self {
            config,
            client,
            api_key: api_key.into(),
        })
    }

    fn request_body<'a>(&'a self, query: &'a str) -> SearchRequest<'a> {
        SearchRequest {
            query,
            num_results: self.config.num_results,
            include_domains: &self.config.include_domains,
        }
    }
}

#[async_trait]
impl SearchProvider for HttpSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<RawSearchHit>> {
        log::debug!("POST {} for '{}'", self.config.endpoint, query);

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("x-api-key", &self.api_key)
            .json(&self.request_body(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::provider(format!(
                "{} returned status {}",
                self.config.endpoint, status
            )));
        }

        let body = response.bytes().await?;
        parse_response(&body)
    }
}
