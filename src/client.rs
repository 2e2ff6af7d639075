//! HTTP client for the Giphy API.

use crate::config::Config;
use crate::error::{sanitize_error_message, GiphyError, Result};
use crate::request::{redact, Endpoint};
use crate::source::GifSource;
use crate::types::{GifResult, RandomResult, SearchResult, TranslateResult, TrendingResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

/// Builder for [`Client`].
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    config: Config,
    base_url: Option<String>,
}

impl ClientBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Overrides scheme, host and base path, e.g. `http://127.0.0.1:8080/v1`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        let config = match self.base_url {
            Some(base) => self.config.with_base_url(&base)?,
            None => self.config,
        };
        Client::new(config)
    }
}

/// Giphy API client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Creates a client from an explicit configuration.
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| GiphyError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Creates a new `ClientBuilder`.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let url = endpoint.url(&self.config)?;
        let start = Instant::now();
        tracing::debug!(endpoint = endpoint.name(), url = %redact(&url), "sending request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GiphyError::from_reqwest(e, self.config.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(
                endpoint = endpoint.name(),
                status = status.as_u16(),
                "request failed"
            );
            return Err(GiphyError::Api {
                status: status.as_u16(),
                message: sanitize_error_message(&text),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GiphyError::from_reqwest(e, self.config.timeout))?;

        tracing::debug!(
            endpoint = endpoint.name(),
            status = status.as_u16(),
            bytes = body.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "response received"
        );

        Ok(serde_json::from_str(&body)?)
    }
}

/// Trims `value` and rejects it when blank.
fn required(name: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(GiphyError::InvalidArgument(format!("missing {name}")));
    }
    Ok(value.to_string())
}

#[async_trait]
impl GifSource for Client {
    async fn search(&self, query: &str) -> Result<SearchResult> {
        let query = required("search query", query)?;
        let result: SearchResult = self.get(&Endpoint::Search { query: query.clone() }).await?;
        if result.is_empty() {
            return Err(GiphyError::EmptyResult(format!(
                "no images found for {query:?}"
            )));
        }
        Ok(result)
    }

    async fn gif(&self, id: &str) -> Result<GifResult> {
        let id = required("Giphy id", id)?;
        self.get(&Endpoint::Gif { id }).await
    }

    async fn random(&self, tag: Option<&str>) -> Result<RandomResult> {
        let tag = tag.map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned);
        let result: RandomResult = self.get(&Endpoint::Random { tag: tag.clone() }).await?;
        if result.original_url().is_none() {
            return Err(GiphyError::EmptyResult(match tag {
                Some(tag) => format!("no random image found for tag {tag:?}"),
                None => "no random image found".into(),
            }));
        }
        Ok(result)
    }

    async fn translate(&self, phrase: &str) -> Result<TranslateResult> {
        let phrase = required("phrase to translate", phrase)?;
        let result: TranslateResult = self
            .get(&Endpoint::Translate {
                phrase: phrase.clone(),
            })
            .await?;
        // Giphy answers a miss with `{"data": []}`, which decodes to a blank record.
        if result.original_url().is_none() {
            return Err(GiphyError::EmptyResult(format!(
                "no image found for {phrase:?}"
            )));
        }
        Ok(result)
    }

    async fn trending(&self) -> Result<TrendingResult> {
        let result: TrendingResult = self.get(&Endpoint::Trending).await?;
        if result.is_empty() {
            return Err(GiphyError::EmptyResult("no trending images found".into()));
        }
        Ok(result)
    }
}
