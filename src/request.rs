//! Endpoint descriptions and URL construction.

use crate::config::Config;
use crate::error::{GiphyError, Result};
use url::Url;

/// One Giphy API call, without transport concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `/gifs/search`
    Search {
        /// Search term.
        query: String,
    },
    /// `/gifs/{id}`
    Gif {
        /// Giphy id.
        id: String,
    },
    /// `/gifs/random`
    Random {
        /// Optional tag narrowing the random pick.
        tag: Option<String>,
    },
    /// `/gifs/translate`
    Translate {
        /// Phrase to translate into a GIF.
        phrase: String,
    },
    /// `/gifs/trending`
    Trending,
}

impl Endpoint {
    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::Gif { .. } => "gif",
            Self::Random { .. } => "random",
            Self::Translate { .. } => "translate",
            Self::Trending => "trending",
        }
    }

    /// Path segments below the configured base path.
    fn segments(&self) -> Vec<&str> {
        match self {
            Self::Search { .. } => vec!["gifs", "search"],
            Self::Gif { id } => vec!["gifs", id.as_str()],
            Self::Random { .. } => vec!["gifs", "random"],
            Self::Translate { .. } => vec!["gifs", "translate"],
            Self::Trending => vec!["gifs", "trending"],
        }
    }

    /// Query parameters in wire order. `api_key` is always last.
    pub fn query(&self, config: &Config) -> Vec<(&'static str, String)> {
        let limit = config.limit.to_string();
        let mut params = match self {
            Self::Search { query } => vec![
                ("q", query.clone()),
                ("limit", limit),
                ("rating", config.rating.clone()),
            ],
            Self::Gif { .. } => Vec::new(),
            Self::Random { tag } => {
                let mut p = Vec::with_capacity(3);
                if let Some(tag) = tag {
                    p.push(("tag", tag.clone()));
                }
                p.push(("rating", config.rating.clone()));
                p
            }
            Self::Translate { phrase } => vec![("s", phrase.clone())],
            Self::Trending => vec![("limit", limit)],
        };
        params.push(("api_key", config.api_key.clone()));
        params
    }

    /// Composes the full request URL.
    pub fn url(&self, config: &Config) -> Result<Url> {
        let mut url = Url::parse(&config.base_url())
            .map_err(|e| GiphyError::Config(format!("invalid base URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| GiphyError::Config("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(self.segments());

        url.query_pairs_mut().extend_pairs(self.query(config));
        Ok(url)
    }
}

/// Renders a URL for logging with the API key masked.
pub(crate) fn redact(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
