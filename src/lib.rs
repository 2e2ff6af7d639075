#![warn(missing_docs)]
//! Giphy - a small client for the Giphy GIF API.
//!
//! The crate wraps five read-only endpoints (search, fetch by id, random,
//! translate and trending) behind the [`GifSource`] trait, decodes responses
//! into typed records, and ships a command-line front-end.
//!
//! # Quick Start
//!
//! ```no_run
//! use giphy::{Client, Config, GifSource, MediaUrls};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> giphy::Result<()> {
//!     let client = Client::new(Config::from_env()?)?;
//!     let result = client.search("cats").await?;
//!     for url in result.media_urls() {
//!         println!("{url}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! [`Config::from_env`] reads `GIPHY_API_KEY`, `GIPHY_RATING`, `GIPHY_LIMIT`,
//! `GIPHY_BASE_URL_SCHEME`, `GIPHY_BASE_URL_HOST`, `GIPHY_BASE_PATH`,
//! `GIPHY_USER_AGENT` and `GIPHY_TIMEOUT`. Every variable has a default, so the
//! client works out of the box with Giphy's public beta key.
//!
//! # Features
//!
//! - `cli` (default): the `giphy` binary.

mod client;
mod config;
mod error;
mod request;
mod source;
mod types;

pub mod dispatch;
pub mod opener;

pub use client::{Client, ClientBuilder};
pub use config::Config;
pub use error::{GiphyError, Result};
pub use request::Endpoint;
pub use source::GifSource;
pub use types::{
    GifRecord, GifResult, Images, MediaUrls, Meta, Pagination, RandomRecord, RandomResult,
    Rendition, Response, SearchResult, TranslateResult, TrendingResult,
};

/// Configuration defaults.
pub mod defaults {
    pub use crate::config::{
        DEFAULT_API_KEY, DEFAULT_BASE_PATH, DEFAULT_HOST, DEFAULT_LIMIT, DEFAULT_RATING,
        DEFAULT_SCHEME, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
    };
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{GiphyError, Result};
    pub use crate::opener::{SystemOpener, UrlOpener};
    pub use crate::source::GifSource;
    pub use crate::types::MediaUrls;
    pub use crate::{Client, Config};
}
