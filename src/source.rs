//! The operations a GIF backend offers.

use crate::error::Result;
use crate::types::{GifResult, RandomResult, SearchResult, TranslateResult, TrendingResult};
use async_trait::async_trait;

/// Trait for anything that can answer the five Giphy operations.
///
/// [`Client`](crate::Client) is the HTTP implementation; the dispatcher only
/// depends on this trait.
#[async_trait]
pub trait GifSource: Send + Sync {
    /// Searches for GIFs matching `query`. Fails with `EmptyResult` on no matches.
    async fn search(&self, query: &str) -> Result<SearchResult>;

    /// Fetches a single GIF by id.
    async fn gif(&self, id: &str) -> Result<GifResult>;

    /// Returns a random GIF, optionally limited to `tag`.
    async fn random(&self, tag: Option<&str>) -> Result<RandomResult>;

    /// Translates a phrase into a GIF.
    async fn translate(&self, phrase: &str) -> Result<TranslateResult>;

    /// Returns the currently trending GIFs. Fails with `EmptyResult` on an empty page.
    async fn trending(&self) -> Result<TrendingResult>;
}
