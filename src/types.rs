//! Response types for the Giphy API.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Envelope shared by every endpoint: `{"data": ..., "pagination": ..., "meta": ...}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response<T> {
    /// Endpoint payload (a single record or a list of records).
    pub data: T,
    /// Paging information, only sent by list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Request status metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Result of `/gifs/search`.
pub type SearchResult = Response<Vec<GifRecord>>;
/// Result of `/gifs/trending`.
pub type TrendingResult = Response<Vec<GifRecord>>;
/// Result of `/gifs/{id}`.
pub type GifResult = Response<GifRecord>;
/// Result of `/gifs/random`.
pub type RandomResult = Response<RandomRecord>;
/// Result of `/gifs/translate`.
pub type TranslateResult = Response<GifRecord>;

/// Paging information for list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total matches available server-side.
    #[serde(default)]
    pub total_count: u64,
    /// Records in this page.
    #[serde(default)]
    pub count: u64,
    /// Offset of this page.
    #[serde(default)]
    pub offset: u64,
}

/// Status metadata attached to every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// HTTP-like status code.
    #[serde(default)]
    pub status: u16,
    /// Human readable status.
    #[serde(default)]
    pub msg: String,
    /// Server-side request id.
    #[serde(default)]
    pub response_id: String,
}

/// A single GIF as returned by search, trending, fetch-by-id and translate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GifRecord {
    /// Media type, normally `gif`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Giphy id.
    pub id: String,
    /// URL-friendly name.
    pub slug: String,
    /// Giphy page for this GIF.
    pub url: String,
    /// Short link.
    pub bitly_url: String,
    /// Embeddable player URL.
    pub embed_url: String,
    /// Title shown on the Giphy page.
    pub title: String,
    /// Uploader, empty for anonymous uploads.
    pub username: String,
    /// Content rating.
    pub rating: String,
    /// Page the GIF was sourced from.
    pub source: String,
    /// Top-level domain of the source.
    pub source_tld: String,
    /// Post URL of the source.
    pub source_post_url: String,
    /// Upload timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub import_datetime: String,
    /// Last time the GIF trended.
    pub trending_datetime: String,
    /// Available renditions.
    pub images: Images,
}

impl GifRecord {
    /// URL of the original rendition, if present.
    pub fn original_url(&self) -> Option<&str> {
        self.images.original.as_ref().and_then(Rendition::url)
    }
}

/// Named renditions of a GIF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    /// Unmodified upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<Rendition>,
    /// Original downscaled to under 2MB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downsized: Option<Rendition>,
    /// Original downscaled to under 8MB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downsized_large: Option<Rendition>,
    /// Height fixed at 200px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_height: Option<Rendition>,
    /// Height fixed at 100px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_height_small: Option<Rendition>,
    /// Width fixed at 200px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_width: Option<Rendition>,
    /// Width fixed at 100px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_width_small: Option<Rendition>,
    /// Short preview clip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_gif: Option<Rendition>,
}

impl Images {
    /// Looks up a rendition by its API name.
    pub fn get(&self, name: &str) -> Option<&Rendition> {
        match name {
            "original" => self.original.as_ref(),
            "downsized" => self.downsized.as_ref(),
            "downsized_large" => self.downsized_large.as_ref(),
            "fixed_height" => self.fixed_height.as_ref(),
            "fixed_height_small" => self.fixed_height_small.as_ref(),
            "fixed_width" => self.fixed_width.as_ref(),
            "fixed_width_small" => self.fixed_width_small.as_ref(),
            "preview_gif" => self.preview_gif.as_ref(),
            _ => None,
        }
    }
}

/// One encoding of a GIF. Giphy sends dimensions as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rendition {
    /// GIF URL.
    #[serde(rename = "url", skip_serializing_if = "String::is_empty")]
    pub gif_url: String,
    /// Width in pixels.
    #[serde(deserialize_with = "number_or_string")]
    pub width: Option<u32>,
    /// Height in pixels.
    #[serde(deserialize_with = "number_or_string")]
    pub height: Option<u32>,
    /// File size in bytes.
    #[serde(deserialize_with = "number_or_string")]
    pub size: Option<u64>,
    /// Frame count.
    #[serde(deserialize_with = "number_or_string")]
    pub frames: Option<u32>,
    /// MP4 variant, when available.
    pub mp4: Option<String>,
    /// WebP variant, when available.
    pub webp: Option<String>,
}

impl Rendition {
    /// GIF URL, or `None` when the API left it blank.
    pub fn url(&self) -> Option<&str> {
        Some(self.gif_url.as_str()).filter(|u| !u.is_empty())
    }
}

/// The flattened record returned by `/gifs/random`.
///
/// Newer API versions return a full [`GifRecord`] from this endpoint instead;
/// `images` picks that shape up so [`RandomRecord::original_url`] works for both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomRecord {
    /// Media type, normally `gif`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Giphy id.
    pub id: String,
    /// Giphy page for this GIF.
    pub url: String,
    /// Original rendition URL.
    pub image_original_url: String,
    /// Default rendition URL.
    pub image_url: String,
    /// MP4 rendition URL.
    pub image_mp4_url: String,
    /// Frame count of the original.
    #[serde(deserialize_with = "number_or_string")]
    pub image_frames: Option<u32>,
    /// Width of the original in pixels.
    #[serde(deserialize_with = "number_or_string")]
    pub image_width: Option<u32>,
    /// Height of the original in pixels.
    #[serde(deserialize_with = "number_or_string")]
    pub image_height: Option<u32>,
    /// Downsampled 200px-high rendition.
    pub fixed_height_downsampled_url: String,
    /// Downsampled 200px-wide rendition.
    pub fixed_width_downsampled_url: String,
    /// 100px-high rendition.
    pub fixed_height_small_url: String,
    /// 100px-wide rendition.
    pub fixed_width_small_url: String,
    /// Uploader.
    pub username: String,
    /// Caption, usually empty.
    pub caption: String,
    /// Content rating.
    pub rating: String,
    /// Nested renditions, when the API sends them.
    pub images: Option<Images>,
}

impl RandomRecord {
    /// URL of the original image, from the flat field or nested renditions.
    pub fn original_url(&self) -> Option<&str> {
        Some(self.image_original_url.as_str())
            .filter(|u| !u.is_empty())
            .or_else(|| {
                self.images
                    .as_ref()
                    .and_then(|i| i.original.as_ref())
                    .and_then(Rendition::url)
            })
    }
}

/// Primary media URLs of a result, in response order.
pub trait MediaUrls {
    /// Returns one URL per record that has an original rendition.
    fn media_urls(&self) -> Vec<&str>;
}

impl MediaUrls for GifRecord {
    fn media_urls(&self) -> Vec<&str> {
        self.original_url().into_iter().collect()
    }
}

impl MediaUrls for RandomRecord {
    fn media_urls(&self) -> Vec<&str> {
        self.original_url().into_iter().collect()
    }
}

impl<T: MediaUrls> MediaUrls for Vec<T> {
    fn media_urls(&self) -> Vec<&str> {
        self.iter().flat_map(|r| r.media_urls()).collect()
    }
}

impl<T: MediaUrls> MediaUrls for Response<T> {
    fn media_urls(&self) -> Vec<&str> {
        self.data.media_urls()
    }
}

impl Response<GifRecord> {
    /// Original image URL of the single record.
    pub fn original_url(&self) -> Option<&str> {
        self.data.original_url()
    }
}

impl Response<RandomRecord> {
    /// Original image URL of the random record.
    pub fn original_url(&self) -> Option<&str> {
        self.data.original_url()
    }
}

impl Response<Vec<GifRecord>> {
    /// Number of records in this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the page holds no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Accepts `"480"`, `480`, `""` or `null`.
fn number_or_string<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: std::fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<N> {
        Number(N),
        Text(String),
    }

    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}
