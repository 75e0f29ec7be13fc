use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Payload for a single image fetch. Built fresh from the form on every
/// submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub item_name: String,
    pub option_name: Option<String>,
    pub image_url: Option<String>,
    pub sales_url: Option<String>,
    pub sales_channel: Option<SalesChannel>,
}

/// Upper-cased sales channel code, e.g. `NAVER`.
///
/// The backend owns the list of supported channels, so the client carries the
/// code through without interpreting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesChannel(String);

impl SalesChannel {
    /// Normalize a raw select value. Blank input means "no channel".
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_ascii_uppercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SalesChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the backend obtained an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageSource {
    Direct,
    SalesUrl,
    ChannelSearch,
    /// A source this client does not know about, kept verbatim.
    Other(String),
}

impl ImageSource {
    pub fn as_str(&self) -> &str {
        match self {
            ImageSource::Direct => "DIRECT",
            ImageSource::SalesUrl => "SALES_URL",
            ImageSource::ChannelSearch => "CHANNEL_SEARCH",
            ImageSource::Other(raw) => raw,
        }
    }

    pub fn display_label(&self) -> &str {
        match self {
            ImageSource::Direct => "Direct URL",
            ImageSource::SalesUrl => "Sales Page",
            ImageSource::ChannelSearch => "Channel Search",
            ImageSource::Other(raw) => raw,
        }
    }

    /// CSS modifier for the source badge; unknown sources get the plain badge.
    pub fn badge_class(&self) -> Option<&'static str> {
        match self {
            ImageSource::Direct => Some("source-direct"),
            ImageSource::SalesUrl => Some("source-sales-url"),
            ImageSource::ChannelSearch => Some("source-channel-search"),
            ImageSource::Other(_) => None,
        }
    }
}

impl From<String> for ImageSource {
    fn from(value: String) -> Self {
        match value.as_str() {
            "DIRECT" => ImageSource::Direct,
            "SALES_URL" => ImageSource::SalesUrl,
            "CHANNEL_SEARCH" => ImageSource::ChannelSearch,
            _ => ImageSource::Other(value),
        }
    }
}

impl From<ImageSource> for String {
    fn from(source: ImageSource) -> Self {
        match source {
            ImageSource::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub url: String,
    pub source: ImageSource,
    #[serde(default, deserialize_with = "null_as_default")]
    pub loading_time_ms: u64,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub file_size_bytes: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_loading_time_ms: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ImageResult>,
}

/// Treats an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
