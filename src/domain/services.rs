use async_trait::async_trait;

use crate::domain::errors::{ClipboardError, FetchError};
use crate::domain::images::{FetchResponse, ImageRequest};

/// The one backend call the form makes.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch_images(&self, request: &ImageRequest) -> Result<FetchResponse, FetchError>;
}

/// Environment-provided text clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
