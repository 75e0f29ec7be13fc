use std::sync::Arc;

use crate::domain::services::{Clipboard, ImageFetcher};
use crate::infrastructure::clipboard::UnavailableClipboard;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn ImageFetcher>,
    pub clipboard: Arc<dyn Clipboard>,
}

impl AppState {
    /// State for the page server, where copying happens in the browser.
    pub fn new(fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self {
            fetcher,
            clipboard: Arc::new(UnavailableClipboard),
        }
    }
}
