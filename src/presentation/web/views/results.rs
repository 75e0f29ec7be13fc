use serde::Serialize;

use crate::domain::formatting::{format_file_size, format_loading_time, format_resolution};
use crate::domain::images::{FetchResponse, ImageResult};

/// Inline SVG shown when a thumbnail fails to load.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg%20xmlns=%22http://www.w3.org/2000/svg%22%20width=%22300%22%20height=%22250%22%3E%3Crect%20fill=%22%23f1f5f9%22%20width=%22300%22%20height=%22250%22/%3E%3Ctext%20fill=%22%2394a3b8%22%20font-family=%22sans-serif%22%20font-size=%2218%22%20x=%2250%25%22%20y=%2250%25%22%20text-anchor=%22middle%22%20dominant-baseline=%22middle%22%3EImage%20not%20available%3C/text%3E%3C/svg%3E";

/// One rendered result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageCardView {
    /// 1-based position, as shown to the user.
    pub number: usize,
    pub url: String,
    pub alt: String,
    pub aria_label: String,
    pub loading_time: String,
    pub resolution: String,
    pub file_size: String,
    pub source_label: String,
    pub source_class: String,
}

impl ImageCardView {
    pub fn from_domain(index: usize, image: &ImageResult) -> Self {
        let number = index + 1;
        let source_class = match image.source.badge_class() {
            Some(modifier) => format!("source-badge {modifier}"),
            None => "source-badge".to_string(),
        };

        Self {
            number,
            url: image.url.clone(),
            alt: format!("Result image {number}"),
            aria_label: format!("Image {number}"),
            loading_time: format_loading_time(image.loading_time_ms),
            resolution: format_resolution(image.resolution.as_deref()),
            file_size: format_file_size(image.file_size_bytes),
            source_label: image.source.display_label().to_string(),
            source_class,
        }
    }
}

/// The results section: total time plus cards in response order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub total_loading_time_ms: u64,
    pub cards: Vec<ImageCardView>,
}

impl ResultsView {
    pub fn from_response(response: &FetchResponse) -> Self {
        Self {
            total_loading_time_ms: response.total_loading_time_ms,
            cards: response
                .images
                .iter()
                .enumerate()
                .map(|(index, image)| ImageCardView::from_domain(index, image))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&ImageCardView> {
        self.cards.get(index)
    }

    pub fn placeholder_image(&self) -> &'static str {
        PLACEHOLDER_IMAGE
    }
}
