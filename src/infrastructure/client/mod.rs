use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::errors::{FetchError, UNKNOWN_ERROR_CODE};
use crate::domain::images::{FetchResponse, ImageRequest};
use crate::domain::services::ImageFetcher;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const FETCH_IMAGES_PATH: &str = "api/v1/images/fetch";

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

pub struct ImageFetchClient {
    endpoint: Url,
    http: Client,
}

impl ImageFetchClient {
    pub fn new(base_url: Url) -> Result<Self> {
        let mut normalized = base_url;
        if !normalized.path().ends_with('/') {
            normalized.set_path(&format!("{}/", normalized.path().trim_end_matches('/')));
        }

        let endpoint = normalized
            .join(FETCH_IMAGES_PATH)
            .with_context(|| format!("invalid API path: {FETCH_IMAGES_PATH}"))?;

        let http = Client::builder()
            .user_agent(concat!("imagefetch/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to configure HTTP client")?;

        Ok(Self { endpoint, http })
    }

    pub fn from_base_url(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).with_context(|| format!("invalid API url: {base_url}"))?;
        Self::new(url)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn response_error(&self, response: reqwest::Response) -> FetchError {
        let status = response.status();
        let bytes = response.bytes().await.unwrap_or_default();

        match serde_json::from_slice::<ErrorBody>(&bytes) {
            Ok(body) => FetchError::Http {
                status: status.as_u16(),
                code: body.error.unwrap_or_else(|| UNKNOWN_ERROR_CODE.to_string()),
                message: body
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Failed to fetch images".to_string()),
            },
            Err(_) => FetchError::Http {
                status: status.as_u16(),
                code: UNKNOWN_ERROR_CODE.to_string(),
                message: format!("HTTP {}: {}", status.as_u16(), reason(status)),
            },
        }
    }
}

fn reason(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

#[async_trait]
impl ImageFetcher for ImageFetchClient {
    #[tracing::instrument(skip(self, request), fields(endpoint = %self.endpoint, item = %request.item_name))]
    async fn fetch_images(&self, request: &ImageRequest) -> Result<FetchResponse, FetchError> {
        let started = Instant::now();
        debug!(?request, "sending image fetch request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "failed to connect to backend");
                FetchError::Connection {
                    endpoint: self.endpoint.to_string(),
                    detail: err.to_string(),
                }
            })?;

        let status = response.status();
        let duration_ms = started.elapsed().as_millis() as u64;

        if !status.is_success() {
            let err = self.response_error(response).await;
            warn!(
                status = status.as_u16(),
                code = err.code(),
                error = %err,
                duration_ms,
                "image fetch request failed"
            );
            return Err(err);
        }

        let body = response
            .json::<FetchResponse>()
            .await
            .map_err(|err| FetchError::Decode {
                status: status.as_u16(),
                detail: err.to_string(),
            })?;

        info!(
            status = status.as_u16(),
            image_count = body.images.len(),
            total_loading_time_ms = body.total_loading_time_ms,
            duration_ms,
            "image fetch request succeeded"
        );

        Ok(body)
    }
}
