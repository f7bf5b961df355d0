//! ClipDrop Backend Implementation
//!
//! Image backend for the hosted ClipDrop text-to-image API (Stable
//! Diffusion XL).
//!
//! # ClipDrop API
//!
//! A single endpoint: POST `https://clipdrop-api.co/text-to-image/v1` with
//! an `x-api-key` header and a multipart form containing one field,
//! `prompt`. The response body is the raw image bytes. There is no vendor
//! ping endpoint, so the health check reports whether an API key is
//! configured.

use std::time::{Duration, Instant};

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use super::traits::{ImageBackend, ImageRequest, ImageResponse};

/// The hosted ClipDrop text-to-image endpoint
pub const DEFAULT_API_URL: &str = "https://clipdrop-api.co/text-to-image/v1";

/// ClipDrop backend client
#[derive(Clone)]
pub struct ClipDropBackend {
    /// Endpoint URL
    api_url: String,
    /// API key, absent when unconfigured
    api_key: Option<String>,
    /// HTTP client
    http_client: reqwest::Client,
}

impl ClipDropBackend {
    /// Create a new ClipDrop backend
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(
        api_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_url: api_url.into(),
            api_key,
            http_client,
        })
    }

    /// Create from environment variables
    ///
    /// Reads `CLIPDROP_API_KEY` and the optional `CLIPDROP_API_URL`
    /// override. A missing key is not an error here; generation calls will
    /// fail until one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url =
            std::env::var("CLIPDROP_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_key = std::env::var("CLIPDROP_API_KEY").ok();
        Self::new(api_url, api_key, Duration::from_secs(60))
    }

    /// The configured endpoint URL
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl ImageBackend for ClipDropBackend {
    fn name(&self) -> &'static str {
        "ClipDrop"
    }

    async fn health_check(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, request: &ImageRequest) -> anyhow::Result<ImageResponse> {
        let Some(ref api_key) = self.api_key else {
            anyhow::bail!("ClipDrop API key not configured (set CLIPDROP_API_KEY)");
        };

        // The endpoint takes nothing but the prompt; style hints stay
        // advisory on our side.
        if request.vendor_style.is_some() || request.negative_prompt.is_some() {
            debug!(
                vendor_style = ?request.vendor_style,
                negative_prompt = ?request.negative_prompt,
                "ClipDrop accepts only the prompt field; dropping hints"
            );
        }

        let form = reqwest::multipart::Form::new().text("prompt", request.prompt.clone());

        let started = Instant::now();
        let response = self
            .http_client
            .post(&self.api_url)
            .header("x-api-key", api_key)
            .multipart(form)
            .send()
            .await
            .context("ClipDrop request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("ClipDrop returned {status}: {body}");
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();

        let bytes = response
            .bytes()
            .await
            .context("Failed to read ClipDrop response body")?
            .to_vec();

        Ok(ImageResponse {
            bytes,
            content_type,
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }
}
