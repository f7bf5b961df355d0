//! Image Backend Traits
//!
//! Trait definitions for text-to-image backends. This abstraction allows the
//! Studio to work with different image providers without changing core logic.
//!
//! # Design Philosophy
//!
//! The `ImageBackend` trait provides a common interface for:
//! - Sending a prompt and receiving image bytes
//! - Health checking the backend
//!
//! Implementations handle provider-specific details (API formats, auth, etc.)
//! Raw backend calls CAN fail; the never-fails contract belongs to the
//! orchestrator operation wrapping them.

use async_trait::async_trait;

/// Configuration for an image generation request
#[derive(Clone, Debug, Default)]
pub struct ImageRequest {
    /// The full prompt to send (style suffix already applied)
    pub prompt: String,
    /// Vendor-side style identifier, where the backend supports one
    pub vendor_style: Option<String>,
    /// Negative prompt hint, where the backend supports one
    pub negative_prompt: Option<String>,
}

impl ImageRequest {
    /// Create a new request with a prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Set the vendor style hint
    #[must_use]
    pub fn with_vendor_style(mut self, style: impl Into<String>) -> Self {
        self.vendor_style = Some(style.into());
        self
    }

    /// Set the negative prompt hint
    #[must_use]
    pub fn with_negative_prompt(mut self, negative: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative.into());
        self
    }
}

/// Response from an image generation request
#[derive(Clone, Debug)]
pub struct ImageResponse {
    /// The raw image bytes
    pub bytes: Vec<u8>,
    /// Content type reported by the backend (e.g. "image/png")
    pub content_type: String,
    /// Generation time in milliseconds
    pub duration_ms: u64,
}

/// Image backend trait
///
/// Implement this trait to add support for different image providers.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    /// Get the backend name (e.g., "ClipDrop")
    fn name(&self) -> &str;

    /// Check if the backend is usable
    async fn health_check(&self) -> bool;

    /// Send a request and wait for the generated image bytes
    async fn generate(&self, request: &ImageRequest) -> anyhow::Result<ImageResponse>;
}
