//! Studio - The Orchestration Core
//!
//! The Studio ties together the image backend, the haiku generator, the
//! style catalog, and the session gallery. It is surface-agnostic: it
//! doesn't know or care whether it's driven by a CLI, a web UI, or a test
//! harness.
//!
//! # Failure Contract
//!
//! [`Studio::generate_image`] is total. Backend errors, timeouts, and media
//! write failures are logged and substituted with a deterministic
//! placeholder reference, so the caller always has something to render.
//! [`Studio::download_image`] and [`Studio::export_haiku`] surface their
//! failures for user-visible reporting.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};

use crate::backend::{ImageBackend, ImageRequest};
use crate::config::{default_media_dir, StudioConfigFile};
use crate::export;
use crate::gallery::{Gallery, GeneratedImage, ImageReference};
use crate::haiku::{now_ms, Emotion, Haiku, HaikuGenerator};
use crate::styles::{StyleCatalog, DEFAULT_STYLE_ID};

/// Studio configuration
#[derive(Clone, Debug)]
pub struct StudioConfig {
    /// Style used when a request names none
    pub default_style: String,
    /// Directory for persisted image bytes
    pub media_dir: PathBuf,
    /// How long to wait for the backend before falling back
    pub generation_timeout: Duration,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            default_style: DEFAULT_STYLE_ID.to_string(),
            media_dir: default_media_dir(),
            generation_timeout: Duration::from_secs(60),
        }
    }
}

impl StudioConfig {
    /// Build a runtime config from a resolved configuration file
    #[must_use]
    pub fn from_file(file: &StudioConfigFile) -> Self {
        Self {
            default_style: file.default_style.clone(),
            media_dir: file.media_dir.clone(),
            generation_timeout: file.timeout,
        }
    }
}

/// The main orchestration struct
///
/// Owns the backend, the haiku generator, the style catalog, the gallery,
/// and a download HTTP client. One Studio per session; the gallery
/// accumulates for its lifetime.
pub struct Studio<B: ImageBackend> {
    backend: B,
    generator: HaikuGenerator,
    styles: StyleCatalog,
    gallery: Gallery,
    http_client: reqwest::Client,
    config: StudioConfig,
    /// Prompt and style of the most recent generation, for retry
    last_request: Option<(String, String)>,
}

impl<B: ImageBackend> Studio<B> {
    /// Create a new Studio over a backend
    #[must_use]
    pub fn new(backend: B, config: StudioConfig) -> Self {
        Self {
            backend,
            generator: HaikuGenerator::new(),
            styles: StyleCatalog::new(),
            gallery: Gallery::new(),
            http_client: reqwest::Client::new(),
            config,
            last_request: None,
        }
    }

    /// Generate an image and land it in the gallery
    ///
    /// Total by contract: any failure (backend error, timeout, media write)
    /// is logged and substituted with the placeholder reference. The record
    /// lands at the front of the gallery and becomes the retry target.
    pub async fn generate_image(&mut self, prompt: &str, style_id: &str) -> GeneratedImage {
        let style = self.styles.resolve(style_id).clone();
        let full_prompt = style.apply(prompt);

        let mut request = ImageRequest::new(full_prompt);
        if let Some(vendor) = style.vendor_style {
            request = request.with_vendor_style(vendor);
        }
        if let Some(negative) = style.negative_prompt {
            request = request.with_negative_prompt(negative);
        }

        let reference = match tokio::time::timeout(
            self.config.generation_timeout,
            self.backend.generate(&request),
        )
        .await
        {
            Ok(Ok(response)) => {
                info!(
                    backend = self.backend.name(),
                    bytes = response.bytes.len(),
                    duration_ms = response.duration_ms,
                    "Image generated"
                );
                self.persist_bytes(&response.bytes, &response.content_type)
                    .await
            }
            Ok(Err(e)) => {
                warn!(
                    backend = self.backend.name(),
                    error = %e,
                    "Image generation failed, using placeholder"
                );
                placeholder_reference()
            }
            Err(_) => {
                warn!(
                    backend = self.backend.name(),
                    timeout_secs = self.config.generation_timeout.as_secs(),
                    "Image generation timed out, using placeholder"
                );
                placeholder_reference()
            }
        };

        let image = GeneratedImage::new(prompt, style.id, reference);
        self.last_request = Some((prompt.to_string(), style.id.to_string()));
        self.gallery.add(image.clone());
        image
    }

    /// Re-run the most recent prompt and style
    ///
    /// Returns `None` if nothing has been generated yet.
    pub async fn retry_last(&mut self) -> Option<GeneratedImage> {
        let (prompt, style) = self.last_request.clone()?;
        Some(self.generate_image(&prompt, &style).await)
    }

    /// Generate a haiku from free text
    ///
    /// If the gallery is non-empty a copy attaches to the newest image.
    pub fn compose_from_text(&mut self, text: &str, emotion: Option<Emotion>) -> Haiku {
        let haiku = self.generator.from_text(text, emotion);
        self.gallery.attach_haiku(&haiku);
        haiku
    }

    /// Generate a haiku driven purely by mood
    ///
    /// If the gallery is non-empty a copy attaches to the newest image.
    pub fn compose_from_emotion(&mut self, emotion: Emotion) -> Haiku {
        let haiku = self.generator.from_emotion(emotion);
        self.gallery.attach_haiku(&haiku);
        haiku
    }

    /// Select one emotion uniformly at random
    #[must_use]
    pub fn random_emotion(&self) -> Emotion {
        self.generator.random_emotion()
    }

    /// Static prompt suggestions for surface display
    #[must_use]
    pub fn suggestions(&self) -> &'static [&'static str] {
        self.generator.suggestions()
    }

    /// The art style catalog
    #[must_use]
    pub fn styles(&self) -> &StyleCatalog {
        &self.styles
    }

    /// The session gallery
    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// The runtime configuration
    #[must_use]
    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Copy or fetch a gallery image into `dest_dir`
    ///
    /// File references are copied; URL references are fetched with the
    /// studio's HTTP client. Unlike generation, failures surface to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown, the fetch fails, or the
    /// destination cannot be written.
    pub async fn download_image(&self, id: &str, dest_dir: &Path) -> anyhow::Result<PathBuf> {
        let image = self
            .gallery
            .get(id)
            .with_context(|| format!("No gallery image with id {id}"))?;

        match &image.reference {
            ImageReference::File(src) => {
                tokio::fs::create_dir_all(dest_dir).await.with_context(|| {
                    format!("Failed to create directory {}", dest_dir.display())
                })?;

                let ext = src
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("png");
                let dest = dest_dir.join(format!("kigo-{id}.{ext}"));
                tokio::fs::copy(src, &dest)
                    .await
                    .with_context(|| format!("Failed to copy {} to {}", src.display(), dest.display()))?;
                Ok(dest)
            }
            ImageReference::Url(url) => {
                let response = self
                    .http_client
                    .get(url)
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch {url}"))?;

                if !response.status().is_success() {
                    anyhow::bail!("Fetch of {url} returned {}", response.status());
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
                    .with_context(|| format!("Failed to read body of {url}"))?;

                export::save_image_bytes(&bytes, &content_type, dest_dir, &format!("kigo-{id}"))
                    .await
            }
        }
    }

    /// Export a haiku as a text file in `dest_dir`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn export_haiku(&self, haiku: &Haiku, dest_dir: &Path) -> anyhow::Result<PathBuf> {
        export::write_haiku_text(haiku, dest_dir).await
    }

    async fn persist_bytes(&self, bytes: &[u8], content_type: &str) -> ImageReference {
        let stem = format!("kigo-{}", now_ms());
        match export::save_image_bytes(bytes, content_type, &self.config.media_dir, &stem).await {
            Ok(path) => ImageReference::File(path),
            Err(e) => {
                warn!(error = %e, "Failed to persist image bytes, using placeholder");
                placeholder_reference()
            }
        }
    }
}

/// The deterministic placeholder substituted whenever generation cannot
/// produce vendor bytes
fn placeholder_reference() -> ImageReference {
    ImageReference::Url(format!("https://picsum.photos/800/600?random={}", now_ms()))
}

// =============================================================================
// Tests
// =============================================================================
