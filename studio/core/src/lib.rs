//! Studio Core - Headless Art + Haiku Engine for kigo
//!
//! This crate provides the core engine for kigo, completely independent of
//! any user-facing surface. It can drive a CLI, web UI, desktop app, or run
//! headless for testing/automation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Surfaces                                 │
//! │  ┌─────────┐  ┌─────────┐  ┌──────────────────────────────────┐ │
//! │  │   CLI   │  │  WebUI  │  │        Headless / Tests          │ │
//! │  │ (kigo)  │  │         │  │                                  │ │
//! │  └────┬────┘  └────┬────┘  └────────────────┬─────────────────┘ │
//! │       └────────────┴────────────────────────┘                   │
//! └───────────────────────────┼──────────────────────────────────────┘
//!                             │
//! ┌───────────────────────────┼──────────────────────────────────────┐
//! │                      STUDIO CORE                                 │
//! │  ┌────────────────────────┴────────────────────────────────────┐ │
//! │  │                        Studio                                │ │
//! │  │  ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐ │ │
//! │  │  │  Haiku   │  │  Style   │  │ Gallery  │  │   Backend    │ │ │
//! │  │  │Generator │  │ Catalog  │  │          │  │  (ClipDrop)  │ │ │
//! │  │  └──────────┘  └──────────┘  └──────────┘  └──────────────┘ │ │
//! │  └─────────────────────────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Studio`]: The main orchestration struct that manages everything
//! - [`HaikuGenerator`]: Theme classification and poem selection
//! - [`Haiku`]: One generated three-line poem with theme and emotion tags
//! - [`StyleCatalog`]: The fixed catalog of art styles
//! - [`Gallery`]: Session-scoped record of generated images
//! - [`ImageBackend`]: Trait for text-to-image providers
//!
//! # Quick Start
//!
//! ```ignore
//! use studio_core::{ClipDropBackend, Studio, StudioConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = ClipDropBackend::from_env()?;
//!     let mut studio = Studio::new(backend, StudioConfig::default());
//!
//!     // Image generation never fails observably: on any backend error a
//!     // placeholder reference is substituted.
//!     let image = studio.generate_image("misty mountain lake", "realistic").await;
//!     println!("{}", image.reference);
//!
//!     // A haiku generated while the gallery has images attaches to the
//!     // newest image.
//!     let haiku = studio.compose_from_text("misty mountain lake", None);
//!     println!("{haiku}");
//!     Ok(())
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`haiku`]: Theme classifier, emotion set, poem corpus, generator
//! - [`backend`]: Image backend abstraction (ClipDrop, etc.)
//! - [`styles`]: Static catalog of art styles
//! - [`gallery`]: Session-only generated image records
//! - [`studio`]: Main Studio orchestrator
//! - [`export`]: Poem text export and image byte persistence
//! - [`config`]: TOML + environment configuration loading
//!
//! # No Surface Dependencies
//!
//! This crate has **zero** dependencies on clap, ratatui, or any other
//! user-facing framework. It's pure engine logic that can be used anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod config;
pub mod export;
pub mod gallery;
pub mod haiku;
pub mod studio;
pub mod styles;

// Re-exports for convenience
pub use backend::{ClipDropBackend, ImageBackend, ImageRequest, ImageResponse};
pub use gallery::{Gallery, GeneratedImage, ImageReference};
pub use haiku::corpus::HaikuCorpus;
pub use haiku::{Emotion, Haiku, HaikuGenerator, HaikuId, Theme, ThemeClassifier};
pub use studio::{Studio, StudioConfig};
pub use styles::{StyleCatalog, StyleDefinition};

// Config exports
pub use config::{
    default_config_path, default_media_dir, load_config, load_config_from_path, BackendToml,
    ConfigError, ConfigOverrides, ConfigSource, KigoToml, StudioConfigFile, StudioToml,
};
