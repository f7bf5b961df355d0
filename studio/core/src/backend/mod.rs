//! Image Backend Integration
//!
//! This module provides abstracted access to text-to-image backends
//! (ClipDrop, etc.) through a common trait interface.
//!
//! # Available Backends
//!
//! - **ClipDrop**: Hosted Stable Diffusion XL text-to-image API (default)
//!
//! # Usage
//!
//! ```ignore
//! use studio_core::backend::{ClipDropBackend, ImageBackend, ImageRequest};
//!
//! let backend = ClipDropBackend::from_env()?;
//! let request = ImageRequest::new("misty mountain lake, photorealistic");
//! let response = backend.generate(&request).await?;
//! ```

mod clipdrop;
mod traits;

pub use clipdrop::{ClipDropBackend, DEFAULT_API_URL};
pub use traits::{ImageBackend, ImageRequest, ImageResponse};
