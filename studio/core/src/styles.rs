//! Art Style Catalog
//!
//! Static catalog of the eight art styles offered for image generation.
//! Each style carries a prompt suffix composed into the vendor prompt and
//! optional vendor hints. Unknown style ids resolve to the default style
//! rather than failing, keeping image generation total.

use serde::Serialize;

/// The style selected when none is configured or an unknown id is given
pub const DEFAULT_STYLE_ID: &str = "realistic";

// =============================================================================
// Style Definition
// =============================================================================

/// One art style in the catalog
///
/// The catalog is static data, so fields borrow `'static` text and the type
/// is serialize-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StyleDefinition {
    /// Unique identifier (e.g. "oil-painting")
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Short description for surface display
    pub description: &'static str,
    /// Suffix composed onto the user's prompt for the vendor request
    pub prompt_suffix: &'static str,
    /// Negative prompt hint, where the style declares one
    pub negative_prompt: Option<&'static str>,
    /// Vendor-side style identifier, where one exists
    pub vendor_style: Option<&'static str>,
}

impl StyleDefinition {
    /// Compose the full vendor prompt for this style
    ///
    /// The bare prompt is what gets recorded on the image record; only the
    /// vendor request sees the suffix.
    #[must_use]
    pub fn apply(&self, prompt: &str) -> String {
        format!("{prompt}, {}", self.prompt_suffix)
    }
}

// =============================================================================
// Style Catalog
// =============================================================================

/// Registry of all art styles, in declaration order
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    styles: Vec<StyleDefinition>,
}

impl StyleCatalog {
    /// Create the catalog with the default eight styles
    #[must_use]
    pub fn new() -> Self {
        let mut catalog = Self { styles: Vec::new() };
        catalog.register_default_styles();
        catalog
    }

    /// Look up a style by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&StyleDefinition> {
        self.styles.iter().find(|s| s.id == id)
    }

    /// The default style
    #[must_use]
    pub fn default_style(&self) -> &StyleDefinition {
        // The default id is always registered.
        self.get(DEFAULT_STYLE_ID).unwrap_or(&self.styles[0])
    }

    /// Resolve an id to a style, falling back to the default
    ///
    /// Unknown ids warn and substitute the default instead of failing.
    #[must_use]
    pub fn resolve(&self, id: &str) -> &StyleDefinition {
        match self.get(id) {
            Some(style) => style,
            None => {
                tracing::warn!(style = id, "Unknown style id, using default");
                self.default_style()
            }
        }
    }

    /// Iterate over the styles in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.iter()
    }

    /// Number of styles in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    fn register(&mut self, style: StyleDefinition) {
        self.styles.push(style);
    }

    fn register_default_styles(&mut self) {
        self.register(StyleDefinition {
            id: "realistic",
            name: "Realistic",
            description: "Photorealistic images",
            prompt_suffix: "photorealistic, highly detailed, 8k",
            negative_prompt: Some("cartoon, anime, painting, drawing"),
            vendor_style: Some("photographic"),
        });
        self.register(StyleDefinition {
            id: "fantasy",
            name: "Fantasy",
            description: "Magical and mystical",
            prompt_suffix: "fantasy art, magical, ethereal, mystical",
            negative_prompt: None,
            vendor_style: Some("fantasy-art"),
        });
        self.register(StyleDefinition {
            id: "cartoon",
            name: "Cartoon",
            description: "Animated style",
            prompt_suffix: "cartoon style, animated, colorful, stylized",
            negative_prompt: Some("photorealistic, realistic"),
            vendor_style: Some("comic-book"),
        });
        self.register(StyleDefinition {
            id: "anime",
            name: "Anime",
            description: "Japanese animation style",
            prompt_suffix: "anime style, manga, japanese animation",
            negative_prompt: None,
            vendor_style: Some("anime"),
        });
        self.register(StyleDefinition {
            id: "sketch",
            name: "Sketch",
            description: "Pencil drawings",
            prompt_suffix: "pencil sketch, line art, black and white drawing",
            negative_prompt: Some("colored, photorealistic"),
            vendor_style: Some("line-art"),
        });
        self.register(StyleDefinition {
            id: "oil-painting",
            name: "Oil Painting",
            description: "Classical art style",
            prompt_suffix: "oil painting, classical art, painted, artistic",
            negative_prompt: None,
            vendor_style: Some("digital-art"),
        });
        self.register(StyleDefinition {
            id: "cyberpunk",
            name: "Cyberpunk",
            description: "Futuristic neon style",
            prompt_suffix: "cyberpunk, neon lights, futuristic, sci-fi",
            negative_prompt: None,
            vendor_style: Some("3d-model"),
        });
        self.register(StyleDefinition {
            id: "vintage",
            name: "Vintage",
            description: "Retro and classic",
            prompt_suffix: "vintage, retro, old-fashioned, classic",
            negative_prompt: None,
            vendor_style: Some("photographic"),
        });
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_has_eight_styles() {
        let catalog = StyleCatalog::new();
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_catalog_ids_in_declaration_order() {
        let catalog = StyleCatalog::new();
        let ids: Vec<&str> = catalog.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "realistic",
                "fantasy",
                "cartoon",
                "anime",
                "sketch",
                "oil-painting",
                "cyberpunk",
                "vintage",
            ]
        );
    }

    #[test]
    fn test_default_style_is_realistic() {
        let catalog = StyleCatalog::new();
        assert_eq!(catalog.default_style().id, "realistic");
    }

    #[test]
    fn test_resolve_known_id() {
        let catalog = StyleCatalog::new();
        assert_eq!(catalog.resolve("cyberpunk").name, "Cyberpunk");
    }

    #[test]
    fn test_resolve_unknown_id_falls_back() {
        let catalog = StyleCatalog::new();
        assert_eq!(catalog.resolve("watercolor").id, "realistic");
    }

    #[test]
    fn test_apply_suffixes_prompt() {
        let catalog = StyleCatalog::new();
        let style = catalog.resolve("fantasy");
        assert_eq!(
            style.apply("dragon over castle"),
            "dragon over castle, fantasy art, magical, ethereal, mystical"
        );
    }

    #[test]
    fn test_negative_prompts_where_declared() {
        let catalog = StyleCatalog::new();
        assert!(catalog.resolve("realistic").negative_prompt.is_some());
        assert!(catalog.resolve("fantasy").negative_prompt.is_none());
    }
}
