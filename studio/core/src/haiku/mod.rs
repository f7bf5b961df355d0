//! Haiku Generation
//!
//! Theme classification, the fixed emotion set, and the poem generator.
//!
//! # Design Philosophy
//!
//! The generator is a deterministic lookup-and-random-choice routine over
//! static tables. Classification is a short-circuiting ordered keyword
//! matcher, not a scored classifier: the first theme whose trigger list hits
//! wins, and unmatched input falls through to [`Theme::Emotions`]. Every
//! entry point is total - any input produces a valid [`Haiku`].

use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod corpus;

use corpus::HaikuCorpus;

// =============================================================================
// Themes
// =============================================================================

/// One of the five fixed topical buckets used to select a poem corpus subset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Landscapes, plants, animals, weather
    Nature,
    /// Feelings and inner life - also the fallback bucket
    Emotions,
    /// The four seasons and their markers
    Seasons,
    /// Magic, spirit, dreams, sacred places
    Mystical,
    /// Small human moments and figures
    Moments,
}

impl Theme {
    /// Get all themes
    #[must_use]
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Nature,
            Theme::Emotions,
            Theme::Seasons,
            Theme::Mystical,
            Theme::Moments,
        ]
    }

    /// Get the lowercase label for this theme
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Emotions => "emotions",
            Self::Seasons => "seasons",
            Self::Mystical => "mystical",
            Self::Moments => "moments",
        }
    }

    /// Trigger substrings for this theme
    ///
    /// Matching is by substring over lowercased input, so "blossoms" hits
    /// "blossom" and "birds" hits "bird". [`Theme::Emotions`] has no
    /// triggers; it is the fallback bucket.
    #[must_use]
    pub const fn triggers(&self) -> &'static [&'static str] {
        match self {
            Self::Nature => &[
                "nature",
                "forest",
                "tree",
                "flower",
                "mountain",
                "ocean",
                "lake",
                "river",
                "bird",
                "butterfly",
                "rain",
                "wind",
                "grass",
                "leaf",
                "petal",
                "branch",
            ],
            Self::Emotions => &[],
            Self::Seasons => &[
                "winter", "summer", "spring", "autumn", "season", "snow", "blossom", "harvest",
            ],
            Self::Mystical => &[
                "magic", "mystical", "fantasy", "dream", "star", "moon", "spirit", "temple",
                "ancient", "sacred",
            ],
            Self::Moments => &[
                "old man",
                "child",
                "mother",
                "grandmother",
                "lover",
                "friend",
                "student",
                "artist",
                "traveler",
                "fisherman",
            ],
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Emotions
// =============================================================================

/// One of the ten fixed mood labels attached to a generated poem
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// Calm clarity
    Serene,
    /// Gentle sadness
    Melancholic,
    /// Open delight
    Joyful,
    /// Quiet reflection
    Contemplative,
    /// Longing for the past
    Nostalgic,
    /// Settled stillness
    Peaceful,
    /// Veiled and unknown
    Mysterious,
    /// Looking forward
    Hopeful,
    /// Soft yearning
    Wistful,
    /// Undisturbed ease
    Tranquil,
}

impl Emotion {
    /// Get all emotions, in the fixed corpus order
    #[must_use]
    pub fn all() -> &'static [Emotion] {
        &[
            Emotion::Serene,
            Emotion::Melancholic,
            Emotion::Joyful,
            Emotion::Contemplative,
            Emotion::Nostalgic,
            Emotion::Peaceful,
            Emotion::Mysterious,
            Emotion::Hopeful,
            Emotion::Wistful,
            Emotion::Tranquil,
        ]
    }

    /// Get the lowercase label for this emotion
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Serene => "serene",
            Self::Melancholic => "melancholic",
            Self::Joyful => "joyful",
            Self::Contemplative => "contemplative",
            Self::Nostalgic => "nostalgic",
            Self::Peaceful => "peaceful",
            Self::Mysterious => "mysterious",
            Self::Hopeful => "hopeful",
            Self::Wistful => "wistful",
            Self::Tranquil => "tranquil",
        }
    }

    /// Fixed seed phrase for emotion-driven generation
    ///
    /// The phrase is run through the theme classifier so a caller can drive
    /// generation purely by mood without supplying their own text.
    #[must_use]
    pub const fn seed_phrase(&self) -> &'static str {
        match self {
            Self::Serene => "peaceful mountain lake",
            Self::Melancholic => "autumn rain falling",
            Self::Joyful => "spring flowers blooming",
            Self::Contemplative => "temple meditation",
            Self::Nostalgic => "childhood memories",
            Self::Peaceful => "quiet forest glade",
            Self::Mysterious => "moonlit forest path",
            Self::Hopeful => "sunrise over horizon",
            Self::Wistful => "distant memories",
            Self::Tranquil => "gentle flowing stream",
        }
    }

    /// Display accent color for this emotion
    ///
    /// Format: RGB hex string like "#87CEEB". Surfaces use this to tint
    /// poem output.
    #[must_use]
    pub const fn accent_color(&self) -> &'static str {
        match self {
            Self::Serene => "#87CEEB",        // Sky blue
            Self::Melancholic => "#708090",   // Slate gray
            Self::Joyful => "#FFD700",        // Gold
            Self::Contemplative => "#9370DB", // Medium purple
            Self::Nostalgic => "#FFBF00",     // Amber
            Self::Peaceful => "#8FBC8F",      // Sage green
            Self::Mysterious => "#4B0082",    // Indigo
            Self::Hopeful => "#FFB6C1",       // Light pink
            Self::Wistful => "#C08081",       // Old rose
            Self::Tranquil => "#008080",      // Teal
        }
    }

    /// Select one emotion uniformly at random
    #[must_use]
    pub fn random() -> Self {
        let all = Self::all();
        let mut rng = rand::thread_rng();
        all[rng.gen_range(0..all.len())]
    }

    /// Select an emotion deterministically (for testing or reproducible behavior)
    #[must_use]
    pub fn random_seeded(seed: u64) -> Self {
        let all = Self::all();
        all[(seed % all.len() as u64) as usize]
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Emotion::all()
            .iter()
            .find(|e| e.as_str() == lowered)
            .copied()
            .ok_or_else(|| {
                let valid: Vec<&str> = Emotion::all().iter().map(Emotion::as_str).collect();
                format!("unknown emotion '{s}' (valid: {})", valid.join(", "))
            })
    }
}

// =============================================================================
// Haiku Record
// =============================================================================

/// Haiku identifier
///
/// Uses an atomic counter combined with timestamp to ensure uniqueness even
/// when multiple haiku are generated in the same millisecond.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HaikuId(pub String);

impl HaikuId {
    /// Generate a new unique haiku ID
    #[must_use]
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};

        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let count = COUNTER.fetch_add(1, Ordering::SeqCst);
        Self(format!("haiku_{}_{count}", now_ms()))
    }
}

impl Default for HaikuId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HaikuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One generated haiku-style poem
///
/// Immutable after creation; a new generation produces a new record rather
/// than mutating an existing one. The `[String; 3]` type makes the
/// three-line invariant structural.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Haiku {
    /// Opaque unique identifier, assigned at creation
    pub id: HaikuId,
    /// Exactly three lines of text
    pub lines: [String; 3],
    /// Mood label paired with the poem
    pub emotion: Emotion,
    /// Topical bucket the poem was drawn from
    pub theme: Theme,
    /// Unix-millis creation timestamp
    pub created_at_ms: u64,
}

impl Haiku {
    /// Human-readable local creation time, for surface display
    #[must_use]
    pub fn created_at_local(&self) -> String {
        chrono::DateTime::from_timestamp_millis(self.created_at_ms as i64)
            .map(|dt| {
                dt.with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|| self.created_at_ms.to_string())
    }
}

impl std::fmt::Display for Haiku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        write!(f, "  - {} / {}", self.emotion, self.theme)
    }
}

// =============================================================================
// Theme Classifier
// =============================================================================

/// Short-circuiting ordered keyword classifier
///
/// Lowercases the input and tests each theme's trigger-substring list in the
/// fixed priority order nature, seasons, mystical, moments. The first theme
/// with a hit wins; no hit falls through to [`Theme::Emotions`]. Trigger
/// lists may overlap in practice ("tree" is a nature trigger while "temple"
/// is mystical); resolution is purely the priority order.
pub struct ThemeClassifier;

impl ThemeClassifier {
    /// The fixed priority order for trigger matching
    const PRIORITY: [Theme; 4] = [
        Theme::Nature,
        Theme::Seasons,
        Theme::Mystical,
        Theme::Moments,
    ];

    /// Classify free text into exactly one theme
    ///
    /// A pure, total function: the empty string and trigger-free text both
    /// classify as [`Theme::Emotions`].
    #[must_use]
    pub fn classify(text: &str) -> Theme {
        let lowered = text.to_lowercase();
        for theme in Self::PRIORITY {
            if theme.triggers().iter().any(|t| lowered.contains(t)) {
                return theme;
            }
        }
        Theme::Emotions
    }
}

// =============================================================================
// Haiku Generator
// =============================================================================

/// The poem generator: classify, select, tag
///
/// Owns the fixed [`HaikuCorpus`] and exposes the generation entry points.
/// All of them are total; no input can fail to produce a valid [`Haiku`].
#[derive(Debug, Clone)]
pub struct HaikuGenerator {
    corpus: HaikuCorpus,
}

impl HaikuGenerator {
    /// Create a generator over the default corpus
    #[must_use]
    pub fn new() -> Self {
        Self {
            corpus: HaikuCorpus::new(),
        }
    }

    /// Access the underlying corpus
    #[must_use]
    pub fn corpus(&self) -> &HaikuCorpus {
        &self.corpus
    }

    /// Generate a haiku from free text
    ///
    /// Classifies the text, selects one poem uniformly at random from the
    /// theme's list, and pairs it with the supplied emotion or a uniformly
    /// random one.
    #[must_use]
    pub fn from_text(&self, text: &str, emotion: Option<Emotion>) -> Haiku {
        let theme = ThemeClassifier::classify(text);
        let lines = self.corpus.select(theme);
        self.assemble(theme, lines, emotion.unwrap_or_else(Emotion::random))
    }

    /// Seeded variant of [`Self::from_text`] for deterministic selection
    #[must_use]
    pub fn from_text_seeded(&self, text: &str, emotion: Option<Emotion>, seed: u64) -> Haiku {
        let theme = ThemeClassifier::classify(text);
        let lines = self.corpus.select_seeded(theme, seed);
        self.assemble(theme, lines, emotion.unwrap_or_else(|| Emotion::random_seeded(seed)))
    }

    /// Generate a haiku driven purely by mood
    ///
    /// Looks up the emotion's fixed seed phrase, classifies it, and selects
    /// a poem with that emotion as the explicit emotion.
    #[must_use]
    pub fn from_emotion(&self, emotion: Emotion) -> Haiku {
        self.from_text(emotion.seed_phrase(), Some(emotion))
    }

    /// Seeded variant of [`Self::from_emotion`] for deterministic selection
    #[must_use]
    pub fn from_emotion_seeded(&self, emotion: Emotion, seed: u64) -> Haiku {
        self.from_text_seeded(emotion.seed_phrase(), Some(emotion), seed)
    }

    /// Select one emotion uniformly at random from the ten-label set
    #[must_use]
    pub fn random_emotion(&self) -> Emotion {
        Emotion::random()
    }

    /// Static prompt suggestions for surface display
    #[must_use]
    pub fn suggestions(&self) -> &'static [&'static str] {
        corpus::prompt_suggestions()
    }

    fn assemble(&self, theme: Theme, lines: [String; 3], emotion: Emotion) -> Haiku {
        Haiku {
            id: HaikuId::new(),
            lines,
            emotion,
            theme,
            created_at_ms: now_ms(),
        }
    }
}

impl Default for HaikuGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Get current timestamp in milliseconds
pub(crate) fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

// =============================================================================
// Tests
// =============================================================================
