//! The Poem Corpus
//!
//! Fixed set of 50 pre-authored three-line poems, 10 per theme, registered
//! into a registry keyed by [`Theme`] at construction. Selection is uniform
//! random, with a seeded entry point alongside the thread-RNG one so tests
//! can pin choices deterministically.
//!
//! The poem texts are reproduced verbatim; scenario tests depend on the
//! literal corpus, so the data here is behavior, not decoration.

use rand::Rng;
use std::collections::HashMap;

use super::Theme;

/// A pre-authored three-line poem, as stored in the corpus
pub type Poem = [&'static str; 3];

/// Substituted if a theme somehow has no registered poems
const FALLBACK_POEM: Poem = [
    "Blank page waits in peace",
    "No words have been written yet",
    "Silence is a poem",
];

// =============================================================================
// Corpus Registry
// =============================================================================

/// Registry of all poems, indexed by theme
///
/// Construction registers the full fixed corpus; [`HaikuCorpus::empty`]
/// exists for testing custom setups.
#[derive(Debug, Clone)]
pub struct HaikuCorpus {
    poems: HashMap<Theme, Vec<Poem>>,
}

impl HaikuCorpus {
    /// Create a registry holding the default corpus
    #[must_use]
    pub fn new() -> Self {
        let mut corpus = Self {
            poems: HashMap::new(),
        };
        corpus.register_default_poems();
        corpus
    }

    /// Create an empty registry (for testing or custom setups)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            poems: HashMap::new(),
        }
    }

    /// Register a poem under a theme
    pub fn register(&mut self, theme: Theme, poem: Poem) {
        self.poems.entry(theme).or_default().push(poem);
    }

    /// Get all poems for a theme
    #[must_use]
    pub fn poems(&self, theme: Theme) -> &[Poem] {
        self.poems.get(&theme).map_or(&[], Vec::as_slice)
    }

    /// Get the count of poems for a theme
    #[must_use]
    pub fn poem_count(&self, theme: Theme) -> usize {
        self.poems.get(&theme).map_or(0, Vec::len)
    }

    /// Select one poem uniformly at random from a theme's list
    #[must_use]
    pub fn select(&self, theme: Theme) -> [String; 3] {
        let poems = self.poems(theme);
        if poems.is_empty() {
            return owned(FALLBACK_POEM);
        }
        let mut rng = rand::thread_rng();
        owned(poems[rng.gen_range(0..poems.len())])
    }

    /// Select a poem deterministically (for testing or reproducible behavior)
    ///
    /// Uses the provided seed to select consistently.
    #[must_use]
    pub fn select_seeded(&self, theme: Theme, seed: u64) -> [String; 3] {
        let poems = self.poems(theme);
        if poems.is_empty() {
            return owned(FALLBACK_POEM);
        }
        owned(poems[(seed % poems.len() as u64) as usize])
    }

    /// Register the default corpus, theme by theme
    fn register_default_poems(&mut self) {
        self.register_nature_poems();
        self.register_emotions_poems();
        self.register_seasons_poems();
        self.register_mystical_poems();
        self.register_moments_poems();
    }

    fn register_nature_poems(&mut self) {
        let poems: [Poem; 10] = [
            [
                "Cherry blossoms fall",
                "Petals dance on gentle breeze",
                "Spring whispers goodbye",
            ],
            [
                "Mountain lake reflects",
                "Clouds drift across azure sky",
                "Silence speaks volumes",
            ],
            [
                "Autumn leaves spiral",
                "Golden memories descend",
                "Time flows like water",
            ],
            [
                "Morning dew glistens",
                "On grass blades touched by first light",
                "Dawn breaks the darkness",
            ],
            [
                "Ocean waves retreat",
                "Leaving shells and sandy dreams",
                "Tides carry secrets",
            ],
            [
                "Pine trees stand silent",
                "Ancient guardians of the earth",
                "Wisdom in their rings",
            ],
            [
                "Butterfly alights",
                "On purple flower in meadow",
                "Beauty finds beauty",
            ],
            [
                "Rain drops kiss the earth",
                "Awakening sleeping seeds",
                "Life stirs beneath soil",
            ],
            [
                "Moonbeams paint silver",
                "Paths across the sleeping lake",
                "Night holds gentle peace",
            ],
            [
                "Wind whispers through grass",
                "Telling stories of the past",
                "Earth remembers all",
            ],
        ];
        for poem in poems {
            self.register(Theme::Nature, poem);
        }
    }

    fn register_emotions_poems(&mut self) {
        let poems: [Poem; 10] = [
            [
                "Heart beats like thunder",
                "In the quiet of the night",
                "Love echoes softly",
            ],
            [
                "Tears fall like spring rain",
                "Washing away yesterday",
                "Hope blooms in sorrow",
            ],
            [
                "Laughter fills the air",
                "Like birds singing at sunrise",
                "Joy knows no boundaries",
            ],
            [
                "Memories linger",
                "In the corners of the mind",
                "Past and present merge",
            ],
            [
                "Dreams take flight at dusk",
                "Carrying wishes skyward",
                "Tomorrow awaits",
            ],
            [
                "Loneliness settles",
                "Like mist upon the valley",
                "Solitude teaches",
            ],
            [
                "Gentle hands embrace",
                "Healing wounds that time forgot",
                "Love conquers all pain",
            ],
            [
                "Silent tears of joy",
                "Fall like petals from the heart",
                "Happiness overflows",
            ],
            [
                "Peaceful mind rests here",
                "In the garden of the soul",
                "Serenity blooms",
            ],
            [
                "Nostalgia calls out",
                "From photographs and old songs",
                "Yesterday lives on",
            ],
        ];
        for poem in poems {
            self.register(Theme::Emotions, poem);
        }
    }

    fn register_seasons_poems(&mut self) {
        let poems: [Poem; 10] = [
            [
                "Winter wind whispers",
                "Through bare branches reaching high",
                "Rest before rebirth",
            ],
            [
                "Summer sun blazes",
                "Painting shadows on warm earth",
                "Life in full glory",
            ],
            [
                "Spring rain awakens",
                "Seeds sleeping beneath the soil",
                "New life stirs within",
            ],
            [
                "Autumn moon rises",
                "Over fields of golden grain",
                "Harvest time has come",
            ],
            [
                "First snow of winter",
                "Blankets the world in silence",
                "Peace covers the earth",
            ],
            [
                "Cherry blossoms bloom",
                "Pink clouds floating on spring breeze",
                "Beauty is fleeting",
            ],
            [
                "Summer cicadas",
                "Sing their ancient songs of heat",
                "Time moves with their rhythm",
            ],
            [
                "Falling autumn leaves",
                "Dance their way to earth below",
                "Seasons turn and turn",
            ],
            [
                "Winter stars shine bright",
                "In the crystal clear night sky",
                "Cold reveals the light",
            ],
            [
                "Spring's first green shoots",
                "Push through snow to greet the sun",
                "Hope never surrenders",
            ],
        ];
        for poem in poems {
            self.register(Theme::Seasons, poem);
        }
    }

    fn register_mystical_poems(&mut self) {
        let poems: [Poem; 10] = [
            [
                "Stars write ancient songs",
                "In the language of the night",
                "Universe listens",
            ],
            [
                "Moonbeams paint silver",
                "Paths across the sleeping world",
                "Magic walks among us",
            ],
            [
                "Shadows dance and play",
                "In the flickering candlelight",
                "Spirits come alive",
            ],
            [
                "Mist veils the mountain",
                "Hiding secrets of the earth",
                "Mystery endures",
            ],
            [
                "Temple bells ring out",
                "Calling souls to meditation",
                "Peace flows like water",
            ],
            [
                "Ancient tree stands tall",
                "Keeper of a thousand years",
                "Wisdom in its bark",
            ],
            [
                "Candle flame flickers",
                "Dancing with invisible wind",
                "Light conquers darkness",
            ],
            [
                "Prayer flags flutter",
                "Carrying hopes to the heavens",
                "Faith rides on the breeze",
            ],
            [
                "Sacred silence holds",
                "All the answers we seek",
                "Truth lives in stillness",
            ],
            [
                "Spirit of the forest",
                "Whispers through the rustling leaves",
                "Nature speaks to those who listen",
            ],
        ];
        for poem in poems {
            self.register(Theme::Mystical, poem);
        }
    }

    fn register_moments_poems(&mut self) {
        let poems: [Poem; 10] = [
            [
                "Old man feeds the birds",
                "Crumbs of kindness shared each day",
                "Love multiplies",
            ],
            [
                "Child takes first steps",
                "Wobbling toward waiting arms",
                "Trust leads the way",
            ],
            [
                "Grandmother's hands",
                "Knead dough with decades of love",
                "Tradition lives on",
            ],
            [
                "Lovers walk at sunset",
                "Shadows merge as hearts unite",
                "Two become as one",
            ],
            [
                "Student reads by candlelight",
                "Knowledge glows in the darkness",
                "Learning lights the mind",
            ],
            [
                "Fisherman waits patiently",
                "Rod bent over quiet water",
                "Patience teaches peace",
            ],
            [
                "Mother sings lullaby",
                "Voice like honey in the night",
                "Love wraps around dreams",
            ],
            [
                "Friends share evening tea",
                "Steam rises with their laughter",
                "Friendship warms the soul",
            ],
            [
                "Traveler rests under tree",
                "Shade offers welcome respite",
                "Journey finds its rhythm",
            ],
            [
                "Artist paints the dawn",
                "Capturing light on canvas",
                "Beauty lives forever",
            ],
        ];
        for poem in poems {
            self.register(Theme::Moments, poem);
        }
    }
}

impl Default for HaikuCorpus {
    fn default() -> Self {
        Self::new()
    }
}

fn owned(poem: Poem) -> [String; 3] {
    [
        poem[0].to_string(),
        poem[1].to_string(),
        poem[2].to_string(),
    ]
}

// =============================================================================
// Prompt Suggestions
// =============================================================================

/// Static prompt suggestions, for surface display only
///
/// Four groups of ten: nature/seasons, emotions, life moments, mystical.
#[must_use]
pub fn prompt_suggestions() -> &'static [&'static str] {
    &[
        // Nature & Seasons
        "cherry blossoms falling in spring breeze",
        "autumn leaves dancing in the wind",
        "morning dew on grass blades",
        "winter snow covering pine trees",
        "ocean waves crashing on shore",
        "mountain lake reflecting clouds",
        "sunset painting the sky orange",
        "rain drops on window glass",
        "butterfly landing on flower",
        "moonlight through forest trees",
        // Emotions & Feelings
        "longing for distant memories",
        "peaceful moment of solitude",
        "joy of childhood laughter",
        "melancholy of rainy days",
        "hope rising with dawn",
        "love blooming like flowers",
        "sadness of farewell",
        "wonder at starry night",
        "contentment in simple things",
        "nostalgia for summer days",
        // Life Moments
        "old man feeding birds",
        "child's first steps",
        "grandmother's gentle hands",
        "lovers walking at sunset",
        "student reading by candlelight",
        "fisherman waiting patiently",
        "mother singing lullaby",
        "friends sharing tea",
        "traveler resting under tree",
        "artist painting landscape",
        // Mystical & Spiritual
        "temple bells in morning mist",
        "meditation in bamboo grove",
        "prayer flags in mountain wind",
        "candle flame in darkness",
        "ancient wisdom in silence",
        "spirit of the forest",
        "dreams floating on clouds",
        "soul's journey through seasons",
        "harmony of earth and sky",
        "eternal dance of time",
    ]
}

// =============================================================================
// Tests
// =============================================================================
