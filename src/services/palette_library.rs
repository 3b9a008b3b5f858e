//! Curated palette library with prompt matching.
//!
//! Prompts are matched against each palette's name and tags by cosine
//! similarity of term-frequency vectors. The best score wins; equal scores
//! keep library order, so a prompt with no known words falls back to the
//! first palette.

use color_engine::{assemble, Palette, PaletteError, RawPaletteEntry};
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::collections::HashMap;

use crate::assets::AssetLoader;

/// Words that carry no palette meaning
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "app", "for", "in", "inspired", "my", "of", "on", "the", "to", "with",
];

/// One palette as stored in palettes.yaml
#[derive(Debug, Clone, Deserialize)]
pub struct LibraryPalette {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub colors: Vec<RawPaletteEntry>,
}

impl LibraryPalette {
    /// Validate the colors into a palette
    pub fn palette(&self) -> Result<Palette, PaletteError> {
        assemble(&self.colors)
    }
}

#[derive(Debug, Deserialize)]
struct LibraryFile {
    palettes: Vec<LibraryPalette>,
}

/// Error loading the palette library
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("Failed to read palette library: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse palette library: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Palette {name:?} is invalid: {source}")]
    InvalidPalette {
        name: String,
        #[source]
        source: PaletteError,
    },

    #[error("Palette library is empty")]
    Empty,
}

/// Sparse term-frequency vector
#[derive(Debug, Clone, Default)]
struct TermVector {
    counts: HashMap<String, f64>,
    norm: f64,
}

impl TermVector {
    fn from_text(text: &str) -> Self {
        let mut counts: HashMap<String, f64> = HashMap::new();
        for term in tokenize(text) {
            *counts.entry(term).or_default() += 1.0;
        }
        let norm = counts.values().map(|c| c * c).sum::<f64>().sqrt();
        Self { counts, norm }
    }

    /// Cosine similarity in `[0, 1]`; zero if either vector is empty
    fn cosine(&self, other: &TermVector) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }
        let dot: f64 = self
            .counts
            .iter()
            .filter_map(|(term, a)| other.counts.get(term).map(|b| a * b))
            .sum();
        dot / (self.norm * other.norm)
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
}

struct IndexedPalette {
    entry: LibraryPalette,
    terms: TermVector,
}

/// Validated, searchable palette collection
pub struct PaletteLibrary {
    palettes: Vec<IndexedPalette>,
}

impl PaletteLibrary {
    /// Build a library, validating every palette
    pub fn new(palettes: Vec<LibraryPalette>) -> Result<Self, LibraryError> {
        if palettes.is_empty() {
            return Err(LibraryError::Empty);
        }

        let palettes = palettes
            .into_iter()
            .map(|entry| -> Result<IndexedPalette, LibraryError> {
                entry
                    .palette()
                    .map_err(|source| LibraryError::InvalidPalette {
                        name: entry.name.clone(),
                        source,
                    })?;
                let text = format!("{} {}", entry.name, entry.tags.join(" "));
                let terms = TermVector::from_text(&text);
                Ok(IndexedPalette { entry, terms })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { palettes })
    }

    /// Parse a palettes.yaml document
    pub fn from_yaml(yaml: &str) -> Result<Self, LibraryError> {
        let file: LibraryFile = serde_yaml::from_str(yaml)?;
        Self::new(file.palettes)
    }

    /// Load from AssetLoader (embedded or external)
    pub fn load(loader: &AssetLoader) -> Result<Self, LibraryError> {
        let library = Self::from_yaml(&loader.read_palettes_string()?)?;
        tracing::info!(palettes = library.len(), "Loaded palette library");
        Ok(library)
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LibraryPalette> {
        self.palettes.iter().map(|p| &p.entry)
    }

    /// Look up a palette by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&LibraryPalette> {
        self.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Most similar palette for a prompt, with its score
    pub fn best_match(&self, prompt: &str) -> Option<(&LibraryPalette, f64)> {
        let query = TermVector::from_text(prompt);
        let mut best: Option<(&LibraryPalette, f64)> = None;

        for indexed in &self.palettes {
            let score = indexed.terms.cosine(&query);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((&indexed.entry, score));
            }
        }

        best
    }

    /// Uniformly random palette
    pub fn random(&self) -> Option<&LibraryPalette> {
        self.palettes
            .choose(&mut rand::thread_rng())
            .map(|p| &p.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> PaletteLibrary {
        PaletteLibrary::load(&AssetLoader::embedded()).unwrap()
    }

    #[test]
    fn test_embedded_library_is_valid() {
        let library = embedded();
        assert!(library.len() >= 3);
        assert!(library.get("tropical sunset").is_some());
        for palette in library.iter() {
            assert_eq!(palette.palette().unwrap().len(), 6, "{}", palette.name);
        }
    }

    #[test]
    fn test_tokenize_drops_punctuation_and_stop_words() {
        let terms: Vec<String> = tokenize("Calm, ocean-inspired colors for a Spa!").collect();
        assert_eq!(terms, ["calm", "ocean", "colors", "spa"]);
    }

    #[test]
    fn test_cosine_similarity() {
        let a = TermVector::from_text("ocean calm");
        let b = TermVector::from_text("calm ocean");
        let c = TermVector::from_text("forest");
        assert!((a.cosine(&b) - 1.0).abs() < 1e-12);
        assert_eq!(a.cosine(&c), 0.0);
        assert_eq!(a.cosine(&TermVector::default()), 0.0);
    }

    #[test]
    fn test_best_match_for_sample_prompts() {
        let library = embedded();
        let cases = [
            (
                "An energetic palette for a fitness brand inspired by a tropical sunset",
                "Tropical Sunset",
            ),
            ("Calming colors for a meditation app with ocean vibes", "Ocean Calm"),
            ("Bold and modern palette for a tech startup", "Modern Tech"),
            ("Warm and cozy colors for a coffee shop brand", "Coffee House"),
            (
                "Professional palette for a financial services company",
                "Corporate Trust",
            ),
        ];
        for (prompt, expected) in cases {
            let (palette, score) = library.best_match(prompt).unwrap();
            assert_eq!(palette.name, expected, "prompt: {prompt}");
            assert!(score > 0.0);
        }
    }

    #[test]
    fn test_unknown_words_fall_back_to_first() {
        let library = embedded();
        let (palette, score) = library.best_match("zzz qqq").unwrap();
        assert_eq!(palette.name, library.iter().next().unwrap().name);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_random_returns_library_member() {
        let library = embedded();
        let picked = library.random().unwrap();
        assert!(library.get(&picked.name).is_some());
    }

    #[test]
    fn test_invalid_palette_is_rejected_at_load() {
        let yaml = r##"
palettes:
  - name: Broken
    colors:
      - { color: "#12345", name: Oops, type: primary }
"##;
        let err = PaletteLibrary::from_yaml(yaml).err().unwrap();
        assert!(matches!(err, LibraryError::InvalidPalette { ref name, .. } if name == "Broken"));
    }

    #[test]
    fn test_empty_library_is_rejected() {
        let err = PaletteLibrary::from_yaml("palettes: []").err().unwrap();
        assert!(matches!(err, LibraryError::Empty));
    }
}
