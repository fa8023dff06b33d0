use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One meaning of a headword with its grammatical category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub translation: String, // e.g., "突然地"
    #[serde(rename = "partOfSpeech", alias = "type")]
    pub part_of_speech: String, // e.g., "adv"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub phrase: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub sentence: String,
    pub translation: String,
}

/// Basic dictionary entry: a headword and its translations.
///
/// `word` is accepted as an alias of `headword`. A record carrying both keys
/// is rejected as a duplicate field, even when the values agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(alias = "word")]
    pub headword: String,
    pub translations: Vec<Translation>,
}

/// Dictionary entry with pronunciations, related phrases and example sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntryDetailed {
    // same duplicate-key rule as WordEntry
    #[serde(alias = "word")]
    pub headword: String,
    /// US pronunciation (IPA), empty if unknown
    #[serde(rename = "pronunciationUS", alias = "us", default)]
    pub pronunciation_us: String,
    /// UK pronunciation (IPA), empty if unknown
    #[serde(rename = "pronunciationUK", alias = "uk", default)]
    pub pronunciation_uk: String,
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
    #[serde(default)]
    pub sentences: Vec<Sentence>,
}

/// Either entry shape, as carried by a loaded dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Basic(WordEntry),
    Detailed(WordEntryDetailed),
}

impl Entry {
    pub fn headword(&self) -> &str {
        match self {
            Entry::Basic(e) => &e.headword,
            Entry::Detailed(e) => &e.headword,
        }
    }

    pub fn translations(&self) -> &[Translation] {
        match self {
            Entry::Basic(e) => &e.translations,
            Entry::Detailed(e) => &e.translations,
        }
    }
}

impl From<WordEntry> for Entry {
    fn from(entry: WordEntry) -> Self {
        Entry::Basic(entry)
    }
}

impl From<WordEntryDetailed> for Entry {
    fn from(entry: WordEntryDetailed) -> Self {
        Entry::Detailed(entry)
    }
}

/// Which shape a record should be decoded into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryShape {
    Basic,
    Detailed,
    /// Detailed if the record has any detailed-only field, basic otherwise
    #[default]
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown entry shape: {0} (expected basic, detailed or auto)")]
pub struct ParseShapeError(pub String);

impl FromStr for EntryShape {
    type Err = ParseShapeError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(EntryShape::Basic),
            "detailed" => Ok(EntryShape::Detailed),
            "auto" => Ok(EntryShape::Auto),
            _ => Err(ParseShapeError(s.to_string())),
        }
    }
}

/// Display-area measurements taken once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportInsets {
    pub window_height: u32,
    pub window_width: u32,
    /// Height left for content below the navigation bar
    pub panel_height: u32,
}
