//! Core types for the Aurebesh trainer.

use serde::{Deserialize, Serialize};

/// Category of a symbol table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Single,
    Digraph,
    Digit,
    Punct,
}

impl SymbolKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Digraph => "digraph",
            Self::Digit => "digit",
            Self::Punct => "punct",
        }
    }

    /// Number of characters a token of this kind must have.
    pub fn token_len(self) -> usize {
        match self {
            Self::Digraph => 2,
            Self::Single | Self::Digit | Self::Punct => 1,
        }
    }

    /// Display order used by the codex listing and HTML table.
    pub fn display_rank(self) -> u8 {
        match self {
            Self::Digraph => 0,
            Self::Single => 1,
            Self::Digit => 2,
            Self::Punct => 3,
        }
    }
}

/// One entry of the symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    /// Latin token matched by the tokenizer (lowercase).
    pub token: String,
    /// Aurebesh letter name.
    pub name: String,
    pub pronunciation: String,
    pub kind: SymbolKind,
    /// Glyph text when a font or private-use mapping is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SymbolEntry {
    /// Create an entry without glyph or note.
    pub fn new(token: &str, name: &str, pronunciation: &str, kind: SymbolKind) -> Self {
        Self {
            token: token.to_string(),
            name: name.to_string(),
            pronunciation: pronunciation.to_string(),
            kind,
            glyph: None,
            note: None,
        }
    }

    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Whether a learning item belongs to the letter or numeral sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Alphabet,
    Numbers,
}

/// A studyable glyph derived from a symbol table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningItem {
    pub id: u32,
    /// Canonical Latin token.
    pub latin: String,
    pub name: String,
    pub pronunciation: String,
    /// Encoded glyph form shown on study cards and quiz prompts.
    pub symbol: String,
    pub kind: ItemKind,
}
