//! Symbol table mapping Latin tokens to Aurebesh letters.
//!
//! The standard chart has the 26 single letters, eight digraphs
//! (`ch ae eo kh ng oo sh th`), the ten digits and a handful of
//! punctuation marks. Glyphs are optional: without a glyph font the
//! encoder falls back to the token itself.

use crate::error::{Result, SymbolError};
use crate::types::{SymbolEntry, SymbolKind};
use std::collections::HashMap;

const STANDARD_CHART: &[(&str, &str, &str, SymbolKind)] = &[
    ("a", "Aurek", "OR-ek", SymbolKind::Single),
    ("b", "Besh", "besh", SymbolKind::Single),
    ("c", "Cresh", "kresh", SymbolKind::Single),
    ("d", "Dorn", "dorn", SymbolKind::Single),
    ("e", "Esk", "esk", SymbolKind::Single),
    ("f", "Forn", "forn", SymbolKind::Single),
    ("g", "Grek", "grek", SymbolKind::Single),
    ("h", "Herf", "herf", SymbolKind::Single),
    ("i", "Isk", "isk", SymbolKind::Single),
    ("j", "Jenth", "jenth", SymbolKind::Single),
    ("k", "Krill", "krill", SymbolKind::Single),
    ("l", "Leth", "leth", SymbolKind::Single),
    ("m", "Mern", "mern", SymbolKind::Single),
    ("n", "Nern", "nern", SymbolKind::Single),
    ("o", "Osk", "osk", SymbolKind::Single),
    ("p", "Peth", "peth", SymbolKind::Single),
    ("q", "Qek", "kek", SymbolKind::Single),
    ("r", "Resh", "resh", SymbolKind::Single),
    ("s", "Senth", "senth", SymbolKind::Single),
    ("t", "Trill", "trill", SymbolKind::Single),
    ("u", "Usk", "usk", SymbolKind::Single),
    ("v", "Vev", "vev", SymbolKind::Single),
    ("w", "Wesk", "wesk", SymbolKind::Single),
    ("x", "Xesh", "zesh / kesh", SymbolKind::Single),
    ("y", "Yirt", "yirt", SymbolKind::Single),
    ("z", "Zerek", "ZEH-rek", SymbolKind::Single),
    ("ch", "Cherek", "CHER-ek", SymbolKind::Digraph),
    ("ae", "Enth", "enth (as 'ae')", SymbolKind::Digraph),
    ("eo", "Onith", "OH-nith", SymbolKind::Digraph),
    ("kh", "Krenth", "kren-th (kh)", SymbolKind::Digraph),
    ("ng", "Nen", "nen (ng)", SymbolKind::Digraph),
    ("oo", "Orenth", "OR-enth (oo)", SymbolKind::Digraph),
    ("sh", "Shen", "shen (sh)", SymbolKind::Digraph),
    ("th", "Thesh", "thesh (th)", SymbolKind::Digraph),
    ("0", "Digit 0", "zero", SymbolKind::Digit),
    ("1", "Digit 1", "one", SymbolKind::Digit),
    ("2", "Digit 2", "two", SymbolKind::Digit),
    ("3", "Digit 3", "three", SymbolKind::Digit),
    ("4", "Digit 4", "four", SymbolKind::Digit),
    ("5", "Digit 5", "five", SymbolKind::Digit),
    ("6", "Digit 6", "six", SymbolKind::Digit),
    ("7", "Digit 7", "seven", SymbolKind::Digit),
    ("8", "Digit 8", "eight", SymbolKind::Digit),
    ("9", "Digit 9", "nine", SymbolKind::Digit),
    (".", "Period", "period", SymbolKind::Punct),
    (",", "Comma", "comma", SymbolKind::Punct),
    ("?", "Question mark", "question mark", SymbolKind::Punct),
    ("!", "Exclamation", "exclamation", SymbolKind::Punct),
    (":", "Colon", "colon", SymbolKind::Punct),
    (";", "Semicolon", "semicolon", SymbolKind::Punct),
    ("-", "Hyphen", "hyphen", SymbolKind::Punct),
    ("\"", "Quote", "quote", SymbolKind::Punct),
    ("'", "Apostrophe", "apostrophe", SymbolKind::Punct),
    ("(", "Left parenthesis", "left paren", SymbolKind::Punct),
    (")", "Right parenthesis", "right paren", SymbolKind::Punct),
    ("/", "Slash", "slash", SymbolKind::Punct),
];

/// Validated, immutable registry of symbol entries.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    by_token: HashMap<String, usize>,
    longest_first: Vec<String>,
}

impl SymbolTable {
    /// Build a table from entries, rejecting malformed or duplicate tokens.
    pub fn new(entries: Vec<SymbolEntry>) -> Result<Self> {
        let mut by_token = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            validate_entry(entry)?;
            if by_token.insert(entry.token.clone(), idx).is_some() {
                return Err(SymbolError::DuplicateToken {
                    token: entry.token.clone(),
                });
            }
        }

        // Stable sort keeps table order among equal lengths.
        let mut longest_first: Vec<String> = entries.iter().map(|e| e.token.clone()).collect();
        longest_first.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        Ok(Self {
            entries,
            by_token,
            longest_first,
        })
    }

    /// The standard Aurebesh chart.
    pub fn aurebesh() -> Self {
        let entries = STANDARD_CHART
            .iter()
            .map(|&(token, name, pronunciation, kind)| {
                SymbolEntry::new(token, name, pronunciation, kind)
            })
            .collect();
        Self::new(entries).expect("standard chart is well-formed")
    }

    /// Look up an entry by its canonical (lowercase) token.
    pub fn get(&self, token: &str) -> Option<&SymbolEntry> {
        self.by_token.get(token).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, token: &str) -> bool {
        self.by_token.contains_key(token)
    }

    /// Glyph registered for a token, if any.
    pub fn glyph(&self, token: &str) -> Option<&str> {
        self.get(token).and_then(|e| e.glyph.as_deref())
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    /// Entries of one kind, in table order.
    pub fn of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    /// Tokens sorted by descending length, table order among ties.
    pub fn tokens_longest_first(&self) -> &[String] {
        &self.longest_first
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::aurebesh()
    }
}

fn validate_entry(entry: &SymbolEntry) -> Result<()> {
    let token = entry.token.as_str();

    if token.is_empty() {
        return Err(SymbolError::EmptyToken {
            name: entry.name.clone(),
        });
    }
    if token.chars().any(char::is_whitespace) {
        return Err(SymbolError::Whitespace {
            token: token.to_string(),
        });
    }
    if token.chars().count() != entry.kind.token_len() {
        return Err(SymbolError::InvalidLength {
            token: token.to_string(),
            kind: entry.kind.as_str(),
            expected: entry.kind.token_len(),
        });
    }
    if token.to_lowercase() != token {
        return Err(SymbolError::NotLowercase {
            token: token.to_string(),
        });
    }
    if entry.kind == SymbolKind::Digit && !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(SymbolError::InvalidDigit {
            token: token.to_string(),
        });
    }

    Ok(())
}
