//! Longest-match tokenizer for Latin text.
//!
//! # Rules
//! - Whitespace is emitted one character at a time, never matched.
//! - Otherwise the longest table token matching the case-folded input wins
//!   (`th` beats `t` + `h`).
//! - Characters with no matching token pass through as literals.
//!
//! ```
//! use aurebesh_core::{SymbolTable, Tokenizer};
//!
//! let table = SymbolTable::aurebesh();
//! let tokens = Tokenizer::new(&table).tokenize("thesh");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
//! assert_eq!(texts, ["th", "e", "sh"]);
//! ```

use crate::symbols::SymbolTable;
use serde::{Deserialize, Serialize};

/// How a token was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Matched a symbol table entry; text is the canonical lowercase token.
    Symbol,
    /// A single whitespace character, verbatim.
    Whitespace,
    /// A single character with no table entry, verbatim.
    Literal,
}

/// One unit of tokenized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

/// Scanner over a borrowed symbol table.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    table: &'a SymbolTable,
}

impl<'a> Tokenizer<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    /// Split `input` into tokens, left to right.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let chars: Vec<char> = input.chars().collect();
        let mut out = Vec::with_capacity(chars.len());
        let mut pos = 0;

        while pos < chars.len() {
            let ch = chars[pos];

            if ch.is_whitespace() {
                out.push(Token {
                    text: ch.to_string(),
                    kind: TokenKind::Whitespace,
                });
                pos += 1;
                continue;
            }

            match self.match_at(&chars[pos..]) {
                Some((token, consumed)) => {
                    out.push(Token {
                        text: token.to_string(),
                        kind: TokenKind::Symbol,
                    });
                    pos += consumed;
                }
                None => {
                    out.push(Token {
                        text: ch.to_string(),
                        kind: TokenKind::Literal,
                    });
                    pos += 1;
                }
            }
        }

        out
    }

    /// Tokenize and return only the token texts.
    pub fn tokenize_str(&self, input: &str) -> Vec<String> {
        self.tokenize(input).into_iter().map(|t| t.text).collect()
    }

    /// First (longest) table token matching the start of `rest`, with the
    /// number of input characters it covers.
    fn match_at(&self, rest: &[char]) -> Option<(&'a str, usize)> {
        self.table
            .tokens_longest_first()
            .iter()
            .find(|token| starts_with_folded(rest, token))
            .map(|token| (token.as_str(), token.chars().count()))
    }
}

/// Case-insensitive prefix test, folding one input character per token character.
fn starts_with_folded(rest: &[char], token: &str) -> bool {
    let mut input = rest.iter();
    for expected in token.chars() {
        let Some(&actual) = input.next() else {
            return false;
        };
        if !folds_to(actual, expected) {
            return false;
        }
    }
    true
}

fn folds_to(actual: char, expected: char) -> bool {
    if actual == expected {
        return true;
    }
    let mut lower = actual.to_lowercase();
    lower.next() == Some(expected) && lower.next().is_none()
}
