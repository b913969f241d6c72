//! Glyph encoding and decoding on top of the tokenizer.
//!
//! Without a glyph font every entry renders as its own token, so
//! `encode` and `decode` both reduce to lowercase normalization. When
//! glyphs are registered, `decode_glyphs` maps them back to Latin.

use crate::symbols::SymbolTable;
use crate::tokenizer::Tokenizer;

/// Encode Latin text into glyph text.
pub fn encode(table: &SymbolTable, input: &str) -> String {
    Tokenizer::new(table)
        .tokenize(input)
        .into_iter()
        .map(|token| {
            if token.is_whitespace() {
                return token.text;
            }
            let lower = token.text.to_lowercase();
            match table.glyph(&lower) {
                Some(glyph) => glyph.to_string(),
                None => lower,
            }
        })
        .collect()
}

/// Normalize text to canonical Latin tokens.
pub fn decode(table: &SymbolTable, input: &str) -> String {
    Tokenizer::new(table)
        .tokenize(input)
        .into_iter()
        .map(|token| {
            if token.is_whitespace() {
                token.text
            } else {
                token.text.to_lowercase()
            }
        })
        .collect()
}

/// Map glyph text back to Latin using the table's registered glyphs.
///
/// Glyphs are matched longest first. Text that is not a registered glyph
/// goes through [`decode`], so with a glyph-less table this equals `decode`.
pub fn decode_glyphs(table: &SymbolTable, input: &str) -> String {
    let mut glyphs: Vec<(Vec<char>, &str)> = table
        .entries()
        .iter()
        .filter_map(|e| {
            e.glyph
                .as_deref()
                .filter(|g| !g.is_empty())
                .map(|g| (g.chars().collect(), e.token.as_str()))
        })
        .collect();

    if glyphs.is_empty() {
        return decode(table, input);
    }
    glyphs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut pending = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        let rest = &chars[pos..];
        match glyphs.iter().find(|(glyph, _)| rest.starts_with(glyph)) {
            Some((glyph, token)) => {
                out.push_str(&decode(table, &pending));
                pending.clear();
                out.push_str(token);
                pos += glyph.len();
            }
            None => {
                pending.push(chars[pos]);
                pos += 1;
            }
        }
    }
    out.push_str(&decode(table, &pending));

    out
}
