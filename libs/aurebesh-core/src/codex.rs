//! Codex export: the symbol table as JSON, a text listing, or an HTML table.

use crate::symbols::SymbolTable;
use crate::tokenizer::Tokenizer;
use crate::types::{SymbolEntry, SymbolKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

pub const CODEX_VERSION: u32 = 1;

/// Sample sentence for the listing's tokenizer demo.
pub const DEMO_TEXT: &str = "thesh shen cherek ae eo kh ng oo";

/// Entry details keyed by token in a [`CodexDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodexEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
    pub pronunciation: String,
    pub kind: SymbolKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Machine-readable codex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodexDocument {
    pub version: u32,
    pub tokens_longest_first: Vec<String>,
    pub by_token: BTreeMap<String, CodexEntry>,
}

impl CodexDocument {
    pub fn from_table(table: &SymbolTable) -> Self {
        let by_token = table
            .entries()
            .iter()
            .map(|e| {
                (
                    e.token.clone(),
                    CodexEntry {
                        name: e.name.clone(),
                        glyph: e.glyph.clone(),
                        pronunciation: e.pronunciation.clone(),
                        kind: e.kind,
                        note: e.note.clone(),
                    },
                )
            })
            .collect();

        Self {
            version: CODEX_VERSION,
            tokens_longest_first: table.tokens_longest_first().to_vec(),
            by_token,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

const LISTING_GROUPS: [(&str, SymbolKind); 4] = [
    ("Digraphs (double-letter tokens)", SymbolKind::Digraph),
    ("Singles (a-z)", SymbolKind::Single),
    ("Digits (0-9)", SymbolKind::Digit),
    ("Punctuation", SymbolKind::Punct),
];

/// Human-readable listing grouped by kind, with a tokenizer demo.
pub fn render_listing(table: &SymbolTable) -> String {
    let mut out = String::new();

    for (title, kind) in LISTING_GROUPS {
        let _ = writeln!(out, "\n=== {title} ===");
        for e in table.of_kind(kind) {
            let _ = writeln!(out, "{:<4}  {:<10}  {}", e.token, e.name, e.pronunciation);
        }
    }

    let tokens = Tokenizer::new(table).tokenize_str(DEMO_TEXT);
    let _ = writeln!(out, "\nTokenizer demo:");
    let _ = writeln!(out, "  input : {DEMO_TEXT}");
    let _ = writeln!(
        out,
        "  tokens: {}",
        serde_json::to_string(&tokens).unwrap_or_default()
    );

    out
}

/// Standalone HTML page with one row per entry.
pub fn render_html(table: &SymbolTable) -> String {
    let mut entries: Vec<&SymbolEntry> = table.entries().iter().collect();
    entries.sort_by(|a, b| {
        a.kind
            .display_rank()
            .cmp(&b.kind.display_rank())
            .then_with(|| a.token.cmp(&b.token))
    });

    let rows: Vec<String> = entries
        .iter()
        .map(|e| {
            format!(
                "<tr>\n  <td class=\"mono\">{}</td>\n  <td>{}</td>\n  <td>{}</td>\n  <td>{}</td>\n  <td class=\"glyph\">{}</td>\n</tr>",
                escape_html(&e.token),
                escape_html(&e.name),
                escape_html(&e.pronunciation),
                e.kind.as_str(),
                escape_html(e.glyph.as_deref().unwrap_or_default()),
            )
        })
        .collect();

    format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8" />
  <title>Aurebesh Codex</title>
  <style>
    body {{ font-family: system-ui, sans-serif; padding: 24px; }}
    table {{ border-collapse: collapse; width: 100%; }}
    th, td {{ border: 1px solid #ddd; padding: 8px; vertical-align: top; }}
    th {{ text-align: left; }}
    .mono {{ font-family: ui-monospace, monospace; }}
    .glyph {{ font-family: inherit; font-size: 20px; }}
  </style>
</head>
<body>
  <h1>Aurebesh Codex</h1>
  <p>Includes digraphs: {digraphs}.</p>
  <table>
    <thead>
      <tr>
        <th>Token</th>
        <th>Name</th>
        <th>Pronunciation</th>
        <th>Kind</th>
        <th>Glyph (optional)</th>
      </tr>
    </thead>
    <tbody>
{rows}
    </tbody>
  </table>
</body>
</html>
"#,
        digraphs = table
            .of_kind(SymbolKind::Digraph)
            .map(|e| escape_html(&e.token))
            .collect::<Vec<_>>()
            .join(", "),
        rows = rows.join("\n"),
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
