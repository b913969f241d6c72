//! Text produced for each subcommand.

use std::fmt::Write as _;

use anyhow::Context;
use aurebesh_core::{
    decode_glyphs, encode, render_html, render_listing, CodexDocument, Curriculum, SymbolTable,
    Tokenizer, TrainerSettings,
};

use crate::cli::Command;

/// Render `command` against `table`. Every result ends with a newline.
pub fn render(
    command: &Command,
    table: &SymbolTable,
    settings: &TrainerSettings,
) -> anyhow::Result<String> {
    let mut out = match command {
        Command::List => render_listing(table),
        Command::Json => CodexDocument::from_table(table)
            .to_json()
            .context("failed to serialize codex")?,
        Command::Html => render_html(table),
        Command::Tracks => render_tracks(&Curriculum::new(table, settings)),
        Command::Tokenize { text } => {
            let tokens = Tokenizer::new(table).tokenize_str(text);
            serde_json::to_string(&tokens).context("failed to serialize tokens")?
        }
        Command::Encode { text } => encode(table, text),
        Command::Decode { text } => decode_glyphs(table, text),
    };

    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn render_tracks(curriculum: &Curriculum) -> String {
    let mut out = String::new();

    for track in curriculum.tracks() {
        let _ = writeln!(
            out,
            "=== {} ({}): {} sections, {} stages ===",
            track.label,
            track.id.as_str(),
            track.section_count(),
            track.stage_count()
        );
        for index in 0..track.stage_count() {
            let items = track.stage_letters(index);
            let letters: Vec<&str> = items.iter().map(|item| item.latin.as_str()).collect();
            let _ = writeln!(
                out,
                "  {:>2}. {}: {}",
                index + 1,
                track.stage_label(index),
                letters.join(" ")
            );
        }
    }

    out
}
