//! Command-line arguments.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "aurebesh-codex",
    about = "Aurebesh codex helper: list, export and try out the alphabet",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Subcommand)]
pub enum Command {
    /// Print every letter grouped by kind, with a tokenizer demo
    #[default]
    List,
    /// Print the codex as JSON
    Json,
    /// Print the codex as an HTML table
    Html,
    /// Print the learning tracks and their stages
    Tracks,
    /// Split text into alphabet tokens
    Tokenize { text: String },
    /// Encode Latin text into glyphs
    Encode { text: String },
    /// Normalize glyph or Latin text back to canonical Latin
    Decode { text: String },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Json => "json",
            Self::Html => "html",
            Self::Tracks => "tracks",
            Self::Tokenize { .. } => "tokenize",
            Self::Encode { .. } => "encode",
            Self::Decode { .. } => "decode",
        }
    }
}
