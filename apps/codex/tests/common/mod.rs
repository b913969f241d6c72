//! Shared helpers for codex output tests.

#![allow(dead_code)]

use aurebesh_codex::cli::Command;
use aurebesh_codex::output;
use aurebesh_core::{SymbolTable, TrainerSettings};

/// Render `command` against the standard chart and default settings.
pub fn render(command: Command) -> String {
    output::render(&command, &SymbolTable::aurebesh(), &TrainerSettings::default())
        .expect("render succeeds")
}

pub fn text(s: &str) -> String {
    s.to_string()
}
