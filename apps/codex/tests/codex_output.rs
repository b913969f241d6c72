mod common;

use aurebesh_codex::cli::Command;
use common::{render, text};
use pretty_assertions::assert_eq;

#[test]
fn json_lists_every_entry_longest_first() {
    let out = render(Command::Json);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["version"], 1);
    let tokens = json["tokensLongestFirst"].as_array().unwrap();
    assert_eq!(tokens.len(), 56);
    assert!(tokens[..8].iter().all(|t| t.as_str().unwrap().chars().count() == 2));
    assert_eq!(json["byToken"]["a"]["name"], "Aurek");
}

#[test]
fn listing_is_the_default_command() {
    let out = render(Command::default());
    assert!(out.contains("=== Digraphs (double-letter tokens) ==="));
    assert!(out.contains("Tokenizer demo:"));
}

#[test]
fn html_is_a_complete_page() {
    let out = render(Command::Html);
    assert!(out.starts_with("<!doctype html>"));
    assert!(out.trim_end().ends_with("</html>"));
}

#[test]
fn tokenize_prints_a_json_array() {
    let out = render(Command::Tokenize { text: text("Thesh!") });
    assert_eq!(out, "[\"th\",\"e\",\"sh\",\"!\"]\n");
}

#[test]
fn encode_and_decode_normalize_case_without_glyphs() {
    assert_eq!(render(Command::Encode { text: text("THE Ship") }), "the ship\n");
    assert_eq!(render(Command::Decode { text: text("Cherek 42") }), "cherek 42\n");
}

#[test]
fn tracks_show_sections_and_stage_labels() {
    let out = render(Command::Tracks);
    assert!(out.contains("=== Aurebesh (standard): 6 sections, 11 stages ==="));
    assert!(out.contains("=== Double-Letter (double): 4 sections, 7 stages ==="));
    assert!(out.contains("=== Numbers (numbers): 4 sections, 7 stages ==="));
    assert!(out.contains("   1. Aurebesh Section 1 of 6: "));
    assert!(out.contains("  11. Aurebesh Combined Review: 6 sections: "));
}
