//! Core library for the Aurebesh memorization trainer.
//!
//! Provides:
//! - Symbol table for letters, digraphs, digits and punctuation
//! - Longest-match tokenizer and glyph encoder/decoder
//! - Section partitioning and progressive learning tracks
//! - Multiple-choice quiz generation and grading
//! - Session controller with cancellable study/answer timers
//! - Codex export (JSON, text listing, HTML)

pub mod codex;
pub mod curriculum;
pub mod encoding;
pub mod error;
pub mod partition;
pub mod quiz;
pub mod session;
pub mod settings;
pub mod symbols;
pub mod timer;
pub mod tokenizer;
pub mod track;
pub mod types;

pub use codex::{render_html, render_listing, CodexDocument};
pub use curriculum::Curriculum;
pub use encoding::{decode, decode_glyphs, encode};
pub use error::{Result, SettingsError, SymbolError};
pub use partition::partition;
pub use quiz::{Question, Quiz, QuizResult, QuizStep};
pub use session::{ExtraSet, Mode, Screen, Session, SessionState, SessionView};
pub use settings::TrainerSettings;
pub use symbols::SymbolTable;
pub use timer::{TimerDriver, TimerEvent, TimerId, TimerLog, TimerPurpose};
pub use tokenizer::{Token, TokenKind, Tokenizer};
pub use track::{LearningTrack, Progress, StageCursor, TrackId};
pub use types::{ItemKind, LearningItem, SymbolEntry, SymbolKind};
