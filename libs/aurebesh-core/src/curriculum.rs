//! Learning items and tracks derived from a symbol table.

use crate::encoding::encode;
use crate::settings::TrainerSettings;
use crate::symbols::SymbolTable;
use crate::track::{LearningTrack, TrackId};
use crate::types::{ItemKind, LearningItem, SymbolEntry, SymbolKind};
use std::collections::HashSet;

/// Digraphs drilled by the pronunciation track.
pub const PRONUNCIATION_FOCUS: [&str; 8] = ["ch", "ae", "eo", "kh", "ng", "oo", "sh", "th"];

const NUMBER_ID_BASE: u32 = 100;

/// Item sets and the four learning tracks built from them.
#[derive(Debug, Clone)]
pub struct Curriculum {
    alphabet: Vec<LearningItem>,
    numbers: Vec<LearningItem>,
    double: Vec<LearningItem>,
    pronunciation: Vec<LearningItem>,
    all_items: Vec<LearningItem>,
    tracks: Vec<LearningTrack>,
}

impl Curriculum {
    pub fn new(table: &SymbolTable, settings: &TrainerSettings) -> Self {
        let alphabet: Vec<LearningItem> = table
            .of_kind(SymbolKind::Single)
            .chain(table.of_kind(SymbolKind::Digraph))
            .enumerate()
            .map(|(idx, entry)| to_item(table, entry, idx as u32 + 1, ItemKind::Alphabet))
            .collect();

        let numbers: Vec<LearningItem> = table
            .of_kind(SymbolKind::Digit)
            .enumerate()
            .map(|(idx, entry)| {
                let id = entry
                    .token
                    .parse::<u32>()
                    .unwrap_or(idx as u32)
                    + NUMBER_ID_BASE;
                to_item(table, entry, id, ItemKind::Numbers)
            })
            .collect();

        let digraphs: HashSet<&str> = table
            .of_kind(SymbolKind::Digraph)
            .map(|e| e.token.as_str())
            .collect();
        let double: Vec<LearningItem> = alphabet
            .iter()
            .filter(|item| digraphs.contains(item.latin.as_str()))
            .cloned()
            .collect();
        let pronunciation: Vec<LearningItem> = alphabet
            .iter()
            .filter(|item| PRONUNCIATION_FOCUS.contains(&item.latin.as_str()))
            .cloned()
            .collect();

        let all_items: Vec<LearningItem> = alphabet.iter().chain(&numbers).cloned().collect();

        let focus_sections = |len: usize| settings.focus_section_cap.min(len);
        let tracks = vec![
            LearningTrack::build(
                TrackId::Standard,
                "Aurebesh",
                &alphabet,
                TrainerSettings::sections(settings.section_count),
            ),
            LearningTrack::build(
                TrackId::Double,
                "Double-Letter",
                &double,
                TrainerSettings::sections(focus_sections(double.len())),
            ),
            LearningTrack::build(
                TrackId::Pronunciation,
                "Pronunciation",
                &pronunciation,
                TrainerSettings::sections(focus_sections(pronunciation.len())),
            ),
            LearningTrack::build(
                TrackId::Numbers,
                "Numbers",
                &numbers,
                TrainerSettings::sections(settings.numbers_section_count),
            ),
        ];

        tracks.iter().for_each(|t| {
            tracing::debug!(
                track = t.id.as_str(),
                sections = t.section_count(),
                stages = t.stage_count(),
                "built learning track"
            );
        });

        Self {
            alphabet,
            numbers,
            double,
            pronunciation,
            all_items,
            tracks,
        }
    }

    pub fn track(&self, id: TrackId) -> &LearningTrack {
        // Tracks are stored in TrackId::ALL order.
        &self.tracks[id as usize]
    }

    pub fn tracks(&self) -> &[LearningTrack] {
        &self.tracks
    }

    /// Singles followed by digraphs.
    pub fn alphabet(&self) -> &[LearningItem] {
        &self.alphabet
    }

    pub fn numbers(&self) -> &[LearningItem] {
        &self.numbers
    }

    pub fn double_letters(&self) -> &[LearningItem] {
        &self.double
    }

    pub fn pronunciation_letters(&self) -> &[LearningItem] {
        &self.pronunciation
    }

    /// Alphabet plus numbers; the distractor pool for small quizzes.
    pub fn all_items(&self) -> &[LearningItem] {
        &self.all_items
    }
}

impl Default for Curriculum {
    fn default() -> Self {
        Self::new(&SymbolTable::aurebesh(), &TrainerSettings::default())
    }
}

fn to_item(table: &SymbolTable, entry: &SymbolEntry, id: u32, kind: ItemKind) -> LearningItem {
    LearningItem {
        id,
        latin: entry.token.clone(),
        name: entry.name.clone(),
        pronunciation: entry.pronunciation.clone(),
        symbol: encode(table, &entry.token),
        kind,
    }
}
