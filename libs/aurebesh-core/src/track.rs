//! Learning tracks and stage progression.
//!
//! A track with `S` sections has `2S - 1` stages: each section on its own,
//! then cumulative reviews `[0,1]`, `[0,1,2]`, ... up to all sections.

use crate::partition::partition;
use crate::types::LearningItem;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Identifier of a built-in learning track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackId {
    Standard,
    Double,
    Pronunciation,
    Numbers,
}

impl TrackId {
    pub const ALL: [TrackId; 4] = [
        Self::Standard,
        Self::Double,
        Self::Pronunciation,
        Self::Numbers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Double => "double",
            Self::Pronunciation => "pronunciation",
            Self::Numbers => "numbers",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(Self::Standard),
            "double" => Some(Self::Double),
            "pronunciation" => Some(Self::Pronunciation),
            "numbers" => Some(Self::Numbers),
            _ => None,
        }
    }
}

/// Section indices studied together in one stage.
pub type Stage = Vec<usize>;

/// Sections and stages for one item subset. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct LearningTrack {
    pub id: TrackId,
    pub label: String,
    pub sections: Vec<Vec<LearningItem>>,
    pub stages: Vec<Stage>,
}

impl LearningTrack {
    pub fn build(
        id: TrackId,
        label: &str,
        items: &[LearningItem],
        section_count: NonZeroUsize,
    ) -> Self {
        let sections: Vec<Vec<LearningItem>> = partition(items, section_count)
            .into_iter()
            .map(<[LearningItem]>::to_vec)
            .collect();
        let stages = build_stages(sections.len());

        Self {
            id,
            label: label.to_string(),
            sections,
            stages,
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn stage(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    /// Letters of every section in the stage, in section order.
    /// Empty once `index` is past the last stage.
    pub fn stage_letters(&self, index: usize) -> Vec<LearningItem> {
        self.stage(index)
            .map(|stage| {
                stage
                    .iter()
                    .flat_map(|&s| self.sections[s].iter().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn stage_label(&self, index: usize) -> String {
        match self.stage(index).map(Vec::as_slice) {
            Some([only]) => format!(
                "{} Section {} of {}",
                self.label,
                only + 1,
                self.section_count()
            ),
            Some(stage) => format!("{} Combined Review: {} sections", self.label, stage.len()),
            None => format!("{} Complete", self.label),
        }
    }

    /// Starting stage for "skip ahead": `increment` clamped to `S - 1`.
    pub fn skip_offset(&self, increment: usize) -> usize {
        increment.min(self.section_count().saturating_sub(1))
    }

    pub fn is_complete(&self, index: usize) -> bool {
        index >= self.stage_count()
    }
}

fn build_stages(section_count: usize) -> Vec<Stage> {
    let individual = (0..section_count).map(|i| vec![i]);
    let cumulative = (2..=section_count).map(|len| (0..len).collect());
    individual.chain(cumulative).collect()
}

/// Where a learner is within a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Progress {
    Study { stage_index: usize },
    Complete,
}

/// Stage position plus the pass/fail transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCursor {
    pub track: TrackId,
    pub stage_index: usize,
}

impl StageCursor {
    /// Cursor at stage 0, or at the clamped skip offset.
    pub fn start(track: &LearningTrack, skip_ahead: bool, skip_increment: usize) -> Self {
        let stage_index = if skip_ahead {
            track.skip_offset(skip_increment)
        } else {
            0
        };
        Self {
            track: track.id,
            stage_index,
        }
    }

    pub fn progress(&self, track: &LearningTrack) -> Progress {
        if track.is_complete(self.stage_index) {
            Progress::Complete
        } else {
            Progress::Study {
                stage_index: self.stage_index,
            }
        }
    }

    /// Apply a quiz outcome: a pass moves one stage on, a fail repeats.
    pub fn record(&mut self, track: &LearningTrack, passed: bool) -> Progress {
        if passed && !track.is_complete(self.stage_index) {
            self.stage_index += 1;
        }
        self.progress(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemKind;
    use pretty_assertions::assert_eq;

    fn items(n: usize) -> Vec<LearningItem> {
        (0..n)
            .map(|i| {
                let latin = ((b'a' + i as u8) as char).to_string();
                LearningItem {
                    id: i as u32 + 1,
                    name: latin.clone(),
                    pronunciation: latin.clone(),
                    symbol: latin.clone(),
                    latin,
                    kind: ItemKind::Alphabet,
                }
            })
            .collect()
    }

    fn sections(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn stage_layout_for_three_sections() {
        let track = LearningTrack::build(TrackId::Standard, "Aurebesh", &items(6), sections(3));
        assert_eq!(
            track.stages,
            vec![vec![0], vec![1], vec![2], vec![0, 1], vec![0, 1, 2]]
        );
    }

    #[test]
    fn stage_count_is_two_s_minus_one() {
        for s in 1..=8 {
            let track = LearningTrack::build(TrackId::Standard, "T", &items(20), sections(s));
            assert_eq!(track.stage_count(), 2 * s - 1);
        }
    }

    #[test]
    fn empty_items_have_no_stages() {
        let track = LearningTrack::build(TrackId::Numbers, "Numbers", &[], sections(4));
        assert_eq!(track.stage_count(), 0);
        assert_eq!(track.skip_offset(2), 0);
    }

    #[test]
    fn stage_letters_follow_section_order() {
        let track = LearningTrack::build(TrackId::Standard, "T", &items(6), sections(3));
        let latin: Vec<String> = track.stage_letters(4).into_iter().map(|i| i.latin).collect();
        assert_eq!(latin, vec!["a", "b", "c", "d", "e", "f"]);
        assert!(track.stage_letters(5).is_empty());
    }

    #[test]
    fn stage_labels() {
        let track = LearningTrack::build(TrackId::Standard, "Aurebesh", &items(6), sections(3));
        assert_eq!(track.stage_label(1), "Aurebesh Section 2 of 3");
        assert_eq!(track.stage_label(3), "Aurebesh Combined Review: 2 sections");
        assert_eq!(track.stage_label(9), "Aurebesh Complete");
    }

    #[test]
    fn skip_offset_is_clamped() {
        let track = LearningTrack::build(TrackId::Double, "Double-Letter", &items(2), sections(4));
        assert_eq!(track.section_count(), 2);
        assert_eq!(track.skip_offset(2), 1);

        let cursor = StageCursor::start(&track, true, 2);
        assert_eq!(cursor.stage_index, 1);
    }

    #[test]
    fn pass_pass_pass_completes_two_section_track() {
        let track = LearningTrack::build(TrackId::Standard, "T", &items(4), sections(2));
        let mut cursor = StageCursor::start(&track, false, 2);

        assert_eq!(cursor.record(&track, true), Progress::Study { stage_index: 1 });
        assert_eq!(cursor.record(&track, true), Progress::Study { stage_index: 2 });
        assert_eq!(cursor.record(&track, true), Progress::Complete);
        assert_eq!(cursor.record(&track, true), Progress::Complete);
        assert_eq!(cursor.stage_index, 3);
    }

    #[test]
    fn fail_repeats_stage() {
        let track = LearningTrack::build(TrackId::Standard, "T", &items(4), sections(2));
        let mut cursor = StageCursor::start(&track, false, 2);
        assert_eq!(cursor.record(&track, false), Progress::Study { stage_index: 0 });
        assert_eq!(cursor.stage_index, 0);
    }

    #[test]
    fn track_id_round_trips_through_str() {
        for id in TrackId::ALL {
            assert_eq!(TrackId::from_str(id.as_str()), Some(id));
        }
        assert_eq!(TrackId::from_str("klingon"), None);
    }
}
