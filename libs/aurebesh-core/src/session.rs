//! Study/quiz session controller.
//!
//! `Session` owns all mutable trainer state. A renderer reads
//! [`Session::view`] and reports user actions through the methods here;
//! timers come back through [`Session::on_timer`].
//!
//! At most one timer is armed at a time: every screen change cancels it
//! and arming a new one replaces it.

use crate::curriculum::Curriculum;
use crate::quiz::{Quiz, QuizResult, QuizStep};
use crate::settings::TrainerSettings;
use crate::timer::{TimerDriver, TimerId, TimerPurpose};
use crate::track::{LearningTrack, Progress, StageCursor, TrackId};
use crate::types::LearningItem;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Screen currently shown to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Menu,
    LearnEntry,
    Study,
    Quiz,
    Result,
    Complete,
    QuizSetup,
}

/// Learn mode gates progress on mastery; quiz-only mode does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Learn,
    QuizOnly,
}

/// Optional item sets that can be added to a quiz-only run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraSet {
    Double,
    Pronunciation,
    Numbers,
}

/// Checkbox state of the quiz-only setup screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSetup {
    /// One flag per standard-track section.
    pub sections: Vec<bool>,
    pub double: bool,
    pub pronunciation: bool,
    pub numbers: bool,
    pub include_study_preview: bool,
}

impl QuizSetup {
    fn new(section_count: usize) -> Self {
        Self {
            sections: vec![false; section_count],
            double: false,
            pronunciation: false,
            numbers: false,
            include_study_preview: false,
        }
    }

    fn extra_mut(&mut self, set: ExtraSet) -> &mut bool {
        match set {
            ExtraSet::Double => &mut self.double,
            ExtraSet::Pronunciation => &mut self.pronunciation,
            ExtraSet::Numbers => &mut self.numbers,
        }
    }
}

/// Mutable state of the single active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub screen: Screen,
    pub mode: Mode,
    pub cursor: StageCursor,
    pub study_letters: Vec<LearningItem>,
    pub study_label: String,
    pub remaining_seconds: u32,
    pub quiz: Option<Quiz>,
    pub result: Option<QuizResult>,
    pub setup: QuizSetup,
    pub armed: Option<(TimerId, TimerPurpose)>,
}

/// The question currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    /// 1-based position.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub correct: bool,
}

/// Read-only snapshot for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub screen: Screen,
    pub mode: Mode,
    pub track: TrackId,
    pub stage_index: usize,
    pub stage_count: usize,
    pub study_label: String,
    pub study_letters: Vec<LearningItem>,
    pub remaining_seconds: u32,
    pub question: Option<QuestionView>,
    pub result: Option<QuizResult>,
    pub setup: QuizSetup,
}

/// Controller for one learner's study/quiz loop.
pub struct Session<T, R = ThreadRng> {
    curriculum: Curriculum,
    settings: TrainerSettings,
    state: SessionState,
    timers: T,
    rng: R,
    next_timer: u64,
}

impl<T: TimerDriver> Session<T, ThreadRng> {
    /// Session over the standard chart with default settings.
    pub fn standard(timers: T) -> Self {
        Self::new(Curriculum::default(), TrainerSettings::default(), timers, rand::rng())
    }
}

impl<T, R> Session<T, R>
where
    T: TimerDriver,
    R: Rng,
{
    pub fn new(curriculum: Curriculum, settings: TrainerSettings, timers: T, rng: R) -> Self {
        let standard = curriculum.track(TrackId::Standard);
        let state = SessionState {
            screen: Screen::Menu,
            mode: Mode::Learn,
            cursor: StageCursor::start(standard, false, 0),
            study_letters: Vec::new(),
            study_label: String::new(),
            remaining_seconds: settings.study_seconds,
            quiz: None,
            result: None,
            setup: QuizSetup::new(standard.section_count()),
            armed: None,
        };

        Self {
            curriculum,
            settings,
            state,
            timers,
            rng,
            next_timer: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    pub fn settings(&self) -> &TrainerSettings {
        &self.settings
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    pub fn active_track(&self) -> &LearningTrack {
        self.curriculum.track(self.state.cursor.track)
    }

    /// Switch screens, cancelling any armed timer.
    pub fn go_to(&mut self, screen: Screen) {
        self.disarm();
        self.state.screen = screen;
    }

    pub fn return_to_menu(&mut self) {
        self.go_to(Screen::Menu);
    }

    pub fn open_learning_entry(&mut self) {
        self.go_to(Screen::LearnEntry);
    }

    /// Start a learning track at stage 0 or at its skip-ahead offset.
    pub fn launch_learning(&mut self, track: TrackId, skip_ahead: bool) {
        self.state.mode = Mode::Learn;
        self.state.cursor = StageCursor::start(
            self.curriculum.track(track),
            skip_ahead,
            self.settings.skip_section_increment,
        );
        tracing::info!(
            track = track.as_str(),
            stage = self.state.cursor.stage_index,
            "learning launched"
        );
        self.study_current_stage();
    }

    /// Show `letters` and arm the study countdown.
    pub fn begin_study(&mut self, letters: Vec<LearningItem>, label: String) {
        self.go_to(Screen::Study);
        tracing::debug!(label = %label, letters = letters.len(), "study begun");
        self.state.study_letters = letters;
        self.state.study_label = label;
        self.state.remaining_seconds = self.settings.study_seconds;
        self.arm(TimerPurpose::StudyCountdown, self.settings.study_duration());
    }

    /// Update the displayed countdown while studying.
    pub fn tick(&mut self, remaining_seconds: u32) {
        if self.state.screen == Screen::Study {
            self.state.remaining_seconds = remaining_seconds.min(self.settings.study_seconds);
        }
    }

    /// Build a quiz over `letters` and show its first question.
    pub fn start_quiz(&mut self, letters: &[LearningItem], mastery_required: bool) {
        let quiz = Quiz::build(
            letters,
            mastery_required,
            self.curriculum.all_items(),
            &mut self.rng,
        );
        tracing::debug!(questions = quiz.len(), mastery_required, "quiz started");

        let empty = quiz.is_empty();
        self.state.quiz = Some(quiz);
        self.go_to(Screen::Quiz);
        if empty {
            self.finalize_quiz();
        }
    }

    /// Grade the current question once and arm the pause before moving on.
    ///
    /// Returns `None` when the answer was ignored.
    pub fn submit_answer(&mut self, token: &str) -> Option<bool> {
        if self.state.screen != Screen::Quiz {
            return None;
        }
        let correct = self.state.quiz.as_mut()?.answer(token)?;
        self.arm(TimerPurpose::AnswerPause, self.settings.answer_delay());
        Some(correct)
    }

    /// Handle a fired timer. Stale or unknown ids are ignored.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        let purpose = match self.state.armed {
            Some((armed, purpose)) if armed == id => purpose,
            _ => {
                tracing::debug!(timer = id.0, "stale timer ignored");
                return false;
            }
        };
        self.state.armed = None;

        match purpose {
            TimerPurpose::StudyCountdown => {
                self.state.remaining_seconds = 0;
                let letters = self.state.study_letters.clone();
                let mastery = self.state.mode == Mode::Learn;
                self.start_quiz(&letters, mastery);
            }
            TimerPurpose::AnswerPause => {
                let step = match self.state.quiz.as_mut() {
                    Some(quiz) => quiz.advance(),
                    None => return false,
                };
                if step == QuizStep::Finished {
                    self.finalize_quiz();
                }
            }
        }
        true
    }

    /// Act on the last result: retry, advance, finish, or leave quiz-only.
    pub fn continue_from_result(&mut self) {
        if self.state.screen != Screen::Result {
            return;
        }
        let Some(result) = self.state.result.as_ref() else {
            return;
        };

        if self.state.mode == Mode::QuizOnly {
            self.return_to_menu();
            return;
        }

        let passed = result.passed || !result.mastery_required;
        let track = self.curriculum.track(self.state.cursor.track);
        match self.state.cursor.record(track, passed) {
            Progress::Complete => {
                tracing::info!(track = track.id.as_str(), "track complete");
                self.go_to(Screen::Complete);
            }
            Progress::Study { stage_index } => {
                if passed {
                    tracing::info!(stage = stage_index, "stage advanced");
                } else {
                    tracing::info!(stage = stage_index, "stage repeated");
                }
                self.study_current_stage();
            }
        }
    }

    pub fn open_quiz_setup(&mut self) {
        self.state.mode = Mode::QuizOnly;
        self.go_to(Screen::QuizSetup);
    }

    pub fn set_section_selected(&mut self, section: usize, selected: bool) {
        if let Some(flag) = self.state.setup.sections.get_mut(section) {
            *flag = selected;
        }
    }

    pub fn set_extra(&mut self, set: ExtraSet, selected: bool) {
        *self.state.setup.extra_mut(set) = selected;
    }

    pub fn set_include_study_preview(&mut self, include: bool) {
        self.state.setup.include_study_preview = include;
    }

    /// Letters picked on the setup screen, deduplicated by token.
    pub fn quiz_only_letters(&self) -> Vec<LearningItem> {
        let setup = &self.state.setup;
        let standard = self.curriculum.track(TrackId::Standard);

        let mut picked: Vec<LearningItem> = setup
            .sections
            .iter()
            .zip(&standard.sections)
            .filter(|(checked, _)| **checked)
            .flat_map(|(_, section)| section.iter().cloned())
            .collect();

        if picked.is_empty() {
            picked = self.curriculum.alphabet().to_vec();
        }
        if setup.double {
            picked.extend_from_slice(self.curriculum.double_letters());
        }
        if setup.pronunciation {
            picked.extend_from_slice(self.curriculum.pronunciation_letters());
        }
        if setup.numbers {
            picked.extend_from_slice(self.curriculum.numbers());
        }

        let mut seen = HashSet::new();
        picked.retain(|item| seen.insert(item.latin.clone()));
        picked
    }

    /// Start the quiz-only run, with a study preview if requested.
    pub fn launch_quiz_only(&mut self) {
        let picked = self.quiz_only_letters();
        self.state.mode = Mode::QuizOnly;

        if self.state.setup.include_study_preview {
            let label = format!("Quiz Prep • {} glyphs", picked.len());
            self.begin_study(picked, label);
        } else {
            self.start_quiz(&picked, false);
        }
    }

    pub fn view(&self) -> SessionView {
        let track = self.active_track();
        let question = self.state.quiz.as_ref().and_then(|quiz| {
            quiz.current().map(|q| QuestionView {
                number: quiz.index + 1,
                total: quiz.len(),
                prompt: q.item.symbol.clone(),
                options: q.options.iter().map(|o| o.latin.clone()).collect(),
                selected: q.selected.clone(),
                correct: q.correct,
            })
        });

        SessionView {
            screen: self.state.screen,
            mode: self.state.mode,
            track: track.id,
            stage_index: self.state.cursor.stage_index,
            stage_count: track.stage_count(),
            study_label: self.state.study_label.clone(),
            study_letters: self.state.study_letters.clone(),
            remaining_seconds: self.state.remaining_seconds,
            question: if self.state.screen == Screen::Quiz {
                question
            } else {
                None
            },
            result: self.state.result.clone(),
            setup: self.state.setup.clone(),
        }
    }

    fn study_current_stage(&mut self) {
        let track = self.curriculum.track(self.state.cursor.track);
        let index = self.state.cursor.stage_index;
        if track.is_complete(index) {
            self.go_to(Screen::Complete);
            return;
        }
        let letters = track.stage_letters(index);
        let label = track.stage_label(index);
        self.begin_study(letters, label);
    }

    fn finalize_quiz(&mut self) {
        let Some(quiz) = self.state.quiz.as_ref() else {
            return;
        };
        let result = quiz.finalize();
        tracing::info!(
            correct = result.correct,
            total = result.total,
            pct = result.pct,
            passed = result.passed,
            "quiz finished"
        );
        self.state.result = Some(result);
        self.go_to(Screen::Result);
    }

    fn arm(&mut self, purpose: TimerPurpose, after: Duration) {
        self.disarm();
        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        self.timers.arm(id, after);
        self.state.armed = Some((id, purpose));
    }

    fn disarm(&mut self) {
        if let Some((id, _)) = self.state.armed.take() {
            self.timers.cancel(id);
        }
    }
}
