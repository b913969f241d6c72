//! Multiple-choice quiz generation and grading.

use crate::types::LearningItem;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Options shown per question, target included.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Above this many letters the quiz draws distractors from its own letters.
const OWN_POOL_THRESHOLD: usize = 3;

/// One glyph prompt with four Latin choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub item: LearningItem,
    pub options: Vec<LearningItem>,
    /// Token the learner picked; set at most once.
    pub selected: Option<String>,
    pub correct: bool,
}

impl Question {
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }
}

/// What happened after asking the quiz to move on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Moved to the question at this index.
    Next(usize),
    /// The last question is answered; call [`Quiz::finalize`].
    Finished,
    /// The current question has not been answered yet.
    AwaitingAnswer,
}

/// An ordered run of questions over a letter set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub letters: Vec<LearningItem>,
    pub questions: Vec<Question>,
    pub index: usize,
    pub mastery_required: bool,
}

impl Quiz {
    /// Build a quiz over `letters` in shuffled order.
    ///
    /// Distractors come from `letters` when it has more than three items,
    /// otherwise from `fallback_pool` (normally every alphabet and number item).
    pub fn build<R>(
        letters: &[LearningItem],
        mastery_required: bool,
        fallback_pool: &[LearningItem],
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let pool = if letters.len() > OWN_POOL_THRESHOLD {
            letters
        } else {
            fallback_pool
        };

        let mut order = letters.to_vec();
        order.shuffle(rng);

        let questions = order
            .into_iter()
            .map(|item| {
                let mut options = pick_distractors(&item, pool, fallback_pool, rng);
                options.push(item.clone());
                options.shuffle(rng);
                Question {
                    item,
                    options,
                    selected: None,
                    correct: false,
                }
            })
            .collect();

        Self {
            letters: letters.to_vec(),
            questions,
            index: 0,
            mastery_required,
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Grade the current question.
    ///
    /// Returns `None` when there is no current question or it was already
    /// answered; the first answer is final.
    pub fn answer(&mut self, token: &str) -> Option<bool> {
        let question = self.questions.get_mut(self.index)?;
        if question.is_answered() {
            return None;
        }

        let correct = token == question.item.latin;
        question.selected = Some(token.to_string());
        question.correct = correct;

        tracing::debug!(
            question = self.index,
            expected = %question.item.latin,
            selected = token,
            correct,
            "answer graded"
        );
        Some(correct)
    }

    /// Move past an answered question.
    pub fn advance(&mut self) -> QuizStep {
        match self.current() {
            None => QuizStep::Finished,
            Some(q) if !q.is_answered() => QuizStep::AwaitingAnswer,
            Some(_) if self.index + 1 < self.questions.len() => {
                self.index += 1;
                QuizStep::Next(self.index)
            }
            Some(_) => QuizStep::Finished,
        }
    }

    /// Score the quiz; unanswered questions count as wrong.
    pub fn finalize(&self) -> QuizResult {
        let total = self.questions.len();
        let correct = self.questions.iter().filter(|q| q.correct).count();
        let pct = percent(correct, total);

        let (right, wrong): (Vec<Question>, Vec<Question>) =
            self.questions.iter().cloned().partition(|q| q.correct);
        let breakdown = wrong.into_iter().chain(right).collect();

        QuizResult {
            correct,
            total,
            pct,
            passed: pct == 100,
            mastery_required: self.mastery_required,
            breakdown,
        }
    }
}

/// Graded outcome of a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub correct: usize,
    pub total: usize,
    /// Rounded percentage; 100 for an empty quiz.
    pub pct: u32,
    pub passed: bool,
    pub mastery_required: bool,
    /// Missed questions first, then correct ones, each in quiz order.
    pub breakdown: Vec<Question>,
}

/// `round(100 * correct / total)`, half rounding up; 100 when `total` is zero.
fn percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    ((200 * correct + total) / (2 * total)) as u32
}

fn pick_distractors<R>(
    target: &LearningItem,
    pool: &[LearningItem],
    fallback_pool: &[LearningItem],
    rng: &mut R,
) -> Vec<LearningItem>
where
    R: Rng + ?Sized,
{
    let wanted = OPTIONS_PER_QUESTION - 1;
    let mut seen: HashSet<&str> = HashSet::from([target.latin.as_str()]);
    let mut picked = Vec::with_capacity(OPTIONS_PER_QUESTION);

    for source in [pool, fallback_pool] {
        let mut candidates: Vec<&LearningItem> =
            source.iter().filter(|i| i.latin != target.latin).collect();
        candidates.shuffle(rng);

        for item in candidates {
            if picked.len() == wanted {
                return picked;
            }
            if seen.insert(item.latin.as_str()) {
                picked.push(item.clone());
            }
        }
        if picked.len() == wanted {
            break;
        }
    }

    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::Curriculum;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn assert_option_integrity(quiz: &Quiz) {
        for q in &quiz.questions {
            assert_eq!(q.options.len(), OPTIONS_PER_QUESTION);
            let tokens: HashSet<&str> = q.options.iter().map(|o| o.latin.as_str()).collect();
            assert_eq!(tokens.len(), OPTIONS_PER_QUESTION);
            assert_eq!(q.options.iter().filter(|o| o.latin == q.item.latin).count(), 1);
        }
    }

    #[test]
    fn every_letter_asked_once() {
        let curriculum = Curriculum::default();
        let letters = &curriculum.alphabet()[..6];
        let quiz = Quiz::build(letters, true, curriculum.all_items(), &mut rng());

        let mut asked: Vec<&str> = quiz.questions.iter().map(|q| q.item.latin.as_str()).collect();
        asked.sort_unstable();
        assert_eq!(asked, vec!["a", "b", "c", "d", "e", "f"]);
        assert_option_integrity(&quiz);
    }

    #[test]
    fn own_pool_used_above_three_letters() {
        let curriculum = Curriculum::default();
        let letters = &curriculum.alphabet()[..4];
        let quiz = Quiz::build(letters, true, curriculum.all_items(), &mut rng());

        let allowed: HashSet<&str> = letters.iter().map(|l| l.latin.as_str()).collect();
        for q in &quiz.questions {
            assert!(q.options.iter().all(|o| allowed.contains(o.latin.as_str())));
        }
    }

    #[test]
    fn tiny_sets_borrow_distractors() {
        let curriculum = Curriculum::default();
        let letters = &curriculum.numbers()[..2];
        let quiz = Quiz::build(letters, false, curriculum.all_items(), &mut rng());
        assert_eq!(quiz.len(), 2);
        assert_option_integrity(&quiz);
    }

    #[test]
    fn duplicate_letters_still_get_distinct_options() {
        let curriculum = Curriculum::default();
        let a = curriculum.alphabet()[0].clone();
        let b = curriculum.alphabet()[1].clone();
        let letters = vec![a.clone(), a.clone(), a, b];
        let quiz = Quiz::build(&letters, false, curriculum.all_items(), &mut rng());
        assert_option_integrity(&quiz);
    }

    #[test]
    fn same_seed_same_quiz() {
        let curriculum = Curriculum::default();
        let letters = curriculum.alphabet();
        let first = Quiz::build(letters, true, curriculum.all_items(), &mut rng());
        let second = Quiz::build(letters, true, curriculum.all_items(), &mut rng());
        assert_eq!(first, second);
    }

    #[test]
    fn first_answer_is_final() {
        let curriculum = Curriculum::default();
        let mut quiz = Quiz::build(&curriculum.alphabet()[..2], true, curriculum.all_items(), &mut rng());
        let target = quiz.current().unwrap().item.latin.clone();

        assert_eq!(quiz.answer("not-a-token"), Some(false));
        assert_eq!(quiz.answer(&target), None);
        assert!(!quiz.questions[0].correct);
        assert_eq!(quiz.questions[0].selected.as_deref(), Some("not-a-token"));
    }

    #[test]
    fn advance_requires_answer() {
        let curriculum = Curriculum::default();
        let mut quiz = Quiz::build(&curriculum.alphabet()[..2], true, curriculum.all_items(), &mut rng());
        assert_eq!(quiz.advance(), QuizStep::AwaitingAnswer);

        let target = quiz.current().unwrap().item.latin.clone();
        quiz.answer(&target);
        assert_eq!(quiz.advance(), QuizStep::Next(1));

        let target = quiz.current().unwrap().item.latin.clone();
        quiz.answer(&target);
        assert_eq!(quiz.advance(), QuizStep::Finished);
        assert_eq!(quiz.index, 1);
    }

    #[test]
    fn one_wrong_answer_fails() {
        let curriculum = Curriculum::default();
        let mut quiz = Quiz::build(&curriculum.alphabet()[..5], true, curriculum.all_items(), &mut rng());
        let mut first_target = None;
        loop {
            let target = quiz.current().unwrap().item.latin.clone();
            if first_target.is_none() {
                first_target = Some(target.clone());
                quiz.answer("zz");
            } else {
                quiz.answer(&target);
            }
            if quiz.advance() == QuizStep::Finished {
                break;
            }
        }

        let result = quiz.finalize();
        assert_eq!(result.correct, 4);
        assert_eq!(result.total, 5);
        assert_eq!(result.pct, 80);
        assert!(!result.passed);
        assert!(result.mastery_required);
        assert_eq!(result.breakdown[0].item.latin, first_target.unwrap());
        assert!(!result.breakdown[0].correct);
        assert!(result.breakdown[1..].iter().all(|q| q.correct));
    }

    #[test]
    fn breakdown_keeps_quiz_order_within_groups() {
        let curriculum = Curriculum::default();
        let mut quiz = Quiz::build(&curriculum.alphabet()[..6], false, curriculum.all_items(), &mut rng());
        let order: Vec<String> = quiz.questions.iter().map(|q| q.item.latin.clone()).collect();

        // Miss questions 1 and 4.
        for i in 0..6 {
            let target = quiz.current().unwrap().item.latin.clone();
            if i == 1 || i == 4 {
                quiz.answer("?");
            } else {
                quiz.answer(&target);
            }
            quiz.advance();
        }

        let breakdown: Vec<String> = quiz
            .finalize()
            .breakdown
            .into_iter()
            .map(|q| q.item.latin)
            .collect();
        let expected = vec![
            order[1].clone(),
            order[4].clone(),
            order[0].clone(),
            order[2].clone(),
            order[3].clone(),
            order[5].clone(),
        ];
        assert_eq!(breakdown, expected);
    }

    #[test]
    fn empty_quiz_passes_with_full_score() {
        let curriculum = Curriculum::default();
        let mut quiz = Quiz::build(&[], true, curriculum.all_items(), &mut rng());
        assert!(quiz.is_empty());
        assert_eq!(quiz.answer("a"), None);
        assert_eq!(quiz.advance(), QuizStep::Finished);

        let result = quiz.finalize();
        assert_eq!((result.correct, result.total, result.pct), (0, 0, 100));
        assert!(result.passed);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(33, 34), 97);
        assert_eq!(percent(34, 34), 100);
    }
}
