use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{QuizPhase, QuizResponse, QuizState, TraitCategory};
use super::scoring::score_traits;
use crate::catalog::questions::{QuestionBank, QuestionDefinition};

/// Knobs for the adaptive flow. The defaults encode the product rules: three
/// baseline questions, a hard cap of twelve, and an early stop once eight
/// answers are in and one trait clearly dominates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub baseline_count: u32,
    pub min_questions: u32,
    pub max_questions: u32,
    /// Top-vs-second score gap that must be exceeded to stop early.
    pub confidence_gap: f32,
    /// Question count treated as 100% on the progress indicator.
    pub progress_target: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            baseline_count: 3,
            min_questions: 8,
            max_questions: 12,
            confidence_gap: 25.0,
            progress_target: 10,
        }
    }
}

/// Drives one quiz session over a fixed question bank. The engine itself is
/// stateless; all session state lives in the `QuizState` passed in, so the
/// interactive loop (select, present, await answer, record) stays with the
/// caller.
pub struct AdaptiveQuizEngine {
    bank: QuestionBank,
    config: QuizConfig,
}

impl AdaptiveQuizEngine {
    pub fn new(bank: QuestionBank) -> Self {
        Self::with_config(bank, QuizConfig::default())
    }

    pub fn with_config(bank: QuestionBank, config: QuizConfig) -> Self {
        Self { bank, config }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn is_complete(&self, state: &QuizState) -> bool {
        if state.question_count >= self.config.max_questions {
            return true;
        }
        state.question_count >= self.config.min_questions
            && state.traits.top_two_gap() > self.config.confidence_gap
    }

    pub fn phase(&self, state: &QuizState) -> QuizPhase {
        if self.is_complete(state) {
            QuizPhase::Complete
        } else if state.question_count < self.config.baseline_count {
            QuizPhase::Baseline
        } else {
            QuizPhase::DeepDive
        }
    }

    /// The next question to present, or `None` when the quiz is over (either
    /// a stopping rule fired or every reachable pool is exhausted).
    pub fn select_next(&self, state: &QuizState) -> Option<&QuestionDefinition> {
        if self.is_complete(state) {
            return None;
        }

        if state.question_count < self.config.baseline_count {
            if let Some(question) = self.first_unasked(&self.bank.baseline, state) {
                return Some(question);
            }
            // Baseline pool ran short; degrade into deep-dive selection.
        }

        // Top three categories, preferring the least-sampled pool so an
        // under-explored strong trait gets probed before a well-covered one.
        let mut ranked: Vec<(TraitCategory, f32)> =
            state.traits.ranked().into_iter().take(3).collect();
        ranked.sort_by(|a, b| {
            self.asked_from_pool(a.0, state)
                .cmp(&self.asked_from_pool(b.0, state))
                .then(b.1.total_cmp(&a.1))
        });

        for (category, _) in &ranked {
            if let Some(question) = self.first_unasked(self.bank.deep_dive_pool(*category), state) {
                return Some(question);
            }
        }

        // Top-3 pools exhausted; take whatever remains, in category order.
        for category in TraitCategory::ALL {
            if let Some(question) = self.first_unasked(self.bank.deep_dive_pool(category), state) {
                return Some(question);
            }
        }

        debug!(
            answered = state.question_count,
            "question pools exhausted, ending quiz early"
        );
        None
    }

    /// Record one answer: append it, mark the question asked, and rescore the
    /// trait vector from the full history. Never patches incrementally, so a
    /// replayed history always lands on the same vector.
    pub fn record_answer(&self, state: &mut QuizState, response: QuizResponse) {
        state.asked.insert(response.question.clone());
        state.responses.push(response);
        state.traits = score_traits(&state.responses, &self.bank);
        state.question_count += 1;
    }

    /// Progress toward the target length, as a 0-100 percentage.
    pub fn progress(&self, state: &QuizState) -> f32 {
        let target = self.config.progress_target.max(1) as f32;
        (state.question_count as f32 / target * 100.0).min(100.0)
    }

    fn first_unasked<'a>(
        &self,
        pool: &'a [QuestionDefinition],
        state: &QuizState,
    ) -> Option<&'a QuestionDefinition> {
        pool.iter()
            .find(|question| !state.asked.contains(&question.id))
    }

    fn asked_from_pool(&self, category: TraitCategory, state: &QuizState) -> usize {
        self.bank
            .deep_dive_pool(category)
            .iter()
            .filter(|question| state.asked.contains(&question.id))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::questions::QuestionId;
    use crate::guidance::quiz::domain::{AnswerValue, TraitVector};
    use std::collections::BTreeMap;

    fn engine() -> AdaptiveQuizEngine {
        AdaptiveQuizEngine::new(QuestionBank::standard())
    }

    fn state_with(traits: TraitVector, question_count: u32) -> QuizState {
        QuizState {
            traits,
            question_count,
            ..QuizState::new()
        }
    }

    fn mark_asked(state: &mut QuizState, ids: &[&str]) {
        for id in ids {
            state.asked.insert(QuestionId::from(*id));
        }
    }

    #[test]
    fn fresh_state_gets_baseline_questions_in_order() {
        let engine = engine();
        let mut state = QuizState::new();

        let first = engine.select_next(&state).expect("first question");
        assert_eq!(first.id, QuestionId::from("base-activities"));
        assert_eq!(engine.phase(&state), QuizPhase::Baseline);

        engine.record_answer(
            &mut state,
            QuizResponse::new("base-activities", AnswerValue::Choice("build".to_string())),
        );
        let second = engine.select_next(&state).expect("second question");
        assert_eq!(second.id, QuestionId::from("base-weekend"));
    }

    #[test]
    fn no_deep_dive_question_before_baseline_is_answered() {
        let engine = engine();
        let mut state = QuizState::new();

        for _ in 0..3 {
            let question = engine.select_next(&state).expect("baseline question");
            assert!(
                engine.bank().baseline.iter().any(|q| q.id == question.id),
                "expected a baseline question, got {}",
                question.id
            );
            engine.record_answer(&mut state, QuizResponse::new(question.id.0.as_str(), AnswerValue::Rating(3)));
        }

        assert_eq!(engine.phase(&state), QuizPhase::DeepDive);
    }

    #[test]
    fn deep_dive_prefers_least_sampled_of_the_top_three() {
        let engine = engine();
        let traits = TraitVector {
            investigative: 60.0,
            realistic: 30.0,
            conventional: 20.0,
            ..TraitVector::zero()
        };
        let mut state = state_with(traits, 4);
        mark_asked(&mut state, &["inv-why"]);

        // I already has one deep-dive asked; R and C have none, and R scores
        // higher, so the realistic pool is probed next.
        let next = engine.select_next(&state).expect("deep-dive question");
        assert_eq!(next.id, QuestionId::from("real-machines"));
    }

    #[test]
    fn exhausted_top_pools_fall_back_to_remaining_categories() {
        let engine = engine();
        let traits = TraitVector {
            investigative: 60.0,
            realistic: 30.0,
            conventional: 20.0,
            ..TraitVector::zero()
        };
        let mut state = state_with(traits, 7);
        mark_asked(
            &mut state,
            &[
                "inv-why",
                "inv-data",
                "inv-lab",
                "real-machines",
                "real-outdoors",
                "real-project",
                "con-detail",
                "con-routine",
                "con-numbers",
            ],
        );

        let next = engine.select_next(&state).expect("fallback question");
        assert_eq!(next.id, QuestionId::from("art-express"));
    }

    #[test]
    fn quiz_completes_at_the_hard_cap_regardless_of_spread() {
        let engine = engine();
        let state = state_with(TraitVector::zero(), 12);
        assert!(engine.is_complete(&state));
        assert_eq!(engine.phase(&state), QuizPhase::Complete);
        assert!(engine.select_next(&state).is_none());
    }

    #[test]
    fn quiz_stops_early_once_a_trait_clearly_dominates() {
        let engine = engine();
        let traits = TraitVector::new(30.0, 60.0, 20.0, 15.0, 10.0, 5.0);

        // Gap 30 > 25 with 8 answered: stop.
        assert!(engine.is_complete(&state_with(traits, 8)));
        // Same spread but only 7 answered: keep going.
        assert!(!engine.is_complete(&state_with(traits, 7)));
        // Gap of exactly the threshold does not stop.
        let borderline = TraitVector::new(35.0, 60.0, 20.0, 15.0, 10.0, 5.0);
        assert!(!engine.is_complete(&state_with(borderline, 8)));
    }

    #[test]
    fn record_answer_matches_direct_rescore_of_full_history() {
        let engine = engine();
        let mut state = QuizState::new();
        let mut shares = BTreeMap::new();
        shares.insert("documentary".to_string(), 8.0);
        shares.insert("selling".to_string(), 2.0);
        let responses = vec![
            QuizResponse::new("base-activities", AnswerValue::Choice("experiment".to_string())),
            QuizResponse::new("base-weekend", AnswerValue::Distribution(shares)),
            QuizResponse::new("base-maths", AnswerValue::Rating(5)),
            QuizResponse::new("inv-data", AnswerValue::Rating(4)),
        ];

        for response in &responses {
            engine.record_answer(&mut state, response.clone());
        }

        assert_eq!(state.question_count, 4);
        assert_eq!(state.traits, score_traits(&responses, engine.bank()));
    }

    #[test]
    fn empty_bank_simply_ends_the_quiz() {
        let engine = AdaptiveQuizEngine::new(QuestionBank {
            baseline: Vec::new(),
            deep_dive: BTreeMap::new(),
        });
        let state = QuizState::new();
        assert!(engine.select_next(&state).is_none());
    }

    #[test]
    fn progress_is_capped_at_one_hundred() {
        let engine = engine();
        assert_eq!(engine.progress(&state_with(TraitVector::zero(), 5)), 50.0);
        assert_eq!(engine.progress(&state_with(TraitVector::zero(), 12)), 100.0);
    }
}
