use std::collections::BTreeMap;

use disha::catalog::questions::{QuestionBank, QuestionDefinition, QuestionKind};
use disha::guidance::quiz::domain::{AnswerValue, QuizPhase, QuizResponse, QuizState, TraitCategory};
use disha::guidance::quiz::{score_traits, AdaptiveQuizEngine};

/// Answer like a student with a strong investigative leaning: top marks for
/// analysis-flavoured questions, low marks otherwise.
fn investigative_answer(question: &QuestionDefinition) -> AnswerValue {
    match question.kind {
        QuestionKind::Rating => {
            let favors_investigative = question
                .rating_weights
                .as_ref()
                .map(|weights| weights.investigative >= 4.0)
                .unwrap_or(false);
            AnswerValue::Rating(if favors_investigative { 5 } else { 1 })
        }
        QuestionKind::SingleChoice | QuestionKind::MultiChoice => {
            let best = question
                .options
                .iter()
                .max_by(|a, b| a.weights.investigative.total_cmp(&b.weights.investigative))
                .expect("choice question has options");
            AnswerValue::Choice(best.value.clone())
        }
        QuestionKind::Distribution => {
            let best = question
                .options
                .iter()
                .max_by(|a, b| a.weights.investigative.total_cmp(&b.weights.investigative))
                .expect("distribution question has options");
            let mut shares = BTreeMap::new();
            shares.insert(best.value.clone(), 10.0);
            AnswerValue::Distribution(shares)
        }
    }
}

#[test]
fn full_session_terminates_with_a_dominant_trait() {
    let engine = AdaptiveQuizEngine::new(QuestionBank::standard());
    let mut state = QuizState::new();

    assert_eq!(engine.phase(&state), QuizPhase::Baseline);

    let mut presented = Vec::new();
    while let Some(question) = engine.select_next(&state) {
        assert!(
            presented.len() < 20,
            "quiz failed to terminate: {presented:?}"
        );
        presented.push(question.id.clone());
        let answer = investigative_answer(question);
        let response = QuizResponse {
            question: question.id.clone(),
            answer,
        };
        engine.record_answer(&mut state, response);
    }

    assert_eq!(engine.phase(&state), QuizPhase::Complete);
    assert!(state.question_count >= engine.config().min_questions);
    assert!(state.question_count <= engine.config().max_questions);

    // No question is ever presented twice.
    let mut unique = presented.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), presented.len());

    let (dominant, score) = state.traits.dominant();
    assert_eq!(dominant, TraitCategory::Investigative);
    assert!(score > 0.0);

    // The state vector is exactly what a fresh rescore of the history gives.
    assert_eq!(state.traits, score_traits(&state.responses, engine.bank()));
}

#[test]
fn baseline_questions_come_first_and_in_order() {
    let engine = AdaptiveQuizEngine::new(QuestionBank::standard());
    let mut state = QuizState::new();

    let baseline_ids: Vec<_> = engine
        .bank()
        .baseline
        .iter()
        .map(|question| question.id.clone())
        .collect();

    for expected in &baseline_ids {
        let question = engine.select_next(&state).expect("baseline question");
        assert_eq!(&question.id, expected);
        let answer = investigative_answer(question);
        let response = QuizResponse {
            question: question.id.clone(),
            answer,
        };
        engine.record_answer(&mut state, response);
    }

    let next = engine.select_next(&state).expect("deep-dive question");
    assert!(!baseline_ids.contains(&next.id));
}
