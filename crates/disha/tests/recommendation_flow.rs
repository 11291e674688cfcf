use chrono::NaiveDate;

use disha::catalog::courses::{ClassLevel, CourseCatalog, Stream};
use disha::catalog::questions::QuestionBank;
use disha::guidance::quiz::domain::{AnswerValue, QuizResponse, QuizState};
use disha::guidance::quiz::AdaptiveQuizEngine;
use disha::guidance::recommend::{
    RecommendationEngine, RecommendationStrategy, StudentProfile, UserType,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

fn profile(class_level: ClassLevel) -> StudentProfile {
    StudentProfile {
        class_level,
        user_type: UserType::Student,
    }
}

#[test]
fn quiz_traits_flow_into_a_science_recommendation() {
    let quiz = AdaptiveQuizEngine::new(QuestionBank::standard());
    let mut state = QuizState::new();

    // A short, science-leaning session recorded by the caller's loop.
    for (id, answer) in [
        ("base-activities", AnswerValue::Choice("experiment".to_string())),
        ("base-maths", AnswerValue::Rating(5)),
        ("inv-why", AnswerValue::Rating(5)),
        ("inv-data", AnswerValue::Rating(5)),
        ("inv-lab", AnswerValue::Rating(5)),
    ] {
        quiz.record_answer(&mut state, QuizResponse::new(id, answer));
    }

    let matcher = RecommendationEngine::new(CourseCatalog::standard());
    let recommendation = matcher
        .recommend(
            &state.responses,
            &profile(ClassLevel::AfterTwelfth),
            Some(&state.traits),
            today(),
        )
        .expect("recommendation for an answered quiz");

    assert_eq!(recommendation.strategy, RecommendationStrategy::TraitVector);
    assert_eq!(recommendation.stream, Stream::Science);
    assert!(recommendation.match_score <= 100);
    assert!(!recommendation.reasons.is_empty());
    assert!(recommendation.reasons.len() <= 4);
    assert!(recommendation.alternatives.len() <= 3);
    assert!(!recommendation.alternatives.contains(&recommendation.course));
    assert_eq!(recommendation.generated_on, today());
}

#[test]
fn legacy_answer_sets_still_get_a_recommendation() {
    let matcher = RecommendationEngine::new(CourseCatalog::standard());
    let responses = vec![
        QuizResponse::new("old-q1", AnswerValue::Choice("I want to be a doctor".to_string())),
        QuizResponse::new("old-q2", AnswerValue::Choice("helping patients".to_string())),
        QuizResponse::new("old-q3", AnswerValue::Choice("biology is my favourite".to_string())),
    ];

    let recommendation = matcher
        .recommend(&responses, &profile(ClassLevel::AfterTwelfth), None, today())
        .expect("keyword-path recommendation");

    assert_eq!(
        recommendation.strategy,
        RecommendationStrategy::LegacyKeyword
    );
    assert_eq!(recommendation.stream, Stream::Science);
    // "helping", "biology" and "patient" boost the medical courses well past
    // the engineering ones.
    let course = matcher
        .catalog()
        .get(&recommendation.course)
        .expect("recommended course exists in catalog");
    assert_eq!(course.stream, Stream::Science);
}

#[test]
fn recommendation_is_deterministic_across_calls() {
    let matcher = RecommendationEngine::new(CourseCatalog::standard());
    let responses = vec![QuizResponse::new(
        "q1",
        AnswerValue::Choice("technology and coding".to_string()),
    )];

    let first = matcher.recommend(&responses, &profile(ClassLevel::AfterTwelfth), None, today());
    let second = matcher.recommend(&responses, &profile(ClassLevel::AfterTwelfth), None, today());
    assert_eq!(first, second);
}
