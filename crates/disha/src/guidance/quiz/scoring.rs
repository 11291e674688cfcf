use tracing::debug;

use super::domain::{AnswerValue, QuizResponse, TraitVector};
use crate::catalog::questions::{QuestionBank, QuestionDefinition};

/// Fold an ordered response history into the six trait totals.
///
/// Pure summation: any permutation of the same responses produces the same
/// vector, and replaying a stored history is idempotent. Responses whose
/// question id no longer resolves in the bank are skipped, which tolerates
/// banks that drifted between versions.
pub fn score_traits(responses: &[QuizResponse], bank: &QuestionBank) -> TraitVector {
    let mut traits = TraitVector::zero();

    for response in responses {
        let Some(question) = bank.find(&response.question) else {
            debug!(question = %response.question, "skipping response for unknown question");
            continue;
        };
        apply_response(&mut traits, question, &response.answer);
    }

    traits
}

fn apply_response(traits: &mut TraitVector, question: &QuestionDefinition, answer: &AnswerValue) {
    match answer {
        AnswerValue::Rating(value) => {
            if let Some(weights) = &question.rating_weights {
                traits.add_scaled(weights, f32::from(*value));
            }
        }
        AnswerValue::Choice(value) => {
            if let Some(weights) = question.option_weights(value) {
                traits.add_scaled(weights, 1.0);
            }
        }
        AnswerValue::Multi(values) => {
            for value in values {
                if let Some(weights) = question.option_weights(value) {
                    traits.add_scaled(weights, 1.0);
                }
            }
        }
        AnswerValue::Distribution(shares) => {
            for (value, share) in shares {
                if let Some(weights) = question.option_weights(value) {
                    traits.add_scaled(weights, *share);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn bank() -> QuestionBank {
        QuestionBank::standard()
    }

    #[test]
    fn rating_answers_scale_the_question_weights() {
        let responses = vec![QuizResponse::new("base-maths", AnswerValue::Rating(5))];
        let traits = score_traits(&responses, &bank());
        // base-maths carries I:4 C:2 per rating point.
        assert_eq!(traits.investigative, 20.0);
        assert_eq!(traits.conventional, 10.0);
        assert_eq!(traits.realistic, 0.0);
    }

    #[test]
    fn choice_answers_add_the_selected_option_once() {
        let responses = vec![QuizResponse::new(
            "base-activities",
            AnswerValue::Choice("experiment".to_string()),
        )];
        let traits = score_traits(&responses, &bank());
        assert_eq!(traits.investigative, 10.0);
        assert_eq!(traits.realistic, 2.0);
    }

    #[test]
    fn distribution_answers_weight_each_option_by_its_share() {
        let mut shares = BTreeMap::new();
        shares.insert("workshop".to_string(), 6.0);
        shares.insert("music".to_string(), 4.0);
        let responses = vec![QuizResponse::new(
            "base-weekend",
            AnswerValue::Distribution(shares),
        )];
        let traits = score_traits(&responses, &bank());
        assert_eq!(traits.realistic, 12.0);
        assert_eq!(traits.artistic, 8.0);
    }

    #[test]
    fn scoring_is_commutative_over_response_order() {
        let mut shares = BTreeMap::new();
        shares.insert("documentary".to_string(), 7.0);
        shares.insert("volunteer".to_string(), 3.0);
        let responses = vec![
            QuizResponse::new("base-maths", AnswerValue::Rating(4)),
            QuizResponse::new(
                "base-activities",
                AnswerValue::Choice("build".to_string()),
            ),
            QuizResponse::new("base-weekend", AnswerValue::Distribution(shares)),
            QuizResponse::new("inv-data", AnswerValue::Rating(5)),
        ];

        let forward = score_traits(&responses, &bank());
        let mut reversed = responses.clone();
        reversed.reverse();
        assert_eq!(score_traits(&reversed, &bank()), forward);

        let mut rotated = responses.clone();
        rotated.rotate_left(2);
        assert_eq!(score_traits(&rotated, &bank()), forward);
    }

    #[test]
    fn unknown_questions_and_options_are_skipped() {
        let responses = vec![
            QuizResponse::new("question-from-v1-bank", AnswerValue::Rating(5)),
            QuizResponse::new(
                "base-activities",
                AnswerValue::Choice("no-such-option".to_string()),
            ),
            QuizResponse::new("base-maths", AnswerValue::Rating(3)),
        ];
        let traits = score_traits(&responses, &bank());
        assert_eq!(traits.investigative, 12.0);
        assert_eq!(traits.conventional, 6.0);
    }

    #[test]
    fn empty_history_scores_to_zero() {
        assert_eq!(score_traits(&[], &bank()), TraitVector::zero());
    }
}
