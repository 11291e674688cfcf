use super::MatcherConfig;
use crate::catalog::courses::{Branch, Course};
use crate::guidance::quiz::domain::{AnswerValue, QuizResponse, TraitVector};

/// Branch-weighted course score: start from the base, add the trait
/// contributions the branch cares about, clamp to 0-100.
pub(super) fn trait_course_score(
    course: &Course,
    traits: &TraitVector,
    config: &MatcherConfig,
) -> f32 {
    let mut score = config.base_score;

    match course.branch {
        Branch::Engineering => {
            score += traits.realistic * 0.3;
            score += traits.investigative * 0.4;
        }
        Branch::Medical => {
            score += traits.investigative * 0.4;
            score += traits.social * 0.3;
        }
        Branch::BusinessFinance => {
            score += traits.enterprising * 0.4;
            score += traits.conventional * 0.3;
        }
        Branch::Law => {
            score += traits.artistic * 0.3;
            score += traits.enterprising * 0.2;
            score += traits.social * 0.2;
        }
        Branch::Humanities => {
            score += traits.artistic * 0.3;
            score += traits.social * 0.3;
        }
        Branch::SkilledTrade => {
            score += traits.realistic * 0.5;
        }
    }

    score.clamp(0.0, 100.0)
}

/// Legacy course score over the concatenated answer text. The boosts are the
/// established heuristic for pre-trait answer sets and are kept as-is.
pub(super) fn keyword_course_score(course: &Course, answer_text: &str, config: &MatcherConfig) -> f32 {
    let mut score = config.base_score;
    let id = course.id.0.as_str();

    match course.branch {
        Branch::Engineering => {
            if id == "btech-cs" {
                if answer_text.contains("technology") || answer_text.contains("coding") {
                    score += 20.0;
                }
                if answer_text.contains("problem solving") {
                    score += 15.0;
                }
                if answer_text.contains("logical") {
                    score += 10.0;
                }
            } else if id == "btech-mechanical" {
                if answer_text.contains("machines") || answer_text.contains("automobile") {
                    score += 20.0;
                }
                if answer_text.contains("design") {
                    score += 10.0;
                }
            }
        }
        Branch::Medical => {
            if answer_text.contains("helping") || answer_text.contains("care") {
                score += 20.0;
            }
            if answer_text.contains("biology") || answer_text.contains("health") {
                score += 15.0;
            }
            if answer_text.contains("patient") {
                score += 10.0;
            }
        }
        Branch::BusinessFinance => {
            if answer_text.contains("business") || answer_text.contains("money") {
                score += 20.0;
            }
            if answer_text.contains("leadership") || answer_text.contains("management") {
                score += 15.0;
            }
            if id == "ca" && answer_text.contains("numbers") {
                score += 10.0;
            }
        }
        Branch::Law => {
            if answer_text.contains("justice") || answer_text.contains("debate") {
                score += 20.0;
            }
            if answer_text.contains("reading") || answer_text.contains("arguing") {
                score += 15.0;
            }
        }
        Branch::Humanities => {}
        Branch::SkilledTrade => {
            if answer_text.contains("practical") || answer_text.contains("hands") {
                score += 20.0;
            }
            if answer_text.contains("quick job") || answer_text.contains("skill") {
                score += 15.0;
            }
        }
    }

    score.clamp(0.0, 100.0)
}

/// Lowercased answer text joined across the whole history, as the keyword
/// path expects it.
pub(super) fn joined_answer_text(responses: &[QuizResponse]) -> String {
    responses
        .iter()
        .map(|response| flatten_answer(&response.answer))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub(super) fn flatten_answer(answer: &AnswerValue) -> String {
    match answer {
        AnswerValue::Rating(value) => value.to_string(),
        AnswerValue::Choice(value) => value.clone(),
        AnswerValue::Multi(values) => values.join(" "),
        AnswerValue::Distribution(shares) => {
            shares.keys().cloned().collect::<Vec<_>>().join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::courses::{CourseCatalog, CourseId};
    use std::collections::BTreeMap;

    fn course(id: &str) -> Course {
        CourseCatalog::standard()
            .get(&CourseId::from(id))
            .cloned()
            .unwrap_or_else(|| panic!("{id} missing from standard catalog"))
    }

    #[test]
    fn engineering_weights_realistic_and_investigative() {
        let traits = TraitVector::new(40.0, 70.0, 0.0, 0.0, 0.0, 0.0);
        let score = trait_course_score(&course("btech-cs"), &traits, &MatcherConfig::default());
        // 50 + 40*0.3 + 70*0.4
        assert_eq!(score, 90.0);
    }

    #[test]
    fn trait_score_is_clamped_to_one_hundred() {
        let traits = TraitVector::new(100.0, 100.0, 0.0, 0.0, 0.0, 0.0);
        let score = trait_course_score(&course("btech-cs"), &traits, &MatcherConfig::default());
        assert_eq!(score, 100.0);
    }

    #[test]
    fn humanities_gets_artistic_and_social_contributions() {
        let traits = TraitVector::new(0.0, 0.0, 60.0, 40.0, 0.0, 0.0);
        let score =
            trait_course_score(&course("ba-psychology"), &traits, &MatcherConfig::default());
        assert_eq!(score, 80.0);
    }

    #[test]
    fn keyword_boosts_apply_per_course() {
        let config = MatcherConfig::default();
        let text = "technology coding problem solving logical";
        assert_eq!(keyword_course_score(&course("btech-cs"), text, &config), 95.0);
        // The same text gives mechanical engineering no boost.
        assert_eq!(
            keyword_course_score(&course("btech-mechanical"), text, &config),
            50.0
        );
    }

    #[test]
    fn ca_numbers_boost_is_course_specific() {
        let config = MatcherConfig::default();
        let text = "business with numbers";
        assert_eq!(keyword_course_score(&course("ca"), text, &config), 80.0);
        assert_eq!(keyword_course_score(&course("bcom"), text, &config), 70.0);
    }

    #[test]
    fn joined_text_flattens_every_answer_shape() {
        let mut shares = BTreeMap::new();
        shares.insert("Workshop".to_string(), 6.0);
        let responses = vec![
            QuizResponse::new("q1", AnswerValue::Choice("Technology".to_string())),
            QuizResponse::new(
                "q2",
                AnswerValue::Multi(vec!["Helping".to_string(), "Care".to_string()]),
            ),
            QuizResponse::new("q3", AnswerValue::Rating(4)),
            QuizResponse::new("q4", AnswerValue::Distribution(shares)),
        ];
        assert_eq!(joined_answer_text(&responses), "technology helping care 4 workshop");
    }
}
