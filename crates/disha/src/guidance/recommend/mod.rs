mod reasons;
mod scoring;
mod stream;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::courses::{ClassLevel, Course, CourseCatalog, CourseId, Stream};
use crate::guidance::quiz::domain::{QuizResponse, TraitVector};

/// What the caller knows about the student. The core only reads it: class
/// level gates which courses are reachable, user type is carried for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub class_level: ClassLevel,
    pub user_type: UserType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[default]
    Student,
    Parent,
}

/// Which scoring path produced a recommendation. The keyword path stays
/// available for stored answer sets that predate trait scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStrategy {
    TraitVector,
    LegacyKeyword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }

    fn from_score(score: u8, config: &MatcherConfig) -> Self {
        if score >= config.high_floor {
            Self::High
        } else if score >= config.medium_floor {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Matcher thresholds. Defaults reproduce the established product behavior;
/// the keyword boosts themselves are fixed, not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub base_score: f32,
    pub high_floor: u8,
    pub medium_floor: u8,
    /// Realistic score above which the vocational carve-out can fire.
    pub vocational_realistic_floor: f32,
    /// Investigative score below which the vocational carve-out can fire.
    pub vocational_investigative_ceiling: f32,
    pub max_reasons: usize,
    pub max_alternatives: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            base_score: 50.0,
            high_floor: 80,
            medium_floor: 60,
            vocational_realistic_floor: 80.0,
            vocational_investigative_ceiling: 50.0,
            max_reasons: 4,
            max_alternatives: 3,
        }
    }
}

/// The matcher's output. Built fresh per invocation, never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub course: CourseId,
    pub course_name: String,
    pub stream: Stream,
    pub match_score: u8,
    pub confidence: ConfidenceLevel,
    pub reasons: Vec<String>,
    pub alternatives: Vec<CourseId>,
    pub strategy: RecommendationStrategy,
    pub generated_on: NaiveDate,
}

/// Stateless matcher over a read-only course catalog.
pub struct RecommendationEngine {
    catalog: CourseCatalog,
    config: MatcherConfig,
}

impl RecommendationEngine {
    pub fn new(catalog: CourseCatalog) -> Self {
        Self::with_config(catalog, MatcherConfig::default())
    }

    pub fn with_config(catalog: CourseCatalog, config: MatcherConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Rank the reachable courses and return the best match, or `None` when
    /// there is not enough signal (no responses, or no course in the target
    /// stream at the student's class level).
    ///
    /// With a trait vector the branch-weighted path runs; without one the
    /// legacy keyword path scores the raw answer text instead.
    pub fn recommend(
        &self,
        responses: &[QuizResponse],
        profile: &StudentProfile,
        traits: Option<&TraitVector>,
        today: NaiveDate,
    ) -> Option<CareerRecommendation> {
        if responses.is_empty() {
            return None;
        }

        let (strategy, stream) = match traits {
            Some(traits) => (
                RecommendationStrategy::TraitVector,
                stream::from_traits(traits, &self.config),
            ),
            None => (
                RecommendationStrategy::LegacyKeyword,
                stream::from_keywords(responses),
            ),
        };

        debug!(?strategy, stream = stream.label(), "matching courses");

        let candidates = self
            .catalog
            .by_stream_and_level(stream, profile.class_level);
        if candidates.is_empty() {
            debug!(
                stream = stream.label(),
                class_level = profile.class_level.label(),
                "no courses reachable for stream and class level"
            );
            return None;
        }

        let answer_text = scoring::joined_answer_text(responses);
        let mut scored: Vec<(&Course, f32)> = candidates
            .into_iter()
            .map(|course| {
                let score = match traits {
                    Some(traits) => scoring::trait_course_score(course, traits, &self.config),
                    None => scoring::keyword_course_score(course, &answer_text, &self.config),
                };
                (course, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.id.cmp(&b.0.id)));

        let (primary, raw_score) = scored[0];
        let match_score = raw_score.round() as u8;
        let reasons = match traits {
            Some(traits) => reasons::from_traits(primary, traits, self.config.max_reasons),
            None => reasons::from_branch(primary, self.config.max_reasons),
        };
        let alternatives = scored
            .iter()
            .skip(1)
            .take(self.config.max_alternatives)
            .map(|(course, _)| course.id.clone())
            .collect();

        Some(CareerRecommendation {
            course: primary.id.clone(),
            course_name: primary.full_name.clone(),
            stream: primary.stream,
            match_score,
            confidence: ConfidenceLevel::from_score(match_score, &self.config),
            reasons,
            alternatives,
            strategy,
            generated_on: today,
        })
    }
}
