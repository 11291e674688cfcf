use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::questions::QuestionId;

/// The six RIASEC interest dimensions used to profile aptitude.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum TraitCategory {
    #[default]
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl TraitCategory {
    pub const ALL: [TraitCategory; 6] = [
        TraitCategory::Realistic,
        TraitCategory::Investigative,
        TraitCategory::Artistic,
        TraitCategory::Social,
        TraitCategory::Enterprising,
        TraitCategory::Conventional,
    ];

    pub const fn code(self) -> char {
        match self {
            TraitCategory::Realistic => 'R',
            TraitCategory::Investigative => 'I',
            TraitCategory::Artistic => 'A',
            TraitCategory::Social => 'S',
            TraitCategory::Enterprising => 'E',
            TraitCategory::Conventional => 'C',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TraitCategory::Realistic => "Realistic",
            TraitCategory::Investigative => "Investigative",
            TraitCategory::Artistic => "Artistic",
            TraitCategory::Social => "Social",
            TraitCategory::Enterprising => "Enterprising",
            TraitCategory::Conventional => "Conventional",
        }
    }
}

/// Scores for all six trait categories. Every key is always present; values
/// only ever accumulate upward from zero, so a fresh vector is all zeroes and
/// a populated one is a pure function of the responses that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TraitVector {
    pub realistic: f32,
    pub investigative: f32,
    pub artistic: f32,
    pub social: f32,
    pub enterprising: f32,
    pub conventional: f32,
}

impl TraitVector {
    pub fn zero() -> Self {
        Self::default()
    }

    pub const fn new(
        realistic: f32,
        investigative: f32,
        artistic: f32,
        social: f32,
        enterprising: f32,
        conventional: f32,
    ) -> Self {
        Self {
            realistic,
            investigative,
            artistic,
            social,
            enterprising,
            conventional,
        }
    }

    pub fn get(&self, category: TraitCategory) -> f32 {
        match category {
            TraitCategory::Realistic => self.realistic,
            TraitCategory::Investigative => self.investigative,
            TraitCategory::Artistic => self.artistic,
            TraitCategory::Social => self.social,
            TraitCategory::Enterprising => self.enterprising,
            TraitCategory::Conventional => self.conventional,
        }
    }

    /// Add `weights` scaled by `factor` into this vector.
    pub fn add_scaled(&mut self, weights: &TraitVector, factor: f32) {
        for category in TraitCategory::ALL {
            *self.slot(category) += weights.get(category) * factor;
        }
    }

    /// Categories ordered by descending score. Equal scores fall back to the
    /// fixed R-I-A-S-E-C order so ranking is deterministic.
    pub fn ranked(&self) -> Vec<(TraitCategory, f32)> {
        let mut entries: Vec<(TraitCategory, f32)> = TraitCategory::ALL
            .iter()
            .map(|&category| (category, self.get(category)))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }

    pub fn dominant(&self) -> (TraitCategory, f32) {
        self.ranked()[0]
    }

    /// Gap between the highest and second-highest score, used by the
    /// selector's early-stop rule.
    pub fn top_two_gap(&self) -> f32 {
        let ranked = self.ranked();
        ranked[0].1 - ranked[1].1
    }

    fn slot(&mut self, category: TraitCategory) -> &mut f32 {
        match category {
            TraitCategory::Realistic => &mut self.realistic,
            TraitCategory::Investigative => &mut self.investigative,
            TraitCategory::Artistic => &mut self.artistic,
            TraitCategory::Social => &mut self.social,
            TraitCategory::Enterprising => &mut self.enterprising,
            TraitCategory::Conventional => &mut self.conventional,
        }
    }
}

/// The literal answer recorded for one question. The variants mirror the
/// answer shapes the quiz UI can produce; the scorer dispatches on them in a
/// single place when looking up weight-table contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A 1-5 agreement rating.
    Rating(u8),
    /// One selected option value.
    Choice(String),
    /// Several selected option values.
    Multi(Vec<String>),
    /// Points distributed across option values (value -> share).
    Distribution(BTreeMap<String, f32>),
}

/// One recorded answer. Immutable once appended to a session's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub question: QuestionId,
    pub answer: AnswerValue,
}

impl QuizResponse {
    pub fn new(question: impl Into<String>, answer: AnswerValue) -> Self {
        Self {
            question: QuestionId(question.into()),
            answer,
        }
    }
}

/// Where a session currently sits in the adaptive flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizPhase {
    Baseline,
    DeepDive,
    Complete,
}

/// Working state of one quiz session. Owned by exactly one session at a
/// time; the engine mutates it through `record_answer` only, and the trait
/// vector is always recomputed from the full history rather than patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QuizState {
    pub responses: Vec<QuizResponse>,
    pub traits: TraitVector,
    pub asked: BTreeSet<QuestionId>,
    pub question_count: u32,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }
}
