use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::guidance::quiz::domain::{TraitCategory, TraitVector};

/// Stable identifier of a question within a bank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub String);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// How a question is answered in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    MultiChoice,
    /// 1-5 agreement scale.
    Rating,
    /// Spread a fixed pool of points across the options.
    Distribution,
}

/// One selectable option together with the trait weights it contributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: String,
    pub text: String,
    pub weights: TraitVector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: QuestionId,
    pub text: String,
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<AnswerOption>,
    /// Weights multiplied by the rating value for `Rating` questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_weights: Option<TraitVector>,
}

impl QuestionDefinition {
    /// Weight vector for a selected option value, if the option exists.
    pub fn option_weights(&self, value: &str) -> Option<&TraitVector> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| &option.weights)
    }
}

#[derive(Debug, Error)]
pub enum QuestionBankImportError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse question bank: {0}")]
    Json(#[from] serde_json::Error),
}

/// The pool the adaptive selector draws from: a short baseline sequence every
/// session answers first, then per-category deep-dive pools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub baseline: Vec<QuestionDefinition>,
    pub deep_dive: BTreeMap<TraitCategory, Vec<QuestionDefinition>>,
}

impl QuestionBank {
    pub fn from_json_reader(reader: impl Read) -> Result<Self, QuestionBankImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, QuestionBankImportError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn find(&self, id: &QuestionId) -> Option<&QuestionDefinition> {
        self.baseline
            .iter()
            .chain(self.deep_dive.values().flatten())
            .find(|question| &question.id == id)
    }

    /// Deep-dive pool for a category; empty when the bank carries none.
    pub fn deep_dive_pool(&self, category: TraitCategory) -> &[QuestionDefinition] {
        self.deep_dive
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Which deep-dive pool a question belongs to. Baseline questions have no
    /// category: they feed every trait at once.
    pub fn category_of(&self, id: &QuestionId) -> Option<TraitCategory> {
        self.deep_dive.iter().find_map(|(category, pool)| {
            pool.iter()
                .any(|question| &question.id == id)
                .then_some(*category)
        })
    }

    pub fn total_len(&self) -> usize {
        self.baseline.len() + self.deep_dive.values().map(Vec::len).sum::<usize>()
    }

    /// The built-in bank: three broad baseline questions, then three
    /// deep-dive questions per trait category.
    pub fn standard() -> Self {
        let baseline = vec![
            choice(
                "base-activities",
                "Which of these activities sounds most exciting to you?",
                vec![
                    option(
                        "build",
                        "Building or repairing things with my hands",
                        TraitVector::new(10.0, 2.0, 0.0, 0.0, 0.0, 0.0),
                    ),
                    option(
                        "experiment",
                        "Running experiments and figuring out how things work",
                        TraitVector::new(2.0, 10.0, 0.0, 0.0, 0.0, 0.0),
                    ),
                    option(
                        "create",
                        "Writing, designing or making art",
                        TraitVector::new(0.0, 0.0, 10.0, 2.0, 0.0, 0.0),
                    ),
                    option(
                        "help",
                        "Helping classmates understand a topic",
                        TraitVector::new(0.0, 0.0, 2.0, 10.0, 0.0, 0.0),
                    ),
                    option(
                        "lead",
                        "Organising an event and leading the team",
                        TraitVector::new(0.0, 0.0, 0.0, 2.0, 10.0, 2.0),
                    ),
                    option(
                        "sort",
                        "Keeping records, lists and schedules in order",
                        TraitVector::new(0.0, 0.0, 0.0, 0.0, 2.0, 10.0),
                    ),
                ],
            ),
            QuestionDefinition {
                id: QuestionId::from("base-weekend"),
                text: "Split 10 points across how you would most like to spend a free weekend."
                    .to_string(),
                kind: QuestionKind::Distribution,
                options: vec![
                    option(
                        "workshop",
                        "Tinkering in a workshop or garden",
                        TraitVector::new(2.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                    ),
                    option(
                        "documentary",
                        "Watching science documentaries",
                        TraitVector::new(0.0, 2.0, 0.0, 0.0, 0.0, 0.0),
                    ),
                    option(
                        "music",
                        "Practising music, drawing or writing",
                        TraitVector::new(0.0, 0.0, 2.0, 0.0, 0.0, 0.0),
                    ),
                    option(
                        "volunteer",
                        "Volunteering or spending time with people",
                        TraitVector::new(0.0, 0.0, 0.0, 2.0, 0.0, 0.0),
                    ),
                    option(
                        "selling",
                        "Running a small stall or online shop",
                        TraitVector::new(0.0, 0.0, 0.0, 0.0, 2.0, 0.0),
                    ),
                    option(
                        "planning",
                        "Planning budgets and organising the week ahead",
                        TraitVector::new(0.0, 0.0, 0.0, 0.0, 0.0, 2.0),
                    ),
                ],
                rating_weights: None,
            },
            rating(
                "base-maths",
                "I enjoy solving maths problems and logic puzzles.",
                TraitVector::new(0.0, 4.0, 0.0, 0.0, 0.0, 2.0),
            ),
        ];

        let mut deep_dive = BTreeMap::new();
        deep_dive.insert(
            TraitCategory::Realistic,
            vec![
                rating(
                    "real-machines",
                    "I like understanding how machines and engines work.",
                    TraitVector::new(4.0, 1.0, 0.0, 0.0, 0.0, 0.0),
                ),
                rating(
                    "real-outdoors",
                    "I prefer practical, outdoor work over desk work.",
                    TraitVector::new(4.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                ),
                choice(
                    "real-project",
                    "A school project is assigned. Which part do you volunteer for?",
                    vec![
                        option(
                            "model",
                            "Building the physical model",
                            TraitVector::new(10.0, 0.0, 1.0, 0.0, 0.0, 0.0),
                        ),
                        option(
                            "research",
                            "Collecting the background research",
                            TraitVector::new(0.0, 8.0, 0.0, 0.0, 0.0, 2.0),
                        ),
                        option(
                            "poster",
                            "Designing the poster",
                            TraitVector::new(0.0, 0.0, 10.0, 0.0, 0.0, 0.0),
                        ),
                    ],
                ),
            ],
        );
        deep_dive.insert(
            TraitCategory::Investigative,
            vec![
                rating(
                    "inv-why",
                    "I keep asking why things happen the way they do.",
                    TraitVector::new(0.0, 4.0, 0.0, 0.0, 0.0, 0.0),
                ),
                rating(
                    "inv-data",
                    "I enjoy analysing data and spotting patterns.",
                    TraitVector::new(0.0, 4.0, 0.0, 0.0, 0.0, 1.0),
                ),
                rating(
                    "inv-lab",
                    "Lab sessions are my favourite part of science class.",
                    TraitVector::new(1.0, 4.0, 0.0, 0.0, 0.0, 0.0),
                ),
            ],
        );
        deep_dive.insert(
            TraitCategory::Artistic,
            vec![
                rating(
                    "art-express",
                    "I express ideas best through stories, images or music.",
                    TraitVector::new(0.0, 0.0, 4.0, 0.0, 0.0, 0.0),
                ),
                rating(
                    "art-rules",
                    "I would rather improvise than follow a fixed template.",
                    TraitVector::new(0.0, 0.0, 4.0, 0.0, 1.0, 0.0),
                ),
                choice(
                    "art-medium",
                    "Given a free afternoon in an arts centre, where do you go first?",
                    vec![
                        option(
                            "studio",
                            "The painting and design studio",
                            TraitVector::new(0.0, 0.0, 10.0, 0.0, 0.0, 0.0),
                        ),
                        option(
                            "stage",
                            "The stage, performing for an audience",
                            TraitVector::new(0.0, 0.0, 8.0, 2.0, 2.0, 0.0),
                        ),
                        option(
                            "library",
                            "The writing room, working on my own piece",
                            TraitVector::new(0.0, 2.0, 8.0, 0.0, 0.0, 0.0),
                        ),
                    ],
                ),
            ],
        );
        deep_dive.insert(
            TraitCategory::Social,
            vec![
                rating(
                    "soc-listen",
                    "Friends come to me when they need someone to listen.",
                    TraitVector::new(0.0, 0.0, 0.0, 4.0, 0.0, 0.0),
                ),
                rating(
                    "soc-teach",
                    "I enjoy explaining topics until the other person gets it.",
                    TraitVector::new(0.0, 1.0, 0.0, 4.0, 0.0, 0.0),
                ),
                rating(
                    "soc-service",
                    "Work that directly improves people's lives appeals to me.",
                    TraitVector::new(0.0, 0.0, 0.0, 4.0, 1.0, 0.0),
                ),
            ],
        );
        deep_dive.insert(
            TraitCategory::Enterprising,
            vec![
                rating(
                    "ent-persuade",
                    "I can usually persuade others to support my idea.",
                    TraitVector::new(0.0, 0.0, 0.0, 1.0, 4.0, 0.0),
                ),
                rating(
                    "ent-risk",
                    "Starting something of my own excites me more than a safe job.",
                    TraitVector::new(0.0, 0.0, 0.0, 0.0, 4.0, 0.0),
                ),
                choice(
                    "ent-role",
                    "In a group venture, which role do you take?",
                    vec![
                        option(
                            "pitch",
                            "Pitching to customers and investors",
                            TraitVector::new(0.0, 0.0, 0.0, 0.0, 10.0, 0.0),
                        ),
                        option(
                            "accounts",
                            "Keeping the accounts straight",
                            TraitVector::new(0.0, 0.0, 0.0, 0.0, 2.0, 10.0),
                        ),
                        option(
                            "product",
                            "Building the product itself",
                            TraitVector::new(6.0, 4.0, 0.0, 0.0, 0.0, 0.0),
                        ),
                    ],
                ),
            ],
        );
        deep_dive.insert(
            TraitCategory::Conventional,
            vec![
                rating(
                    "con-detail",
                    "I notice small mistakes in documents that others miss.",
                    TraitVector::new(0.0, 1.0, 0.0, 0.0, 0.0, 4.0),
                ),
                rating(
                    "con-routine",
                    "I work best with a clear routine and well-defined steps.",
                    TraitVector::new(0.0, 0.0, 0.0, 0.0, 0.0, 4.0),
                ),
                rating(
                    "con-numbers",
                    "Working with accounts, numbers and records suits me.",
                    TraitVector::new(0.0, 0.0, 0.0, 0.0, 1.0, 4.0),
                ),
            ],
        );

        Self {
            baseline,
            deep_dive,
        }
    }
}

fn option(value: &str, text: &str, weights: TraitVector) -> AnswerOption {
    AnswerOption {
        value: value.to_string(),
        text: text.to_string(),
        weights,
    }
}

fn choice(id: &str, text: &str, options: Vec<AnswerOption>) -> QuestionDefinition {
    QuestionDefinition {
        id: QuestionId::from(id),
        text: text.to_string(),
        kind: QuestionKind::SingleChoice,
        options,
        rating_weights: None,
    }
}

fn rating(id: &str, text: &str, weights: TraitVector) -> QuestionDefinition {
    QuestionDefinition {
        id: QuestionId::from(id),
        text: text.to_string(),
        kind: QuestionKind::Rating,
        options: Vec::new(),
        rating_weights: Some(weights),
    }
}
