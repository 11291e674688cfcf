use serde::{Deserialize, Serialize};

/// Engagement signals the caller has collected about a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReadinessInputs {
    pub quiz_answer_count: u32,
    pub saved_item_count: u32,
    pub has_name: bool,
    pub has_class_level: bool,
    pub has_gender: bool,
    pub has_email: bool,
}

impl ReadinessInputs {
    pub fn quiz_started(&self) -> bool {
        self.quiz_answer_count > 0
    }

    /// Profile counts as complete without email; email only adds points.
    pub fn profile_complete(&self) -> bool {
        self.has_name && self.has_class_level && self.has_gender
    }
}

/// Coarse band shown alongside the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessBand {
    PathMaster,
    RisingExplorer,
    CareerSeeker,
    JustStarting,
}

impl ReadinessBand {
    pub const fn label(self) -> &'static str {
        match self {
            ReadinessBand::PathMaster => "Path Master",
            ReadinessBand::RisingExplorer => "Rising Explorer",
            ReadinessBand::CareerSeeker => "Career Seeker",
            ReadinessBand::JustStarting => "Just Starting",
        }
    }

    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::PathMaster
        } else if score >= 60 {
            Self::RisingExplorer
        } else if score >= 40 {
            Self::CareerSeeker
        } else {
            Self::JustStarting
        }
    }
}

/// A concrete step the student can take to raise their score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: &'static str,
    pub points: u8,
}

/// 0-100 readiness score: quiz started (30), saved items (4 each, max 20),
/// profile fields (5 each), answer depth (30 at ten answers, 15 at one).
pub fn readiness_score(inputs: &ReadinessInputs) -> u8 {
    let mut score: u32 = 0;

    if inputs.quiz_started() {
        score += 30;
    }

    score += (inputs.saved_item_count * 4).min(20);

    for field in [
        inputs.has_name,
        inputs.has_class_level,
        inputs.has_gender,
        inputs.has_email,
    ] {
        if field {
            score += 5;
        }
    }

    if inputs.quiz_answer_count >= 10 {
        score += 30;
    } else if inputs.quiz_answer_count > 0 {
        score += 15;
    }

    score.min(100) as u8
}

/// How many of the three dashboard milestones (quiz, three saved items,
/// complete profile) are done.
pub fn milestones_completed(inputs: &ReadinessInputs) -> u8 {
    [
        inputs.quiz_started(),
        inputs.saved_item_count >= 3,
        inputs.profile_complete(),
    ]
    .iter()
    .filter(|done| **done)
    .count() as u8
}

/// Next steps for whichever milestones are still open.
pub fn improvement_suggestions(inputs: &ReadinessInputs) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    if !inputs.quiz_started() {
        suggestions.push(Suggestion {
            text: "Complete the aptitude quiz",
            points: 30,
        });
    }
    if inputs.saved_item_count < 3 {
        suggestions.push(Suggestion {
            text: "Save colleges and career paths",
            points: 20,
        });
    }
    if !inputs.profile_complete() {
        suggestions.push(Suggestion {
            text: "Complete your profile",
            points: 20,
        });
    }
    suggestions
}
