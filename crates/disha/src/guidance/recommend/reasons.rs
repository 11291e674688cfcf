use crate::catalog::courses::{Branch, Course, DemandLevel};
use crate::guidance::quiz::domain::{TraitCategory, TraitVector};

const TRAIT_PHRASES: [(TraitCategory, &str); 6] = [
    (
        TraitCategory::Investigative,
        "Strong analytical and problem-solving abilities",
    ),
    (
        TraitCategory::Realistic,
        "Practical, hands-on learning approach",
    ),
    (
        TraitCategory::Artistic,
        "Creative thinking and communication skills",
    ),
    (
        TraitCategory::Social,
        "People-oriented and collaborative nature",
    ),
    (
        TraitCategory::Enterprising,
        "Leadership potential and business acumen",
    ),
    (
        TraitCategory::Conventional,
        "Organized and detail-oriented mindset",
    ),
];

/// Justifications for the trait path: phrases for the student's top-three
/// traits in fixed priority order, demand last, capped.
pub(super) fn from_traits(course: &Course, traits: &TraitVector, max: usize) -> Vec<String> {
    let top: Vec<TraitCategory> = traits
        .ranked()
        .into_iter()
        .take(3)
        .map(|(category, _)| category)
        .collect();

    let mut reasons: Vec<String> = TRAIT_PHRASES
        .iter()
        .filter(|(category, _)| top.contains(category))
        .map(|(_, phrase)| (*phrase).to_string())
        .collect();

    push_demand_reason(&mut reasons, course);
    reasons.truncate(max);
    reasons
}

/// Justifications for the keyword path: fixed per-branch phrases, demand
/// last, capped.
pub(super) fn from_branch(course: &Course, max: usize) -> Vec<String> {
    let mut reasons: Vec<String> = Vec::new();
    let id = course.id.0.as_str();

    match course.branch {
        Branch::Engineering => {
            reasons.push("Strong technical and logical thinking ability".to_string());
            if id == "btech-cs" {
                reasons.push("Interest in technology and programming".to_string());
                reasons.push("Excellent problem-solving skills".to_string());
            }
        }
        Branch::Medical => {
            reasons.push("Compassionate and caring personality".to_string());
            reasons.push("Interest in biological sciences and healthcare".to_string());
        }
        Branch::BusinessFinance => {
            reasons.push("Business acumen and leadership potential".to_string());
            if id == "ca" {
                reasons.push("Strong analytical and numerical skills".to_string());
            }
        }
        Branch::Law => {
            reasons.push("Excellent communication and argumentation skills".to_string());
            reasons.push("Interest in justice and social issues".to_string());
        }
        Branch::Humanities => {}
        Branch::SkilledTrade => {
            reasons.push("Practical hands-on learning preference".to_string());
            reasons.push("Quick pathway to employment".to_string());
        }
    }

    push_demand_reason(&mut reasons, course);
    reasons.truncate(max);
    reasons
}

fn push_demand_reason(reasons: &mut Vec<String>, course: &Course) {
    if course.demand == DemandLevel::VeryHigh {
        reasons.push(format!("{} job market demand", course.demand.label()));
    }
}
