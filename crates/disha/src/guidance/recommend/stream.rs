use super::scoring::flatten_answer;
use super::MatcherConfig;
use crate::catalog::courses::Stream;
use crate::guidance::quiz::domain::{QuizResponse, TraitCategory, TraitVector};

/// Map the dominant trait to a stream. Realistic and Investigative both lead
/// to science, except the carve-out: an extreme Realistic score with weak
/// Investigative signal points at vocational trades instead.
pub(super) fn from_traits(traits: &TraitVector, config: &MatcherConfig) -> Stream {
    let (dominant, score) = traits.dominant();
    match dominant {
        TraitCategory::Realistic
            if score > config.vocational_realistic_floor
                && traits.investigative < config.vocational_investigative_ceiling =>
        {
            Stream::Vocational
        }
        TraitCategory::Realistic | TraitCategory::Investigative => Stream::Science,
        TraitCategory::Enterprising | TraitCategory::Conventional => Stream::Commerce,
        TraitCategory::Artistic | TraitCategory::Social => Stream::Arts,
    }
}

const SCIENCE_KEYWORDS: [&str; 6] = [
    "math",
    "science",
    "technology",
    "engineering",
    "doctor",
    "research",
];
const COMMERCE_KEYWORDS: [&str; 5] = [
    "business",
    "finance",
    "accounting",
    "management",
    "entrepreneur",
];
const ARTS_KEYWORDS: [&str; 6] = ["law", "writing", "history", "politics", "creative", "social"];
const VOCATIONAL_KEYWORDS: [&str; 4] = ["practical", "hands-on", "skill", "trade"];

/// Legacy stream detection: tally keyword hits per answer, ten points per
/// answer per stream, science on a tie or no hits at all.
pub(super) fn from_keywords(responses: &[QuizResponse]) -> Stream {
    let mut tallies: [(Stream, u32); 4] = [
        (Stream::Science, 0),
        (Stream::Commerce, 0),
        (Stream::Arts, 0),
        (Stream::Vocational, 0),
    ];

    for response in responses {
        let text = flatten_answer(&response.answer).to_lowercase();
        for (stream, tally) in tallies.iter_mut() {
            let keywords: &[&str] = match stream {
                Stream::Science => &SCIENCE_KEYWORDS,
                Stream::Commerce => &COMMERCE_KEYWORDS,
                Stream::Arts => &ARTS_KEYWORDS,
                Stream::Vocational => &VOCATIONAL_KEYWORDS,
            };
            if keywords.iter().any(|keyword| text.contains(keyword)) {
                *tally += 10;
            }
        }
    }

    let mut best = (Stream::Science, 0);
    for (stream, tally) in tallies {
        if tally > best.1 {
            best = (stream, tally);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::quiz::domain::AnswerValue;

    fn config() -> MatcherConfig {
        MatcherConfig::default()
    }

    fn choices(values: &[&str]) -> Vec<QuizResponse> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                QuizResponse::new(format!("q{index}"), AnswerValue::Choice((*value).to_string()))
            })
            .collect()
    }

    #[test]
    fn dominant_investigative_maps_to_science() {
        let traits = TraitVector::new(20.0, 85.0, 10.0, 40.0, 15.0, 10.0);
        assert_eq!(from_traits(&traits, &config()), Stream::Science);
    }

    #[test]
    fn extreme_realistic_with_weak_investigative_maps_to_vocational() {
        let traits = TraitVector::new(90.0, 30.0, 5.0, 5.0, 5.0, 5.0);
        assert_eq!(from_traits(&traits, &config()), Stream::Vocational);
    }

    #[test]
    fn extreme_realistic_with_strong_investigative_stays_science() {
        let traits = TraitVector::new(90.0, 60.0, 5.0, 5.0, 5.0, 5.0);
        assert_eq!(from_traits(&traits, &config()), Stream::Science);
    }

    #[test]
    fn enterprising_and_conventional_map_to_commerce() {
        let enterprising = TraitVector::new(10.0, 10.0, 10.0, 10.0, 70.0, 20.0);
        assert_eq!(from_traits(&enterprising, &config()), Stream::Commerce);
        let conventional = TraitVector::new(10.0, 10.0, 10.0, 10.0, 20.0, 70.0);
        assert_eq!(from_traits(&conventional, &config()), Stream::Commerce);
    }

    #[test]
    fn artistic_and_social_map_to_arts() {
        let artistic = TraitVector::new(10.0, 10.0, 70.0, 20.0, 10.0, 10.0);
        assert_eq!(from_traits(&artistic, &config()), Stream::Arts);
    }

    #[test]
    fn keyword_tally_picks_the_most_mentioned_stream() {
        let responses = choices(&[
            "running my own business",
            "finance and accounting",
            "creative writing",
        ]);
        assert_eq!(from_keywords(&responses), Stream::Commerce);
    }

    #[test]
    fn keyword_tie_defaults_to_science() {
        let responses = choices(&["business studies", "science fair"]);
        assert_eq!(from_keywords(&responses), Stream::Science);

        let no_signal = choices(&["something else entirely"]);
        assert_eq!(from_keywords(&no_signal), Stream::Science);
    }
}
