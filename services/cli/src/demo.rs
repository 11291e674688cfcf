use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;

use disha::catalog::courses::ClassLevel;
use disha::catalog::questions::{QuestionDefinition, QuestionKind};
use disha::config::AppConfig;
use disha::error::AppError;
use disha::guidance::dashboard::finance::{college_cost, emi, CostInputs, LoanTerms};
use disha::guidance::dashboard::readiness::{
    improvement_suggestions, readiness_score, ReadinessBand, ReadinessInputs,
};
use disha::guidance::quiz::domain::{AnswerValue, QuizResponse, QuizState, TraitVector};
use disha::guidance::quiz::{score_traits, AdaptiveQuizEngine};
use disha::guidance::recommend::{
    CareerRecommendation, RecommendationEngine, StudentProfile, UserType,
};

use crate::infra;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the recommendation date (defaults to today).
    #[arg(long, value_parser = infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Class level of the demo student (10 or 12).
    #[arg(long, value_parser = infra::parse_class_level, default_value = "12")]
    pub(crate) class_level: Option<ClassLevel>,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// JSON file mapping question ids to recorded answers.
    pub(crate) answers: PathBuf,
    /// Class level of the student (10 or 12).
    #[arg(long, value_parser = infra::parse_class_level, default_value = "12")]
    pub(crate) class_level: Option<ClassLevel>,
    /// Skip trait scoring and use the legacy keyword matcher.
    #[arg(long)]
    pub(crate) legacy: bool,
    /// Override the recommendation date (defaults to today).
    #[arg(long, value_parser = infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

/// Scripted walk-through of the full guidance flow with an
/// investigative-leaning student.
pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let DemoArgs { today, class_level } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let class_level = class_level.unwrap_or(ClassLevel::AfterTwelfth);

    let bank = infra::load_question_bank(config)?;
    let catalog = infra::load_course_catalog(config)?;
    let quiz = AdaptiveQuizEngine::with_config(bank, infra::quiz_config(config));
    let matcher = RecommendationEngine::new(catalog);

    println!("Disha guidance demo\n");
    println!("Adaptive quiz session");

    let mut state = QuizState::new();
    while let Some(question) = quiz.select_next(&state) {
        let answer = scripted_answer(question);
        println!(
            "  [{:>3.0}%] {} -> {}",
            quiz.progress(&state),
            question.text,
            describe_answer(question, &answer)
        );
        let response = QuizResponse {
            question: question.id.clone(),
            answer,
        };
        quiz.record_answer(&mut state, response);
    }
    println!(
        "  quiz complete after {} questions\n",
        state.question_count
    );

    render_traits(&state.traits);

    let profile = StudentProfile {
        class_level,
        user_type: UserType::Student,
    };
    match matcher.recommend(&state.responses, &profile, Some(&state.traits), today) {
        Some(recommendation) => render_recommendation(&recommendation, matcher.catalog()),
        None => println!("No recommendation available for this profile."),
    }

    render_dashboard(state.question_count);

    Ok(())
}

/// Recommendation from a stored answers file, with or without trait scoring.
pub(crate) fn run_recommend(args: RecommendArgs, config: &AppConfig) -> Result<(), AppError> {
    let RecommendArgs {
        answers,
        class_level,
        legacy,
        today,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let class_level = class_level.unwrap_or(ClassLevel::AfterTwelfth);

    let file = File::open(&answers)?;
    let stored: BTreeMap<String, AnswerValue> = serde_json::from_reader(BufReader::new(file))?;
    let responses: Vec<QuizResponse> = stored
        .into_iter()
        .map(|(question, answer)| QuizResponse::new(question, answer))
        .collect();

    let traits: Option<TraitVector> = if legacy {
        None
    } else {
        let bank = infra::load_question_bank(config)?;
        Some(score_traits(&responses, &bank))
    };

    if let Some(traits) = &traits {
        render_traits(traits);
    }

    let catalog = infra::load_course_catalog(config)?;
    let matcher = RecommendationEngine::new(catalog);
    let profile = StudentProfile {
        class_level,
        user_type: UserType::Student,
    };

    match matcher.recommend(&responses, &profile, traits.as_ref(), today) {
        Some(recommendation) => render_recommendation(&recommendation, matcher.catalog()),
        None => println!("No recommendation available for these answers."),
    }

    Ok(())
}

fn scripted_answer(question: &QuestionDefinition) -> AnswerValue {
    match question.kind {
        QuestionKind::Rating => {
            let investigative = question
                .rating_weights
                .as_ref()
                .map(|weights| weights.investigative >= 4.0)
                .unwrap_or(false);
            AnswerValue::Rating(if investigative { 5 } else { 2 })
        }
        QuestionKind::SingleChoice | QuestionKind::MultiChoice => {
            let best = question
                .options
                .iter()
                .max_by(|a, b| a.weights.investigative.total_cmp(&b.weights.investigative));
            match best {
                Some(option) => AnswerValue::Choice(option.value.clone()),
                None => AnswerValue::Rating(3),
            }
        }
        QuestionKind::Distribution => {
            let mut shares = BTreeMap::new();
            for (option, share) in question.options.iter().zip([6.0, 4.0]) {
                shares.insert(option.value.clone(), share);
            }
            AnswerValue::Distribution(shares)
        }
    }
}

fn describe_answer(question: &QuestionDefinition, answer: &AnswerValue) -> String {
    match answer {
        AnswerValue::Rating(value) => format!("rated {value}/5"),
        AnswerValue::Choice(value) => question
            .options
            .iter()
            .find(|option| &option.value == value)
            .map(|option| option.text.clone())
            .unwrap_or_else(|| value.clone()),
        AnswerValue::Multi(values) => values.join(", "),
        AnswerValue::Distribution(shares) => shares
            .iter()
            .map(|(value, share)| format!("{value}={share}"))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

pub(crate) fn render_traits(traits: &TraitVector) {
    println!("Trait profile");
    for (category, score) in traits.ranked() {
        println!("  {} {:<14} {:>6.1}", category.code(), category.label(), score);
    }
    println!();
}

pub(crate) fn render_recommendation(
    recommendation: &CareerRecommendation,
    catalog: &disha::catalog::courses::CourseCatalog,
) {
    println!("Recommended course: {}", recommendation.course_name);
    println!(
        "  stream {} | match {}/100 | confidence {}",
        recommendation.stream.label(),
        recommendation.match_score,
        recommendation.confidence.label()
    );
    if let Some(course) = catalog.get(&recommendation.course) {
        println!(
            "  {} | {} demand | {}",
            course.branch.label(),
            course.demand.label(),
            course.description
        );
    }
    for reason in &recommendation.reasons {
        println!("  - {reason}");
    }
    if !recommendation.alternatives.is_empty() {
        let alternatives: Vec<String> = recommendation
            .alternatives
            .iter()
            .map(|id| id.to_string())
            .collect();
        println!("  alternatives: {}", alternatives.join(", "));
    }
    println!();
}

fn render_dashboard(quiz_answer_count: u32) {
    let inputs = ReadinessInputs {
        quiz_answer_count,
        saved_item_count: 2,
        has_name: true,
        has_class_level: true,
        has_gender: false,
        has_email: true,
    };
    let score = readiness_score(&inputs);
    println!(
        "Career readiness: {}/100 ({})",
        score,
        ReadinessBand::from_score(score).label()
    );
    for suggestion in improvement_suggestions(&inputs) {
        println!("  next: {} (+{} points)", suggestion.text, suggestion.points);
    }

    let loan = emi(&LoanTerms {
        principal: 800_000.0,
        annual_rate_percent: 9.5,
        tenure_years: 7,
    });
    println!(
        "Sample education loan: Rs 8,00,000 at 9.5% for 7 years -> EMI Rs {:.0} (total interest Rs {:.0})",
        loan.monthly_payment, loan.total_interest
    );

    let cost = college_cost(&CostInputs {
        annual_tuition: 150_000.0,
        annual_hostel: 80_000.0,
        annual_books: 10_000.0,
        annual_misc: 20_000.0,
        years: 4,
    });
    println!(
        "Sample 4-year college cost: Rs {:.0} (Rs {:.0} per year)",
        cost.total_cost, cost.yearly_total
    );
}
