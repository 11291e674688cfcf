use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use clap::Args;

use disha::catalog::courses::ClassLevel;
use disha::catalog::questions::{QuestionDefinition, QuestionKind};
use disha::config::AppConfig;
use disha::error::AppError;
use disha::guidance::quiz::domain::{AnswerValue, QuizResponse, QuizState};
use disha::guidance::quiz::AdaptiveQuizEngine;
use disha::guidance::recommend::{RecommendationEngine, StudentProfile, UserType};

use crate::demo::{render_recommendation, render_traits};
use crate::infra;

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Class level of the student (10 or 12).
    #[arg(long, value_parser = infra::parse_class_level, default_value = "12")]
    pub(crate) class_level: Option<ClassLevel>,
    /// Override the recommendation date (defaults to today).
    #[arg(long, value_parser = infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

/// Interactive quiz session on stdin. Ends on completion or EOF; either way
/// whatever was answered is scored and matched.
pub(crate) fn run_quiz(args: QuizArgs, config: &AppConfig) -> Result<(), AppError> {
    let QuizArgs { class_level, today } = args;
    let class_level = class_level.unwrap_or(ClassLevel::AfterTwelfth);
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let bank = infra::load_question_bank(config)?;
    let catalog = infra::load_course_catalog(config)?;
    let quiz = AdaptiveQuizEngine::with_config(bank, infra::quiz_config(config));
    let matcher = RecommendationEngine::new(catalog);

    println!("Disha aptitude quiz (Ctrl-D to stop early)\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = QuizState::new();

    while let Some(question) = quiz.select_next(&state) {
        let Some(answer) = prompt_answer(question, &mut lines)? else {
            println!("\nStopping early.");
            break;
        };
        let response = QuizResponse {
            question: question.id.clone(),
            answer,
        };
        quiz.record_answer(&mut state, response);
        println!("  progress: {:.0}%", quiz.progress(&state));
    }

    if state.responses.is_empty() {
        println!("No answers recorded.");
        return Ok(());
    }

    println!();
    render_traits(&state.traits);

    let profile = StudentProfile {
        class_level,
        user_type: UserType::Student,
    };
    match matcher.recommend(&state.responses, &profile, Some(&state.traits), today) {
        Some(recommendation) => render_recommendation(&recommendation, matcher.catalog()),
        None => println!("No recommendation available for this profile."),
    }

    Ok(())
}

/// Ask one question, re-prompting until the input parses. `None` on EOF.
fn prompt_answer(
    question: &QuestionDefinition,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<AnswerValue>, AppError> {
    println!("\n{}", question.text);
    match question.kind {
        QuestionKind::Rating => println!("  (rate 1-5)"),
        QuestionKind::SingleChoice => {
            print_options(question);
            println!("  (pick one number)");
        }
        QuestionKind::MultiChoice => {
            print_options(question);
            println!("  (pick numbers, comma separated)");
        }
        QuestionKind::Distribution => {
            print_options(question);
            println!("  (split 10 points, e.g. 1=6,3=4)");
        }
    }

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        match parse_answer(question, line.trim()) {
            Ok(answer) => return Ok(Some(answer)),
            Err(message) => println!("  {message}"),
        }
    }
}

fn print_options(question: &QuestionDefinition) {
    for (index, option) in question.options.iter().enumerate() {
        println!("  {}. {}", index + 1, option.text);
    }
}

fn parse_answer(question: &QuestionDefinition, raw: &str) -> Result<AnswerValue, String> {
    match question.kind {
        QuestionKind::Rating => {
            let value: u8 = raw.parse().map_err(|_| "enter a number from 1 to 5")?;
            if (1..=5).contains(&value) {
                Ok(AnswerValue::Rating(value))
            } else {
                Err("enter a number from 1 to 5".to_string())
            }
        }
        QuestionKind::SingleChoice => {
            let option = pick_option(question, raw)?;
            Ok(AnswerValue::Choice(option))
        }
        QuestionKind::MultiChoice => {
            let mut values = Vec::new();
            for part in raw.split(',') {
                values.push(pick_option(question, part.trim())?);
            }
            Ok(AnswerValue::Multi(values))
        }
        QuestionKind::Distribution => {
            let mut shares = BTreeMap::new();
            for part in raw.split(',') {
                let (index, points) = part
                    .trim()
                    .split_once('=')
                    .ok_or("use the form option=points, e.g. 1=6,3=4")?;
                let value = pick_option(question, index.trim())?;
                let points: f32 = points
                    .trim()
                    .parse()
                    .map_err(|_| format!("'{points}' is not a number"))?;
                shares.insert(value, points);
            }
            Ok(AnswerValue::Distribution(shares))
        }
    }
}

fn pick_option(question: &QuestionDefinition, raw: &str) -> Result<String, String> {
    let index: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not an option number"))?;
    question
        .options
        .get(index.checked_sub(1).ok_or("option numbers start at 1")?)
        .map(|option| option.value.clone())
        .ok_or_else(|| format!("no option {index}"))
}
