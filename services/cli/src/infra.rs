use chrono::NaiveDate;
use tracing::info;

use disha::catalog::courses::{ClassLevel, CourseCatalog};
use disha::catalog::questions::QuestionBank;
use disha::config::AppConfig;
use disha::error::AppError;
use disha::guidance::quiz::QuizConfig;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_class_level(raw: &str) -> Result<ClassLevel, String> {
    match raw.trim() {
        "10" | "10th" | "after-10th" => Ok(ClassLevel::AfterTenth),
        "12" | "12th" | "after-12th" => Ok(ClassLevel::AfterTwelfth),
        other => Err(format!("unknown class level '{other}', expected 10 or 12")),
    }
}

/// The question bank to run against: the configured JSON file when one is
/// set, otherwise the built-in bank.
pub(crate) fn load_question_bank(config: &AppConfig) -> Result<QuestionBank, AppError> {
    match &config.catalogs.question_bank {
        Some(path) => {
            info!(path = %path.display(), "loading question bank");
            Ok(QuestionBank::from_json_path(path)?)
        }
        None => Ok(QuestionBank::standard()),
    }
}

pub(crate) fn load_course_catalog(config: &AppConfig) -> Result<CourseCatalog, AppError> {
    match &config.catalogs.course_catalog {
        Some(path) => {
            info!(path = %path.display(), "loading course catalog");
            Ok(CourseCatalog::from_csv_path(path)?)
        }
        None => Ok(CourseCatalog::standard()),
    }
}

pub(crate) fn quiz_config(config: &AppConfig) -> QuizConfig {
    let mut quiz = QuizConfig::default();
    if let Some(cap) = config.quiz_max_questions {
        quiz.max_questions = cap;
    }
    quiz
}
