use crate::catalog::courses::CourseImportError;
use crate::catalog::questions::QuestionBankImportError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    QuestionBank(QuestionBankImportError),
    CourseCatalog(CourseImportError),
    AnswerFile(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::QuestionBank(err) => write!(f, "question bank error: {}", err),
            AppError::CourseCatalog(err) => write!(f, "course catalog error: {}", err),
            AppError::AnswerFile(err) => write!(f, "answer file error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::QuestionBank(err) => Some(err),
            AppError::CourseCatalog(err) => Some(err),
            AppError::AnswerFile(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::AnswerFile(value)
    }
}

impl From<QuestionBankImportError> for AppError {
    fn from(value: QuestionBankImportError) -> Self {
        Self::QuestionBank(value)
    }
}

impl From<CourseImportError> for AppError {
    fn from(value: CourseImportError) -> Self {
        Self::CourseCatalog(value)
    }
}
