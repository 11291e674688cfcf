pub mod domain;
mod scoring;
mod selector;

pub use scoring::score_traits;
pub use selector::{AdaptiveQuizEngine, QuizConfig};
