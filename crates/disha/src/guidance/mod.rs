//! The guidance engines: adaptive quiz (trait scoring + question selection),
//! course recommendation, and the dashboard helpers derived from them.

pub mod dashboard;
pub mod quiz;
pub mod recommend;
