//! Static catalogs the guidance engines consume: the adaptive question bank
//! and the course/career catalog. Both ship with built-in data and can be
//! replaced from disk (JSON for questions, CSV for courses).

pub mod courses;
pub mod questions;
