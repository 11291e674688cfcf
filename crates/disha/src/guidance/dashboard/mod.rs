//! Dashboard-facing helpers: the career readiness score and the financial
//! planning calculators. Pure arithmetic over caller-supplied inputs.

pub mod finance;
pub mod readiness;
