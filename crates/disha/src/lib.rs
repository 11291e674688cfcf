//! Career-guidance core for the Disha advisor.
//!
//! The crate is deliberately free of I/O in its engines: catalogs are supplied
//! by the caller, quiz state is owned by one session at a time, and every
//! scoring path is a pure function of its inputs so that stored responses can
//! be replayed or reordered safely.

pub mod catalog;
pub mod config;
pub mod error;
pub mod guidance;
pub mod telemetry;
