//! Verdict Evaluator
//!
//! Applies a [`ReportLevel`] to a parsed [`Report`](crate::model::Report)
//! and produces the printable summary plus the overall pass/fail decision.
//!
//! # Policy
//!
//! - `error` always fails
//! - `warning` fails only at [`ReportLevel::Warning`]
//! - anything else never fails

pub mod evaluator;
pub mod level;
pub mod outcome;

pub use evaluator::{evaluate, Evaluator, FAILED_MESSAGE, PASSED_MESSAGE};
pub use level::ReportLevel;
pub use outcome::{SectionVerdict, Verdict};
