//! Report data model
//!
//! A [`Report`] is an ordered list of [`Section`]s, each holding the
//! [`Violation`]s parsed under one recognised section header.

pub mod report;
pub mod section;
pub mod severity;
pub mod violation;

pub use report::{CountMismatch, Report, Section};
pub use section::SectionKind;
pub use severity::Severity;
pub use violation::{Violation, ViolationBuilder};
