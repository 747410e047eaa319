//! Board design-rule report parser and verdict engine
//!
//! Turns the text report of a board-verification engine into typed
//! violation records and decides, for a configured severity threshold,
//! whether the board has blocking issues.
//!
//! # Flow
//!
//! ```text
//! ReportSource → ReportParser → Report → Evaluator → Verdict (summary, failed)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use drc_report::{evaluate, ReportLevel, ReportParser};
//!
//! let report = ReportParser::parse_str(
//!     "** Found 1 DRC violations **\n\
//!      [clearance]: Track too close to pad.\n    \
//!      Clearance violation; Severity: error\n    \
//!      F1-F2\n",
//! );
//! let (summary, failed) = evaluate(&report, ReportLevel::Error);
//! assert!(failed);
//! assert!(summary.starts_with("** Found 1 DRC violations: **"));
//! ```

#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod verdict;

pub use config::{GateConfig, GateOverrides};
pub use engine::{DrcRequest, ReportSource, SavedReport, Units};
pub use error::{ReportError, ReportResult};
pub use model::{CountMismatch, Report, Section, SectionKind, Severity, Violation};
pub use parser::{read_report, read_report_file, ReportParser};
pub use verdict::{evaluate, Evaluator, ReportLevel, SectionVerdict, Verdict};
