//! Report Parser
//!
//! Turns the line-oriented text report of the verification engine into a
//! [`Report`](crate::model::Report).
//!
//! # Grammar
//!
//! ```text
//! ** Found <N> <section-description> **      section header
//! [<kind>]: <description>                    violation header
//!     <rule>; Severity: <severity>           violation body
//!     <object>                               zero or more object lines
//! ```
//!
//! Parsing never fails. A block that stops matching ends its section and the
//! offending line is examined again as a potential section header.

pub mod cursor;
pub mod grammar;
pub mod machine;

pub use cursor::LineCursor;
pub use machine::{read_report, read_report_file, ParseState, ReportParser};
