//! Report parsing state machine
//!
//! ```text
//! ScanningForSection → ReadingViolationHeader → ReadingViolationBody → ReadingObjects
//!         ↑                     ↑    │                   │                   │
//!         │                     │    │ no match          │ no match          │
//!         └─────────────────────┼────┴───────────────────┘                   │
//!                               └────────────────────────────────────────────┘
//! ```
//!
//! Single linear pass with one line of lookahead. Stream exhaustion is the
//! only terminal condition.

use super::cursor::LineCursor;
use super::grammar;
use crate::error::{ReportError, ReportResult};
use crate::model::{Report, SectionKind, Violation, ViolationBuilder};
use std::io::BufRead;
use std::path::Path;

/// Parser states
#[derive(Debug, Clone)]
pub enum ParseState {
    /// Looking for a `** Found <N> ... **` header
    ScanningForSection,
    /// Inside a section, expecting `[<kind>]: <description>` or the end of it
    ReadingViolationHeader,
    /// Header read, expecting `<rule>; Severity: <severity>`
    ReadingViolationBody(ViolationBuilder),
    /// Body read, collecting indented object lines
    ReadingObjects(ViolationBuilder),
}

/// Section being filled. `kind` is `None` for headers outside the section
/// table: their blocks are consumed and dropped.
struct OpenSection {
    kind: Option<SectionKind>,
    declared: usize,
    violations: Vec<Violation>,
}

/// Parser for the engine's text report
pub struct ReportParser;

impl ReportParser {
    /// Parse a sequence of lines (terminators already removed)
    pub fn parse_lines<I>(lines: I) -> Report
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut cursor = LineCursor::new(lines);
        let mut report = Report::new();
        let mut open: Option<OpenSection> = None;
        let mut state = ParseState::ScanningForSection;

        loop {
            state = match state {
                ParseState::ScanningForSection => {
                    let Some(line) = cursor.current() else {
                        break;
                    };
                    let header = grammar::section_header(line)
                        .map(|h| (SectionKind::from_description(h.description), h));
                    match header {
                        Some((kind, header)) => {
                            match kind {
                                Some(kind) => tracing::debug!(
                                    section = %kind,
                                    declared = header.declared,
                                    "Section header"
                                ),
                                None => tracing::debug!(
                                    description = header.description,
                                    line = cursor.consumed() + 1,
                                    "Skipping unrecognized section"
                                ),
                            }
                            open = Some(OpenSection {
                                kind,
                                declared: header.declared,
                                violations: Vec::new(),
                            });
                            cursor.advance();
                            ParseState::ReadingViolationHeader
                        }
                        None => {
                            cursor.advance();
                            ParseState::ScanningForSection
                        }
                    }
                }

                ParseState::ReadingViolationHeader => {
                    let builder = cursor
                        .current()
                        .and_then(grammar::violation_header)
                        .map(|h| ViolationBuilder::new(h.kind, h.description));
                    match builder {
                        Some(builder) => {
                            cursor.advance();
                            ParseState::ReadingViolationBody(builder)
                        }
                        None => {
                            Self::close_section(&mut report, open.take());
                            ParseState::ScanningForSection
                        }
                    }
                }

                ParseState::ReadingViolationBody(builder) => {
                    let body = cursor
                        .current()
                        .and_then(grammar::violation_body)
                        .map(|b| (b.rule.to_string(), b.severity.to_string()));
                    match body {
                        Some((rule, severity)) => {
                            cursor.advance();
                            ParseState::ReadingObjects(builder.body(rule, severity.as_str()))
                        }
                        None => {
                            // Known quirk: the header is dropped together with the section.
                            tracing::debug!(
                                line = cursor.consumed(),
                                ?builder,
                                "Violation header without body discarded"
                            );
                            Self::close_section(&mut report, open.take());
                            ParseState::ScanningForSection
                        }
                    }
                }

                ParseState::ReadingObjects(mut builder) => {
                    while let Some(object) = cursor.current().and_then(grammar::object_line) {
                        // Blank indented lines stay in the object list but carry no object
                        if !object.is_empty() {
                            builder.push_object(object);
                        }
                        cursor.advance();
                    }
                    if let (Some(section), Some(violation)) = (open.as_mut(), builder.build()) {
                        tracing::trace!(
                            kind = %violation.kind,
                            severity = %violation.severity,
                            objects = violation.objects.len(),
                            "Violation"
                        );
                        section.violations.push(violation);
                    }
                    ParseState::ReadingViolationHeader
                }
            };
        }

        report
    }

    /// Parse a whole report held in memory
    pub fn parse_str(text: &str) -> Report {
        Self::parse_lines(text.lines())
    }

    fn close_section(report: &mut Report, section: Option<OpenSection>) {
        let Some(section) = section else {
            return;
        };
        match section.kind {
            Some(kind) => report.insert(kind, section.declared, section.violations),
            None if !section.violations.is_empty() => tracing::debug!(
                dropped = section.violations.len(),
                "Dropped violations of unrecognized section"
            ),
            None => {}
        }
    }
}

/// Read and parse a report stream.
///
/// Only I/O errors of the reader are reported; the grammar itself never fails.
pub fn read_report<R: BufRead>(reader: R) -> ReportResult<Report> {
    let lines = reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ReportError::io("<stream>", e))?;
    Ok(ReportParser::parse_lines(lines))
}

/// Read and parse a report file
pub fn read_report_file(path: impl AsRef<Path>) -> ReportResult<Report> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| ReportError::io(path, e))?;
    let lines = std::io::BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ReportError::io(path, e))?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "Read report file");
    Ok(ReportParser::parse_lines(lines))
}
