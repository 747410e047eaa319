//! Line matchers for the report grammar
//!
//! Each matcher looks at a single line (without terminator) and either
//! extracts its fields or rejects it. Captured fields are never empty.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum indent that marks an object line.
///
/// The engine indents objects by four spaces and the rendered summary by
/// two; both are accepted.
pub const OBJECT_INDENT: &str = "  ";

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\* Found (\d+) (.+?) \*\*").unwrap());

// Greedy kind: the last "]: " separates kind from description. A trailing
// " Severity: <word>" is not part of the description.
static VIOLATION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.+)\]: (.+?)(?: Severity: \S+)?$").unwrap());

// Greedy rule: the last "; Severity: " separates rule from severity.
static VIOLATION_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(.+); Severity: (.+)$").unwrap());

/// `** Found <N> <description> **`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader<'a> {
    pub declared: usize,
    pub description: &'a str,
}

/// `[<kind>]: <description>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViolationHeader<'a> {
    pub kind: &'a str,
    pub description: &'a str,
}

/// `<indent><rule>; Severity: <severity>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViolationBody<'a> {
    pub rule: &'a str,
    pub severity: &'a str,
}

pub fn section_header(line: &str) -> Option<SectionHeader<'_>> {
    let caps = SECTION_HEADER.captures(line)?;
    let declared = caps.get(1)?.as_str();
    let description = caps.get(2)?.as_str();
    Some(SectionHeader {
        // Overlong counts are kept as a saturated value, the count is informational
        declared: declared.parse().unwrap_or(usize::MAX),
        description,
    })
}

pub fn violation_header(line: &str) -> Option<ViolationHeader<'_>> {
    let caps = VIOLATION_HEADER.captures(line)?;
    let kind = caps.get(1)?.as_str();
    let description = caps.get(2)?.as_str().trim_end();
    if kind.trim().is_empty() || description.is_empty() {
        return None;
    }
    Some(ViolationHeader { kind, description })
}

pub fn violation_body(line: &str) -> Option<ViolationBody<'_>> {
    let caps = VIOLATION_BODY.captures(line)?;
    let rule = caps.get(1)?.as_str().trim_end();
    let severity = caps.get(2)?.as_str().trim();
    if rule.is_empty() || severity.is_empty() {
        return None;
    }
    Some(ViolationBody { rule, severity })
}

/// Indented line; returns the object with surrounding whitespace removed.
///
/// A whitespace-only indented line still matches and yields `""`, so it
/// stays inside the object list.
pub fn object_line(line: &str) -> Option<&str> {
    line.starts_with(OBJECT_INDENT).then(|| line.trim())
}
