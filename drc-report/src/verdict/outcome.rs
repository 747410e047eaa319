//! Verdict produced by the evaluator

use super::level::ReportLevel;
use crate::model::SectionKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-section tally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionVerdict {
    pub section: SectionKind,
    /// Violations parsed in the section
    pub total: usize,
    /// Violations counting as failures at the configured level
    pub failing: usize,
}

/// Outcome of evaluating one report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub timestamp: DateTime<Utc>,
    pub level: ReportLevel,
    /// True iff at least one violation counted as failing
    pub failed: bool,
    /// Sections in report order
    pub sections: Vec<SectionVerdict>,
    /// Rendered text for standard output
    pub summary: String,
}

impl Verdict {
    pub fn total_failing(&self) -> usize {
        self.sections.iter().map(|s| s.failing).sum()
    }

    pub fn total_violations(&self) -> usize {
        self.sections.iter().map(|s| s.total).sum()
    }

    /// One-line summary for logging.
    ///
    /// Example: `[FAIL] level=error | drc:2/5 unconnected:0/1`
    pub fn compact_text(&self) -> String {
        let status = if self.failed { "FAIL" } else { "PASS" };
        let sections: Vec<String> = self
            .sections
            .iter()
            .map(|s| format!("{}:{}/{}", s.section, s.failing, s.total))
            .collect();
        if sections.is_empty() {
            format!("[{}] level={} | no sections", status, self.level)
        } else {
            format!("[{}] level={} | {}", status, self.level, sections.join(" "))
        }
    }

    /// JSON string for machine consumption
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.to_string())
    }
}
