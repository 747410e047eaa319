//! Severity policy and summary rendering

use super::level::ReportLevel;
use super::outcome::{SectionVerdict, Verdict};
use crate::model::{Report, Violation};
use chrono::Utc;

/// Last summary line when nothing failed
pub const PASSED_MESSAGE: &str = "No DRC errors found.";

/// Last summary line when at least one violation failed
pub const FAILED_MESSAGE: &str = "Found some DRC violations. See the report above.";

/// Evaluates parsed reports against a severity threshold
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    level: ReportLevel,
    check_declared_counts: bool,
}

impl Evaluator {
    pub fn new(level: ReportLevel) -> Self {
        Self {
            level,
            check_declared_counts: false,
        }
    }

    /// Log sections whose header count differs from the parsed violations.
    /// Never changes the verdict.
    pub fn with_declared_count_check(mut self, enabled: bool) -> Self {
        self.check_declared_counts = enabled;
        self
    }

    /// Violations of a section that fail at this level, in report order
    pub fn failing<'a>(&self, violations: &'a [Violation]) -> Vec<&'a Violation> {
        violations
            .iter()
            .filter(|v| self.level.counts_as_failure(&v.severity))
            .collect()
    }

    /// Render the summary and decide the verdict.
    ///
    /// Summary layout, per section in report order: a
    /// `** Found <n> <name>: **` line followed by each failing violation when
    /// any fail, then one empty line. The final line is [`PASSED_MESSAGE`] or
    /// [`FAILED_MESSAGE`].
    pub fn evaluate(&self, report: &Report) -> Verdict {
        if self.check_declared_counts {
            for mismatch in report.count_mismatches() {
                tracing::warn!(
                    section = %mismatch.section,
                    declared = mismatch.declared,
                    parsed = mismatch.parsed,
                    "Declared violation count does not match parsed violations"
                );
            }
        }

        let mut summary = String::new();
        let mut sections = Vec::with_capacity(report.sections().len());
        let mut failed = false;

        for section in report.sections() {
            let failing = self.failing(&section.violations);
            if !failing.is_empty() {
                failed = true;
                summary.push_str(&format!(
                    "** Found {} {}: **\n",
                    failing.len(),
                    section.kind.display_name()
                ));
                for violation in &failing {
                    summary.push_str(&format!("{}\n", violation));
                }
            }
            summary.push('\n');

            sections.push(SectionVerdict {
                section: section.kind,
                total: section.violations.len(),
                failing: failing.len(),
            });
        }

        summary.push_str(if failed { FAILED_MESSAGE } else { PASSED_MESSAGE });
        summary.push('\n');

        let verdict = Verdict {
            timestamp: Utc::now(),
            level: self.level,
            failed,
            sections,
            summary,
        };
        tracing::info!(verdict = %verdict.compact_text(), "Report evaluated");
        verdict
    }
}

/// Evaluate `report` at `level`, returning the summary text and whether the
/// check failed
pub fn evaluate(report: &Report, level: ReportLevel) -> (String, bool) {
    let verdict = Evaluator::new(level).evaluate(report);
    (verdict.summary, verdict.failed)
}
