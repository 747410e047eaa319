//! Parsed report: sections in the order they were encountered

use super::section::SectionKind;
use super::violation::Violation;
use serde::{Deserialize, Serialize};

/// Violations found under one recognised section header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    /// Count stated in the `** Found <N> ... **` header. Not validated.
    pub declared: usize,
    pub violations: Vec<Violation>,
}

/// A section whose declared count differs from what was parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountMismatch {
    pub section: SectionKind,
    pub declared: usize,
    pub parsed: usize,
}

/// Mapping from section to violations, in first-encounter order.
///
/// A section is present iff its header was seen, even with zero violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a section. A repeated section replaces the earlier
    /// violations but keeps its original position.
    pub fn insert(&mut self, kind: SectionKind, declared: usize, violations: Vec<Violation>) {
        match self.sections.iter_mut().find(|s| s.kind == kind) {
            Some(existing) => {
                existing.declared = declared;
                existing.violations = violations;
            }
            None => self.sections.push(Section {
                kind,
                declared,
                violations,
            }),
        }
    }

    pub fn get(&self, kind: SectionKind) -> Option<&[Violation]> {
        self.sections
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.violations.as_slice())
    }

    pub fn contains(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn total_violations(&self) -> usize {
        self.sections.iter().map(|s| s.violations.len()).sum()
    }

    /// Sections whose header count does not match the parsed violations
    pub fn count_mismatches(&self) -> Vec<CountMismatch> {
        self.sections
            .iter()
            .filter(|s| s.declared != s.violations.len())
            .map(|s| CountMismatch {
                section: s.kind,
                declared: s.declared,
                parsed: s.violations.len(),
            })
            .collect()
    }
}
