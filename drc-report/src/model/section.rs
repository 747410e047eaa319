//! Recognised report sections

use serde::{Deserialize, Serialize};

/// One of the three categories of findings a report can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Rule-check violations
    Drc,
    /// Unconnected pads
    Unconnected,
    /// Footprint errors
    Footprint,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [Self::Drc, Self::Unconnected, Self::Footprint];

    /// Map the description of a `** Found <N> <description> **` header to a section
    pub fn from_description(description: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.report_description() == description)
    }

    /// Wording used by the verification engine in section headers
    pub fn report_description(&self) -> &'static str {
        match self {
            Self::Drc => "DRC violations",
            Self::Unconnected => "unconnected pads",
            Self::Footprint => "Footprint errors",
        }
    }

    /// Wording used in the rendered summary.
    ///
    /// Differs from [`report_description`](Self::report_description) for
    /// footprints; both tables are stable.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Drc => "DRC violations",
            Self::Unconnected => "unconnected pads",
            Self::Footprint => "footprints errors",
        }
    }

    /// Short key (`drc`, `unconnected`, `footprint`)
    pub fn key(&self) -> &'static str {
        match self {
            Self::Drc => "drc",
            Self::Unconnected => "unconnected",
            Self::Footprint => "footprint",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
