//! Interface to the external verification engine
//!
//! Producing a report (loading the board, running the rule checker) happens
//! outside this crate. [`ReportSource`] is the seam where report text
//! enters; [`SavedReport`] reads one the engine already wrote.

use crate::error::{ReportError, ReportResult};
use crate::model::Report;
use crate::parser::ReportParser;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Measurement unit the engine uses for coordinates in the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    #[default]
    Millimetres,
    Inches,
}

impl std::str::FromStr for Units {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimetres" | "millimeters" => Ok(Self::Millimetres),
            "in" | "inch" | "inches" => Ok(Self::Inches),
            _ => Err(ReportError::InvalidUnits(s.to_string())),
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Millimetres => write!(f, "mm"),
            Self::Inches => write!(f, "in"),
        }
    }
}

/// What the engine needs to produce a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrcRequest {
    /// Board design file
    pub board: PathBuf,
    pub units: Units,
    /// Strict rule checking in the engine
    pub strict: bool,
}

impl DrcRequest {
    pub fn new(board: impl Into<PathBuf>) -> Self {
        Self {
            board: board.into(),
            units: Units::default(),
            strict: false,
        }
    }
}

/// Supplies the raw report text for a request
pub trait ReportSource {
    fn fetch(&self, request: &DrcRequest) -> ReportResult<String>;

    /// Fetch and parse
    fn load(&self, request: &DrcRequest) -> ReportResult<Report> {
        let text = self.fetch(request)?;
        Ok(ReportParser::parse_str(&text))
    }
}

/// Report written earlier by the engine. The path `-` reads standard input.
#[derive(Debug, Clone)]
pub struct SavedReport {
    path: PathBuf,
}

impl SavedReport {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn stdin() -> Self {
        Self::new("-")
    }

    pub fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

impl ReportSource for SavedReport {
    fn fetch(&self, request: &DrcRequest) -> ReportResult<String> {
        tracing::debug!(
            report = %self.path.display(),
            board = %request.board.display(),
            units = %request.units,
            strict = request.strict,
            "Reading saved report"
        );

        if self.is_stdin() {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| ReportError::io(&self.path, e))?;
            Ok(text)
        } else {
            std::fs::read_to_string(&self.path).map_err(|e| ReportError::io(&self.path, e))
        }
    }
}
