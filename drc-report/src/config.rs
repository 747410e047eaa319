//! Gate configuration
//!
//! Precedence: command-line flags > config file > environment > defaults.
//! The library covers the last three; flags are applied by the caller.

use crate::engine::{DrcRequest, Units};
use crate::error::{ReportError, ReportResult};
use crate::verdict::{Evaluator, ReportLevel};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for one gate run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Severity threshold
    pub level: ReportLevel,
    /// Units requested from the engine
    pub units: Units,
    /// Strict rule checking requested from the engine
    pub strict: bool,
    /// Warn when a section header count differs from the parsed violations
    pub check_declared_counts: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            level: ReportLevel::Error,
            units: Units::Millimetres,
            strict: false,
            check_declared_counts: false,
        }
    }
}

impl GateConfig {
    /// Defaults overridden by `DRC_REPORT_LEVEL`, `DRC_UNITS`, `DRC_STRICT`
    /// and `DRC_CHECK_COUNTS`. Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an environment lookup
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(val) = lookup("DRC_REPORT_LEVEL") {
            match val.parse() {
                Ok(level) => self.level = level,
                Err(e) => tracing::warn!("Ignoring DRC_REPORT_LEVEL: {e}"),
            }
        }
        if let Some(val) = lookup("DRC_UNITS") {
            match val.parse() {
                Ok(units) => self.units = units,
                Err(e) => tracing::warn!("Ignoring DRC_UNITS: {e}"),
            }
        }
        if let Some(val) = lookup("DRC_STRICT") {
            self.strict = parse_flag(&val);
        }
        if let Some(val) = lookup("DRC_CHECK_COUNTS") {
            self.check_declared_counts = parse_flag(&val);
        }
        self
    }

    /// Load from a TOML file; missing keys keep their defaults
    pub fn load(path: impl AsRef<Path>) -> ReportResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        Self::from_toml(&content).map_err(|message| ReportError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Environment, then the optional config file, then `flags`
    pub fn resolve(file: Option<&Path>, flags: &GateOverrides) -> ReportResult<Self> {
        let mut config = Self::from_env();
        if let Some(path) = file {
            config = GateOverrides::load(path)?.apply(config);
        }
        Ok(flags.apply(config))
    }

    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.level).with_declared_count_check(self.check_declared_counts)
    }

    pub fn request(&self, board: impl Into<PathBuf>) -> DrcRequest {
        DrcRequest {
            board: board.into(),
            units: self.units,
            strict: self.strict,
        }
    }
}

/// Partial configuration; `None` keeps the underlying value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateOverrides {
    pub level: Option<ReportLevel>,
    pub units: Option<Units>,
    pub strict: Option<bool>,
    pub check_declared_counts: Option<bool>,
}

impl GateOverrides {
    /// Read overrides from a TOML file
    pub fn load(path: impl AsRef<Path>) -> ReportResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        toml::from_str(&content).map_err(|e| ReportError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn apply(&self, mut config: GateConfig) -> GateConfig {
        if let Some(level) = self.level {
            config.level = level;
        }
        if let Some(units) = self.units {
            config.units = units;
        }
        if let Some(strict) = self.strict {
            config.strict = strict;
        }
        if let Some(check) = self.check_declared_counts {
            config.check_declared_counts = check;
        }
        config
    }
}

fn parse_flag(val: &str) -> bool {
    val.eq_ignore_ascii_case("true") || val == "1"
}
