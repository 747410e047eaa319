//! Command-line arguments

use clap::{Parser, ValueEnum};
use drc_report::{GateOverrides, ReportLevel, Units};
use std::path::PathBuf;

/// What to print on standard output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Machine-readable verdict
    Json,
}

/// Check a board design-rule report and exit non-zero on blocking violations
#[derive(Parser, Debug)]
#[command(name = "drc-gate", author, version, about, long_about = None)]
pub struct Args {
    /// Report written by the verification engine (`-` reads standard input)
    #[arg(long, short, default_value = "-")]
    pub report: PathBuf,

    /// Board design the report belongs to
    #[arg(long, short, default_value = "board.kicad_pcb")]
    pub board: PathBuf,

    /// Severity that fails the check: `error` or `warning`
    #[arg(long, short)]
    pub level: Option<ReportLevel>,

    /// Units of the report coordinates: `mm` or `in`
    #[arg(long)]
    pub units: Option<Units>,

    /// Report was produced with strict rule checking
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Warn when a section's declared count differs from its parsed violations
    #[arg(long, default_value_t = false)]
    pub check_counts: bool,

    /// TOML config file (overrides DRC_* environment variables)
    #[arg(long, env = "DRC_GATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Args {
    /// Flags that take precedence over file and environment
    pub fn overrides(&self) -> GateOverrides {
        GateOverrides {
            level: self.level,
            units: self.units,
            strict: self.strict.then_some(true),
            check_declared_counts: self.check_counts.then_some(true),
        }
    }
}
