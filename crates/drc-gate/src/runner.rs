//! Gate run: fetch the report, evaluate it, map the verdict

use crate::cli::OutputFormat;
use drc_report::{GateConfig, ReportResult, ReportSource, Verdict};
use std::path::{Path, PathBuf};

/// Exit status for a verdict: 0 when nothing failed, 1 otherwise
pub fn exit_code(failed: bool) -> u8 {
    u8::from(failed)
}

/// What the process prints and returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutput {
    pub stdout: String,
    pub exit_code: u8,
}

impl GateOutput {
    pub fn from_verdict(verdict: &Verdict, format: OutputFormat) -> Self {
        let stdout = match format {
            OutputFormat::Text => verdict.summary.clone(),
            OutputFormat::Json => format!("{}\n", verdict.to_json()),
        };
        Self {
            stdout,
            exit_code: exit_code(verdict.failed),
        }
    }
}

/// One check of one board
pub struct Gate<S> {
    config: GateConfig,
    source: S,
    board: PathBuf,
}

impl<S: ReportSource> Gate<S> {
    pub fn new(config: GateConfig, source: S, board: impl AsRef<Path>) -> Self {
        Self {
            config,
            source,
            board: board.as_ref().to_path_buf(),
        }
    }

    /// Fetch and parse the report, then evaluate it
    pub fn run(&self) -> ReportResult<Verdict> {
        let request = self.config.request(&self.board);
        let report = self.source.load(&request)?;
        tracing::info!(
            board = %self.board.display(),
            sections = report.sections().len(),
            violations = report.total_violations(),
            level = %self.config.level,
            "Report parsed"
        );
        Ok(self.config.evaluator().evaluate(&report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drc_report::{DrcRequest, ReportLevel, Units};
    use std::cell::RefCell;

    /// Records the request it was asked for
    struct RecordingSource {
        text: &'static str,
        seen: RefCell<Option<DrcRequest>>,
    }

    impl ReportSource for RecordingSource {
        fn fetch(&self, request: &DrcRequest) -> ReportResult<String> {
            *self.seen.borrow_mut() = Some(request.clone());
            Ok(self.text.to_string())
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(false), 0);
        assert_eq!(exit_code(true), 1);
    }

    #[test]
    fn test_request_built_from_config() {
        let source = RecordingSource {
            text: "",
            seen: RefCell::new(None),
        };
        let config = GateConfig {
            units: Units::Inches,
            strict: true,
            ..Default::default()
        };
        let gate = Gate::new(config, source, "sensor.kicad_pcb");
        let verdict = gate.run().unwrap();
        assert!(!verdict.failed);

        let seen = gate.source.seen.borrow().clone().unwrap();
        assert_eq!(seen.board, PathBuf::from("sensor.kicad_pcb"));
        assert_eq!(seen.units, Units::Inches);
        assert!(seen.strict);
    }

    #[test]
    fn test_output_text_and_json() {
        let source = RecordingSource {
            text: "** Found 1 DRC violations **\n[clearance]: Too close\n    Rule: x; Severity: warning\n",
            seen: RefCell::new(None),
        };
        let config = GateConfig {
            level: ReportLevel::Warning,
            ..Default::default()
        };
        let verdict = Gate::new(config, source, "board.kicad_pcb").run().unwrap();

        let text = GateOutput::from_verdict(&verdict, OutputFormat::Text);
        assert_eq!(text.exit_code, 1);
        assert!(text.stdout.starts_with("** Found 1 DRC violations: **\n"));

        let json = GateOutput::from_verdict(&verdict, OutputFormat::Json);
        assert_eq!(json.exit_code, 1);
        assert!(json.stdout.contains("\"failed\": true"));
    }
}
