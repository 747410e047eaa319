//! Integration tests for the verdict evaluator: severity policy and the
//! exact summary text consumed by scripts.

use drc_report::{evaluate, Evaluator, GateConfig, ReportLevel, ReportParser, SectionKind};

const MIXED_REPORT: &str = "\
** Found 2 DRC violations **
[clearance]: Clearance violation
    Rule: netclass 'Default'; Severity: error
    @(101.6000 mm, 50.8000 mm): Track [GND] on F.Cu
[silk_overlap]: Silkscreen overlap
    Rule: silk clearance; Severity: warning
    @(110.0000 mm, 40.0000 mm): Reference field of U2
";

/// Test: error-only threshold fails on the error and ignores the warning
#[test]
fn test_error_level_marks_only_errors() {
    let report = ReportParser::parse_str(MIXED_REPORT);
    let verdict = Evaluator::new(ReportLevel::Error).evaluate(&report);

    assert!(verdict.failed);
    assert_eq!(verdict.sections.len(), 1);
    assert_eq!(verdict.sections[0].section, SectionKind::Drc);
    assert_eq!(verdict.sections[0].total, 2);
    assert_eq!(verdict.sections[0].failing, 1);
    assert!(verdict.summary.contains("[clearance]"));
    assert!(!verdict.summary.contains("[silk_overlap]"));
}

/// Test: warning threshold fails on both
#[test]
fn test_warning_level_marks_both() {
    let report = ReportParser::parse_str(MIXED_REPORT);
    let verdict = Evaluator::new(ReportLevel::Warning).evaluate(&report);

    assert!(verdict.failed);
    assert_eq!(verdict.sections[0].failing, 2);
    assert!(verdict.summary.contains("[silk_overlap]"));
}

/// Test: empty report passes with the fixed message
#[test]
fn test_empty_report_passes() {
    let report = ReportParser::parse_str("");
    for level in [ReportLevel::Error, ReportLevel::Warning] {
        let (summary, failed) = evaluate(&report, level);
        assert!(!failed);
        assert_eq!(summary, "No DRC errors found.\n");
    }
}

/// Test: golden summary for the end-to-end example
#[test]
fn test_end_to_end_golden_summary() {
    let report = ReportParser::parse_str(
        "** Found 1 DRC violations **\n\
         [clearance]: Track too close to pad. Severity: error\n  \
         Clearance violation; Severity: error\n  \
         F1-F2\n",
    );

    let expected = "\
** Found 1 DRC violations: **
[clearance]: Track too close to pad. Severity: error
  Clearance violation
  F1-F2

Found some DRC violations. See the report above.
";
    for level in [ReportLevel::Error, ReportLevel::Warning] {
        let (summary, failed) = evaluate(&report, level);
        assert!(failed);
        assert_eq!(summary, expected);
    }
}

/// Test: golden summary with several sections, one of them passing
#[test]
fn test_multi_section_golden_summary() {
    let report = ReportParser::parse_str(
        "** Found 1 DRC violations **\n\
         [silk_overlap]: Silkscreen overlap\n    \
         Rule: silk clearance; Severity: warning\n\
         ** Found 1 unconnected pads **\n\
         [unconnected_items]: Missing connection between items\n    \
         Local override; Severity: error\n    \
         Pad 2 [SDA] of U1\n    \
         Pad 4 [SDA] of J1\n\
         ** Found 0 Footprint errors **\n",
    );

    let expected = concat!(
        "\n",
        "** Found 1 unconnected pads: **\n",
        "[unconnected_items]: Missing connection between items Severity: error\n",
        "  Local override\n",
        "  Pad 2 [SDA] of U1\n",
        "  Pad 4 [SDA] of J1\n",
        "\n",
        "\n",
        "Found some DRC violations. See the report above.\n",
    );
    let (summary, failed) = evaluate(&report, ReportLevel::Error);
    assert!(failed);
    assert_eq!(summary, expected);
}

/// Test: rendering is stable across repeated evaluations
#[test]
fn test_rendering_is_idempotent() {
    let report = ReportParser::parse_str(MIXED_REPORT);
    let violation = &report.get(SectionKind::Drc).unwrap()[0];
    assert_eq!(violation.to_string(), violation.to_string());

    let (first, _) = evaluate(&report, ReportLevel::Warning);
    let (second, _) = evaluate(&report, ReportLevel::Warning);
    assert_eq!(first, second);
}

/// Test: declared-count checking never changes the verdict
#[test]
fn test_count_check_is_informational() {
    let report = ReportParser::parse_str(
        "** Found 7 DRC violations **\n\
         [silk_overlap]: Silkscreen overlap\n    \
         Rule: silk clearance; Severity: warning\n",
    );
    let config = GateConfig {
        check_declared_counts: true,
        ..Default::default()
    };

    let verdict = config.evaluator().evaluate(&report);
    assert!(!verdict.failed);
    assert_eq!(report.count_mismatches().len(), 1);
}

/// Test: a blank indented line inside the object list does not hide later errors
#[test]
fn test_blank_object_line_keeps_later_errors() {
    let report = ReportParser::parse_str(
        "** Found 2 DRC violations **\n\
         [silk_overlap]: Silkscreen overlap\n    \
         Rule: silk clearance; Severity: warning\n    \
         U2\n    \
         \n\
         [clearance]: Clearance violation\n    \
         Rule: netclass 'Default'; Severity: error\n",
    );

    let (summary, failed) = evaluate(&report, ReportLevel::Error);
    assert!(failed);
    assert!(summary.contains("[clearance]"));
}
