//! A single design-rule finding

use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// One finding from the report.
///
/// `kind` is the category in the violation header line, `rule` is the rule
/// text on the line after it. All string fields are non-empty for parsed
/// violations; `objects` keeps the order of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: String,
    pub description: String,
    pub rule: String,
    pub severity: Severity,
    #[serde(default)]
    pub objects: Vec<String>,
}

impl Violation {
    pub fn builder(kind: impl Into<String>, description: impl Into<String>) -> ViolationBuilder {
        ViolationBuilder::new(kind, description)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Rendering used in the summary:
///
/// ```text
/// [<kind>]: <description> Severity: <severity>
///   <rule>
///   <object-1>
/// ```
///
/// No trailing newline.
impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]: {} Severity: {}\n  {}",
            self.kind, self.description, self.severity, self.rule
        )?;
        for object in &self.objects {
            write!(f, "\n  {}", object)?;
        }
        Ok(())
    }
}

/// Accumulates the lines of one violation block while parsing.
///
/// Created from the header line; only yields a [`Violation`] once a body
/// line supplied the rule and severity.
#[derive(Debug, Clone)]
pub struct ViolationBuilder {
    kind: String,
    description: String,
    rule: Option<String>,
    severity: Option<Severity>,
    objects: Vec<String>,
}

impl ViolationBuilder {
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            rule: None,
            severity: None,
            objects: Vec::new(),
        }
    }

    pub fn body(mut self, rule: impl Into<String>, severity: impl Into<Severity>) -> Self {
        self.rule = Some(rule.into());
        self.severity = Some(severity.into());
        self
    }

    pub fn object(mut self, object: impl Into<String>) -> Self {
        self.objects.push(object.into());
        self
    }

    pub fn push_object(&mut self, object: impl Into<String>) {
        self.objects.push(object.into());
    }

    /// Freeze into a [`Violation`]; `None` while the body is missing
    pub fn build(self) -> Option<Violation> {
        Some(Violation {
            kind: self.kind,
            description: self.description,
            rule: self.rule?,
            severity: self.severity?,
            objects: self.objects,
        })
    }
}
