//! Violation severity as emitted by the verification engine

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Severity of a single violation.
///
/// Values other than `error` and `warning` are kept verbatim in
/// [`Severity::Other`]; they never count as failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for Severity {
    fn from(raw: &str) -> Self {
        match raw {
            "error" => Self::Error,
            "warning" => Self::Warning,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}
