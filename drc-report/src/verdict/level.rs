//! Severity threshold ("report level")

use crate::error::ReportError;
use crate::model::Severity;
use serde::{Deserialize, Serialize};

/// Which severities make the check fail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLevel {
    /// Only errors fail
    #[default]
    Error,
    /// Warnings and errors fail
    Warning,
}

impl ReportLevel {
    pub fn counts_as_failure(&self, severity: &Severity) -> bool {
        match severity {
            Severity::Error => true,
            Severity::Warning => *self == Self::Warning,
            Severity::Other(_) => false,
        }
    }
}

impl std::str::FromStr for ReportLevel {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "errors" => Ok(Self::Error),
            "warning" | "warnings" => Ok(Self::Warning),
            _ => Err(ReportError::InvalidLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_level_policy() {
        let level = ReportLevel::Error;
        assert!(level.counts_as_failure(&Severity::Error));
        assert!(!level.counts_as_failure(&Severity::Warning));
        assert!(!level.counts_as_failure(&Severity::Other("ignore".into())));
    }

    #[test]
    fn test_warning_level_policy() {
        let level = ReportLevel::Warning;
        assert!(level.counts_as_failure(&Severity::Error));
        assert!(level.counts_as_failure(&Severity::Warning));
        assert!(!level.counts_as_failure(&Severity::Other("exclusion".into())));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("error".parse::<ReportLevel>().unwrap(), ReportLevel::Error);
        assert_eq!("Warning".parse::<ReportLevel>().unwrap(), ReportLevel::Warning);
        assert!(matches!(
            "fatal".parse::<ReportLevel>(),
            Err(ReportError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_default_is_error_only() {
        assert_eq!(ReportLevel::default(), ReportLevel::Error);
        assert_eq!(ReportLevel::default().to_string(), "error");
    }
}
