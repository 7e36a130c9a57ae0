//! QA classification of a single comment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The QA state a comment maps to. Exactly one per comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// No recognized QA phrase
    NotQa,
    /// Pull request is ready for QA intake
    ReadyToTest,
    /// QA comment without a testing-results marker
    ReportPending,
    /// QA report whose results say "passed"
    ReportPassed,
    /// QA report whose results say "not passed"
    ReportFailed,
    /// QA report with a testing-results marker but no pass/fail token
    AmbiguousReport,
}

impl Classification {
    /// Whether the comment is part of the QA workflow at all
    pub fn is_qa(&self) -> bool {
        !matches!(self, Classification::NotQa)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::NotQa => "not a QA comment",
            Classification::ReadyToTest => "ready to test",
            Classification::ReportPending => "QA report pending",
            Classification::ReportPassed => "QA report passed",
            Classification::ReportFailed => "QA report not passed",
            Classification::AmbiguousReport => "QA report ambiguous",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_qa() {
        assert!(!Classification::NotQa.is_qa());
        assert!(Classification::ReadyToTest.is_qa());
        assert!(Classification::AmbiguousReport.is_qa());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Classification::AmbiguousReport).unwrap();
        assert_eq!(json, "\"ambiguous-report\"");
        let parsed: Classification = serde_json::from_str("\"ready-to-test\"").unwrap();
        assert_eq!(parsed, Classification::ReadyToTest);
    }
}
