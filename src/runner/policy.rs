//! When a run should fail the invoking step.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::{Classification, RunOutcome};

/// How to treat a QA report with results but no pass/fail token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguousPolicy {
    /// Leave labels alone and succeed, like a report still in progress
    #[default]
    Pending,
    /// Leave labels alone and fail the step
    Fail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FailurePolicy {
    /// Fail when the latest comment is not a QA comment
    pub fail_on_not_qa: bool,
    /// Fail when the QA report says "not passed"
    pub fail_on_qa_failed: bool,
    pub ambiguous: AmbiguousPolicy,
}

impl FailurePolicy {
    pub fn outcome(&self, classification: Classification) -> RunOutcome {
        match classification {
            Classification::NotQa if self.fail_on_not_qa => RunOutcome::Failed("Not a QA comment".to_string()),
            Classification::ReportFailed if self.fail_on_qa_failed => {
                RunOutcome::Failed("QA reported as NOT PASSED".to_string())
            }
            Classification::AmbiguousReport if self.ambiguous == AmbiguousPolicy::Fail => RunOutcome::Failed(
                "QA report has testing results but neither \"passed\" nor \"not passed\"".to_string(),
            ),
            _ => RunOutcome::Succeeded,
        }
    }
}
