//! Run outcome types.
//!
//! A run can complete all of its label mutations and still be reported as a
//! failure when the configured policy says so.

/// Outcome of a labelling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The invoking step should succeed
    Succeeded,
    /// The invoking step should fail with this message
    Failed(String),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_outcome_variants() {
        assert_eq!(RunOutcome::Succeeded, RunOutcome::Succeeded);
        assert_eq!(RunOutcome::Failed("test".into()), RunOutcome::Failed("test".into()));
        assert_ne!(RunOutcome::Succeeded, RunOutcome::Failed("test".into()));
    }

    #[test]
    fn test_run_outcome_is_success() {
        assert!(RunOutcome::Succeeded.is_success());
        assert!(!RunOutcome::Failed("Not a QA comment".into()).is_success());
    }
}
