//! Runner module - one labelling pass over a pull request.
//!
//! This module provides:
//! - QaRunner, which fetches the latest comment, classifies it, reconciles
//!   labels and applies them through an IssueTracker
//! - FailurePolicy, deciding when a completed run should still fail the step
//! - RunReport, what a run saw and did

mod policy;
mod qa_runner;

pub use policy::{AmbiguousPolicy, FailurePolicy};
pub use qa_runner::{QaRunner, RunOptions, RunReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        let policy = FailurePolicy::default();
        assert_eq!(policy.ambiguous, AmbiguousPolicy::Pending);
        assert!(!RunOptions::default().dry_run);
    }
}
