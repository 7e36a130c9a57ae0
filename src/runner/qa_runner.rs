//! QA runner implementation - labels a pull request from its latest comment.
//!
//! Each run:
//! 1. Fetches every comment and keeps the most recent
//! 2. Classifies it
//! 3. Reconciles the classification into label actions
//! 4. Applies the actions one at a time, in order (skipped on dry runs)
//! 5. Decides the outcome from the failure policy

use std::sync::Arc;

use crate::classifier::Classifier;
use crate::domain::{Action, ActionKind, Classification, Comment, LabelConfig, RunOutcome};
use crate::error::{QaLabelsError, Result};
use crate::reconciler::reconcile;
use crate::runner::policy::FailurePolicy;
use crate::tracker::{IssueRef, IssueTracker};

/// Configuration for a QaRunner.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Managed label slots
    pub labels: LabelConfig,
    /// When a completed run should fail the step
    pub policy: FailurePolicy,
    /// Compute actions without applying them
    pub dry_run: bool,
}

/// What a run saw and did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub issue: IssueRef,
    /// Author of the classified comment
    pub author: String,
    pub classification: Classification,
    /// Actions in the order they were (or would have been) applied
    pub actions: Vec<Action>,
    /// False on dry runs
    pub applied: bool,
    pub outcome: RunOutcome,
}

pub struct QaRunner<T: IssueTracker> {
    tracker: Arc<T>,
    classifier: Classifier,
    options: RunOptions,
}

impl<T: IssueTracker> QaRunner<T> {
    pub fn new(tracker: Arc<T>, options: RunOptions) -> Self {
        Self {
            tracker,
            classifier: Classifier::default(),
            options,
        }
    }

    /// Run one labelling pass over `issue`.
    ///
    /// Tracker errors abort the run; label actions already applied stay
    /// applied.
    pub async fn run(&self, issue: &IssueRef) -> Result<RunReport> {
        log::info!("Fetching comments from {}", issue);
        let comments = self.tracker.list_comments(issue).await?;
        let comment = Comment::latest(comments).ok_or_else(|| QaLabelsError::NoComments(issue.to_string()))?;
        log::info!("Last comment found, by {}", comment.author);

        let classification = self.classifier.classify(&comment.body);
        if classification.is_qa() {
            log::info!("QA comment found: {}", classification);
        } else {
            log::info!("Not a QA comment");
        }
        if classification == Classification::AmbiguousReport {
            log::warn!("QA report has testing results but no pass/fail verdict; leaving labels unchanged");
        }

        let actions = reconcile(classification, &self.options.labels);
        if self.options.dry_run {
            for action in &actions {
                log::info!("Dry run: would apply {} on {}", action, issue);
            }
        } else {
            self.apply(issue, &actions).await?;
        }

        let outcome = self.options.policy.outcome(classification);
        if let RunOutcome::Failed(reason) = &outcome {
            log::error!("Run failed: {}", reason);
        }

        Ok(RunReport {
            issue: issue.clone(),
            author: comment.author,
            classification,
            actions,
            applied: !self.options.dry_run,
            outcome,
        })
    }

    async fn apply(&self, issue: &IssueRef, actions: &[Action]) -> Result<()> {
        for action in actions {
            match action.kind {
                ActionKind::Add => {
                    log::info!("Adding label '{}' to {}", action.label, issue);
                    self.tracker.add_label(issue, &action.label).await?;
                }
                ActionKind::Remove => {
                    log::info!("Removing label '{}' from {}", action.label, issue);
                    self.tracker.remove_label(issue, &action.label).await?;
                }
            }
        }
        Ok(())
    }
}
