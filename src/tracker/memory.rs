//! In-memory issue tracker.
//!
//! Holds a fixed comment list and a mutable label set, and records every
//! mutation it receives. Used by tests and by `classify --simulate`.

use std::collections::BTreeSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Action, Comment};
use crate::error::{QaLabelsError, Result};
use crate::tracker::client::{IssueRef, IssueTracker};

#[derive(Debug, Default)]
pub struct MemoryTracker {
    comments: Vec<Comment>,
    labels: Mutex<BTreeSet<String>>,
    mutations: Mutex<Vec<Action>>,
    rejected_label: Option<String>,
}

impl MemoryTracker {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments,
            ..Default::default()
        }
    }

    /// Start with these labels already applied
    pub fn with_labels<I, S>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels.into_iter().map(Into::into).collect();
        Self {
            labels: Mutex::new(labels),
            ..self
        }
    }

    /// Answer any mutation of `label` with a 422, as GitHub does for invalid
    /// label names.
    pub fn rejecting(self, label: impl Into<String>) -> Self {
        Self {
            rejected_label: Some(label.into()),
            ..self
        }
    }

    /// Current label set
    pub fn labels(&self) -> BTreeSet<String> {
        self.labels.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Every mutation received, in order
    pub fn mutations(&self) -> Vec<Action> {
        self.mutations.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn check_rejected(&self, label: &str) -> Result<()> {
        if self.rejected_label.as_deref() == Some(label) {
            return Err(QaLabelsError::Api {
                status: 422,
                message: format!("Validation Failed: label '{}'", label),
            });
        }
        Ok(())
    }

    fn record(&self, action: Action) {
        self.mutations.lock().unwrap_or_else(|e| e.into_inner()).push(action);
    }
}

#[async_trait]
impl IssueTracker for MemoryTracker {
    async fn list_comments(&self, _issue: &IssueRef) -> Result<Vec<Comment>> {
        Ok(self.comments.clone())
    }

    async fn add_label(&self, _issue: &IssueRef, label: &str) -> Result<()> {
        self.check_rejected(label)?;
        self.record(Action::add(label));
        self.labels
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(label.to_string());
        Ok(())
    }

    async fn remove_label(&self, _issue: &IssueRef, label: &str) -> Result<()> {
        self.check_rejected(label)?;
        self.record(Action::remove(label));
        self.labels.lock().unwrap_or_else(|e| e.into_inner()).remove(label);
        Ok(())
    }
}
