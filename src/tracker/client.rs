//! Core tracker types and trait definitions

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::Comment;
use crate::error::{QaLabelsError, Result};

/// Identifies one pull request (GitHub treats pull requests as issues for
/// comments and labels).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl IssueRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }

    /// Build from an `owner/name` repository slug, as found in
    /// `GITHUB_REPOSITORY`.
    pub fn from_slug(slug: &str, number: u64) -> Result<Self> {
        match slug.trim().split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self::new(owner, repo, number))
            }
            _ => Err(QaLabelsError::InvalidConfig(format!(
                "repository '{}' is not in owner/name form",
                slug
            ))),
        }
    }
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// Remote store of pull request comments and labels.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// All comments on the issue, in the order the store lists them
    async fn list_comments(&self, issue: &IssueRef) -> Result<Vec<Comment>>;

    /// Add a label to the issue
    async fn add_label(&self, issue: &IssueRef, label: &str) -> Result<()>;

    /// Remove a label from the issue. Removing an absent label is not an error.
    async fn remove_label(&self, issue: &IssueRef, label: &str) -> Result<()>;
}
