//! Action inputs (Layer 2).
//!
//! Values supplied by the invoking workflow, either as command-line flags or
//! as `INPUT_*` environment variables. Empty values count as unset, since
//! workflows pass an empty string for inputs the user left out.

use clap::ValueEnum;

use crate::config::Config;
use crate::domain::LabelConfig;
use crate::error::{QaLabelsError, Result};
use crate::runner::{AmbiguousPolicy, RunOptions};
use crate::tracker::{GitHubConfig, IssueRef};

/// Raw inputs, before validation.
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    pub github_token: Option<String>,
    pub repo_owner: Option<String>,
    pub repo_name: Option<String>,
    /// `owner/name` fallback for owner and name
    pub repository: Option<String>,
    pub pr_number: Option<String>,
    pub label_pass: Option<String>,
    pub label_fail: Option<String>,
    pub label_rtt: Option<String>,
    pub fail_if_no_qa_comment: Option<String>,
    pub fail_if_qa_failed: Option<String>,
    pub ambiguous_report: Option<String>,
    pub api_url: Option<String>,
    pub dry_run: bool,
}

/// Everything needed to perform one run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub issue: IssueRef,
    pub token: String,
    pub github: GitHubConfig,
    pub options: RunOptions,
}

impl ActionInputs {
    /// Validate the inputs and layer them over `config`.
    pub fn resolve(&self, config: &Config) -> Result<RunSettings> {
        let token = present(&self.github_token)
            .ok_or_else(|| QaLabelsError::InvalidConfig("github-token is required".to_string()))?
            .to_string();

        let issue = self.issue()?;

        let labels = config.labels.clone().merge(LabelConfig::new(
            present(&self.label_pass).map(str::to_string),
            present(&self.label_fail).map(str::to_string),
            present(&self.label_rtt).map(str::to_string),
        ));

        let mut policy = config.policy.clone();
        if let Some(value) = present(&self.fail_if_no_qa_comment) {
            policy.fail_on_not_qa = parse_flag("fail-action-if-no-qacomment", value)?;
        }
        if let Some(value) = present(&self.fail_if_qa_failed) {
            policy.fail_on_qa_failed = parse_flag("fail-action-if-qa-failed", value)?;
        }
        if let Some(value) = present(&self.ambiguous_report) {
            policy.ambiguous = parse_ambiguous(value)?;
        }

        Ok(RunSettings {
            issue,
            token,
            github: config.github.client_config(present(&self.api_url)),
            options: RunOptions {
                labels,
                policy,
                dry_run: self.dry_run,
            },
        })
    }

    fn issue(&self) -> Result<IssueRef> {
        let number = present(&self.pr_number)
            .ok_or_else(|| QaLabelsError::InvalidConfig("pr-number is required".to_string()))?;
        let number = parse_pr_number(number)?;

        let fallback = match present(&self.repository) {
            Some(slug) => Some(IssueRef::from_slug(slug, number)?),
            None => None,
        };

        let owner = present(&self.repo_owner)
            .map(str::to_string)
            .or_else(|| fallback.as_ref().map(|issue| issue.owner.clone()))
            .ok_or_else(|| QaLabelsError::InvalidConfig("repo-owner is required".to_string()))?;
        let repo = present(&self.repo_name)
            .map(str::to_string)
            .or_else(|| fallback.as_ref().map(|issue| issue.repo.clone()))
            .ok_or_else(|| QaLabelsError::InvalidConfig("repo-name is required".to_string()))?;

        Ok(IssueRef::new(owner, repo, number))
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_pr_number(value: &str) -> Result<u64> {
    match value.trim_start_matches('#').parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(QaLabelsError::InvalidConfig(format!(
            "pr-number '{}' is not a positive integer",
            value
        ))),
    }
}

fn parse_ambiguous(value: &str) -> Result<AmbiguousPolicy> {
    AmbiguousPolicy::from_str(value, true).map_err(|_| {
        QaLabelsError::InvalidConfig(format!(
            "ambiguous-report must be 'pending' or 'fail', got '{}'",
            value
        ))
    })
}

/// Parse a workflow boolean input.
pub fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(QaLabelsError::InvalidConfig(format!(
            "{} must be true or false, got '{}'",
            name, value
        ))),
    }
}
