//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - run: label a pull request from its latest comment
//! - classify: classify a comment body without touching GitHub

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use qa_labels::config::ActionInputs;
use qa_labels::domain::LabelConfig;

/// qa-labels - QA workflow labels from pull request comments
#[derive(Parser, Debug)]
#[command(name = "qa-labels")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify the latest pull request comment and update its labels
    Run(RunArgs),

    /// Classify a comment body and show the label actions it would produce
    Classify(ClassifyArgs),
}

/// Inputs for `run`. Each falls back to the workflow's INPUT_* variable.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Token used to call the GitHub API
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Repository owner
    #[arg(long, env = "INPUT_REPO-OWNER")]
    pub repo_owner: Option<String>,

    /// Repository name
    #[arg(long, env = "INPUT_REPO-NAME")]
    pub repo_name: Option<String>,

    /// owner/name, used when owner or name is not given
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Pull request number
    #[arg(long, env = "INPUT_PR-NUMBER")]
    pub pr_number: Option<String>,

    /// Label applied when QA passes
    #[arg(long, env = "INPUT_LABEL-PASS")]
    pub label_pass: Option<String>,

    /// Label applied when QA fails
    #[arg(long, env = "INPUT_LABEL-FAIL")]
    pub label_fail: Option<String>,

    /// Label applied when the pull request is ready to test
    #[arg(long, env = "INPUT_LABEL-RTT")]
    pub label_rtt: Option<String>,

    /// Fail when the latest comment is not a QA comment (true/false)
    #[arg(long, env = "INPUT_FAIL-ACTION-IF-NO-QACOMMENT")]
    pub fail_if_no_qa_comment: Option<String>,

    /// Fail when QA reports NOT PASSED (true/false)
    #[arg(long, env = "INPUT_FAIL-ACTION-IF-QA-FAILED")]
    pub fail_if_qa_failed: Option<String>,

    /// Treatment of reports with results but no verdict (pending, fail)
    #[arg(long, env = "INPUT_AMBIGUOUS-REPORT")]
    pub ambiguous_report: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Compute label changes without applying them
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    pub fn to_inputs(&self) -> ActionInputs {
        ActionInputs {
            github_token: self.github_token.clone(),
            repo_owner: self.repo_owner.clone(),
            repo_name: self.repo_name.clone(),
            repository: self.repository.clone(),
            pr_number: self.pr_number.clone(),
            label_pass: self.label_pass.clone(),
            label_fail: self.label_fail.clone(),
            label_rtt: self.label_rtt.clone(),
            fail_if_no_qa_comment: self.fail_if_no_qa_comment.clone(),
            fail_if_qa_failed: self.fail_if_qa_failed.clone(),
            ambiguous_report: self.ambiguous_report.clone(),
            api_url: self.api_url.clone(),
            dry_run: self.dry_run,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ClassifyArgs {
    /// Comment body (read from stdin when omitted)
    pub body: Option<String>,

    /// Pass label name (overrides config)
    #[arg(long)]
    pub label_pass: Option<String>,

    /// Fail label name (overrides config)
    #[arg(long)]
    pub label_fail: Option<String>,

    /// Ready-to-test label name (overrides config)
    #[arg(long)]
    pub label_rtt: Option<String>,

    /// Apply the actions to these labels and print the result
    #[arg(long = "current-label", value_name = "LABEL")]
    pub current_labels: Vec<String>,

    /// Simulate a full run even with no current labels
    #[arg(long)]
    pub simulate: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl ClassifyArgs {
    /// Label names from the command line, for layering over config
    pub fn labels(&self) -> LabelConfig {
        let set = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());
        LabelConfig::new(set(&self.label_pass), set(&self.label_fail), set(&self.label_rtt))
    }

    pub fn simulates(&self) -> bool {
        self.simulate || !self.current_labels.is_empty()
    }
}
