//! qa-labels - QA workflow labels from pull request comments
//!
//! Classifies the most recent comment on a pull request (ready to test, QA
//! report passed / not passed, ...) and reconciles the pull request's QA
//! labels to match. The classifier and reconciler are pure; the runner talks
//! to GitHub through the `IssueTracker` trait.

pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod reconciler;
pub mod runner;
pub mod tracker;

pub use error::{QaLabelsError, Result};
