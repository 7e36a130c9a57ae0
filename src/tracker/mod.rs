//! Issue tracker layer - where comments come from and labels go to.
//!
//! This module provides:
//! - IssueTracker trait for the remote comment/label store
//! - GitHubClient implementation over the GitHub REST API
//! - MemoryTracker, an in-memory implementation for tests and dry runs

pub mod client;
pub mod github;
pub mod memory;
pub mod types;

pub use client::{IssueRef, IssueTracker};
pub use github::{GitHubClient, GitHubConfig};
pub use memory::MemoryTracker;
