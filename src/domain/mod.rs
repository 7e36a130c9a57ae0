//! Domain types for qa-labels
//!
//! This module contains the value types that flow through a run:
//! - Comment: the pull request comment being classified
//! - Classification: the QA state a comment maps to
//! - LabelConfig / Action: which labels are managed and what to do with them
//! - RunOutcome: whether the invoking step should succeed or fail

pub mod classification;
pub mod comment;
pub mod label;
pub mod outcome;

pub use classification::Classification;
pub use comment::Comment;
pub use label::{Action, ActionKind, LabelConfig};
pub use outcome::RunOutcome;
