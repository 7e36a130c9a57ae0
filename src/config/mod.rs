//! Configuration system for qa-labels.
//!
//! Two-layer configuration:
//! 1. Config file (./qa-labels.yml or ~/.config/qa-labels/qa-labels.yml)
//! 2. Action inputs (flags or INPUT_* environment variables), which win

mod global;
mod inputs;

pub use self::global::{Config, GitHubSettings};
pub use self::inputs::{ActionInputs, RunSettings, parse_flag};
