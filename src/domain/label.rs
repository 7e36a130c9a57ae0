//! Managed label slots and label mutations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label names for each QA slot. A slot that is unset or empty is not managed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub pass: Option<String>,
    pub fail: Option<String>,
    pub rtt: Option<String>,
}

impl LabelConfig {
    pub fn new(pass: Option<String>, fail: Option<String>, rtt: Option<String>) -> Self {
        Self { pass, fail, rtt }
    }

    /// Configured pass label, if any
    pub fn pass(&self) -> Option<&str> {
        managed(&self.pass)
    }

    /// Configured fail label, if any
    pub fn fail(&self) -> Option<&str> {
        managed(&self.fail)
    }

    /// Configured ready-to-test label, if any
    pub fn rtt(&self) -> Option<&str> {
        managed(&self.rtt)
    }

    /// Overlay `other` on top of `self`, slot by slot.
    pub fn merge(self, other: LabelConfig) -> Self {
        Self {
            pass: other.pass.or(self.pass),
            fail: other.fail.or(self.fail),
            rtt: other.rtt.or(self.rtt),
        }
    }
}

fn managed(slot: &Option<String>) -> Option<&str> {
    slot.as_deref().map(str::trim).filter(|name| !name.is_empty())
}

/// Kind of label mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Add,
    Remove,
}

/// A single label mutation to apply to the pull request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub label: String,
}

impl Action {
    pub fn add(label: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Add,
            label: label.into(),
        }
    }

    pub fn remove(label: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Remove,
            label: label.into(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ActionKind::Add => write!(f, "+{}", self.label),
            ActionKind::Remove => write!(f, "-{}", self.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slots_are_unmanaged() {
        let labels = LabelConfig::new(Some(String::new()), Some("   ".to_string()), None);
        assert_eq!(labels.pass(), None);
        assert_eq!(labels.fail(), None);
        assert_eq!(labels.rtt(), None);
    }

    #[test]
    fn test_slot_names_are_trimmed() {
        let labels = LabelConfig::new(Some(" QA: Passed ".to_string()), None, None);
        assert_eq!(labels.pass(), Some("QA: Passed"));
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let base = LabelConfig::new(Some("qa-passed".into()), Some("qa-failed".into()), None);
        let overlay = LabelConfig::new(None, Some("qa-broken".into()), Some("qa-rtt".into()));
        let merged = base.merge(overlay);
        assert_eq!(merged.pass(), Some("qa-passed"));
        assert_eq!(merged.fail(), Some("qa-broken"));
        assert_eq!(merged.rtt(), Some("qa-rtt"));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::add("qa-passed").to_string(), "+qa-passed");
        assert_eq!(Action::remove("qa-rtt").to_string(), "-qa-rtt");
    }
}
