//! Label reconciler.
//!
//! Turns a [`Classification`] and the managed label slots into the ordered
//! label mutations to apply. Pure: the same inputs always give the same list.
//!
//! Invariants:
//! - pass and fail are never both added
//! - a definitive pass clears the fail and ready-to-test labels
//! - no label name is both added and removed in one call

use crate::domain::{Action, Classification, LabelConfig};

/// Compute the label actions for a classification.
pub fn reconcile(classification: Classification, labels: &LabelConfig) -> Vec<Action> {
    let mut actions = Vec::new();

    match classification {
        Classification::NotQa | Classification::ReportPending | Classification::AmbiguousReport => {}
        Classification::ReadyToTest => {
            push_add(&mut actions, labels.rtt());
        }
        Classification::ReportFailed => {
            push_add(&mut actions, labels.fail());
            push_remove(&mut actions, labels.pass());
        }
        Classification::ReportPassed => {
            push_add(&mut actions, labels.pass());
            push_remove(&mut actions, labels.fail());
            push_remove(&mut actions, labels.rtt());
        }
    }

    actions
}

fn push_add(actions: &mut Vec<Action>, label: Option<&str>) {
    if let Some(label) = label {
        actions.push(Action::add(label));
    }
}

// Two slots may share a name; the add wins and duplicates collapse.
fn push_remove(actions: &mut Vec<Action>, label: Option<&str>) {
    let Some(label) = label else {
        return;
    };
    if actions.iter().any(|action| action.label == label) {
        log::debug!("Skipping removal of '{}', already handled in this run", label);
        return;
    }
    actions.push(Action::remove(label));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActionKind;

    fn full() -> LabelConfig {
        LabelConfig::new(
            Some("qa-passed".to_string()),
            Some("qa-failed".to_string()),
            Some("qa-rtt".to_string()),
        )
    }

    #[test]
    fn test_not_qa_emits_nothing() {
        assert!(reconcile(Classification::NotQa, &full()).is_empty());
    }

    #[test]
    fn test_pending_and_ambiguous_emit_nothing() {
        assert!(reconcile(Classification::ReportPending, &full()).is_empty());
        assert!(reconcile(Classification::AmbiguousReport, &full()).is_empty());
    }

    #[test]
    fn test_ready_to_test_adds_rtt() {
        assert_eq!(
            reconcile(Classification::ReadyToTest, &full()),
            vec![Action::add("qa-rtt")]
        );
    }

    #[test]
    fn test_ready_to_test_without_rtt_slot() {
        let labels = LabelConfig::new(Some("qa-passed".into()), Some("qa-failed".into()), None);
        assert!(reconcile(Classification::ReadyToTest, &labels).is_empty());
    }

    #[test]
    fn test_passed_adds_pass_and_clears_others() {
        assert_eq!(
            reconcile(Classification::ReportPassed, &full()),
            vec![
                Action::add("qa-passed"),
                Action::remove("qa-failed"),
                Action::remove("qa-rtt"),
            ]
        );
    }

    #[test]
    fn test_failed_adds_fail_and_removes_pass() {
        assert_eq!(
            reconcile(Classification::ReportFailed, &full()),
            vec![Action::add("qa-failed"), Action::remove("qa-passed")]
        );
    }

    #[test]
    fn test_failed_with_only_fail_slot() {
        let labels = LabelConfig::new(None, Some("qa-failed".into()), None);
        assert_eq!(
            reconcile(Classification::ReportFailed, &labels),
            vec![Action::add("qa-failed")]
        );
    }

    #[test]
    fn test_passed_without_pass_slot_still_clears() {
        let labels = LabelConfig::new(None, Some("qa-failed".into()), Some("qa-rtt".into()));
        assert_eq!(
            reconcile(Classification::ReportPassed, &labels),
            vec![Action::remove("qa-failed"), Action::remove("qa-rtt")]
        );
    }

    #[test]
    fn test_no_slots_emit_nothing() {
        let labels = LabelConfig::default();
        for classification in [
            Classification::ReadyToTest,
            Classification::ReportPassed,
            Classification::ReportFailed,
        ] {
            assert!(reconcile(classification, &labels).is_empty());
        }
    }

    #[test]
    fn test_shared_label_name_never_added_and_removed() {
        let labels = LabelConfig::new(Some("qa".into()), Some("qa".into()), Some("qa".into()));
        assert_eq!(reconcile(Classification::ReportPassed, &labels), vec![Action::add("qa")]);
        assert_eq!(reconcile(Classification::ReportFailed, &labels), vec![Action::add("qa")]);
    }

    #[test]
    fn test_never_adds_both_pass_and_fail() {
        for classification in [
            Classification::NotQa,
            Classification::ReadyToTest,
            Classification::ReportPending,
            Classification::ReportPassed,
            Classification::ReportFailed,
            Classification::AmbiguousReport,
        ] {
            let adds: Vec<_> = reconcile(classification, &full())
                .into_iter()
                .filter(|a| a.kind == ActionKind::Add)
                .map(|a| a.label)
                .collect();
            assert!(
                !(adds.contains(&"qa-passed".to_string()) && adds.contains(&"qa-failed".to_string())),
                "{:?}",
                classification
            );
        }
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let labels = full();
        assert_eq!(
            reconcile(Classification::ReportPassed, &labels),
            reconcile(Classification::ReportPassed, &labels)
        );
    }
}
