//! Comment classifier.
//!
//! Maps the free text of one comment to a [`Classification`] using
//! case-insensitive substring matching against fixed phrase tables. Pure and
//! total: every input, including the empty string, yields a value.

pub mod phrases;

use crate::domain::Classification;

pub use phrases::PhraseSet;
use phrases::{NOT_PASSED, PASSED, QA_PHRASES, RESULTS_MARKERS, RTT_PHRASES};

/// Classifies comment bodies against its phrase tables.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    qa: PhraseSet,
    rtt: PhraseSet,
    results: PhraseSet,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            qa: PhraseSet::new(QA_PHRASES),
            rtt: PhraseSet::new(RTT_PHRASES),
            results: PhraseSet::new(RESULTS_MARKERS),
        }
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a comment body.
    pub fn classify(&self, body: &str) -> Classification {
        let folded = body.to_lowercase();

        let Some(phrase) = self.qa.find_in(&folded) else {
            return Classification::NotQa;
        };
        log::debug!("Recognized QA phrase '{}'", phrase);

        if self.rtt.matches(&folded) {
            return Classification::ReadyToTest;
        }

        if !self.results.matches(&folded) {
            return Classification::ReportPending;
        }

        if folded.contains(NOT_PASSED) {
            Classification::ReportFailed
        } else if folded.contains(PASSED) {
            Classification::ReportPassed
        } else {
            Classification::AmbiguousReport
        }
    }
}

/// Classify a comment body with the default phrase tables.
pub fn classify(body: &str) -> Classification {
    Classifier::default().classify(body)
}
