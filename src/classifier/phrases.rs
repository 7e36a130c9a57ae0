//! Fixed phrase tables used to recognize QA comments.
//!
//! All phrases are lowercase; they are matched as substrings of the
//! case-folded comment body.

/// Any of these marks a comment as part of the QA workflow.
pub const QA_PHRASES: &[&str] = &[
    "ready to test",
    "ready for test",
    "ready for testing",
    "ready for qa",
    "ready for quality assurance",
    "ready for quality assurance testing",
    "rtt",
    "qa report",
    "quality assurance tester report",
    "quality assurance trainee report",
    "qa tester report",
    "qa trainee report",
    "quality assurance report",
];

/// Ready-to-test phrases. A subset of [`QA_PHRASES`]; "ready for test" is
/// deliberately absent.
pub const RTT_PHRASES: &[&str] = &[
    "ready to test",
    "ready for testing",
    "ready for qa",
    "ready for quality assurance",
    "ready for quality assurance testing",
    "rtt",
];

/// Markers that a QA report states an outcome.
pub const RESULTS_MARKERS: &[&str] = &["testing results", "test results"];

/// Negated pass token. Checked before [`PASSED`].
pub const NOT_PASSED: &str = "not passed";

/// Pass token.
pub const PASSED: &str = "passed";

/// An immutable set of phrases matched by substring.
#[derive(Debug, Clone, Copy)]
pub struct PhraseSet {
    phrases: &'static [&'static str],
}

impl PhraseSet {
    pub const fn new(phrases: &'static [&'static str]) -> Self {
        Self { phrases }
    }

    /// First phrase contained in `folded`, if any. `folded` must already be
    /// lowercase.
    pub fn find_in(&self, folded: &str) -> Option<&'static str> {
        self.phrases.iter().copied().find(|phrase| folded.contains(phrase))
    }

    pub fn matches(&self, folded: &str) -> bool {
        self.find_in(folded).is_some()
    }
}
