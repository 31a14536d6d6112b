//! Test outcome value type
//!
//! A `TestOutcome` is one of four fixed states built from three facets:
//! whether the test ran, whether it passed, and whether it could be found.
//! Only the four named constants are reachable through the public API.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a single test execution.
///
/// The zero value returned by [`Default`] has every facet set to `false`.
/// It is what merging an empty sequence produces, and it compares equal to
/// [`TestOutcome::INCONCLUSIVE`] since equality is structural.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "OutcomeKind", into = "OutcomeKind"))]
pub struct TestOutcome {
    was_executed: bool,
    was_successful: bool,
    was_not_found: bool,
}

impl TestOutcome {
    /// The test ran and passed.
    pub const PASSED: TestOutcome = TestOutcome::new(true, true, false);

    /// The test ran and failed.
    pub const FAILED: TestOutcome = TestOutcome::new(true, false, false);

    /// The test did not run, or its result could not be determined.
    pub const INCONCLUSIVE: TestOutcome = TestOutcome::new(false, false, false);

    /// The test could not be located at all.
    pub const NOT_FOUND: TestOutcome = TestOutcome::new(false, false, true);

    const fn new(was_executed: bool, was_successful: bool, was_not_found: bool) -> Self {
        Self {
            was_executed,
            was_successful,
            was_not_found,
        }
    }

    pub const fn passed() -> Self {
        Self::PASSED
    }

    pub const fn failed() -> Self {
        Self::FAILED
    }

    pub const fn inconclusive() -> Self {
        Self::INCONCLUSIVE
    }

    pub const fn not_found() -> Self {
        Self::NOT_FOUND
    }

    /// Whether the test actually ran.
    pub const fn was_executed(&self) -> bool {
        self.was_executed
    }

    /// Whether the test ran and passed.
    pub const fn was_successful(&self) -> bool {
        self.was_successful
    }

    /// Whether the test could not be located.
    pub const fn was_not_found(&self) -> bool {
        self.was_not_found
    }

    pub fn is_passed(&self) -> bool {
        *self == Self::PASSED
    }

    pub fn is_failed(&self) -> bool {
        *self == Self::FAILED
    }

    pub fn is_inconclusive(&self) -> bool {
        *self == Self::INCONCLUSIVE
    }

    pub fn is_not_found(&self) -> bool {
        *self == Self::NOT_FOUND
    }

    /// The named state this outcome corresponds to.
    pub fn kind(&self) -> OutcomeKind {
        OutcomeKind::from(*self)
    }

    /// Short lowercase label, suitable for log fields.
    pub fn as_str(&self) -> &'static str {
        match self.kind() {
            OutcomeKind::Passed => "passed",
            OutcomeKind::Failed => "failed",
            OutcomeKind::Inconclusive => "inconclusive",
            OutcomeKind::NotFound => "not found",
        }
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WasExecuted: {}, WasSuccessful: {}, WasNotFound: {}",
            self.was_executed, self.was_successful, self.was_not_found
        )
    }
}

/// Named form of an outcome, used for matching and the serde encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OutcomeKind {
    Passed,
    Failed,
    Inconclusive,
    NotFound,
}

impl From<TestOutcome> for OutcomeKind {
    fn from(outcome: TestOutcome) -> Self {
        // Fields are private, so only the four named shapes (and the
        // all-false zero value) exist.
        match (outcome.was_executed, outcome.was_successful, outcome.was_not_found) {
            (true, true, _) => OutcomeKind::Passed,
            (true, false, _) => OutcomeKind::Failed,
            (false, _, true) => OutcomeKind::NotFound,
            (false, _, false) => OutcomeKind::Inconclusive,
        }
    }
}

impl From<OutcomeKind> for TestOutcome {
    fn from(kind: OutcomeKind) -> Self {
        match kind {
            OutcomeKind::Passed => TestOutcome::PASSED,
            OutcomeKind::Failed => TestOutcome::FAILED,
            OutcomeKind::Inconclusive => TestOutcome::INCONCLUSIVE,
            OutcomeKind::NotFound => TestOutcome::NOT_FOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(outcome: &TestOutcome) -> u64 {
        let mut hasher = DefaultHasher::new();
        outcome.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_named_constants_facets() {
        let passed = TestOutcome::passed();
        assert!(passed.was_executed());
        assert!(passed.was_successful());
        assert!(!passed.was_not_found());

        let failed = TestOutcome::failed();
        assert!(failed.was_executed());
        assert!(!failed.was_successful());
        assert!(!failed.was_not_found());

        let inconclusive = TestOutcome::inconclusive();
        assert!(!inconclusive.was_executed());
        assert!(!inconclusive.was_successful());
        assert!(!inconclusive.was_not_found());

        let not_found = TestOutcome::not_found();
        assert!(!not_found.was_executed());
        assert!(!not_found.was_successful());
        assert!(not_found.was_not_found());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(TestOutcome::passed(), TestOutcome::passed());
        assert_eq!(TestOutcome::failed(), TestOutcome::FAILED);
        assert_eq!(TestOutcome::not_found(), TestOutcome::not_found());
        assert_ne!(TestOutcome::passed(), TestOutcome::failed());
        assert_ne!(TestOutcome::inconclusive(), TestOutcome::not_found());
    }

    #[test]
    fn test_hash_matches_equality() {
        assert_eq!(hash_of(&TestOutcome::passed()), hash_of(&TestOutcome::PASSED));
        assert_eq!(
            hash_of(&TestOutcome::default()),
            hash_of(&TestOutcome::inconclusive())
        );
    }

    #[test]
    fn test_default_is_all_false() {
        let zero = TestOutcome::default();
        assert!(!zero.was_executed());
        assert!(!zero.was_successful());
        assert!(!zero.was_not_found());
        assert_eq!(zero, TestOutcome::inconclusive());
    }

    #[test]
    fn test_predicates() {
        assert!(TestOutcome::passed().is_passed());
        assert!(TestOutcome::failed().is_failed());
        assert!(TestOutcome::inconclusive().is_inconclusive());
        assert!(TestOutcome::not_found().is_not_found());
        assert!(!TestOutcome::not_found().is_inconclusive());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TestOutcome::passed().to_string(),
            "WasExecuted: true, WasSuccessful: true, WasNotFound: false"
        );
        assert_eq!(
            TestOutcome::not_found().to_string(),
            "WasExecuted: false, WasSuccessful: false, WasNotFound: true"
        );
    }

    #[test]
    fn test_kind_round_trips_named_constants() {
        for kind in [
            OutcomeKind::Passed,
            OutcomeKind::Failed,
            OutcomeKind::Inconclusive,
            OutcomeKind::NotFound,
        ] {
            assert_eq!(TestOutcome::from(kind).kind(), kind);
        }
        assert_eq!(TestOutcome::default().kind(), OutcomeKind::Inconclusive);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TestOutcome::passed().as_str(), "passed");
        assert_eq!(TestOutcome::failed().as_str(), "failed");
        assert_eq!(TestOutcome::inconclusive().as_str(), "inconclusive");
        assert_eq!(TestOutcome::not_found().as_str(), "not found");
        assert_eq!(TestOutcome::default().as_str(), "inconclusive");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TestOutcome::not_found()).unwrap();
        assert_eq!(json, "\"not_found\"");

        let deserialized: TestOutcome = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(deserialized, TestOutcome::failed());

        assert!(serde_json::from_str::<TestOutcome>("\"skipped\"").is_err());
    }
}
