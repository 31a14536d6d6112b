//! Merging several outcomes into one summary outcome.
//!
//! Priority, highest first: failed, then inconclusive or not found, then
//! passed. A single element is returned as is and an empty sequence yields
//! the zero value.

use crate::types::TestOutcome;
use std::borrow::Borrow;
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    #[error("Invalid argument: sequence must not be null")]
    MissingSequence,
}

pub type OutcomeResult<T> = Result<T, OutcomeError>;

/// Merge an optional sequence of outcomes.
///
/// `None` stands for an absent sequence and is rejected with
/// [`OutcomeError::MissingSequence`]. Any present sequence, including an
/// empty one, merges via [`merge_all`].
pub fn merge<I>(outcomes: Option<I>) -> OutcomeResult<TestOutcome>
where
    I: IntoIterator,
    I::Item: Borrow<TestOutcome>,
{
    let outcomes = outcomes.ok_or(OutcomeError::MissingSequence)?;
    Ok(merge_all(outcomes))
}

/// Merge a sequence of outcomes into one.
///
/// - empty: the zero value, [`TestOutcome::default`]
/// - one element: that element, unchanged
/// - otherwise: `FAILED` if any element failed, else `INCONCLUSIVE` if any
///   element is inconclusive or not found, else `PASSED`
///
/// Not found collapses into inconclusive once there is more than one
/// element, so the summary no longer says why it was inconclusive.
///
/// The input is enumerated exactly once.
pub fn merge_all<I>(outcomes: I) -> TestOutcome
where
    I: IntoIterator,
    I::Item: Borrow<TestOutcome>,
{
    let items: Vec<TestOutcome> = outcomes.into_iter().map(|o| *o.borrow()).collect();

    let merged = match items.as_slice() {
        [] => TestOutcome::default(),
        [single] => *single,
        _ if items.iter().any(TestOutcome::is_failed) => TestOutcome::FAILED,
        _ if items
            .iter()
            .any(|o| o.is_inconclusive() || o.is_not_found()) =>
        {
            TestOutcome::INCONCLUSIVE
        }
        _ => TestOutcome::PASSED,
    };

    trace!(count = items.len(), merged = merged.as_str(), "Merged test outcomes");
    merged
}

/// Extension trait for merging any collection or iterator of outcomes.
///
/// ```
/// use outcome::{MergeOutcomes, TestOutcome};
///
/// let summary = [TestOutcome::passed(), TestOutcome::failed()].merge();
/// assert_eq!(summary, TestOutcome::failed());
/// ```
pub trait MergeOutcomes {
    fn merge(self) -> TestOutcome;
}

impl<I> MergeOutcomes for I
where
    I: IntoIterator,
    I::Item: Borrow<TestOutcome>,
{
    fn merge(self) -> TestOutcome {
        merge_all(self)
    }
}

impl FromIterator<TestOutcome> for TestOutcome {
    fn from_iter<T: IntoIterator<Item = TestOutcome>>(iter: T) -> Self {
        merge_all(iter)
    }
}

impl<'a> FromIterator<&'a TestOutcome> for TestOutcome {
    fn from_iter<T: IntoIterator<Item = &'a TestOutcome>>(iter: T) -> Self {
        merge_all(iter)
    }
}
