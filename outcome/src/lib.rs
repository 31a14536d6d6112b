//! Test outcome value type and merge reduction
//!
//! [`TestOutcome`] classifies a single test run as passed, failed,
//! inconclusive or not found. [`merge`] and [`MergeOutcomes`] reduce many
//! outcomes into one summary outcome.

pub mod merge;
pub mod types;

pub use merge::{merge, merge_all, MergeOutcomes, OutcomeError, OutcomeResult};
pub use types::{OutcomeKind, TestOutcome};

pub mod prelude {
    pub use crate::merge::*;
    pub use crate::types::*;
}
