//! Error types for the history store.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong in a store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StoreErrorKind {
    /// A history jump targeted a step that does not exist.
    #[display("step {step} is out of range for a history of {len} snapshots")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Length of the history at the time of the request.
        len: usize,
    },
}

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", kind, file, line)]
pub struct StoreError {
    /// Error kind.
    pub kind: StoreErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: StoreErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
