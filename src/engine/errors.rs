//! Engine error types
//!
//! [`EngineError`] covers the two failure classes the engine can surface:
//! a bad algorithm name from the user, and a malformed step event from a
//! procedure implementation. There is no retry policy — every step is a
//! pure function of current state, so nothing is transient.

use crate::engine::event::StepEvent;
use std::fmt;

/// Errors surfaced by [`SortDriver`](crate::engine::SortDriver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The requested algorithm name is not registered.
    UnknownAlgorithm { name: String },

    /// A procedure emitted an out-of-range or degenerate (`i == j`) event.
    /// A programming error in the procedure, not a user error; the driver
    /// aborts the sort.
    IndexInvariantViolation {
        algorithm: &'static str,
        event: StepEvent,
        len: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownAlgorithm { name } => {
                write!(f, "Unknown algorithm '{}'", name)
            }
            EngineError::IndexInvariantViolation {
                algorithm,
                event,
                len,
            } => {
                write!(
                    f,
                    "{} sort emitted invalid event {:?} for array of length {}",
                    algorithm, event, len
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}
