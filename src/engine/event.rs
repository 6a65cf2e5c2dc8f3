//! The step vocabulary
//!
//! Every algorithm, regardless of structure, expresses its entire effect on
//! the array as a sequence of [`StepEvent`]s terminated by exactly one
//! [`StepEvent::Done`]. This is the contract that lets sixteen structurally
//! different algorithms share one driver.

/// One elementary operation an algorithm performed or wants applied.
///
/// Indices are always within `[0, len)`, and `Compare`/`Swap` never name
/// the same index twice — the driver rejects such events as a programming
/// error in the emitting procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// The algorithm examined the elements at two positions. No mutation.
    Compare(usize, usize),
    /// The elements at two positions must be exchanged.
    Swap(usize, usize),
    /// The element at a position must be set to the given value. Used by
    /// algorithms that rebuild positions from an auxiliary buffer.
    Overwrite(usize, u32),
    /// Terminal: no further steps will be produced; the array is sorted.
    Done,
}

impl StepEvent {
    /// The indices this event touches, for highlighting. `Done` touches
    /// nothing.
    pub fn touched(&self) -> (Option<usize>, Option<usize>) {
        match *self {
            StepEvent::Compare(i, j) | StepEvent::Swap(i, j) => (Some(i), Some(j)),
            StepEvent::Overwrite(i, _) => (Some(i), None),
            StepEvent::Done => (None, None),
        }
    }

    /// Whether applying this event mutates the array.
    pub fn mutates(&self) -> bool {
        matches!(self, StepEvent::Swap(..) | StepEvent::Overwrite(..))
    }
}

/// Outcome of one driver tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// One event was pulled and its effect applied; carries the event so
    /// the presentation layer knows which indices to highlight and how.
    Applied(StepEvent),
    /// The procedure has completed (or none is active). Idempotent: every
    /// subsequent tick reports `Finished` again without touching the array.
    Finished,
}
