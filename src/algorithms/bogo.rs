//! Bogo sort
//!
//! Shuffle-and-check. The ordered check walks adjacent pairs as `Compare`
//! events; the first violation triggers a Fisher–Yates shuffle expressed as
//! `Swap` events (a shuffle is just a permutation), after which the check
//! starts over. There is no termination bound — the host discards the sort
//! if it loses patience.

use crate::algorithms::Procedure;
use crate::engine::event::StepEvent;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

enum BogoPhase {
    /// Walking adjacent pairs; reaching the end means sorted.
    Check { cursor: usize },
    /// Fisher–Yates from the top; identity draws emit no event.
    Shuffle { cursor: usize },
}

/// Shuffle until sorted. Non-deterministic step count unless seeded.
pub struct BogoSort {
    rng: StdRng,
    phase: BogoPhase,
}

impl BogoSort {
    pub fn new(_n: usize) -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic variant, for tests and replayable demos.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        BogoSort {
            rng,
            phase: BogoPhase::Check { cursor: 1 },
        }
    }
}

impl Procedure for BogoSort {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        let n = values.len();
        loop {
            match self.phase {
                BogoPhase::Check { cursor } => {
                    if n < 2 || cursor >= n {
                        return StepEvent::Done;
                    }
                    if values[cursor - 1] > values[cursor] {
                        self.phase = BogoPhase::Shuffle { cursor: n - 1 };
                    } else {
                        self.phase = BogoPhase::Check { cursor: cursor + 1 };
                    }
                    return StepEvent::Compare(cursor - 1, cursor);
                }
                BogoPhase::Shuffle { cursor } => {
                    if cursor == 0 {
                        self.phase = BogoPhase::Check { cursor: 1 };
                        continue;
                    }
                    let j = self.rng.gen_range(0..=cursor);
                    self.phase = BogoPhase::Shuffle { cursor: cursor - 1 };
                    if j != cursor {
                        return StepEvent::Swap(cursor, j);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut procedure: impl Procedure, mut values: Vec<u32>) -> (Vec<u32>, Vec<StepEvent>) {
        let mut events = Vec::new();
        loop {
            let event = procedure.next_step(&values);
            match event {
                StepEvent::Swap(i, j) => values.swap(i, j),
                StepEvent::Overwrite(i, v) => values[i] = v,
                StepEvent::Done => return (values, events),
                StepEvent::Compare(..) => {}
            }
            events.push(event);
        }
    }

    #[test]
    fn test_bogo_sorted_input_checks_once() {
        let (sorted, events) = drain(BogoSort::seeded(7), vec![1, 2, 3]);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(
            events,
            vec![StepEvent::Compare(0, 1), StepEvent::Compare(1, 2)]
        );
    }

    #[test]
    fn test_bogo_eventually_sorts_small_input() {
        let (sorted, _) = drain(BogoSort::seeded(42), vec![4, 2, 3, 1]);
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_bogo_shuffle_preserves_multiset() {
        let (sorted, _) = drain(BogoSort::seeded(1), vec![5, 5, 1, 3]);
        assert_eq!(sorted, vec![1, 3, 5, 5]);
    }

    #[test]
    fn test_bogo_tiny_inputs() {
        let (_, events) = drain(BogoSort::seeded(0), vec![]);
        assert!(events.is_empty());
        let (_, events) = drain(BogoSort::seeded(0), vec![9]);
        assert!(events.is_empty());
    }
}
