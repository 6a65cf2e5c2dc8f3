//! Selection-family sorts
//!
//! Selection sort and pancake sort both spend a scan phase locating an
//! extreme element of the unsorted region, then move it into place — with
//! one targeted swap for selection, with prefix flips for pancake.

use crate::algorithms::Procedure;
use crate::engine::event::StepEvent;

/// Outer scan plus inner minimum search; one placing swap per outer
/// iteration (skipped when the minimum is already in place, since a
/// degenerate self-swap is rejected by the driver).
pub struct Selection {
    i: usize,
    min: usize,
    j: usize,
    placing: bool,
}

impl Selection {
    pub fn new(_n: usize) -> Self {
        Selection {
            i: 0,
            min: 0,
            j: 1,
            placing: false,
        }
    }
}

impl Procedure for Selection {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        let n = values.len();
        loop {
            if self.i >= n {
                return StepEvent::Done;
            }
            if self.placing {
                self.placing = false;
                let (i, min) = (self.i, self.min);
                self.i += 1;
                self.min = self.i;
                self.j = self.i + 1;
                if min != i {
                    return StepEvent::Swap(i, min);
                }
                continue;
            }
            if self.j < n {
                let (j, min) = (self.j, self.min);
                if values[j] < values[min] {
                    self.min = j;
                }
                self.j += 1;
                return StepEvent::Compare(j, min);
            }
            self.placing = true;
        }
    }
}

enum PancakePhase {
    /// Scanning the unsorted prefix for the (first) maximum.
    Scan,
    /// Flipping the maximum to the front.
    FlipToFront { lo: usize, hi: usize },
    /// Flipping the whole prefix to move the maximum to its final slot.
    FlipPrefix { lo: usize, hi: usize },
}

/// Repeatedly find the maximum of the unsorted prefix, flip it to the
/// front, then flip the whole prefix to place it at the end. Both flips
/// reuse the same inward-walking swap loop.
pub struct Pancake {
    /// Current unsorted prefix length.
    curr: usize,
    j: usize,
    max: usize,
    phase: PancakePhase,
}

impl Pancake {
    pub fn new(n: usize) -> Self {
        Pancake {
            curr: n,
            j: 1,
            max: 0,
            phase: PancakePhase::Scan,
        }
    }

    fn next_prefix(&mut self) {
        self.curr -= 1;
        self.j = 1;
        self.max = 0;
        self.phase = PancakePhase::Scan;
    }
}

impl Procedure for Pancake {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        loop {
            if self.curr <= 1 {
                return StepEvent::Done;
            }
            match self.phase {
                PancakePhase::Scan => {
                    if self.j < self.curr {
                        let (j, max) = (self.j, self.max);
                        if values[j] > values[max] {
                            self.max = j;
                        }
                        self.j += 1;
                        return StepEvent::Compare(j, max);
                    }
                    if self.max == self.curr - 1 {
                        // Already in place; shrink the prefix directly.
                        self.next_prefix();
                        continue;
                    }
                    self.phase = PancakePhase::FlipToFront {
                        lo: 0,
                        hi: self.max,
                    };
                }
                PancakePhase::FlipToFront { lo, hi } => {
                    if lo < hi {
                        self.phase = PancakePhase::FlipToFront {
                            lo: lo + 1,
                            hi: hi - 1,
                        };
                        return StepEvent::Swap(lo, hi);
                    }
                    self.phase = PancakePhase::FlipPrefix {
                        lo: 0,
                        hi: self.curr - 1,
                    };
                }
                PancakePhase::FlipPrefix { lo, hi } => {
                    if lo < hi {
                        self.phase = PancakePhase::FlipPrefix {
                            lo: lo + 1,
                            hi: hi - 1,
                        };
                        return StepEvent::Swap(lo, hi);
                    }
                    self.next_prefix();
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
    fn test_selection_trace() {
        let (sorted, events) = drain(Selection::new(2), vec![2, 1]);
        assert_eq!(sorted, vec![1, 2]);
        assert_eq!(
            events,
            vec![StepEvent::Compare(1, 0), StepEvent::Swap(0, 1)]
        );
    }

    #[test]
    fn test_selection_skips_in_place_minimum() {
        let (sorted, events) = drain(Selection::new(3), vec![1, 2, 3]);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert!(events.iter().all(|e| matches!(e, StepEvent::Compare(..))));
    }

    #[test]
    fn test_pancake_flip_pattern() {
        // [3, 1, 2]: the max starts at the front, so the first round is the
        // prefix flip alone; the second round flips the remaining pair.
        let (sorted, events) = drain(Pancake::new(3), vec![3, 1, 2]);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(
            events,
            vec![
                StepEvent::Compare(1, 0),
                StepEvent::Compare(2, 0),
                StepEvent::Swap(0, 2),
                StepEvent::Compare(1, 0),
                StepEvent::Swap(0, 1),
            ]
        );
    }
}
