//! Insertion-family sorts
//!
//! Insertion sort proper and shell sort, its generalization over a
//! shrinking gap sequence. Both express element movement as adjacent (or
//! gap-distant) swaps of the traveling element, so every mutation is a
//! `Swap` the driver can apply.

use crate::algorithms::Procedure;
use crate::engine::event::StepEvent;

/// Outer ascending scan; each new element walks left through the sorted
/// prefix one swap at a time while its predecessor is strictly greater.
pub struct Insertion {
    i: usize,
    j: usize,
    pending: Option<StepEvent>,
}

impl Insertion {
    pub fn new(_n: usize) -> Self {
        Insertion {
            i: 1,
            j: 1,
            pending: None,
        }
    }
}

impl Procedure for Insertion {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }
        loop {
            if self.i >= values.len() {
                return StepEvent::Done;
            }
            if self.j == 0 {
                self.i += 1;
                self.j = self.i;
                continue;
            }
            let j = self.j;
            if values[j - 1] > values[j] {
                self.pending = Some(StepEvent::Swap(j - 1, j));
                self.j -= 1;
            } else {
                // Settled; move on to the next unsorted element.
                self.i += 1;
                self.j = self.i;
            }
            return StepEvent::Compare(j - 1, j);
        }
    }
}

/// Insertion sort generalized over gaps `n/2, n/4, …, 1` (floor halving).
///
/// Follows the pair-then-backward-walk schedule: each forward pair
/// comparison at the current gap is followed by a walk back down the gap
/// chain from the new cursor position.
pub struct Shell {
    gap: usize,
    i: usize,
    j: usize,
    k: usize,
    walking: bool,
    pending: Option<StepEvent>,
}

impl Shell {
    pub fn new(n: usize) -> Self {
        let gap = n / 2;
        Shell {
            gap,
            i: 0,
            j: gap,
            k: 0,
            walking: false,
            pending: None,
        }
    }
}

impl Procedure for Shell {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }
        let n = values.len();
        loop {
            if self.gap == 0 {
                return StepEvent::Done;
            }
            if self.walking {
                if self.k >= self.gap {
                    let (lo, hi) = (self.k - self.gap, self.k);
                    if values[lo] > values[hi] {
                        self.pending = Some(StepEvent::Swap(lo, hi));
                    }
                    self.k -= 1;
                    return StepEvent::Compare(lo, hi);
                }
                self.walking = false;
                continue;
            }
            if self.j < n {
                let (i, j) = (self.i, self.j);
                if values[i] > values[j] {
                    self.pending = Some(StepEvent::Swap(i, j));
                }
                self.i += 1;
                self.j += 1;
                self.k = self.i;
                self.walking = true;
                return StepEvent::Compare(i, j);
            }
            self.gap /= 2;
            self.i = 0;
            self.j = self.gap;
        }
    }
}
