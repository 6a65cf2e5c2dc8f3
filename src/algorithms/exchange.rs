//! Adjacent- and gapped-exchange sorts
//!
//! The family of scans that repeatedly compare a pair of positions and
//! exchange them when out of order: bubble, cocktail (bidirectional
//! bubble), odd-even, gnome, and comb. All five are plain loop machines;
//! each keeps its cursors across suspensions and stages a `Swap` whenever
//! the pair it just compared was out of order.

use crate::algorithms::Procedure;
use crate::engine::event::StepEvent;

/// Two nested ascending scans; the largest unsorted element bubbles to the
/// top of the shrinking upper bound each pass.
pub struct Bubble {
    n: usize,
    i: usize,
    j: usize,
    pending: Option<StepEvent>,
}

impl Bubble {
    pub fn new(n: usize) -> Self {
        Bubble {
            n,
            i: 0,
            j: 0,
            pending: None,
        }
    }
}

impl Procedure for Bubble {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }
        loop {
            if self.n < 2 || self.i >= self.n - 1 {
                return StepEvent::Done;
            }
            if self.j >= self.n - 1 - self.i {
                self.i += 1;
                self.j = 0;
                continue;
            }
            let (i, j) = (self.j, self.j + 1);
            if values[i] > values[j] {
                self.pending = Some(StepEvent::Swap(i, j));
            }
            self.j += 1;
            return StepEvent::Compare(i, j);
        }
    }
}

/// Alternating forward and backward adjacent passes over shrinking bounds.
/// Terminates when a directional pass completes without a swap.
pub struct Cocktail {
    start: usize,
    /// Inclusive upper bound of the unsorted region.
    end: usize,
    up: bool,
    swapped: bool,
    cursor: usize,
    scanning: bool,
    pending: Option<StepEvent>,
}

impl Cocktail {
    pub fn new(n: usize) -> Self {
        Cocktail {
            start: 0,
            end: n.saturating_sub(1),
            up: true,
            swapped: true,
            cursor: 0,
            scanning: false,
            pending: None,
        }
    }
}

impl Procedure for Cocktail {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }
        if !self.scanning {
            if !self.swapped {
                return StepEvent::Done;
            }
            // An empty pass cannot swap, so the next boundary check would
            // terminate anyway.
            if self.start >= self.end {
                return StepEvent::Done;
            }
            self.swapped = false;
            self.scanning = true;
            self.cursor = if self.up { self.start } else { self.end - 1 };
        }

        let c = self.cursor;
        if values[c] > values[c + 1] {
            self.pending = Some(StepEvent::Swap(c, c + 1));
            self.swapped = true;
        }
        if self.up {
            if c + 1 >= self.end {
                self.scanning = false;
                self.end -= 1;
                self.up = false;
            } else {
                self.cursor = c + 1;
            }
        } else if c <= self.start {
            self.scanning = false;
            self.start += 1;
            self.up = true;
        } else {
            self.cursor = c - 1;
        }
        StepEvent::Compare(c, c + 1)
    }
}

/// Alternating odd-indexed and even-indexed adjacent comparisons until a
/// full round (odd pass + even pass) makes no swap.
pub struct OddEven {
    n: usize,
    swapped: bool,
    odd_phase: bool,
    cursor: usize,
    scanning: bool,
    pending: Option<StepEvent>,
}

impl OddEven {
    pub fn new(n: usize) -> Self {
        OddEven {
            n,
            swapped: true,
            odd_phase: true,
            cursor: 0,
            scanning: false,
            pending: None,
        }
    }
}

impl Procedure for OddEven {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }
        loop {
            if self.n < 2 {
                return StepEvent::Done;
            }
            if !self.scanning {
                if self.odd_phase {
                    // A round is an odd pass followed by an even pass; the
                    // no-swap check applies to the whole round.
                    if !self.swapped {
                        return StepEvent::Done;
                    }
                    self.swapped = false;
                }
                self.scanning = true;
                self.cursor = if self.odd_phase { 1 } else { 0 };
            }
            if self.cursor >= self.n - 1 {
                self.scanning = false;
                self.odd_phase = !self.odd_phase;
                continue;
            }
            let c = self.cursor;
            if values[c] > values[c + 1] {
                self.pending = Some(StepEvent::Swap(c, c + 1));
                self.swapped = true;
            }
            self.cursor += 2;
            return StepEvent::Compare(c, c + 1);
        }
    }
}

/// A single cursor that steps forward while ordered and swaps-and-steps-back
/// when not.
pub struct Gnome {
    index: usize,
    pending: Option<StepEvent>,
}

impl Gnome {
    pub fn new(_n: usize) -> Self {
        Gnome {
            index: 0,
            pending: None,
        }
    }
}

impl Procedure for Gnome {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }
        loop {
            if self.index >= values.len() {
                return StepEvent::Done;
            }
            if self.index == 0 {
                self.index = 1;
                continue;
            }
            let i = self.index;
            if values[i] >= values[i - 1] {
                self.index += 1;
            } else {
                self.pending = Some(StepEvent::Swap(i, i - 1));
                self.index -= 1;
            }
            return StepEvent::Compare(i - 1, i);
        }
    }
}

/// Gap-based bubble passes; the gap shrinks by 10/13 (floored, minimum 1)
/// each round, and rounds continue while the gap exceeds 1 or the last
/// round swapped.
pub struct Comb {
    gap: usize,
    swapped: bool,
    cursor: usize,
    scanning: bool,
    pending: Option<StepEvent>,
}

impl Comb {
    pub fn new(n: usize) -> Self {
        Comb {
            gap: n,
            swapped: true,
            cursor: 0,
            scanning: false,
            pending: None,
        }
    }

    fn next_gap(gap: usize) -> usize {
        let gap = gap * 10 / 13;
        if gap >= 1 { gap } else { 1 }
    }
}

impl Procedure for Comb {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }
        let n = values.len();
        loop {
            if n < 2 {
                return StepEvent::Done;
            }
            if !self.scanning {
                if self.gap == 1 && !self.swapped {
                    return StepEvent::Done;
                }
                self.gap = Self::next_gap(self.gap);
                self.swapped = false;
                self.scanning = true;
                self.cursor = 0;
            }
            if self.cursor + self.gap >= n {
                self.scanning = false;
                continue;
            }
            let (i, j) = (self.cursor, self.cursor + self.gap);
            if values[i] > values[j] {
                self.pending = Some(StepEvent::Swap(i, j));
                self.swapped = true;
            }
            self.cursor += 1;
            return StepEvent::Compare(i, j);
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
    fn test_bubble_trace() {
        let (sorted, events) = drain(Bubble::new(3), vec![3, 1, 2]);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(
            events,
            vec![
                StepEvent::Compare(0, 1),
                StepEvent::Swap(0, 1),
                StepEvent::Compare(1, 2),
                StepEvent::Swap(1, 2),
                StepEvent::Compare(0, 1),
            ]
        );
    }

    #[test]
    fn test_gnome_trace() {
        let (sorted, events) = drain(Gnome::new(2), vec![2, 1]);
        assert_eq!(sorted, vec![1, 2]);
        assert_eq!(
            events,
            vec![
                StepEvent::Compare(0, 1),
                StepEvent::Swap(1, 0),
                StepEvent::Compare(0, 1),
            ]
        );
    }

    #[test]
    fn test_comb_gap_sequence() {
        let mut gaps = Vec::new();
        let mut gap = 128;
        while gap != 1 {
            gap = Comb::next_gap(gap);
            gaps.push(gap);
        }
        assert_eq!(gaps, vec![98, 75, 57, 43, 33, 25, 19, 14, 10, 7, 5, 3, 2, 1]);
    }

    #[test]
    fn test_cocktail_trace() {
        // Forward pass carries 3 to the top, backward pass carries 1 down.
        let (sorted, events) = drain(Cocktail::new(3), vec![2, 3, 1]);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(
            events,
            vec![
                StepEvent::Compare(0, 1),
                StepEvent::Compare(1, 2),
                StepEvent::Swap(1, 2),
                StepEvent::Compare(0, 1),
                StepEvent::Swap(0, 1),
            ]
        );
    }

    #[test]
    fn test_cocktail_sorts_reversed() {
        let (sorted, _) = drain(Cocktail::new(6), vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_odd_even_trace() {
        // Round one: the odd pair is ordered, both even pairs swap. Round
        // two confirms with compares only.
        let (sorted, events) = drain(OddEven::new(4), vec![2, 1, 4, 3]);
        assert_eq!(sorted, vec![1, 2, 3, 4]);
        assert_eq!(
            events,
            vec![
                StepEvent::Compare(1, 2),
                StepEvent::Compare(0, 1),
                StepEvent::Swap(0, 1),
                StepEvent::Compare(2, 3),
                StepEvent::Swap(2, 3),
                StepEvent::Compare(1, 2),
                StepEvent::Compare(0, 1),
                StepEvent::Compare(2, 3),
            ]
        );
    }

    #[test]
    fn test_comb_trace() {
        // First round runs at gap 2 and swaps the ends; the gap-1 round
        // finds everything ordered.
        let (sorted, events) = drain(Comb::new(3), vec![3, 2, 1]);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(
            events,
            vec![
                StepEvent::Compare(0, 2),
                StepEvent::Swap(0, 2),
                StepEvent::Compare(0, 1),
                StepEvent::Compare(1, 2),
            ]
        );
    }

    #[test]
    fn test_odd_even_sorted_input_one_round() {
        // One full round of compares, no swaps, then done.
        let (sorted, events) = drain(OddEven::new(4), vec![1, 2, 3, 4]);
        assert_eq!(sorted, vec![1, 2, 3, 4]);
        assert!(events.iter().all(|e| matches!(e, StepEvent::Compare(..))));
        assert_eq!(events.len(), 3);
    }
}
