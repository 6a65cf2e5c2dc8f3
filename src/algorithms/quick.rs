//! Quick sort
//!
//! Lomuto partition around the last element of each range. The pivot stays
//! parked at `high` for the whole scan (every staged swap lands strictly
//! below it), so each scan comparison reads the live pivot value directly.
//! Subranges wait on an explicit stack in place of the native recursion.

use crate::algorithms::Procedure;
use crate::engine::event::StepEvent;

/// One in-flight partition scan: `j` examines each element against the
/// pivot at `high`, `i` marks the boundary of the less-than region.
struct Partition {
    low: usize,
    high: usize,
    i: usize,
    j: usize,
}

/// Recursive partitioning with the pending ranges held on an explicit
/// stack; the left range of each split is processed first.
pub struct QuickSort {
    /// Pending inclusive `(low, high)` ranges.
    ranges: Vec<(usize, usize)>,
    part: Option<Partition>,
    pending: Option<StepEvent>,
}

impl QuickSort {
    pub fn new(n: usize) -> Self {
        let mut ranges = Vec::new();
        if n > 1 {
            ranges.push((0, n - 1));
        }
        QuickSort {
            ranges,
            part: None,
            pending: None,
        }
    }
}

impl Procedure for QuickSort {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }
        loop {
            if let Some(part) = self.part.as_mut() {
                if part.j < part.high {
                    let (i, j, high) = (part.i, part.j, part.high);
                    if values[j] < values[high] {
                        if i != j {
                            self.pending = Some(StepEvent::Swap(i, j));
                        }
                        part.i += 1;
                    }
                    part.j += 1;
                    return StepEvent::Compare(j, high);
                }
                // Scan done; place the pivot and queue both sides.
                let (low, high, i) = (part.low, part.high, part.i);
                self.part = None;
                if i + 1 < high {
                    self.ranges.push((i + 1, high));
                }
                if i > low + 1 {
                    self.ranges.push((low, i - 1));
                }
                if i != high {
                    return StepEvent::Swap(i, high);
                }
                continue;
            }

            let Some((low, high)) = self.ranges.pop() else {
                return StepEvent::Done;
            };
            if low >= high {
                continue;
            }
            self.part = Some(Partition {
                low,
                high,
                i: low,
                j: low,
            });
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
    fn test_quick_trace() {
        let (sorted, events) = drain(QuickSort::new(3), vec![3, 1, 2]);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(
            events,
            vec![
                StepEvent::Compare(0, 2),
                StepEvent::Compare(1, 2),
                StepEvent::Swap(0, 1),
                StepEvent::Swap(1, 2),
            ]
        );
    }

    #[test]
    fn test_quick_sorts_reversed() {
        let (sorted, _) = drain(QuickSort::new(8), vec![8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_quick_duplicates() {
        let (sorted, _) = drain(QuickSort::new(6), vec![4, 2, 4, 1, 2, 4]);
        assert_eq!(sorted, vec![1, 2, 2, 4, 4, 4]);
    }
}
