//! Radix sort
//!
//! Least-significant-digit radix sort: one stable counting pass per decimal
//! digit, continuing until the current digit exceeds the maximum element.
//! Each pass builds its 10-bucket histogram and output buffer from the live
//! array in one look, then scatters the buffer back one `Overwrite` per
//! position — the only algorithm here that rebuilds positions instead of
//! swapping them.

use crate::algorithms::Procedure;
use crate::engine::event::StepEvent;

/// Per-digit stable counting sort over a shared output buffer.
pub struct RadixSort {
    /// Current digit weight: 1, 10, 100, …
    exp: u32,
    /// Maximum element, captured on the first step; invariant under the
    /// permutations the passes apply.
    max: Option<u32>,
    output: Vec<u32>,
    cursor: usize,
    scattering: bool,
}

impl RadixSort {
    pub fn new(_n: usize) -> Self {
        RadixSort {
            exp: 1,
            max: None,
            output: Vec::new(),
            cursor: 0,
            scattering: false,
        }
    }

    /// Stable counting sort of `values` by the digit at `exp`.
    fn counting_pass(values: &[u32], exp: u32) -> Vec<u32> {
        let digit = |v: u32| ((v / exp) % 10) as usize;
        let mut count = [0usize; 10];
        for &v in values {
            count[digit(v)] += 1;
        }
        for d in 1..10 {
            count[d] += count[d - 1];
        }
        let mut output = vec![0u32; values.len()];
        for &v in values.iter().rev() {
            count[digit(v)] -= 1;
            output[count[digit(v)]] = v;
        }
        output
    }
}

impl Procedure for RadixSort {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if values.len() < 2 {
            return StepEvent::Done;
        }
        loop {
            if self.scattering {
                if self.cursor < self.output.len() {
                    let i = self.cursor;
                    self.cursor += 1;
                    return StepEvent::Overwrite(i, self.output[i]);
                }
                self.scattering = false;
                self.exp = self.exp.saturating_mul(10);
                continue;
            }
            let max = match self.max {
                Some(max) => max,
                None => {
                    let max = values.iter().copied().max().unwrap_or(0);
                    self.max = Some(max);
                    max
                }
            };
            if max / self.exp == 0 {
                return StepEvent::Done;
            }
            self.output = Self::counting_pass(values, self.exp);
            self.cursor = 0;
            self.scattering = true;
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
    fn test_radix_sorts_mixed_digit_counts() {
        let (sorted, events) = drain(
            RadixSort::new(8),
            vec![170, 45, 75, 90, 802, 24, 2, 66],
        );
        assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
        // Three digits in the maximum (802) means three full passes.
        assert_eq!(events.len(), 3 * 8);
        assert!(events
            .iter()
            .all(|e| matches!(e, StepEvent::Overwrite(..))));
    }

    #[test]
    fn test_radix_trace() {
        // Two passes for a two-digit maximum: ones digits order [31, 2, 13],
        // tens digits then order [2, 13, 31].
        let (sorted, events) = drain(RadixSort::new(3), vec![13, 2, 31]);
        assert_eq!(sorted, vec![2, 13, 31]);
        assert_eq!(
            events,
            vec![
                StepEvent::Overwrite(0, 31),
                StepEvent::Overwrite(1, 2),
                StepEvent::Overwrite(2, 13),
                StepEvent::Overwrite(0, 2),
                StepEvent::Overwrite(1, 13),
                StepEvent::Overwrite(2, 31),
            ]
        );
    }

    #[test]
    fn test_radix_pass_is_stable() {
        // Equal last digits keep their input order within the pass.
        let output = RadixSort::counting_pass(&[21, 11, 31], 1);
        assert_eq!(output, vec![21, 11, 31]);
        let output = RadixSort::counting_pass(&[21, 11, 31], 10);
        assert_eq!(output, vec![11, 21, 31]);
    }

    #[test]
    fn test_radix_all_zeros_has_no_passes() {
        let (sorted, events) = drain(RadixSort::new(3), vec![0, 0, 0]);
        assert_eq!(sorted, vec![0, 0, 0]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_radix_tiny_inputs() {
        let (_, events) = drain(RadixSort::new(1), vec![123]);
        assert!(events.is_empty());
    }
}
