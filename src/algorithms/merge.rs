//! Merge sort
//!
//! Recursive split at the midpoint, with the recursion held as an explicit
//! frame stack so the procedure can park between steps. The merge of a
//! subrange walks each element of the right half down through the left half
//! with adjacent swaps on strictly-greater comparisons only, so equal
//! elements keep their relative order and every mutation stays a `Swap` the
//! driver can apply.

use crate::algorithms::Procedure;
use crate::engine::event::StepEvent;

#[derive(Clone, Copy)]
enum MergeStage {
    /// Recurse into the left half.
    SortLeft,
    /// Recurse into the right half.
    SortRight,
    /// Both halves sorted; merge them.
    Merge,
}

/// One parked recursion frame over an inclusive subrange.
struct Frame {
    left: usize,
    right: usize,
    stage: MergeStage,
}

/// The active merge of one subrange: `i` walks the right half outward, `j`
/// carries the traveling element down toward `left`.
struct MergePass {
    left: usize,
    right: usize,
    i: usize,
    j: usize,
}

/// Recursive midpoint split driven by an explicit frame stack, with a
/// stable adjacent-swap merge.
pub struct MergeSort {
    frames: Vec<Frame>,
    pass: Option<MergePass>,
    pending: Option<StepEvent>,
}

impl MergeSort {
    pub fn new(n: usize) -> Self {
        let mut frames = Vec::new();
        if n > 1 {
            frames.push(Frame {
                left: 0,
                right: n - 1,
                stage: MergeStage::SortLeft,
            });
        }
        MergeSort {
            frames,
            pass: None,
            pending: None,
        }
    }
}

impl Procedure for MergeSort {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }
        loop {
            if let Some(pass) = self.pass.as_mut() {
                if pass.i > pass.right {
                    self.pass = None;
                    continue;
                }
                if pass.j == pass.left {
                    // Walked all the way down; take the next element.
                    pass.i += 1;
                    pass.j = pass.i;
                    continue;
                }
                let j = pass.j;
                if values[j - 1] > values[j] {
                    self.pending = Some(StepEvent::Swap(j - 1, j));
                    pass.j -= 1;
                } else {
                    pass.i += 1;
                    pass.j = pass.i;
                }
                return StepEvent::Compare(j - 1, j);
            }

            let Some(mut frame) = self.frames.pop() else {
                return StepEvent::Done;
            };
            if frame.left >= frame.right {
                continue;
            }
            let middle = (frame.left + frame.right) / 2;
            match frame.stage {
                MergeStage::SortLeft => {
                    frame.stage = MergeStage::SortRight;
                    let left = frame.left;
                    self.frames.push(frame);
                    self.frames.push(Frame {
                        left,
                        right: middle,
                        stage: MergeStage::SortLeft,
                    });
                }
                MergeStage::SortRight => {
                    frame.stage = MergeStage::Merge;
                    let right = frame.right;
                    self.frames.push(frame);
                    self.frames.push(Frame {
                        left: middle + 1,
                        right,
                        stage: MergeStage::SortLeft,
                    });
                }
                MergeStage::Merge => {
                    self.pass = Some(MergePass {
                        left: frame.left,
                        right: frame.right,
                        i: middle,
                        j: middle,
                    });
                }
            }
        }
    }
}
