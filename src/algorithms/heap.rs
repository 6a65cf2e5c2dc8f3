//! Heap sort
//!
//! Build-max-heap over the whole array, then repeatedly swap the root with
//! the shrinking heap boundary and sift it back down. The sift-down is a
//! small sub-machine of its own (two child comparisons, then a placing
//! swap) that the build and extract phases both drive.

use crate::algorithms::Procedure;
use crate::engine::event::StepEvent;

#[derive(Clone, Copy)]
enum SiftStage {
    /// Compare the left child against the current largest.
    Left,
    /// Compare the right child against the current largest.
    Right,
    /// Swap the node down if a child won, and continue sifting from there.
    Place,
}

/// One in-flight sift-down: node being settled, current largest candidate,
/// and the heap boundary it must stay under.
struct Sift {
    node: usize,
    largest: usize,
    size: usize,
    stage: SiftStage,
}

impl Sift {
    fn at(node: usize, size: usize) -> Self {
        Sift {
            node,
            largest: node,
            size,
            stage: SiftStage::Left,
        }
    }
}

/// Build a max-heap from the last parent downward, then extract the maximum
/// one boundary position at a time.
pub struct HeapSort {
    /// Parents left to sift during the build phase, counting down.
    build: usize,
    /// Heap size during extraction; positions at and above it are sorted.
    boundary: usize,
    sift: Option<Sift>,
    pending: Option<StepEvent>,
}

impl HeapSort {
    pub fn new(n: usize) -> Self {
        HeapSort {
            build: n / 2,
            boundary: n,
            sift: None,
            pending: None,
        }
    }
}

impl Procedure for HeapSort {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }
        loop {
            if let Some(sift) = self.sift.as_mut() {
                match sift.stage {
                    SiftStage::Left => {
                        let l = 2 * sift.node + 1;
                        if l >= sift.size {
                            // No children at all; nothing to place.
                            self.sift = None;
                            continue;
                        }
                        let largest = sift.largest;
                        if values[l] > values[largest] {
                            sift.largest = l;
                        }
                        sift.stage = SiftStage::Right;
                        return StepEvent::Compare(l, largest);
                    }
                    SiftStage::Right => {
                        let r = 2 * sift.node + 2;
                        sift.stage = SiftStage::Place;
                        if r < sift.size {
                            let largest = sift.largest;
                            if values[r] > values[largest] {
                                sift.largest = r;
                            }
                            return StepEvent::Compare(r, largest);
                        }
                        continue;
                    }
                    SiftStage::Place => {
                        let (node, largest, size) = (sift.node, sift.largest, sift.size);
                        if largest == node {
                            self.sift = None;
                            continue;
                        }
                        self.sift = Some(Sift::at(largest, size));
                        return StepEvent::Swap(node, largest);
                    }
                }
            }

            if self.build > 0 {
                self.build -= 1;
                self.sift = Some(Sift::at(self.build, self.boundary));
                continue;
            }
            if self.boundary > 1 {
                self.boundary -= 1;
                self.sift = Some(Sift::at(0, self.boundary));
                return StepEvent::Swap(0, self.boundary);
            }
            return StepEvent::Done;
        }
    }
}
