//! Bitonic sort
//!
//! The recursive sort/merge network: each range is split into an ascending
//! and a descending half, then merged in the required direction. A merge
//! first compare-exchanges every element against its partner half a range
//! away, then recurses into both halves with the same direction. Both
//! recursion kinds live on one explicit frame stack.
//!
//! The half-splitting network fully sorts power-of-two lengths (the
//! definition the network is built from); other lengths run safely in
//! bounds but without the full-sort guarantee.

use crate::algorithms::Procedure;
use crate::engine::event::StepEvent;

#[derive(Clone, Copy)]
enum SortStage {
    /// Sort the lower half ascending.
    SplitAsc,
    /// Sort the upper half descending.
    SplitDesc,
    /// Merge the whole range in this frame's direction.
    Merge,
}

#[derive(Clone, Copy)]
enum MergeStage {
    /// Compare-exchange each element against its partner a half-range away.
    Scan,
    /// Lower-half recursion done; recurse into the upper half.
    Upper,
}

enum Frame {
    Sort {
        low: usize,
        cnt: usize,
        up: bool,
        stage: SortStage,
    },
    Merge {
        low: usize,
        cnt: usize,
        up: bool,
        cursor: usize,
        stage: MergeStage,
    },
}

/// Recursive bitonic network with an alternating direction flag per half.
pub struct BitonicSort {
    frames: Vec<Frame>,
    pending: Option<StepEvent>,
}

impl BitonicSort {
    pub fn new(n: usize) -> Self {
        let mut frames = Vec::new();
        if n > 1 {
            frames.push(Frame::Sort {
                low: 0,
                cnt: n,
                up: true,
                stage: SortStage::SplitAsc,
            });
        }
        BitonicSort {
            frames,
            pending: None,
        }
    }
}

impl Procedure for BitonicSort {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }
        loop {
            let Some(frame) = self.frames.pop() else {
                return StepEvent::Done;
            };
            match frame {
                Frame::Sort { low, cnt, up, stage } => {
                    if cnt <= 1 {
                        continue;
                    }
                    let k = cnt / 2;
                    match stage {
                        SortStage::SplitAsc => {
                            self.frames.push(Frame::Sort {
                                low,
                                cnt,
                                up,
                                stage: SortStage::SplitDesc,
                            });
                            self.frames.push(Frame::Sort {
                                low,
                                cnt: k,
                                up: true,
                                stage: SortStage::SplitAsc,
                            });
                        }
                        SortStage::SplitDesc => {
                            self.frames.push(Frame::Sort {
                                low,
                                cnt,
                                up,
                                stage: SortStage::Merge,
                            });
                            self.frames.push(Frame::Sort {
                                low: low + k,
                                cnt: k,
                                up: false,
                                stage: SortStage::SplitAsc,
                            });
                        }
                        SortStage::Merge => {
                            self.frames.push(Frame::Merge {
                                low,
                                cnt,
                                up,
                                cursor: low,
                                stage: MergeStage::Scan,
                            });
                        }
                    }
                }
                Frame::Merge {
                    low,
                    cnt,
                    up,
                    cursor,
                    stage,
                } => {
                    if cnt <= 1 {
                        continue;
                    }
                    let k = cnt / 2;
                    match stage {
                        MergeStage::Scan => {
                            if cursor < low + k {
                                let (i, j) = (cursor, cursor + k);
                                let out_of_order = if up {
                                    values[i] > values[j]
                                } else {
                                    values[i] < values[j]
                                };
                                if out_of_order {
                                    self.pending = Some(StepEvent::Swap(i, j));
                                }
                                self.frames.push(Frame::Merge {
                                    low,
                                    cnt,
                                    up,
                                    cursor: cursor + 1,
                                    stage: MergeStage::Scan,
                                });
                                return StepEvent::Compare(i, j);
                            }
                            self.frames.push(Frame::Merge {
                                low,
                                cnt,
                                up,
                                cursor,
                                stage: MergeStage::Upper,
                            });
                            self.frames.push(Frame::Merge {
                                low,
                                cnt: k,
                                up,
                                cursor: low,
                                stage: MergeStage::Scan,
                            });
                        }
                        MergeStage::Upper => {
                            self.frames.push(Frame::Merge {
                                low: low + k,
                                cnt: k,
                                up,
                                cursor: low + k,
                                stage: MergeStage::Scan,
                            });
                        }
                    }
                }
            }
        }
    }
}
