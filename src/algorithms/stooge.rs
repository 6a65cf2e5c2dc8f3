//! Stooge sort
//!
//! Swap the ends of the range if out of order, then recursively sort the
//! first two thirds, the last two thirds, and the first two thirds again.
//! Each range is a frame on an explicit stack; the frame's stage records
//! which of the three sub-sorts to enter next when it resurfaces.

use crate::algorithms::Procedure;
use crate::engine::event::StepEvent;

#[derive(Clone, Copy)]
enum StoogeStage {
    /// Compare (and maybe swap) the ends of the range.
    Ends,
    /// Enter the first two-thirds sort.
    FirstPass,
    /// Enter the last two-thirds sort.
    SecondPass,
    /// Enter the first two-thirds sort again to confirm.
    ThirdPass,
}

struct Frame {
    l: usize,
    h: usize,
    stage: StoogeStage,
}

/// Recursive two-thirds overlap sort; base case is a range of at most two
/// elements, handled by the ends comparison alone.
pub struct StoogeSort {
    frames: Vec<Frame>,
    pending: Option<StepEvent>,
}

impl StoogeSort {
    pub fn new(n: usize) -> Self {
        let mut frames = Vec::new();
        if n > 1 {
            frames.push(Frame {
                l: 0,
                h: n - 1,
                stage: StoogeStage::Ends,
            });
        }
        StoogeSort {
            frames,
            pending: None,
        }
    }
}

impl Procedure for StoogeSort {
    fn next_step(&mut self, values: &[u32]) -> StepEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }
        loop {
            let Some(mut frame) = self.frames.pop() else {
                return StepEvent::Done;
            };
            if frame.l >= frame.h {
                continue;
            }
            let (l, h) = (frame.l, frame.h);
            let third = (h - l + 1) / 3;
            match frame.stage {
                StoogeStage::Ends => {
                    if h - l + 1 > 2 {
                        frame.stage = StoogeStage::FirstPass;
                        self.frames.push(frame);
                    }
                    if values[l] > values[h] {
                        self.pending = Some(StepEvent::Swap(l, h));
                    }
                    return StepEvent::Compare(l, h);
                }
                StoogeStage::FirstPass => {
                    frame.stage = StoogeStage::SecondPass;
                    self.frames.push(frame);
                    self.frames.push(Frame {
                        l,
                        h: h - third,
                        stage: StoogeStage::Ends,
                    });
                }
                StoogeStage::SecondPass => {
                    frame.stage = StoogeStage::ThirdPass;
                    self.frames.push(frame);
                    self.frames.push(Frame {
                        l: l + third,
                        h,
                        stage: StoogeStage::Ends,
                    });
                }
                StoogeStage::ThirdPass => {
                    self.frames.push(Frame {
                        l,
                        h: h - third,
                        stage: StoogeStage::Ends,
                    });
                }
            }
        }
    }
}
