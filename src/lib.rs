//! # Introduction
//!
//! sortty replays in-place sorting algorithms one elementary operation at a
//! time, so their behavior can be watched unfolding as a bar chart in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Stepping pipeline
//!
//! ```text
//! Values → Procedure → StepEvent → SortDriver → ArrayModel → TUI
//! ```
//!
//! 1. [`model`] — the [`model::ArrayModel`]: the one mutable sequence being
//!    sorted, with a revision counter and single-writer discipline.
//! 2. [`algorithms`] — sixteen suspendable sorting procedures, each an
//!    explicit resumable state machine behind the
//!    [`algorithms::Procedure`] trait, plus the name registry.
//! 3. [`engine`] — the step vocabulary ([`engine::StepEvent`]) and the
//!    [`engine::SortDriver`], which pulls exactly one event per tick,
//!    applies its effect to the array, and reports the touched indices.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Procedures describe operations instead of performing them: the driver
//! applies each `Swap`/`Overwrite` to the array before resuming the
//! procedure, so a procedure may always assume the array reflects every
//! event it has already emitted.

pub mod algorithms;
pub mod engine;
pub mod model;
pub mod ui;
