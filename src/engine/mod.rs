//! Step engine
//!
//! This module provides the stepping machinery shared by all algorithms:
//! - [`event`]: the uniform step vocabulary ([`StepEvent`], [`StepResult`])
//! - [`driver`]: the [`SortDriver`], which pulls one event per tick from
//!   the active procedure and applies it to the array
//! - [`errors`]: engine error types
//!
//! # Execution Model
//!
//! A procedure never mutates the array itself. It describes one elementary
//! operation, suspends, and the driver applies the effect to the
//! [`ArrayModel`](crate::model::ArrayModel) before the procedure is resumed
//! for its next event. The procedure's internal view and the externally
//! applied view therefore stay in lockstep, one tick at a time.

pub mod driver;
pub mod errors;
pub mod event;

pub use driver::{SortDriver, StepStats};
pub use errors::EngineError;
pub use event::{StepEvent, StepResult};
