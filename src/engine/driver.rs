//! The step driver
//!
//! [`SortDriver`] owns the [`ArrayModel`] and the active procedure for one
//! running sort. Each [`SortDriver::advance`] call pulls exactly one
//! [`StepEvent`] from the procedure, validates it, applies its effect to
//! the array, and reports the touched indices. The driver is also the
//! sort's handle: cancellation is simply dropping it.

use crate::algorithms::{Procedure, Registry};
use crate::engine::errors::EngineError;
use crate::engine::event::{StepEvent, StepResult};
use crate::model::ArrayModel;

/// Running totals for one sort, for the status display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub overwrites: u64,
    /// Ticks consumed so far, including the final `Finished` transition.
    pub ticks: u64,
}

/// Drives one sort: owns the array, pulls events from the active
/// procedure, applies them, and detects completion.
pub struct SortDriver {
    algorithm: &'static str,
    model: ArrayModel,
    procedure: Option<Box<dyn Procedure>>,
    stats: StepStats,
}

impl std::fmt::Debug for SortDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortDriver")
            .field("algorithm", &self.algorithm)
            .field("model", &self.model)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl SortDriver {
    /// Instantiate a fresh procedure for `name` bound to `values`.
    ///
    /// Fails with [`EngineError::UnknownAlgorithm`] if the name is not
    /// registered. Empty arrays are valid and finish on the first tick.
    pub fn start(name: &str, values: Vec<u32>) -> Result<Self, EngineError> {
        let registry = Registry::new();
        let (algorithm, procedure) = registry.instantiate(name, values.len()).ok_or_else(|| {
            EngineError::UnknownAlgorithm {
                name: name.to_string(),
            }
        })?;

        Ok(SortDriver {
            algorithm,
            model: ArrayModel::new(values),
            procedure: Some(procedure),
            stats: StepStats::default(),
        })
    }

    /// Pull one event from the active procedure and apply it.
    ///
    /// `Compare` applies no mutation; `Swap`/`Overwrite` mutate the array
    /// and bump its revision; `Done` discards the procedure and reports
    /// [`StepResult::Finished`]. Once finished, further calls are no-ops
    /// returning `Finished` again.
    ///
    /// A malformed event (out of range, or `Compare`/`Swap` with `i == j`)
    /// aborts the sort: the procedure is discarded and
    /// [`EngineError::IndexInvariantViolation`] is returned.
    pub fn advance(&mut self) -> Result<StepResult, EngineError> {
        let Some(procedure) = self.procedure.as_mut() else {
            return Ok(StepResult::Finished);
        };

        self.stats.ticks += 1;
        let event = procedure.next_step(self.model.values());

        if let Err(e) = Self::validate(self.algorithm, event, self.model.len()) {
            self.procedure = None;
            return Err(e);
        }

        match event {
            StepEvent::Compare(..) => {
                self.stats.comparisons += 1;
            }
            StepEvent::Swap(i, j) => {
                self.model.swap(i, j);
                self.stats.swaps += 1;
            }
            StepEvent::Overwrite(i, value) => {
                self.model.overwrite(i, value);
                self.stats.overwrites += 1;
            }
            StepEvent::Done => {
                self.procedure = None;
                return Ok(StepResult::Finished);
            }
        }

        Ok(StepResult::Applied(event))
    }

    fn validate(
        algorithm: &'static str,
        event: StepEvent,
        len: usize,
    ) -> Result<(), EngineError> {
        let invalid = match event {
            StepEvent::Compare(i, j) | StepEvent::Swap(i, j) => i >= len || j >= len || i == j,
            StepEvent::Overwrite(i, _) => i >= len,
            StepEvent::Done => false,
        };
        if invalid {
            return Err(EngineError::IndexInvariantViolation {
                algorithm,
                event,
                len,
            });
        }
        Ok(())
    }

    /// Name of the algorithm this driver is running.
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// The live values, for rendering.
    pub fn values(&self) -> &[u32] {
        self.model.values()
    }

    /// Mutations applied so far.
    pub fn revision(&self) -> u64 {
        self.model.revision()
    }

    /// Whether the procedure has completed (or was aborted).
    pub fn is_finished(&self) -> bool {
        self.procedure.is_none()
    }

    pub fn stats(&self) -> StepStats {
        self.stats
    }
}
