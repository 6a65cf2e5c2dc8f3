//! Sorting procedures
//!
//! One suspendable procedure per algorithm, each expressed as an explicit
//! resumable state machine: iterative algorithms carry their loop counters
//! and a small phase flag, recursive ones (merge, quick, stooge, bitonic)
//! carry an explicit stack of resumable frames in place of the native call
//! stack. Externally every procedure exposes only "produce the next step
//! event", so one driver serves all sixteen without special cases.
//!
//! Procedures read the live array through the slice the driver passes in.
//! Because the driver applies each event before asking for the next one, a
//! procedure may decide compare-and-swap in a single look and stage the
//! `Swap` for its next resumption — the decision stays valid since
//! `Compare` mutates nothing.

pub mod bitonic;
pub mod bogo;
pub mod exchange;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod stooge;

use crate::engine::event::StepEvent;
use rustc_hash::FxHashMap;

/// One running sort's control flow, parked between steps.
///
/// Implementations hold all of their private state (counters, frame
/// stacks) internally; they are created bound to one array length, produce
/// a finite (bogo excepted) sequence of events ending in exactly one
/// [`StepEvent::Done`], and are never resumed after that.
pub trait Procedure {
    /// Produce the next step event, reading `values` as left by every
    /// event this procedure has already emitted.
    fn next_step(&mut self, values: &[u32]) -> StepEvent;
}

type Factory = fn(usize) -> Box<dyn Procedure>;

/// Registered algorithms in their stable display order.
const ALGORITHMS: &[(&str, Factory)] = &[
    ("Bubble", |n| Box::new(exchange::Bubble::new(n))),
    ("Selection", |n| Box::new(selection::Selection::new(n))),
    ("Insertion", |n| Box::new(insertion::Insertion::new(n))),
    ("Shell", |n| Box::new(insertion::Shell::new(n))),
    ("Heap", |n| Box::new(heap::HeapSort::new(n))),
    ("Merge", |n| Box::new(merge::MergeSort::new(n))),
    ("Quick", |n| Box::new(quick::QuickSort::new(n))),
    ("Cocktail", |n| Box::new(exchange::Cocktail::new(n))),
    ("Odd-Even", |n| Box::new(exchange::OddEven::new(n))),
    ("Gnome", |n| Box::new(exchange::Gnome::new(n))),
    ("Comb", |n| Box::new(exchange::Comb::new(n))),
    ("Pancake", |n| Box::new(selection::Pancake::new(n))),
    ("Stooge", |n| Box::new(stooge::StoogeSort::new(n))),
    ("Bitonic", |n| Box::new(bitonic::BitonicSort::new(n))),
    ("Bogo", |n| Box::new(bogo::BogoSort::new(n))),
    ("Radix", |n| Box::new(radix::RadixSort::new(n))),
];

/// Fixed mapping from a human-readable algorithm name to a factory that
/// instantiates a fresh procedure for a given array length.
pub struct Registry {
    by_name: FxHashMap<&'static str, Factory>,
}

impl Registry {
    pub fn new() -> Self {
        let mut by_name = FxHashMap::default();
        for &(name, factory) in ALGORITHMS {
            by_name.insert(name, factory);
        }
        Registry { by_name }
    }

    /// Algorithm names in stable display order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        ALGORITHMS.iter().map(|&(name, _)| name)
    }

    /// Instantiate a fresh procedure for `name` over an array of `len`
    /// elements. Returns the canonical name alongside it, or `None` if the
    /// name is not registered.
    pub fn instantiate(
        &self,
        name: &str,
        len: usize,
    ) -> Option<(&'static str, Box<dyn Procedure>)> {
        let (&canonical, factory) = self.by_name.get_key_value(name)?;
        Some((canonical, factory(len)))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
