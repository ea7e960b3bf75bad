#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(elided_lifetimes_in_paths)]

mod error;
mod frames;
pub mod input;
mod reference;
mod session;
mod simulator;
mod step;
mod util;

use std::{fmt, hash::Hash};

pub use {
    error::{SimError, SimResult},
    reference::{NextUse, ReferenceString},
    session::{Policy, Session},
    simulator::{FifoSimulator, LruSimulator, OptimalSimulator, simulate},
    step::{FrameRole, FrameSlot, StepResult},
};

/// Page identifier type.
///
/// Pages are opaque tokens: the simulators only ever compare them for
/// equality, hash them and print them. Reference strings parsed from text
/// use `String` pages, while tests and embedders are free to use integers.
pub trait PageId: Clone + Hash + Eq + fmt::Display + fmt::Debug {}

impl<T> PageId for T where T: Clone + Hash + Eq + fmt::Display + fmt::Debug {}

/// Step-wise page replacement simulation.
///
/// Every policy exposes the same state machine: a simulation is started with
/// a reference string and a frame capacity, which immediately processes the
/// first access. Each call to [`advance`](PagingSimulator::advance) then
/// processes exactly one more access, until the reference string is
/// exhausted.
pub trait PagingSimulator<P: PageId> {
    /// Starts a new simulation, discarding any previous run.
    ///
    /// Returns the result of processing the access at index 0. Fails with
    /// [`SimError::EmptyReferenceString`] if there is nothing to simulate, in
    /// which case the simulator is left as if [`reset`](Self::reset) had
    /// been called.
    ///
    /// A capacity of zero is accepted: every access is then a miss and no
    /// page is ever retained.
    fn start(&mut self, refs: ReferenceString<P>, capacity: usize) -> SimResult<StepResult<P>>;

    /// Processes the next access of the reference string.
    ///
    /// Once the final access has been processed, the simulation is complete
    /// and every further call returns that final step again (with
    /// `completed` set), without changing any state.
    ///
    /// Returns `None` only if no simulation is active.
    fn advance(&mut self) -> Option<StepResult<P>>;

    /// Clears all per-run state.
    fn reset(&mut self);

    /// Number of page faults so far in the current run.
    fn faults(&self) -> usize;

    /// Whether the final access of the reference string has been processed.
    fn is_completed(&self) -> bool;

    /// Currently resident pages, in frame slot order.
    fn resident(&self) -> Vec<P>;

    /// Frame capacity of the current run (zero when idle).
    fn capacity(&self) -> usize;
}
