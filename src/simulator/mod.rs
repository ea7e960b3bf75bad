mod fifo;
mod lru;
mod optimal;

use {
    crate::{
        FrameRole,
        FrameSlot,
        PageId,
        PagingSimulator,
        ReferenceString,
        SimError,
        SimResult,
        StepResult,
        frames::FrameSet,
    },
    log::{debug, info},
};

pub use {fifo::FifoSimulator, lru::LruSimulator, optimal::OptimalSimulator};

/// Runs a simulation from start to completion.
///
/// Returns every step in order; the last one is flagged as completed.
pub fn simulate<P, S>(
    sim: &mut S,
    refs: ReferenceString<P>,
    capacity: usize,
) -> SimResult<Vec<StepResult<P>>>
where
    P: PageId,
    S: PagingSimulator<P> + ?Sized,
{
    let mut steps = Vec::with_capacity(refs.len());
    let mut step = sim.start(refs, capacity)?;
    while !step.completed {
        steps.push(step);
        match sim.advance() {
            Some(next) => step = next,
            None => return Ok(steps),
        }
    }
    steps.push(step);
    Ok(steps)
}

/// Per-run state shared by all policies.
///
/// Holds the reference string, the cursor, the fault counter and the
/// resident frames. Policy specific ledgers live next to it, in the
/// simulators themselves.
#[derive(Debug)]
pub(crate) struct Run<P: PageId> {
    policy: &'static str,
    refs: ReferenceString<P>,
    cursor: usize,
    faults: usize,
    frames: FrameSet<P>,
    last: Option<StepResult<P>>,
}

impl<P: PageId> Run<P> {
    pub fn new(policy: &'static str, refs: ReferenceString<P>, capacity: usize) -> SimResult<Self> {
        if refs.is_empty() {
            return Err(SimError::EmptyReferenceString);
        }
        info!(
            "{policy}: starting simulation of {} references with {capacity} frames",
            refs.len()
        );
        // A run never holds more distinct pages than it has references.
        let frames = FrameSet::new(capacity, refs.len());
        Ok(Self {
            policy,
            refs,
            cursor: 0,
            faults: 0,
            frames,
            last: None,
        })
    }

    pub fn refs(&self) -> &ReferenceString<P> {
        &self.refs
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn faults(&self) -> usize {
        self.faults
    }

    pub fn frames(&self) -> &FrameSet<P> {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut FrameSet<P> {
        &mut self.frames
    }

    /// Page at the cursor.
    pub fn current(&self) -> P {
        // Cursor never leaves the bounds of a non-empty reference string.
        self.refs[self.cursor].clone()
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.refs.len()
    }

    /// Whether the access at the cursor has already been processed.
    fn is_processed(&self) -> bool {
        self.last.as_ref().is_some_and(|step| step.index == self.cursor)
    }

    pub fn is_completed(&self) -> bool {
        self.is_last() && self.is_processed()
    }

    /// Moves the cursor to the next access.
    ///
    /// Returns the final step instead, if the run is already complete.
    pub fn step_forward(&mut self) -> Result<(), StepResult<P>> {
        match &self.last {
            Some(last) if self.is_last() && last.index == self.cursor => Err(last.clone()),
            // The first step is recorded by `start`, before any advance.
            _ => {
                self.cursor += 1;
                Ok(())
            }
        }
    }

    /// Records the outcome of the access at the cursor.
    pub fn record(
        &mut self,
        hit: bool,
        evicted: Option<P>,
        frames_before: Vec<FrameSlot<P>>,
        frames_after: Vec<FrameSlot<P>>,
    ) -> StepResult<P> {
        if !hit {
            self.faults += 1;
        }
        let step = StepResult {
            index: self.cursor,
            page: self.current(),
            hit,
            faults: self.faults,
            frames_before,
            evicted,
            frames_after,
            completed: self.is_last(),
        };
        debug!(
            "{}: step {} page {} {} evicted {:?} faults {}",
            self.policy,
            step.index,
            step.page,
            if hit { "HIT" } else { "MISS" },
            step.evicted,
            step.faults,
        );
        if step.completed {
            info!("{}: simulation complete with {} faults", self.policy, self.faults);
        }
        self.last = Some(step.clone());
        step
    }
}

/// Role of a slot in the "before" view of a step.
pub(crate) fn role_before<P: PageId>(
    page: &P,
    accessed: &P,
    hit: bool,
    victim: Option<&P>,
) -> FrameRole {
    if victim == Some(page) {
        FrameRole::Evicted
    } else if hit && page == accessed {
        FrameRole::Hit
    } else {
        FrameRole::Normal
    }
}

/// Role of a slot in the "after" view of a step.
pub(crate) fn role_after<P: PageId>(page: &P, accessed: &P, hit: bool) -> FrameRole {
    match (page == accessed, hit) {
        (true, true) => FrameRole::Hit,
        (true, false) => FrameRole::Inserted,
        (false, _) => FrameRole::Normal,
    }
}
