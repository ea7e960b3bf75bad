use {
    super::{Run, role_after, role_before},
    crate::{PageId, PagingSimulator, ReferenceString, SimResult, StepResult},
};

/// First-In-First-Out (FIFO) page replacement simulator.
///
/// Evicts the page that has been resident the longest. Hits do not reorder
/// the frames: insertion order alone decides the victim, which is what sets
/// FIFO apart from LRU (and what makes it subject to Belady's anomaly).
#[derive(Debug)]
pub struct FifoSimulator<P: PageId = String> {
    run: Option<Run<P>>,
}

impl<P: PageId> Default for FifoSimulator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PageId> FifoSimulator<P> {
    /// Creates an idle FIFO simulator.
    pub fn new() -> Self {
        Self { run: None }
    }

    fn process(run: &mut Run<P>) -> StepResult<P> {
        let page = run.current();
        let hit = run.frames().contains(&page);

        // Head of the frames is the oldest insertion.
        let victim = if !hit && run.frames().is_full() {
            run.frames().front().cloned()
        } else {
            None
        };

        let before = run
            .frames()
            .snapshot(|p| role_before(p, &page, hit, victim.as_ref()));

        if !hit {
            let frames = run.frames_mut();
            if victim.is_some() {
                frames.pop_front();
            }
            // With zero capacity nothing fits, the access stays a plain miss.
            frames.push_back(page.clone());
        }

        let after = run.frames().snapshot(|p| role_after(p, &page, hit));
        run.record(hit, victim, before, after)
    }
}

impl<P: PageId> PagingSimulator<P> for FifoSimulator<P> {
    fn start(&mut self, refs: ReferenceString<P>, capacity: usize) -> SimResult<StepResult<P>> {
        self.reset();
        let run = self.run.insert(Run::new("FIFO", refs, capacity)?);
        Ok(Self::process(run))
    }

    fn advance(&mut self) -> Option<StepResult<P>> {
        let run = self.run.as_mut()?;
        if let Err(last) = run.step_forward() {
            return Some(last);
        }
        Some(Self::process(run))
    }

    fn reset(&mut self) {
        self.run = None;
    }

    fn faults(&self) -> usize {
        self.run.as_ref().map_or(0, Run::faults)
    }

    fn is_completed(&self) -> bool {
        self.run.as_ref().is_some_and(Run::is_completed)
    }

    fn resident(&self) -> Vec<P> {
        self.run
            .as_ref()
            .map_or_else(Vec::new, |run| run.frames().to_vec())
    }

    fn capacity(&self) -> usize {
        self.run.as_ref().map_or(0, |run| run.frames().capacity())
    }
}
