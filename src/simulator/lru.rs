use {
    super::{Run, role_after, role_before},
    crate::{PageId, PagingSimulator, ReferenceString, SimResult, StepResult, util::Sequence},
    log::trace,
    priority_queue::PriorityQueue,
    std::cmp::Reverse,
};

/// Least Recently Used (LRU) page replacement simulator.
///
/// Evicts the resident page whose last reference is the oldest. Victims are
/// taken from a recency ledger, while the new page takes over the victim's
/// frame slot, so the remaining pages never move.
#[derive(Debug)]
pub struct LruSimulator<P: PageId = String> {
    run: Option<Run<P>>,
    ledger: RecencyLedger<P>,
}

/// Reference order of resident pages.
///
/// Implemented as a priority queue ordered by the last access sequence
/// number: the least recently used page is at the head of the queue and
/// re-referencing a page moves it to the back.
#[derive(Debug)]
struct RecencyLedger<P: PageId> {
    pages: PriorityQueue<P, Reverse<u64>>,
    seq: Sequence,
}

impl<P: PageId> RecencyLedger<P> {
    fn new() -> Self {
        Self {
            pages: PriorityQueue::new(),
            seq: Sequence::new(),
        }
    }

    /// Marks the page as the most recently used one.
    fn touch(&mut self, page: P) {
        // If the page is already within the queue, its priority is updated.
        // Otherwise, it is inserted. Both cases are handled by `push`.
        let priority = self.seq.next();
        self.pages.push(page, Reverse(priority));
    }

    fn least_recent(&self) -> Option<&P> {
        self.pages.peek().map(|(page, _)| page)
    }

    fn remove(&mut self, page: &P) {
        self.pages.remove(page);
    }

    /// Pages from least to most recently used.
    fn ordered(&self) -> Vec<P> {
        self.pages
            .clone()
            .into_sorted_iter()
            .map(|(page, _)| page)
            .collect()
    }

    fn clear(&mut self) {
        self.pages.clear();
        self.seq.reset();
    }
}

impl<P: PageId> Default for LruSimulator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PageId> LruSimulator<P> {
    /// Creates an idle LRU simulator.
    pub fn new() -> Self {
        Self {
            run: None,
            ledger: RecencyLedger::new(),
        }
    }

    /// Resident pages ordered from least to most recently used.
    pub fn recency(&self) -> Vec<P> {
        self.ledger.ordered()
    }

    fn process(run: &mut Run<P>, ledger: &mut RecencyLedger<P>) -> StepResult<P> {
        let page = run.current();
        let hit = run.frames().contains(&page);

        // Ledger head is looked up before the current access is logged.
        let victim = if !hit && run.frames().is_full() {
            ledger.least_recent().cloned()
        } else {
            None
        };
        if let Some(victim) = &victim {
            trace!("LRU: least recently used page is {victim}");
        }

        let before = run
            .frames()
            .snapshot(|p| role_before(p, &page, hit, victim.as_ref()));

        if !hit {
            match &victim {
                Some(victim) => {
                    run.frames_mut().replace(victim, page.clone());
                    ledger.remove(victim);
                }
                None => {
                    run.frames_mut().push_back(page.clone());
                }
            }
        }

        // Only resident pages are tracked, which excludes every page when
        // there are no frames at all.
        if run.frames().contains(&page) {
            ledger.touch(page.clone());
        }

        let after = run.frames().snapshot(|p| role_after(p, &page, hit));
        run.record(hit, victim, before, after)
    }
}

impl<P: PageId> PagingSimulator<P> for LruSimulator<P> {
    fn start(&mut self, refs: ReferenceString<P>, capacity: usize) -> SimResult<StepResult<P>> {
        self.reset();
        let run = self.run.insert(Run::new("LRU", refs, capacity)?);
        Ok(Self::process(run, &mut self.ledger))
    }

    fn advance(&mut self) -> Option<StepResult<P>> {
        let run = self.run.as_mut()?;
        if let Err(last) = run.step_forward() {
            return Some(last);
        }
        Some(Self::process(run, &mut self.ledger))
    }

    fn reset(&mut self) {
        self.run = None;
        self.ledger.clear();
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
