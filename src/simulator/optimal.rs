//! Optimal (Belady's) page replacement.
//!
//! The optimal policy needs to know the future, so it can only ever be a
//! simulation: on a fault it evicts the resident page whose next reference
//! is the furthest away. It is the lower bound every realizable policy is
//! measured against.

use {
    super::{Run, role_after, role_before},
    crate::{PageId, PagingSimulator, ReferenceString, SimResult, StepResult, util::Sequence},
    log::trace,
    std::{cmp::Reverse, collections::HashMap},
};

/// Optimal page replacement simulator.
#[derive(Debug)]
pub struct OptimalSimulator<P: PageId = String> {
    run: Option<Run<P>>,
    ages: AgeLedger<P>,
}

/// Insertion order of resident pages.
///
/// Used to break ties among pages that are never referenced again: the page
/// that has been resident the longest goes first.
#[derive(Debug)]
struct AgeLedger<P: PageId> {
    ages: HashMap<P, u64>,
    seq: Sequence,
}

impl<P: PageId> AgeLedger<P> {
    fn new() -> Self {
        Self {
            ages: HashMap::new(),
            seq: Sequence::new(),
        }
    }

    fn insert(&mut self, page: P) {
        let age = self.seq.next();
        self.ages.insert(page, age);
    }

    fn remove(&mut self, page: &P) {
        self.ages.remove(page);
    }

    /// Insertion stamp of the page; untracked pages count as the youngest.
    fn age(&self, page: &P) -> u64 {
        self.ages.get(page).copied().unwrap_or(u64::MAX)
    }

    fn clear(&mut self) {
        self.ages.clear();
        self.seq.reset();
    }
}

impl<P: PageId> Default for OptimalSimulator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PageId> OptimalSimulator<P> {
    /// Creates an idle optimal simulator.
    pub fn new() -> Self {
        Self {
            run: None,
            ages: AgeLedger::new(),
        }
    }

    /// Picks the resident page to evict for the access at the cursor.
    ///
    /// The victim is the page with the furthest next use. Pages that are
    /// never used again all tie at the top, and among them the oldest
    /// insertion wins. Two resident pages can never share a finite next use,
    /// as each position of the reference string holds a single page.
    fn victim(run: &Run<P>, ages: &AgeLedger<P>) -> Option<P> {
        let (refs, cursor) = (run.refs(), run.cursor());
        run.frames()
            .iter()
            .map(|page| {
                let next = refs.next_use(page, cursor);
                trace!("OPTIMAL: page {page} next use {next:?}");
                (page, (next, Reverse(ages.age(page))))
            })
            .max_by_key(|(_, key)| *key)
            .map(|(page, _)| page.clone())
    }

    fn process(run: &mut Run<P>, ages: &mut AgeLedger<P>) -> StepResult<P> {
        let page = run.current();
        let hit = run.frames().contains(&page);

        let victim = if !hit && run.frames().is_full() {
            Self::victim(run, ages)
        } else {
            None
        };

        let before = run
            .frames()
            .snapshot(|p| role_before(p, &page, hit, victim.as_ref()));

        if !hit {
            let placed = match &victim {
                Some(victim) => {
                    ages.remove(victim);
                    run.frames_mut().replace(victim, page.clone())
                }
                None => run.frames_mut().push_back(page.clone()),
            };
            if placed {
                ages.insert(page.clone());
            }
        }

        let after = run.frames().snapshot(|p| role_after(p, &page, hit));
        run.record(hit, victim, before, after)
    }
}

impl<P: PageId> PagingSimulator<P> for OptimalSimulator<P> {
    fn start(&mut self, refs: ReferenceString<P>, capacity: usize) -> SimResult<StepResult<P>> {
        self.reset();
        let run = self.run.insert(Run::new("OPTIMAL", refs, capacity)?);
        Ok(Self::process(run, &mut self.ages))
    }

    fn advance(&mut self) -> Option<StepResult<P>> {
        let run = self.run.as_mut()?;
        if let Err(last) = run.step_forward() {
            return Some(last);
        }
        Some(Self::process(run, &mut self.ages))
    }

    fn reset(&mut self) {
        self.run = None;
        self.ages.clear();
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
