use {
    crate::{FrameRole, FrameSlot, PageId},
    std::collections::{HashSet, VecDeque},
};

/// Fixed-capacity, ordered set of resident pages.
///
/// Slots keep their order, while a companion hash set answers membership
/// queries without scanning the slots.
#[derive(Debug, Clone)]
pub(crate) struct FrameSet<P: PageId> {
    capacity: usize,
    slots: VecDeque<P>,
    members: HashSet<P>,
}

impl<P: PageId> FrameSet<P> {
    /// Creates an empty set holding at most `capacity` pages.
    ///
    /// Storage is reserved for `expected` pages only (bounded by `capacity`),
    /// since the capacity itself may be far larger than anything that will
    /// ever be resident.
    pub fn new(capacity: usize, expected: usize) -> Self {
        let reserve = capacity.min(expected);
        Self {
            capacity,
            slots: VecDeque::with_capacity(reserve),
            members: HashSet::with_capacity(reserve),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether no more pages fit without evicting one.
    ///
    /// A zero-capacity set is always full.
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn contains(&self, page: &P) -> bool {
        self.members.contains(page)
    }

    /// Oldest slot, i.e. the head of insertion order.
    pub fn front(&self) -> Option<&P> {
        self.slots.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.slots.iter()
    }

    /// Appends a page at the tail.
    ///
    /// Returns `false` (and does nothing) if the set is full or the page is
    /// already resident.
    pub fn push_back(&mut self, page: P) -> bool {
        if self.is_full() || self.members.contains(&page) {
            return false;
        }
        self.members.insert(page.clone());
        self.slots.push_back(page);
        true
    }

    /// Removes the page at the head.
    pub fn pop_front(&mut self) -> Option<P> {
        let page = self.slots.pop_front()?;
        self.members.remove(&page);
        Some(page)
    }

    /// Puts `page` into the slot currently held by `victim`.
    ///
    /// Returns `false` (and does nothing) if `victim` is not resident or
    /// `page` already is.
    pub fn replace(&mut self, victim: &P, page: P) -> bool {
        if self.members.contains(&page) {
            return false;
        }
        let Some(slot) = self.slots.iter_mut().find(|p| **p == *victim) else {
            return false;
        };
        self.members.remove(victim);
        self.members.insert(page.clone());
        *slot = page;
        true
    }

    /// Captures the slots, assigning each page a role.
    pub fn snapshot(&self, role: impl Fn(&P) -> FrameRole) -> Vec<FrameSlot<P>> {
        self.slots
            .iter()
            .map(|page| FrameSlot::new(page.clone(), role(page)))
            .collect()
    }

    pub fn to_vec(&self) -> Vec<P> {
        self.slots.iter().cloned().collect()
    }
}
