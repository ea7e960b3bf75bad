use crate::PageId;

/// Role of a frame slot within a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrameRole {
    /// Resident page not involved in the access.
    #[default]
    Normal,

    /// Page matched the access.
    Hit,

    /// Page chosen for eviction (only in the "before" view).
    Evicted,

    /// Page placed by the access (only in the "after" view).
    Inserted,
}

/// Resident page together with its role in a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSlot<P: PageId> {
    /// Resident page.
    pub page: P,

    /// What happened to the page during the step.
    pub role: FrameRole,
}

impl<P: PageId> FrameSlot<P> {
    /// Creates a new frame slot.
    pub fn new(page: P, role: FrameRole) -> Self {
        Self { page, role }
    }
}

/// Outcome of processing one access of the reference string.
///
/// This carries everything a presentation layer needs to render the step;
/// it is a plain value detached from the simulator that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult<P: PageId> {
    /// Position of the access within the reference string.
    pub index: usize,

    /// Accessed page.
    pub page: P,

    /// Whether the page was already resident.
    pub hit: bool,

    /// Cumulative number of page faults, including this access.
    pub faults: usize,

    /// Frames prior to eviction/insertion.
    pub frames_before: Vec<FrameSlot<P>>,

    /// Page removed to make room for the accessed one, if any.
    pub evicted: Option<P>,

    /// Frames after the access has been served.
    pub frames_after: Vec<FrameSlot<P>>,

    /// Whether this was the final access of the reference string.
    pub completed: bool,
}

impl<P: PageId> StepResult<P> {
    /// Whether the access was a page fault.
    pub fn is_fault(&self) -> bool {
        !self.hit
    }

    /// Pages resident after the access, in slot order.
    pub fn resident(&self) -> impl Iterator<Item = &P> {
        self.frames_after.iter().map(|slot| &slot.page)
    }
}
