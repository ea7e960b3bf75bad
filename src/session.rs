use {
    crate::{
        FifoSimulator,
        LruSimulator,
        OptimalSimulator,
        PageId,
        PagingSimulator,
        ReferenceString,
        SimError,
        SimResult,
        StepResult,
    },
    log::info,
    std::{fmt, str::FromStr},
};

/// Page replacement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-In-First-Out.
    Fifo,
    /// Least Recently Used.
    Lru,
    /// Belady's optimal algorithm.
    Optimal,
}

impl Policy {
    /// All policies, in presentation order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Upper-case display name.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "OPTIMAL",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            _ => Err(SimError::UnknownPolicy(s.to_owned())),
        }
    }
}

/// Drives one simulator out of a fixed set of three.
///
/// The session owns a simulator per policy for its whole lifetime. Start and
/// advance requests are forwarded to the simulator of the selected policy;
/// the other two are left untouched.
#[derive(Debug)]
pub struct Session<P: PageId = String> {
    selected: Option<Policy>,
    fifo: FifoSimulator<P>,
    lru: LruSimulator<P>,
    optimal: OptimalSimulator<P>,
}

impl<P: PageId> Session<P> {
    /// Creates a session with no policy selected.
    pub fn new() -> Self {
        Self {
            selected: None,
            fifo: FifoSimulator::new(),
            lru: LruSimulator::new(),
            optimal: OptimalSimulator::new(),
        }
    }

    /// Selects the policy subsequent requests are forwarded to.
    pub fn select(&mut self, policy: Policy) {
        info!("Selected policy: {policy}");
        self.selected = Some(policy);
    }

    /// Currently selected policy.
    pub fn selected(&self) -> Option<Policy> {
        self.selected
    }

    /// Simulator of the given policy.
    pub fn simulator(&self, policy: Policy) -> &dyn PagingSimulator<P> {
        match policy {
            Policy::Fifo => &self.fifo,
            Policy::Lru => &self.lru,
            Policy::Optimal => &self.optimal,
        }
    }

    fn simulator_mut(&mut self, policy: Policy) -> &mut dyn PagingSimulator<P> {
        match policy {
            Policy::Fifo => &mut self.fifo,
            Policy::Lru => &mut self.lru,
            Policy::Optimal => &mut self.optimal,
        }
    }

    /// Starts a simulation on the selected policy.
    pub fn start(&mut self, refs: ReferenceString<P>, capacity: usize) -> SimResult<StepResult<P>> {
        let policy = self.selected.ok_or(SimError::NoPolicySelected)?;
        self.simulator_mut(policy).start(refs, capacity)
    }

    /// Advances the simulation of the selected policy.
    ///
    /// Returns `None` if no policy is selected or its simulator is idle.
    pub fn advance(&mut self) -> Option<StepResult<P>> {
        let policy = self.selected?;
        self.simulator_mut(policy).advance()
    }

    /// Resets every simulator and drops the policy selection.
    pub fn clear(&mut self) {
        self.fifo.reset();
        self.lru.reset();
        self.optimal.reset();
        self.selected = None;
    }
}

impl<P: PageId> Default for Session<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl Session<String> {
    /// Starts a simulation on the selected policy from whitespace-delimited
    /// text.
    pub fn start_str(&mut self, input: &str, capacity: usize) -> SimResult<StepResult<String>> {
        self.start(ReferenceString::from(input), capacity)
    }
}
