/// Monotonic sequence number generator.
///
/// Whenever a ledger needs to log the order of page accesses or insertions,
/// it can use sequence numbers as logical timestamps. Each simulator owns its
/// generator, so numbers are only ever compared within a single run.
#[derive(Debug, Default, Clone)]
pub struct Sequence {
    val: u64,
}

impl Sequence {
    /// Creates a new generator, starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { val: 0 }
    }

    /// Returns next sequence number.
    ///
    /// A run draws at most two numbers per access, so the counter cannot
    /// realistically overflow.
    pub fn next(&mut self) -> u64 {
        let val = self.val;
        self.val += 1;
        val
    }

    /// Rewinds the generator back to zero.
    pub fn reset(&mut self) {
        self.val = 0;
    }
}
