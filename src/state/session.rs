/// Budget and failure accounting for a single crawl invocation
///
/// One session is shared by all three crawl phases, so the iteration count
/// is monotonically non-decreasing across the whole run and exhausting the
/// budget in an early phase also stops every later phase.
#[derive(Debug, Clone)]
pub struct CrawlSession {
    /// Candidate visits recorded so far, across all phases
    iterations: u32,

    /// Budget on total candidate visits for the whole run
    iteration_limit: u32,

    /// Pages that could not be retrieved (unreachable, malformed, timed out)
    fetch_failures: u32,
}

impl CrawlSession {
    /// Creates a fresh session with the given iteration budget
    pub fn new(iteration_limit: u32) -> Self {
        Self {
            iterations: 0,
            iteration_limit,
            fetch_failures: 0,
        }
    }

    /// Accounts for one candidate visit
    ///
    /// Returns `false` when the budget was already exhausted before this
    /// visit, in which case nothing is recorded and the phase must stop.
    /// The check happens before the increment, so the visit that pushes the
    /// counter past the limit is itself still allowed through.
    pub fn try_visit(&mut self) -> bool {
        if self.iterations > self.iteration_limit {
            return false;
        }
        self.iterations += 1;
        true
    }

    /// True once the recorded visits exceed the budget
    ///
    /// Later phases consult this before doing any work at all, so an
    /// exhausted budget stops them without spending a fetch.
    pub fn budget_exhausted(&self) -> bool {
        self.iterations > self.iteration_limit
    }

    /// Records a recoverable fetch failure
    pub fn record_failure(&mut self) {
        self.fetch_failures += 1;
    }

    /// Candidate visits recorded so far
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Recoverable fetch failures recorded so far
    pub fn fetch_failures(&self) -> u32 {
        self.fetch_failures
    }
}
