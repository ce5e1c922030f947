//! Viterbi recursion over the circular 64-state trellis.
//!
//! A tail-biting block starts and ends in the same unknown state, so the recursion starts
//! every state at a zero metric, runs over the whole block, and then wraps around for
//! `2L` more steps while the metrics settle. Only the survivor decisions of the last
//! `infoLen + L - K` steps are kept for traceback.

use coding::labels::Label;
use coding::metrics::{acs, BranchMetrics};
use consts::{BUTTERFLIES, STATES, STATE_BITS};
use util::{CircularIndex, SettlingCounter};

/// Path metric normalization policy.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize, Deserialize))]
pub enum Normalization {
    /// Metrics grow for the whole recursion.
    Disabled,
    /// Once every path metric has reached the threshold, subtract the threshold from all
    /// metrics before the next step. With `NORMALIZATION_THRESHOLD` the metrics fit in 9
    /// bits.
    Threshold(u32),
}

impl Default for Normalization {
    fn default() -> Self { Normalization::Disabled }
}

/// Survivor decisions for the retained trellis steps, one bit per state per step.
///
/// Decisions stored while the recursion settles all land in the first row, so each is
/// overwritten by the next until the settle phase is over.
pub struct SurvivorMemory {
    /// Decision bits for each step, with state `s` at bit `s`.
    rows: Vec<u64>,
    /// Row for the next decisions.
    write: SettlingCounter,
}

impl SurvivorMemory {
    /// Construct a new `SurvivorMemory` retaining the given number of rows after the
    /// given number of settling steps.
    pub fn new(rows: usize, settle: usize) -> SurvivorMemory {
        SurvivorMemory {
            rows: vec![0; rows],
            write: SettlingCounter::new(settle),
        }
    }

    /// Store the decisions of the next trellis step.
    pub fn store(&mut self, decisions: u64) {
        self.rows[self.write.get()] = decisions;
        self.write.tick();
    }

    /// Get the decision for the given state in the given row.
    pub fn bit(&self, row: usize, state: usize) -> u8 {
        (self.rows[row] >> state & 1) as u8
    }

    /// Number of retained rows.
    pub fn len(&self) -> usize { self.rows.len() }
}

/// Final state of the recursion.
pub struct Trellis {
    /// Path metric of each state after the last step.
    metrics: [u32; STATES],
    /// Retained survivor decisions.
    survivors: SurvivorMemory,
}

impl Trellis {
    /// Get the final path metric of each state.
    pub fn metrics(&self) -> &[u32] { &self.metrics[..] }

    /// Get the retained survivor decisions.
    pub fn survivors(&self) -> &SurvivorMemory { &self.survivors }

    /// Get the state with the largest final metric and that metric.
    pub fn best_state(&self) -> (usize, u32) { best_state(&self.metrics[..]) }
}

/// Find the state with the largest metric. The lowest such state wins ties.
pub fn best_state(metrics: &[u32]) -> (usize, u32) {
    metrics.iter().enumerate().fold((0, 0), |(best, max), (s, &m)| {
        if m > max {
            (s, m)
        } else {
            (best, max)
        }
    })
}

/// Runs the add-compare-select recursion for one block.
pub struct Recursion<'a> {
    /// Branch metrics for each time step of the block.
    branch: &'a BranchMetrics,
    /// Path metrics for the current and previous step.
    metrics: [[u32; STATES]; 2],
    cur: usize,
    prev: usize,
    survivors: SurvivorMemory,
    /// Time step within the block.
    time: CircularIndex,
    normalization: Normalization,
    /// Whether every metric reached the normalization threshold in the last step.
    alert: bool,
    /// Total number of steps to run.
    steps: usize,
}

impl<'a> Recursion<'a> {
    /// Construct a new `Recursion` over the given branch metrics with traceback depth
    /// `traceback`. The block length is the number of time steps in `branch`.
    pub fn new(branch: &'a BranchMetrics, traceback: usize, normalization: Normalization)
        -> Recursion<'a>
    {
        let info_len = branch.len();

        debug_assert!(info_len > 0);
        debug_assert!(traceback >= STATE_BITS);

        Recursion {
            branch: branch,
            metrics: [[0; STATES]; 2],
            cur: 1,
            prev: 0,
            survivors: SurvivorMemory::new(info_len + traceback - STATE_BITS,
                                           traceback + STATE_BITS),
            time: CircularIndex::new(info_len),
            normalization: normalization,
            alert: false,
            steps: info_len + 2 * traceback,
        }
    }

    /// Run every step of the recursion.
    pub fn run(mut self) -> Trellis {
        for _ in 0..self.steps {
            self.step();
        }

        Trellis {
            metrics: self.metrics[self.prev],
            survivors: self.survivors,
        }
    }

    fn switch_metrics(&mut self) {
        ::std::mem::swap(&mut self.cur, &mut self.prev);
    }

    /// Offset to remove from the previous metrics before this step.
    fn offset(&self) -> u32 {
        match self.normalization {
            Normalization::Threshold(t) if self.alert => t,
            _ => 0,
        }
    }

    fn step(&mut self) {
        let offset = self.offset();

        if offset > 0 {
            trace!(offset = offset, "normalizing path metrics");
        }

        let n = self.time.get();
        let mut decisions = 0u64;

        for s00 in 0..BUTTERFLIES {
            let s01 = s00 | BUTTERFLIES;

            // All metrics are at least the offset when normalization kicks in.
            let pm00 = self.metrics[self.prev][s00] - offset;
            let pm01 = self.metrics[self.prev][s01] - offset;

            // Metric of the branch from s00 to s10.
            let bm = self.branch.get(n, Label::upper(s00));

            let s10 = s00 << 1;
            let s11 = s10 | 1;

            let upper = acs(pm00, pm01, bm, -bm);
            let lower = acs(pm00, pm01, -bm, bm);

            self.metrics[self.cur][s10] = upper.metric;
            self.metrics[self.cur][s11] = lower.metric;

            decisions |= (upper.bit as u64) << s10 | (lower.bit as u64) << s11;
        }

        self.alert = match self.normalization {
            Normalization::Threshold(t) => self.metrics[self.cur].iter().all(|&m| m >= t),
            Normalization::Disabled => false,
        };

        self.survivors.store(decisions);
        self.switch_metrics();
        self.time.advance();
    }
}
