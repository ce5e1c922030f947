//! Wraparound and gated counters for walking circular blocks.

/// Index into `0..len` that wraps around at both ends.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CircularIndex {
    idx: usize,
    len: usize,
}

impl CircularIndex {
    /// Construct a new `CircularIndex` over `0..len` starting at 0.
    pub fn new(len: usize) -> CircularIndex {
        CircularIndex::starting_at(0, len)
    }

    /// Construct a new `CircularIndex` over `0..len` starting at `start` (reduced modulo
    /// `len`).
    pub fn starting_at(start: usize, len: usize) -> CircularIndex {
        assert!(len > 0);

        CircularIndex {
            idx: start % len,
            len: len,
        }
    }

    /// Get the current index.
    pub fn get(&self) -> usize { self.idx }

    /// Get the length of the cycle.
    pub fn len(&self) -> usize { self.len }

    /// Move to the next index, wrapping to 0 after `len - 1`.
    pub fn advance(&mut self) {
        self.idx += 1;

        if self.idx == self.len {
            self.idx = 0;
        }
    }

    /// Move to the previous index, wrapping to `len - 1` after 0.
    pub fn retreat(&mut self) {
        self.idx = if self.idx == 0 {
            self.len - 1
        } else {
            self.idx - 1
        };
    }
}

/// Counter that reads 0 until more than `settle` ticks have been recorded and then counts
/// the extra ticks.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SettlingCounter {
    /// Number of ticks so far.
    ticks: usize,
    /// Number of ticks absorbed before counting starts.
    settle: usize,
}

impl SettlingCounter {
    /// Construct a new `SettlingCounter` that absorbs the given number of ticks.
    pub fn new(settle: usize) -> SettlingCounter {
        SettlingCounter {
            ticks: 0,
            settle: settle,
        }
    }

    /// Get the current count.
    pub fn get(&self) -> usize { self.ticks.saturating_sub(self.settle) }

    /// Record a tick.
    pub fn tick(&mut self) { self.ticks += 1; }
}
