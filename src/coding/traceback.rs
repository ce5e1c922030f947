//! Traceback through the retained survivor decisions.
//!
//! The walk starts from the best final state at the newest retained step and runs back
//! through every retained step. The first `L - K` steps only settle onto the surviving
//! path, and each later step recovers one info bit, landing at positions `L - 1`,
//! `L - 2`, ... modulo the block length.

use consts::{BUTTERFLIES, STATE_BITS};
use coding::trellis::SurvivorMemory;
use util::{CircularIndex, SettlingCounter};

/// Get the state preceding the given state when the given survivor decision was made.
///
/// The decision is the bit shifted out of the oldest encoder cell, so it becomes the MSB
/// of the predecessor.
pub fn predecessor(state: usize, bit: u8) -> usize {
    (bit as usize) << (STATE_BITS - 1) | state >> 1
}

/// Walks back through survivor decisions, yielding `(position, bit)` for each recovered
/// info bit.
pub struct Traceback<'a> {
    survivors: &'a SurvivorMemory,
    /// Current trellis state.
    state: usize,
    /// Number of survivor rows left to visit.
    rows: usize,
    /// Gates output until the walk has settled onto the surviving path.
    settle: SettlingCounter,
    /// Info bit position of the next output.
    pos: CircularIndex,
}

impl<'a> Traceback<'a> {
    /// Construct a new `Traceback` starting at the given final state, with traceback depth
    /// `traceback`, over blocks of `info_len` bits.
    pub fn new(survivors: &'a SurvivorMemory, state: usize, traceback: usize,
               info_len: usize)
        -> Traceback<'a>
    {
        debug_assert!(state < 2 * BUTTERFLIES);
        debug_assert!(traceback >= STATE_BITS);

        Traceback {
            survivors: survivors,
            state: state,
            rows: survivors.len(),
            settle: SettlingCounter::new(traceback - STATE_BITS),
            pos: CircularIndex::starting_at(traceback - 1, info_len),
        }
    }
}

impl<'a> Iterator for Traceback<'a> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        while self.rows > 0 {
            self.rows -= 1;

            let bit = self.survivors.bit(self.rows, self.state);
            self.state = predecessor(self.state, bit);

            self.settle.tick();

            if self.settle.get() == 0 {
                continue;
            }

            let pos = self.pos.get();
            self.pos.retreat();

            return Some((pos, bit));
        }

        None
    }
}

/// Trace back from the given final state and collect the recovered info bits into block
/// order.
pub fn traceback(survivors: &SurvivorMemory, state: usize, traceback: usize,
                 info_len: usize)
    -> Vec<u8>
{
    let mut bits = vec![0; info_len];

    for (pos, bit) in Traceback::new(survivors, state, traceback, info_len) {
        bits[pos] = bit;
    }

    bits
}
