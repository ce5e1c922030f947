//! FIFO that tags each stored value with its absolute sample time.

use error::{DspError, Result};

/// Fixed-capacity FIFO where writes always succeed, overwriting the oldest values, and
/// reads address values by absolute time.
///
/// The first value written has time 1 and every later value the next time. Times are
/// 64-bit and wrap around after `u64::MAX`.
pub struct FifoWithTimeTrack<T> {
    storage: Vec<T>,
    /// Position of the next write.
    write: usize,
    /// Time of the newest value, 0 when empty.
    time_end: u64,
    /// Number of valid values.
    held: usize,
}

impl<T: Copy + Default> FifoWithTimeTrack<T> {
    /// Construct a new `FifoWithTimeTrack` holding up to `capacity` values.
    pub fn new(capacity: usize) -> FifoWithTimeTrack<T> {
        assert!(capacity > 1);

        FifoWithTimeTrack {
            storage: vec![T::default(); capacity],
            write: 0,
            time_end: 0,
            held: 0,
        }
    }

    /// Maximum number of values held.
    pub fn capacity(&self) -> usize { self.storage.len() }

    /// Number of values currently held.
    pub fn count(&self) -> usize { self.held }

    /// Get the inclusive range of times currently held, oldest first.
    pub fn time_span(&self) -> Option<(u64, u64)> {
        if self.held == 0 {
            None
        } else {
            Some((self.time_end.wrapping_sub(self.held as u64 - 1), self.time_end))
        }
    }

    /// Append the given values, which must number fewer than the capacity.
    pub fn write(&mut self, values: &[T]) -> Result<()> {
        let cap = self.capacity();

        if values.len() >= cap {
            return Err(DspError::FifoWriteTooLarge {
                len: values.len(),
                capacity: cap,
            });
        }

        for &v in values {
            self.storage[self.write] = v;
            self.write = (self.write + 1) % cap;
        }

        self.time_end = self.time_end.wrapping_add(values.len() as u64);
        self.held = ::std::cmp::min(cap, self.held + values.len());

        Ok(())
    }

    /// Copy the values with times `start` through `end` (inclusive) into the given
    /// buffer, which must hold exactly that many values.
    pub fn read(&self, start: u64, end: u64, out: &mut [T]) -> Result<()> {
        // Age of a value: 0 for the newest.
        let oldest = self.time_end.wrapping_sub(start);
        let newest = self.time_end.wrapping_sub(end);

        if self.held == 0 || newest > oldest || oldest >= self.held as u64 {
            return Err(DspError::FifoRangeUnavailable);
        }

        let len = (oldest - newest) as usize + 1;

        if out.len() != len {
            return Err(DspError::BufferSize {
                expected: len,
                got: out.len(),
            });
        }

        let cap = self.capacity();
        let first = (self.write + cap - 1 - oldest as usize) % cap;

        for (i, o) in out.iter_mut().enumerate() {
            *o = self.storage[(first + i) % cap];
        }

        Ok(())
    }

    /// Drop all values and restart time at 1.
    pub fn reset(&mut self) {
        self.write = 0;
        self.time_end = 0;
        self.held = 0;
    }
}
