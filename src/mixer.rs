//! Table-driven complex mixer for shifting a 16-bit baseband signal in frequency.

use std;
use std::f64::consts::PI;

use num::Complex;

use complex::{limit_scale16, mul_wide};
use error::{DspError, Result};

/// Default number of points in the sine table.
pub const DEFAULT_TABLE_LEN: usize = 4096;

/// Right shift that undoes the table amplitude.
const TABLE_SHIFT: u32 = 14;

/// Multiplies samples by a local oscillator read from a sine table.
pub struct Mixer {
    /// One period of a sine wave with amplitude `i16::MAX >> 1`.
    table: Vec<i16>,
    /// Table index of the local oscillator phase for the next sample.
    phase: usize,
    /// Table steps per sample.
    step: usize,
}

impl Mixer {
    /// Construct a new `Mixer` with the given number of sine table points, which must be
    /// a multiple of 4.
    pub fn new(table_len: usize) -> Mixer {
        assert!(table_len > 0 && table_len % 4 == 0);

        let amplitude = (std::i16::MAX >> 1) as f64;

        Mixer {
            table: (0..table_len).map(|k| {
                (amplitude * (2.0 * PI * k as f64 / table_len as f64).sin()) as i16
            }).collect(),
            phase: 0,
            step: 0,
        }
    }

    /// Set the local oscillator frequency, normalized so that 1.0 is the Nyquist
    /// frequency. Negative frequencies wrap around the table.
    pub fn set_frequency(&mut self, freq: f64) {
        let len = self.table.len() as i64;
        let step = (freq * len as f64 / 2.0).round() as i64;

        self.step = step.rem_euclid(len) as usize;
    }

    /// Reset the local oscillator phase.
    pub fn reset(&mut self) { self.phase = 0; }

    /// Mix the given sample with the local oscillator and advance its phase.
    pub fn feed(&mut self, sample: Complex<i16>) -> Complex<i16> {
        let len = self.table.len();
        let lo = Complex::new(self.table[(self.phase + len / 4) % len],
                              self.table[self.phase]);

        let out = limit_scale16(mul_wide(Complex::new(sample.re as i32, sample.im as i32),
                                         lo),
                                TABLE_SHIFT);

        self.phase = (self.phase + self.step) % len;

        out
    }

    /// Mix a block of samples into the given output buffer, which must have the same
    /// length.
    pub fn process(&mut self, input: &[Complex<i16>], out: &mut [Complex<i16>]) -> Result<()> {
        if input.len() != out.len() {
            return Err(DspError::BufferSize {
                expected: input.len(),
                got: out.len(),
            });
        }

        for (o, &s) in out.iter_mut().zip(input.iter()) {
            *o = self.feed(s);
        }

        Ok(())
    }
}

impl Default for Mixer {
    fn default() -> Self { Mixer::new(DEFAULT_TABLE_LEN) }
}
