//! SDPSK symbol mapping.
//!
//! Each bit rotates the constellation point by a quarter turn: counterclockwise for a 1
//! and clockwise for a 0.

use std::ops::Neg;

use num::Complex;

use error::{DspError, Result};

/// Number of constellation points.
const POINTS: usize = 4;

/// Nominal per-axis amplitude of the constellation for an output sample type.
pub trait Amplitude: Copy + Neg<Output = Self> {
    fn amplitude() -> Self;
}

impl Amplitude for i8 {
    fn amplitude() -> Self { 32 }
}

impl Amplitude for i16 {
    fn amplitude() -> Self { 8192 }
}

impl Amplitude for i32 {
    fn amplitude() -> Self { 8192 }
}

impl Amplitude for f32 {
    fn amplitude() -> Self { 0.707 }
}

impl Amplitude for f64 {
    fn amplitude() -> Self { 0.707 }
}

/// Maps bits to SDPSK symbols.
pub struct SdpskModulator<T> {
    /// Constellation, one quadrant per point starting at `(A, A)`.
    map: [Complex<T>; POINTS],
    /// Index of the last transmitted point.
    state: usize,
}

impl<T: Amplitude> SdpskModulator<T> {
    /// Construct a new `SdpskModulator` starting at the first constellation point.
    pub fn new() -> SdpskModulator<T> {
        let a = T::amplitude();

        SdpskModulator {
            map: [
                Complex::new(a, a),
                Complex::new(-a, a),
                Complex::new(-a, -a),
                Complex::new(a, -a),
            ],
            state: 0,
        }
    }

    /// Map the given bit, where any positive value is a 1, to the next symbol.
    pub fn feed(&mut self, bit: i8) -> Complex<T> {
        self.state = (self.state + if bit > 0 { 1 } else { POINTS - 1 }) % POINTS;
        self.map[self.state]
    }

    /// Map a block of bits into the given output buffer, which must have the same length.
    pub fn process(&mut self, bits: &[i8], out: &mut [Complex<T>]) -> Result<()> {
        if bits.len() != out.len() {
            return Err(DspError::BufferSize {
                expected: bits.len(),
                got: out.len(),
            });
        }

        for (o, &b) in out.iter_mut().zip(bits.iter()) {
            *o = self.feed(b);
        }

        Ok(())
    }

    /// Return to the first constellation point.
    pub fn reset(&mut self) { self.state = 0; }
}

impl<T: Amplitude> Default for SdpskModulator<T> {
    fn default() -> Self { SdpskModulator::new() }
}
