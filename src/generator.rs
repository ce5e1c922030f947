//! Sine wave generators and quarter-wave cosine tables.
//!
//! Frequencies are normalized so that 1.0 is the Nyquist frequency. Each generator
//! advances its phase before computing a sample, so the first sample is taken one step
//! into the wave.

use std::f64::consts::PI;

use num::{self, Complex, NumCast, Zero};

/// Phase accumulator kept within `[0, 2π)`.
#[derive(Copy, Clone, Debug)]
struct Phase {
    /// Current phase (radians).
    phase: f64,
    /// Phase step (radians per sample).
    step: f64,
}

impl Phase {
    fn new(freq: f64) -> Phase {
        Phase {
            phase: 0.0,
            step: freq * PI,
        }
    }

    fn advance(&mut self) -> f64 {
        self.phase += self.step;

        if self.phase >= 2.0 * PI {
            self.phase -= 2.0 * PI;
        }

        if self.phase < 0.0 {
            self.phase += 2.0 * PI;
        }

        self.phase
    }
}

/// Yields a real cosine wave with the given peak amplitude.
pub struct SineGen<T> {
    phase: Phase,
    amplitude: f64,
    out: ::std::marker::PhantomData<T>,
}

impl<T: NumCast + Into<f64>> SineGen<T> {
    /// Construct a new `SineGen` with the given normalized frequency and amplitude.
    pub fn new(freq: f64, amplitude: T) -> SineGen<T> {
        SineGen {
            phase: Phase::new(freq),
            amplitude: amplitude.into(),
            out: ::std::marker::PhantomData,
        }
    }

    /// Reset the phase to zero.
    pub fn reset(&mut self) { self.phase.phase = 0.0; }
}

impl<T: NumCast> Iterator for SineGen<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        // The sample never exceeds the amplitude, so the cast can't fail.
        num::cast(self.phase.advance().cos() * self.amplitude)
    }
}

/// Yields a complex exponential `(cos, sin)` with the given peak amplitude.
pub struct ComplexSineGen<T> {
    phase: Phase,
    amplitude: f64,
    out: ::std::marker::PhantomData<T>,
}

impl<T: NumCast + Into<f64>> ComplexSineGen<T> {
    /// Construct a new `ComplexSineGen` with the given normalized frequency and amplitude.
    pub fn new(freq: f64, amplitude: T) -> ComplexSineGen<T> {
        ComplexSineGen {
            phase: Phase::new(freq),
            amplitude: amplitude.into(),
            out: ::std::marker::PhantomData,
        }
    }

    /// Reset the phase to zero.
    pub fn reset(&mut self) { self.phase.phase = 0.0; }

    /// Get the phase step in radians per sample.
    pub fn rad_per_sample(&self) -> f64 { self.phase.step }
}

impl<T: NumCast> Iterator for ComplexSineGen<T> {
    type Item = Complex<T>;

    fn next(&mut self) -> Option<Complex<T>> {
        let phase = self.phase.advance();

        Some(Complex::new(num::cast(phase.cos() * self.amplitude)?,
                          num::cast(phase.sin() * self.amplitude)?))
    }
}

/// Build a table of `len` cosine values covering one quadrant, `round(amplitude *
/// cos(k * 2π / (4 * len)))`.
pub fn cos_table<T: NumCast + Zero + Into<f64> + Copy>(amplitude: T, len: usize) -> Vec<T> {
    let amplitude: f64 = amplitude.into();

    (0..len).map(|k| {
        let x = (amplitude * (k as f64 * 2.0 * PI / (4 * len) as f64).cos()).round();
        num::cast(x).unwrap_or_else(T::zero)
    }).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cos_table() {
        assert_eq!(cos_table(1000i16, 4), vec![1000, 924, 707, 383]);
        assert_eq!(cos_table(1000i32, 1), vec![1000]);
        assert_eq!(cos_table(100i8, 2), vec![100, 71]);
    }

    #[test]
    fn test_sine() {
        // Quarter turn per sample.
        let samples = SineGen::new(0.5, 1000i32).take(5).collect::<Vec<i32>>();

        assert_eq!(samples.len(), 5);
        assert_eq!(samples[1], -1000);
        assert_eq!(samples[3], 1000);
        assert!(samples[0].abs() <= 1);
        assert!(samples[2].abs() <= 1);
    }

    #[test]
    fn test_reset() {
        let mut g = SineGen::new(0.1, 1.0f64);
        let first = g.next().unwrap();

        g.next();
        g.next();
        g.reset();

        assert_eq!(g.next().unwrap(), first);
    }

    #[test]
    fn test_complex() {
        let mut g = ComplexSineGen::new(1.0 / 3.0, 1.0f64);
        assert!((g.rad_per_sample() - PI / 3.0).abs() < 1e-12);

        // Six steps make one full turn, and the phase stays in range.
        for _ in 0..60 {
            let z = g.next().unwrap();
            assert!((z.norm() - 1.0).abs() < 1e-9);
            assert!(g.phase.phase >= 0.0 && g.phase.phase < 2.0 * PI);
        }

        let z = ComplexSineGen::new(0.5, 8192i16).next().unwrap();
        assert_eq!(z, Complex::new(0, 8192));
    }

    #[test]
    fn test_negative() {
        let mut g = ComplexSineGen::new(-0.5, 100.0f32);
        let z = g.next().unwrap();

        assert!(z.re.abs() < 1e-3);
        assert!((z.im + 100.0).abs() < 1e-3);
        assert!(g.phase.phase > 0.0);
    }
}
