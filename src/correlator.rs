//! Fixed-pattern complex correlator for detecting a known sequence.

use num::Complex;

/// Correlates 16-bit complex samples against a fixed pattern whose points are spaced
/// `stride` samples apart.
pub struct FixedPatternCorrelator {
    /// Pattern points, oldest first.
    pattern: Vec<Complex<i32>>,
    /// Spacing between pattern points in input samples.
    stride: usize,
    /// Last `pattern.len() * stride` samples.
    history: Vec<Complex<i32>>,
    /// Position of the most recent sample.
    idx: usize,
    /// Smallest correlation power reported as a peak.
    threshold: i128,
}

impl FixedPatternCorrelator {
    /// Construct a new `FixedPatternCorrelator` with the given pattern, stride, and peak
    /// power threshold.
    pub fn new(pattern: Vec<Complex<i32>>, stride: usize, threshold: i128)
        -> FixedPatternCorrelator
    {
        assert!(!pattern.is_empty());
        assert!(stride > 0);

        let len = pattern.len() * stride;

        FixedPatternCorrelator {
            pattern: pattern,
            stride: stride,
            history: vec![Complex::new(0, 0); len],
            idx: len - 1,
            threshold: threshold,
        }
    }

    /// Add a sample and calculate the correlation ending at it.
    pub fn feed(&mut self, sample: Complex<i16>) -> Complex<i64> {
        let len = self.history.len();

        self.idx = (self.idx + 1) % len;
        self.history[self.idx] = Complex::new(sample.re as i32, sample.im as i32);

        // The newest sample lines up with the last pattern point.
        self.pattern.iter().rev().enumerate().fold(Complex::new(0, 0), |sum, (j, p)| {
            let h = self.history[(self.idx + len - j * self.stride) % len];

            sum + Complex::new(h.re as i64, h.im as i64) *
                  Complex::new(p.re as i64, -(p.im as i64))
        })
    }

    /// Check if the given correlation reaches the peak threshold.
    pub fn is_peak(&self, corr: Complex<i64>) -> bool {
        power(corr) >= self.threshold
    }

    /// Feed a block of samples, returning the index of the first sample at which a
    /// correlation peak occurs. Samples after the peak aren't consumed.
    pub fn process(&mut self, input: &[Complex<i16>]) -> Option<usize> {
        for (i, &s) in input.iter().enumerate() {
            let corr = self.feed(s);

            if self.is_peak(corr) {
                debug!(index = i, power = power(corr) as f64, "correlation peak");
                return Some(i);
            }
        }

        None
    }

    /// Clear the sample history.
    pub fn reset(&mut self) {
        for h in self.history.iter_mut() {
            *h = Complex::new(0, 0);
        }

        self.idx = self.history.len() - 1;
    }
}

/// Squared magnitude, without overflow.
fn power(z: Complex<i64>) -> i128 {
    let (re, im) = (z.re as i128, z.im as i128);
    re * re + im * im
}
