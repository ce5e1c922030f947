//! FIR filters at a single rate, with decimation, and with polyphase interpolation.

use num::Num;

use error::{DspError, Result};
use util::CircularIndex;

/// A FIR filter for convolving with a series of samples.
pub struct FIRFilter<'a, T: 'a> {
    /// The filter coefficients for multiplying with the input signal, represents bi.
    coefs: &'a [T],
    /// A ring buffer of samples in the signal, represents x[i].
    history: Vec<T>,
    /// The index of the most-recently added sample, represents n in x[n].
    idx: CircularIndex,
}

impl<'a, T: Num + Copy> FIRFilter<'a, T> {
    /// Construct an order-N filter with the given N+1 coefficients.
    pub fn new(coefs: &'a [T]) -> Result<FIRFilter<'a, T>> {
        if coefs.is_empty() {
            return Err(DspError::EmptyCoefficients);
        }

        Ok(FIRFilter {
            coefs: coefs,
            history: vec![T::zero(); coefs.len()],
            idx: CircularIndex::new(coefs.len()),
        })
    }

    /// Perform the convolution with the current history of samples. Calculates
    /// y[n] = c0*x[n] + c1*x[n-1] + cN*x[n-N].
    pub fn calc(&self) -> T {
        // Copy the current index so we can move backwards.
        let mut cur = self.idx;

        self.coefs.iter().fold(T::zero(), |s, &coef| {
            let term = coef * self.history[cur.get()];
            cur.retreat();
            s + term
        })
    }

    /// Add a sample to the current history without calculating an output.
    pub fn push(&mut self, sample: T) {
        self.idx.advance();
        self.history[self.idx.get()] = sample;
    }

    /// Add a sample to the current history and calculate the convolution.
    pub fn feed(&mut self, sample: T) -> T {
        self.push(sample);
        self.calc()
    }

    /// Filter a block of samples into the given output buffer, which must have the same
    /// length.
    pub fn process(&mut self, input: &[T], out: &mut [T]) -> Result<()> {
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

    /// Clear the sample history.
    pub fn reset(&mut self) {
        for x in self.history.iter_mut() {
            *x = T::zero();
        }
    }
}

/// Filters and keeps one output out of every `M` input samples.
///
/// Outputs are taken at input samples `0, M, 2M, ...` counted across calls.
pub struct DecimatingFIR<'a, T: 'a> {
    fir: FIRFilter<'a, T>,
    /// Decimation ratio `M`.
    ratio: usize,
    /// Input samples until the next output.
    phase: CircularIndex,
}

impl<'a, T: Num + Copy> DecimatingFIR<'a, T> {
    /// Construct a new `DecimatingFIR` with the given coefficients and decimation ratio.
    pub fn new(coefs: &'a [T], ratio: usize) -> Result<DecimatingFIR<'a, T>> {
        assert!(ratio > 0);

        Ok(DecimatingFIR {
            fir: FIRFilter::new(coefs)?,
            ratio: ratio,
            phase: CircularIndex::new(ratio),
        })
    }

    /// Get the decimation ratio.
    pub fn ratio(&self) -> usize { self.ratio }

    /// Add a sample, returning an output if one is due.
    pub fn feed(&mut self, sample: T) -> Option<T> {
        self.fir.push(sample);

        let out = if self.phase.get() == 0 {
            Some(self.fir.calc())
        } else {
            None
        };

        self.phase.advance();

        out
    }

    /// Filter a block of samples, returning the outputs due within it.
    pub fn process(&mut self, input: &[T]) -> Vec<T> {
        input.iter().filter_map(|&s| self.feed(s)).collect()
    }

    /// Clear the sample history and restart the output phase.
    pub fn reset(&mut self) {
        self.fir.reset();
        self.phase = CircularIndex::new(self.ratio);
    }
}

/// Raises the sample rate by `L` with a polyphase filter.
///
/// Each input sample produces `L` outputs; output `i` of an input uses coefficients
/// `i, i + L, i + 2L, ...`, which is the same as filtering the input with `L - 1` zeros
/// stuffed after every sample.
pub struct InterpolatingFIR<T> {
    coefs: Vec<T>,
    /// Interpolation ratio `L`.
    ratio: usize,
    /// Ring buffer of the last `coefs.len() / L` input samples.
    history: Vec<T>,
    /// Position of the most recent input sample.
    idx: CircularIndex,
    /// Number of coefficients up to the last nonzero one.
    len: usize,
}

impl<T: Num + Copy> InterpolatingFIR<T> {
    /// Construct a new `InterpolatingFIR` with the given coefficients, whose count must be a
    /// nonzero multiple of the interpolation ratio.
    pub fn new(coefs: Vec<T>, ratio: usize) -> Result<InterpolatingFIR<T>> {
        assert!(ratio > 0);

        if coefs.is_empty() {
            return Err(DspError::EmptyCoefficients);
        }

        if coefs.len() % ratio != 0 {
            return Err(DspError::CoefficientLayout {
                len: coefs.len(),
                ratio: ratio,
            });
        }

        let taps = coefs.len() / ratio;
        let len = coefs.iter().rposition(|c| !c.is_zero()).map_or(0, |p| p + 1);

        Ok(InterpolatingFIR {
            coefs: coefs,
            ratio: ratio,
            history: vec![T::zero(); taps],
            idx: CircularIndex::new(taps),
            len: len,
        })
    }

    /// Get the interpolation ratio.
    pub fn ratio(&self) -> usize { self.ratio }

    /// Add a sample and write the `L` resulting outputs into the given buffer.
    fn step(&mut self, sample: T, out: &mut [T]) {
        self.idx.advance();
        self.history[self.idx.get()] = sample;

        for (offset, o) in out.iter_mut().enumerate() {
            let mut cur = self.idx;

            *o = self.coefs[offset..].iter().step_by(self.ratio).fold(T::zero(), |s, &c| {
                let term = c * self.history[cur.get()];
                cur.retreat();
                s + term
            });
        }
    }

    /// Filter a block of samples into the given output buffer, which must hold `L` times
    /// as many samples.
    pub fn process(&mut self, input: &[T], out: &mut [T]) -> Result<()> {
        if out.len() != input.len() * self.ratio {
            return Err(DspError::BufferSize {
                expected: input.len() * self.ratio,
                got: out.len(),
            });
        }

        for (&s, chunk) in input.iter().zip(out.chunks_mut(self.ratio)) {
            self.step(s, chunk);
        }

        Ok(())
    }

    /// Feed zeros until the filter response to the past input has been emitted, returning
    /// the trailing outputs.
    pub fn flush(&mut self) -> Vec<T> {
        let mut out = vec![T::zero(); self.len / self.ratio * self.ratio];

        for chunk in out.chunks_mut(self.ratio) {
            self.step(T::zero(), chunk);
        }

        out
    }

    /// Clear the sample history.
    pub fn reset(&mut self) {
        for x in self.history.iter_mut() {
            *x = T::zero();
        }
    }
}
