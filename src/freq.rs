//! Frequency estimation and unit conversion.

use std::f64::consts::PI;

use num::Complex;

/// Estimate the frequency of a complex tone in radians per sample from the average phase
/// advance between samples `lag` apart.
///
/// Pairs don't overlap: the samples at `0, lag, 2lag, ...` are each compared with the
/// sample `lag` later. Returns `None` if the block holds no pair. The result is only
/// unambiguous while the phase advance over `lag` samples stays within `±π`.
pub fn estimate_freq<T: Into<f64> + Copy>(samples: &[Complex<T>], lag: usize)
    -> Option<f64>
{
    assert!(lag > 0);

    let (sum, count) = (0..samples.len())
        .step_by(lag)
        .take_while(|&i| i + lag < samples.len())
        .fold((0.0, 0), |(sum, count), i| {
            let (a, b) = (samples[i], samples[i + lag]);
            let (ar, ai): (f64, f64) = (a.re.into(), a.im.into());
            let (br, bi): (f64, f64) = (b.re.into(), b.im.into());

            // Angle of b * conj(a).
            let phase = (ar * bi - ai * br).atan2(ar * br + ai * bi);

            (sum + phase, count + 1)
        });

    if count == 0 {
        None
    } else {
        Some(sum / (lag * count) as f64)
    }
}

/// Convert a frequency in radians per sample to Hz at the given sample rate.
pub fn to_freq_hz(rad_per_sample: f64, sample_rate: f64) -> f64 {
    rad_per_sample / 2.0 / PI * sample_rate
}

/// Convert a frequency in Hz to radians per sample at the given sample rate.
pub fn to_rad_per_sample(freq_hz: f64, sample_rate: f64) -> f64 {
    2.0 * PI * freq_hz / sample_rate
}
