//! Decoding for the punctured, tail-biting, rate-1/2 convolutional code.
//!
//! Soft code bits are de-punctured ([`puncture`]), reduced to branch metrics
//! ([`metrics`]), run through the circular trellis ([`trellis`]), and traced back into
//! info bits ([`traceback`]). [`viterbi`] ties the stages together for one block.

pub mod labels;
pub mod metrics;
pub mod puncture;
pub mod traceback;
pub mod trellis;
pub mod viterbi;

#[cfg(test)]
mod encoder;
