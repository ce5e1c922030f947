//! Fixed-point signal processing for a software modem chain, built around a decoder for
//! the punctured, tail-biting, 64-state convolutional code.

extern crate collect_slice;
extern crate num;

#[macro_use]
extern crate tracing;

#[cfg(feature = "ser")]
extern crate serde;
#[cfg(feature = "ser")]
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate rand_chacha;

pub mod buffer;
pub mod coding;
pub mod complex;
pub mod consts;
pub mod correlator;
pub mod error;
pub mod fir;
pub mod freq;
pub mod generator;
pub mod mixer;
pub mod modulator;
pub mod util;

pub use coding::viterbi::{decode, DecodedBlock, Decoder, DecoderParams};
pub use coding::trellis::Normalization;
pub use error::{DspError, ParamError, Result};
