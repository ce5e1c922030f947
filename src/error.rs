//! Standard errors that may occur when working with the toolkit.

use std;
use std::fmt;

/// Caller-supplied decoder parameters that don't fit together.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParamError {
    /// The info block is shorter than the traceback can realign.
    ShortBlock(usize),
    /// The traceback depth is shorter than the encoder memory.
    ShallowTraceback(usize),
    /// The punctured code length doesn't match the info block length.
    CodeLength { expected: usize, got: usize },
    /// The number of soft values doesn't match the punctured code length.
    SoftLength { expected: usize, got: usize },
    /// A normalization threshold of zero was requested.
    NormalizationThreshold,
}

/// Toolkit runtime errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DspError {
    /// Decoder parameters violate the block/traceback/code length contract.
    InvalidParameters(ParamError),
    /// A single FIFO write must be smaller than the FIFO.
    FifoWriteTooLarge { len: usize, capacity: usize },
    /// The requested time range isn't (or is no longer) held in the FIFO.
    FifoRangeUnavailable,
    /// An output buffer doesn't have the length the operation produces.
    BufferSize { expected: usize, got: usize },
    /// A filter was constructed without coefficients.
    EmptyCoefficients,
    /// The number of filter coefficients isn't a multiple of the rate change.
    CoefficientLayout { len: usize, ratio: usize },
}

impl From<ParamError> for DspError {
    fn from(e: ParamError) -> DspError { DspError::InvalidParameters(e) }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::ParamError::*;

        match *self {
            ShortBlock(len) => write!(f, "info block of {} bits is too short", len),
            ShallowTraceback(depth) =>
                write!(f, "traceback depth {} is shorter than the encoder memory", depth),
            CodeLength { expected, got } =>
                write!(f, "code length {} doesn't match the expected {}", got, expected),
            SoftLength { expected, got } =>
                write!(f, "got {} soft values, expected {}", got, expected),
            NormalizationThreshold => write!(f, "normalization threshold must be nonzero"),
        }
    }
}

impl fmt::Display for DspError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::DspError::*;

        match *self {
            InvalidParameters(e) => write!(f, "invalid parameters: {}", e),
            FifoWriteTooLarge { len, capacity } =>
                write!(f, "write of {} values into a FIFO of {}", len, capacity),
            FifoRangeUnavailable => write!(f, "time range not held in FIFO"),
            BufferSize { expected, got } =>
                write!(f, "buffer holds {} values, expected {}", got, expected),
            EmptyCoefficients => write!(f, "filter has no coefficients"),
            CoefficientLayout { len, ratio } =>
                write!(f, "{} coefficients isn't a multiple of ratio {}", len, ratio),
        }
    }
}

impl std::error::Error for DspError {}

/// Standard result using `DspError`.
pub type Result<T> = std::result::Result<T, DspError>;
