//! De-puncturing of the soft code stream.
//!
//! The transmitter drops every third mother code bit (pattern `110`), so each pair of
//! received soft values is followed by one erased position. Erasures are filled with a
//! zero-confidence soft value, which biases no branch.

use collect_slice::CollectSlice;

use consts::{PUNCTURE_ERASED, PUNCTURE_PERIOD};
use error::{ParamError, Result};

/// Check if the mother code bit at the given position is transmitted.
pub fn transmitted(pos: usize) -> bool {
    pos % PUNCTURE_PERIOD != PUNCTURE_ERASED
}

/// Calculate the number of transmitted code bits out of the given number of mother code
/// bits.
pub fn punctured_len(mother_len: usize) -> usize {
    mother_len - mother_len / PUNCTURE_PERIOD
}

/// Expand the given punctured soft values into `mother_len` soft values, with zero at
/// every erased position.
pub fn depuncture(soft: &[i8], mother_len: usize) -> Result<Vec<i8>> {
    let expected = punctured_len(mother_len);

    if soft.len() != expected {
        return Err(ParamError::SoftLength {
            expected: expected,
            got: soft.len(),
        }.into());
    }

    let mut buf = vec![0; mother_len];
    Depunctured::new(soft.iter().cloned(), mother_len).collect_slice_checked(&mut buf[..]);

    Ok(buf)
}

/// Yields a de-punctured soft stream from a source of received soft values.
pub struct Depunctured<T> {
    /// Source of received soft values.
    src: T,
    /// Current position in the mother code stream.
    pos: usize,
    /// Number of mother code bits to yield.
    len: usize,
}

impl<T: Iterator<Item = i8>> Depunctured<T> {
    /// Construct a new `Depunctured` yielding `len` soft values from the given source.
    pub fn new(src: T, len: usize) -> Depunctured<T> {
        Depunctured {
            src: src,
            pos: 0,
            len: len,
        }
    }
}

impl<T: Iterator<Item = i8>> Iterator for Depunctured<T> {
    type Item = i8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.len {
            return None;
        }

        let pos = self.pos;
        self.pos += 1;

        if transmitted(pos) {
            self.src.next()
        } else {
            Some(0)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use error::DspError;

    #[test]
    fn test_punctured_len() {
        assert_eq!(punctured_len(0), 0);
        assert_eq!(punctured_len(2), 2);
        assert_eq!(punctured_len(3), 2);
        assert_eq!(punctured_len(4), 3);
        assert_eq!(punctured_len(6), 4);
        assert_eq!(punctured_len(40), 27);
        assert_eq!(punctured_len(128), 86);
        assert_eq!(punctured_len(400), 267);
    }

    #[test]
    fn test_depuncture() {
        let soft = [10, -20, 30, -40, 50, -60];
        let d = depuncture(&soft, 9).unwrap();

        assert_eq!(d, vec![10, -20, 0, 30, -40, 0, 50, -60, 0]);
    }

    #[test]
    fn test_shape() {
        for pairs in 1..40 {
            let code_len = pairs * 2;
            let soft = (0..code_len).map(|i| (i % 100) as i8 + 1).collect::<Vec<i8>>();
            let d = depuncture(&soft, code_len * 3 / 2).unwrap();

            assert_eq!(d.len(), code_len * 3 / 2);

            for (i, triple) in d.chunks(3).enumerate() {
                assert_eq!(triple[0], soft[2 * i]);
                assert_eq!(triple[1], soft[2 * i + 1]);
                assert_eq!(triple[2], 0);
            }
        }
    }

    #[test]
    fn test_partial_period() {
        // 20 info bits give 40 mother bits, ending one position into a period.
        let soft = (1..28).map(|x| x as i8).collect::<Vec<i8>>();
        let d = depuncture(&soft, 40).unwrap();

        assert_eq!(d.len(), 40);
        assert_eq!(d[38], 0);
        assert_eq!(d[39], 27);
        assert_eq!(d.iter().filter(|&&x| x == 0).count(), 13);
    }

    #[test]
    fn test_wrong_len() {
        assert_eq!(depuncture(&[1, 2, 3], 6), Err(DspError::InvalidParameters(
            ParamError::SoftLength { expected: 4, got: 3 }
        )));
    }
}
