//! Code bits carried on the branches of the 64-state trellis.

use consts::{BUTTERFLIES, LABEL_COUNT};

/// Label on the upper branch (from `s` to `2s`) of each butterfly `s`.
///
/// The branch from `s` to `2s + 1` and the branch from `s | 32` to `2s` carry the
/// complement of this label, and the branch from `s | 32` to `2s + 1` carries the label
/// itself.
pub const LABELS: [u8; BUTTERFLIES] = [
    0, 1, 3, 2, 3, 2, 0, 1, 0, 1, 3, 2, 3, 2, 0, 1,
    2, 3, 1, 0, 1, 0, 2, 3, 2, 3, 1, 0, 1, 0, 2, 3,
];

/// The two code bits on a trellis branch, stored as `c2 << 1 | c1` where `c1` is
/// transmitted first.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Label(u8);

impl Label {
    /// Construct a new `Label` from the two given bits in the LSB position.
    pub fn new(bits: u8) -> Label {
        assert!((bits as usize) < LABEL_COUNT);
        Label(bits)
    }

    /// Get the label of the upper branch in the given butterfly.
    pub fn upper(butterfly: usize) -> Label { Label(LABELS[butterfly]) }

    /// Get the wrapped label, which is guaranteed to have only 2 LSBs.
    pub fn bits(&self) -> u8 { self.0 }
    /// Get the code bit transmitted first.
    pub fn first(&self) -> u8 { self.0 & 1 }
    /// Get the code bit transmitted second.
    pub fn second(&self) -> u8 { self.0 >> 1 }

    /// Get the label with both code bits inverted.
    pub fn complement(&self) -> Label { Label(self.0 ^ 0b11) }

    /// Get the label as an index into a table of per-label values.
    pub fn idx(&self) -> usize { self.0 as usize }
}
