//! Tail-biting reference encoder for generating decoder test vectors.

use coding::labels::Label;
use coding::puncture;
use consts::{BUTTERFLIES, STATES, STATE_BITS};

/// Get the label on the branch leaving the given state with the given input bit.
pub fn branch(state: usize, input: u8) -> Label {
    let upper = Label::upper(state % BUTTERFLIES);

    if (state >= BUTTERFLIES) != (input == 1) {
        upper.complement()
    } else {
        upper
    }
}

/// Get the state a block must start in to end in the same state: its last six bits, with
/// the newest in the LSB.
pub fn initial_state(bits: &[u8]) -> usize {
    let n = bits.len();

    (0..STATE_BITS).fold(0, |s, i| {
        s | (bits[(n * STATE_BITS + n - 1 - i) % n] as usize) << i
    })
}

/// Encode the given block into mother code bits, with the first code bit of each step
/// before the second.
pub fn encode(bits: &[u8]) -> Vec<u8> {
    let mut state = initial_state(bits);
    let mut code = Vec::with_capacity(bits.len() * 2);

    for &b in bits {
        let label = branch(state, b);

        code.push(label.first());
        code.push(label.second());

        state = (state << 1 & (STATES - 1)) | b as usize;
    }

    code
}

/// Puncture the given mother code bits into soft values of the given magnitude, positive
/// for 1 and negative for 0.
pub fn soft(code: &[u8], magnitude: i8) -> Vec<i8> {
    code.iter().enumerate()
        .filter(|&(pos, _)| puncture::transmitted(pos))
        .map(|(_, &b)| if b == 1 { magnitude } else { -magnitude })
        .collect()
}

/// Encode, puncture, and map the given block to soft values.
pub fn encode_soft(bits: &[u8], magnitude: i8) -> Vec<i8> {
    soft(&encode(bits), magnitude)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_branch() {
        assert_eq!(branch(0, 0).bits(), 0b00);
        assert_eq!(branch(0, 1).bits(), 0b11);
        assert_eq!(branch(32, 0).bits(), 0b11);
        assert_eq!(branch(32, 1).bits(), 0b00);
        assert_eq!(branch(63, 1).bits(), 0b11);
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(initial_state(&[0; 12]), 0);
        assert_eq!(initial_state(&[1; 12]), 63);
        assert_eq!(initial_state(&[0, 0, 0, 0, 0, 0, 0, 1]), 1);
        assert_eq!(initial_state(&[1, 0, 0, 0, 0, 0, 0, 0]), 0);
        assert_eq!(initial_state(&[0, 0, 1, 0, 0, 0, 0, 0]), 32);
        // Short blocks repeat.
        assert_eq!(initial_state(&[1, 0]), 0b101010);
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(&[0; 8]), vec![0; 16]);
        assert_eq!(encode(&[1; 8]), vec![1; 16]);
    }

    #[test]
    fn test_soft() {
        assert_eq!(soft(&[1, 0, 1, 0, 1, 1], 100), vec![100, -100, -100, 100]);
        assert_eq!(encode_soft(&[0; 20], 100).len(), 27);
    }
}
