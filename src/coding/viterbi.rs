//! Decoder for one block of the punctured, tail-biting code.
//!
//! A block of `info_len` bits is encoded at rate 1/2 into `2 * info_len` mother code bits,
//! of which every third is punctured away, leaving `code_len` transmitted soft values.
//! The decoder needs no side information about the encoder start state: the recursion
//! wraps around the block until the metrics settle, and the traceback realigns the
//! recovered bits to their place in the block.

use coding::metrics::BranchMetrics;
use coding::puncture;
use coding::traceback;
use coding::trellis::{Normalization, Recursion};
use consts::{MIN_INFO_LEN, MIN_TRACEBACK, MOTHER_RATE, STATE_BITS};
use error::{ParamError, Result};

/// Geometry and options for decoding blocks.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize, Deserialize))]
pub struct DecoderParams {
    /// Number of info bits in each block.
    pub info_len: usize,
    /// Number of transmitted soft values in each block.
    pub code_len: usize,
    /// Traceback depth `L`.
    pub traceback: usize,
    /// Path metric normalization.
    #[cfg_attr(feature = "ser", serde(default))]
    pub normalization: Normalization,
}

impl DecoderParams {
    /// Construct a new `DecoderParams` for blocks of `info_len` bits with the given
    /// traceback depth, deriving the code length.
    pub fn new(info_len: usize, traceback: usize) -> DecoderParams {
        DecoderParams::with_code_len(info_len,
                                     puncture::punctured_len(info_len * MOTHER_RATE),
                                     traceback)
    }

    /// Construct a new `DecoderParams` with an explicit code length, which is checked
    /// against the block length on validation.
    pub fn with_code_len(info_len: usize, code_len: usize, traceback: usize) -> DecoderParams {
        DecoderParams {
            info_len: info_len,
            code_len: code_len,
            traceback: traceback,
            normalization: Normalization::default(),
        }
    }

    /// Use the given path metric normalization.
    pub fn normalization(self, normalization: Normalization) -> DecoderParams {
        DecoderParams { normalization: normalization, ..self }
    }

    /// Number of mother code bits in each block.
    pub fn mother_len(&self) -> usize { self.info_len * MOTHER_RATE }

    /// Number of recursion steps run for each block.
    pub fn num_steps(&self) -> usize { self.info_len + 2 * self.traceback }

    /// Number of survivor rows retained for traceback.
    pub fn trace_len(&self) -> usize { self.info_len + self.traceback - STATE_BITS }

    /// Check that the parameters describe a decodable block.
    pub fn validate(&self) -> Result<()> {
        if self.info_len < MIN_INFO_LEN {
            return Err(ParamError::ShortBlock(self.info_len).into());
        }

        if self.traceback < MIN_TRACEBACK {
            return Err(ParamError::ShallowTraceback(self.traceback).into());
        }

        let expected = puncture::punctured_len(self.mother_len());

        if self.code_len != expected {
            return Err(ParamError::CodeLength {
                expected: expected,
                got: self.code_len,
            }.into());
        }

        if self.normalization == Normalization::Threshold(0) {
            return Err(ParamError::NormalizationThreshold.into());
        }

        Ok(())
    }
}

/// Result of decoding one block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedBlock {
    /// Recovered info bits, each 0 or 1.
    pub bits: Vec<u8>,
    /// Trellis state the traceback started from.
    pub state: usize,
    /// Final path metric of that state.
    pub metric: u32,
}

/// Decodes blocks with fixed parameters. Holds no state between blocks.
#[derive(Copy, Clone, Debug)]
pub struct Decoder {
    params: DecoderParams,
}

impl Decoder {
    /// Construct a new `Decoder` with the given parameters, failing if they're invalid.
    pub fn new(params: DecoderParams) -> Result<Decoder> {
        params.validate()?;

        Ok(Decoder {
            params: params,
        })
    }

    /// Get the decoder parameters.
    pub fn params(&self) -> &DecoderParams { &self.params }

    /// Decode the given soft values into info bits.
    pub fn decode(&self, soft: &[i8]) -> Result<Vec<u8>> {
        self.decode_block(soft).map(|b| b.bits)
    }

    /// Decode the given soft values, also reporting the traceback start state and its
    /// metric.
    pub fn decode_block(&self, soft: &[i8]) -> Result<DecodedBlock> {
        let p = &self.params;

        debug!(info_len = p.info_len, code_len = p.code_len, traceback = p.traceback,
               "decoding block");

        let depunctured = puncture::depuncture(soft, p.mother_len())?;
        let branch = BranchMetrics::from_soft(&depunctured);

        let trellis = Recursion::new(&branch, p.traceback, p.normalization).run();
        let (state, metric) = trellis.best_state();

        let bits = traceback::traceback(trellis.survivors(), state, p.traceback,
                                        p.info_len);

        debug!(state = state, metric = metric, "decoded block");

        Ok(DecodedBlock {
            bits: bits,
            state: state,
            metric: metric,
        })
    }
}

/// Decode one block of `code_len` soft values into `info_len` info bits using traceback
/// depth `traceback`.
pub fn decode(info_len: usize, code_len: usize, soft: &[i8], traceback: usize)
    -> Result<Vec<u8>>
{
    let params = DecoderParams::with_code_len(info_len, code_len, traceback);
    Decoder::new(params)?.decode(soft)
}

#[cfg(test)]
mod test {
    use super::*;
    use coding::encoder;
    use consts::NORMALIZATION_THRESHOLD;
    use error::DspError;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| ((i * 7 + 3) % 5 < 2) as u8).collect()
    }

    fn random_bits(rng: &mut ChaCha8Rng, len: usize) -> Vec<u8> {
        (0..len).map(|_| rng.gen_range(0..2)).collect()
    }

    #[test]
    fn test_shareable() {
        fn check<T: Send + Sync>() {}
        check::<Decoder>();
    }

    #[test]
    fn test_params() {
        let p = DecoderParams::new(20, 8);

        assert_eq!(p.code_len, 27);
        assert_eq!(p.mother_len(), 40);
        assert_eq!(p.num_steps(), 36);
        assert_eq!(p.trace_len(), 22);
        assert_eq!(p.normalization, Normalization::Disabled);
        assert_eq!(p.validate(), Ok(()));

        assert_eq!(DecoderParams::new(64, 8).code_len, 86);
        assert_eq!(DecoderParams::new(200, 8).code_len, 267);
        assert_eq!(DecoderParams::new(48, 8).code_len, 64);

        let p = p.normalization(Normalization::Threshold(256));
        assert_eq!(p.normalization, Normalization::Threshold(256));
        assert_eq!(p.info_len, 20);
    }

    #[test]
    fn test_invalid_params() {
        assert_eq!(DecoderParams::new(1, 8).validate(),
                   Err(DspError::InvalidParameters(ParamError::ShortBlock(1))));
        assert_eq!(DecoderParams::new(20, 5).validate(),
                   Err(DspError::InvalidParameters(ParamError::ShallowTraceback(5))));
        assert_eq!(DecoderParams::with_code_len(20, 26, 8).validate(),
                   Err(DspError::InvalidParameters(ParamError::CodeLength {
                       expected: 27,
                       got: 26,
                   })));
        assert_eq!(DecoderParams::new(20, 8).normalization(Normalization::Threshold(0))
                       .validate(),
                   Err(DspError::InvalidParameters(ParamError::NormalizationThreshold)));

        assert!(Decoder::new(DecoderParams::new(0, 8)).is_err());
    }

    #[test]
    fn test_soft_len() {
        let d = Decoder::new(DecoderParams::new(20, 8)).unwrap();

        assert_eq!(d.decode(&[0; 26]),
                   Err(DspError::InvalidParameters(ParamError::SoftLength {
                       expected: 27,
                       got: 26,
                   })));

        assert_eq!(decode(20, 27, &[0; 28], 8),
                   Err(DspError::InvalidParameters(ParamError::SoftLength {
                       expected: 27,
                       got: 28,
                   })));
    }

    #[test]
    fn test_zero_block() {
        let d = Decoder::new(DecoderParams::new(20, 8)).unwrap();
        let b = d.decode_block(&[-100; 27]).unwrap();

        assert_eq!(b.bits, vec![0; 20]);
        assert_eq!(b.state, 0);
        assert_eq!(b.metric, 978);
    }

    #[test]
    fn test_one_block() {
        let d = Decoder::new(DecoderParams::new(20, 8)).unwrap();
        let b = d.decode_block(&[100; 27]).unwrap();

        assert_eq!(b.bits, vec![1; 20]);
        assert_eq!(b.state, 63);
        assert_eq!(b.metric, 978);
    }

    #[test]
    fn test_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5d1);

        for &info_len in &[20, 21, 48, 64] {
            for depth in 6..15 {
                let d = Decoder::new(DecoderParams::new(info_len, depth)).unwrap();

                let mut blocks = vec![vec![0; info_len], vec![1; info_len],
                                      pattern(info_len)];

                for _ in 0..4 {
                    blocks.push(random_bits(&mut rng, info_len));
                }

                for bits in blocks {
                    let soft = encoder::encode_soft(&bits, 100);
                    assert_eq!(soft.len(), d.params().code_len);
                    assert_eq!(d.decode(&soft).unwrap(), bits);
                }
            }
        }
    }

    #[test]
    fn test_long_block() {
        let mut rng = ChaCha8Rng::seed_from_u64(200);

        for depth in 6..15 {
            let bits = random_bits(&mut rng, 200);
            let soft = encoder::encode_soft(&bits, 100);

            assert_eq!(decode(200, 267, &soft, depth).unwrap(), bits);
        }
    }

    #[test]
    fn test_deep_traceback() {
        // Traceback deeper than the block wraps the output position more than once.
        for &(info_len, depth) in &[(4, 10), (6, 16), (8, 24)] {
            for bits in vec![vec![0; info_len], vec![1; info_len]] {
                let soft = encoder::encode_soft(&bits, 100);
                let d = Decoder::new(DecoderParams::new(info_len, depth)).unwrap();

                assert_eq!(d.decode(&soft).unwrap(), bits);
            }
        }
    }

    #[test]
    fn test_sign_errors() {
        for &info_len in &[64, 200] {
            for &depth in &[8, 12, 16, 24] {
                let bits = pattern(info_len);
                let mut soft = encoder::encode_soft(&bits, 100);

                for i in (5..soft.len()).step_by(40) {
                    soft[i] = -soft[i];
                }

                assert_eq!(decode(info_len, soft.len(), &soft, depth).unwrap(), bits);
            }
        }
    }

    #[test]
    fn test_erasures() {
        for &info_len in &[64, 200] {
            for &depth in &[12, 16, 24] {
                let bits = pattern(info_len);
                let mut soft = encoder::encode_soft(&bits, 100);

                for i in (0..soft.len()).step_by(11) {
                    soft[i] = 0;
                }

                assert_eq!(decode(info_len, soft.len(), &soft, depth).unwrap(), bits);
            }
        }
    }

    #[test]
    fn test_normalization() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        for &info_len in &[64, 200] {
            let bits = random_bits(&mut rng, info_len);
            let soft = encoder::encode_soft(&bits, 100);

            let params = DecoderParams::new(info_len, 10);
            let norm = Normalization::Threshold(NORMALIZATION_THRESHOLD);

            let plain = Decoder::new(params).unwrap();
            let norm = Decoder::new(params.normalization(norm)).unwrap();

            let a = plain.decode_block(&soft).unwrap();
            let b = norm.decode_block(&soft).unwrap();

            assert_eq!(a.bits, bits);
            assert_eq!(b.bits, bits);
            assert_eq!(a.state, b.state);
            assert!(b.metric < 512);
            assert_eq!((a.metric - b.metric) % NORMALIZATION_THRESHOLD, 0);
        }
    }

    #[test]
    fn test_deterministic() {
        let bits = pattern(48);
        let mut soft = encoder::encode_soft(&bits, 60);
        soft[3] = 17;
        soft[10] = -5;

        let d = Decoder::new(DecoderParams::new(48, 12)).unwrap();
        let first = d.decode_block(&soft).unwrap();

        for _ in 0..3 {
            assert_eq!(d.decode_block(&soft).unwrap(), first);
        }

        assert_eq!(decode(48, 64, &soft, 12).unwrap(), first.bits);
    }

    #[test]
    fn test_output_bits() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let soft = (0..86).map(|_| rng.gen::<i8>()).collect::<Vec<i8>>();

        let bits = decode(64, 86, &soft, 12).unwrap();

        assert_eq!(bits.len(), 64);
        assert!(bits.iter().all(|&b| b <= 1));
    }
}
