/// Number of memory cells in the encoder state.
pub const STATE_BITS: usize = 6;
/// Number of states in the trellis.
pub const STATES: usize = 1 << STATE_BITS;
/// Number of butterflies in each trellis step. Each butterfly joins the states `s` and
/// `s | BUTTERFLIES` to the states `2s` and `2s + 1`.
pub const BUTTERFLIES: usize = STATES / 2;
/// Number of mother code bits per info bit.
pub const MOTHER_RATE: usize = 2;
/// Number of distinct branch labels (pairs of code bits).
pub const LABEL_COUNT: usize = 1 << MOTHER_RATE;
/// Period of the puncturing pattern over the mother code bits.
pub const PUNCTURE_PERIOD: usize = 3;
/// Position in each puncturing period that isn't transmitted.
pub const PUNCTURE_ERASED: usize = 2;
/// Largest branch metric magnitude (6-bit signed).
pub const BRANCH_METRIC_MAX: i16 = 31;
/// Offset subtracted from the path metrics by the 9-bit normalization scheme.
pub const NORMALIZATION_THRESHOLD: u32 = 256;
/// Smallest supported traceback depth.
pub const MIN_TRACEBACK: usize = STATE_BITS;
/// Smallest info block the traceback can realign.
pub const MIN_INFO_LEN: usize = 2;
