//! Branch metrics and the add-compare-select step of the Viterbi recursion.

use std::cmp;

use coding::labels::Label;
use consts::{BRANCH_METRIC_MAX, LABEL_COUNT};

/// Calculate the metric of the given branch label against a pair of soft values.
///
/// The label bits are mapped to ±1 and correlated with the 8-bit soft values (9-bit
/// result), then two bits are rounded off (7 bits) and the result is saturated to 6-bit
/// signed range. A positive soft value favours a code bit of 1.
pub fn branch_metric(s1: i8, s2: i8, label: Label) -> i8 {
    let antipodal = |bit: u8| if bit == 1 { 1 } else { -1 };

    let raw = antipodal(label.first()) * s1 as i16 + antipodal(label.second()) * s2 as i16;
    let rounded = (raw + 2) >> 2;

    cmp::max(-BRANCH_METRIC_MAX, cmp::min(BRANCH_METRIC_MAX, rounded)) as i8
}

/// Branch metrics for every label at every time step of a block.
pub struct BranchMetrics {
    rows: Vec<[i8; LABEL_COUNT]>,
}

impl BranchMetrics {
    /// Compute the branch metrics for the given de-punctured soft stream, which holds two
    /// soft values per time step.
    ///
    /// Only the metrics of labels `11` and `01` are computed; the metrics of their
    /// complements `00` and `10` are the negations.
    pub fn from_soft(soft: &[i8]) -> BranchMetrics {
        debug_assert!(soft.len() % 2 == 0);

        BranchMetrics {
            rows: soft.chunks(2).map(|pair| {
                let both = branch_metric(pair[0], pair[1], Label::new(0b11));
                let first = branch_metric(pair[0], pair[1], Label::new(0b01));

                [-both, first, -first, both]
            }).collect(),
        }
    }

    /// Get the metric of the given label at the given time step.
    pub fn get(&self, step: usize, label: Label) -> i8 {
        self.rows[step][label.idx()]
    }

    /// Number of time steps covered.
    pub fn len(&self) -> usize { self.rows.len() }
}

/// Surviving path selected by an add-compare-select.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Survivor {
    /// Metric of the surviving path.
    pub metric: u32,
    /// Which predecessor survived: 0 for the first, 1 for the second.
    pub bit: u8,
}

/// Extend the two given predecessor paths by their branch metrics and select the larger.
/// Ties go to the second path.
///
/// Within the trellis the two branch metrics are negations of each other, so the winner
/// is at least the mean of the two predecessor metrics and never negative.
pub fn acs(pm0: u32, pm1: u32, bm0: i8, bm1: i8) -> Survivor {
    let cm0 = pm0 as i64 + bm0 as i64;
    let cm1 = pm1 as i64 + bm1 as i64;

    let (metric, bit) = if cm0 > cm1 {
        (cm0, 0)
    } else {
        (cm1, 1)
    };

    Survivor {
        metric: cmp::max(metric, 0) as u32,
        bit: bit,
    }
}
