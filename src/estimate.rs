use crate::error::{FilterError, Result};
use std::f64::consts::LN_2;

/// Returns (`bit_count`, `probe_count`) so that `item_count` insertions yield a false positive
/// rate of roughly `fp_rate`.
///
/// No validation is done. `item_count = 0` or an `fp_rate` outside `(0, 1)` go straight through
/// the formulas; non-finite intermediates saturate on the cast (infinity becomes `u64::MAX`,
/// NaN becomes 0). Use [`try_estimate`] to reject such input.
pub fn estimate(item_count: u64, fp_rate: f64) -> (u64, u64) {
    let n = item_count as f64;
    let m = (-n * fp_rate.ln() / LN_2.powi(2)).ceil() as u64;
    let k = (LN_2 * m as f64 / n).ceil() as u64;

    (m, k)
}

/// Same as [`estimate`], but rejects an empty item count and rates outside `(0, 1)`.
pub fn try_estimate(item_count: u64, fp_rate: f64) -> Result<(u64, u64)> {
    if item_count == 0 {
        return Err(FilterError::InvalidItemCount(item_count));
    }
    // Also catches NaN.
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(FilterError::FalsePositiveRateOutOfBounds(fp_rate));
    }

    Ok(estimate(item_count, fp_rate))
}
