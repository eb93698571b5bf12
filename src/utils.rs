use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::constants::{DEFAULT_SLIPPAGE_NUMERATOR, DEFAULT_SLIPPAGE_SCALE};

/// Default minimum output for an estimated swap: 99.5% of `estimate`, rounded down
pub fn default_min_amount_out(estimate: u64) -> u64 {
    let ratio = Decimal::new(DEFAULT_SLIPPAGE_NUMERATOR, DEFAULT_SLIPPAGE_SCALE);

    // never above the estimate, so this always fits back into a u64
    (Decimal::from(estimate) * ratio)
        .floor()
        .to_u64()
        .unwrap_or(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_min_amount_out() {
        assert_eq!(default_min_amount_out(1_000), 995);
        assert_eq!(default_min_amount_out(1_001), 995);
        assert_eq!(default_min_amount_out(200), 199);
        assert_eq!(default_min_amount_out(1), 0);
        assert_eq!(default_min_amount_out(0), 0);
    }

    #[test]
    fn test_default_min_amount_out_matches_integer_floor() {
        for estimate in [7, 999, 123_456_789, u32::MAX as u64, u64::MAX / 1_000, u64::MAX] {
            let expected = (estimate as u128 * 995 / 1_000) as u64;
            assert_eq!(default_min_amount_out(estimate), expected);
            assert!(default_min_amount_out(estimate) <= estimate);
        }
    }
}
