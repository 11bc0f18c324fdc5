//! Rate-derived figures shown alongside the rate input.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Flat hourly marketing fee applied to the standard new-client rate.
pub const MARKETING_FEE: Decimal = dec!(5);

/// Estimated jobs per week at a given hourly rate.
pub fn estimated_weekly_jobs(rate: Decimal) -> u32 {
    if rate <= dec!(18) {
        6
    } else if rate <= dec!(22) {
        4
    } else if rate <= dec!(28) {
        3
    } else {
        2
    }
}

/// Standard new-client rate: the base rate less the marketing fee.
///
/// Shown in regions without a custom-rate option.
pub fn standard_new_client_rate(rate: Decimal) -> Decimal {
    rate - MARKETING_FEE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_buckets() {
        assert_eq!(estimated_weekly_jobs(dec!(15)), 6);
        assert_eq!(estimated_weekly_jobs(dec!(18)), 6);
        assert_eq!(estimated_weekly_jobs(dec!(18.01)), 4);
        assert_eq!(estimated_weekly_jobs(dec!(22)), 4);
        assert_eq!(estimated_weekly_jobs(dec!(25)), 3);
        assert_eq!(estimated_weekly_jobs(dec!(28)), 3);
        assert_eq!(estimated_weekly_jobs(dec!(29)), 2);
        assert_eq!(estimated_weekly_jobs(dec!(150)), 2);
    }

    #[test]
    fn new_client_rate_subtracts_fee() {
        assert_eq!(standard_new_client_rate(dec!(25)), dec!(20));
        assert_eq!(standard_new_client_rate(dec!(18)), dec!(13));
    }
}
