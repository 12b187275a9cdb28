//! Minimal viable bag and power calculation

use super::aggregate::CubeSet;
use crate::log_error;
use crate::logging::codes;

/// Compute the power of the minimal bag that makes every subset possible
///
/// The minimal bag holds the per-color maximum across subsets. The power is
/// the product of those maxima, widened to u64. Products beyond u64::MAX
/// clamp, matching the aggregation stage. A game with no subsets has power 0.
pub fn calculate_power(subsets: &[CubeSet]) -> u64 {
    let mut max_red: u32 = 0;
    let mut max_green: u32 = 0;
    let mut max_blue: u32 = 0;

    for subset in subsets {
        max_red = max_red.max(subset.red);
        max_green = max_green.max(subset.green);
        max_blue = max_blue.max(subset.blue);
    }

    let product = (max_red as u64)
        .checked_mul(max_green as u64)
        .and_then(|p| p.checked_mul(max_blue as u64));

    match product {
        Some(power) => power,
        None => {
            log_error!(
                codes::evaluation::AMOUNT_OVERFLOW,
                "Bag power overflowed, clamping",
                "max_red" => max_red,
                "max_green" => max_green,
                "max_blue" => max_blue
            );
            u64::MAX
        }
    }
}
