//! Return volatility.

use super::{mean, std_dev};

/// Population standard deviation of period-over-period returns.
///
/// Zero with fewer than two values. None if a return would divide by zero.
pub fn return_volatility(values: &[f64]) -> Option<f64> {
    let mut returns = Vec::with_capacity(values.len().saturating_sub(1));
    for pair in values.windows(2) {
        if pair[0] == 0.0 {
            return None;
        }
        returns.push(pair[1] / pair[0] - 1.0);
    }

    if returns.is_empty() {
        return Some(0.0);
    }

    Some(std_dev(&returns, mean(&returns)))
}
