//! Momentum and aggregate price change, both in percent.

/// Percentage change over the last `lookback` closes.
///
/// The reference close is the first of the trailing `lookback` closes, with
/// `lookback` capped at `len - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Momentum {
    lookback: usize,
}

impl Default for Momentum {
    fn default() -> Self {
        Self { lookback: 10 }
    }
}

impl Momentum {
    /// Returns None with fewer than two prices or a zero reference price.
    pub fn calculate(&self, prices: &[f64]) -> Option<f64> {
        if prices.len() < 2 {
            return None;
        }

        let lookback = self.lookback.clamp(1, prices.len() - 1);
        let reference = prices[prices.len() - lookback];
        let current = *prices.last()?;

        if reference == 0.0 {
            return None;
        }

        Some((current / reference - 1.0) * 100.0)
    }
}

/// Percentage change from `first` to `last`. Zero if `first` is not positive.
pub fn price_change_pct(first: f64, last: f64) -> f64 {
    if first > 0.0 {
        (last / first - 1.0) * 100.0
    } else {
        0.0
    }
}
