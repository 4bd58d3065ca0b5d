//! Relative Strength Index (RSI) indicator.

/// RSI (Relative Strength Index) indicator.
///
/// Simple (unsmoothed) variant: mean gain over mean loss across the last
/// `period` price changes. Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculate RSI from closes.
    ///
    /// The window shrinks to the available changes on short input.
    /// Returns 100 when the average loss is exactly zero, including a flat
    /// series. Returns None with fewer than two prices.
    pub fn calculate(&self, prices: &[f64]) -> Option<f64> {
        if prices.len() < 2 {
            return None;
        }

        let period = self.period.clamp(1, prices.len() - 1);
        let window = &prices[prices.len() - period - 1..];

        let (gains, losses) = window
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .fold((0.0, 0.0), |(gains, losses), change| {
                if change > 0.0 {
                    (gains + change, losses)
                } else {
                    (gains, losses - change)
                }
            });

        let avg_gain = gains / period as f64;
        let avg_loss = losses / period as f64;

        if avg_loss == 0.0 {
            return Some(100.0);
        }

        let rs = avg_gain / avg_loss;
        Some(100.0 - (100.0 / (1.0 + rs)))
    }
}
