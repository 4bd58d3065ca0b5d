//! Bollinger Bands indicator.

use super::{mean, std_dev, tail};

/// %B above this presses the upper band.
pub const STRETCHED_HIGH: f64 = 0.9;
/// %B below this presses the lower band.
pub const STRETCHED_LOW: f64 = 0.1;

/// Bollinger Bands indicator.
///
/// Consists of:
/// - Middle band: SMA over the trailing `period` closes (all closes if fewer)
/// - Upper band: SMA + 2 * StdDev
/// - Lower band: SMA - 2 * StdDev
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

/// Band values at the latest close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSnapshot {
    pub middle: f64,
    pub upper: f64,
    pub lower: f64,
    pub std_dev: f64,
    /// %B: 0 at the lower band, 1 at the upper band, 0.5 on a flat window.
    pub position: f64,
}

impl BollingerBands {
    /// Calculate the bands and %B of the last close.
    pub fn calculate(&self, prices: &[f64]) -> Option<BandSnapshot> {
        let current_price = *prices.last()?;
        let window = tail(prices, self.period);

        let middle = mean(window);
        let std_dev = std_dev(window, middle);

        let upper = middle + self.std_dev_multiplier * std_dev;
        let lower = middle - self.std_dev_multiplier * std_dev;

        // %B = (Price - Lower) / (Upper - Lower)
        let position = if std_dev > 0.0 {
            (current_price - lower) / (upper - lower)
        } else {
            0.5
        };

        Some(BandSnapshot {
            middle,
            upper,
            lower,
            std_dev,
            position,
        })
    }
}
