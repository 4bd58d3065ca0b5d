//! Technical indicator implementations.
//!
//! All indicators work on plain close-price (or volume) buffers and never
//! allocate beyond the series they return.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod momentum;
pub mod regression;
pub mod rsi;
pub mod volatility;
pub mod volume;

pub use bollinger::{BandSnapshot, BollingerBands};
pub use ema::Ema;
pub use macd::{Macd, MacdOutput};
pub use momentum::{price_change_pct, Momentum};
pub use regression::linear_slope;
pub use rsi::Rsi;
pub use volatility::return_volatility;
pub use volume::VolumeTrend;

/// Arithmetic mean. Zero for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around `mean`.
pub fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance: f64 =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Trailing window of at most `len` values.
pub fn tail(values: &[f64], len: usize) -> &[f64] {
    &values[values.len().saturating_sub(len)..]
}
