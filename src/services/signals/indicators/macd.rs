//! MACD (Moving Average Convergence Divergence) line.

use super::Ema;

/// MACD line: fast EMA minus slow EMA at the latest close.
///
/// No signal line or histogram; only the line feeds the trend score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
}

/// Both EMA series and the MACD line at the last index.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput {
    pub fast_ema: Vec<f64>,
    pub slow_ema: Vec<f64>,
    pub line: f64,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
        }
    }

    pub fn calculate(&self, prices: &[f64]) -> MacdOutput {
        let fast_ema = Ema::new(self.fast_period).series(prices);
        let slow_ema = Ema::new(self.slow_period).series(prices);
        let line = Self::line(&fast_ema, &slow_ema);

        MacdOutput {
            fast_ema,
            slow_ema,
            line,
        }
    }

    /// Difference of the last values. Zero if the series are misaligned.
    pub fn line(fast_ema: &[f64], slow_ema: &[f64]) -> f64 {
        if fast_ema.len() != slow_ema.len() {
            return 0.0;
        }
        match (fast_ema.last(), slow_ema.last()) {
            (Some(fast), Some(slow)) => fast - slow,
            _ => 0.0,
        }
    }
}
