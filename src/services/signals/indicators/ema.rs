//! Exponential Moving Average (EMA) indicator.

/// EMA (Exponential Moving Average) indicator.
///
/// Seeded with the first value instead of an SMA, so the output has exactly
/// one entry per input value and can be drawn as an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Smoothing factor, `2 / (period + 1)`.
    pub fn multiplier(&self) -> f64 {
        2.0 / (self.period as f64 + 1.0)
    }

    /// Calculate the full EMA series.
    pub fn series(&self, values: &[f64]) -> Vec<f64> {
        let multiplier = self.multiplier();
        let mut ema = Vec::with_capacity(values.len());

        let Some((&first, rest)) = values.split_first() else {
            return ema;
        };

        let mut current = first;
        ema.push(current);
        for &value in rest {
            current = value * multiplier + current * (1.0 - multiplier);
            ema.push(current);
        }

        ema
    }
}
