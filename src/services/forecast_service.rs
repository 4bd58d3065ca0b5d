//! Forecast service.
//!
//! Joins a candle series with the forecast engine and shapes the response
//! payload. Stateless apart from the default preset.

use crate::error::{AppError, Result};
use crate::services::signals;
use crate::types::{ForecastResponse, MarketSeries, OhlcPoint, PeriodPreset};
use tracing::{info, warn};

/// Fit an overlay to `len` entries: left-pad with `None`, or drop the
/// oldest entries when it is too long.
pub fn align_overlay(mut overlay: Vec<Option<f64>>, len: usize) -> Vec<Option<f64>> {
    if overlay.len() < len {
        let mut padded = vec![None; len - overlay.len()];
        padded.append(&mut overlay);
        return padded;
    }
    overlay.split_off(overlay.len() - len)
}

/// Runs forecasts over candle series.
#[derive(Debug, Clone, Copy)]
pub struct ForecastService {
    default_preset: PeriodPreset,
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::new(PeriodPreset::fallback())
    }
}

impl ForecastService {
    pub fn new(default_preset: PeriodPreset) -> Self {
        Self { default_preset }
    }

    pub fn default_preset(&self) -> PeriodPreset {
        self.default_preset
    }

    /// Resolve an optional preset code, warning on unknown codes.
    pub fn resolve_preset(&self, code: Option<&str>) -> PeriodPreset {
        match code {
            None => self.default_preset,
            Some(code) => {
                if !PeriodPreset::is_known(code) {
                    warn!(
                        "Unknown period '{}', using {} of {} candles",
                        code,
                        PeriodPreset::fallback().lookback,
                        PeriodPreset::fallback().interval
                    );
                }
                PeriodPreset::resolve(code)
            }
        }
    }

    /// Forecast a candle series and build the response payload.
    ///
    /// Candles must be chronological. Errors only on an empty series.
    pub fn forecast_series(
        &self,
        symbol: &str,
        candles: &[OhlcPoint],
        preset: PeriodPreset,
    ) -> Result<ForecastResponse> {
        info!(
            "Forecast request: {} period={} ({} of {} candles)",
            symbol, preset.class, preset.lookback, preset.interval
        );

        if candles.is_empty() {
            return Err(AppError::NoData(format!("no candles for {}", symbol)));
        }

        let series = MarketSeries::from_candles(candles);
        info!("Loaded {} candles for {}", series.len(), symbol);

        let volumes = series.volume.as_slice();
        let mut result = signals::forecast(&series.close, Some(volumes), preset.class);
        result.overlay = align_overlay(result.overlay, series.len());

        let response = ForecastResponse::new(series, result);
        if let (Some(first), Some(last)) = (response.close.first(), response.close.last()) {
            info!(
                "Forecast for {}: {} (confidence {}%), price {:.2} -> {:.2} ({:+.2}%)",
                symbol,
                response.trend,
                response.confidence,
                first,
                last,
                response.change_pct
            );
        }

        Ok(response)
    }
}
