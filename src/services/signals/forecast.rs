//! Forecast engine.
//!
//! Turns a close-price series (plus optional volumes) into a trend label, a
//! calibrated confidence and a smoothed overlay. Pure computation: nothing is
//! cached and every call works on its own buffers.

use super::indicators::{
    linear_slope, price_change_pct, return_volatility, tail, BollingerBands, Macd, Momentum, Rsi,
    VolumeTrend,
};
use super::profile::IndicatorPeriods;
use super::scoring::{calibrate_confidence, classify, IndicatorReadings};
use crate::error::ForecastError;
use crate::types::{ForecastResult, PeriodClass, TrendLabel};
use tracing::{debug, warn};

/// Fewer prices than this yield the neutral result.
pub const MIN_PRICES: usize = 5;
/// Overlay entries before the warm-up window fills are absent.
pub const OVERLAY_WARMUP: usize = 9;
/// Trailing window for slope and volatility.
pub const TREND_WINDOW: usize = 14;

/// Every intermediate value of a successful forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub period_class: PeriodClass,
    pub periods: IndicatorPeriods,
    pub fast_ema: Vec<f64>,
    pub slow_ema: Vec<f64>,
    /// Raw regression slope in price units per step.
    pub slope: f64,
    /// MACD line in price units.
    pub macd_line: f64,
    pub readings: IndicatorReadings,
    pub score: f64,
    pub trend: TrendLabel,
    pub confidence: f64,
}

impl Analysis {
    /// Fast EMA with the warm-up entries blanked out.
    pub fn overlay(&self) -> Vec<Option<f64>> {
        let warmup = OVERLAY_WARMUP.min(self.fast_ema.len()).saturating_sub(1);
        self.fast_ema
            .iter()
            .enumerate()
            .map(|(i, &value)| if i < warmup { None } else { Some(value) })
            .collect()
    }

    pub fn into_result(self) -> ForecastResult {
        ForecastResult {
            overlay: self.overlay(),
            trend: self.trend,
            confidence: self.confidence,
        }
    }
}

/// Forecast the short-horizon trend of `prices`.
///
/// Never fails: short input and internal faults both collapse to
/// [`ForecastResult::neutral`]. The overlay always has `prices.len()` entries.
pub fn forecast(
    prices: &[f64],
    volumes: Option<&[f64]>,
    period_class: PeriodClass,
) -> ForecastResult {
    match analyze(prices, volumes, period_class) {
        Ok(analysis) => analysis.into_result(),
        Err(ForecastError::InsufficientData { len }) => {
            debug!("Not enough prices to forecast ({} < {})", len, MIN_PRICES);
            ForecastResult::neutral(prices.len())
        }
        Err(e) => {
            warn!("Forecast failed for {} prices ({}): {}", prices.len(), period_class, e);
            ForecastResult::neutral(prices.len())
        }
    }
}

/// Fallible core of [`forecast`], exposing every indicator.
pub fn analyze(
    prices: &[f64],
    volumes: Option<&[f64]>,
    period_class: PeriodClass,
) -> Result<Analysis, ForecastError> {
    let len = prices.len();
    if len < MIN_PRICES {
        return Err(ForecastError::InsufficientData { len });
    }
    if prices.iter().any(|p| !p.is_finite()) {
        return Err(ForecastError::NonFinite { what: "price" });
    }
    if volumes.is_some_and(|v| v.iter().any(|x| !x.is_finite())) {
        return Err(ForecastError::NonFinite { what: "volume" });
    }

    let profile = period_class.profile();
    let periods = profile.periods(len);
    let first = prices[0];
    let last = prices[len - 1];
    if last == 0.0 {
        return Err(ForecastError::DivisionByZero { what: "last price" });
    }

    let macd = Macd::new(periods.fast_ema, periods.slow_ema).calculate(prices);
    let rsi = Rsi::new(periods.rsi)
        .calculate(prices)
        .ok_or(ForecastError::InsufficientData { len })?;
    let bands = BollingerBands::default()
        .calculate(prices)
        .ok_or(ForecastError::InsufficientData { len })?;

    let trend_window = tail(prices, TREND_WINDOW);
    let slope = linear_slope(trend_window);
    let volatility = return_volatility(trend_window).ok_or(ForecastError::DivisionByZero {
        what: "period return",
    })?;

    let volume_trend = volumes
        .map(|v| VolumeTrend::default().calculate(v))
        .unwrap_or(0.0);
    let momentum = Momentum::default()
        .calculate(prices)
        .ok_or(ForecastError::DivisionByZero {
            what: "momentum reference",
        })?;

    let readings = IndicatorReadings {
        slope_pct: if last > 0.0 { slope / last * 100.0 } else { 0.0 },
        rsi,
        price_change: price_change_pct(first, last),
        macd_pct: macd.line / last * 100.0,
        bollinger_position: bands.position,
        momentum,
        volume_trend,
        volatility,
    };

    let score = profile.weights.score(&readings);
    if !score.is_finite() {
        return Err(ForecastError::NonFinite { what: "trend score" });
    }

    let trend = classify(score, profile.trend_threshold);
    let confidence = calibrate_confidence(profile, trend, score, &readings);

    debug!(
        "Forecast {} over {} prices: periods={:?} rsi={:.2} %b={:.3} slope%={:.4} vol={:.5} \
         momentum={:.2} volume_trend={:.2} score={:.3} -> {} ({}%)",
        period_class,
        len,
        periods,
        readings.rsi,
        readings.bollinger_position,
        readings.slope_pct,
        readings.volatility,
        readings.momentum,
        readings.volume_trend,
        score,
        trend,
        confidence
    );

    Ok(Analysis {
        period_class,
        periods,
        fast_ema: macd.fast_ema,
        slow_ema: macd.slow_ema,
        slope,
        macd_line: macd.line,
        readings,
        score,
        trend,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rising(count: usize) -> Vec<f64> {
        (0..count).map(|i| 100.0 + i as f64 * 0.5).collect()
    }

    #[test]
    fn test_short_input_is_neutral() {
        let result = forecast(&[3.0, 2.0, 1.0], None, PeriodClass::MultiDay);
        assert_eq!(result, ForecastResult::neutral(3));
        assert!(forecast(&[], None, PeriodClass::Intraday).overlay.is_empty());
    }

    #[test]
    fn test_analyze_reports_insufficient_data() {
        let err = analyze(&[1.0, 2.0, 3.0, 4.0], None, PeriodClass::Monthly).unwrap_err();
        assert!(matches!(err, ForecastError::InsufficientData { len: 4 }));
    }

    #[test]
    fn test_non_finite_price_is_fault() {
        let mut prices = rising(20);
        prices[7] = f64::NAN;
        let err = analyze(&prices, None, PeriodClass::MultiDay).unwrap_err();
        assert!(matches!(err, ForecastError::NonFinite { what: "price" }));

        let result = forecast(&prices, None, PeriodClass::MultiDay);
        assert_eq!(result, ForecastResult::neutral(20));
    }

    #[test]
    fn test_non_finite_volume_is_fault() {
        let prices = rising(20);
        let mut volumes = vec![1_000.0; 20];
        volumes[3] = f64::INFINITY;
        let err = analyze(&prices, Some(volumes.as_slice()), PeriodClass::MultiDay).unwrap_err();
        assert!(matches!(err, ForecastError::NonFinite { what: "volume" }));
    }

    #[test]
    fn test_zero_price_in_trend_window_is_fault() {
        let mut prices = rising(20);
        prices[15] = 0.0;
        let err = analyze(&prices, None, PeriodClass::Intraday).unwrap_err();
        assert!(matches!(err, ForecastError::DivisionByZero { .. }));
        assert_eq!(forecast(&prices, None, PeriodClass::Intraday).trend, TrendLabel::Unknown);
    }

    #[test]
    fn test_zero_last_price_is_fault() {
        let mut prices = rising(10);
        prices[9] = 0.0;
        let err = analyze(&prices, None, PeriodClass::Monthly).unwrap_err();
        assert!(matches!(err, ForecastError::DivisionByZero { what: "last price" }));
    }

    #[test]
    fn test_overlay_warmup() {
        let analysis = analyze(&rising(30), None, PeriodClass::MultiDay).unwrap();
        let overlay = analysis.overlay();
        assert_eq!(overlay.len(), 30);
        assert!(overlay[..8].iter().all(Option::is_none));
        for (i, value) in overlay.iter().enumerate().skip(8) {
            assert_eq!(*value, Some(analysis.fast_ema[i]));
        }
    }

    #[test]
    fn test_overlay_warmup_shrinks_on_short_series() {
        // window min(9, 6) = 6 -> first 5 absent
        let analysis = analyze(&rising(6), None, PeriodClass::Intraday).unwrap();
        let overlay = analysis.overlay();
        assert_eq!(overlay.len(), 6);
        assert!(overlay[..5].iter().all(Option::is_none));
        assert!(overlay[5].is_some());
    }

    #[test]
    fn test_analysis_exposes_resolved_periods() {
        let analysis = analyze(&rising(21), None, PeriodClass::Monthly).unwrap();
        assert_eq!(analysis.periods.fast_ema, 10);
        assert_eq!(analysis.periods.slow_ema, 21);
        assert_eq!(analysis.periods.rsi, 20);
        assert_eq!(analysis.fast_ema.len(), 21);
        assert_eq!(analysis.slow_ema.len(), 21);
    }

    #[test]
    fn test_falling_series_is_down() {
        let prices: Vec<f64> = (0..60).map(|i| 200.0 - i as f64 * 0.5).collect();
        for class in PeriodClass::ALL {
            let analysis = analyze(&prices, None, class).unwrap();
            assert_eq!(analysis.trend, TrendLabel::Down, "{}", class);
            assert!(analysis.readings.rsi.abs() < 1e-12);
        }
    }
}
