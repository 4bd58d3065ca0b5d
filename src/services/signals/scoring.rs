//! Trend score, classification and confidence calibration.

use super::indicators::bollinger::{STRETCHED_HIGH, STRETCHED_LOW};
use super::profile::{ForecastProfile, ScoreWeights};
use crate::types::TrendLabel;

/// Penalty when the label fights an extreme RSI or band position.
const EXHAUSTION_PENALTY: f64 = 12.0;
/// Cap on the bonus earned by score magnitude.
const MAX_SCORE_BONUS: f64 = 12.0;
/// Cap on the volatility penalty.
const MAX_VOLATILITY_PENALTY: f64 = 25.0;
/// Volume trend (percent) needed to confirm the score.
const VOLUME_CONFIRMATION_PCT: f64 = 20.0;
const VOLUME_CONFIRMATION_BONUS: f64 = 3.0;
const RSI_CONFLICT_PENALTY: f64 = 8.0;
/// Penalty when price sits near the middle band.
const MID_BAND_PENALTY: f64 = 5.0;
const MID_BAND_DISTANCE: f64 = 0.2;

const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_OVERSOLD: f64 = 30.0;

/// Indicator values feeding the score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorReadings {
    pub slope_pct: f64,
    pub rsi: f64,
    pub price_change: f64,
    pub macd_pct: f64,
    pub bollinger_position: f64,
    pub momentum: f64,
    pub volume_trend: f64,
    /// Standard deviation of returns over the trend window.
    pub volatility: f64,
}

impl IndicatorReadings {
    pub fn is_overbought(&self) -> bool {
        self.rsi > RSI_OVERBOUGHT || self.bollinger_position > STRETCHED_HIGH
    }

    pub fn is_oversold(&self) -> bool {
        self.rsi < RSI_OVERSOLD || self.bollinger_position < STRETCHED_LOW
    }
}

impl ScoreWeights {
    /// Weighted sum of the readings. Positive is bullish.
    pub fn score(&self, r: &IndicatorReadings) -> f64 {
        r.slope_pct * self.slope_pct
            + (r.rsi - 50.0) * self.rsi
            + r.price_change * self.price_change
            + r.macd_pct * self.macd_pct
            + (r.bollinger_position - 0.5) * self.bollinger
            + r.momentum * self.momentum
            + r.volume_trend * self.volume_trend
    }
}

/// Label a score against a symmetric threshold.
pub fn classify(score: f64, threshold: f64) -> TrendLabel {
    if score > threshold {
        TrendLabel::Up
    } else if score < -threshold {
        TrendLabel::Down
    } else {
        TrendLabel::Sideways
    }
}

/// Calibrated confidence, clamped to the profile band and rounded to 0.1.
///
/// Adjustments apply in a fixed order; clamping happens once at the end.
pub fn calibrate_confidence(
    profile: &ForecastProfile,
    trend: TrendLabel,
    score: f64,
    readings: &IndicatorReadings,
) -> f64 {
    let mut confidence = profile.base_confidence(trend);

    match trend {
        TrendLabel::Up if readings.is_overbought() => confidence -= EXHAUSTION_PENALTY,
        TrendLabel::Down if readings.is_oversold() => confidence -= EXHAUSTION_PENALTY,
        _ => {}
    }

    confidence += (score.abs() * 2.0).min(MAX_SCORE_BONUS);
    confidence -= (readings.volatility * profile.volatility_multiplier).min(MAX_VOLATILITY_PENALTY);

    if readings.volume_trend.abs() > VOLUME_CONFIRMATION_PCT
        && sign(readings.volume_trend) == sign(score)
    {
        confidence += VOLUME_CONFIRMATION_BONUS;
    }

    confidence -= conflict_penalty(score, readings);

    round_tenth(profile.clamp_confidence(confidence))
}

fn conflict_penalty(score: f64, readings: &IndicatorReadings) -> f64 {
    let mut penalty = 0.0;
    if (readings.rsi > RSI_OVERBOUGHT && score > 0.0)
        || (readings.rsi < RSI_OVERSOLD && score < 0.0)
    {
        penalty += RSI_CONFLICT_PENALTY;
    }
    if (readings.bollinger_position - 0.5).abs() < MID_BAND_DISTANCE {
        penalty += MID_BAND_PENALTY;
    }
    penalty
}

/// -1, 0 or 1. Unlike `f64::signum`, zero maps to zero.
fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Round to one decimal, ties to even.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
