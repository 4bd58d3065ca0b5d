//! Per-period calibration data.
//!
//! Every constant here is empirical calibration. Adding a period class means
//! adding a profile, nothing else.

use crate::types::{PeriodClass, TrendLabel};

/// Cap on an indicator period: `min(cap, len / divisor)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodCap {
    pub cap: usize,
    pub divisor: usize,
}

impl PeriodCap {
    pub const fn new(cap: usize, divisor: usize) -> Self {
        Self { cap, divisor }
    }

    pub fn resolve(&self, len: usize) -> usize {
        self.cap.min(len / self.divisor.max(1))
    }
}

/// Indicator periods resolved against a series length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorPeriods {
    pub fast_ema: usize,
    pub slow_ema: usize,
    pub rsi: usize,
}

/// Weights of the trend score terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Regression slope as percent of the last close.
    pub slope_pct: f64,
    /// RSI distance from 50.
    pub rsi: f64,
    /// First-to-last change in percent.
    pub price_change: f64,
    /// MACD line as percent of the last close.
    pub macd_pct: f64,
    /// Bollinger %B distance from 0.5.
    pub bollinger: f64,
    pub momentum: f64,
    pub volume_trend: f64,
}

/// Complete parameter set for one period class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastProfile {
    pub fast_ema: PeriodCap,
    pub slow_ema: PeriodCap,
    /// RSI period cap; the period never exceeds `len - 1`.
    pub rsi_cap: usize,
    /// Score magnitude needed for a directional label.
    pub trend_threshold: f64,
    /// Starting confidence for up/down.
    pub directional_base: f64,
    /// Starting confidence for sideways.
    pub sideways_base: f64,
    pub volatility_multiplier: f64,
    pub confidence_floor: f64,
    pub confidence_ceiling: f64,
    pub weights: ScoreWeights,
}

pub const INTRADAY: ForecastProfile = ForecastProfile {
    fast_ema: PeriodCap::new(6, 3),
    slow_ema: PeriodCap::new(12, 2),
    rsi_cap: 7,
    trend_threshold: 1.2,
    directional_base: 55.0,
    sideways_base: 42.0,
    volatility_multiplier: 60.0,
    confidence_floor: 25.0,
    confidence_ceiling: 78.0,
    weights: ScoreWeights {
        slope_pct: 20.0,
        rsi: 0.6,
        price_change: 0.15,
        macd_pct: 10.0,
        bollinger: 35.0,
        momentum: 0.25,
        volume_trend: 0.15,
    },
};

pub const MULTI_DAY: ForecastProfile = ForecastProfile {
    fast_ema: PeriodCap::new(12, 2),
    slow_ema: PeriodCap::new(26, 1),
    rsi_cap: 14,
    trend_threshold: 1.5,
    directional_base: 60.0,
    sideways_base: 45.0,
    volatility_multiplier: 50.0,
    confidence_floor: 30.0,
    confidence_ceiling: 80.0,
    weights: ScoreWeights {
        slope_pct: 25.0,
        rsi: 0.4,
        price_change: 0.2,
        macd_pct: 15.0,
        bollinger: 40.0,
        momentum: 0.15,
        volume_trend: 0.125,
    },
};

pub const MONTHLY: ForecastProfile = ForecastProfile {
    fast_ema: PeriodCap::new(20, 2),
    slow_ema: PeriodCap::new(50, 1),
    rsi_cap: 21,
    trend_threshold: 2.0,
    directional_base: 60.0,
    sideways_base: 45.0,
    volatility_multiplier: 50.0,
    confidence_floor: 35.0,
    confidence_ceiling: 75.0,
    weights: ScoreWeights {
        slope_pct: 35.0,
        rsi: 0.25,
        price_change: 0.3,
        macd_pct: 20.0,
        bollinger: 30.0,
        momentum: 0.1,
        volume_trend: 0.1,
    },
};

impl PeriodClass {
    /// Calibration profile for this class.
    pub fn profile(&self) -> &'static ForecastProfile {
        match self {
            PeriodClass::Intraday => &INTRADAY,
            PeriodClass::MultiDay => &MULTI_DAY,
            PeriodClass::Monthly => &MONTHLY,
        }
    }
}

impl ForecastProfile {
    /// Resolve indicator periods for a series of `len` prices (`len >= 1`).
    pub fn periods(&self, len: usize) -> IndicatorPeriods {
        IndicatorPeriods {
            fast_ema: self.fast_ema.resolve(len),
            slow_ema: self.slow_ema.resolve(len),
            rsi: self.rsi_cap.min(len.saturating_sub(1)),
        }
    }

    /// Starting confidence for a label.
    pub fn base_confidence(&self, trend: TrendLabel) -> f64 {
        if trend.is_directional() {
            self.directional_base
        } else {
            self.sideways_base
        }
    }

    /// Clamp into this profile's confidence band.
    pub fn clamp_confidence(&self, confidence: f64) -> f64 {
        confidence.clamp(self.confidence_floor, self.confidence_ceiling)
    }
}
