//! Trend forecasting.
//!
//! Technical indicator calculations, per-period calibration profiles,
//! weighted trend scoring and confidence calibration.

pub mod forecast;
pub mod indicators;
pub mod profile;
pub mod scoring;

pub use forecast::{analyze, forecast, Analysis, MIN_PRICES, OVERLAY_WARMUP, TREND_WINDOW};
pub use profile::{ForecastProfile, IndicatorPeriods, PeriodCap, ScoreWeights};
pub use scoring::{calibrate_confidence, classify, IndicatorReadings};
