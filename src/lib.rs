//! Trendcast - short-horizon trend forecasting from price series
//!
//! The core is [`services::signals::forecast()`]: closes (and optional volumes)
//! in, a trend label, a calibrated confidence and a smoothed overlay out.

pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

pub use error::{AppError, ForecastError};
pub use services::signals::{analyze, forecast, Analysis};
pub use types::{ForecastResult, PeriodClass, PeriodPreset, TrendLabel};
