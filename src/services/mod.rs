pub mod forecast_service;
pub mod signals;

pub use forecast_service::{align_overlay, ForecastService};
pub use signals::{analyze, forecast, Analysis};
