use super::{ForecastResult, TrendLabel};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Label format for candle timestamps in response payloads.
pub const TIME_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// OHLC (Open, High, Low, Close) data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcPoint {
    /// Unix timestamp in seconds.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl OhlcPoint {
    /// Timestamp formatted as a UTC label, or the raw number if out of range.
    pub fn time_label(&self) -> String {
        DateTime::from_timestamp(self.time, 0)
            .map(|dt| dt.format(TIME_LABEL_FORMAT).to_string())
            .unwrap_or_else(|| self.time.to_string())
    }
}

/// Column-oriented view of a candle series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSeries {
    pub time: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    /// Missing candle volumes are reported as zero.
    pub volume: Vec<f64>,
}

impl MarketSeries {
    /// Split candles into columns.
    pub fn from_candles(candles: &[OhlcPoint]) -> Self {
        let mut series = Self {
            time: Vec::with_capacity(candles.len()),
            open: Vec::with_capacity(candles.len()),
            high: Vec::with_capacity(candles.len()),
            low: Vec::with_capacity(candles.len()),
            close: Vec::with_capacity(candles.len()),
            volume: Vec::with_capacity(candles.len()),
        };

        for candle in candles {
            series.time.push(candle.time_label());
            series.open.push(candle.open);
            series.high.push(candle.high);
            series.low.push(candle.low);
            series.close.push(candle.close);
            series.volume.push(candle.volume.unwrap_or(0.0));
        }

        series
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Percentage change from the first to the last close.
    /// Zero when the series is empty or the first close is not positive.
    pub fn change_pct(&self) -> f64 {
        match (self.close.first(), self.close.last()) {
            (Some(&first), Some(&last)) if first > 0.0 => (last / first - 1.0) * 100.0,
            _ => 0.0,
        }
    }
}

/// Forecast payload: raw OHLC columns merged with the engine output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub time: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    /// Overlay aligned with `time`; warm-up entries serialize as `null`.
    pub forecast_line: Vec<Option<f64>>,
    pub trend: TrendLabel,
    pub confidence: f64,
    pub change_pct: f64,
    pub error: Option<String>,
}

impl ForecastResponse {
    /// Merge a series with a forecast whose overlay is already aligned.
    pub fn new(series: MarketSeries, result: ForecastResult) -> Self {
        let change_pct = series.change_pct();
        Self {
            time: series.time,
            open: series.open,
            high: series.high,
            low: series.low,
            close: series.close,
            forecast_line: result.overlay,
            trend: result.trend,
            confidence: result.confidence,
            change_pct,
            error: None,
        }
    }

    /// Error payload with empty columns.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            time: Vec::new(),
            open: Vec::new(),
            high: Vec::new(),
            low: Vec::new(),
            close: Vec::new(),
            forecast_line: Vec::new(),
            trend: TrendLabel::Unknown,
            confidence: ForecastResult::NEUTRAL_CONFIDENCE,
            change_pct: 0.0,
            error: Some(message.into()),
        }
    }
}
