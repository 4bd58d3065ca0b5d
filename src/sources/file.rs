//! Candle series loaded from JSON files.
//!
//! Accepts either an array of candle objects or a column-oriented object:
//!
//! ```json
//! [{"time": 1700000000, "open": 1.0, "high": 1.2, "low": 0.9, "close": 1.1, "volume": 500}]
//! {"time": [1700000000], "open": [1.0], "high": [1.2], "low": [0.9], "close": [1.1], "volume": [500]}
//! ```

use crate::error::{AppError, Result};
use crate::types::OhlcPoint;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CandleFile {
    Rows(Vec<OhlcPoint>),
    Columns(CandleColumns),
}

#[derive(Debug, Deserialize)]
struct CandleColumns {
    time: Vec<i64>,
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    #[serde(default)]
    volume: Option<Vec<f64>>,
}

impl CandleColumns {
    fn into_rows(self) -> Result<Vec<OhlcPoint>> {
        let len = self.time.len();
        let volume_len = self.volume.as_ref().map_or(len, Vec::len);
        let lengths = [
            self.open.len(),
            self.high.len(),
            self.low.len(),
            self.close.len(),
            volume_len,
        ];
        if lengths.iter().any(|&l| l != len) {
            return Err(AppError::BadRequest(
                "candle columns have different lengths".to_string(),
            ));
        }

        let rows = (0..len)
            .map(|i| OhlcPoint {
                time: self.time[i],
                open: self.open[i],
                high: self.high[i],
                low: self.low[i],
                close: self.close[i],
                volume: self.volume.as_ref().map(|v| v[i]),
            })
            .collect();

        Ok(rows)
    }
}

/// Parse candles from JSON text, sorted chronologically.
pub fn parse_candles(json: &str) -> Result<Vec<OhlcPoint>> {
    let mut candles = match serde_json::from_str::<CandleFile>(json)? {
        CandleFile::Rows(rows) => rows,
        CandleFile::Columns(columns) => columns.into_rows()?,
    };
    candles.sort_by_key(|c| c.time);
    Ok(candles)
}

/// Load candles from a JSON file.
pub fn load_candles(path: impl AsRef<Path>) -> Result<Vec<OhlcPoint>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let candles = parse_candles(&json)?;
    debug!("Read {} candles from {}", candles.len(), path.display());
    Ok(candles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows() {
        let json = r#"[
            {"time": 120, "open": 2.0, "high": 2.5, "low": 1.5, "close": 2.2},
            {"time": 60, "open": 1.0, "high": 1.5, "low": 0.5, "close": 1.2, "volume": 300.0}
        ]"#;
        let candles = parse_candles(json).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].time, 60);
        assert_eq!(candles[0].volume, Some(300.0));
        assert_eq!(candles[1].volume, None);
    }

    #[test]
    fn test_parse_columns() {
        let json = r#"{
            "time": [0, 60, 120],
            "open": [1.0, 2.0, 3.0],
            "high": [1.5, 2.5, 3.5],
            "low": [0.5, 1.5, 2.5],
            "close": [1.2, 2.2, 3.2],
            "volume": [10.0, 20.0, 30.0]
        }"#;
        let candles = parse_candles(json).unwrap();
        assert_eq!(candles.len(), 3);
        assert_eq!(candles[2].close, 3.2);
        assert_eq!(candles[1].volume, Some(20.0));
    }

    #[test]
    fn test_parse_columns_without_volume() {
        let json = r#"{"time": [0], "open": [1.0], "high": [1.0], "low": [1.0], "close": [1.0]}"#;
        let candles = parse_candles(json).unwrap();
        assert_eq!(candles[0].volume, None);
    }

    #[test]
    fn test_parse_columns_length_mismatch() {
        let json = r#"{"time": [0, 60], "open": [1.0], "high": [1.0], "low": [1.0], "close": [1.0]}"#;
        let err = parse_candles(json).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_candles("{\"nope\": true}").unwrap_err();
        assert!(matches!(err, AppError::SerdeJson(_)));
    }
}
