//! Forecast service and file loading.

use std::io::Write;
use trendcast::error::AppError;
use trendcast::services::ForecastService;
use trendcast::sources::load_candles;
use trendcast::types::{OhlcPoint, PeriodClass, PeriodPreset, TrendLabel};

fn write_json(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn daily_candles(closes: &[f64]) -> Vec<OhlcPoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| OhlcPoint {
            time: 1_700_000_000 + i as i64 * 86_400,
            open: close - 0.2,
            high: close + 0.5,
            low: close - 0.5,
            close,
            volume: Some(1_000.0),
        })
        .collect()
}

#[test]
fn test_load_and_forecast_columns() {
    let closes: Vec<f64> = (100..=120).map(f64::from).collect();
    let times: Vec<i64> = (0..21).map(|i| 1_700_000_000 + i * 86_400).collect();
    let json = serde_json::json!({
        "time": times,
        "open": closes,
        "high": closes,
        "low": closes,
        "close": closes,
        "volume": vec![1000.0; 21],
    });
    let file = write_json(&json.to_string());

    let candles = load_candles(file.path()).unwrap();
    assert_eq!(candles.len(), 21);

    let service = ForecastService::default();
    let response = service
        .forecast_series("AAPL", &candles, PeriodPreset::resolve("1mo"))
        .unwrap();

    assert_eq!(response.trend, TrendLabel::Up);
    assert_eq!(response.forecast_line.len(), 21);
    assert!(response.forecast_line[..8].iter().all(Option::is_none));
    assert!(response.forecast_line[8..].iter().all(Option::is_some));
    assert!((35.0..=75.0).contains(&response.confidence));
    assert_eq!(response.time[0], "2023-11-14 22:13:20");
}

#[test]
fn test_load_unsorted_rows() {
    let json = r#"[
        {"time": 300, "open": 3, "high": 3, "low": 3, "close": 3},
        {"time": 100, "open": 1, "high": 1, "low": 1, "close": 1},
        {"time": 200, "open": 2, "high": 2, "low": 2, "close": 2}
    ]"#;
    let file = write_json(json);
    let candles = load_candles(file.path()).unwrap();
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    assert_eq!(closes, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_load_missing_file() {
    let err = load_candles("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_empty_file_has_no_data() {
    let file = write_json("[]");
    let candles = load_candles(file.path()).unwrap();
    let err = ForecastService::default()
        .forecast_series("MSFT", &candles, PeriodPreset::fallback())
        .unwrap_err();
    assert!(matches!(err, AppError::NoData(_)));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_forecast_each_preset() {
    let closes: Vec<f64> = (0..65).map(|i| 80.0 + i as f64 * 0.25).collect();
    let candles = daily_candles(&closes);
    let service = ForecastService::default();

    for code in ["1d", "5d", "1mo"] {
        let preset = service.resolve_preset(Some(code));
        let response = service.forecast_series("NVDA", &candles, preset).unwrap();
        assert_eq!(response.forecast_line.len(), closes.len());
        assert_ne!(response.trend, TrendLabel::Unknown);
        assert!(response.error.is_none());
    }
}

#[test]
fn test_default_preset_from_config() {
    let service = ForecastService::new(PeriodPreset::resolve("5d"));
    assert_eq!(service.default_preset().class, PeriodClass::MultiDay);
    assert_eq!(service.resolve_preset(None).class, PeriodClass::MultiDay);
}
