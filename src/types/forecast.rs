use serde::{Deserialize, Serialize};

/// Lookback/granularity bucket selecting the indicator parameters and weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PeriodClass {
    /// Short horizon on 30 minute candles. Most sensitive parameter set.
    #[serde(rename = "1d")]
    Intraday,
    /// A few days on daily candles.
    #[serde(rename = "5d")]
    MultiDay,
    /// A month on daily candles. Most conservative parameter set.
    #[default]
    #[serde(rename = "1mo")]
    Monthly,
}

impl PeriodClass {
    /// All supported period classes.
    pub const ALL: [PeriodClass; 3] = [
        PeriodClass::Intraday,
        PeriodClass::MultiDay,
        PeriodClass::Monthly,
    ];

    /// Parse from the preset code ("1d", "5d", "1mo").
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1d" => Some(Self::Intraday),
            "5d" => Some(Self::MultiDay),
            "1mo" => Some(Self::Monthly),
            _ => None,
        }
    }

    /// Preset code for this class.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Intraday => "1d",
            Self::MultiDay => "5d",
            Self::Monthly => "1mo",
        }
    }
}

impl std::fmt::Display for PeriodClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Classified short-horizon trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    Up,
    Down,
    Sideways,
    /// Too little data, or the computation faulted.
    Unknown,
}

impl TrendLabel {
    /// Whether the label carries a direction.
    pub fn is_directional(&self) -> bool {
        matches!(self, TrendLabel::Up | TrendLabel::Down)
    }

    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            TrendLabel::Up => "up",
            TrendLabel::Down => "down",
            TrendLabel::Sideways => "sideways",
            TrendLabel::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Output of the forecast engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Smoothed overlay, one entry per input price. `None` during warm-up.
    pub overlay: Vec<Option<f64>>,
    pub trend: TrendLabel,
    /// Confidence in percent, one decimal.
    pub confidence: f64,
}

impl ForecastResult {
    /// Confidence reported when no forecast could be made.
    pub const NEUTRAL_CONFIDENCE: f64 = 50.0;

    /// Neutral result: all-absent overlay of `len` entries, unknown trend.
    pub fn neutral(len: usize) -> Self {
        Self {
            overlay: vec![None; len],
            trend: TrendLabel::Unknown,
            confidence: Self::NEUTRAL_CONFIDENCE,
        }
    }

    /// Check if this is the neutral fallback result.
    pub fn is_neutral(&self) -> bool {
        self.trend == TrendLabel::Unknown
    }
}

/// A supported lookback/interval preset and the class that analyzes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodPreset {
    pub class: PeriodClass,
    /// Lookback window requested from the data provider.
    pub lookback: &'static str,
    /// Candle interval requested from the data provider.
    pub interval: &'static str,
}

impl PeriodPreset {
    /// Preset for a known class.
    pub fn for_class(class: PeriodClass) -> Self {
        match class {
            PeriodClass::Intraday => Self {
                class,
                lookback: "5d",
                interval: "30m",
            },
            PeriodClass::MultiDay => Self {
                class,
                lookback: "1mo",
                interval: "1d",
            },
            PeriodClass::Monthly => Self {
                class,
                lookback: "3mo",
                interval: "1d",
            },
        }
    }

    /// Preset for unrecognized codes: monthly analysis over one month of
    /// daily candles.
    pub fn fallback() -> Self {
        Self {
            class: PeriodClass::Monthly,
            lookback: "1mo",
            interval: "1d",
        }
    }

    /// Resolve a preset code, falling back for unknown codes.
    pub fn resolve(code: &str) -> Self {
        PeriodClass::from_code(code)
            .map(Self::for_class)
            .unwrap_or_else(Self::fallback)
    }

    /// Check if `code` names a supported preset.
    pub fn is_known(code: &str) -> bool {
        PeriodClass::from_code(code).is_some()
    }
}
