use std::env;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "trendcast=info";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Preset code used when no period is requested.
    pub default_period: String,
    /// Fallback tracing filter.
    pub log_filter: String,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_period: "1mo".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            pretty: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            default_period: lookup("TRENDCAST_DEFAULT_PERIOD")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.default_period),
            log_filter: lookup("TRENDCAST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            pretty: lookup("TRENDCAST_PRETTY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.pretty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.default_period, "1mo");
        assert_eq!(config.log_filter, "trendcast=info");
        assert!(!config.pretty);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TRENDCAST_DEFAULT_PERIOD", "1d"),
            ("TRENDCAST_LOG", "trendcast=debug"),
            ("TRENDCAST_PRETTY", "1"),
        ]));
        assert_eq!(config.default_period, "1d");
        assert_eq!(config.log_filter, "trendcast=debug");
        assert!(config.pretty);
    }

    #[test]
    fn test_config_blank_values_use_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("TRENDCAST_DEFAULT_PERIOD", "  "),
            ("TRENDCAST_PRETTY", "yes"),
        ]));
        assert_eq!(config.default_period, "1mo");
        assert!(!config.pretty);
    }
}
