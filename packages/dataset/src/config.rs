//! Generation config loading and validation.
//!
//! A config is a small TOML document. Every key is optional:
//!
//! ```toml
//! seed = 7
//! start = "2024-01-01"
//! end = "2024-06-30"
//! frequency = "daily"
//!
//! [ranges.total]
//! low = 500
//! high = 1500
//! ```

use std::path::Path;

use waste_dashboard_dataset_models::{GenerationConfig, QuantityRange};

use crate::DatasetError;

/// Parses a [`GenerationConfig`] from a TOML string and validates it.
///
/// # Errors
///
/// Returns [`DatasetError::Config`] if the TOML is malformed, or
/// [`DatasetError::InvalidQuantityRange`] if a draw range is empty.
pub fn parse_config_toml(toml_str: &str) -> Result<GenerationConfig, DatasetError> {
    let config: GenerationConfig =
        toml::de::from_str(toml_str).map_err(|e| DatasetError::Config {
            message: e.to_string(),
        })?;
    validate(&config)?;
    Ok(config)
}

/// Reads and parses a config file.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_config_toml`].
pub fn load_config(path: &Path) -> Result<GenerationConfig, DatasetError> {
    log::info!("Loading generation config from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_config_toml(&contents)
}

/// Loads the config named by `path`, or the defaults when `path` is `None`.
///
/// # Errors
///
/// See [`load_config`].
pub fn load_config_or_default(path: Option<&Path>) -> Result<GenerationConfig, DatasetError> {
    path.map_or_else(|| Ok(GenerationConfig::default()), load_config)
}

/// Checks that every draw range can produce at least one value.
///
/// A span with `start > end` is accepted; it simply generates no records.
///
/// # Errors
///
/// Returns [`DatasetError::InvalidQuantityRange`] for the first empty range.
pub fn validate(config: &GenerationConfig) -> Result<(), DatasetError> {
    let ranges = &config.ranges;
    let columns: [(&'static str, QuantityRange); 4] = [
        ("total_waste_kg", ranges.total),
        ("recyclable_kg", ranges.recyclable),
        ("organic_kg", ranges.organic),
        ("non_recyclable_kg", ranges.non_recyclable),
    ];

    for (column, range) in columns {
        if range.is_empty() {
            return Err(DatasetError::InvalidQuantityRange {
                column,
                low: range.low,
                high: range.high,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use waste_dashboard_dataset_models::Frequency;

    use super::*;

    #[test]
    fn empty_config_is_reference_defaults() {
        let config = parse_config_toml("").unwrap();
        assert_eq!(config, GenerationConfig::default());
        assert_eq!(config.seed, 42);
        assert_eq!(config.frequency, Frequency::Weekly);
        assert_eq!(config.ranges.total, QuantityRange::new(500, 1500));
    }

    #[test]
    fn partial_config_overrides_only_given_keys() {
        let config = parse_config_toml(
            r#"
seed = 7
start = "2024-03-01"
frequency = "daily"

[ranges.organic]
low = 10
high = 20
"#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(config.end, GenerationConfig::default().end);
        assert_eq!(config.frequency, Frequency::Daily);
        assert_eq!(config.ranges.organic, QuantityRange::new(10, 20));
        assert_eq!(config.ranges.total, QuantityRange::new(500, 1500));
    }

    #[test]
    fn empty_range_is_rejected() {
        let err = parse_config_toml(
            r"
[ranges.total]
low = 100
high = 100
",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidQuantityRange {
                column: "total_waste_kg",
                ..
            }
        ));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = parse_config_toml("seed = \"not a number\"").unwrap_err();
        assert!(matches!(err, DatasetError::Config { .. }));
    }
}
