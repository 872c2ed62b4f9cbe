//! Deployment configuration.
//!
//! The country, production agency and default language are fixed per
//! deployment. [`S124Config::from_env`] builds the configuration from
//! environment variables at startup.

use std::path::PathBuf;

/// Deployment constants used when building identifiers and series metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S124Config {
    /// Country code used in message ids and MRNs (e.g. `"DK"`).
    pub country: String,
    /// Country name carried in message-series identifiers.
    pub country_name: String,
    /// Name of the agency producing the warnings.
    pub production_agency: String,
    /// Language of the production agency name.
    pub production_agency_language: String,
    /// Output language when a caller does not request one.
    pub default_language: String,
    /// Fixed number of decimals for coordinates; `None` keeps full precision.
    pub coordinate_precision: Option<usize>,
    /// Directory holding the S-124 schema documents.
    pub schema_dir: PathBuf,
}

impl Default for S124Config {
    fn default() -> Self {
        Self {
            country: "DK".to_string(),
            country_name: "Denmark".to_string(),
            production_agency: "Danish Maritime Authority".to_string(),
            production_agency_language: "en".to_string(),
            default_language: "en".to_string(),
            coordinate_precision: None,
            schema_dir: PathBuf::from("schemas"),
        }
    }
}

impl S124Config {
    /// Build the configuration from environment variables.
    ///
    /// | Variable                     | Default                     |
    /// |------------------------------|-----------------------------|
    /// | `S124_COUNTRY`               | `DK`                        |
    /// | `S124_COUNTRY_NAME`          | `Denmark`                   |
    /// | `S124_PRODUCTION_AGENCY`     | `Danish Maritime Authority` |
    /// | `S124_LANGUAGE`              | `en`                        |
    /// | `S124_COORDINATE_PRECISION`  | unset                       |
    /// | `S124_SCHEMA_DIR`            | `schemas`                   |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str, default: String| std::env::var(name).unwrap_or(default);

        Self {
            country: var("S124_COUNTRY", defaults.country),
            country_name: var("S124_COUNTRY_NAME", defaults.country_name),
            production_agency: var("S124_PRODUCTION_AGENCY", defaults.production_agency),
            production_agency_language: defaults.production_agency_language,
            default_language: var("S124_LANGUAGE", defaults.default_language),
            coordinate_precision: std::env::var("S124_COORDINATE_PRECISION")
                .ok()
                .and_then(|v| v.parse().ok()),
            schema_dir: std::env::var("S124_SCHEMA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.schema_dir),
        }
    }
}
