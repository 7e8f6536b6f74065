//! Application configuration for coursemark.
//!
//! User config lives at `~/.coursemark/coursemark.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoursemarkError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "coursemark.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".coursemark";

// ---------------------------------------------------------------------------
// Config structs (matching coursemark.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Markup conventions baked into generated documents.
    #[serde(default)]
    pub conventions: Conventions,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default directory containing the eight input CSV tables.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Default output directory for generated documents.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "./schema_data".into()
}
fn default_output_dir() -> String {
    "./output".into()
}

/// `[conventions]` section — fixed values embedded in every document.
///
/// These were scattered literals in earlier tooling; they live here as named
/// configuration so a non-US or non-weekly catalog can override them without
/// touching the builders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conventions {
    /// Offer currency.
    #[serde(default = "default_price_currency")]
    pub price_currency: String,

    /// Country for every emitted `PostalAddress`.
    #[serde(default = "default_address_country")]
    pub address_country: String,

    /// Offer availability URI.
    #[serde(default = "default_offer_availability")]
    pub offer_availability: String,

    /// Offer delivery method.
    #[serde(default = "default_delivery_method")]
    pub delivery_method: String,

    /// `interactivityType` applied to every course.
    #[serde(default = "default_interactivity_type")]
    pub interactivity_type: String,

    /// Course schedule repeat frequency (ISO 8601 duration).
    #[serde(default = "default_repeat_frequency")]
    pub schedule_repeat_frequency: String,

    /// Course schedule weekday names, in week order.
    #[serde(default = "default_by_day")]
    pub schedule_by_day: Vec<String>,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            price_currency: default_price_currency(),
            address_country: default_address_country(),
            offer_availability: default_offer_availability(),
            delivery_method: default_delivery_method(),
            interactivity_type: default_interactivity_type(),
            schedule_repeat_frequency: default_repeat_frequency(),
            schedule_by_day: default_by_day(),
        }
    }
}

fn default_price_currency() -> String {
    "USD".into()
}
fn default_address_country() -> String {
    "US".into()
}
fn default_offer_availability() -> String {
    "https://schema.org/InStock".into()
}
fn default_delivery_method() -> String {
    "OnlineOnly".into()
}
fn default_interactivity_type() -> String {
    "mixed".into()
}
fn default_repeat_frequency() -> String {
    "P1D".into()
}
fn default_by_day() -> Vec<String> {
    [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ]
    .map(String::from)
    .to_vec()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.coursemark/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CoursemarkError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.coursemark/coursemark.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CoursemarkError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        CoursemarkError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| CoursemarkError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CoursemarkError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CoursemarkError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("data_dir"));
        assert!(toml_str.contains("price_currency"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.data_dir, "./schema_data");
        assert_eq!(parsed.conventions.price_currency, "USD");
    }

    #[test]
    fn conventions_defaults() {
        let conv = Conventions::default();
        assert_eq!(conv.address_country, "US");
        assert_eq!(conv.interactivity_type, "mixed");
        assert_eq!(conv.schedule_repeat_frequency, "P1D");
        assert_eq!(conv.schedule_by_day.len(), 7);
        assert_eq!(conv.schedule_by_day[0], "Monday");
        assert_eq!(conv.schedule_by_day[6], "Sunday");
    }

    #[test]
    fn conventions_overridable_from_toml() {
        let toml_str = r#"
[conventions]
price_currency = "CAD"
address_country = "CA"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.conventions.price_currency, "CAD");
        assert_eq!(config.conventions.address_country, "CA");
        // Untouched fields keep their defaults.
        assert_eq!(config.conventions.delivery_method, "OnlineOnly");
    }
}
