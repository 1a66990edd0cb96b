use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub pricing: PricingConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Pricing constants. The defaults reproduce the storefront's published
/// rates: free standard shipping above $1000, otherwise $49.99; express is
/// a flat $29.99; tax is 8% of the subtotal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingConfig {
    pub free_shipping_threshold: Decimal,
    pub standard_shipping_fee: Decimal,
    pub express_shipping_fee: Decimal,
    pub tax_rate_pct: Decimal,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_path: PathBuf,
    pub cart_key: String,
    pub session_key: String,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub data_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: dec!(1000),
            standard_shipping_fee: dec!(49.99),
            express_shipping_fee: dec!(29.99),
            tax_rate_pct: dec!(8),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            storage: StorageConfig {
                data_path: PathBuf::from("noctis-data.json"),
                cart_key: "gothic-cart".to_string(),
                session_key: "gothic-auth".to_string(),
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    pricing: Option<PricingPatch>,
    storage: Option<StoragePatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct PricingPatch {
    free_shipping_threshold: Option<Decimal>,
    standard_shipping_fee: Option<Decimal>,
    express_shipping_fee: Option<Decimal>,
    tax_rate_pct: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
struct StoragePatch {
    data_path: Option<PathBuf>,
    cart_key: Option<String>,
    session_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("noctis.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(pricing) = patch.pricing {
            if let Some(threshold) = pricing.free_shipping_threshold {
                self.pricing.free_shipping_threshold = threshold;
            }
            if let Some(fee) = pricing.standard_shipping_fee {
                self.pricing.standard_shipping_fee = fee;
            }
            if let Some(fee) = pricing.express_shipping_fee {
                self.pricing.express_shipping_fee = fee;
            }
            if let Some(rate) = pricing.tax_rate_pct {
                self.pricing.tax_rate_pct = rate;
            }
        }

        if let Some(storage) = patch.storage {
            if let Some(data_path) = storage.data_path {
                self.storage.data_path = data_path;
            }
            if let Some(cart_key) = storage.cart_key {
                self.storage.cart_key = cart_key;
            }
            if let Some(session_key) = storage.session_key {
                self.storage.session_key = session_key;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("NOCTIS_PRICING_FREE_SHIPPING_THRESHOLD") {
            self.pricing.free_shipping_threshold =
                parse_decimal("NOCTIS_PRICING_FREE_SHIPPING_THRESHOLD", &value)?;
        }
        if let Some(value) = read_env("NOCTIS_PRICING_STANDARD_SHIPPING_FEE") {
            self.pricing.standard_shipping_fee =
                parse_decimal("NOCTIS_PRICING_STANDARD_SHIPPING_FEE", &value)?;
        }
        if let Some(value) = read_env("NOCTIS_PRICING_EXPRESS_SHIPPING_FEE") {
            self.pricing.express_shipping_fee =
                parse_decimal("NOCTIS_PRICING_EXPRESS_SHIPPING_FEE", &value)?;
        }
        if let Some(value) = read_env("NOCTIS_PRICING_TAX_RATE_PCT") {
            self.pricing.tax_rate_pct = parse_decimal("NOCTIS_PRICING_TAX_RATE_PCT", &value)?;
        }

        if let Some(value) = read_env("NOCTIS_STORAGE_DATA_PATH") {
            self.storage.data_path = PathBuf::from(value);
        }
        if let Some(value) = read_env("NOCTIS_STORAGE_CART_KEY") {
            self.storage.cart_key = value;
        }
        if let Some(value) = read_env("NOCTIS_STORAGE_SESSION_KEY") {
            self.storage.session_key = value;
        }

        let log_level = read_env("NOCTIS_LOGGING_LEVEL").or_else(|| read_env("NOCTIS_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("NOCTIS_LOGGING_FORMAT").or_else(|| read_env("NOCTIS_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(data_path) = overrides.data_path {
            self.storage.data_path = data_path;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_pricing(&self.pricing)?;
        validate_storage(&self.storage)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then(|| path.to_path_buf());
    }

    [PathBuf::from("noctis.toml"), PathBuf::from("config/noctis.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    toml::from_str::<ConfigPatch>(&raw)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_decimal(key: &str, value: &str) -> Result<Decimal, ConfigError> {
    value
        .trim()
        .parse::<Decimal>()
        .map_err(|_| ConfigError::InvalidEnvOverride { key: key.to_string(), value: value.to_string() })
}

fn validate_pricing(pricing: &PricingConfig) -> Result<(), ConfigError> {
    if pricing.free_shipping_threshold < Decimal::ZERO {
        return Err(ConfigError::Validation(
            "pricing.free_shipping_threshold must not be negative".to_string(),
        ));
    }
    if pricing.standard_shipping_fee < Decimal::ZERO
        || pricing.express_shipping_fee < Decimal::ZERO
    {
        return Err(ConfigError::Validation(
            "pricing shipping fees must not be negative".to_string(),
        ));
    }
    if pricing.tax_rate_pct < Decimal::ZERO || pricing.tax_rate_pct > Decimal::from(100) {
        return Err(ConfigError::Validation(
            "pricing.tax_rate_pct must be in range 0..=100".to_string(),
        ));
    }
    Ok(())
}

fn validate_storage(storage: &StorageConfig) -> Result<(), ConfigError> {
    if storage.data_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation("storage.data_path must not be empty".to_string()));
    }
    if storage.cart_key.trim().is_empty() || storage.session_key.trim().is_empty() {
        return Err(ConfigError::Validation(
            "storage.cart_key and storage.session_key must not be empty".to_string(),
        ));
    }
    if storage.cart_key == storage.session_key {
        return Err(ConfigError::Validation(
            "storage.cart_key and storage.session_key must differ".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{AppConfig, ConfigError, ConfigOverrides, LoadOptions};

    #[test]
    fn defaults_reproduce_the_published_rates() {
        let config = AppConfig::default();
        assert_eq!(config.pricing.free_shipping_threshold, dec!(1000));
        assert_eq!(config.pricing.standard_shipping_fee, dec!(49.99));
        assert_eq!(config.pricing.express_shipping_fee, dec!(29.99));
        assert_eq!(config.pricing.tax_rate_pct, dec!(8));
        assert_eq!(config.storage.cart_key, "gothic-cart");
        assert_eq!(config.storage.session_key, "gothic-auth");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn programmatic_overrides_win() {
        let options = LoadOptions {
            overrides: ConfigOverrides {
                data_path: Some("/tmp/noctis-test.json".into()),
                log_level: Some("debug".to_string()),
            },
            ..LoadOptions::default()
        };
        let config = AppConfig::load(options).expect("load");
        assert_eq!(config.storage.data_path, std::path::PathBuf::from("/tmp/noctis-test.json"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn missing_required_file_is_reported() {
        let options = LoadOptions {
            config_path: Some("does-not-exist.toml".into()),
            require_file: true,
            ..LoadOptions::default()
        };
        let error = AppConfig::load(options).expect_err("missing file");
        assert!(matches!(error, ConfigError::MissingConfigFile(_)));
    }

    #[test]
    fn colliding_snapshot_keys_fail_validation() {
        let mut config = AppConfig::default();
        config.storage.session_key = config.storage.cart_key.clone();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
