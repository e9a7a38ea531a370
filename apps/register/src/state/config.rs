//! # Configuration State
//!
//! Register configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. TOML file named by `BARBER_CONFIG`
//! 3. Environment variables (`BARBER_*`)
//!
//! ```toml
//! # register.toml
//! tax_rate_bps = 1000
//! currency_style = "rupiah"
//! print_origin = "http://192.168.1.20:3000"
//!
//! [shop]
//! name = "BARBERSHOP POS"
//! address = "Jl. Contoh No. 123, Jakarta"
//! phone = "Tel: 021-1234567"
//! ```
//!
//! Configuration is read-only after initialization.

use std::path::{Path, PathBuf};

use barber_core::validation::{validate_print_origin, validate_tax_rate_bps};
use barber_core::{CurrencyStyle, ReceiptBuilder, ShopProfile, TaxRate, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the TOML config file.
pub const CONFIG_PATH_VAR: &str = "BARBER_CONFIG";

const DEFAULT_PRINT_ORIGIN: &str = "http://localhost:3000";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Register configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Header printed on every receipt.
    pub shop: ShopProfile,

    /// Sales tax in basis points, e.g. 1000 = 10%.
    pub tax_rate_bps: u32,

    /// How amounts are written into receipt text.
    pub currency_style: CurrencyStyle,

    /// Origin the printer app calls back to for receipt JSON.
    pub print_origin: String,
}

impl Default for ConfigState {
    /// Shop defaults: the standard header, 10% tax, rupiah amounts,
    /// print bridge on localhost:3000.
    fn default() -> Self {
        ConfigState {
            shop: ShopProfile::default(),
            tax_rate_bps: barber_core::SHOP_TAX_RATE.bps(),
            currency_style: CurrencyStyle::default(),
            print_origin: DEFAULT_PRINT_ORIGIN.to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Loads configuration, reading variables through `lookup`.
    ///
    /// ## Environment Variables
    /// - `BARBER_CONFIG`: path to a TOML file
    /// - `BARBER_SHOP_NAME`, `BARBER_SHOP_ADDRESS`, `BARBER_SHOP_PHONE`
    /// - `BARBER_TAX_RATE`: percentage, e.g. `10` or `11.5`
    /// - `BARBER_CURRENCY_STYLE`: `rupiah` or `plain`
    /// - `BARBER_PRINT_ORIGIN`: e.g. `http://localhost:3000`
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => {
                debug!("No config file set, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides(&lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a TOML config file. Missing keys keep defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading register config from file");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    fn apply_env_overrides<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("BARBER_SHOP_NAME") {
            self.shop.name = name;
        }

        if let Some(address) = lookup("BARBER_SHOP_ADDRESS") {
            self.shop.address = address;
        }

        if let Some(phone) = lookup("BARBER_SHOP_PHONE") {
            self.shop.phone = phone;
        }

        if let Some(raw) = lookup("BARBER_TAX_RATE") {
            let pct = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|pct| pct.is_finite() && *pct >= 0.0)
                .ok_or_else(|| invalid_env("BARBER_TAX_RATE", &raw))?;
            debug!(tax_rate = %raw, "Overriding tax rate from environment");
            self.tax_rate_bps = TaxRate::from_percentage(pct).bps();
        }

        if let Some(raw) = lookup("BARBER_CURRENCY_STYLE") {
            self.currency_style = match raw.trim().to_ascii_lowercase().as_str() {
                "rupiah" => CurrencyStyle::Rupiah,
                "plain" => CurrencyStyle::Plain,
                _ => return Err(invalid_env("BARBER_CURRENCY_STYLE", &raw)),
            };
        }

        if let Some(origin) = lookup("BARBER_PRINT_ORIGIN") {
            self.print_origin = origin.trim().to_string();
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tax_rate_bps(self.tax_rate_bps)?;
        validate_print_origin(&self.print_origin)?;
        Ok(())
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Receipt builder for this shop and currency style.
    pub fn receipt_builder(&self) -> ReceiptBuilder<'_> {
        ReceiptBuilder::new(&self.shop).currency_style(self.currency_style)
    }
}

fn invalid_env(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnv {
        key: key.to_string(),
        value: value.to_string(),
    }
}
