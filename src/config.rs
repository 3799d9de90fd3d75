//! Process-wide client configuration.
//!
//! Defaults for the API key, base URL, quote currency and output format are
//! collected once into an explicit [`ClientConfig`] and passed into the
//! client, rather than being looked up from ambient environment state at
//! call sites. Explicit per-call arguments always override configured
//! defaults.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;
use url::Url;

use crate::params::{OutputFormat, QuoteCurrency};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.covalenthq.com";

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "COVALENT_API_KEY";

/// Client-wide defaults, constructed once at startup.
///
/// `quote_currency` and `format` are `None` by default, meaning the
/// corresponding query parameters are omitted and the remote service applies
/// its own defaults. Endpoints that carry the quote currency in the path
/// fall back to USD when neither an explicit argument nor a configured
/// default is present.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Default API key; every request requires one.
    pub api_key: Option<String>,
    /// Base URL of the Covalent API.
    pub base_url: Url,
    /// Default quote currency for price-valued response fields.
    pub quote_currency: Option<QuoteCurrency>,
    /// Default response serialization.
    pub format: Option<OutputFormat>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            quote_currency: None,
            format: None,
        }
    }
}

/// Raw deserialization target for the `config` crate; values arrive as
/// strings and are validated into typed fields afterwards.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    api_key: Option<String>,
    base_url: Option<String>,
    quote_currency: Option<String>,
    format: Option<String>,
}

impl ClientConfig {
    /// Loads configuration from the process environment.
    ///
    /// Reads `COVALENT_API_KEY`, `COVALENT_BASE_URL`,
    /// `COVALENT_QUOTE_CURRENCY` and `COVALENT_FORMAT`. Unset values fall
    /// back to [`ClientConfig::default`].
    pub fn from_env() -> Result<Self> {
        Self::build(None)
    }

    /// Loads configuration from a TOML file, with environment variables
    /// taking precedence over file values.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::build(Some(path))
    }

    fn build(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            let filename = path.to_str().context("Invalid config file path")?;
            builder = builder.add_source(config::File::with_name(filename));
        }
        let cfg = builder
            .add_source(Environment::with_prefix("COVALENT"))
            .build()
            .context("Could not build configuration")?;

        let raw: RawConfig = cfg
            .try_deserialize()
            .context("Could not read configuration values")?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let mut config = Self::default();
        if let Some(key) = raw.api_key {
            config.api_key = Some(key);
        }
        if let Some(base_url) = raw.base_url {
            config.base_url = Url::parse(&base_url)
                .with_context(|| format!("Invalid base URL `{base_url}`"))?;
        }
        if let Some(currency) = raw.quote_currency {
            config.quote_currency = Some(
                QuoteCurrency::from_str(&currency).context("Invalid configured quote currency")?,
            );
        }
        if let Some(format) = raw.format {
            config.format =
                Some(OutputFormat::from_str(&format).context("Invalid configured output format")?);
        }
        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_quote_currency(mut self, quote_currency: QuoteCurrency) -> Self {
        self.quote_currency = Some(quote_currency);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> ClientConfig {
    ClientConfig::default().with_api_key("ckey_test")
}
