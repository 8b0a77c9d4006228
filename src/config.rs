use crate::utils::check_num;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Estimator configuration parameters.
///
/// Every field has a default, so an empty document is a valid configuration.
/// See [`Config::from_toml_str`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Minimum number of samples accepted by a fit.
    pub min_samples: usize,

    /// Population variance of x at or below which the slope is undefined.
    pub min_x_var: f64,

    /// Distance past the sample count at which `forecast_ahead` evaluates the line.
    pub horizon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_samples: 1,
            min_x_var: 0.0,
            horizon: 1.0,
        }
    }
}

impl Config {
    /// Parse and validate a [`Config`] from a TOML document.
    ///
    /// # Errors
    /// Returns an error if the document cannot be deserialized
    /// or if the configuration values are invalid.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_num(self.min_samples, 1..).context("invalid minimum number of samples")?;
        check_num(self.min_x_var, 0.0..f64::INFINITY).context("invalid minimum variance of x")?;
        check_num(self.horizon, f64::MIN_POSITIVE..f64::INFINITY)
            .context("invalid forecast horizon")?;

        Ok(())
    }
}
