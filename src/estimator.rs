use crate::config::Config;
use crate::error::{RegressionError, Result};
use crate::stats::Sums;
use crate::utils::{check_finite, check_samples};
use serde::{Deserialize, Serialize};

/// Least-squares line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fit {
    pub intercept: f64,
    pub slope: f64,
}

impl Fit {
    /// Evaluate the line at `x_query`.
    pub fn forecast(&self, x_query: f64) -> f64 {
        forecast(self.intercept, self.slope, x_query)
    }

    /// Vertical distances `y[i] - forecast(x[i])` of each sample from the line.
    ///
    /// # Errors
    /// Returns [`RegressionError::InvalidInput`] if the sequences are empty
    /// or differ in length.
    pub fn residuals(&self, x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
        check_samples(x, y, 1)?;
        Ok(x.iter()
            .zip(y)
            .map(|(&x_val, &y_val)| y_val - self.forecast(x_val))
            .collect())
    }

    pub fn sum_sq_residuals(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        Ok(self.residuals(x, y)?.iter().map(|res| res * res).sum())
    }
}

/// Ordinary least-squares estimator.
///
/// Holds only its configuration; every call works on fresh sums, so a single
/// estimator can be shared between threads.
#[derive(Debug, Default, Clone)]
pub struct Estimator {
    cfg: Config,
}

impl Estimator {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Fit a line to the paired samples `x` and `y`.
    ///
    /// # Errors
    /// Returns [`RegressionError::InvalidInput`] if the sequences are empty,
    /// differ in length, are shorter than `min_samples` or hold non-finite values,
    /// and [`RegressionError::DegenerateInput`] if x has no spread.
    pub fn fit(&self, x: &[f64], y: &[f64]) -> Result<Fit> {
        self.check_input(x, y).inspect_err(|error| {
            log::debug!("rejected samples: {error}");
        })?;

        let sums = Sums::from_samples(x, y);
        let n_vals = sums.n_vals() as f64;
        let mean_x = sums.mean_x();
        let mean_y = sums.mean_y();

        let numer = sums.sum_xy() - n_vals * mean_x * mean_y;
        let denom = sums.sum_xx() - n_vals * mean_x * mean_x;
        if !numer.is_finite() || !denom.is_finite() {
            log::debug!("rejected samples: sums overflow");
            return Err(RegressionError::InvalidInput(
                "sums of the samples overflow".to_string(),
            ));
        }

        // Cancellation can leave a tiny nonzero denom for constant x.
        let var_x = denom / n_vals;
        let constant_x = x.iter().all(|&x_val| x_val == x[0]);
        if constant_x || var_x <= self.cfg.min_x_var {
            let var_x = if constant_x { 0.0 } else { var_x };
            log::debug!("degenerate samples: variance of x is {var_x}");
            return Err(RegressionError::DegenerateInput { var_x });
        }

        let slope = numer / denom;
        let intercept = mean_y - slope * mean_x;
        if !slope.is_finite() || !intercept.is_finite() {
            log::debug!("rejected samples: line overflows");
            return Err(RegressionError::InvalidInput(format!(
                "fitted line is not finite: slope = {slope}, intercept = {intercept}"
            )));
        }

        log::debug!("fitted {} samples: slope = {slope}, intercept = {intercept}", x.len());

        Ok(Fit { intercept, slope })
    }

    /// Fit the samples and evaluate the line `horizon` steps past the sample count.
    ///
    /// With the default horizon this is the value at `x = N + 1`.
    pub fn forecast_ahead(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        let fit = self.fit(x, y)?;
        let x_query = x.len() as f64 + self.cfg.horizon;
        Ok(fit.forecast(x_query))
    }

    fn check_input(&self, x: &[f64], y: &[f64]) -> Result<()> {
        check_samples(x, y, self.cfg.min_samples)?;
        check_finite(x, "x")?;
        check_finite(y, "y")?;
        Ok(())
    }
}

/// Fit a line to `x` and `y` with the default [`Config`].
pub fn fit(x: &[f64], y: &[f64]) -> Result<Fit> {
    Estimator::default().fit(x, y)
}

/// Evaluate `intercept + slope * x_query`.
pub fn forecast(intercept: f64, slope: f64, x_query: f64) -> f64 {
    intercept + slope * x_query
}

/// Fit `x` and `y` with the default [`Config`] and forecast at `x = N + 1`.
pub fn forecast_next(x: &[f64], y: &[f64]) -> Result<f64> {
    Estimator::default().forecast_ahead(x, y)
}
