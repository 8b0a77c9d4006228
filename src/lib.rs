//! Ordinary least-squares fitting of a straight line `y = a + b*x` to
//! paired samples, and evaluation of the fitted line at a query point.
//!
//! ```
//! let fit = linreg::fit(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();
//! assert_eq!(fit.slope, 2.0);
//! assert_eq!(fit.forecast(5.0), 10.0);
//! ```

mod config;
mod error;
mod estimator;
pub mod legacy;
mod stats;
mod utils;

pub use config::Config;
pub use error::{RegressionError, Result};
pub use estimator::{Estimator, Fit, fit, forecast, forecast_next};
pub use stats::Sums;
