//! Integer-truncating line fit kept for compatibility with historical results.
//!
//! This is not a least-squares fit. The mean terms are derived from the
//! *product* of all samples rather than their sum, every division truncates
//! toward zero, and the accumulators wrap on overflow. Consequences:
//!
//! * results are wrong even for exactly linear data,
//! * a single zero sample collapses the product accumulator to zero,
//! * moderate inputs overflow and wrap silently.
//!
//! Use [`crate::fit`] for anything new.

use crate::error::{RegressionError, Result};
use crate::utils::check_samples;
use serde::{Deserialize, Serialize};

/// Integer line `y = a + b * x` produced by [`fit_int`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntFit {
    pub intercept: i32,
    pub slope: i32,
}

impl IntFit {
    /// Evaluate the line at `x_query` with wrapping integer arithmetic.
    pub fn forecast(&self, x_query: i32) -> i32 {
        self.intercept.wrapping_add(self.slope.wrapping_mul(x_query))
    }
}

/// Fit `x` and `y` with the historical integer routine.
///
/// # Errors
/// Returns [`RegressionError::InvalidInput`] if the sequences are empty,
/// differ in length or have more than `i32::MAX` values, and
/// [`RegressionError::DegenerateInput`] if the final divisor is zero.
#[deprecated(note = "lossy integer arithmetic; use `linreg::fit` instead")]
pub fn fit_int(x: &[i32], y: &[i32]) -> Result<IntFit> {
    check_samples(x, y, 1)?;
    let size = i32::try_from(x.len()).map_err(|_| {
        RegressionError::InvalidInput(format!("{} samples exceed the i32 range", x.len()))
    })?;

    let mut xx: i32 = 0;
    let mut xy: i32 = 0;
    let mut prod_x: i32 = 1;
    let mut prod_y: i32 = 1;
    for (&x_val, &y_val) in x.iter().zip(y) {
        xx = xx.wrapping_add(x_val.wrapping_mul(x_val));
        xy = xy.wrapping_add(x_val.wrapping_mul(y_val));
        prod_x = prod_x.wrapping_mul(x_val);
        prod_y = prod_y.wrapping_mul(y_val);
    }

    let term_x = prod_x.wrapping_div(size);
    let term_y = prod_y.wrapping_div(size);
    let cross = term_y.wrapping_mul(term_x);

    let divisor = xx.wrapping_add(term_x.wrapping_mul(term_x));
    if divisor == 0 {
        log::debug!("legacy fit divisor is zero");
        return Err(RegressionError::DegenerateInput { var_x: 0.0 });
    }

    let slope = xy.wrapping_add(cross).wrapping_div(divisor);
    let intercept = term_y.wrapping_sub(slope.wrapping_mul(term_x));

    log::debug!("legacy fit of {size} samples: slope = {slope}, intercept = {intercept}");

    Ok(IntFit { intercept, slope })
}
