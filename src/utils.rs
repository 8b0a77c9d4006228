use crate::error::{RegressionError, Result};
use anyhow::bail;
use std::{fmt::Debug, ops::RangeBounds};

pub fn check_num<T, R>(num: T, range: R) -> anyhow::Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }

    Ok(())
}

/// Check that `x` and `y` form a usable paired sample of at least `min_len` values.
pub fn check_samples<T>(x: &[T], y: &[T], min_len: usize) -> Result<()> {
    let (x_len, y_len) = (x.len(), y.len());
    if x_len != y_len {
        return Err(RegressionError::InvalidInput(format!(
            "x has {x_len} values but y has {y_len}"
        )));
    }
    if x_len == 0 {
        return Err(RegressionError::InvalidInput(
            "sample sequences are empty".to_string(),
        ));
    }
    if x_len < min_len {
        return Err(RegressionError::InvalidInput(format!(
            "at least {min_len} samples are required, but got {x_len}"
        )));
    }

    Ok(())
}

pub fn check_finite(vals: &[f64], name: &str) -> Result<()> {
    if let Some(i_val) = vals.iter().position(|val| !val.is_finite()) {
        return Err(RegressionError::InvalidInput(format!(
            "{name}[{i_val}] is not finite"
        )));
    }

    Ok(())
}
