#![allow(deprecated)]

use linreg::RegressionError;
use linreg::legacy::{IntFit, fit_int};

#[test]
fn reproduces_historical_results() {
    let fit = fit_int(&[1, 2, 3, 4], &[2, 4, 6, 8]).expect("failed to fit");

    // Far from the least-squares line (intercept 0, slope 2).
    assert_eq!(
        fit,
        IntFit {
            intercept: 42,
            slope: 9
        }
    );
    assert_eq!(fit.forecast(5), 87);
}

#[test]
fn zero_sample_collapses_product_term() {
    let fit = fit_int(&[1, 2, 3], &[0, 5, 10]).expect("failed to fit");

    assert_eq!(
        fit,
        IntFit {
            intercept: -4,
            slope: 2
        }
    );
}

#[test]
fn overflow_wraps_instead_of_panicking() {
    let x = [1000, 2000, 3000, 4000];
    let y = [100_000, 200_000, 300_000, 400_000];

    let fit = fit_int(&x, &y).expect("failed to fit");

    assert_eq!(
        fit,
        IntFit {
            intercept: 308_281_344,
            slope: 0
        }
    );
}

#[test]
fn zero_divisor_is_degenerate() {
    assert_eq!(
        fit_int(&[0, 0], &[1, 2]),
        Err(RegressionError::DegenerateInput { var_x: 0.0 })
    );
}

#[test]
fn empty_and_mismatched_samples_are_invalid() {
    assert!(matches!(
        fit_int(&[], &[]),
        Err(RegressionError::InvalidInput(_))
    ));
    assert!(matches!(
        fit_int(&[1, 2], &[1]),
        Err(RegressionError::InvalidInput(_))
    ));
}
