use serde::{Deserialize, Serialize};

/// Running sums of a paired sample, accumulated in a single pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sums {
    n_vals: usize,
    sum_x: f64,
    sum_y: f64,
    sum_xx: f64,
    sum_xy: f64,
}

impl Sums {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate the sums of two parallel slices.
    ///
    /// Pairs beyond the shorter slice are ignored; callers check lengths first.
    pub fn from_samples(x: &[f64], y: &[f64]) -> Self {
        let mut sums = Self::new();
        for (&x_val, &y_val) in x.iter().zip(y) {
            sums.add(x_val, y_val);
        }
        sums
    }

    pub fn add(&mut self, x: f64, y: f64) {
        self.n_vals += 1;
        self.sum_x += x;
        self.sum_y += y;
        self.sum_xx += x * x;
        self.sum_xy += x * y;
    }

    pub fn n_vals(&self) -> usize {
        self.n_vals
    }

    pub fn sum_x(&self) -> f64 {
        self.sum_x
    }

    pub fn sum_y(&self) -> f64 {
        self.sum_y
    }

    pub fn sum_xx(&self) -> f64 {
        self.sum_xx
    }

    pub fn sum_xy(&self) -> f64 {
        self.sum_xy
    }

    /// Mean of the x values, or NaN when nothing was added.
    pub fn mean_x(&self) -> f64 {
        self.sum_x() / self.n_vals as f64
    }

    /// Mean of the y values, or NaN when nothing was added.
    pub fn mean_y(&self) -> f64 {
        self.sum_y() / self.n_vals as f64
    }
}
