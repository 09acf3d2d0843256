use std::ops::{AddAssign, Mul};

/// Coefficient table of an explicit Runge-Kutta scheme.
///
/// Row `i < STAGES - 1` holds the coefficients `a[i][0..=i]` used to build the
/// evaluation point of stage `i + 1`, and its last column holds that stage's
/// time offset as a fraction of the step. The last row holds the weights of
/// the final combination.
#[derive(Debug, Clone, PartialEq)]
pub struct ButcherTableau<const STAGES: usize> {
    rows: [[f64; STAGES]; STAGES],
}

impl<const STAGES: usize> ButcherTableau<STAGES> {
    pub const fn new(rows: [[f64; STAGES]; STAGES]) -> Self {
        ButcherTableau { rows }
    }

    pub const fn stages(&self) -> usize {
        STAGES
    }

    pub fn coefficient(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Time offset of the stage built from `row`.
    pub fn node(&self, row: usize) -> f64 {
        self.rows[row][STAGES - 1]
    }

    pub fn weights(&self) -> &[f64; STAGES] {
        &self.rows[STAGES - 1]
    }

    /// Weighted sum `a[row][0] * k[0] + ... + a[row][n-1] * k[n-1]` over the
    /// given stages, accumulated left to right starting from the first term.
    pub fn combine<S>(&self, row: usize, stages: &[S]) -> S
    where
        S: Copy + AddAssign + Mul<f64, Output = S>,
    {
        let coefficients = &self.rows[row];
        let mut sum = stages[0] * coefficients[0];
        for (k, a) in stages.iter().zip(coefficients.iter()).skip(1) {
            sum += *k * *a;
        }
        sum
    }
}

/// Classical 4-stage, 4th-order table.
#[allow(clippy::excessive_precision)]
pub const ST44: ButcherTableau<4> = ButcherTableau::new([
    [0.5, 0.0, 0.0, 0.5],
    [0.0, 0.5, 0.0, 0.5],
    [0.0, 0.0, 1.0, 1.0],
    [
        0.166666666666667,
        0.333333333333333,
        0.333333333333333,
        0.166666666666667,
    ],
]);

/// 7-stage, 6th-order table. Some weights are negative.
#[allow(clippy::excessive_precision)]
pub const ST76: ButcherTableau<7> = ButcherTableau::new([
    [
        0.33333333333333333333,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.33333333333333333333,
    ],
    [
        0.0,
        0.66666666666666666667,
        0.0,
        0.0,
        0.0,
        0.0,
        0.66666666666666666667,
    ],
    [
        0.083333333333333333333,
        0.33333333333333333333,
        -0.083333333333333333333,
        0.0,
        0.0,
        0.0,
        0.333333333333333333333,
    ],
    [-0.0625, 1.125, -0.1875, -0.375, 0.0, 0.0, 0.5],
    [0.0, 1.125, -0.375, -0.75, 0.5, 0.0, 0.5],
    [
        0.204545454545454545455,
        -0.81818181818181818182,
        1.43181818181818181818,
        1.63636363636363636364,
        0.0,
        -1.45454545454545454545,
        1.0,
    ],
    [
        0.091666666666666666667,
        0.0,
        0.675,
        0.675,
        -0.266666666666666666667,
        -0.266666666666666666667,
        0.091666666666666666667,
    ],
]);
