//! Gauss-Legendre rules for the reference interval `[-1, 1]`.

use crate::{Error, Rule1d};
use std::f64::consts::PI;

/// Upper bound on Newton iterations per root.
///
/// The initial guesses are accurate enough that convergence typically takes a handful of steps.
const MAX_NEWTON_ITERATIONS: usize = 100;

/// Legendre polynomial `P_n` and its predecessor `P_{n-1}`, evaluated at a single point.
///
/// The derivative formula is singular at `|x| == 1`, so this is only used inside `(-1, 1)`.
#[derive(Debug, Default, Clone, Copy)]
struct Legendre {
    n: usize,
    x: f64,
    p_n: f64,
    p_n_minus_1: f64,
}

impl Legendre {
    fn at(n: usize, x: f64) -> Self {
        // Bonnet's recursion: m P_m(x) = (2m - 1) x P_{m - 1}(x) - (m - 1) P_{m - 2}(x)
        let (mut p_n, mut p_n_minus_1) = (1.0, 0.0);
        for m in 1..=n {
            let m = m as f64;
            let p_next = ((2.0 * m - 1.0) * x * p_n - (m - 1.0) * p_n_minus_1) / m;
            p_n_minus_1 = p_n;
            p_n = p_next;
        }
        Self {
            n,
            x,
            p_n,
            p_n_minus_1,
        }
    }

    fn value(&self) -> f64 {
        self.p_n
    }

    fn derivative(&self) -> f64 {
        // P_n'(x) = n (x P_n(x) - P_{n - 1}(x)) / (x^2 - 1)
        let n = self.n as f64;
        let x = self.x;
        n * (x * self.p_n - self.p_n_minus_1) / (x * x - 1.0)
    }
}

/// Gauss-Legendre rule with the given number of points on `[-1, 1]`.
///
/// Returns [`Error::NoRuleAvailable`] if zero points are requested. A rule with `n` points
/// integrates polynomials of degree up to `2n - 1` exactly, and its weights sum to `2`.
pub fn try_gauss(num_points: usize) -> Result<Rule1d, Error> {
    let n = num_points;
    if n == 0 {
        return Err(Error::NoRuleAvailable);
    }

    // Following the classic procedure from Numerical Recipes (3rd ed.), only the roots in
    // (0, 1) are computed and the rest follow by symmetry.
    let num_unique = (n + 1) / 2;
    let mut points = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);

    for i in 0..num_unique {
        let mut x = (PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
        let mut legendre = Legendre::at(n, x);
        for _ in 0..MAX_NEWTON_ITERATIONS {
            let dx = -legendre.value() / legendre.derivative();
            x += dx;
            legendre = Legendre::at(n, x);
            if dx.abs() <= 1e-15 {
                break;
            }
        }

        let dp = legendre.derivative();
        points.push([x]);
        weights.push(2.0 / ((1.0 - x * x) * dp * dp));
    }

    for i in num_unique..n {
        let mirror = n - i - 1;
        points.push([-points[mirror][0]]);
        weights.push(weights[mirror]);
    }

    debug_assert_eq!(points.len(), n);
    Ok((weights, points))
}

/// Gauss-Legendre rule with the given number of points on `[-1, 1]`.
///
/// # Panics
///
/// Panics if zero points are requested. See [`try_gauss`] for a non-panicking variant.
pub fn gauss(num_points: usize) -> Rule1d {
    try_gauss(num_points).expect("number of points must be positive")
}
