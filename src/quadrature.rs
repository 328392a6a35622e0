//! Reference rules from `shape-average-quadrature`, converted to the working scalar type.
use crate::nalgebra::{convert, OPoint, Point1, Point3, U1, U3};
use crate::{ConfigurationError, Real};
use shape_average_quadrature::{sphere, univariate, Rule1d, Rule3d};

pub type QuadraturePair<T, D> = (Vec<T>, Vec<OPoint<T, D>>);
pub type QuadraturePair1d<T> = QuadraturePair<T, U1>;
pub type QuadraturePair3d<T> = QuadraturePair<T, U3>;

/// Gauss-Legendre rule on `[-1, 1]` with `num_points` points.
pub fn gauss<T: Real>(num_points: usize) -> Result<QuadraturePair1d<T>, ConfigurationError> {
    let rule = univariate::try_gauss(num_points).map_err(|_| ConfigurationError::ZeroDegree)?;
    Ok(convert_quadrature_rule_from_1d_f64(rule))
}

/// Lebedev rule on the unit sphere, exact for polynomials of the given degree.
///
/// The weights sum to one.
pub fn lebedev<T: Real>(degree: usize) -> Result<QuadraturePair3d<T>, ConfigurationError> {
    let rule = sphere::lebedev(degree).map_err(|_| ConfigurationError::UnsupportedBallDegree {
        degree,
        supported: sphere::lebedev_degrees().collect(),
    })?;
    Ok(convert_quadrature_rule_from_3d_f64(rule))
}

fn convert_quadrature_rule_from_1d_f64<T>(quadrature: Rule1d) -> QuadraturePair1d<T>
where
    T: Real,
{
    let (weights, points) = quadrature;
    let weights = weights.into_iter().map(convert).collect();
    let points = points.into_iter().map(Point1::from).map(convert).collect();
    (weights, points)
}

fn convert_quadrature_rule_from_3d_f64<T>(quadrature: Rule3d) -> QuadraturePair3d<T>
where
    T: Real,
{
    let (weights, points) = quadrature;
    let weights = weights.into_iter().map(convert).collect();
    let points = points.into_iter().map(Point3::from).map(convert).collect();
    (weights, points)
}
