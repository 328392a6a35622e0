use super::{assert_buffer_len, CrossSection, SectionSampler};
use crate::centerline::{Radius, RadiusFn};
use crate::nalgebra::{Point3, Vector3};
use crate::quadrature::lebedev;
use crate::{ConfigurationError, Real, ShapeError};
use log::debug;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// Sphere of radius `r(x0)` centered at `x0`, for averaging in all directions around the
/// centerline point.
///
/// Uses a tabulated Lebedev rule on the unit sphere, whose weights already sum to one. The shape
/// is orientation independent, so the normal passed to [`CrossSection::points`] is ignored.
#[derive(Clone)]
pub struct Ball<T: Real> {
    radius: RadiusFn<T>,
    weights: Vec<T>,
    directions: Vec<Vector3<T>>,
}

impl<T: Real> Debug for Ball<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ball")
            .field("weights", &self.weights)
            .field("directions", &self.directions)
            .finish_non_exhaustive()
    }
}

impl<T: Real> Ball<T> {
    /// Creates a ball with the Lebedev rule that integrates polynomials of degree `degree`
    /// exactly.
    ///
    /// Only the degrees listed by
    /// [`lebedev_degrees`](shape_average_quadrature::sphere::lebedev_degrees) are available; any
    /// other degree fails with [`ConfigurationError::UnsupportedBallDegree`].
    pub fn new(radius: impl Into<Radius<T>>, degree: usize) -> Result<Self, ConfigurationError> {
        let radius = RadiusFn::resolve(radius.into())?;
        let (weights, points) = lebedev::<T>(degree)?;
        let directions = points.into_iter().map(|p| p.coords).collect();
        debug!(
            "Constructed ball cross-section of degree {} with {} quadrature points",
            degree,
            weights.len()
        );
        Ok(Self {
            radius,
            weights,
            directions,
        })
    }
}

/// Samples a [`Ball`].
#[derive(Debug, Clone)]
pub struct BallSampler<'a, T: Real> {
    ball: &'a Ball<T>,
}

impl<T: Real> CrossSection<T> for Ball<T> {
    type Sampler<'a> = BallSampler<'a, T>;

    fn weights(&self) -> &[T] {
        &self.weights
    }

    fn points(&self, _normal: &Vector3<T>) -> Result<BallSampler<'_, T>, ShapeError> {
        Ok(BallSampler { ball: self })
    }
}

impl<'a, T: Real> SectionSampler<T> for BallSampler<'a, T> {
    fn num_points(&self) -> usize {
        self.ball.directions.len()
    }

    fn populate_points(&self, x0: &Point3<T>, points: &mut [Point3<T>]) -> Result<(), ShapeError> {
        assert_buffer_len(points, self.num_points());
        let r = self.ball.radius.evaluate(x0)?;
        for (x, direction) in points.iter_mut().zip(&self.ball.directions) {
            *x = x0 + direction * r;
        }
        Ok(())
    }
}
