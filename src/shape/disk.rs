use super::{assert_buffer_len, unit_normal, CrossSection, SectionSampler};
use crate::centerline::{Radius, RadiusFn};
use crate::geometry::PlaneBasis;
use crate::nalgebra::{Point3, Vector3};
use crate::quadrature::gauss;
use crate::{ConfigurationError, Real, ShapeError};
use log::{debug, trace};
use numeric_literals::replace_float_literals;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// Circle of radius `r(x0)` in the plane orthogonal to the normal, centered at `x0`.
///
/// Despite the name, the average is taken over the *boundary* circle, which is what is needed to
/// couple a 3D field to the surface of a vessel around its centerline. With the circle
/// parametrized by `x0 + r (t1 sin θ + t2 cos θ)`, `θ ∈ [-π, π]`, the average is
///
/// ```text
/// 1/(2πr) ∫_C f dl  =  1/(2π) ∫_{-π}^{π} f(θ) dθ  =  1/2 ∫_{-1}^{1} f(π s) ds  ≈  sum_q (w_q / 2) f(π s_q)
/// ```
///
/// with a Gauss rule `(w_q, s_q)` on `[-1, 1]`. The weights of the disk are therefore the Gauss
/// weights scaled by one half, and sum to one. Since the Gauss rule integrates `sin(π s)` and
/// `cos(π s)` only approximately, the rule is exact for constant fields at any degree and
/// increasingly accurate for smooth fields.
#[derive(Clone)]
pub struct Disk<T: Real> {
    radius: RadiusFn<T>,
    weights: Vec<T>,
    // sin(π s_q) and cos(π s_q) for each Gauss point s_q
    sin_cos: Vec<(T, T)>,
}

impl<T: Real> Debug for Disk<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disk")
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}

impl<T: Real> Disk<T> {
    /// Creates a disk with a `degree`-point Gauss rule along the circle.
    ///
    /// Fails if a constant radius is not positive or if `degree` is zero.
    #[replace_float_literals(T::from_f64(literal).unwrap())]
    pub fn new(radius: impl Into<Radius<T>>, degree: usize) -> Result<Self, ConfigurationError> {
        let radius = RadiusFn::resolve(radius.into())?;
        let (weights, points) = gauss::<T>(degree)?;
        let weights = weights.into_iter().map(|w| 0.5 * w).collect();
        let sin_cos = points
            .iter()
            .map(|s| {
                let theta = T::pi() * s.x;
                (theta.sin(), theta.cos())
            })
            .collect();
        debug!("Constructed disk cross-section with {} quadrature points", degree);
        Ok(Self {
            radius,
            weights,
            sin_cos,
        })
    }
}

/// Samples a [`Disk`] in a fixed orientation.
#[derive(Debug, Clone)]
pub struct DiskSampler<'a, T: Real> {
    disk: &'a Disk<T>,
    basis: PlaneBasis<T>,
}

impl<'a, T: Real> DiskSampler<'a, T> {
    /// The in-plane basis `(t1, t2)` that orients the circle.
    pub fn basis(&self) -> &PlaneBasis<T> {
        &self.basis
    }
}

impl<T: Real> CrossSection<T> for Disk<T> {
    type Sampler<'a> = DiskSampler<'a, T>;

    fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Fails with [`ConfigurationError::DegenerateNormal`] if the normal is zero or if its three
    /// components are equal, in which case the in-plane basis cannot be formed.
    fn points(&self, normal: &Vector3<T>) -> Result<DiskSampler<'_, T>, ShapeError> {
        let normal = unit_normal(normal)?;
        let basis = PlaneBasis::from_normal(&normal).ok_or(ConfigurationError::DegenerateNormal)?;
        trace!("Oriented disk cross-section with basis {:?}", basis);
        Ok(DiskSampler { disk: self, basis })
    }
}

impl<'a, T: Real> SectionSampler<T> for DiskSampler<'a, T> {
    fn num_points(&self) -> usize {
        self.disk.sin_cos.len()
    }

    fn populate_points(&self, x0: &Point3<T>, points: &mut [Point3<T>]) -> Result<(), ShapeError> {
        assert_buffer_len(points, self.num_points());
        let r = self.disk.radius.evaluate(x0)?;
        for (x, &(sin, cos)) in points.iter_mut().zip(&self.disk.sin_cos) {
            *x = x0 + self.basis.combine(r * sin, r * cos);
        }
        Ok(())
    }
}
