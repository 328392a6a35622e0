//! Strategies for property-based testing of cross-sections.
use crate::geometry::cyclic_difference_vector;
use crate::nalgebra::{Point3, UnitVector3, Vector3};
use ::proptest::prelude::*;
use std::f64::consts::PI;

pub fn point3() -> impl Strategy<Value = Point3<f64>> {
    // Pick a reasonably small range to pick coordinates from,
    // otherwise we can easily get floating point numbers that are
    // so ridiculously large as to break anything we might want to do with them
    let range = -10.0..10.0;
    [range.clone(), range.clone(), range].prop_map(|[x, y, z]| Point3::new(x, y, z))
}

pub fn unit_vector3() -> impl Strategy<Value = UnitVector3<f64>> {
    // Spherical coordinates on the unit sphere
    (0.0..PI, 0.0..2.0 * PI).prop_map(|(theta, phi)| {
        let x = phi.cos() * theta.sin();
        let y = phi.sin() * theta.sin();
        let z = theta.cos();
        UnitVector3::new_normalize(Vector3::new(x, y, z))
    })
}

/// Normals of varying length that are not too close to the diagonal directions `±(1, 1, 1)`,
/// for which the disk's in-plane basis is undefined.
pub fn normal3() -> impl Strategy<Value = Vector3<f64>> {
    (unit_vector3(), 0.1..10.0)
        .prop_filter("normal must not be (close to) diagonal", |(n, _)| {
            cyclic_difference_vector(n.as_ref()).norm() > 1e-3
        })
        .prop_map(|(n, length)| n.into_inner() * length)
}

/// Radii spanning a few orders of magnitude.
pub fn radius() -> impl Strategy<Value = f64> {
    (-3.0..1.0f64).prop_map(|exponent| 10.0f64.powf(exponent))
}
