use nalgebra::{Point3, Vector3};
use shape_average::shape::{CrossSection, SectionSampler};

mod square;

/// Approximates the average of `f` over `shape`, placed at `x0` with orientation `normal`.
pub fn shape_average<S>(shape: &S, normal: &Vector3<f64>, x0: &Point3<f64>, f: impl Fn(&Point3<f64>) -> f64) -> f64
where
    S: CrossSection<f64>,
{
    let points = shape
        .points(normal)
        .and_then(|sampler| sampler.points(x0))
        .expect("sampling must succeed");
    let weighted_sum: f64 = shape
        .weights()
        .iter()
        .zip(&points)
        .map(|(w, x)| w * f(x))
        .sum();
    weighted_sum / shape.length(normal, x0)
}
