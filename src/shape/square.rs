use super::{assert_buffer_len, unit_normal, CrossSection, SectionSampler};
use crate::centerline::{Corner, CornerFn};
use crate::geometry::{edge_point, square_corners};
use crate::nalgebra::{Point3, UnitVector3, Vector3};
use crate::quadrature::gauss;
use crate::{ConfigurationError, Real, ShapeError};
use itertools::Itertools;
use log::{debug, trace};
use numeric_literals::replace_float_literals;
use std::fmt;
use std::fmt::{Debug, Formatter};

const NUM_EDGES: usize = 4;

/// Perimeter of a square in the plane orthogonal to the normal, centered at `x0`.
///
/// The square is determined by the absolute position `P(x0)` of one of its corners. The other
/// corners follow from quarter turns of `P - x0` about the normal, giving the corners
/// `(P, P_90, P_180, P_270)`. Each edge `[A, B]` is sampled with a Gauss rule mapped from
/// `[-1, 1]` by `s -> 0.5 A (1 - s) + 0.5 B (1 + s)`. Since all edges have the same length `e`,
///
/// ```text
/// 1/(4e) ∫_∂S f dl  =  1/4 sum_edges 1/e ∫_edge f dl  =  1/4 sum_edges sum_q (w_q / 2) f(x_q)
/// ```
///
/// so the weights are the Gauss weights scaled by `1/8`, repeated once per edge. Points and
/// weights are grouped contiguously by edge, in corner order.
#[derive(Clone)]
pub struct Square<T: Real> {
    corner: CornerFn<T>,
    weights: Vec<T>,
    // Gauss points on [-1, 1], shared by all edges
    edge_points: Vec<T>,
}

impl<T: Real> Debug for Square<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Square")
            .field("weights", &self.weights)
            .field("edge_points", &self.edge_points)
            .finish_non_exhaustive()
    }
}

impl<T: Real> Square<T> {
    /// Creates a square with a `degree`-point Gauss rule on each of its four edges.
    ///
    /// Fails if a fixed corner is not finite or if `degree` is zero.
    #[replace_float_literals(T::from_f64(literal).unwrap())]
    pub fn new(corner: impl Into<Corner<T>>, degree: usize) -> Result<Self, ConfigurationError> {
        let corner = CornerFn::resolve(corner.into())?;
        let (edge_weights, edge_points) = gauss::<T>(degree)?;
        let scale = 0.5 / 4.0;
        let weights = (0..NUM_EDGES)
            .flat_map(|_| edge_weights.iter().map(move |&w| scale * w))
            .collect();
        debug!(
            "Constructed square cross-section with {} quadrature points per edge",
            degree
        );
        Ok(Self {
            corner,
            weights,
            edge_points: edge_points.into_iter().map(|s| s.x).collect(),
        })
    }

    /// Corners of the square at the centerline point `x0`, oriented by the unit normal `axis`.
    ///
    /// If `P(x0) - x0` is parallel to `axis` (in particular if `P(x0) = x0`), the square has zero
    /// size and all four corners coincide with `P(x0)`, just as a zero radius collapses a disk.
    pub fn corners(&self, axis: &UnitVector3<T>, x0: &Point3<T>) -> Result<[Point3<T>; 4], ShapeError> {
        let p = self.corner.evaluate(x0)?;
        Ok(square_corners(x0, axis, &p))
    }
}

/// Samples a [`Square`] in a fixed orientation.
#[derive(Debug, Clone)]
pub struct SquareSampler<'a, T: Real> {
    square: &'a Square<T>,
    axis: UnitVector3<T>,
}

impl<'a, T: Real> SquareSampler<'a, T> {
    /// The normalized normal the square is rotated about.
    pub fn axis(&self) -> &UnitVector3<T> {
        &self.axis
    }

    pub fn corners(&self, x0: &Point3<T>) -> Result<[Point3<T>; 4], ShapeError> {
        self.square.corners(&self.axis, x0)
    }
}

impl<T: Real> CrossSection<T> for Square<T> {
    type Sampler<'a> = SquareSampler<'a, T>;

    fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Fails with [`ConfigurationError::DegenerateNormal`] if the normal is
    /// zero or not finite.
    fn points(&self, normal: &Vector3<T>) -> Result<SquareSampler<'_, T>, ShapeError> {
        let axis = unit_normal(normal)?;
        trace!("Oriented square cross-section about axis {:?}", axis);
        Ok(SquareSampler { square: self, axis })
    }
}

impl<'a, T: Real> SectionSampler<T> for SquareSampler<'a, T> {
    fn num_points(&self) -> usize {
        NUM_EDGES * self.square.edge_points.len()
    }

    fn populate_points(&self, x0: &Point3<T>, points: &mut [Point3<T>]) -> Result<(), ShapeError> {
        assert_buffer_len(points, self.num_points());
        let corners = self.corners(x0)?;
        let edge_points = &self.square.edge_points;
        let edges = corners.iter().circular_tuple_windows::<(_, _)>();
        for ((a, b), edge_output) in edges.zip(points.chunks_exact_mut(edge_points.len())) {
            for (x, &s) in edge_output.iter_mut().zip(edge_points) {
                *x = edge_point(a, b, s);
            }
        }
        Ok(())
    }
}
