//! Cross-sections and the contract through which they produce quadrature.
//!
//! Every shape is configured once with a size and a quadrature degree, and afterwards produces
//! sample points for any orientation `n` and centerline point `x0`:
//!
//! - [`CrossSection::weights`] are fixed at construction.
//! - [`CrossSection::points`] prepares the orientation-dependent state for a normal `n` and
//!   returns a [`SectionSampler`], which maps centerline points `x0` to sample points.
//! - [`CrossSection::length`] is the normalization divisor of the average.
//!
//! All shapes in this module are *self-normalizing*: their weights sum to one, so
//! `sum_q w_q f(x_q)` is the average of `f` over the shape and [`CrossSection::length`] is always
//! one. Dividing by `length` is therefore always valid, but never necessary.
use crate::geometry::normalize;
use crate::nalgebra::{Point3, UnitVector3, Vector3};
use crate::{ConfigurationError, Real, ShapeError};

mod ball;
mod disk;
mod square;

pub use ball::{Ball, BallSampler};
pub use disk::{Disk, DiskSampler};
pub use square::{Square, SquareSampler};

/// A shape that generates quadrature for averaging over a cross-section of a centerline.
pub trait CrossSection<T: Real> {
    type Sampler<'a>: SectionSampler<T>
    where
        Self: 'a;

    /// Quadrature weights, one per sample point.
    fn weights(&self) -> &[T];

    /// Prepares sampling of the shape in the orientation given by `normal`.
    ///
    /// The normal does not need to have unit length.
    fn points(&self, normal: &Vector3<T>) -> Result<Self::Sampler<'_>, ShapeError>;

    /// Normalization divisor for the weighted sum at the centerline point `x0`.
    #[allow(unused_variables)]
    fn length(&self, normal: &Vector3<T>, x0: &Point3<T>) -> T {
        T::one()
    }

    /// Number of sample points, which equals the number of weights.
    fn num_points(&self) -> usize {
        self.weights().len()
    }
}

/// Maps centerline points to the sample points of an oriented cross-section.
pub trait SectionSampler<T: Real> {
    fn num_points(&self) -> usize;

    /// Writes the sample points of the cross-section centered at `x0` into `points`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `points.len() != self.num_points()`.
    fn populate_points(&self, x0: &Point3<T>, points: &mut [Point3<T>]) -> Result<(), ShapeError>;

    /// Returns the sample points of the cross-section centered at `x0`.
    fn points(&self, x0: &Point3<T>) -> Result<Vec<Point3<T>>, ShapeError> {
        let mut points = vec![Point3::origin(); self.num_points()];
        self.populate_points(x0, &mut points)?;
        Ok(points)
    }
}

/// A cross-section chosen at run time.
#[derive(Debug, Clone)]
pub enum AnyShape<T: Real> {
    Disk(Disk<T>),
    Ball(Ball<T>),
    Square(Square<T>),
}

impl<T: Real> From<Disk<T>> for AnyShape<T> {
    fn from(disk: Disk<T>) -> Self {
        Self::Disk(disk)
    }
}

impl<T: Real> From<Ball<T>> for AnyShape<T> {
    fn from(ball: Ball<T>) -> Self {
        Self::Ball(ball)
    }
}

impl<T: Real> From<Square<T>> for AnyShape<T> {
    fn from(square: Square<T>) -> Self {
        Self::Square(square)
    }
}

/// Sampler produced by [`AnyShape`].
#[derive(Debug, Clone)]
pub enum AnySampler<'a, T: Real> {
    Disk(DiskSampler<'a, T>),
    Ball(BallSampler<'a, T>),
    Square(SquareSampler<'a, T>),
}

impl<T: Real> CrossSection<T> for AnyShape<T> {
    type Sampler<'a> = AnySampler<'a, T>;

    fn weights(&self) -> &[T] {
        match self {
            Self::Disk(disk) => disk.weights(),
            Self::Ball(ball) => ball.weights(),
            Self::Square(square) => square.weights(),
        }
    }

    fn points(&self, normal: &Vector3<T>) -> Result<AnySampler<'_, T>, ShapeError> {
        Ok(match self {
            Self::Disk(disk) => AnySampler::Disk(disk.points(normal)?),
            Self::Ball(ball) => AnySampler::Ball(ball.points(normal)?),
            Self::Square(square) => AnySampler::Square(square.points(normal)?),
        })
    }

    fn length(&self, normal: &Vector3<T>, x0: &Point3<T>) -> T {
        match self {
            Self::Disk(disk) => disk.length(normal, x0),
            Self::Ball(ball) => ball.length(normal, x0),
            Self::Square(square) => square.length(normal, x0),
        }
    }
}

impl<'a, T: Real> SectionSampler<T> for AnySampler<'a, T> {
    fn num_points(&self) -> usize {
        match self {
            Self::Disk(sampler) => sampler.num_points(),
            Self::Ball(sampler) => sampler.num_points(),
            Self::Square(sampler) => sampler.num_points(),
        }
    }

    fn populate_points(&self, x0: &Point3<T>, points: &mut [Point3<T>]) -> Result<(), ShapeError> {
        match self {
            Self::Disk(sampler) => sampler.populate_points(x0, points),
            Self::Ball(sampler) => sampler.populate_points(x0, points),
            Self::Square(sampler) => sampler.populate_points(x0, points),
        }
    }
}

/// Checks that a caller-provided output buffer has room for exactly `expected` points.
fn assert_buffer_len<T>(points: &[T], expected: usize) {
    assert_eq!(
        points.len(),
        expected,
        "output buffer must have room for exactly one entry per sample point"
    );
}

/// Normalizes the orientation of a planar cross-section.
fn unit_normal<T: Real>(normal: &Vector3<T>) -> Result<UnitVector3<T>, ConfigurationError> {
    normalize(normal).ok_or(ConfigurationError::DegenerateNormal)
}
