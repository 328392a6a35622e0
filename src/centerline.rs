//! Shape parameters that may vary along the centerline.
//!
//! A cross-section's size is given either as a constant or as a function of the centerline
//! point `x0`. Both forms are resolved once, at construction, into a [`CenterlineFn`], so that
//! sampling never has to distinguish between them.
use crate::nalgebra::Point3;
use crate::{ConfigurationError, DomainError, Real};
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A function of the centerline point.
pub type CenterlineFn<T, U> = Arc<dyn Fn(&Point3<T>) -> U + Send + Sync>;

/// Radius of a disk or ball.
#[derive(Clone)]
pub enum Radius<T: Real> {
    Constant(T),
    Variable(CenterlineFn<T, T>),
}

impl<T: Real> Radius<T> {
    /// A radius given by a function of the centerline point, e.g. a vessel that narrows.
    pub fn variable<F>(f: F) -> Self
    where
        F: Fn(&Point3<T>) -> T + Send + Sync + 'static,
    {
        Self::Variable(Arc::new(f))
    }
}

impl<T: Real> From<T> for Radius<T> {
    fn from(radius: T) -> Self {
        Self::Constant(radius)
    }
}

impl<T: Real> Debug for Radius<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(r) => f.debug_tuple("Constant").field(r).finish(),
            Self::Variable(_) => f.write_str("Variable(..)"),
        }
    }
}

/// Position of the reference corner of a square, as an absolute point.
#[derive(Clone)]
pub enum Corner<T: Real> {
    Fixed(Point3<T>),
    Variable(CenterlineFn<T, Point3<T>>),
}

impl<T: Real> Corner<T> {
    /// A corner given by a function of the centerline point, e.g. a square twisting along the
    /// centerline.
    pub fn variable<F>(f: F) -> Self
    where
        F: Fn(&Point3<T>) -> Point3<T> + Send + Sync + 'static,
    {
        Self::Variable(Arc::new(f))
    }
}

impl<T: Real> From<Point3<T>> for Corner<T> {
    fn from(corner: Point3<T>) -> Self {
        Self::Fixed(corner)
    }
}

impl<T: Real> From<[T; 3]> for Corner<T> {
    fn from(corner: [T; 3]) -> Self {
        Self::Fixed(Point3::from(corner))
    }
}

impl<T: Real> Debug for Corner<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(p) => f.debug_tuple("Fixed").field(p).finish(),
            Self::Variable(_) => f.write_str("Variable(..)"),
        }
    }
}

/// A [`Radius`] resolved into a uniform function with validated output.
#[derive(Clone)]
pub(crate) struct RadiusFn<T: Real>(CenterlineFn<T, T>);

impl<T: Real> RadiusFn<T> {
    pub fn resolve(radius: Radius<T>) -> Result<Self, ConfigurationError> {
        match radius {
            Radius::Constant(r) if r.is_finite() && r > T::zero() => Ok(Self(Arc::new(move |_: &Point3<T>| r))),
            Radius::Constant(_) => Err(ConfigurationError::NonPositiveRadius),
            Radius::Variable(f) => Ok(Self(f)),
        }
    }

    pub fn evaluate(&self, x0: &Point3<T>) -> Result<T, DomainError> {
        let r = (self.0)(x0);
        if r.is_finite() && r >= T::zero() {
            Ok(r)
        } else {
            Err(DomainError::InvalidRadius)
        }
    }
}

/// A [`Corner`] resolved into a uniform function with validated output.
#[derive(Clone)]
pub(crate) struct CornerFn<T: Real>(CenterlineFn<T, Point3<T>>);

impl<T: Real> CornerFn<T> {
    pub fn resolve(corner: Corner<T>) -> Result<Self, ConfigurationError> {
        match corner {
            Corner::Fixed(p) if is_finite_point(&p) => Ok(Self(Arc::new(move |_: &Point3<T>| p))),
            Corner::Fixed(_) => Err(ConfigurationError::NonFiniteCorner),
            Corner::Variable(f) => Ok(Self(f)),
        }
    }

    pub fn evaluate(&self, x0: &Point3<T>) -> Result<Point3<T>, DomainError> {
        let p = (self.0)(x0);
        if is_finite_point(&p) {
            Ok(p)
        } else {
            Err(DomainError::NonFiniteCorner)
        }
    }
}

fn is_finite_point<T: Real>(p: &Point3<T>) -> bool {
    p.iter().all(|p_i| p_i.is_finite())
}
