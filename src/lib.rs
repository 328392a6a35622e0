//! Quadrature rules for averaging three-dimensional fields over cross-sections.
//!
//! A cross-section is a small shape (a disk, a sphere or the perimeter of a square) attached to
//! a point `x0` on a one-dimensional centerline and oriented by the centerline direction `n`.
//! Each shape produces weights and sample points such that
//!
//! ```text
//! sum_q w_q f(x_q)  ≈  (1 / |S|) ∫_S f
//! ```
//!
//! which is what 3D-1D coupled discretizations need to collapse a 3D field onto a curve.
//! The library does not evaluate fields or integrate anything; it only produces the rules.
//!
//! ```
//! use shape_average::nalgebra::{Point3, Vector3};
//! use shape_average::shape::{CrossSection, Disk, SectionSampler};
//!
//! let disk = Disk::<f64>::new(0.25, 8).unwrap();
//! let sampler = disk.points(&Vector3::z()).unwrap();
//! let points = sampler.points(&Point3::origin()).unwrap();
//! let average: f64 = disk
//!     .weights()
//!     .iter()
//!     .zip(&points)
//!     .map(|(w, x)| w * (x.x * x.x + x.y * x.y))
//!     .sum();
//! assert!((average - 0.25 * 0.25).abs() < 1e-12);
//! ```
use nalgebra::RealField;

pub mod centerline;
pub mod config;
pub mod error;
pub mod geometry;
pub mod quadrature;
pub mod shape;

#[cfg(feature = "proptest-support")]
pub mod proptest;

pub use error::{ConfigurationError, DomainError, ShapeError};

pub extern crate nalgebra;

/// Scalar type used throughout the library.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}
