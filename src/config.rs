//! Serializable description of a cross-section.
//!
//! Drivers that read their setup from a file can deserialize a [`ShapeConfig`] and build the
//! corresponding [`AnyShape`]. Only constant radii and corners can be described this way;
//! position-dependent shapes must be constructed in code.
//!
//! ```
//! use shape_average::config::ShapeConfig;
//! use shape_average::shape::CrossSection;
//!
//! let config = ShapeConfig::Ball { radius: 0.1, degree: 7 };
//! let ball = config.build::<f64>().unwrap();
//! assert_eq!(ball.num_points(), 26);
//! ```
use crate::nalgebra::{convert, Point3};
use crate::shape::{AnyShape, Ball, Disk, Square};
use crate::{ConfigurationError, Real};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeConfig {
    Disk { radius: f64, degree: usize },
    Ball { radius: f64, degree: usize },
    Square { corner: [f64; 3], degree: usize },
}

impl ShapeConfig {
    pub fn degree(&self) -> usize {
        match self {
            Self::Disk { degree, .. } | Self::Ball { degree, .. } | Self::Square { degree, .. } => *degree,
        }
    }

    /// Builds the described cross-section.
    pub fn build<T: Real>(&self) -> Result<AnyShape<T>, ConfigurationError> {
        let shape = match *self {
            Self::Disk { radius, degree } => Disk::new(convert::<f64, T>(radius), degree)?.into(),
            Self::Ball { radius, degree } => Ball::new(convert::<f64, T>(radius), degree)?.into(),
            Self::Square { corner, degree } => {
                let corner: Point3<T> = convert(Point3::from(corner));
                Square::new(corner, degree)?.into()
            }
        };
        Ok(shape)
    }
}
