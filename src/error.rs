//! Errors raised when building or sampling cross-sections.
use std::fmt;
use std::fmt::{Display, Formatter};

/// A cross-section was configured with parameters that cannot describe a valid shape.
///
/// Raised at construction, or by `points(normal)` when the normal cannot orient the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// A constant radius was zero, negative or not finite.
    NonPositiveRadius,
    /// A constant corner position had non-finite coordinates.
    NonFiniteCorner,
    /// A quadrature with zero points was requested.
    ZeroDegree,
    /// No tabulated spherical rule exists for the requested degree.
    UnsupportedBallDegree { degree: usize, supported: Vec<usize> },
    /// The normal is zero, not finite, or cannot span a plane basis.
    DegenerateNormal,
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRadius => write!(f, "radius must be finite and positive"),
            Self::NonFiniteCorner => write!(f, "corner position must be finite"),
            Self::ZeroDegree => write!(f, "quadrature degree must be positive"),
            Self::UnsupportedBallDegree { degree, supported } => {
                write!(
                    f,
                    "no spherical quadrature rule of degree {degree} is available (supported degrees: {supported:?})"
                )
            }
            Self::DegenerateNormal => write!(f, "normal vector does not determine a plane"),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// A position-dependent radius or corner produced an invalid value at a centerline point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DomainError {
    /// The radius function returned a negative or non-finite value.
    InvalidRadius,
    /// The corner function returned a point with non-finite coordinates.
    NonFiniteCorner,
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius => write!(f, "radius function returned a negative or non-finite radius"),
            Self::NonFiniteCorner => write!(f, "corner function returned a non-finite position"),
        }
    }
}

impl std::error::Error for DomainError {}

/// Library-wide error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    Configuration(ConfigurationError),
    Domain(DomainError),
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "invalid cross-section configuration: {err}"),
            Self::Domain(err) => write!(f, "cross-section evaluation failed: {err}"),
        }
    }
}

impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::Domain(err) => Some(err),
        }
    }
}

impl From<ConfigurationError> for ShapeError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

impl From<DomainError> for ShapeError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}
