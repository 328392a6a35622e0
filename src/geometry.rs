//! Small geometric helpers for orienting cross-sections in space.
use crate::nalgebra::{Point3, Unit, UnitVector3, Vector3};
use crate::Real;
use numeric_literals::replace_float_literals;

/// Normalizes `v`, returning `None` if it is zero or has non-finite entries.
pub fn normalize<T: Real>(v: &Vector3<T>) -> Option<UnitVector3<T>> {
    if v.iter().all(|v_i| v_i.is_finite()) {
        Unit::try_new(*v, T::zero())
    } else {
        None
    }
}

/// The vector `(n_1 - n_2, n_2 - n_0, n_0 - n_1)`, which is always orthogonal to `n`.
///
/// It vanishes exactly when all components of `n` are equal.
pub fn cyclic_difference_vector<T: Real>(n: &Vector3<T>) -> Vector3<T> {
    Vector3::new(n.y - n.z, n.z - n.x, n.x - n.y)
}

/// An orthonormal basis `(t1, t2)` of the plane orthogonal to a normal `n`.
///
/// The frame `(t1, t2, n)` is right-handed, i.e. `t2 = n × t1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneBasis<T: Real> {
    t1: UnitVector3<T>,
    t2: UnitVector3<T>,
}

impl<T: Real> PlaneBasis<T> {
    /// Constructs the basis deterministically from the normal.
    ///
    /// `t1` is the normalized [cyclic difference vector](cyclic_difference_vector) of `normal`
    /// and `t2` the normalized `normal × t1`. Returns `None` when `normal` has three equal
    /// components, since `t1` then collapses to zero. The returned basis does not depend on the
    /// length of `normal`.
    pub fn from_normal(normal: &UnitVector3<T>) -> Option<Self> {
        // For a unit normal the difference vector has length at most sqrt(3), so anything at
        // round-off level means the components were equal up to noise
        let t1 = Unit::try_new(cyclic_difference_vector(normal), T::default_epsilon())?;
        let t2 = normalize(&normal.cross(t1.as_ref()))?;
        Some(Self { t1, t2 })
    }

    pub fn t1(&self) -> &UnitVector3<T> {
        &self.t1
    }

    pub fn t2(&self) -> &UnitVector3<T> {
        &self.t2
    }

    /// The in-plane vector `a t1 + b t2`.
    pub fn combine(&self, a: T, b: T) -> Vector3<T> {
        self.t1.scale(a) + self.t2.scale(b)
    }
}

/// Rotates `v` about `axis` by the angle whose cosine and sine are given.
///
/// This is Rodrigues' rotation formula
/// `v cos θ + (axis × v) sin θ + axis (axis · v)(1 - cos θ)`.
/// Taking `cos` and `sin` directly allows exact quarter turns.
#[replace_float_literals(T::from_f64(literal).unwrap())]
pub fn rotate_about_axis_with<T: Real>(v: &Vector3<T>, axis: &UnitVector3<T>, cos: T, sin: T) -> Vector3<T> {
    v * cos + axis.cross(v) * sin + axis.scale(axis.dot(v) * (1.0 - cos))
}

/// Rotates `v` about `axis` by `angle` (in radians), counterclockwise when viewed from the tip
/// of `axis`.
pub fn rotate_about_axis<T: Real>(v: &Vector3<T>, axis: &UnitVector3<T>, angle: T) -> Vector3<T> {
    rotate_about_axis_with(v, axis, angle.cos(), angle.sin())
}

/// Cosine and sine of 0°, 90°, 180° and 270°.
const QUARTER_TURNS: [(f64, f64); 4] = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];

/// Corners of the square centered at `center` with one corner at `corner`, in the plane through
/// `corner` orthogonal to `axis`.
///
/// The corners are returned as `(P, P_90, P_180, P_270)`, obtained by successive quarter turns of
/// `corner - center` about `axis`. If `corner - center` has a component along `axis`, the square
/// is lifted by that component but remains orthogonal to `axis`.
pub fn square_corners<T: Real>(center: &Point3<T>, axis: &UnitVector3<T>, corner: &Point3<T>) -> [Point3<T>; 4] {
    let v = corner - center;
    QUARTER_TURNS.map(|(cos, sin)| {
        let (cos, sin) = (nalgebra::convert(cos), nalgebra::convert(sin));
        center + rotate_about_axis_with(&v, axis, cos, sin)
    })
}

/// Maps `s` in `[-1, 1]` affinely onto the segment from `a` to `b`.
///
/// Computes `0.5 a (1 - s) + 0.5 b (1 + s)`.
#[replace_float_literals(T::from_f64(literal).unwrap())]
pub fn edge_point<T: Real>(a: &Point3<T>, b: &Point3<T>, s: T) -> Point3<T> {
    Point3::from(a.coords * (0.5 * (1.0 - s)) + b.coords * (0.5 * (1.0 + s)))
}
