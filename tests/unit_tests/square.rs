use crate::unit_tests::shape_average;
use matrixcompare::{assert_matrix_eq, assert_scalar_eq, prop_assert_matrix_eq, prop_assert_scalar_eq};
use nalgebra::{Point3, UnitVector3, Vector3};
use proptest::prelude::*;
use shape_average::centerline::Corner;
use shape_average::proptest::{point3, unit_vector3};
use shape_average::shape::{CrossSection, SectionSampler, Square};
use shape_average::{ConfigurationError, DomainError, ShapeError};
use std::f64::consts::FRAC_PI_2;

#[test]
fn square_corners_of_unit_square_in_xy_plane() {
    let square = Square::<f64>::new(Point3::new(1.0, 0.0, 0.0), 2).unwrap();
    let corners = square
        .points(&Vector3::z())
        .unwrap()
        .corners(&Point3::origin())
        .unwrap();

    let expected = [
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(0.0, -1.0, 0.0),
    ];
    for (corner, expected) in corners.iter().zip(&expected) {
        assert_matrix_eq!(corner.coords, expected.coords, comp = abs, tol = 1e-15);
    }
}

#[test]
fn square_weights_are_tiled_scaled_gauss_weights() {
    let degree = 3;
    let square = Square::<f64>::new([0.0, 1.0, 0.0], degree).unwrap();
    let (gauss_weights, _) = shape_average_quadrature::univariate::gauss(degree);

    assert_eq!(square.weights().len(), 4 * degree);
    for edge_weights in square.weights().chunks_exact(degree) {
        for (w, w_gauss) in edge_weights.iter().zip(&gauss_weights) {
            assert_scalar_eq!(*w, w_gauss / 8.0, comp = abs, tol = 1e-15);
        }
    }
    assert_scalar_eq!(square.weights().iter().sum::<f64>(), 1.0, comp = abs, tol = 1e-14);
    assert_eq!(square.length(&Vector3::z(), &Point3::origin()), 1.0);
}

#[test]
fn square_points_are_grouped_by_edge() {
    let degree = 5;
    let square = Square::<f64>::new(Point3::new(2.0, 1.0, 3.0), degree).unwrap();
    let x0 = Point3::new(1.0, 1.0, 3.0);
    let sampler = square.points(&Vector3::z()).unwrap();
    let corners = sampler.corners(&x0).unwrap();
    let points = sampler.points(&x0).unwrap();
    assert_eq!(points.len(), 4 * degree);
    assert_eq!(sampler.num_points(), 4 * degree);

    for (i, edge_points) in points.chunks_exact(degree).enumerate() {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        let edge_length = (b - a).norm();
        for x in edge_points {
            // x lies on the segment [a, b]
            let distance_sum = (x - a).norm() + (b - x).norm();
            assert_scalar_eq!(distance_sum, edge_length, comp = abs, tol = 1e-13);
        }
    }
}

#[test]
fn square_averages_linear_and_quadratic_fields() {
    let square = Square::<f64>::new(Point3::new(1.0, 0.0, 0.0), 2).unwrap();
    let n = Vector3::z();
    let x0 = Point3::origin();

    let average = shape_average(&square, &n, &x0, |x| 2.0 * x.x - x.y + 0.5);
    assert_scalar_eq!(average, 0.5, comp = abs, tol = 1e-14);

    // Along each edge x^2 goes from 1 to 0 (or 0 to 1) linearly in x, averaging to 1/3
    let average = shape_average(&square, &n, &x0, |x| x.x * x.x);
    assert_scalar_eq!(average, 1.0 / 3.0, comp = abs, tol = 1e-14);
}

#[test]
fn square_constant_average_is_exact_for_increasing_degree() {
    let normal = Vector3::new(1.0, 2.0, -0.5);
    let x0 = Point3::new(-1.0, 0.0, 1.0);
    for degree in 1..=32 {
        let square = Square::<f64>::new(Point3::new(0.0, 0.0, 0.0), degree).unwrap();
        let average = shape_average(&square, &normal, &x0, |_| -4.0);
        assert_scalar_eq!(average, -4.0, comp = abs, tol = 1e-13);
    }
}

#[test]
fn square_with_twisting_corner() {
    // The square rotates as it moves along the z-axis
    let size = 0.125;
    let corner = Corner::variable(move |x0: &Point3<f64>| {
        let angle = FRAC_PI_2 * x0.z;
        Point3::new(size * angle.cos(), size * angle.sin(), x0.z)
    });
    let square = Square::<f64>::new(corner, 8).unwrap();
    let sampler = square.points(&Vector3::z()).unwrap();

    for z in [0.0, 0.3, 1.0, 1.7] {
        let x0 = Point3::new(0.0, 0.0, z);
        let corners = sampler.corners(&x0).unwrap();
        let angle = FRAC_PI_2 * z;
        assert_matrix_eq!(
            corners[0].coords,
            Vector3::new(size * angle.cos(), size * angle.sin(), z),
            comp = abs,
            tol = 1e-15
        );
        for corner in &corners {
            assert_scalar_eq!((corner - x0).norm(), size, comp = abs, tol = 1e-15);
            assert_scalar_eq!(corner.z, z, comp = abs, tol = 1e-15);
        }
        for x in sampler.points(&x0).unwrap() {
            assert_scalar_eq!(x.z, z, comp = abs, tol = 1e-14);
        }
    }
}

#[test]
fn square_normal_length_does_not_matter() {
    let square = Square::<f64>::new(Point3::new(0.5, 0.5, 0.0), 4).unwrap();
    let x0 = Point3::new(0.0, 0.0, 0.0);
    let points = square.points(&Vector3::new(0.0, 0.0, 1.0)).unwrap().points(&x0).unwrap();
    let scaled_sampler = square.points(&Vector3::new(0.0, 0.0, 7.5)).unwrap();
    assert_matrix_eq!(scaled_sampler.axis().into_inner(), Vector3::z(), comp = abs, tol = 0.0);
    let scaled_points = scaled_sampler.points(&x0).unwrap();
    for (x, y) in points.iter().zip(&scaled_points) {
        assert_matrix_eq!(x.coords, y.coords, comp = abs, tol = 1e-15);
    }
}

#[test]
fn square_rejects_invalid_configuration() {
    assert_eq!(
        Square::<f64>::new([f64::NAN, 0.0, 0.0], 2).err(),
        Some(ConfigurationError::NonFiniteCorner)
    );
    assert_eq!(
        Square::<f64>::new([1.0, 0.0, 0.0], 0).err(),
        Some(ConfigurationError::ZeroDegree)
    );

    let square = Square::<f64>::new([1.0, 0.0, 0.0], 2).unwrap();
    for normal in [Vector3::zeros(), Vector3::new(0.0, f64::INFINITY, 0.0)] {
        assert_eq!(
            square.points(&normal).err(),
            Some(ShapeError::Configuration(ConfigurationError::DegenerateNormal))
        );
    }
}

#[test]
fn square_accepts_diagonal_normal() {
    // Unlike the disk, the square only needs the normal as a rotation axis
    let square = Square::<f64>::new([1.0, 0.0, 0.0], 3).unwrap();
    let normal = Vector3::new(1.0, 1.0, 1.0);
    let average = shape_average(&square, &normal, &Point3::origin(), |_| 1.0);
    assert_scalar_eq!(average, 1.0, comp = abs, tol = 1e-14);
}

#[test]
fn square_collapses_when_corner_is_on_normal_axis() {
    let x0 = Point3::new(0.0, 0.0, 1.0);

    // Corner coincides with the centerline point
    let square = Square::<f64>::new(x0, 2).unwrap();
    let points = square.points(&Vector3::z()).unwrap().points(&x0).unwrap();
    assert_eq!(points.len(), 8);
    for x in points {
        assert_matrix_eq!(x.coords, x0.coords, comp = abs, tol = 1e-14);
    }

    // Corner lies on the normal axis through the centerline point
    let square = Square::<f64>::new([0.0, 0.0, 3.0], 2).unwrap();
    let sampler = square.points(&Vector3::z()).unwrap();
    for corner in sampler.corners(&x0).unwrap() {
        assert_matrix_eq!(corner.coords, Vector3::new(0.0, 0.0, 3.0), comp = abs, tol = 1e-15);
    }
    for x in sampler.points(&x0).unwrap() {
        assert_matrix_eq!(x.coords, Vector3::new(0.0, 0.0, 3.0), comp = abs, tol = 1e-14);
    }
    let average = shape_average(&square, &Vector3::z(), &x0, |x| x.z);
    assert_scalar_eq!(average, 3.0, comp = abs, tol = 1e-14);
}

#[test]
fn square_reports_non_finite_corner() {
    let x0 = Point3::new(0.0, 0.0, 1.0);
    let square = Square::<f64>::new(Corner::variable(|_: &Point3<f64>| Point3::new(f64::NAN, 0.0, 0.0)), 2).unwrap();
    let sampler = square.points(&Vector3::z()).unwrap();
    assert_eq!(
        sampler.points(&x0).err(),
        Some(ShapeError::Domain(DomainError::NonFiniteCorner))
    );
}

fn in_plane_corner() -> impl Strategy<Value = (UnitVector3<f64>, Point3<f64>, Point3<f64>)> {
    // A normal, a centerline point and a corner whose offset is orthogonal to the normal
    (unit_vector3(), point3(), unit_vector3(), 0.1..5.0).prop_filter_map(
        "offset must not be parallel to the normal",
        |(n, x0, direction, distance)| {
            let offset = direction.into_inner() - n.scale(n.dot(direction.as_ref()));
            let norm = offset.norm();
            (norm > 1e-3).then(|| (n, x0, x0 + offset * (distance / norm)))
        },
    )
}

proptest! {
    #[test]
    fn square_corners_form_a_square((n, x0, p) in in_plane_corner()) {
        let square = Square::<f64>::new(p, 2).unwrap();
        let corners = square.points(&n).unwrap().corners(&x0).unwrap();
        prop_assert_matrix_eq!(corners[0].coords, p.coords, comp = abs, tol = 1e-12);

        let side = (corners[1] - corners[0]).norm();
        let diagonal = (p - x0).norm();
        prop_assert_scalar_eq!(side, diagonal * 2.0f64.sqrt(), comp = abs, tol = 1e-10);

        for i in 0..4 {
            let a = corners[i];
            let b = corners[(i + 1) % 4];
            let c = corners[(i + 2) % 4];
            let ab = b - a;
            let bc = c - b;
            // Equal sides, right angles, and every side orthogonal to the normal
            prop_assert_scalar_eq!(ab.norm(), side, comp = abs, tol = 1e-10);
            prop_assert_scalar_eq!(ab.dot(&bc), 0.0, comp = abs, tol = 1e-10);
            prop_assert_scalar_eq!(n.dot(&ab), 0.0, comp = abs, tol = 1e-10);
            // Every corner is in the plane through x0 orthogonal to n
            prop_assert_scalar_eq!(n.dot(&(a - x0)), 0.0, comp = abs, tol = 1e-10);
        }

        // Opposite corners are reflections through the center
        prop_assert_matrix_eq!((corners[0] - x0) + (corners[2] - x0), Vector3::zeros(), comp = abs, tol = 1e-10);
        prop_assert_matrix_eq!((corners[1] - x0) + (corners[3] - x0), Vector3::zeros(), comp = abs, tol = 1e-10);
    }

    #[test]
    fn square_constant_average_is_exact(
        (n, x0, p) in in_plane_corner(),
        degree in 1..20usize,
        c in -10.0..10.0
    ) {
        let square = Square::<f64>::new(p, degree).unwrap();
        let average = shape_average(&square, &n, &x0, |_| c);
        prop_assert_scalar_eq!(average, c, comp = abs, tol = 1e-12);
    }

    #[test]
    fn square_average_of_linear_field_is_value_at_center(
        (n, x0, p) in in_plane_corner(),
        a in [-1.0..1.0, -1.0..1.0, -1.0..1.0]
    ) {
        let a = Vector3::from(a);
        let square = Square::<f64>::new(p, 1).unwrap();
        let average = shape_average(&square, &n, &x0, |x| a.dot(&x.coords));
        prop_assert_scalar_eq!(average, a.dot(&x0.coords), comp = abs, tol = 1e-10);
    }
}
