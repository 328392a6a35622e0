//! Lebedev rules for averaging over the unit sphere.
//!
//! Lebedev rules are invariant under the octahedral rotation group with inversion, so each rule
//! is tabulated as a short list of generators. Every generator expands to an orbit of points
//! that all share one weight. The weights of every rule sum to `1`, so integrating with a rule
//! gives the *average* over the sphere rather than the surface integral.
//!
//! Reference: V. I. Lebedev, "Quadratures on a sphere", USSR Computational Mathematics and
//! Mathematical Physics 16 (1976).

use crate::{Error, Point3, Rule3d};

/// Generator of a single octahedral orbit on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Orbit {
    /// The 6 points `(±1, 0, 0)` and permutations.
    A1,
    /// The 12 points `(0, ±a, ±a)` and permutations, with `a = 1/√2`.
    A2,
    /// The 8 points `(±a, ±a, ±a)` with `a = 1/√3`.
    A3,
    /// The 24 points `(±l, ±l, ±m)` and permutations, with `m = √(1 - 2l²)`.
    B(f64),
    /// The 24 points `(±p, ±q, 0)` and permutations, with `q = √(1 - p²)`.
    C(f64),
}

impl Orbit {
    fn size(&self) -> usize {
        match self {
            Orbit::A1 => 6,
            Orbit::A2 => 12,
            Orbit::A3 => 8,
            Orbit::B(_) | Orbit::C(_) => 24,
        }
    }

    fn expand_into(&self, points: &mut Vec<Point3>) {
        const SIGNS: [f64; 2] = [1.0, -1.0];
        match *self {
            Orbit::A1 => {
                for axis in 0..3 {
                    for s in SIGNS {
                        let mut x = [0.0; 3];
                        x[axis] = s;
                        points.push(x);
                    }
                }
            }
            Orbit::A2 => {
                let a = 0.5f64.sqrt();
                for zero_axis in 0..3 {
                    for s1 in SIGNS {
                        for s2 in SIGNS {
                            points.push(place_with_zero(zero_axis, s1 * a, s2 * a));
                        }
                    }
                }
            }
            Orbit::A3 => {
                let a = (1.0f64 / 3.0).sqrt();
                for s1 in SIGNS {
                    for s2 in SIGNS {
                        for s3 in SIGNS {
                            points.push([s1 * a, s2 * a, s3 * a]);
                        }
                    }
                }
            }
            Orbit::B(l) => {
                let m = (1.0 - 2.0 * l * l).sqrt();
                // The coordinate holding `m` determines the permutation
                for m_axis in 0..3 {
                    for s1 in SIGNS {
                        for s2 in SIGNS {
                            for s3 in SIGNS {
                                let mut x = [s1 * l, s2 * l, s3 * l];
                                x[m_axis] = [s1, s2, s3][m_axis] * m;
                                points.push(x);
                            }
                        }
                    }
                }
            }
            Orbit::C(p) => {
                let q = (1.0 - p * p).sqrt();
                for zero_axis in 0..3 {
                    for (a, b) in [(p, q), (q, p)] {
                        for s1 in SIGNS {
                            for s2 in SIGNS {
                                points.push(place_with_zero(zero_axis, s1 * a, s2 * b));
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Builds a point with a zero at `zero_axis` and `a`, `b` in the remaining slots (in order).
fn place_with_zero(zero_axis: usize, a: f64, b: f64) -> Point3 {
    let mut x = [0.0; 3];
    let (i, j) = match zero_axis {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };
    x[i] = a;
    x[j] = b;
    x
}

struct LebedevTable {
    /// Polynomial degree integrated exactly.
    degree: usize,
    orbits: &'static [(Orbit, f64)],
}

impl LebedevTable {
    fn num_points(&self) -> usize {
        self.orbits.iter().map(|(orbit, _)| orbit.size()).sum()
    }
}

static LEBEDEV_TABLES: [LebedevTable; 8] = [
    LebedevTable {
        degree: 3,
        orbits: &[(Orbit::A1, 1.0 / 6.0)],
    },
    LebedevTable {
        degree: 5,
        orbits: &[(Orbit::A1, 1.0 / 15.0), (Orbit::A3, 3.0 / 40.0)],
    },
    LebedevTable {
        degree: 7,
        orbits: &[(Orbit::A1, 1.0 / 21.0), (Orbit::A2, 4.0 / 105.0), (Orbit::A3, 9.0 / 280.0)],
    },
    LebedevTable {
        degree: 9,
        orbits: &[
            (Orbit::A1, 1.0 / 105.0),
            (Orbit::A3, 9.0 / 280.0),
            (Orbit::C(0.4597008433809831), 1.0 / 35.0),
        ],
    },
    LebedevTable {
        degree: 11,
        orbits: &[
            (Orbit::A1, 4.0 / 315.0),
            (Orbit::A2, 64.0 / 2835.0),
            (Orbit::A3, 27.0 / 1280.0),
            (Orbit::B(0.3015113445777636), 14641.0 / 725760.0),
        ],
    },
    LebedevTable {
        degree: 13,
        orbits: &[
            (Orbit::A1, 0.5130671797338464e-3),
            (Orbit::A2, 0.1660406956574204e-1),
            (Orbit::A3, -0.2958603896103896e-1),
            (Orbit::B(0.4803844614152614), 0.2657620708215946e-1),
            (Orbit::C(0.3207726489807764), 0.1652217099371571e-1),
        ],
    },
    LebedevTable {
        degree: 15,
        orbits: &[
            (Orbit::A1, 0.1154401154401154e-1),
            (Orbit::A3, 0.1194390908585628e-1),
            (Orbit::B(0.3696028464541502), 0.1111055571060340e-1),
            (Orbit::B(0.6943540066026664), 0.1187650129453714e-1),
            (Orbit::C(0.3742430390903412), 0.1181230374690448e-1),
        ],
    },
    LebedevTable {
        degree: 17,
        orbits: &[
            (Orbit::A1, 0.3828270494937162e-2),
            (Orbit::A3, 0.9793737512487512e-2),
            (Orbit::B(0.1851156353447362), 0.8211737283191111e-2),
            (Orbit::B(0.6904210483822922), 0.9942814891178103e-2),
            (Orbit::B(0.3956894730559419), 0.9595471336070963e-2),
            (Orbit::C(0.4783690288121502), 0.9694996361663028e-2),
        ],
    },
];

/// Polynomial degrees for which a Lebedev rule is tabulated, in increasing order.
pub fn lebedev_degrees() -> impl Iterator<Item = usize> {
    LEBEDEV_TABLES.iter().map(|table| table.degree)
}

/// Lebedev rule on the unit sphere that is exact for polynomials of the given degree.
///
/// The weights sum to `1`. Returns [`Error::NoRuleAvailable`] unless `degree` is one of
/// [`lebedev_degrees`]; no attempt is made to round up to the next available rule.
pub fn lebedev(degree: usize) -> Result<Rule3d, Error> {
    let table = LEBEDEV_TABLES
        .iter()
        .find(|table| table.degree == degree)
        .ok_or(Error::NoRuleAvailable)?;

    let n = table.num_points();
    let mut weights = Vec::with_capacity(n);
    let mut points = Vec::with_capacity(n);
    for (orbit, weight) in table.orbits {
        orbit.expand_into(&mut points);
        weights.resize(points.len(), *weight);
    }

    debug_assert_eq!(points.len(), n);
    Ok((weights, points))
}
