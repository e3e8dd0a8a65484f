/// Parametric curves drawn as edge lists
use std::f64::consts::PI;

use nalgebra::{Matrix4, Point2, Point3, Vector4};

use crate::buffer::PointBuffer;

/// Cubic basis used to turn four control values into polynomial coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Endpoints `p0`, `p1` with tangents `r0`, `r1`
    Hermite,
    /// Four control points, passing through the first and last
    Bezier,
}

impl CurveKind {
    #[rustfmt::skip]
    fn basis(self) -> Matrix4<f64> {
        match self {
            CurveKind::Hermite => Matrix4::new(
                2.0, -2.0, 1.0, 1.0,
                -3.0, 3.0, -2.0, -1.0,
                0.0, 0.0, 1.0, 0.0,
                1.0, 0.0, 0.0, 0.0,
            ),
            CurveKind::Bezier => Matrix4::new(
                -1.0, 3.0, -3.0, 1.0,
                3.0, -6.0, 3.0, 0.0,
                -3.0, 3.0, 0.0, 0.0,
                1.0, 0.0, 0.0, 0.0,
            ),
        }
    }
}

/// Coefficients `[a, b, c, d]` of `a*t^3 + b*t^2 + c*t + d` for one axis
pub fn curve_coefficients(p0: f64, p1: f64, p2: f64, p3: f64, kind: CurveKind) -> [f64; 4] {
    let coefs = kind.basis() * Vector4::new(p0, p1, p2, p3);
    [coefs.x, coefs.y, coefs.z, coefs.w]
}

fn evaluate(coefs: &[f64; 4], t: f64) -> f64 {
    let [a, b, c, d] = *coefs;
    a * t * t * t + b * t * t + c * t + d
}

/// Append `steps` segments approximating a curve in the z = 0 plane.
///
/// For [`CurveKind::Hermite`] the arguments are `p0`, `p1` (endpoints), `p2`,
/// `p3` (tangents at `p0` and `p1`). For [`CurveKind::Bezier`] they are the
/// four control points in order.
pub fn add_curve(
    edges: &mut PointBuffer,
    p0: Point2<f64>,
    p1: Point2<f64>,
    p2: Point2<f64>,
    p3: Point2<f64>,
    steps: usize,
    kind: CurveKind,
) {
    let xcoefs = curve_coefficients(p0.x, p1.x, p2.x, p3.x, kind);
    let ycoefs = curve_coefficients(p0.y, p1.y, p2.y, p3.y, kind);

    let mut previous = Point3::new(p0.x, p0.y, 0.0);
    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        let next = Point3::new(evaluate(&xcoefs, t), evaluate(&ycoefs, t), 0.0);
        edges.add_edge(previous, next);
        previous = next;
    }
}

/// Append `steps` segments approximating a circle of radius `r` parallel to
/// the xy plane at depth `center.z`
pub fn add_circle(edges: &mut PointBuffer, center: Point3<f64>, r: f64, steps: usize) {
    let mut previous = Point3::new(center.x + r, center.y, center.z);
    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        let next = Point3::new(
            r * (2.0 * PI * t).cos() + center.x,
            r * (2.0 * PI * t).sin() + center.y,
            center.z,
        );
        edges.add_edge(previous, next);
        previous = next;
    }
}
