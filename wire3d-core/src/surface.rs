/// Point clouds sampled from parametric surfaces
use std::f64::consts::PI;

use nalgebra::Point3;

use crate::buffer::PointBuffer;

/// Sample a sphere of radius `r` around `center`.
///
/// Each of the `steps` rotations of a semicircle about the x axis contributes
/// `steps + 1` samples, poles included, giving `steps * (steps + 1)` points in
/// rotation-major order. The pole samples repeat on every ring so the grid
/// stays rectangular.
pub fn generate_sphere(center: Point3<f64>, r: f64, steps: usize) -> PointBuffer {
    let mut points = PointBuffer::new(steps * (steps + 1));

    for rotation in 0..steps {
        let rot = rotation as f64 / steps as f64;

        for circle in 0..=steps {
            let circ = circle as f64 / steps as f64;

            let x = r * (PI * circ).cos() + center.x;
            let y = r * (PI * circ).sin() * (2.0 * PI * rot).cos() + center.y;
            let z = r * (PI * circ).sin() * (2.0 * PI * rot).sin() + center.z;
            points.add_point(x, y, z);
        }
    }

    points
}

/// Sample a torus around `center` whose tube has radius `r1` and whose tube
/// center runs on a circle of radius `r2` in the xz plane.
///
/// The cross-section circle closes on itself, so each ring holds exactly
/// `steps` samples and the result has `steps * steps` points.
pub fn generate_torus(center: Point3<f64>, r1: f64, r2: f64, steps: usize) -> PointBuffer {
    let mut points = PointBuffer::new(steps * steps);

    for rotation in 0..steps {
        let rot = rotation as f64 / steps as f64;

        for circle in 0..steps {
            let circ = circle as f64 / steps as f64;
            let ring = r1 * (2.0 * PI * circ).cos() + r2;

            let x = (2.0 * PI * rot).cos() * ring + center.x;
            let y = r1 * (2.0 * PI * circ).sin() + center.y;
            let z = -(2.0 * PI * rot).sin() * ring + center.z;
            points.add_point(x, y, z);
        }
    }

    points
}
