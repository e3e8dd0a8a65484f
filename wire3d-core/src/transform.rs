/// Transformation matrices for point buffers
use nalgebra::{Matrix4, Point3, Vector3};

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

/// Builders for homogeneous transformation matrices
pub struct Transform;

impl Transform {
    /// Rotation about the origin, applied in order X, Y, Z
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f64> {
        let rx = Matrix4::new_rotation(Vector3::new(rotation.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, rotation.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rotation.z));

        rz * ry * rx
    }

    pub fn translation_matrix(x: f64, y: f64, z: f64) -> Matrix4<f64> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    pub fn scale_matrix(sx: f64, sy: f64, sz: f64) -> Matrix4<f64> {
        Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
    }

    /// Re-center `matrix` so that it acts about `pivot` instead of the origin
    pub fn about(pivot: &Point3<f64>, matrix: &Matrix4<f64>) -> Matrix4<f64> {
        Self::translation_matrix(pivot.x, pivot.y, pivot.z)
            * matrix
            * Self::translation_matrix(-pivot.x, -pivot.y, -pivot.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PointBuffer;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::default();
        state.rotate(0.1, 0.2, 0.3);
        assert_relative_eq!(state.x, 0.1);
        assert_relative_eq!(state.y, 0.2);
        assert_relative_eq!(state.z, 0.3);
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = Transform::rotation_matrix(&RotationState::default());
        assert!((matrix - Matrix4::identity()).norm() < 1e-12);
    }

    #[test]
    fn test_rotation_about_pivot_keeps_pivot() {
        let pivot = Point3::new(100.0, 50.0, 0.0);
        let spin = Transform::rotation_matrix(&RotationState::new(0.0, 0.0, FRAC_PI_2));
        let matrix = Transform::about(&pivot, &spin);

        let mut points = PointBuffer::new(2);
        points.add_point(pivot.x, pivot.y, pivot.z);
        points.add_point(110.0, 50.0, 0.0);
        points.transform(&matrix);

        assert_relative_eq!(points.point(0).x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(points.point(0).y, 50.0, epsilon = 1e-9);
        assert_relative_eq!(points.point(1).x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(points.point(1).y, 60.0, epsilon = 1e-9);
        assert_relative_eq!(points.column(1)[3], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_matrix() {
        let mut points = PointBuffer::new(1);
        points.add_point(1.0, 2.0, 3.0);
        points.transform(&Transform::scale_matrix(2.0, 3.0, 4.0));
        assert_eq!(points.column(0), [2.0, 6.0, 12.0, 1.0]);
    }
}
