use glam::Vec3;

/// The camera's orientation basis. Derived from yaw and pitch, never set
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraVectors {
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
}

impl CameraVectors {
    pub fn new() -> Self {
        Self {
            front: Vec3::NEG_Z,
            up: Vec3::ZERO,
            right: Vec3::ZERO,
        }
    }

    /// Recomputes the front, right, and up vectors from yaw and pitch, both
    /// given in degrees.
    ///
    /// If `front` ends up parallel to `world_up` the cross products collapse
    /// and the basis is ill-defined. The pitch clamp upstream keeps this from
    /// happening for a vertical `world_up`; a non-vertical `world_up` can
    /// still hit it.
    pub fn update(&mut self, yaw: f32, pitch: f32, world_up: Vec3) {
        let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        // re-normalize right and up as well: the closer front gets to
        // world_up, the shorter the raw cross products become
        self.right = self.front.cross(world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn test_default_yaw_faces_negative_z() {
        let mut vectors = CameraVectors::new();
        vectors.update(-90.0, 0.0, Vec3::Y);

        assert!(vectors.front.abs_diff_eq(Vec3::NEG_Z, TOLERANCE));
        assert!(vectors.right.abs_diff_eq(Vec3::X, TOLERANCE));
        assert!(vectors.up.abs_diff_eq(Vec3::Y, TOLERANCE));
    }

    #[test]
    fn test_basis_is_orthonormal_across_angles() {
        let mut vectors = CameraVectors::new();
        for yaw_step in -4..=4 {
            for pitch_step in -8..=8 {
                let yaw = yaw_step as f32 * 45.0;
                let pitch = pitch_step as f32 * 11.0; // stays within ±88°
                vectors.update(yaw, pitch, Vec3::Y);

                assert!((vectors.front.length() - 1.0).abs() < TOLERANCE);
                assert!((vectors.right.length() - 1.0).abs() < TOLERANCE);
                assert!((vectors.up.length() - 1.0).abs() < TOLERANCE);
                assert!(vectors.front.dot(vectors.right).abs() < TOLERANCE);
                assert!(vectors.front.dot(vectors.up).abs() < TOLERANCE);
                assert!(vectors.right.dot(vectors.up).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_basis_is_right_handed() {
        let mut vectors = CameraVectors::new();
        vectors.update(37.0, -20.0, Vec3::Y);

        let reconstructed_up = vectors.right.cross(vectors.front);
        assert!(reconstructed_up.abs_diff_eq(vectors.up, TOLERANCE));
    }

    #[test]
    fn test_positive_pitch_looks_up() {
        let mut vectors = CameraVectors::new();
        vectors.update(-90.0, 45.0, Vec3::Y);

        assert!((vectors.front.y - 45.0_f32.to_radians().sin()).abs() < TOLERANCE);
        assert!(vectors.front.y > 0.0);
    }
}
