use noneuc_linalg::{vec3, Mat3f, Unrolled, Vec3f};

use crate::PointerDelta;

/// A first-person camera described by a position and yaw/pitch angles (in degrees).
///
/// The derived `front`, `right` and `up` unit vectors are only updated by
/// [`Camera::update_directions`]. Pointer input ([`Camera::turn`]) changes the angles, and the
/// engine recomputes the directions once per frame.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3f,
    yaw: f32,
    pitch: f32,
    sensitivity: f32,
    pitch_limit: f32,
    front: Vec3f,
    right: Vec3f,
    up: Vec3f,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3f::ZERO)
    }
}

impl Camera {
    /// Default sensitivity, in degrees per pointer unit.
    pub const DEFAULT_SENSITIVITY: f32 = 0.1;
    /// Default pitch limit, in degrees.
    pub const DEFAULT_PITCH_LIMIT: f32 = 89.0;

    /// Creates a camera at `position` looking down the negative Z axis.
    pub fn new(position: Vec3f) -> Self {
        let mut this = Self {
            position,
            yaw: -90.0,
            pitch: 0.0,
            sensitivity: Self::DEFAULT_SENSITIVITY,
            pitch_limit: Self::DEFAULT_PITCH_LIMIT,
            front: -Vec3f::Z,
            right: Vec3f::X,
            up: Vec3f::Y,
        };
        this.update_directions(&Mat3f::identity());
        this
    }

    /// Sets the rotation in degrees per unit of pointer movement.
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Sets the largest absolute pitch in degrees.
    ///
    /// # Panics
    ///
    /// Panics unless `degrees` lies strictly between 0 and 90.
    #[track_caller]
    pub fn with_pitch_limit(mut self, degrees: f32) -> Self {
        assert!(
            degrees > 0.0 && degrees < 90.0,
            "pitch limit must lie strictly between 0 and 90 degrees"
        );
        self.pitch_limit = degrees;
        self.pitch = self.pitch.clamp(-degrees, degrees);
        self
    }

    pub fn position(&self) -> Vec3f {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3f) {
        self.position = position;
    }

    /// Yaw in degrees. Unbounded.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, always within `[-pitch_limit, pitch_limit]`.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn pitch_limit(&self) -> f32 {
        self.pitch_limit
    }

    /// Sets the orientation angles, in degrees. Pitch is clamped to the pitch limit.
    pub fn set_angles(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Unit vector the camera is looking along.
    pub fn front(&self) -> Vec3f {
        self.front
    }

    /// Unit vector pointing to the right of the view direction.
    pub fn right(&self) -> Vec3f {
        self.right
    }

    /// Unit vector pointing up, perpendicular to `front` and `right`.
    pub fn up(&self) -> Vec3f {
        self.up
    }

    /// Applies a pointer movement to the orientation angles.
    ///
    /// Moving right (`dx > 0`) decreases the yaw and moving up (`dy > 0`) increases the pitch.
    /// The pitch is then clamped to the pitch limit. Directions are not recomputed.
    pub fn turn(&mut self, delta: PointerDelta) {
        self.yaw -= self.sensitivity * delta.dx;
        self.pitch = (self.pitch + self.sensitivity * delta.dy)
            .clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Recomputes `front`, `right` and `up` from the angles, in the frame spanned by the columns
    /// of `basis`.
    ///
    /// With the identity basis and the default angles, this yields `front = -Z`, `right = X` and
    /// `up = Y`. Calling this repeatedly without changing the angles or basis gives identical
    /// results.
    pub fn update_directions(&mut self, basis: &Mat3f) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let local_front = vec3(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin());

        let front = (*basis * local_front).normalize_unrolled();
        let world_up = *basis * Vec3f::Y;
        let right = front.cross(world_up).normalize_unrolled();
        let up = right.cross(front);

        self.front = front;
        self.right = right;
        self.up = up;
    }
}

#[cfg(test)]
mod tests {
    use noneuc_linalg::{assert_approx_eq, Matrix};

    use super::*;

    #[test]
    fn default_orientation() {
        let camera = Camera::default();
        assert_approx_eq!(camera.front(), vec3(0.0, 0.0, -1.0)).abs(1e-6);
        assert_approx_eq!(camera.right(), vec3(1.0, 0.0, 0.0)).abs(1e-6);
        assert_approx_eq!(camera.up(), vec3(0.0, 1.0, 0.0)).abs(1e-6);
    }

    #[test]
    fn turn_signs() {
        let mut camera = Camera::default();
        camera.turn(PointerDelta { dx: 10.0, dy: 20.0 });
        assert_approx_eq!(camera.yaw(), -91.0).abs(1e-5);
        assert_approx_eq!(camera.pitch(), 2.0).abs(1e-5);

        // Directions only change when recomputed.
        assert_approx_eq!(camera.front(), vec3(0.0, 0.0, -1.0)).abs(1e-6);
        camera.update_directions(&Mat3f::identity());
        assert!(camera.front().y() > 0.0);
    }

    #[test]
    fn pitch_clamped() {
        let mut camera = Camera::default();
        camera.turn(PointerDelta { dx: 0.0, dy: 10_000.0 });
        assert_eq!(camera.pitch(), 89.0);
        camera.turn(PointerDelta { dx: 0.0, dy: -50_000.0 });
        assert_eq!(camera.pitch(), -89.0);

        let mut camera = Camera::default().with_pitch_limit(45.0);
        camera.set_angles(0.0, 60.0);
        assert_eq!(camera.pitch(), 45.0);
    }

    #[test]
    #[should_panic(expected = "strictly between 0 and 90")]
    fn zero_pitch_limit() {
        Camera::default().with_pitch_limit(0.0);
    }

    #[test]
    fn orthonormal() {
        let mut camera = Camera::default().with_sensitivity(1.0);
        for (dx, dy) in [(15.0, 5.0), (-200.0, 30.0), (33.3, -100.0), (720.0, 88.0)] {
            camera.turn(PointerDelta { dx, dy });
            camera.update_directions(&Mat3f::identity());

            let (f, r, u) = (camera.front(), camera.right(), camera.up());
            assert_approx_eq!(f.norm(), 1.0).abs(1e-5);
            assert_approx_eq!(r.norm(), 1.0).abs(1e-5);
            assert_approx_eq!(u.norm(), 1.0).abs(1e-5);
            assert_approx_eq!(f.dot(r), 0.0).abs(1e-5);
            assert_approx_eq!(f.dot(u), 0.0).abs(1e-5);
            assert_approx_eq!(r.dot(u), 0.0).abs(1e-5);
            // Right-handed.
            assert_approx_eq!(r.cross(u), -f).abs(1e-5);
        }
    }

    #[test]
    fn update_is_idempotent() {
        let mut camera = Camera::default();
        camera.set_angles(37.0, -12.5);
        camera.update_directions(&Mat3f::identity());
        let first = (camera.front(), camera.right(), camera.up());
        camera.update_directions(&Mat3f::identity());
        assert_eq!((camera.front(), camera.right(), camera.up()), first);
    }

    #[test]
    fn rotated_basis() {
        // Basis that maps X to Y, Y to -X and keeps Z.
        #[rustfmt::skip]
        let basis = Matrix::from_rows([
            [0.0, -1.0, 0.0],
            [1.0,  0.0, 0.0],
            [0.0,  0.0, 1.0],
        ]);
        let mut camera = Camera::default();
        camera.update_directions(&basis);
        assert_approx_eq!(camera.front(), vec3(0.0, 0.0, -1.0)).abs(1e-6);
        assert_approx_eq!(camera.up(), vec3(-1.0, 0.0, 0.0)).abs(1e-6);
        assert_approx_eq!(camera.right(), vec3(0.0, 1.0, 0.0)).abs(1e-6);
    }
}
