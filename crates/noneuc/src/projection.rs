use noneuc_linalg::Mat4f;

use crate::{ConfigError, EngineConfig};

/// Perspective projection parameters.
///
/// The aspect ratio is not stored here since it changes whenever the viewport is resized; it is
/// passed to [`Projection::matrix`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    fov_y: f32,
    near: f32,
    far: f32,
}

impl Projection {
    /// Creates a projection from a vertical field of view (in radians) and the clip plane
    /// distances.
    ///
    /// # Panics
    ///
    /// Panics unless `fov_y > 0`, `near >= 0` and `far > near`.
    #[track_caller]
    pub fn new(fov_y: f32, near: f32, far: f32) -> Self {
        assert!(fov_y > 0.0, "field of view must be positive");
        assert!(near >= 0.0, "near plane must not be negative");
        assert!(far > near, "far plane must lie beyond the near plane");
        Self { fov_y, near, far }
    }

    /// Takes the projection parameters from a validated `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.fov_y, config.near, config.far))
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Computes the projection matrix for a viewport with the given aspect ratio (width divided
    /// by height).
    ///
    /// See [`Mat4f::perspective`] for the layout of the result.
    ///
    /// # Panics
    ///
    /// Panics if `aspect` is not positive.
    #[track_caller]
    pub fn matrix(&self, aspect: f32) -> Mat4f {
        Mat4f::perspective(self.fov_y, aspect, self.near, self.far)
    }
}

/// Returns the aspect ratio of a `width` by `height` viewport.
pub(crate) fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height as f32
}
