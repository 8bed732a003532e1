use std::f32::consts::{FRAC_PI_2, PI};

/// An invalid [`EngineConfig`] value.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("viewport size must be non-zero, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
    #[error("mouse sensitivity must be finite and positive, got {0}")]
    Sensitivity(f32),
    #[error("pitch limit must lie strictly between 0 and 90 degrees, got {0}")]
    PitchLimit(f32),
    #[error("vertical field of view must lie strictly between 0 and pi radians, got {0}")]
    FieldOfView(f32),
    #[error("clip planes must satisfy 0 <= near < far, got near={near}, far={far}")]
    ClipPlanes { near: f32, far: f32 },
}

/// Startup parameters of an [`Engine`][crate::Engine].
///
/// Built with [`Default`] and adjusted with the `with_*` methods. Values are checked by
/// [`EngineConfig::validate`], which [`Engine::new`][crate::Engine::new] calls.
///
/// # Examples
///
/// ```
/// # use noneuc::EngineConfig;
/// let config = EngineConfig::default()
///     .with_viewport(800, 600)
///     .with_mouse_sensitivity(0.25);
/// assert!(config.validate().is_ok());
///
/// let bad = EngineConfig::default().with_clip_planes(10.0, 1.0);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Initial viewport width in pixels.
    pub width: u32,
    /// Initial viewport height in pixels.
    pub height: u32,
    /// Degrees of rotation per unit of pointer movement.
    pub mouse_sensitivity: f32,
    /// Largest absolute pitch, in degrees. Keeps the camera from flipping over the poles.
    pub pitch_limit: f32,
    /// Vertical field of view, in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Whether pointer movement turns the camera at startup.
    pub mouse_look: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            mouse_sensitivity: 0.1,
            pitch_limit: 89.0,
            fov_y: FRAC_PI_2,
            near: 1.0,
            far: 100.0,
            mouse_look: true,
        }
    }
}

impl EngineConfig {
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    pub fn with_pitch_limit(mut self, degrees: f32) -> Self {
        self.pitch_limit = degrees;
        self
    }

    pub fn with_fov_y(mut self, radians: f32) -> Self {
        self.fov_y = radians;
        self
    }

    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    pub fn with_mouse_look(mut self, enabled: bool) -> Self {
        self.mouse_look = enabled;
        self
    }

    /// Checks every field against its allowed range.
    ///
    /// NaN fails every range check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.mouse_sensitivity.is_finite() && self.mouse_sensitivity > 0.0) {
            return Err(ConfigError::Sensitivity(self.mouse_sensitivity));
        }
        if !(self.pitch_limit > 0.0 && self.pitch_limit < 90.0) {
            return Err(ConfigError::PitchLimit(self.pitch_limit));
        }
        if !(self.fov_y > 0.0 && self.fov_y < PI) {
            return Err(ConfigError::FieldOfView(self.fov_y));
        }
        if !(self.near >= 0.0 && self.far > self.near && self.far.is_finite()) {
            return Err(ConfigError::ClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!((config.width, config.height), (1280, 720));
        assert_eq!(config.pitch_limit, 89.0);
        assert!(config.mouse_look);
    }

    #[test]
    fn rejects_out_of_range() {
        let base = EngineConfig::default();
        assert_eq!(
            base.clone().with_viewport(0, 720).validate(),
            Err(ConfigError::EmptyViewport {
                width: 0,
                height: 720
            })
        );
        assert_eq!(
            base.clone().with_mouse_sensitivity(-0.1).validate(),
            Err(ConfigError::Sensitivity(-0.1))
        );
        assert!(matches!(
            base.clone().with_mouse_sensitivity(f32::NAN).validate(),
            Err(ConfigError::Sensitivity(_))
        ));
        assert_eq!(
            base.clone().with_pitch_limit(90.0).validate(),
            Err(ConfigError::PitchLimit(90.0))
        );
        assert_eq!(
            base.clone().with_fov_y(0.0).validate(),
            Err(ConfigError::FieldOfView(0.0))
        );
        assert_eq!(
            base.clone().with_clip_planes(-1.0, 100.0).validate(),
            Err(ConfigError::ClipPlanes {
                near: -1.0,
                far: 100.0
            })
        );
        assert!(base.with_clip_planes(5.0, 5.0).validate().is_err());
    }

    #[test]
    fn error_messages() {
        let err = EngineConfig::default().with_viewport(0, 0).validate();
        assert_eq!(
            err.map_err(|e| e.to_string()),
            Err("viewport size must be non-zero, got 0x0".to_string())
        );
    }
}
