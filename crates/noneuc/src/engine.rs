use noneuc_linalg::{Mat3f, Mat4f, Vec3f};

use crate::{
    projection::aspect_ratio,
    timer::{FpsCounter, FrameClock},
    Camera, ConfigError, EngineConfig, Projection,
};

/// Pointer movement since the previous frame, in pointer units (usually pixels).
///
/// `dy` is positive when the pointer moves *up*. Window systems that report Y growing downwards
/// need to flip the sign.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerDelta {
    pub dx: f32,
    pub dy: f32,
}

impl PointerDelta {
    pub const NONE: Self = Self { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// Scene state observed by the camera.
#[derive(Debug, Clone)]
pub struct World {
    pub camera: Camera,
    /// Orientation basis the camera directions are expressed in.
    ///
    /// Also uploaded as the metric `g` in [`FrameUniforms`]. Identity for Euclidean space.
    pub basis: Mat3f,
}

impl Default for World {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            basis: Mat3f::identity(),
        }
    }
}

/// Per-frame shader inputs, laid out for direct upload as a uniform buffer.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct FrameUniforms {
    pub camera_pos: Vec3f,
    /// Camera right vector.
    pub camera_x: Vec3f,
    /// Camera up vector.
    pub camera_y: Vec3f,
    /// Camera front vector.
    pub camera_z: Vec3f,
    /// Orientation metric.
    pub g: Mat3f,
    /// Perspective projection.
    pub p: Mat4f,
}

impl FrameUniforms {
    /// Returns the bytes to upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Owns everything that persists between frames: configuration, camera, projection and timing.
///
/// The caller drives it from its event loop: [`Engine::resize`] on framebuffer size changes,
/// [`Engine::set_mouse_look`] when the pointer is grabbed or released, and [`Engine::frame`] once
/// per frame with the accumulated pointer movement.
pub struct Engine {
    config: EngineConfig,
    world: World,
    projection: Projection,
    clock: FrameClock,
    fps: FpsCounter,
    width: u32,
    height: u32,
    mouse_look: bool,
    last_frame_secs: f32,
}

impl Engine {
    /// Validates `config` and creates an engine with a camera at the origin.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let projection = Projection::from_config(&config)?;
        let camera = Camera::default()
            .with_sensitivity(config.mouse_sensitivity)
            .with_pitch_limit(config.pitch_limit);
        log::debug!("creating engine: {config:?}");

        Ok(Self {
            world: World {
                camera,
                ..World::default()
            },
            projection,
            clock: FrameClock::new(),
            fps: FpsCounter::new("frame"),
            width: config.width,
            height: config.height,
            mouse_look: config.mouse_look,
            last_frame_secs: 0.0,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn camera(&self) -> &Camera {
        &self.world.camera
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Current viewport size in pixels.
    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Aspect ratio (width / height) of the current viewport.
    pub fn aspect(&self) -> f32 {
        aspect_ratio(self.width, self.height)
    }

    /// Seconds between the two most recent camera updates (0 before the second one).
    pub fn last_frame_secs(&self) -> f32 {
        self.last_frame_secs
    }

    /// Updates the viewport size.
    ///
    /// Minimized windows report a size of 0x0. Such sizes are ignored, and the previous aspect
    /// ratio stays in effect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring resize to {width}x{height}");
            return;
        }
        log::debug!("viewport resized to {width}x{height}");
        self.width = width;
        self.height = height;
    }

    pub fn mouse_look(&self) -> bool {
        self.mouse_look
    }

    /// Enables or disables turning the camera with the pointer.
    pub fn set_mouse_look(&mut self, enabled: bool) {
        if enabled != self.mouse_look {
            log::debug!("mouse look {}", if enabled { "on" } else { "off" });
        }
        self.mouse_look = enabled;
    }

    pub fn toggle_mouse_look(&mut self) {
        self.set_mouse_look(!self.mouse_look);
    }

    /// Advances the frame clock, applies `delta` if mouse look is enabled, and recomputes the
    /// camera directions.
    pub fn update_camera(&mut self, delta: PointerDelta) {
        self.last_frame_secs = self.clock.tick();

        let World { camera, basis } = &mut self.world;
        if self.mouse_look {
            camera.turn(delta);
        }
        camera.update_directions(basis);

        log::trace!(
            "dt={:.4}s yaw={} pitch={} front={}",
            self.last_frame_secs,
            camera.yaw(),
            camera.pitch(),
            camera.front(),
        );
    }

    /// Runs the per-frame update and returns the uniforms to render the frame with.
    pub fn frame(&mut self, delta: PointerDelta) -> FrameUniforms {
        self.update_camera(delta);
        self.fps.tick();
        self.uniforms()
    }

    /// Assembles the uniforms for the current state without advancing anything.
    pub fn uniforms(&self) -> FrameUniforms {
        let camera = &self.world.camera;
        FrameUniforms {
            camera_pos: camera.position(),
            camera_x: camera.right(),
            camera_y: camera.up(),
            camera_z: camera.front(),
            g: self.world.basis,
            p: self.projection.matrix(self.aspect()),
        }
    }
}
