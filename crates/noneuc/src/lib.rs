//! Camera and projection state for a renderer of non-Euclidean scenes.
//!
//! This crate sits between the windowing/input layer and the GPU: it takes pointer movement and
//! viewport size changes, keeps the camera orientation up to date, and produces the
//! [`FrameUniforms`] that are uploaded to the shaders once per frame. Windowing, input event
//! handling and GPU resources are left to the caller.
//!
//! All math is done with the fixed-size types from [`linalg`].
//!
//! # 3D Coordinates
//!
//! X points to the right, Y points up, and the camera looks down the *negative* Z axis when its
//! yaw is -90° and its pitch is 0° (the default). Angles are stored in degrees.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: overrides the log filter installed by [`init_logger!`].

use log::LevelFilter;

pub use noneuc_linalg as linalg;

mod camera;
mod config;
mod engine;
mod projection;
pub mod timer;

pub use camera::Camera;
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, FrameUniforms, PointerDelta, World};
pub use projection::Projection;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this crate log at *debug* level, everything else is off. `RUST_LOG` is
/// applied on top and takes precedence.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
