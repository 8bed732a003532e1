//! Drives the engine without a window: a fixed number of frames with a synthetic circular
//! pointer motion, logging the camera state and the size of the uniform buffer.
//!
//! Run with `RUST_LOG=trace` to see every frame.

use std::{env, f32::consts::TAU, thread, time::Duration};

use anyhow::Context;
use noneuc::{Engine, EngineConfig, PointerDelta};

const DEFAULT_FRAMES: u32 = 240;

fn main() -> anyhow::Result<()> {
    noneuc::init_logger!();

    let frames = match env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid frame count '{arg}'"))?,
        None => DEFAULT_FRAMES,
    };

    let mut engine = Engine::new(EngineConfig::default().with_viewport(1920, 1080))?;

    for i in 0..frames {
        let t = i as f32 / 60.0;
        let delta = PointerDelta::new((t * TAU).cos() * 20.0, (t * TAU * 0.5).sin() * 30.0);
        let uniforms = engine.frame(delta);

        if i % 60 == 0 {
            let camera = engine.camera();
            log::info!(
                "frame {i}: yaw={:.1} pitch={:.1} front={:.3} ({} uniform bytes)",
                camera.yaw(),
                camera.pitch(),
                uniforms.camera_z,
                uniforms.as_bytes().len(),
            );
        }

        if i == frames / 2 {
            engine.resize(1080, 1920);
        }

        thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}
