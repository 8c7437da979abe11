//! Sweeps a probe ray around the plane for a few frames and logs the emitted gizmos.
//!
//! `RUST_LOG=info cargo run --example plane_probe -- [settings.toml]`

use std::{env, f64::consts::TAU, path::PathBuf};

use anyhow::Result;
use log::info;
use planar_geometry::{Quaternion, Transform};
use planar_gizmos::{DrawCommand, Settings, update_and_render};

const FRAMES: usize = 8;

fn main() -> Result<()> {
    env_logger::init();

    let settings = match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };

    let mut scene = settings.scene.to_scene();
    let probe_pose = match scene.probe {
        Some(probe) => Transform::looking_along(probe.origin, probe.direction),
        None => Transform::looking_along((0.0, 0.0, 5.0), (0.0, 0.0, -1.0)),
    };

    for frame in 0..FRAMES {
        // Tilt the probe around its local x axis, one full turn over all frames.
        let angle = TAU * frame as f64 / FRAMES as f64;
        let pose = Transform {
            rotate: probe_pose.rotate * Quaternion::from_rotation_x(angle),
            ..probe_pose
        };
        scene = scene.with_probe_pose(&pose);

        let mut commands: Vec<DrawCommand> = Vec::new();
        let report = update_and_render(&scene, &settings.gizmos, &mut commands);
        if let Some(report) = report {
            info!(
                "Frame {frame}: side {}, distance {:.3}, raycast {:?}",
                report.side, report.signed_distance, report.raycast
            );
        }
        for command in &commands {
            info!("  {command:?}");
        }
    }

    info!("Final frame without probe");
    let mut commands: Vec<DrawCommand> = Vec::new();
    update_and_render(&scene.without_probe(), &settings.gizmos, &mut commands);
    for command in &commands {
        info!("  {command:?}");
    }

    Ok(())
}
