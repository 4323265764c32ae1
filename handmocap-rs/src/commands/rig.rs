//! Camera rig command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use hand_scene::{RingConfig, ring_poses};

#[derive(Subcommand)]
pub enum RigCommands {
    /// Generate a ring of cameras looking at a target point
    Ring {
        /// Path to write the camera poses JSON
        output: PathBuf,

        /// Cameras per circle
        #[arg(long, default_value_t = 8)]
        cameras: usize,

        /// Circle radius in scene units
        #[arg(long, default_value_t = 0.7)]
        radius: f64,

        /// Circle heights; repeat the flag for multiple rings
        #[arg(long = "height", default_values_t = [0.1, 0.5])]
        heights: Vec<f64>,
    },
}

pub fn execute(command: RigCommands) -> Result<()> {
    match command {
        RigCommands::Ring {
            output,
            cameras,
            radius,
            heights,
        } => execute_ring(output, cameras, radius, heights),
    }
}

fn execute_ring(output: PathBuf, cameras: usize, radius: f64, heights: Vec<f64>) -> Result<()> {
    let config = RingConfig {
        cameras,
        radius,
        heights,
        ..RingConfig::default()
    };
    let poses = ring_poses(&config);

    let writer = BufWriter::new(
        File::create(&output)
            .with_context(|| format!("Failed to create output file: {}", output.display()))?,
    );
    serde_json::to_writer_pretty(writer, &poses)
        .with_context(|| format!("Failed to write camera poses: {}", output.display()))?;

    println!("Wrote {} camera poses to {}", poses.len(), output.display());

    Ok(())
}
