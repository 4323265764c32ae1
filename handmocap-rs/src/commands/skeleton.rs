//! Skeleton recording command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use fphab_skeleton::{Joint, parser};
use hand_scene::{BakeConfig, Scene, bake};

#[derive(Subcommand)]
pub enum SkeletonCommands {
    /// Display information about a skeleton recording
    Info {
        /// Path to the skeleton.txt recording
        file: PathBuf,
    },

    /// Bake a recording into a keyframed scene and export it as JSON
    Bake {
        /// Path to the skeleton.txt recording
        input: PathBuf,

        /// Path to write the baked scene JSON
        output: PathBuf,

        /// Name of the armature root object driven by the wrist
        #[arg(long, default_value = "Hand")]
        root: String,

        /// Output frame number of the first recorded frame
        #[arg(long, default_value_t = 1)]
        frame_offset: i32,

        /// Lateral spread factor (>1.0 spreads the fingers horizontally)
        #[arg(long, default_value_t = 1.0)]
        spread: f64,

        /// Scale from recording units to scene units (default: mm to m)
        #[arg(long, default_value_t = 0.001)]
        unit_scale: f64,
    },
}

pub fn execute(command: SkeletonCommands) -> Result<()> {
    match command {
        SkeletonCommands::Info { file } => execute_info(file),
        SkeletonCommands::Bake {
            input,
            output,
            root,
            frame_offset,
            spread,
            unit_scale,
        } => execute_bake(input, output, root, frame_offset, spread, unit_scale),
    }
}

fn execute_info(path: PathBuf) -> Result<()> {
    let sequence = parser::parse_file(&path)
        .with_context(|| format!("Failed to parse recording: {}", path.display()))?;

    println!("Recording: {}", path.display());
    println!("  Frames:        {}", sequence.len());
    println!("  Skipped lines: {}", sequence.skipped_lines);

    if let (Some(first), Some(last)) = (sequence.frames.first(), sequence.frames.last()) {
        println!(
            "  Timestamps:    {} .. {}",
            first.timestamp, last.timestamp
        );

        let mut min = first.joint(Joint::Wrist);
        let mut max = min;
        for frame in &sequence.frames {
            let wrist = frame.joint(Joint::Wrist);
            min = min.min(wrist);
            max = max.max(wrist);
        }
        println!(
            "  Wrist bounds:  ({:.1}, {:.1}, {:.1}) .. ({:.1}, {:.1}, {:.1}) mm",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }

    Ok(())
}

fn execute_bake(
    input: PathBuf,
    output: PathBuf,
    root: String,
    frame_offset: i32,
    spread: f64,
    unit_scale: f64,
) -> Result<()> {
    let sequence = parser::parse_file(&input)
        .with_context(|| format!("Failed to parse recording: {}", input.display()))?;

    let mut config = BakeConfig {
        root_object: root,
        frame_offset,
        ..BakeConfig::default()
    };
    config.convention.spread = spread;
    config.convention.unit_scale = unit_scale;

    let mut scene = Scene::with_hand_markers(&config.root_object);
    let report = bake(&mut scene, &sequence, &config)
        .with_context(|| format!("Failed to bake recording: {}", input.display()))?;

    let writer = BufWriter::new(
        File::create(&output)
            .with_context(|| format!("Failed to create output file: {}", output.display()))?,
    );
    serde_json::to_writer_pretty(writer, &scene)
        .with_context(|| format!("Failed to write scene JSON: {}", output.display()))?;

    println!(
        "Baked {} frames into [{}, {}] ({} markers bound)",
        report.frames_baked, report.frame_start, report.frame_end, report.markers_bound
    );
    for name in &report.missing_markers {
        println!("  missing marker: {name}");
    }
    println!("Scene written to {}", output.display());

    Ok(())
}
