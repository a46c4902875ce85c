// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! rosbag-convert-metadata - rewrite a jazzy rosbag metadata.yaml for humble.
//!
//! Usage:
//!   rosbag-convert-metadata
//!   rosbag-convert-metadata --input other.yaml --output converted.yaml

use std::path::PathBuf;

use clap::Parser;
use rosbag_convert_metadata::{convert_file, QosTables};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "rosbag-convert-metadata")]
#[command(about = "Convert ROS 2 rosbag metadata.yaml from jazzy to humble format")]
#[command(version)]
struct Args {
    /// Input jazzy metadata file
    #[arg(short, long, default_value = "metadata.yaml")]
    input: PathBuf,

    /// Output humble metadata file (distinct from the input, which is never overwritten)
    #[arg(short, long, default_value = "metadata_humble.yaml")]
    output: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Quiet mode (confirmation only)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = args.log_level.parse().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .init();

    let tables = QosTables::humble();
    let stats = convert_file(&args.input, &args.output, &tables)?;

    if !args.quiet {
        info!(
            "rewrote {} QoS block(s), {} substitution(s), {} line(s) dropped",
            stats.blocks_rewritten, stats.substitutions, stats.lines_skipped
        );
    }
    println!("[OK] Humble metadata written to: {}", args.output.display());

    Ok(())
}
