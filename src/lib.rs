// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Convert ROS 2 rosbag `metadata.yaml` from jazzy to humble format.
//!
//! Jazzy writes `offered_qos_profiles` as an expanded YAML block; humble
//! expects one quoted scalar with numeric policy codes. This crate rewrites
//! a jazzy document line by line: the QoS block is collapsed, jazzy-only
//! fields are substituted or dropped, and everything else is copied through
//! untouched.
//!
//! ```bash
//! # In the rosbag directory (reads metadata.yaml, writes metadata_humble.yaml)
//! rosbag-convert-metadata
//! ```
//!
//! Correctness of the translation is not guaranteed in general: the value
//! tables may be incomplete, and an unknown symbolic value encodes as an
//! empty policy code. A humble-side error such as `requesting incompatible
//! QoS ... Last incompatible policy: RELIABILITY_QOS_POLICY` usually means
//! a table entry is wrong for that bag.

pub mod qos;
pub mod rewrite;
pub mod stream;

pub use qos::QosTables;
pub use rewrite::{rewrite_document, RewriteStats};

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Conversion failure.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input document could not be opened; nothing was written.
    #[error("cannot open input {}: {source}", .path.display())]
    OpenInput { path: PathBuf, source: io::Error },
    /// Output document could not be created.
    #[error("cannot create output {}: {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },
    /// I/O failure while rewriting.
    #[error("rewrite failed: {0}")]
    Io(#[from] io::Error),
}

/// Rewrite the jazzy document at `input` into a humble document at `output`.
///
/// The input is opened before the output is created, so a missing input
/// never leaves an empty output file behind.
pub fn convert_file(
    input: &Path,
    output: &Path,
    tables: &QosTables,
) -> Result<RewriteStats, ConvertError> {
    let source = File::open(input).map_err(|source| ConvertError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let sink = File::create(output).map_err(|source| ConvertError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    let stats = rewrite_document(BufReader::new(source), BufWriter::new(sink), tables)?;
    Ok(stats)
}
