// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Line-stream rewriter driving the jazzy -> humble pass.
//!
//! One forward pass over the source document: ordinary lines are copied,
//! two jazzy-only fields are substituted in place, and each
//! `offered_qos_profiles` block is collapsed to its humble single-line
//! encoding. Right after a block the jazzy writer may repeat the whole
//! profile in expanded per-field form followed by the (humble-less)
//! `type_description_hash` field; a one-line lookahead detects that
//! repetition and drops it.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::qos::{self, QosTables};
use crate::stream::LineStream;

/// Jazzy empty `custom_data` sentinel.
const CUSTOM_DATA_EMPTY: &str = "  custom_data: ~";
/// Replacement note for the sentinel (humble has no custom_data).
const CUSTOM_DATA_NOTE: &str =
    "  custom_data: this yaml is refactored from jazzy style for compatibility with humble";
/// Jazzy distro identifier line and its humble replacement.
const ROS_DISTRO_JAZZY: &str = "  ros_distro: jazzy";
const ROS_DISTRO_HUMBLE: &str = "  ros_distro: humble";

/// Lines discarded after a positive repeat lookahead: the expanded
/// repetition minus its first line, plus `type_description_hash`.
const EXPANDED_REPEAT_LINES: usize = 15;

/// Counters for one pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteStats {
    /// Lines emitted to the destination.
    pub lines_written: u64,
    /// QoS blocks collapsed to their single-line encoding.
    pub blocks_rewritten: u32,
    /// Unconditional line substitutions applied.
    pub substitutions: u32,
    /// Source lines dropped as expanded repetition / obsolete fields.
    pub lines_skipped: u32,
}

/// Rewrite a whole jazzy document into its humble form.
///
/// Reads `reader` once, forward-only, and writes the converted document to
/// `writer` (flushed before returning). A document without any QoS block is
/// still valid output: only the unconditional substitutions apply.
pub fn rewrite_document<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    tables: &QosTables,
) -> io::Result<RewriteStats> {
    let mut lines = LineStream::new(reader);
    let mut stats = RewriteStats::default();

    while let Some(line) = lines.next_line()? {
        if line == qos::BLOCK_TRIGGER {
            let encoded = qos::reencode_block(&mut lines, tables)?;
            writeln!(writer, "{encoded}")?;
            stats.blocks_rewritten += 1;
            debug!(
                blocks = stats.blocks_rewritten,
                "collapsed offered_qos_profiles block"
            );
            skip_expanded_repeat(&mut lines, &mut stats)?;
        } else if line == CUSTOM_DATA_EMPTY {
            writeln!(writer, "{CUSTOM_DATA_NOTE}")?;
            stats.substitutions += 1;
        } else if line == ROS_DISTRO_JAZZY {
            writeln!(writer, "{ROS_DISTRO_HUMBLE}")?;
            stats.substitutions += 1;
        } else {
            writeln!(writer, "{line}")?;
        }
        stats.lines_written += 1;
    }

    writer.flush()?;
    Ok(stats)
}

/// True when `line` starts the expanded per-field repetition of a block,
/// recognized by the first sub-field name at the block indentation.
fn repeats_first_field(line: &str) -> bool {
    qos::value_at(line, qos::FIELD_INDENT, qos::BLOCK_FIELDS[0].name).is_some()
}

/// Drop the expanded repetition (and `type_description_hash`) when the next
/// line starts one; otherwise the lookahead line goes back unchanged.
fn skip_expanded_repeat<R: BufRead>(
    lines: &mut LineStream<R>,
    stats: &mut RewriteStats,
) -> io::Result<()> {
    match lines.next_line()? {
        Some(line) if repeats_first_field(&line) => {
            stats.lines_skipped += 1;
            for _ in 0..EXPANDED_REPEAT_LINES {
                if lines.next_line()?.is_none() {
                    break;
                }
                stats.lines_skipped += 1;
            }
            debug!(skipped = stats.lines_skipped, "dropped expanded qos repetition");
        }
        Some(line) => lines.push_back(line),
        None => {}
    }
    Ok(())
}
