// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Block re-encoder: jazzy multi-line QoS block -> humble single-line scalar.

use std::io::{self, BufRead};

use super::layout::{
    tail_at, value_at, FieldKind, BLOCK_CLOSE, BLOCK_FIELDS, BLOCK_OPEN, BLOCK_TRIGGER,
    DURATION_SEPARATOR, FIELD_INDENT, FIELD_SEPARATOR, NSEC_COLUMN, SEC_COLUMN, TRAILING_FLAG,
};
use super::tables::QosTables;
use crate::stream::LineStream;

/// Re-encode one QoS block into its humble single-line form.
///
/// `lines` must be positioned immediately after the trigger line. Only the
/// lines of sub-fields that are actually present are consumed: a line that
/// does not match the expected sub-field is pushed back and tried against
/// the next one, so an omitted optional field never costs the following
/// fields their line.
pub fn reencode_block<R: BufRead>(
    lines: &mut LineStream<R>,
    tables: &QosTables,
) -> io::Result<String> {
    let mut out = String::from(BLOCK_TRIGGER);
    out.push_str(BLOCK_OPEN);

    for field in BLOCK_FIELDS {
        let Some(line) = lines.next_line()? else {
            break;
        };
        let Some(value) = value_at(&line, FIELD_INDENT, field.name) else {
            lines.push_back(line);
            continue;
        };

        match field.kind {
            FieldKind::Verbatim => {
                out.push_str(field.name);
                out.push_str(value);
                out.push_str(FIELD_SEPARATOR);
            }
            FieldKind::Mapped(table) => {
                out.push_str(field.name);
                out.push_str(tables.lookup(table, value));
                out.push_str(FIELD_SEPARATOR);
            }
            FieldKind::Duration => {
                // Declaration matched: the next two lines carry sec/nsec.
                out.push_str(field.name);
                out.push_str(DURATION_SEPARATOR);
                out.push_str("sec: ");
                out.push_str(tail_at(
                    &lines.next_line()?.unwrap_or_default(),
                    SEC_COLUMN,
                ));
                out.push_str(DURATION_SEPARATOR);
                out.push_str("nsec: ");
                out.push_str(tail_at(
                    &lines.next_line()?.unwrap_or_default(),
                    NSEC_COLUMN,
                ));
                out.push_str(FIELD_SEPARATOR);
            }
        }
    }

    // Trailing flag: bare value, no name, no separator after it.
    if let Some(line) = lines.next_line()? {
        match value_at(&line, FIELD_INDENT, TRAILING_FLAG) {
            Some(value) => out.push_str(value),
            None => lines.push_back(line),
        }
    }

    out.push_str(BLOCK_CLOSE);
    Ok(out)
}
