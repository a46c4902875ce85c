// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fixed layout of the jazzy QoS block and the humble scalar encoding.
//!
//! The jazzy block is parsed positionally, not structurally: each sub-field
//! name is expected at a fixed byte offset on its line, and the {sec, nsec}
//! values of a duration at fixed columns. A line that does not carry the
//! expected prefix at the expected offset means "this optional sub-field is
//! absent", never an error.

use super::tables::TableId;

/// Jazzy block declaration line (8 leading spaces, no value).
pub const BLOCK_TRIGGER: &str = "        offered_qos_profiles:";

/// Indentation of sub-field names inside the jazzy block. The first list
/// entry reaches the same offset through its `- ` marker.
pub const FIELD_INDENT: usize = 12;
/// Column of the seconds value on the first line after a duration declaration.
pub const SEC_COLUMN: usize = 19;
/// Column of the nanoseconds value on the second line after a duration declaration.
pub const NSEC_COLUMN: usize = 20;

/// Opens the humble scalar right after the field name.
pub const BLOCK_OPEN: &str = " \"- ";
/// Closes the humble scalar.
pub const BLOCK_CLOSE: &str = "\"";
/// Between encoded sub-fields: literal backslash-n plus two spaces.
pub const FIELD_SEPARATOR: &str = "\\n  ";
/// Inside an encoded duration: literal backslash-n plus four spaces.
pub const DURATION_SEPARATOR: &str = "\\n    ";

/// How a sub-field's value is carried into the humble encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Value copied as-is.
    Verbatim,
    /// Symbolic value replaced by its code from the named table.
    Mapped(TableId),
    /// Declaration line plus {sec, nsec} value lines, collapsed into one
    /// encoded sub-field.
    Duration,
}

/// One expected sub-field of the jazzy block.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Name as written at [`FIELD_INDENT`], including any trailing `": "`
    /// the jazzy writer emits.
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Ordered sub-fields of the jazzy block. The writer fixes this order;
/// absent optional fields are simply skipped, never reordered.
pub const BLOCK_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "history: ",
        kind: FieldKind::Mapped(TableId::History),
    },
    FieldSpec {
        name: "depth: ",
        kind: FieldKind::Verbatim,
    },
    FieldSpec {
        name: "reliability: ",
        kind: FieldKind::Mapped(TableId::Reliability),
    },
    FieldSpec {
        name: "durability: ",
        kind: FieldKind::Mapped(TableId::Durability),
    },
    FieldSpec {
        name: "deadline:",
        kind: FieldKind::Duration,
    },
    FieldSpec {
        name: "lifespan:",
        kind: FieldKind::Duration,
    },
    FieldSpec {
        name: "liveliness: ",
        kind: FieldKind::Mapped(TableId::Liveliness),
    },
    FieldSpec {
        name: "liveliness_lease_duration:",
        kind: FieldKind::Duration,
    },
];

/// Final flag of the block; encoded as its bare value with no field name
/// and no trailing separator.
pub const TRAILING_FLAG: &str = "avoid_ros_namespace_conventions: ";

/// The text after `prefix` when `line` carries `prefix` at byte `offset`.
///
/// `None` when the line is too short or the prefix differs; callers treat
/// that as "sub-field absent".
pub fn value_at<'a>(line: &'a str, offset: usize, prefix: &str) -> Option<&'a str> {
    line.get(offset..)?.strip_prefix(prefix)
}

/// Text from a fixed column to end of line; empty when the line is shorter.
pub fn tail_at(line: &str, column: usize) -> &str {
    line.get(column..).unwrap_or("")
}
