// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Re-encoding of the `offered_qos_profiles` block (jazzy -> humble).

mod encoder;
mod layout;
mod tables;

pub use encoder::reencode_block;
pub use layout::{value_at, FieldKind, FieldSpec, BLOCK_FIELDS, BLOCK_TRIGGER, FIELD_INDENT};
pub use tables::{QosTables, TableId};
