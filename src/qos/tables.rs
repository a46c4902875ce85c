// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Symbolic QoS value tables (jazzy names -> humble numeric codes).
//!
//! The codes follow the rmw policy encodings humble expects inside
//! `offered_qos_profiles`. They are not guaranteed complete: a symbol with
//! no entry encodes as an empty value, which humble may later reject as an
//! incompatible policy. That is an accepted limitation of the translation,
//! not a runtime error.

use std::collections::HashMap;

/// Which lookup table a mapped sub-field resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableId {
    History,
    Reliability,
    Durability,
    Liveliness,
}

/// Immutable symbolic-value tables, built once at startup and shared by
/// reference for the whole run.
#[derive(Debug, Clone)]
pub struct QosTables {
    history: HashMap<&'static str, &'static str>,
    reliability: HashMap<&'static str, &'static str>,
    durability: HashMap<&'static str, &'static str>,
    liveliness: HashMap<&'static str, &'static str>,
}

impl QosTables {
    /// Tables targeting the humble encoding.
    #[must_use]
    pub fn humble() -> Self {
        Self {
            history: HashMap::from([("keep_last", "1"), ("keep_all", "2"), ("unknown", "3")]),
            reliability: HashMap::from([("best_effort", "2"), ("reliable", "1")]),
            durability: HashMap::from([("transient_local", "1"), ("volatile", "2")]),
            liveliness: HashMap::from([("automatic", "1"), ("manual_by_topic", "2")]),
        }
    }

    /// Code for `symbol`, or `""` when the table has no entry.
    #[must_use]
    pub fn lookup(&self, table: TableId, symbol: &str) -> &str {
        let map = match table {
            TableId::History => &self.history,
            TableId::Reliability => &self.reliability,
            TableId::Durability => &self.durability,
            TableId::Liveliness => &self.liveliness,
        };
        map.get(symbol).copied().unwrap_or("")
    }
}

impl Default for QosTables {
    fn default() -> Self {
        Self::humble()
    }
}
