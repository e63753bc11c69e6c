// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ids::{RowId, MAX_ROWS};
use super::params::{GeneratorConfig, RowParameters};
use super::rank::RankMap;

pub const DEFAULT_ROW_COUNT: u32 = 10;
pub const DEFAULT_WINDOW_WIDTH: usize = 1000;

/// The long-lived container the TUI runs against.
///
/// Only parameters, flags and ranks live here. Pattern entries, windows and
/// composites are derived values; consumers recompute them from this snapshot
/// and never hand a previous result back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    params: BTreeMap<RowId, RowParameters>,
    row_count: u32,
    rank: RankMap,
    highlight_conflicts: bool,
    edit_all: bool,
    window_width: usize,
    generator: GeneratorConfig,
    rev: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            params: BTreeMap::new(),
            row_count: DEFAULT_ROW_COUNT,
            rank: RankMap::new(),
            highlight_conflicts: false,
            edit_all: false,
            window_width: DEFAULT_WINDOW_WIDTH,
            generator: GeneratorConfig::default(),
            rev: 0,
        }
    }

    pub fn with_row_count(mut self, count: u32) -> Self {
        self.set_row_count(count);
        self
    }

    pub fn with_window_width(mut self, width: usize) -> Self {
        self.window_width = width.max(1);
        self
    }

    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// A row's parameters; rows that were never edited sit on the default
    /// tuple.
    pub fn params(&self, row: RowId) -> RowParameters {
        self.params.get(&row).copied().unwrap_or_default()
    }

    pub fn set_params(&mut self, row: RowId, params: RowParameters) {
        self.params.insert(row, params);
    }

    pub fn reset_params(&mut self, row: RowId) {
        self.params.remove(&row);
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Clamped to `1..=MAX_ROWS`, mirroring the row-count input control.
    pub fn set_row_count(&mut self, count: u32) {
        self.row_count = count.clamp(1, MAX_ROWS);
    }

    pub fn visible_rows(&self) -> Vec<RowId> {
        (1..=self.row_count)
            .filter_map(|value| RowId::new(value).ok())
            .collect()
    }

    pub fn is_visible(&self, row: RowId) -> bool {
        row.get() <= self.row_count
    }

    pub fn rank(&self) -> &RankMap {
        &self.rank
    }

    pub fn rank_mut(&mut self) -> &mut RankMap {
        &mut self.rank
    }

    pub fn highlight_conflicts(&self) -> bool {
        self.highlight_conflicts
    }

    pub fn set_highlight_conflicts(&mut self, enabled: bool) {
        self.highlight_conflicts = enabled;
    }

    pub fn edit_all(&self) -> bool {
        self.edit_all
    }

    pub fn set_edit_all(&mut self, enabled: bool) {
        self.edit_all = enabled;
    }

    pub fn window_width(&self) -> usize {
        self.window_width
    }

    pub fn generator(&self) -> GeneratorConfig {
        self.generator
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn set_rev(&mut self, rev: u64) {
        self.rev = rev;
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }
}
