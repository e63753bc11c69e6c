// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use super::ids::RowId;

/// The payload of an occupied cell: the value a row placed there, and which
/// row placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occupancy {
    pub value: i64,
    pub row: RowId,
}

/// One slot of a dense window.
///
/// `Empty` is an explicit state, not an absent entry; there is no
/// "unset vs. cleared" ambiguity anywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Occupancy),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn occupancy(&self) -> Option<&Occupancy> {
        match self {
            Self::Empty => None,
            Self::Occupied(occupancy) => Some(occupancy),
        }
    }

    pub fn value(&self) -> Option<i64> {
        self.occupancy().map(|occupancy| occupancy.value)
    }
}

/// A dense, fixed-width slot array over the shared timeline.
///
/// Windows are derived values: regenerated wholesale on every parameter
/// change, never patched in place by consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Window {
    cells: Vec<Cell>,
}

impl Window {
    pub fn empty(width: usize) -> Self {
        Self {
            cells: vec![Cell::Empty; width],
        }
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, position: usize) -> Option<&Cell> {
        self.cells.get(position)
    }

    pub fn cell_mut(&mut self, position: usize) -> Option<&mut Cell> {
        self.cells.get_mut(position)
    }

    /// Occupied positions in ascending order.
    pub fn occupied_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(position, _)| position)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_all_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }
}

impl fmt::Display for Window {
    /// Debug-friendly form: occupied cells as their value, empty cells as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell.value() {
                Some(value) => write!(f, "[{value}]")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

/// A run of a row's pattern ending at an occupied index.
///
/// `length` is the distance from the previous occupied index, or from the
/// window start (inclusive) for the first segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub index: usize,
    pub length: usize,
}

/// Segment decomposition of a dense window.
///
/// Shared by the interleaving merger, the per-row segment display, and tests;
/// nothing re-derives this inline.
pub fn segments_of(window: &Window) -> SmallVec<[Segment; 16]> {
    let mut segments = SmallVec::new();
    let mut previous: Option<usize> = None;

    for (index, cell) in window.cells().iter().enumerate() {
        if cell.is_empty() {
            continue;
        }
        let length = match previous {
            None => index + 1,
            Some(prev) => index - prev,
        };
        segments.push(Segment { index, length });
        previous = Some(index);
    }

    segments
}
