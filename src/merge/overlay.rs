// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::ids::RowId;
use crate::model::window::{Cell, Occupancy, Window};

/// Two rows claimed the same absolute position during an overlay merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeConflict {
    position: usize,
    first: RowId,
    second: RowId,
}

impl MergeConflict {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn first(&self) -> RowId {
        self.first
    }

    pub fn second(&self) -> RowId {
        self.second
    }
}

impl fmt::Display for MergeConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows {} and {} both claim position {}",
            self.first, self.second, self.position
        )
    }
}

impl std::error::Error for MergeConflict {}

/// Overlay merge: every row's values land at their original absolute
/// positions, no re-indexing.
///
/// The first detected collision aborts the whole merge; no partial composite
/// ever reaches the caller. Row order does not affect a successful result,
/// only which collision gets reported first.
pub fn overlay_merge(rows: &[(RowId, Window)]) -> Result<Window, MergeConflict> {
    let width = rows
        .iter()
        .map(|(_, window)| window.width())
        .max()
        .unwrap_or(0);
    let mut composite = Window::empty(width);

    for (row, window) in rows {
        for (position, cell) in window.cells().iter().enumerate() {
            let Some(occupancy) = cell.occupancy() else {
                continue;
            };
            if let Some(existing) = composite.get(position).and_then(Cell::occupancy) {
                return Err(MergeConflict {
                    position,
                    first: existing.row,
                    second: *row,
                });
            }
            // width is the max over all rows, so position is in bounds.
            if let Some(slot) = composite.cell_mut(position) {
                *slot = Cell::Occupied(Occupancy {
                    value: occupancy.value,
                    row: *row,
                });
            }
        }
    }

    Ok(composite)
}
