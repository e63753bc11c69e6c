// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::window::{Cell, Occupancy, Window};

use super::pattern::PatternEntry;

/// Materializes generated entries into a dense window of `width` slots.
///
/// Fillers and positions outside `0..width` are dropped; that is policy, not
/// an error. Should two entries of the same sequence land on one slot, the
/// later entry wins.
pub fn materialize(entries: &[PatternEntry], width: usize) -> Window {
    let mut window = Window::empty(width);

    for entry in entries {
        if entry.is_filler() {
            continue;
        }
        let Ok(position) = usize::try_from(entry.position()) else {
            continue;
        };
        let Some(cell) = window.cell_mut(position) else {
            continue;
        };
        *cell = Cell::Occupied(Occupancy {
            value: entry.value(),
            row: entry.row(),
        });
    }

    window
}
