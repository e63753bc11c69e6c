// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::window::{Cell, Window};

/// One-line mark strip of a window.
///
/// Occupied cells render as the last digit of their value, empty cells as
/// `·`. Deterministic and width-preserving; the TUI colors the same marks
/// instead of re-deriving them.
pub fn strip(window: &Window) -> String {
    window.cells().iter().map(cell_mark).collect()
}

/// The single-character mark for one cell.
pub fn cell_mark(cell: &Cell) -> char {
    match cell.value() {
        Some(value) => {
            let digit = value.rem_euclid(10) as u32;
            char::from_digit(digit, 10).unwrap_or('#')
        }
        None => '·',
    }
}
