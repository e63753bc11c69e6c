// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::window::{Cell, Window};

/// Distinct occupied values of a composite, in first-appearance order.
pub fn distinct_values(composite: &Window) -> Vec<i64> {
    let mut values = Vec::new();
    for cell in composite.cells() {
        if let Some(value) = cell.value() {
            if !values.contains(&value) {
                values.push(value);
            }
        }
    }
    values
}

/// Splits a composite into one window per distinct value.
///
/// Each returned window has the composite's width and keeps only that value's
/// cells; everything else is empty. This feeds the expanded composite panel
/// and the `python_list_value_<v>` export form.
pub fn decompose(composite: &Window) -> Vec<(i64, Window)> {
    distinct_values(composite)
        .into_iter()
        .map(|value| {
            let cells = composite
                .cells()
                .iter()
                .map(|cell| match cell.value() {
                    Some(cell_value) if cell_value == value => *cell,
                    _ => Cell::Empty,
                })
                .collect();
            (value, Window::from_cells(cells))
        })
        .collect()
}
