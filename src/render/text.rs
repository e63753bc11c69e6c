// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::window::{segments_of, Window};

/// The exported name of the merged row.
pub const COMPOSITE_LIST_NAME: &str = "final_product_row";

/// The literal token empty cells render as.
const EMPTY_TOKEN: &str = "None";

pub fn row_list_name(row: impl std::fmt::Display) -> String {
    format!("python_list_{row}")
}

pub fn value_list_name(value: i64) -> String {
    format!("python_list_value_{value}")
}

/// Occupied values only, joined by `,`.
pub fn csv_values(window: &Window) -> String {
    let mut out = String::new();
    let mut buffer = itoa::Buffer::new();
    for cell in window.cells() {
        let Some(value) = cell.value() else {
            continue;
        };
        if !out.is_empty() {
            out.push(',');
        }
        out.push_str(buffer.format(value));
    }
    out
}

/// Every cell, empty cells as `None`, joined by `,`.
pub fn csv_cells(window: &Window) -> String {
    let mut out = String::new();
    let mut buffer = itoa::Buffer::new();
    for (index, cell) in window.cells().iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        match cell.value() {
            Some(value) => out.push_str(buffer.format(value)),
            None => out.push_str(EMPTY_TOKEN),
        }
    }
    out
}

/// The literal-list form: `name = [v0, None, v2, …]`.
pub fn literal_list(name: &str, window: &Window) -> String {
    let mut out = String::with_capacity(name.len() + 4 + window.width() * 3);
    out.push_str(name);
    out.push_str(" = [");

    let mut buffer = itoa::Buffer::new();
    for (index, cell) in window.cells().iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        match cell.value() {
            Some(value) => out.push_str(buffer.format(value)),
            None => out.push_str(EMPTY_TOKEN),
        }
    }

    out.push(']');
    out
}

/// A row's segment lengths, joined by `, `.
pub fn segment_lengths_line(window: &Window) -> String {
    let mut out = String::new();
    let mut buffer = itoa::Buffer::new();
    for segment in segments_of(window) {
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push_str(buffer.format(segment.length));
    }
    out
}

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text.chars().count();
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}
