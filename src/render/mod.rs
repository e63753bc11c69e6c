// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text forms of windows.
//!
//! Everything here is a pure function over a window: the comma/list export
//! forms the clipboard actions produce, and the one-line mark strips the TUI
//! and CLI print.

pub mod strip;
pub mod text;

pub use strip::{cell_mark, strip};
pub use text::{
    csv_cells, csv_values, literal_list, row_list_name, segment_lengths_line, value_list_name,
    COMPOSITE_LIST_NAME,
};
