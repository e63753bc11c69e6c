// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Weft — terminal pattern-row sequencer (generation + merge engine + TUI).
//!
//! Rows are sparse integer patterns over a shared timeline; the engine
//! generates them from small parameter tuples, detects cross-row conflicts
//! and folds the rows into one composite row by interleaving or overlay.

pub mod layout;
pub mod merge;
pub mod model;
pub mod ops;
pub mod query;
pub mod render;
pub mod tui;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
