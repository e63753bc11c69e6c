// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::window::Window;

/// Positions occupied by more than one of the given windows.
///
/// The caller passes only the rows it considers active; `enabled` mirrors the
/// highlight-mode flag, so a disabled detector always reports nothing rather
/// than making the caller branch.
pub fn detect_conflicts(windows: &[Window], enabled: bool) -> BTreeSet<usize> {
    if !enabled {
        return BTreeSet::new();
    }

    let mut counts = BTreeMap::<usize, u32>::new();
    for window in windows {
        for (position, cell) in window.cells().iter().enumerate() {
            if !cell.is_empty() {
                *counts.entry(position).or_insert(0) += 1;
            }
        }
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(position, _)| position)
        .collect()
}
