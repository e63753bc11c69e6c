// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ids::RowId;

/// User-assigned compute priorities.
///
/// Invariant: ranks always form the contiguous run `1..=len()`. The invariant
/// is maintained by the mutation operations themselves; there is no separate
/// cleanup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankMap {
    ranks: BTreeMap<RowId, u32>,
}

impl RankMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rank_of(&self, row: RowId) -> Option<u32> {
        self.ranks.get(&row).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn clear(&mut self) {
        self.ranks.clear();
    }

    /// Assigns the next free rank (`len + 1`) to `row`; no-op if already
    /// ranked.
    pub fn assign_next(&mut self, row: RowId) -> u32 {
        if let Some(rank) = self.rank_of(row) {
            return rank;
        }
        let next = self.ranks.values().copied().max().unwrap_or(0) + 1;
        self.ranks.insert(row, next);
        next
    }

    /// Removes `row`'s rank and closes the gap: every rank above the removed
    /// one moves down by one.
    pub fn remove(&mut self, row: RowId) -> Option<u32> {
        let removed = self.ranks.remove(&row)?;
        for rank in self.ranks.values_mut() {
            if *rank > removed {
                *rank -= 1;
            }
        }
        Some(removed)
    }

    /// Ranks `row` if unranked, unranks it otherwise.
    pub fn toggle(&mut self, row: RowId) {
        if self.remove(row).is_none() {
            self.assign_next(row);
        }
    }

    /// Resolves the merge order over `visible`: ranked rows first, ascending
    /// by rank, then unranked rows ascending by row id. Ranked rows outside
    /// `visible` are skipped (their ranks stay assigned for when they return).
    pub fn resolve_order(&self, visible: &[RowId]) -> Vec<RowId> {
        let mut ranked: Vec<(u32, RowId)> = visible
            .iter()
            .filter_map(|row| self.rank_of(*row).map(|rank| (rank, *row)))
            .collect();
        ranked.sort_unstable();

        let mut unranked: Vec<RowId> = visible
            .iter()
            .filter(|row| self.rank_of(**row).is_none())
            .copied()
            .collect();
        unranked.sort_unstable();

        ranked
            .into_iter()
            .map(|(_, row)| row)
            .chain(unranked)
            .collect()
    }

    #[cfg(test)]
    fn is_contiguous(&self) -> bool {
        let mut ranks: Vec<u32> = self.ranks.values().copied().collect();
        ranks.sort_unstable();
        ranks.iter().enumerate().all(|(i, rank)| *rank == i as u32 + 1)
    }
}
