// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations and engine entry points.
//!
//! Operations are applied with optimistic concurrency (revision checks) and
//! produce a minimal delta telling the UI which derived windows to refresh.
//! A batch either applies fully or leaves the session untouched, so a row's
//! previous valid window survives any rejected edit.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::layout::{generate, materialize};
use crate::merge::{interleave_merge, overlay_merge, MergeConflict};
use crate::model::ids::RowId;
use crate::model::params::{ParamError, RowParameters, SpacingLaw};
use crate::model::session::Session;
use crate::model::window::Window;
use crate::query::detect_conflicts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    SetBaseValue { row: RowId, value: i64 },
    SetPeriodicInterval { row: RowId, value: i64 },
    SetSpacingLaw { row: RowId, law: SpacingLaw },
    SetInstanceCount { row: RowId, value: u32 },
    SetShift { row: RowId, value: i64 },
    ResetRow { row: RowId },
    ToggleRank { row: RowId },
    SetRowCount { count: u32 },
    SetHighlightConflicts { enabled: bool },
    SetEditAll { enabled: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

/// Minimal delta describing what changed as the result of applying ops.
///
/// This is intentionally coarse: `regenerated` lists rows whose windows must
/// be rebuilt; the flags say whether merge order, visibility or mode flags
/// moved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub regenerated: Vec<RowId>,
    pub order_changed: bool,
    pub visibility_changed: bool,
    pub modes_changed: bool,
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    regenerated: HashSet<RowId>,
    order_changed: bool,
    visibility_changed: bool,
    modes_changed: bool,
}

impl DeltaBuilder {
    fn record_regenerated(&mut self, row: RowId) {
        self.regenerated.insert(row);
    }

    fn record_order_changed(&mut self) {
        self.order_changed = true;
    }

    fn record_visibility_changed(&mut self) {
        self.visibility_changed = true;
    }

    fn record_modes_changed(&mut self) {
        self.modes_changed = true;
    }

    fn finish(self) -> Delta {
        let mut regenerated = self.regenerated.into_iter().collect::<Vec<_>>();
        regenerated.sort_unstable();

        Delta {
            regenerated,
            order_changed: self.order_changed,
            visibility_changed: self.visibility_changed,
            modes_changed: self.modes_changed,
        }
    }
}

pub fn apply_ops(
    session: &mut Session,
    base_rev: u64,
    ops: &[Op],
) -> Result<ApplyResult, ApplyError> {
    let current_rev = session.rev();
    if base_rev != current_rev {
        return Err(ApplyError::Conflict {
            base_rev,
            current_rev,
        });
    }

    if ops.is_empty() {
        return Ok(ApplyResult {
            new_rev: current_rev,
            applied: 0,
            delta: Delta::default(),
        });
    }

    // Apply against a scratch copy so a mid-batch rejection leaves the
    // session (and every window derived from it) untouched.
    let mut next = session.clone();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        apply_op(&mut next, op, &mut delta)?;
    }

    next.bump_rev();
    let new_rev = next.rev();
    *session = next;

    Ok(ApplyResult {
        new_rev,
        applied: ops.len(),
        delta: delta.finish(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    Conflict { base_rev: u64, current_rev: u64 },
    HiddenRow { row: RowId, row_count: u32 },
    InvalidParameter { row: RowId, reason: ParamError },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict {
                base_rev,
                current_rev,
            } => {
                write!(
                    f,
                    "stale base_rev (base_rev={base_rev}, current_rev={current_rev})"
                )
            }
            Self::HiddenRow { row, row_count } => {
                write!(f, "row {row} is beyond the visible count of {row_count}")
            }
            Self::InvalidParameter { row, reason } => {
                write!(f, "invalid parameter for row {row}: {reason}")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

/// A row's dense window, regenerated from its current parameters.
pub fn row_window(session: &Session, row: RowId) -> Window {
    let entries = generate(&session.params(row), row, session.generator());
    materialize(&entries, session.window_width())
}

/// All visible rows' windows, ascending by row id.
pub fn visible_windows(session: &Session) -> Vec<(RowId, Window)> {
    session
        .visible_rows()
        .into_iter()
        .map(|row| (row, row_window(session, row)))
        .collect()
}

/// Conflict positions across the visible rows, honoring the highlight flag.
pub fn conflicts(session: &Session) -> BTreeSet<usize> {
    let windows: Vec<Window> = visible_windows(session)
        .into_iter()
        .map(|(_, window)| window)
        .collect();
    detect_conflicts(&windows, session.highlight_conflicts())
}

/// The interleaved composite over the visible rows in resolved rank order.
pub fn compute_composite(session: &Session) -> Window {
    let order = session.rank().resolve_order(&session.visible_rows());
    let ordered: Vec<(RowId, Window)> = order
        .into_iter()
        .map(|row| (row, row_window(session, row)))
        .collect();
    interleave_merge(&ordered)
}

/// The overlay composite over the visible rows; fails on the first collision.
pub fn static_composite(session: &Session) -> Result<Window, MergeConflict> {
    overlay_merge(&visible_windows(session))
}

// Extracted op-application implementation.
include!("ops_impl.rs");
