// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Included by mod.rs; not a standalone module.

fn apply_op(session: &mut Session, op: &Op, delta: &mut DeltaBuilder) -> Result<(), ApplyError> {
    match *op {
        Op::SetBaseValue { row, value } => {
            edit_params(session, row, delta, |params| params.set_base_value(value))
        }
        Op::SetPeriodicInterval { row, value } => edit_params(session, row, delta, |params| {
            params.set_periodic_interval(value)
        }),
        Op::SetSpacingLaw { row, law } => edit_params(session, row, delta, |params| {
            params.set_spacing_law(law);
            Ok(())
        }),
        Op::SetInstanceCount { row, value } => edit_params(session, row, delta, |params| {
            params.set_instance_count(value)
        }),
        Op::SetShift { row, value } => edit_params(session, row, delta, |params| {
            params.set_shift(value);
            Ok(())
        }),
        Op::ResetRow { row } => {
            for target in edit_targets(session, row)? {
                session.reset_params(target);
                delta.record_regenerated(target);
            }
            Ok(())
        }
        Op::ToggleRank { row } => {
            ensure_visible(session, row)?;
            session.rank_mut().toggle(row);
            delta.record_order_changed();
            Ok(())
        }
        Op::SetRowCount { count } => {
            let before = session.row_count();
            session.set_row_count(count);
            if session.row_count() != before {
                delta.record_visibility_changed();
            }
            Ok(())
        }
        Op::SetHighlightConflicts { enabled } => {
            if session.highlight_conflicts() != enabled {
                session.set_highlight_conflicts(enabled);
                delta.record_modes_changed();
            }
            Ok(())
        }
        Op::SetEditAll { enabled } => {
            if session.edit_all() != enabled {
                session.set_edit_all(enabled);
                delta.record_modes_changed();
            }
            Ok(())
        }
    }
}

fn ensure_visible(session: &Session, row: RowId) -> Result<(), ApplyError> {
    if session.is_visible(row) {
        Ok(())
    } else {
        Err(ApplyError::HiddenRow {
            row,
            row_count: session.row_count(),
        })
    }
}

/// The rows a parameter edit fans out to: the targeted row, or every visible
/// row when edit-all mode is on.
fn edit_targets(session: &Session, row: RowId) -> Result<Vec<RowId>, ApplyError> {
    ensure_visible(session, row)?;
    if session.edit_all() {
        Ok(session.visible_rows())
    } else {
        Ok(vec![row])
    }
}

fn edit_params(
    session: &mut Session,
    row: RowId,
    delta: &mut DeltaBuilder,
    edit: impl Fn(&mut RowParameters) -> Result<(), ParamError>,
) -> Result<(), ApplyError> {
    for target in edit_targets(session, row)? {
        let mut params = session.params(target);
        edit(&mut params).map_err(|reason| ApplyError::InvalidParameter {
            row: target,
            reason,
        })?;
        session.set_params(target, params);
        delta.record_regenerated(target);
    }
    Ok(())
}
