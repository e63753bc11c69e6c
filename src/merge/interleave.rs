// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::ids::RowId;
use crate::model::window::{segments_of, Cell, Occupancy, Window};

/// Segment-preserving interleave of ordered rows into one composite.
///
/// The first row seeds the composite cell-by-cell. Every later row walks its
/// own segment lengths with a cursor that starts at 0 for that row and is
/// carried across its segments: for a segment of length `s`, the cursor
/// consumes empty composite cells until `s` of them have passed (extending
/// the composite when it runs out) and writes into the `s`-th one. Occupied
/// cells are never overwritten, so later rows land in the gaps the earlier
/// rows left; the same rows in a different order give a different composite.
///
/// The output is a fresh value every time. Feeding a composite back in as a
/// row is meaningless; callers recompute from the authoritative per-row
/// windows.
pub fn interleave_merge(rows: &[(RowId, Window)]) -> Window {
    let mut iter = rows.iter();
    let Some((first_row, first_window)) = iter.next() else {
        return Window::empty(0);
    };

    let mut composite: Vec<Cell> = first_window
        .cells()
        .iter()
        .map(|cell| match cell.occupancy() {
            Some(occupancy) => Cell::Occupied(Occupancy {
                value: occupancy.value,
                row: *first_row,
            }),
            None => Cell::Empty,
        })
        .collect();

    for (row, window) in iter {
        let mut cursor = 0usize;

        for segment in segments_of(window) {
            let mut empties = 0usize;
            while empties < segment.length && cursor < composite.len() {
                if composite[cursor].is_empty() {
                    empties += 1;
                }
                cursor += 1;
            }
            while empties < segment.length {
                composite.push(Cell::Empty);
                empties += 1;
                cursor += 1;
            }

            // segments_of only yields occupied indices.
            let value = window
                .get(segment.index)
                .and_then(Cell::value)
                .expect("segment indexes an occupied cell");
            composite[cursor - 1] = Cell::Occupied(Occupancy { value, row: *row });
        }
    }

    Window::from_cells(composite)
}

#[cfg(test)]
mod tests {
    use super::interleave_merge;
    use crate::model::ids::RowId;
    use crate::model::window::{Cell, Occupancy, Window};

    fn row(value: u32) -> RowId {
        RowId::new(value).expect("row id")
    }

    fn window_with(row_id: RowId, positions: &[usize], width: usize) -> Window {
        let mut window = Window::empty(width);
        for &position in positions {
            *window.cell_mut(position).expect("in bounds") = Cell::Occupied(Occupancy {
                value: row_id.value(),
                row: row_id,
            });
        }
        window
    }

    fn occupied(window: &Window) -> Vec<(usize, i64, RowId)> {
        window
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(position, cell)| {
                cell.occupancy()
                    .map(|occupancy| (position, occupancy.value, occupancy.row))
            })
            .collect()
    }

    #[test]
    fn no_rows_give_an_empty_composite() {
        assert_eq!(interleave_merge(&[]), Window::empty(0));
    }

    #[test]
    fn a_single_row_seeds_the_composite_verbatim() {
        let r1 = row(1);
        let rows = [(r1, window_with(r1, &[0, 2, 5], 10))];
        let composite = interleave_merge(&rows);

        assert_eq!(composite.width(), 10);
        assert_eq!(occupied(&composite), vec![(0, 1, r1), (2, 1, r1), (5, 1, r1)]);
    }

    #[test]
    fn the_reference_two_row_merge_lands_where_hand_computed() {
        // Row 1 occupies 0,2,5; row 2 occupies 1,4 (segment lengths 2 and 3).
        // Hand-walk: segment 2 consumes empties 1,3 -> cell 3; segment 3
        // consumes empties 4,6,7 -> cell 7.
        let r1 = row(1);
        let r2 = row(2);
        let rows = [
            (r1, window_with(r1, &[0, 2, 5], 10)),
            (r2, window_with(r2, &[1, 4], 10)),
        ];
        let composite = interleave_merge(&rows);

        assert_eq!(composite.width(), 10);
        assert_eq!(
            occupied(&composite),
            vec![(0, 1, r1), (2, 1, r1), (3, 2, r2), (5, 1, r1), (7, 2, r2)]
        );
    }

    #[test]
    fn merge_order_changes_the_composite() {
        let r1 = row(1);
        let r2 = row(2);
        let w1 = window_with(r1, &[0, 2, 5], 10);
        let w2 = window_with(r2, &[1, 4], 10);

        let forward = interleave_merge(&[(r1, w1.clone()), (r2, w2.clone())]);
        let reverse = interleave_merge(&[(r2, w2), (r1, w1)]);

        // Order sensitivity is the defining property, not a defect.
        assert_ne!(occupied(&forward), occupied(&reverse));
        assert_eq!(
            occupied(&reverse),
            vec![
                (0, 1, r1),
                (1, 2, r2),
                (3, 1, r1),
                (4, 2, r2),
                (7, 1, r1)
            ]
        );
    }

    #[test]
    fn rows_extend_the_composite_rather_than_dropping_cells() {
        let r1 = row(1);
        let r2 = row(2);
        // Seed is only 3 cells wide; row 2's last segment needs more room.
        let rows = [
            (r1, window_with(r1, &[0, 1, 2], 3)),
            (r2, window_with(r2, &[0, 4], 6)),
        ];
        let composite = interleave_merge(&rows);

        // Row 2 segments: lengths 1 and 4. Both run past the seeded width.
        assert_eq!(composite.width(), 8);
        assert_eq!(
            occupied(&composite),
            vec![(0, 1, r1), (1, 1, r1), (2, 1, r1), (3, 2, r2), (7, 2, r2)]
        );
    }

    #[test]
    fn a_row_with_no_occupied_cells_contributes_nothing() {
        let r1 = row(1);
        let r2 = row(2);
        let rows = [
            (r1, window_with(r1, &[1, 3], 6)),
            (r2, Window::empty(6)),
        ];
        let composite = interleave_merge(&rows);
        assert_eq!(occupied(&composite), vec![(1, 1, r1), (3, 1, r1)]);
    }

    #[test]
    fn occupied_cells_are_never_overwritten() {
        let r1 = row(1);
        let r2 = row(2);
        let r3 = row(3);
        let rows = [
            (r1, window_with(r1, &[0], 4)),
            (r2, window_with(r2, &[0], 4)),
            (r3, window_with(r3, &[0], 4)),
        ];
        let composite = interleave_merge(&rows);

        // Every row's first segment has length 1; each lands in the next gap.
        assert_eq!(
            occupied(&composite),
            vec![(0, 1, r1), (1, 2, r2), (2, 3, r3)]
        );
    }
}
