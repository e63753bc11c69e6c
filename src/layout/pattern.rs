// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::ids::RowId;
use crate::model::params::{GeneratorConfig, RowParameters};

/// One generated timeline entry for a row.
///
/// `instance: None` marks a filler: a slot reserved for spacing by the
/// periodic-fill mode, never materialized as occupied. Positions may be
/// negative or past any window; materialization drops those silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternEntry {
    row: RowId,
    instance: Option<u32>,
    position: i64,
}

impl PatternEntry {
    pub fn row(&self) -> RowId {
        self.row
    }

    pub fn instance(&self) -> Option<u32> {
        self.instance
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn is_filler(&self) -> bool {
        self.instance.is_none()
    }

    pub fn value(&self) -> i64 {
        self.row.value()
    }

    #[cfg(test)]
    pub(crate) fn for_tests(row: RowId, instance: Option<u32>, position: i64) -> Self {
        Self {
            row,
            instance,
            position,
        }
    }
}

/// Deterministic position generation for one row.
///
/// The cursor starts at the shift (clamped to 0 when `config.clamp_shift`),
/// then advances by `spacing_law(base_value + n) * periodic_interval` ahead of
/// every instance after the first. In periodic-fill mode each instance is
/// followed by `interval - 1` filler entries and an extra cursor advance of
/// the same amount.
pub fn generate(params: &RowParameters, row: RowId, config: GeneratorConfig) -> Vec<PatternEntry> {
    let interval = params.periodic_interval();
    let fillers_per_instance = if config.periodic_fill && interval > 1 {
        (interval - 1) as usize
    } else {
        0
    };

    let count = params.instance_count() as usize;
    let mut entries = Vec::with_capacity(count * (1 + fillers_per_instance));

    let mut current = if config.clamp_shift {
        params.shift().max(0)
    } else {
        params.shift()
    };

    for n in 0..params.instance_count() {
        let space = params
            .spacing_law()
            .space(params.base_value(), n)
            .saturating_mul(interval);

        if n > 0 {
            current = current.saturating_add(space);
        }

        entries.push(PatternEntry {
            row,
            instance: Some(n),
            position: current,
        });

        if fillers_per_instance > 0 {
            for i in 1..interval {
                entries.push(PatternEntry {
                    row,
                    instance: None,
                    position: current.saturating_add(i),
                });
            }
            current = current.saturating_add(interval - 1);
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::generate;
    use crate::model::ids::RowId;
    use crate::model::params::{GeneratorConfig, RowParameters, SpacingLaw};

    fn row() -> RowId {
        RowId::new(1).expect("row id")
    }

    fn params(
        base_value: i64,
        interval: i64,
        law: SpacingLaw,
        instances: u32,
        shift: i64,
    ) -> RowParameters {
        let mut params = RowParameters::default();
        params.set_base_value(base_value).expect("base value");
        params.set_periodic_interval(interval).expect("interval");
        params.set_spacing_law(law);
        params.set_instance_count(instances).expect("instances");
        params.set_shift(shift);
        params
    }

    fn positions(entries: &[super::PatternEntry]) -> Vec<i64> {
        entries
            .iter()
            .filter(|entry| !entry.is_filler())
            .map(|entry| entry.position())
            .collect()
    }

    #[test]
    fn linear_base_one_locks_the_reference_sequence() {
        // The canonical worked example: spaces 1,2,3 -> positions 0,2,5.
        let entries = generate(
            &params(1, 1, SpacingLaw::Linear, 3, 0),
            row(),
            GeneratorConfig::default(),
        );
        assert_eq!(positions(&entries), vec![0, 2, 5]);
    }

    #[test]
    fn shifted_linear_base_two_locks_the_second_reference_sequence() {
        let entries = generate(
            &params(2, 1, SpacingLaw::Linear, 2, 1),
            row(),
            GeneratorConfig::default(),
        );
        assert_eq!(positions(&entries), vec![1, 4]);
    }

    #[rstest]
    #[case(SpacingLaw::Linear, vec![0, 3, 7, 12])]
    #[case(SpacingLaw::Quadratic, vec![0, 9, 25, 50])]
    #[case(SpacingLaw::Cubic, vec![0, 27, 91, 216])]
    fn laws_accumulate_their_own_growth(
        #[case] law: SpacingLaw,
        #[case] expected: Vec<i64>,
    ) {
        let entries = generate(&params(2, 1, law, 4, 0), row(), GeneratorConfig::default());
        assert_eq!(positions(&entries), expected);
    }

    #[test]
    fn interval_scales_every_space() {
        let entries = generate(
            &params(1, 3, SpacingLaw::Linear, 3, 0),
            row(),
            GeneratorConfig::default(),
        );
        // Spaces 1,2,3 scaled by 3 -> 3,6,9; cumulative from 0: 0,6,15.
        assert_eq!(positions(&entries), vec![0, 6, 15]);
    }

    #[test]
    fn clamped_negative_shift_starts_at_zero() {
        let entries = generate(
            &params(1, 1, SpacingLaw::Linear, 2, -4),
            row(),
            GeneratorConfig::default(),
        );
        assert_eq!(positions(&entries), vec![0, 2]);
    }

    #[test]
    fn unclamped_negative_shift_keeps_negative_positions() {
        let config = GeneratorConfig {
            clamp_shift: false,
            ..GeneratorConfig::default()
        };
        let entries = generate(&params(1, 1, SpacingLaw::Linear, 2, -4), row(), config);
        assert_eq!(positions(&entries), vec![-4, -2]);
    }

    #[test]
    fn periodic_fill_reserves_slots_behind_each_instance() {
        let config = GeneratorConfig {
            periodic_fill: true,
            ..GeneratorConfig::default()
        };
        let entries = generate(&params(1, 3, SpacingLaw::Linear, 2, 0), row(), config);

        // Instance 0 at 0, fillers at 1 and 2, cursor bumped to 2; instance 1
        // advances by (1+1)*3 = 6 to 8, fillers at 9 and 10.
        let occupied = positions(&entries);
        assert_eq!(occupied, vec![0, 8]);

        let fillers: Vec<i64> = entries
            .iter()
            .filter(|entry| entry.is_filler())
            .map(|entry| entry.position())
            .collect();
        assert_eq!(fillers, vec![1, 2, 9, 10]);
    }

    #[test]
    fn generation_is_pure() {
        let params = params(3, 2, SpacingLaw::Quadratic, 5, 2);
        let config = GeneratorConfig::default();
        assert_eq!(
            generate(&params, row(), config),
            generate(&params, row(), config)
        );
    }

    #[test]
    fn entries_carry_the_row_value_and_instance_index() {
        let entries = generate(
            &params(1, 1, SpacingLaw::Linear, 2, 0),
            RowId::new(4).expect("row id"),
            GeneratorConfig::default(),
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value(), 4);
        assert_eq!(entries[0].instance(), Some(0));
        assert_eq!(entries[1].instance(), Some(1));
    }
}
