// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use weft::model::{RowId, Session, SpacingLaw, Window};

pub mod rows {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub row_count: u32,
        pub instances: u32,
        pub window_width: usize,
        pub law: SpacingLaw,
    }

    impl Params {
        pub const fn new(
            row_count: u32,
            instances: u32,
            window_width: usize,
            law: SpacingLaw,
        ) -> Self {
            Self {
                row_count,
                instances,
                window_width,
                law,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Medium,
        LargeCubic,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Medium => "medium",
                Self::LargeCubic => "large_cubic",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(4, 5, 200, SpacingLaw::Linear),
                Self::Medium => Params::new(10, 10, 1000, SpacingLaw::Linear),
                Self::LargeCubic => Params::new(50, 20, 1000, SpacingLaw::Cubic),
            }
        }
    }

    /// A session where every visible row gets a distinct base and shift so
    /// the merges have real interleaving work to do.
    pub fn session(params: Params) -> Session {
        let mut session = Session::new()
            .with_row_count(params.row_count)
            .with_window_width(params.window_width);

        for row in session.visible_rows() {
            let mut row_params = session.params(row);
            row_params
                .set_base_value(1 + row.value() % 4)
                .expect("valid base value");
            row_params
                .set_instance_count(params.instances)
                .expect("valid instance count");
            row_params.set_spacing_law(params.law);
            row_params.set_shift(row.value() - 1);
            session.set_params(row, row_params);
        }

        session
    }

    pub fn fixture(case: Case) -> Session {
        session(case.params())
    }
}

pub fn checksum_window(window: &Window) -> u64 {
    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(window.width() as u64);
    for (position, cell) in window.cells().iter().enumerate() {
        let Some(occupancy) = cell.occupancy() else {
            continue;
        };
        acc = acc.wrapping_mul(131).wrapping_add(position as u64);
        acc = acc.wrapping_mul(131).wrapping_add(occupancy.value as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(u64::from(occupancy.row.get()));
    }
    acc
}

pub fn checksum_positions(positions: impl IntoIterator<Item = usize>) -> u64 {
    let mut acc = 0u64;
    for position in positions {
        acc = acc.wrapping_mul(131).wrapping_add(position as u64);
    }
    acc
}

pub fn first_row(session: &Session) -> RowId {
    session.visible_rows()[0]
}
