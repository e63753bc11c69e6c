// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Sessions hold per-row parameters, the visible row count, compute ranks and
//! mode flags; windows and composites are derived from them.

pub mod ids;
pub mod params;
pub mod rank;
pub mod session;
pub mod window;

pub use ids::{RowId, RowIdError, MAX_ROWS};
pub use params::{GeneratorConfig, ParamError, RowParameters, SpacingLaw};
pub use rank::RankMap;
pub use session::{Session, DEFAULT_ROW_COUNT, DEFAULT_WINDOW_WIDTH};
pub use window::{segments_of, Cell, Occupancy, Segment, Window};
