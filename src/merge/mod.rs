// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Merge strategies.
//!
//! Two ways to fold ordered per-row windows into one composite: interleaving
//! (preserves each row's internal spacing, order-sensitive) and overlay
//! (preserves absolute positions, fails on collision).

pub mod interleave;
pub mod overlay;

pub use interleave::interleave_merge;
pub use overlay::{overlay_merge, MergeConflict};
