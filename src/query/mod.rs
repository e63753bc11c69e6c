// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over windows.
//!
//! Queries provide derived views (conflict positions, per-value breakdowns)
//! that power highlighting and the expanded composite panel.

pub mod composite;
pub mod conflicts;

pub use composite::{decompose, distinct_values};
pub use conflicts::detect_conflicts;
