// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pattern layout.
//!
//! This module turns a row's parameter tuple into timeline positions and
//! materializes them into a dense window.

pub mod materialize;
pub mod pattern;

pub use materialize::materialize;
pub use pattern::{generate, PatternEntry};
