// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Hard ceiling on the number of rows a session can show.
pub const MAX_ROWS: u32 = 50;

/// A stable, 1-based row identifier.
///
/// Row ids double as the numeric value a row writes into cells, so they are
/// validated once here (`1..=MAX_ROWS`) and treated as infallible everywhere
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RowId(u32);

impl RowId {
    pub fn new(value: u32) -> Result<Self, RowIdError> {
        if value == 0 {
            return Err(RowIdError::Zero);
        }
        if value > MAX_ROWS {
            return Err(RowIdError::AboveMax { value });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The numeric value this row stamps into occupied cells.
    pub fn value(self) -> i64 {
        i64::from(self.0)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RowId {
    type Err = RowIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.parse().map_err(|_| RowIdError::NotANumber)?;
        Self::new(value)
    }
}

impl TryFrom<u32> for RowId {
    type Error = RowIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIdError {
    Zero,
    AboveMax { value: u32 },
    NotANumber,
}

impl fmt::Display for RowIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("row id must be at least 1"),
            Self::AboveMax { value } => {
                write!(f, "row id {value} exceeds the maximum of {MAX_ROWS}")
            }
            Self::NotANumber => f.write_str("row id must be a positive integer"),
        }
    }
}

impl std::error::Error for RowIdError {}
