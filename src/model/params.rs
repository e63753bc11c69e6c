// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;

/// How the gap between consecutive instances of a row grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpacingLaw {
    Linear,
    Quadratic,
    Cubic,
}

impl SpacingLaw {
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Quadratic => "Quadratic",
            Self::Cubic => "Cubic",
        }
    }

    /// The next law in the selector cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::Linear => Self::Quadratic,
            Self::Quadratic => Self::Cubic,
            Self::Cubic => Self::Linear,
        }
    }

    /// Raw spacing ahead of instance `n` (before the periodic interval scale).
    pub fn space(self, base_value: i64, n: u32) -> i64 {
        let k = base_value.saturating_add(i64::from(n));
        match self {
            Self::Linear => k,
            Self::Quadratic => k.saturating_mul(k),
            Self::Cubic => k.saturating_mul(k).saturating_mul(k),
        }
    }
}

impl fmt::Display for SpacingLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The per-row parameter tuple patterns are generated from.
///
/// Setters validate; a row keeps its previous (valid) parameters whenever a
/// setter is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowParameters {
    base_value: i64,
    periodic_interval: i64,
    spacing_law: SpacingLaw,
    instance_count: u32,
    shift: i64,
}

impl Default for RowParameters {
    /// The reset tuple: `{1, 1, Linear, 10, 0}`.
    fn default() -> Self {
        Self {
            base_value: 1,
            periodic_interval: 1,
            spacing_law: SpacingLaw::Linear,
            instance_count: 10,
            shift: 0,
        }
    }
}

impl RowParameters {
    pub fn base_value(&self) -> i64 {
        self.base_value
    }

    pub fn periodic_interval(&self) -> i64 {
        self.periodic_interval
    }

    pub fn spacing_law(&self) -> SpacingLaw {
        self.spacing_law
    }

    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }

    pub fn set_base_value(&mut self, value: i64) -> Result<(), ParamError> {
        if value < 0 {
            return Err(ParamError::NegativeBaseValue { value });
        }
        self.base_value = value;
        Ok(())
    }

    pub fn set_periodic_interval(&mut self, value: i64) -> Result<(), ParamError> {
        if value < 1 {
            return Err(ParamError::NonPositiveInterval { value });
        }
        self.periodic_interval = value;
        Ok(())
    }

    pub fn set_instance_count(&mut self, value: u32) -> Result<(), ParamError> {
        if value == 0 {
            return Err(ParamError::ZeroInstances);
        }
        self.instance_count = value;
        Ok(())
    }

    pub fn set_spacing_law(&mut self, law: SpacingLaw) {
        self.spacing_law = law;
    }

    /// Any integer is a valid shift; negative cursor starts are window policy,
    /// not a parameter error.
    pub fn set_shift(&mut self, value: i64) {
        self.shift = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    NegativeBaseValue { value: i64 },
    NonPositiveInterval { value: i64 },
    ZeroInstances,
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBaseValue { value } => {
                write!(f, "base value must be >= 0 (got {value})")
            }
            Self::NonPositiveInterval { value } => {
                write!(f, "periodic interval must be >= 1 (got {value})")
            }
            Self::ZeroInstances => f.write_str("instance count must be >= 1"),
        }
    }
}

impl std::error::Error for ParamError {}

/// Resolves the divergent generator iterations behind explicit switches.
///
/// `clamp_shift` starts the cursor at `max(shift, 0)` instead of the raw
/// shift. `periodic_fill` reserves `interval - 1` filler slots behind every
/// instance when the periodic interval exceeds 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    pub clamp_shift: bool,
    pub periodic_fill: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            clamp_shift: true,
            periodic_fill: false,
        }
    }
}
