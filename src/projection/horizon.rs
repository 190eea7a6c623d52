//! Projection horizon
//!
//! The number of calendar months a projection covers. The type only holds values
//! in `1..=120`, so the engine never sees an out-of-range horizon.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FlowError, FlowResult};

/// Number of months simulated forward from "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ProjectionHorizon(u32);

impl ProjectionHorizon {
    pub const MIN_MONTHS: u32 = 1;
    pub const MAX_MONTHS: u32 = 120;
    pub const DEFAULT_MONTHS: u32 = 36;

    /// Create a horizon, rejecting values outside `1..=120`
    pub fn new(months: u32) -> FlowResult<Self> {
        if (Self::MIN_MONTHS..=Self::MAX_MONTHS).contains(&months) {
            Ok(Self(months))
        } else {
            Err(FlowError::Validation(format!(
                "Projection horizon must be between {} and {} months, got {}",
                Self::MIN_MONTHS,
                Self::MAX_MONTHS,
                months
            )))
        }
    }

    /// Interpret a requested month count
    ///
    /// Counts above the maximum are clamped to 120; zero and negative counts are
    /// rejected.
    pub fn from_request(months: i64) -> FlowResult<Self> {
        if months < i64::from(Self::MIN_MONTHS) {
            return Err(FlowError::Validation(format!(
                "months must be at least {}, got {}",
                Self::MIN_MONTHS,
                months
            )));
        }
        let months = months.min(i64::from(Self::MAX_MONTHS)) as u32;
        Ok(Self(months))
    }

    pub fn months(&self) -> u32 {
        self.0
    }
}

impl Default for ProjectionHorizon {
    fn default() -> Self {
        Self(Self::DEFAULT_MONTHS)
    }
}

impl fmt::Display for ProjectionHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.0)
    }
}

impl TryFrom<u32> for ProjectionHorizon {
    type Error = FlowError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectionHorizon> for u32 {
    fn from(value: ProjectionHorizon) -> Self {
        value.0
    }
}
