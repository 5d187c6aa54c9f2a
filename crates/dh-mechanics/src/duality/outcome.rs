//! Outcome classification for a resolved Duality roll.

use serde::{Deserialize, Serialize};

use super::{ResolutionResult, Side};

/// The headline reading of a Duality roll.
///
/// A critical success outranks a critical failure, which outranks the
/// ordinary success or failure. Ordinary results remember which die
/// prevailed, since "with Hope" and "with Fear" play out differently
/// at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The prevailing die showed a raw 12.
    CriticalSuccess,
    /// Both dice showed a raw 1.
    CriticalFailure,
    /// The prevailing total met the difficulty.
    Success(Side),
    /// The prevailing total fell short of the difficulty.
    Failure(Side),
}

impl Outcome {
    /// Classify a resolved roll.
    pub fn of(result: &ResolutionResult) -> Self {
        if result.is_critical_success {
            Self::CriticalSuccess
        } else if result.is_critical_failure {
            Self::CriticalFailure
        } else if result.is_success {
            Self::Success(result.side)
        } else {
            Self::Failure(result.side)
        }
    }

    /// Whether the outcome counts as a success at the table.
    pub fn is_success(self) -> bool {
        matches!(self, Self::CriticalSuccess | Self::Success(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CriticalSuccess => write!(f, "Critical Success!"),
            Self::CriticalFailure => write!(f, "Critical Failure!"),
            Self::Success(side) => write!(f, "Success with {side}!"),
            Self::Failure(side) => write!(f, "Failure with {side}"),
        }
    }
}
