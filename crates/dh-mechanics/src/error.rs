//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A roll input was non-finite, non-integral, out of range, or a negative bonus.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The die source could not produce a valid face.
    #[error("die source unavailable: {0}")]
    DieSourceUnavailable(String),

    /// A trait referenced in a roll does not exist on the sheet.
    #[error("unknown trait: {0}")]
    UnknownTrait(String),

    /// The character does not have enough Hope to spend.
    #[error("not enough Hope: need {needed}, have {available}")]
    InsufficientHope {
        /// Amount the caller tried to spend.
        needed: i32,
        /// Amount currently on the Hope track.
        available: i32,
    },

    /// A domain card was used while stored in the vault.
    #[error("{0} must be in the loadout to use")]
    CardNotInLoadout(String),

    /// Paying a recall cost would push Stress past its maximum.
    #[error("not enough Stress capacity: recall costs {needed}, {available} left")]
    StressCapacity {
        /// Stress the recall would cost.
        needed: i32,
        /// Room left on the Stress track.
        available: i32,
    },

    /// A configuration or sheet document is malformed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
