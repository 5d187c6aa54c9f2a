//! The Duality roll: a Hope d12 against a Fear d12.
//!
//! Both dice get the same modifier; only the Hope die gets the bonus paid
//! from spent Hope. The higher total prevails and ties go to Fear. The
//! prevailing total is compared to the difficulty, and two independent
//! critical flags are read from the raw faces.

pub mod outcome;
pub mod resolver;

pub use outcome::Outcome;
pub use resolver::{DualityResolver, evaluate};

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Difficulty used when the caller does not name one.
pub const DEFAULT_DIFFICULTY: i32 = 12;

/// Which die prevailed in a Duality roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The Hope die had the strictly higher total.
    Hope,
    /// The Fear die had the higher total, or the totals tied.
    Fear,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hope => write!(f, "Hope"),
            Self::Fear => write!(f, "Fear"),
        }
    }
}

/// Inputs to a single Duality roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollRequest {
    /// Added to both dice. May be negative.
    pub modifier: i32,
    /// Target the prevailing total must meet or beat.
    pub difficulty: i32,
    /// Hope spent on the roll, added to the Hope die only. Must not be negative.
    pub bonus: i32,
    /// Label carried through to the result untouched.
    pub flavor: String,
}

impl Default for RollRequest {
    fn default() -> Self {
        Self {
            modifier: 0,
            difficulty: DEFAULT_DIFFICULTY,
            bonus: 0,
            flavor: String::new(),
        }
    }
}

impl RollRequest {
    /// A request with the given modifier and default options.
    pub fn new(modifier: i32) -> Self {
        Self {
            modifier,
            ..Self::default()
        }
    }

    /// Build a request from untyped numbers.
    ///
    /// Rejects NaN, infinities, fractional values and anything outside the
    /// `i32` range instead of coercing it.
    pub fn from_raw(
        modifier: f64,
        difficulty: f64,
        bonus: f64,
        flavor: impl Into<String>,
    ) -> MechResult<Self> {
        let request = Self {
            modifier: integral("modifier", modifier)?,
            difficulty: integral("difficulty", difficulty)?,
            bonus: integral("bonus", bonus)?,
            flavor: flavor.into(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the Hope bonus.
    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }

    /// Set the flavor text.
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    /// Check the request before any die is drawn.
    pub fn validate(&self) -> MechResult<()> {
        if self.bonus < 0 {
            return Err(MechError::InvalidArgument(format!(
                "bonus must be non-negative, got {}",
                self.bonus
            )));
        }
        Ok(())
    }
}

fn integral(name: &str, value: f64) -> MechResult<i32> {
    if !value.is_finite() {
        return Err(MechError::InvalidArgument(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    if value.fract() != 0.0 {
        return Err(MechError::InvalidArgument(format!(
            "{name} must be an integer, got {value}"
        )));
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(MechError::InvalidArgument(format!(
            "{name} is out of range: {value}"
        )));
    }
    Ok(value as i32)
}

/// Everything a Duality roll produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Raw face of the Hope die.
    pub hope_face: u32,
    /// Raw face of the Fear die.
    pub fear_face: u32,
    /// Hope face plus modifier plus bonus.
    pub hope_total: i32,
    /// Fear face plus modifier.
    pub fear_total: i32,
    /// Modifier applied to both dice.
    pub modifier: i32,
    /// Bonus applied to the Hope die.
    pub bonus: i32,
    /// The prevailing die.
    pub side: Side,
    /// Total of the prevailing die.
    pub prevailing_total: i32,
    /// Difficulty the roll was made against.
    pub difficulty: i32,
    /// Whether the prevailing total met or beat the difficulty.
    pub is_success: bool,
    /// The prevailing die showed a raw 12.
    pub is_critical_success: bool,
    /// Both dice showed a raw 1.
    pub is_critical_failure: bool,
    /// Flavor text from the request.
    pub flavor: String,
}

impl ResolutionResult {
    /// Raw face of the prevailing die.
    pub fn prevailing_face(&self) -> u32 {
        match self.side {
            Side::Hope => self.hope_face,
            Side::Fear => self.fear_face,
        }
    }

    /// Classify the result for display.
    pub fn outcome(&self) -> Outcome {
        Outcome::of(self)
    }

    /// Whether the two totals tied (and Fear therefore prevailed).
    pub fn is_tie(&self) -> bool {
        self.hope_total == self.fear_total
    }
}
