//! Character classes.

use serde::{Deserialize, Serialize};

use crate::sheet::CharacterSheet;

/// A class and the flat bonuses it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    /// Class name.
    pub name: String,
    /// Added to maximum HP.
    #[serde(default)]
    pub hp_bonus: i32,
    /// Added to Evasion.
    #[serde(default)]
    pub evasion_bonus: i32,
}

impl CharacterClass {
    /// A class with no bonuses.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hp_bonus: 0,
            evasion_bonus: 0,
        }
    }

    /// Set the HP bonus.
    pub fn with_hp_bonus(mut self, bonus: i32) -> Self {
        self.hp_bonus = bonus;
        self
    }

    /// Set the Evasion bonus.
    pub fn with_evasion_bonus(mut self, bonus: i32) -> Self {
        self.evasion_bonus = bonus;
        self
    }

    /// Make this the character's class. Replaces any earlier class.
    pub fn apply_to(self, sheet: &mut CharacterSheet) {
        tracing::debug!(class = %self.name, character = %sheet.name, "class applied");
        sheet.set_class(self);
    }
}
