//! The six Daggerheart traits.

use serde::{Deserialize, Serialize};

/// A character trait that can back a Duality roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitKind {
    /// Sprint, leap, maneuver.
    Agility,
    /// Lift, smash, grapple.
    Strength,
    /// Control, hide, tinker.
    Finesse,
    /// Perceive, sense, navigate.
    Instinct,
    /// Charm, perform, deceive.
    Presence,
    /// Recall, analyze, comprehend.
    Knowledge,
}

impl TraitKind {
    /// All traits, in sheet order.
    pub const ALL: [Self; 6] = [
        Self::Agility,
        Self::Strength,
        Self::Finesse,
        Self::Instinct,
        Self::Presence,
        Self::Knowledge,
    ];

    /// Lowercase key used in sheet documents.
    pub fn key(self) -> &'static str {
        match self {
            Self::Agility => "agility",
            Self::Strength => "strength",
            Self::Finesse => "finesse",
            Self::Instinct => "instinct",
            Self::Presence => "presence",
            Self::Knowledge => "knowledge",
        }
    }

    /// Look up a trait by name, ignoring case and surrounding whitespace.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.key() == s)
    }
}

impl std::fmt::Display for TraitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = self.key();
        let mut chars = key.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}
