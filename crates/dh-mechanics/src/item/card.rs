//! Domain cards and their recall cost.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::sheet::CharacterSheet;

/// Where a domain card is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardLocation {
    /// Stored away; cannot be used.
    #[default]
    Vault,
    /// Ready to use.
    Loadout,
}

impl std::fmt::Display for CardLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vault => write!(f, "Vault"),
            Self::Loadout => write!(f, "Loadout"),
        }
    }
}

/// A domain card (spell or ability).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCard {
    /// Card name.
    pub name: String,
    /// Card level.
    #[serde(default = "default_level")]
    pub level: u32,
    /// Domain the card belongs to.
    #[serde(default)]
    pub domain: String,
    /// Vault or loadout.
    #[serde(default)]
    pub location: CardLocation,
    /// Stress paid to use the card. Zero or less means "derive from level".
    #[serde(default)]
    pub recall_cost: i32,
}

fn default_level() -> u32 {
    1
}

impl DomainCard {
    /// A level 1 card in the vault with a derived recall cost.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            domain: String::new(),
            location: CardLocation::Vault,
            recall_cost: 0,
        }
    }

    /// Set the level.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set the domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set an explicit recall cost.
    pub fn with_recall_cost(mut self, cost: i32) -> Self {
        self.recall_cost = cost;
        self
    }

    /// Move the card between vault and loadout.
    pub fn move_to(&mut self, location: CardLocation) {
        tracing::debug!(card = %self.name, %location, "card moved");
        self.location = location;
    }

    /// Whether the card can be used right now.
    pub fn is_ready(&self) -> bool {
        self.location == CardLocation::Loadout
    }

    /// Stress it costs to use the card: the explicit cost if one is set,
    /// otherwise half the level rounded down, never below 1.
    pub fn recall_cost(&self) -> i32 {
        if self.recall_cost > 0 {
            return self.recall_cost;
        }
        i32::try_from(self.level / 2).unwrap_or(i32::MAX).max(1)
    }

    /// Use the card, paying its recall cost as Stress.
    ///
    /// Fails without touching the sheet if the card is in the vault or the
    /// cost would push Stress past its maximum. Returns the Stress paid.
    pub fn use_on(&self, sheet: &mut CharacterSheet) -> MechResult<i32> {
        if !self.is_ready() {
            return Err(MechError::CardNotInLoadout(self.name.clone()));
        }
        let cost = self.recall_cost();
        let available = sheet.stress.max.saturating_sub(sheet.stress.current);
        if cost > available {
            return Err(MechError::StressCapacity {
                needed: cost,
                available,
            });
        }
        sheet.take_stress(cost)?;
        tracing::debug!(card = %self.name, character = %sheet.name, cost, "domain card used");
        Ok(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(mut card: DomainCard) -> DomainCard {
        card.move_to(CardLocation::Loadout);
        card
    }

    #[test]
    fn recall_cost_from_level() {
        assert_eq!(DomainCard::new("a").recall_cost(), 1);
        assert_eq!(DomainCard::new("a").with_level(3).recall_cost(), 1);
        assert_eq!(DomainCard::new("a").with_level(4).recall_cost(), 2);
        assert_eq!(DomainCard::new("a").with_level(9).recall_cost(), 4);
        assert_eq!(DomainCard::new("a").with_level(0).recall_cost(), 1);
    }

    #[test]
    fn explicit_recall_cost_wins() {
        let card = DomainCard::new("a").with_level(8).with_recall_cost(1);
        assert_eq!(card.recall_cost(), 1);
        assert_eq!(card.clone().with_recall_cost(0).recall_cost(), 4);
    }

    #[test]
    fn vault_card_cannot_be_used() {
        let mut sheet = CharacterSheet::new("Test");
        let card = DomainCard::new("Bolt Beacon");
        assert!(!card.is_ready());
        assert!(matches!(
            card.use_on(&mut sheet),
            Err(MechError::CardNotInLoadout(name)) if name == "Bolt Beacon"
        ));
        assert_eq!(sheet.stress.current, 0);
    }

    #[test]
    fn use_pays_stress() {
        let mut sheet = CharacterSheet::new("Test");
        let card = ready(DomainCard::new("Rune Ward").with_level(4));
        assert_eq!(card.use_on(&mut sheet).unwrap(), 2);
        assert_eq!(sheet.stress.current, 2);
    }

    #[test]
    fn use_may_fill_stress_exactly() {
        let mut sheet = CharacterSheet::new("Test");
        sheet.take_stress(4).unwrap();
        let card = ready(DomainCard::new("a").with_recall_cost(2));
        assert_eq!(card.use_on(&mut sheet).unwrap(), 2);
        assert!(sheet.stress.is_full());
    }

    #[test]
    fn use_rejected_when_over_capacity() {
        let mut sheet = CharacterSheet::new("Test");
        sheet.take_stress(5).unwrap();
        let card = ready(DomainCard::new("a").with_recall_cost(2));
        assert!(matches!(
            card.use_on(&mut sheet),
            Err(MechError::StressCapacity {
                needed: 2,
                available: 1
            })
        ));
        assert_eq!(sheet.stress.current, 5);
    }

    #[test]
    fn deserializes_with_defaults() {
        let card: DomainCard =
            serde_json::from_str(r#"{ "name": "Whirlwind", "level": 6, "location": "loadout" }"#)
                .unwrap();
        assert!(card.is_ready());
        assert_eq!(card.recall_cost(), 3);
        assert_eq!(CardLocation::default(), CardLocation::Vault);
    }
}
