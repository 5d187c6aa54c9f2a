//! Weapons and damage dice.

use serde::{Deserialize, Serialize};

use crate::dice::DieSource;
use crate::duality::{DualityResolver, ResolutionResult, RollRequest};
use crate::error::{MechError, MechResult};
use crate::sheet::{CharacterSheet, TraitKind};

/// Largest damage die that still counts as a light weapon.
const LIGHT_DIE_MAX: u32 = 6;

/// A parsed damage expression such as `2d6+2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageDice {
    /// Number of dice. A missing count means one.
    pub count: u32,
    /// Sides per die.
    pub sides: u32,
    /// Flat modifier.
    pub modifier: i32,
}

impl DamageDice {
    /// Parse `NdS`, `dS`, `NdS+M` or `NdS-M`. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> MechResult<Self> {
        let invalid = || MechError::InvalidArgument(format!("bad damage expression: {s:?}"));
        let (count, rest) = s.trim().split_once('d').ok_or_else(invalid)?;
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| invalid())?
        };

        let split = rest.find(['+', '-']).unwrap_or(rest.len());
        let (sides, modifier) = rest.split_at(split);
        let sides = sides.parse::<u32>().map_err(|_| invalid())?;
        let modifier = if modifier.is_empty() {
            0
        } else {
            modifier.parse::<i32>().map_err(|_| invalid())?
        };

        if count == 0 || sides == 0 {
            return Err(invalid());
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }
}

impl std::fmt::Display for DamageDice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}

/// A weapon a character can attack with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Weapon name, used in the attack's flavor text.
    pub name: String,
    /// Damage expression, e.g. `1d8+1`.
    #[serde(default)]
    pub damage: String,
    /// Whether the weapon is in hand.
    #[serde(default)]
    pub equipped: bool,
}

impl Weapon {
    /// An unequipped weapon.
    pub fn new(name: impl Into<String>, damage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            damage: damage.into(),
            equipped: false,
        }
    }

    /// Flip the equipped state. Returns the new state.
    pub fn toggle_equipped(&mut self) -> bool {
        self.equipped = !self.equipped;
        self.equipped
    }

    /// Parsed damage dice, if the expression is valid.
    pub fn damage_dice(&self) -> Option<DamageDice> {
        DamageDice::parse(&self.damage).ok()
    }

    /// The trait an attack uses.
    ///
    /// Light weapons (d6 or smaller) use Finesse; anything heavier, or a
    /// dice expression that does not parse, uses Strength. A weapon with no
    /// dice at all uses Finesse.
    pub fn attack_trait(&self) -> TraitKind {
        if !self.damage.contains('d') {
            return TraitKind::Finesse;
        }
        match self.damage_dice() {
            Some(dice) if dice.sides <= LIGHT_DIE_MAX => TraitKind::Finesse,
            _ => TraitKind::Strength,
        }
    }

    /// Make an attack roll with the wielder's weapon trait.
    ///
    /// The request's flavor is replaced with `"<name> Attack"`; its bonus is
    /// paid from the wielder's Hope as in [`CharacterSheet::roll_trait`].
    pub fn attack<S: DieSource>(
        &self,
        wielder: &mut CharacterSheet,
        request: &RollRequest,
        resolver: &DualityResolver<S>,
    ) -> MechResult<ResolutionResult> {
        let request = request
            .clone()
            .with_flavor(format!("{} Attack", self.name));
        wielder.roll_trait(self.attack_trait().key(), &request, resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDieSource;

    #[test]
    fn parse_damage_forms() {
        assert_eq!(
            DamageDice::parse("2d6+2").unwrap(),
            DamageDice {
                count: 2,
                sides: 6,
                modifier: 2
            }
        );
        assert_eq!(
            DamageDice::parse(" d8 ").unwrap(),
            DamageDice {
                count: 1,
                sides: 8,
                modifier: 0
            }
        );
        assert_eq!(DamageDice::parse("1d12-1").unwrap().modifier, -1);
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "6", "2d", "d0", "0d6", "xd6", "2d6+", "2d6*2"] {
            assert!(
                matches!(DamageDice::parse(bad), Err(MechError::InvalidArgument(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn damage_display() {
        assert_eq!(DamageDice::parse("d10").unwrap().to_string(), "1d10");
        assert_eq!(DamageDice::parse("2d4-1").unwrap().to_string(), "2d4-1");
    }

    #[test]
    fn light_weapons_use_finesse() {
        assert_eq!(Weapon::new("Dagger", "1d4").attack_trait(), TraitKind::Finesse);
        assert_eq!(Weapon::new("Rapier", "1d6+1").attack_trait(), TraitKind::Finesse);
        assert_eq!(Weapon::new("Longsword", "1d8").attack_trait(), TraitKind::Strength);
        assert_eq!(Weapon::new("Maul", "d12+3").attack_trait(), TraitKind::Strength);
    }

    #[test]
    fn odd_damage_strings() {
        assert_eq!(Weapon::new("Sling", "").attack_trait(), TraitKind::Finesse);
        assert_eq!(Weapon::new("Club", "dx").attack_trait(), TraitKind::Strength);
    }

    #[test]
    fn toggle_equipped() {
        let mut weapon = Weapon::new("Dagger", "1d4");
        assert!(weapon.toggle_equipped());
        assert!(!weapon.toggle_equipped());
    }

    #[test]
    fn attack_rolls_with_weapon_trait() {
        let mut sheet = CharacterSheet::new("Test")
            .with_trait(TraitKind::Finesse, 14)
            .with_trait(TraitKind::Strength, 8);
        let resolver = DualityResolver::new(ScriptedDieSource::from_pairs(&[(7, 3), (7, 3)]));

        let stab = Weapon::new("Dagger", "1d4")
            .attack(&mut sheet, &RollRequest::new(0).with_flavor("ignored"), &resolver)
            .unwrap();
        assert_eq!(stab.flavor, "Dagger Attack");
        assert_eq!(stab.modifier, 2);
        assert_eq!(stab.hope_total, 9);

        let swing = Weapon::new("Maul", "1d10")
            .attack(&mut sheet, &RollRequest::new(1).with_bonus(1), &resolver)
            .unwrap();
        assert_eq!(swing.flavor, "Maul Attack");
        assert_eq!(swing.modifier, 0);
        assert_eq!(swing.hope_total, 8);
        assert_eq!(sheet.hope.current, 1);
    }
}
