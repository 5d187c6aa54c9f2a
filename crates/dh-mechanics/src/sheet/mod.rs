//! Character sheets with traits, derived stats, and resource tracks.
//!
//! The sheet is the caller-side half of a trait roll: it turns a trait name
//! into a modifier, pays for the Hope bonus, and hands a plain
//! [`RollRequest`] to the resolver. The resolver never sees the sheet.

pub mod track;
pub mod traits;

pub use track::Track;
pub use traits::TraitKind;

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::dice::DieSource;
use crate::duality::{DualityResolver, ResolutionResult, RollRequest};
use crate::error::{MechError, MechResult};
use crate::item::CharacterClass;

/// Trait score that yields a +0 modifier.
const BASELINE_SCORE: i32 = 10;
const BASE_EVASION: i32 = 10;
const BASE_HP: i32 = 20;
const HP_PER_LEVEL: i32 = 5;
const BASE_STRESS: i32 = 6;
const STARTING_HOPE: i32 = 2;
const MAX_HOPE: i32 = 6;

/// A character's mechanical state.
#[derive(Debug, Clone)]
pub struct CharacterSheet {
    /// Character name.
    pub name: String,
    level: u32,
    scores: BTreeMap<TraitKind, i32>,
    /// Hit points.
    pub hp: Track,
    /// Stress.
    pub stress: Track,
    /// Hope, spent to add a bonus to the Hope die.
    pub hope: Track,
    class: Option<CharacterClass>,
}

impl CharacterSheet {
    /// A level 1 character with every trait at the baseline score.
    pub fn new(name: impl Into<String>) -> Self {
        let mut sheet = Self {
            name: name.into(),
            level: 1,
            scores: TraitKind::ALL
                .into_iter()
                .map(|t| (t, BASELINE_SCORE))
                .collect(),
            hp: Track::new("HP", BASE_HP),
            stress: Track::with_range("Stress", 0, 0, BASE_STRESS),
            hope: Track::with_range("Hope", STARTING_HOPE, 0, MAX_HOPE),
            class: None,
        };
        sheet.recompute();
        sheet
    }

    /// Parse a sheet from a JSON document.
    ///
    /// ```json
    /// { "name": "Marlowe", "level": 3, "traits": { "agility": 14 }, "hope": 4 }
    /// ```
    ///
    /// Missing traits stay at the baseline; HP defaults to full, Stress to 0.
    pub fn from_json(json: &str) -> MechResult<Self> {
        let doc: SheetDocument =
            serde_json::from_str(json).map_err(|e| MechError::InvalidConfig(e.to_string()))?;
        doc.into_sheet()
    }

    /// Set the level and recompute derived stats.
    pub fn with_level(mut self, level: u32) -> Self {
        self.set_level(level);
        self
    }

    /// Set a trait score and recompute derived stats.
    pub fn with_trait(mut self, kind: TraitKind, score: i32) -> Self {
        self.set_trait(kind, score);
        self
    }

    /// Set the level (0 is treated as 1) and recompute derived stats.
    pub fn set_level(&mut self, level: u32) {
        self.level = level.max(1);
        self.recompute();
    }

    /// Set a trait score and recompute derived stats.
    pub fn set_trait(&mut self, kind: TraitKind, score: i32) {
        self.scores.insert(kind, score);
        self.recompute();
    }

    /// Character level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The class applied to this character, if any.
    pub fn class(&self) -> Option<&CharacterClass> {
        self.class.as_ref()
    }

    /// Replace the character's class and recompute derived stats.
    ///
    /// A previous class's bonuses are dropped, not stacked.
    pub fn set_class(&mut self, class: CharacterClass) {
        self.class = Some(class);
        self.recompute();
    }

    /// Raw score of a trait.
    pub fn trait_score(&self, kind: TraitKind) -> i32 {
        self.scores.get(&kind).copied().unwrap_or(BASELINE_SCORE)
    }

    /// Roll modifier for a trait: `floor((score - 10) / 2)`.
    pub fn modifier(&self, kind: TraitKind) -> i32 {
        self.trait_score(kind)
            .saturating_sub(BASELINE_SCORE)
            .div_euclid(2)
    }

    /// Roll modifier for a trait looked up by name.
    pub fn trait_modifier(&self, name: &str) -> MechResult<i32> {
        TraitKind::from_name(name)
            .map(|kind| self.modifier(kind))
            .ok_or_else(|| MechError::UnknownTrait(name.to_string()))
    }

    /// Trait name to modifier, for every trait.
    pub fn modifiers(&self) -> HashMap<TraitKind, i32> {
        TraitKind::ALL
            .into_iter()
            .map(|t| (t, self.modifier(t)))
            .collect()
    }

    /// Evasion: 10 plus the Agility modifier plus any class bonus.
    pub fn evasion(&self) -> i32 {
        BASE_EVASION
            .saturating_add(self.modifier(TraitKind::Agility))
            .saturating_add(self.class.as_ref().map_or(0, |c| c.evasion_bonus))
    }

    /// Proficiency: half the level, rounded up.
    pub fn proficiency(&self) -> u32 {
        self.level.div_ceil(2)
    }

    /// Maximum HP: 20, plus 5 per level past the first, plus the Strength
    /// modifier, plus any class bonus.
    pub fn max_hp(&self) -> i32 {
        let levels = i32::try_from(self.level - 1).unwrap_or(i32::MAX);
        BASE_HP
            .saturating_add(levels.saturating_mul(HP_PER_LEVEL))
            .saturating_add(self.modifier(TraitKind::Strength))
            .saturating_add(self.class.as_ref().map_or(0, |c| c.hp_bonus))
    }

    /// Maximum Stress: 6 plus the Presence modifier.
    pub fn max_stress(&self) -> i32 {
        BASE_STRESS.saturating_add(self.modifier(TraitKind::Presence))
    }

    /// Spend Hope. Fails without touching the track if there is not enough.
    ///
    /// Returns the Hope left afterwards.
    pub fn spend_hope(&mut self, amount: i32) -> MechResult<i32> {
        non_negative("hope", amount)?;
        if self.hope.current < amount {
            return Err(MechError::InsufficientHope {
                needed: amount,
                available: self.hope.current,
            });
        }
        Ok(self.hope.adjust(-amount))
    }

    /// Gain Hope up to the maximum. Returns the new value.
    pub fn gain_hope(&mut self, amount: i32) -> MechResult<i32> {
        non_negative("hope", amount)?;
        Ok(self.hope.adjust(amount))
    }

    /// Take Stress up to the maximum. Returns true if Stress is now full.
    pub fn take_stress(&mut self, amount: i32) -> MechResult<bool> {
        non_negative("stress", amount)?;
        self.stress.adjust(amount);
        if self.stress.is_full() {
            tracing::info!(character = %self.name, "stress at maximum");
        }
        Ok(self.stress.is_full())
    }

    /// Clear some Stress, or all of it when `amount` is `None`.
    ///
    /// `Some(0)` clears nothing. Returns how much was actually cleared.
    pub fn clear_stress(&mut self, amount: Option<i32>) -> MechResult<i32> {
        let before = self.stress.current;
        match amount {
            Some(n) => {
                non_negative("stress", n)?;
                self.stress.adjust(-n);
            }
            None => self.stress.current = self.stress.min,
        }
        Ok(before - self.stress.current)
    }

    /// Make a Duality roll with one of this character's traits.
    ///
    /// The trait modifier is added to `request.modifier`, and `request.bonus`
    /// is paid from Hope. Hope is only deducted once the roll has resolved;
    /// if the roll fails, the sheet is unchanged.
    pub fn roll_trait<S: DieSource>(
        &mut self,
        trait_name: &str,
        request: &RollRequest,
        resolver: &DualityResolver<S>,
    ) -> MechResult<ResolutionResult> {
        let trait_mod = self.trait_modifier(trait_name)?;
        request.validate()?;
        if self.hope.current < request.bonus {
            return Err(MechError::InsufficientHope {
                needed: request.bonus,
                available: self.hope.current,
            });
        }

        let modifier = trait_mod.checked_add(request.modifier).ok_or_else(|| {
            MechError::InvalidArgument(format!("modifier {} overflows", request.modifier))
        })?;
        let rolled = RollRequest {
            modifier,
            ..request.clone()
        };
        let result = resolver.resolve(&rolled)?;

        self.hope.adjust(-request.bonus);
        tracing::debug!(
            character = %self.name,
            trait_name,
            trait_mod,
            hope_left = self.hope.current,
            "trait roll"
        );
        Ok(result)
    }

    fn recompute(&mut self) {
        let max_hp = self.max_hp();
        let max_stress = self.max_stress();
        self.hp.set_max(max_hp);
        self.stress.set_max(max_stress);
    }
}

fn non_negative(what: &str, amount: i32) -> MechResult<()> {
    if amount < 0 {
        return Err(MechError::InvalidArgument(format!(
            "{what} amount must be non-negative, got {amount}"
        )));
    }
    Ok(())
}

/// On-disk shape of a sheet.
#[derive(Debug, Deserialize)]
struct SheetDocument {
    name: String,
    #[serde(default = "default_level")]
    level: u32,
    #[serde(default)]
    traits: HashMap<String, i32>,
    hp: Option<i32>,
    stress: Option<i32>,
    hope: Option<i32>,
    hope_max: Option<i32>,
    class: Option<CharacterClass>,
}

fn default_level() -> u32 {
    1
}

impl SheetDocument {
    fn into_sheet(self) -> MechResult<CharacterSheet> {
        let mut sheet = CharacterSheet::new(self.name).with_level(self.level);
        if let Some(class) = self.class {
            class.apply_to(&mut sheet);
        }
        for (name, score) in &self.traits {
            let kind = TraitKind::from_name(name).ok_or_else(|| MechError::UnknownTrait(name.clone()))?;
            sheet.set_trait(kind, *score);
        }

        let hope_max = self.hope_max.unwrap_or(MAX_HOPE);
        if hope_max < 0 {
            return Err(MechError::InvalidConfig(format!(
                "hope_max must be non-negative, got {hope_max}"
            )));
        }
        sheet.hope = Track::with_range(
            "Hope",
            self.hope.unwrap_or(STARTING_HOPE),
            0,
            hope_max,
        );
        let max_hp = sheet.max_hp();
        sheet.hp = Track::with_range("HP", self.hp.unwrap_or(max_hp), 0, max_hp);
        sheet.stress = Track::with_range("Stress", self.stress.unwrap_or(0), 0, sheet.max_stress());
        Ok(sheet)
    }
}
