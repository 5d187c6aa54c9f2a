//! Duality Dice mechanics for Daggerheart.
//!
//! Provides the Hope/Fear two-d12 resolver, injectable die sources,
//! outcome classification, an in-memory character sheet that maps
//! trait names to roll modifiers and tracks Hope and Stress, and the items
//! (domain cards, weapons, classes) that act on a sheet.

pub mod config;
pub mod dice;
pub mod duality;
pub mod error;
pub mod item;
pub mod sheet;

pub use config::DualityConfig;
pub use dice::{D12_SIDES, DieSource, RngDieSource, ScriptedDieSource};
pub use duality::{DualityResolver, Outcome, ResolutionResult, RollRequest, Side};
pub use error::{MechError, MechResult};
pub use item::{CardLocation, CharacterClass, DamageDice, DomainCard, Weapon};
pub use sheet::{CharacterSheet, Track, TraitKind};
