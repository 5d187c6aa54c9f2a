//! Items that act on a character sheet.
//!
//! Domain cards cost Stress to recall, weapons pick a trait and make an
//! attack roll, and a class adds fixed bonuses to HP and Evasion.

pub mod card;
pub mod class;
pub mod weapon;

pub use card::{CardLocation, DomainCard};
pub use class::CharacterClass;
pub use weapon::{DamageDice, Weapon};
