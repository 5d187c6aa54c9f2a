//! Roll with a character's trait.
//!
//! The sheet is read, Hope is paid from it for the roll, and the remaining
//! Hope is reported. The file itself is left untouched.

use std::path::Path;

use colored::Colorize;
use dh_mechanics::CharacterSheet;

use crate::RollOptions;

/// Run `dh trait`.
pub fn run(
    config: Option<&Path>,
    sheet_path: &Path,
    trait_name: &str,
    modifier: f64,
    options: &RollOptions,
) -> Result<(), String> {
    let config = super::load_config(config, options)?;
    let text = std::fs::read_to_string(sheet_path)
        .map_err(|e| format!("cannot read sheet {}: {e}", sheet_path.display()))?;
    let mut sheet = CharacterSheet::from_json(&text).map_err(|e| e.to_string())?;

    let request = super::build_request(&config, modifier, options)?;
    let resolver = config.resolver();
    let result = sheet
        .roll_trait(trait_name, &request, &resolver)
        .map_err(|e| e.to_string())?;

    if options.json {
        return super::print_result(&result, Some(sheet.hope.current), true);
    }

    println!();
    println!("  {} rolls {}", sheet.name.bold(), trait_name.to_lowercase());
    super::print_result(&result, None, false)?;
    println!("  {}", sheet.hope);
    Ok(())
}
