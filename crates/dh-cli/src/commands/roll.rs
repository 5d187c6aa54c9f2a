//! Roll the Duality dice with a flat modifier.

use std::path::Path;

use crate::RollOptions;

/// Run `dh roll`.
pub fn run(config: Option<&Path>, modifier: f64, options: &RollOptions) -> Result<(), String> {
    let config = super::load_config(config, options)?;
    let request = super::build_request(&config, modifier, options)?;
    let result = config
        .resolver()
        .resolve(&request)
        .map_err(|e| e.to_string())?;
    super::print_result(&result, None, options.json)
}
