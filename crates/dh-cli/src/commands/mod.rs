//! Subcommand handlers and the report printer they share.

pub mod roll;
pub mod trait_roll;

use std::path::Path;

use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table};
use dh_mechanics::{DualityConfig, Outcome, ResolutionResult, RollRequest, Side};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::RollOptions;

/// Install a stderr subscriber filtered by `RUST_LOG` (default: warnings only).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load the config file if one was given, then apply the per-roll seed.
fn load_config(path: Option<&Path>, options: &RollOptions) -> Result<DualityConfig, String> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
            DualityConfig::from_json(&text).map_err(|e| e.to_string())?
        }
        None => DualityConfig::default(),
    };
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    tracing::debug!(?config, "config loaded");
    Ok(config)
}

/// Turn raw command-line numbers into a validated request.
fn build_request(
    config: &DualityConfig,
    modifier: f64,
    options: &RollOptions,
) -> Result<RollRequest, String> {
    let difficulty = options
        .difficulty
        .unwrap_or(f64::from(config.default_difficulty));
    RollRequest::from_raw(modifier, difficulty, options.hope, options.flavor.clone())
        .map_err(|e| e.to_string())
}

#[derive(Serialize)]
struct RollReport<'a> {
    #[serde(flatten)]
    result: &'a ResolutionResult,
    outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hope_left: Option<i32>,
}

/// Print a result as JSON or as a short report.
///
/// `hope_left` is the roller's remaining Hope when the roll came from a
/// sheet; it only appears in JSON output.
fn print_result(
    result: &ResolutionResult,
    hope_left: Option<i32>,
    json: bool,
) -> Result<(), String> {
    if json {
        let report = RollReport {
            result,
            outcome: result.outcome().to_string(),
            hope_left,
        };
        let text = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!();
    println!("  {}", headline(result.outcome()));
    if !result.flavor.is_empty() {
        println!("  {}", result.flavor.italic());
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Die", "Face", "Total"]);
    table.add_row(vec![
        "Hope".to_string(),
        result.hope_face.to_string(),
        result.hope_total.to_string(),
    ]);
    table.add_row(vec![
        "Fear".to_string(),
        result.fear_face.to_string(),
        result.fear_total.to_string(),
    ]);
    println!("{table}");
    println!();

    println!("  Modifier:     {:+}", result.modifier);
    if result.bonus > 0 {
        println!("  Hope Spent:   +{}", result.bonus);
    }
    println!(
        "  Final Result: {} vs {}",
        result.prevailing_total, result.difficulty
    );
    Ok(())
}

fn headline(outcome: Outcome) -> ColoredString {
    let text = outcome.to_string();
    match outcome {
        Outcome::CriticalSuccess => text.yellow().bold(),
        Outcome::CriticalFailure => text.red().bold(),
        Outcome::Success(Side::Hope) => text.green().bold(),
        Outcome::Success(Side::Fear) => text.cyan().bold(),
        Outcome::Failure(Side::Hope) => text.blue(),
        Outcome::Failure(Side::Fear) => text.magenta(),
    }
}
