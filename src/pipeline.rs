//! One full comparison run.
//!
//! Screenshots → extraction (both bookmakers) → pairing → comparison CSV →
//! analysis. Each stage runs to completion before the next starts.

use anyhow::Result;
use std::path::Path;

use crate::capture::{load_image, EncodedImage};
use crate::config::{AppConfig, BookmakerConfig};
use crate::extraction::extract_and_save;
use crate::llm::CompletionService;
use crate::matching::compare_matches;
use crate::odds::MatchOdds;
use crate::opener::open_file;
use crate::paths;
use crate::report::{analyze_odds_differences, write_report};
use crate::tables::CsvTable;

/// Runs the pipeline and returns the model's odds-difference summary.
pub fn run(config: &AppConfig, service: &dyn CompletionService) -> Result<String> {
    // Both screenshots must exist before any request is made.
    let left_image = load_image(&paths::resolve(&config.left.screenshot), config.max_image_dimension)?;
    let right_image = load_image(&paths::resolve(&config.right.screenshot), config.max_image_dimension)?;

    let left_matches = extract_bookmaker(config, service, &config.left, &left_image)?;
    let right_matches = extract_bookmaker(config, service, &config.right, &right_image)?;

    let comparisons = compare_matches(service, &left_matches, &right_matches)?;

    let comparison_csv = paths::resolve(&config.comparison_csv);
    write_report(&comparison_csv, &config.left, &config.right, &comparisons)?;
    if comparisons.is_empty() {
        println!("❗️ Nebyly nalezeny žádné shodné zápasy.");
    } else {
        open_if_enabled(config, &comparison_csv);
    }

    // The analysis works from the file just written, not the in-memory pairs.
    let table = CsvTable::from_csv(&comparison_csv)?;
    analyze_odds_differences(service, &table, &config.left, &config.right)
}

fn extract_bookmaker(
    config: &AppConfig,
    service: &dyn CompletionService,
    bookmaker: &BookmakerConfig,
    image: &EncodedImage,
) -> Result<Vec<MatchOdds>> {
    let output_csv = paths::resolve(&bookmaker.output_csv);
    let matches = extract_and_save(service, image, &bookmaker.name, &output_csv)?;
    if !matches.is_empty() && output_csv.is_file() {
        open_if_enabled(config, &output_csv);
    }
    Ok(matches)
}

fn open_if_enabled(config: &AppConfig, path: &Path) {
    if config.open_files {
        open_file(path);
    }
}
