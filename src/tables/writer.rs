//! CSV writers for the extracted odds and the comparison table.
//!
//! Files are UTF-8 with a byte-order mark (so spreadsheet apps pick the right
//! encoding), comma-delimited, and always start with a header row. Every
//! write replaces the previous file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::odds::{MatchComparison, MatchOdds};

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header of a per-bookmaker odds file.
pub const MATCH_ODDS_HEADER: [&str; 4] = ["match", "1", "0", "2"];

/// Creates `path` (truncating it), writes the BOM and returns a CSV writer on it.
fn create_with_bom(path: &Path) -> Result<csv::Writer<File>> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    file.write_all(UTF8_BOM).context("Failed to write BOM")?;
    Ok(csv::Writer::from_writer(file))
}

/// Writes one bookmaker's extracted odds.
pub fn write_match_odds(path: &Path, matches: &[MatchOdds]) -> Result<()> {
    let mut writer = create_with_bom(path)?;
    writer
        .write_record(MATCH_ODDS_HEADER)
        .context("Failed to write CSV header")?;

    for m in matches {
        let [home, draw, away] = m.odds.as_array();
        writer
            .write_record([m.name.as_str(), home, draw, away])
            .context("Failed to write CSV row")?;
    }

    writer.flush().context("Failed to flush CSV file")?;
    Ok(())
}

/// Writes the combined comparison table. An empty `comparisons` still
/// produces a file with the header row.
pub fn write_comparisons(
    path: &Path,
    headers: &[String; 7],
    comparisons: &[MatchComparison],
) -> Result<()> {
    let mut writer = create_with_bom(path)?;
    writer
        .write_record(headers)
        .context("Failed to write CSV header")?;

    for comparison in comparisons {
        writer
            .write_record(comparison.to_record())
            .context("Failed to write CSV row")?;
    }

    writer.flush().context("Failed to flush CSV file")?;
    Ok(())
}
