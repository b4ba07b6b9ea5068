//! Comparison report and odds-difference analysis.
//!
//! This module provides:
//! - Column headers qualified by bookmaker (`comparison_headers`)
//! - Writing the combined comparison table (`write_report`)
//! - Model-written summary of the largest odds differences

pub mod analyst;

pub use analyst::analyze_odds_differences;

use anyhow::Result;
use std::path::Path;

use crate::config::BookmakerConfig;
use crate::odds::MatchComparison;
use crate::tables::write_comparisons;

/// Headers of the comparison table, e.g. `Zápas (Fortuna)`, `F: 1`, ..., `T: 2`.
pub fn comparison_headers(left: &BookmakerConfig, right: &BookmakerConfig) -> [String; 7] {
    let (l, r) = (left.label(), right.label());
    [
        format!("Zápas ({})", left.name),
        format!("{}: 1", l),
        format!("{}: 0", l),
        format!("{}: 2", l),
        format!("{}: 1", r),
        format!("{}: 0", r),
        format!("{}: 2", r),
    ]
}

/// Writes the comparison table to `path`, header included even when empty.
pub fn write_report(
    path: &Path,
    left: &BookmakerConfig,
    right: &BookmakerConfig,
    comparisons: &[MatchComparison],
) -> Result<()> {
    write_comparisons(path, &comparison_headers(left, right), comparisons)?;
    crate::log(&format!(
        "Saved {} comparisons to {}",
        comparisons.len(),
        path.display()
    ));
    Ok(())
}
