//! Pairs matches across the two bookmakers.
//!
//! Names rarely agree between bookmakers (team order, language, club
//! suffixes), so each candidate pair is put to the model as a yes/no
//! question. That costs one request per pair.

use anyhow::Result;

use crate::llm::{ChatMessage, CompletionService};
use crate::odds::{MatchComparison, MatchOdds};

fn same_match_prompt(left_name: &str, right_name: &str) -> String {
    format!(
        "Porovnej, zda tyto dva názvy označují ten samý fotbalový zápas. \
         Názvy mohou být napsány jinak (např. různé jazyky nebo pořadí týmů). \
         Odpověz pouze 'Ano' nebo 'Ne'.\n\
         Zápas 1: {}\n\
         Zápas 2: {}",
        left_name, right_name
    )
}

/// True when the model's answer contains "ano" (case-insensitive).
pub fn answer_is_yes(answer: &str) -> bool {
    answer.trim().to_lowercase().contains("ano")
}

/// Asks the model whether two names describe the same match.
pub fn is_same_match(
    service: &dyn CompletionService,
    left_name: &str,
    right_name: &str,
) -> Result<bool> {
    let answer = service.complete(&[ChatMessage::user(same_match_prompt(left_name, right_name))])?;
    Ok(answer_is_yes(&answer))
}

/// Pairs every left match with the first right match the model accepts.
///
/// Scanning for a left match stops at its first hit. Right matches are not
/// consumed, so one right match can pair with several left matches.
pub fn compare_matches(
    service: &dyn CompletionService,
    left: &[MatchOdds],
    right: &[MatchOdds],
) -> Result<Vec<MatchComparison>> {
    let mut comparisons = Vec::new();

    for left_match in left {
        for right_match in right {
            if is_same_match(service, &left_match.name, &right_match.name)? {
                crate::log(&format!(
                    "Matched \"{}\" with \"{}\"",
                    left_match.name, right_match.name
                ));
                comparisons.push(MatchComparison::merge(left_match, right_match));
                break;
            }
        }
    }

    crate::log(&format!(
        "Paired {} of {} matches",
        comparisons.len(),
        left.len()
    ));
    Ok(comparisons)
}
