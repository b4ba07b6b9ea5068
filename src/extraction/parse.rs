use serde_json::Value;
use thiserror::Error;

use super::json_array::{bracketed_spans, first_json_array};
use crate::odds::MatchOdds;

/// Why a model response could not be turned into match records.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("response is empty")]
    Empty,
    #[error("no JSON array found in response")]
    NoJsonArray,
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parses the model's answer into match records.
///
/// Takes the first balanced bracketed span that is a JSON array holding at
/// least one record with a `match` key. Arrays without such records (odds
/// echoed in prose as `[1, 0, 2]`) are passed over. When no span qualifies,
/// the first array found is used, so a bare `[]` yields an empty list.
/// Elements that are not records with a `match` key are skipped.
pub fn parse_matches(response: &str) -> Result<Vec<MatchOdds>, ExtractError> {
    let response = response.trim();
    if response.is_empty() {
        return Err(ExtractError::Empty);
    }

    if let Some(items) = bracketed_spans(response).find_map(record_array) {
        return Ok(collect_records(&items));
    }

    if let Some(array) = first_json_array(response) {
        let items: Vec<Value> = serde_json::from_str(array)?;
        return Ok(collect_records(&items));
    }

    // Report the parse error of the first candidate, if there was one.
    match bracketed_spans(response).next() {
        Some(span) => match serde_json::from_str::<Value>(span) {
            Err(e) => Err(ExtractError::InvalidJson(e)),
            Ok(_) => Err(ExtractError::NoJsonArray),
        },
        None => Err(ExtractError::NoJsonArray),
    }
}

/// Elements of `span` if it is an array containing at least one match record.
fn record_array(span: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(span) {
        Ok(Value::Array(items)) if items.iter().any(|item| MatchOdds::from_json(item).is_some()) => {
            Some(items)
        }
        _ => None,
    }
}

fn collect_records(items: &[Value]) -> Vec<MatchOdds> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let record = MatchOdds::from_json(item);
            if record.is_none() {
                crate::log(&format!(
                    "Warning: Skipping array element {} without a match name: {}",
                    index + 1,
                    item
                ));
            }
            record
        })
        .collect()
}
