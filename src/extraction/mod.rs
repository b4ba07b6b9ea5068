//! Odds extraction from bookmaker screenshots.
//!
//! This module provides:
//! - Prompting a vision model with one screenshot (`extract_matches`)
//! - Lenient parsing of the JSON array in its answer
//! - Writing the extracted odds to CSV (`extract_and_save`)

pub mod json_array;
pub mod parse;

pub use parse::parse_matches;

use anyhow::Result;
use std::path::Path;

use crate::capture::EncodedImage;
use crate::llm::{ChatMessage, CompletionService};
use crate::odds::MatchOdds;
use crate::tables::write_match_odds;

const EXTRACTION_INSTRUCTION: &str = "Najdi v tomto obrázku nejsázenější zápasy a pro každý vypiš: \
     název zápasu a kurzy 1, 0, 2. Výsledek strukturovaně jako JSON seznam objektů se jmény: \
     'match', '1', '0', '2'.";

fn extraction_persona(bookmaker: &str) -> String {
    format!(
        "Jsi pomocník pro sportovní sázení. Uživatel ti posílá screenshot sázkové kanceláře {} \
         a chce získat seznam nejsázenějších zápasů a jejich kurzy.",
        bookmaker
    )
}

/// Conversation asking the model to read odds off one screenshot.
pub fn extraction_request(image: &EncodedImage, bookmaker: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(extraction_persona(bookmaker)),
        ChatMessage::user_with_image(EXTRACTION_INSTRUCTION, image.data_url()),
    ]
}

/// Asks the model for the matches and odds shown on `image`.
///
/// An unusable answer (empty, no JSON array, invalid JSON) is logged and
/// yields `Ok(None)`. Service errors are returned as `Err`.
pub fn extract_matches(
    service: &dyn CompletionService,
    image: &EncodedImage,
    bookmaker: &str,
) -> Result<Option<Vec<MatchOdds>>> {
    crate::log(&format!("Extracting matches for {}...", bookmaker));
    let response = service.complete(&extraction_request(image, bookmaker))?;
    crate::log(&format!("Response for {}: {}", bookmaker, response));

    match parse_matches(&response) {
        Ok(matches) => {
            crate::log(&format!("{}: extracted {} matches", bookmaker, matches.len()));
            Ok(Some(matches))
        }
        Err(e) => {
            crate::log(&format!(
                "Error processing response for {}: {}",
                bookmaker, e
            ));
            Ok(None)
        }
    }
}

/// Extracts matches and writes them to `output_csv`.
///
/// The CSV is written only when the answer could be parsed. A failed
/// extraction returns an empty list so the run can continue. A CSV that
/// cannot be written (locked by a spreadsheet, for one) is logged and the
/// extracted matches are still returned.
pub fn extract_and_save(
    service: &dyn CompletionService,
    image: &EncodedImage,
    bookmaker: &str,
    output_csv: &Path,
) -> Result<Vec<MatchOdds>> {
    let Some(matches) = extract_matches(service, image, bookmaker)? else {
        return Ok(Vec::new());
    };

    match write_match_odds(output_csv, &matches) {
        Ok(()) => crate::log(&format!("Saved {} to {}", bookmaker, output_csv.display())),
        Err(e) => crate::log(&format!("Error saving {}: {:#}", bookmaker, e)),
    }
    Ok(matches)
}
