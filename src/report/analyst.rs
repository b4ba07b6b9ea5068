//! Asks the model which paired matches differ most in odds.
//!
//! The differences are not computed here; the table is handed to the model
//! as CSV text and its answer is returned as-is.

use anyhow::Result;

use crate::config::BookmakerConfig;
use crate::llm::{ChatMessage, CompletionService};
use crate::tables::CsvTable;

const ANALYST_PERSONA: &str = "Jsi sportovní analytik specializující se na porovnávání kurzů.";

fn analysis_prompt(left: &BookmakerConfig, right: &BookmakerConfig) -> String {
    let (l, r) = (left.label(), right.label());
    format!(
        "Níže je tabulka srovnávající kurzy pro fotbalové zápasy od dvou sázkových kanceláří: {left} a {right}. \
         Sloupce {l}: 1, {l}: 0, {l}: 2 jsou kurzy kanceláře {left}, {r}: 1, {r}: 0, {r}: 2 jsou kurzy kanceláře {right}. \
         Analyzuj prosím, u kterých zápasů jsou největší rozdíly v kurzech mezi těmito dvěma sázkovkami. \
         Zaměř se na absolutní rozdíly a vypiš 3–5 zápasů s největším rozdílem. \
         Výsledek uveď přehledně jako seznam nebo tabulku.",
        left = left.name,
        right = right.name,
    )
}

/// Conversation asking for the largest odds differences in `table`.
pub fn analysis_request(
    table: &CsvTable,
    left: &BookmakerConfig,
    right: &BookmakerConfig,
) -> Result<Vec<ChatMessage>> {
    let csv_text = table.to_csv_text()?;
    Ok(vec![
        ChatMessage::system(ANALYST_PERSONA),
        ChatMessage::user(format!("{}\n\n{}", analysis_prompt(left, right), csv_text)),
    ])
}

/// Returns the model's summary of the biggest odds differences.
///
/// Runs for an empty table too; the model then simply has nothing to rank.
pub fn analyze_odds_differences(
    service: &dyn CompletionService,
    table: &CsvTable,
    left: &BookmakerConfig,
    right: &BookmakerConfig,
) -> Result<String> {
    if table.is_empty() {
        crate::log("Comparison table has no rows, asking for analysis anyway");
    } else {
        crate::log(&format!("Analysing odds differences across {} matches...", table.len()));
    }
    let answer = service.complete(&analysis_request(table, left, right)?)?;
    Ok(answer.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::llm::message::Role;
    use crate::llm::testing::ScriptedCompletion;

    fn table() -> CsvTable {
        CsvTable {
            headers: ["Zápas (Fortuna)", "F: 1", "F: 0", "F: 2", "T: 1", "T: 0", "T: 2"]
                .map(String::from)
                .to_vec(),
            rows: vec![["Slavia - Sparta", "1.80", "3.20", "4.10", "1.75", "3.30", "4.20"]
                .map(String::from)
                .to_vec()],
        }
    }

    #[test]
    fn test_request_contains_persona_prompt_and_table() {
        let config = AppConfig::default();
        let messages = analysis_request(&table(), &config.left, &config.right).unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].text(), ANALYST_PERSONA);

        let user = messages[1].text();
        assert!(user.contains("Fortuna a Tipsport"));
        assert!(user.contains("Sloupce F: 1, F: 0, F: 2"));
        assert!(user.contains("T: 1, T: 0, T: 2"));
        assert!(user.contains("3–5 zápasů"));
        assert!(user.ends_with(
            "Zápas (Fortuna),F: 1,F: 0,F: 2,T: 1,T: 0,T: 2\nSlavia - Sparta,1.80,3.20,4.10,1.75,3.30,4.20\n"
        ));
    }

    #[test]
    fn test_answer_returned_verbatim() {
        let config = AppConfig::default();
        let service = ScriptedCompletion::always("\n1. Slavia - Sparta: rozdíl 0.10 u výhry hostů\n");

        let report = analyze_odds_differences(&service, &table(), &config.left, &config.right).unwrap();
        assert_eq!(report, "1. Slavia - Sparta: rozdíl 0.10 u výhry hostů");
    }

    #[test]
    fn test_empty_table_still_analysed() {
        let config = AppConfig::default();
        let service = ScriptedCompletion::always("Tabulka je prázdná.");
        let empty = CsvTable {
            headers: table().headers,
            rows: Vec::new(),
        };

        let report = analyze_odds_differences(&service, &empty, &config.left, &config.right).unwrap();
        assert_eq!(report, "Tabulka je prázdná.");
        assert_eq!(service.request_count(), 1);
    }
}
