//! CSV reader for the comparison table.

use anyhow::{anyhow, Context, Result};
use std::path::Path;

use super::writer::UTF8_BOM;

/// A CSV file held as text cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Loads a CSV file, skipping a leading byte-order mark.
    ///
    /// The first row is the header. Rows may have differing lengths; an empty
    /// file yields an empty table.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
        Self::from_bytes(content)
    }

    fn from_bytes(content: &[u8]) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content);

        let headers: Vec<String> = reader
            .headers()
            .context("Failed to read CSV header")?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.with_context(|| format!("Failed to read CSV row {}", index + 2))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Serializes the table back to comma-delimited text (no BOM).
    pub fn to_csv_text(&self) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        if !self.headers.is_empty() {
            writer
                .write_record(&self.headers)
                .context("Failed to write CSV header")?;
        }
        for row in &self.rows {
            writer.write_record(row).context("Failed to write CSV row")?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow!("Failed to finish CSV text: {}", e.error()))?;
        String::from_utf8(bytes).context("CSV text is not valid UTF-8")
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
