//! Output rendering
//!
//! The query layer returns data; this module turns it into the selected
//! output format and routes it to stdout or a file. Raw mode keeps stdout a
//! pure vCard stream so it can be piped straight into another tool.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::model::{CardSummary, Record};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// vCard text stream (or tab-separated columns with --name/--number).
    #[default]
    Raw,
    /// One JSON object per card.
    Jsonl,
    /// A single JSON array.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(OutputFormat::Raw),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Column projection for raw output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Columns {
    pub name: bool,
    pub number: bool,
}

impl Columns {
    pub fn any(&self) -> bool {
        self.name || self.number
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for query results
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a sequence of matching cards.
    pub fn render_cards(&self, records: &[Record], columns: Columns) -> Result<String> {
        match self.config.format {
            OutputFormat::Raw => Ok(self.render_raw(records, columns)),
            OutputFormat::Jsonl => self.render_jsonl(records),
            OutputFormat::Json => self.render_json(records),
        }
    }

    /// Raw mode: the vCard stream itself, or tab-separated columns when a
    /// projection is selected.
    fn render_raw(&self, records: &[Record], columns: Columns) -> String {
        let lines: Vec<String> = if columns.any() {
            records
                .iter()
                .map(|record| {
                    let mut cols = Vec::new();
                    if columns.name {
                        cols.push(record.display_name());
                    }
                    if columns.number {
                        cols.push(record.phone_numbers().join(";"));
                    }
                    cols.join("\t")
                })
                .collect()
        } else {
            records.iter().map(Record::to_string).collect()
        };
        join_with_trailing_newline(&lines)
    }

    fn render_jsonl(&self, records: &[Record]) -> Result<String> {
        let mut lines = Vec::with_capacity(records.len());
        for record in records {
            let summary = CardSummary::from(record);
            let line = if self.config.pretty {
                serde_json::to_string_pretty(&summary)?
            } else {
                serde_json::to_string(&summary)?
            };
            lines.push(line);
        }
        Ok(join_with_trailing_newline(&lines))
    }

    fn render_json(&self, records: &[Record]) -> Result<String> {
        let summaries: Vec<CardSummary> = records.iter().map(CardSummary::from).collect();
        let body = if self.config.pretty {
            serde_json::to_string_pretty(&summaries)?
        } else {
            serde_json::to_string(&summaries)?
        };
        Ok(format!("{}\n", body))
    }

    /// Render a category -> count mapping for stdout (json/jsonl formats).
    pub fn render_counts(&self, counts: &BTreeMap<String, usize>) -> Result<String> {
        let body = if self.config.pretty {
            serde_json::to_string_pretty(counts)?
        } else {
            serde_json::to_string(counts)?
        };
        Ok(format!("{}\n", body))
    }
}

/// The plain-text counts table, sorted by category name.
pub fn render_counts_text(counts: &BTreeMap<String, usize>) -> String {
    if counts.is_empty() {
        return "No category counts available\n".to_owned();
    }
    let mut out = String::from("Category counts:\n");
    for (category, count) in counts {
        out.push_str(&format!("  {}: {}\n", category, count));
    }
    out
}

/// Write a rendered payload to a file, or to stdout when no path is given.
pub fn write_output(payload: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => fs::write(path, payload)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => std::io::stdout()
            .write_all(payload.as_bytes())
            .context("Failed to write to stdout"),
    }
}

fn join_with_trailing_newline(lines: &[String]) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Record;

    fn sample_records() -> Vec<Record> {
        let stream = "BEGIN:VCARD\nFN:Alice\nCATEGORIES:Friends,Work\nTEL:555-1234\nEND:VCARD\n\
                      BEGIN:VCARD\nFN:Bob\nCATEGORIES:Work\nTEL:555-0000\nTEL:555-0001\nEND:VCARD\n";
        Record::scan(stream).collect()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("raw".parse::<OutputFormat>().unwrap(), OutputFormat::Raw);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_parse_case_insensitive() {
        assert_eq!("RAW".parse::<OutputFormat>().unwrap(), OutputFormat::Raw);
        assert_eq!("JSONL".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
    }

    #[test]
    fn test_output_format_parse_invalid() {
        let result = "invalid".parse::<OutputFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_render_raw_is_vcard_stream() {
        let records = sample_records();
        let renderer = Renderer::with_config(RenderConfig::default());
        let output = renderer.render_cards(&records, Columns::default()).unwrap();

        assert!(output.starts_with("BEGIN:VCARD\nFN:Alice"));
        assert!(output.ends_with("END:VCARD\n"));
        // Cards are joined by a single newline.
        assert_eq!(output.matches("BEGIN:VCARD").count(), 2);
        assert!(output.contains("END:VCARD\nBEGIN:VCARD"));
    }

    #[test]
    fn test_render_raw_empty_is_empty_string() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let output = renderer.render_cards(&[], Columns::default()).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_render_name_column() {
        let records = sample_records();
        let renderer = Renderer::with_config(RenderConfig::default());
        let columns = Columns {
            name: true,
            number: false,
        };
        let output = renderer.render_cards(&records, columns).unwrap();
        assert_eq!(output, "Alice\nBob\n");
    }

    #[test]
    fn test_render_name_and_number_columns() {
        let records = sample_records();
        let renderer = Renderer::with_config(RenderConfig::default());
        let columns = Columns {
            name: true,
            number: true,
        };
        let output = renderer.render_cards(&records, columns).unwrap();
        assert_eq!(output, "Alice\t555-1234\nBob\t555-0000;555-0001\n");
    }

    #[test]
    fn test_render_jsonl() {
        let records = sample_records();
        let config = RenderConfig::with_pretty(OutputFormat::Jsonl, false);
        let renderer = Renderer::with_config(config);
        let output = renderer.render_cards(&records, Columns::default()).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["name"], "Alice");
        assert_eq!(first["categories"][0], "Friends");
    }

    #[test]
    fn test_render_json_array() {
        let records = sample_records();
        let config = RenderConfig::with_pretty(OutputFormat::Json, false);
        let renderer = Renderer::with_config(config);
        let output = renderer.render_cards(&records, Columns::default()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[1]["phones"][1], "555-0001");
    }

    #[test]
    fn test_render_counts_text_sorted() {
        let mut counts = BTreeMap::new();
        counts.insert("work".to_owned(), 2);
        counts.insert("friends".to_owned(), 1);
        let text = render_counts_text(&counts);
        assert_eq!(text, "Category counts:\n  friends: 1\n  work: 2\n");
    }

    #[test]
    fn test_render_counts_text_empty() {
        let counts = BTreeMap::new();
        assert_eq!(render_counts_text(&counts), "No category counts available\n");
    }

    #[test]
    fn test_render_counts_json() {
        let mut counts = BTreeMap::new();
        counts.insert("work".to_owned(), 2);
        let renderer = Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Json, false));
        let output = renderer.render_counts(&counts).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["work"], 2);
    }

    #[test]
    fn test_write_output_to_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("out.vcf");
        write_output("BEGIN:VCARD\nEND:VCARD\n", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "BEGIN:VCARD\nEND:VCARD\n");
    }
}
