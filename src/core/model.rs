//! vCard record model
//!
//! A [`Record`] is one contact card, from its `BEGIN:VCARD` line to its
//! `END:VCARD` line inclusive, with line folding already removed. Records
//! are immutable blobs of text; the property accessors in
//! [`crate::core::fields`] re-extract on every call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::unfold::unfold;

/// One parsed vCard block, begin and end marker lines included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    text: String,
}

impl Record {
    /// Scan a raw vCard stream and iterate over the complete records in it.
    ///
    /// The input is unfolded first. A `BEGIN:VCARD` line (trimmed,
    /// case-insensitive) starts a record and discards any record still open;
    /// an `END:VCARD` line emits the current record. Lines outside a record
    /// and a trailing record with no end marker are dropped. The marker
    /// lines themselves are kept verbatim.
    pub fn scan(text: &str) -> Records {
        let lines: Vec<String> = unfold(text).lines().map(str::to_owned).collect();
        Records {
            lines: lines.into_iter(),
        }
    }

    /// The record text, lines joined by `\n`, no trailing newline.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        Self {
            text: lines.join("\n"),
        }
    }

    pub(crate) fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Iterator over the complete records of one vCard stream.
///
/// A pure pass over the input text: re-running [`Record::scan`] on the same
/// input yields the same sequence.
pub struct Records {
    lines: std::vec::IntoIter<String>,
}

impl Iterator for Records {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        let mut card: Vec<String> = Vec::new();
        let mut in_card = false;

        for line in self.lines.by_ref() {
            let marker = line.trim();
            if marker.eq_ignore_ascii_case("BEGIN:VCARD") {
                // A new begin marker discards any partial record.
                in_card = true;
                card.clear();
                card.push(line);
            } else if marker.eq_ignore_ascii_case("END:VCARD") {
                if in_card {
                    card.push(line);
                    return Some(Record::from_lines(card));
                }
            } else if in_card {
                card.push(line);
            }
        }

        None
    }
}

/// Flattened view of a record for structured output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSummary {
    /// Display name (`FN`, or synthesized from `N`).
    pub name: String,

    /// Categories in written order and original case.
    pub categories: Vec<String>,

    /// Telephone numbers in line order.
    pub phones: Vec<String>,
}

impl From<&Record> for CardSummary {
    fn from(record: &Record) -> Self {
        Self {
            name: record.display_name(),
            categories: record.categories(),
            phones: record.phone_numbers(),
        }
    }
}
