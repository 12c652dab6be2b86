//! Property extraction from a single record
//!
//! Line-oriented matching for the `CATEGORIES`/`CATEGORY`, `FN`, `N` and
//! `TEL` properties. Property names match case-insensitively; values are
//! trimmed. For `CATEGORIES`, `FN` and `N` the first matching line wins and
//! later ones are ignored.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::Record;

/// CATEGORIES or CATEGORY property line with a non-empty value.
static CATEGORIES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:CATEGORIES|CATEGORY):\s*(.+)$").expect("Invalid CATEGORIES_RE regex")
});

/// FN property line with a non-empty value.
static FN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^FN:\s*(.+)$").expect("Invalid FN_RE regex"));

/// N property line; components are `;`-separated, family first then given.
static N_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^N:\s*(.+)$").expect("Invalid N_RE regex"));

/// TEL property line, with an optional parameter list before the colon.
static TEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^TEL(?:;[^:]*)?:\s*(.+)$").expect("Invalid TEL_RE regex"));

/// Category value delimiter: comma or semicolon.
static DELIM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[;,]").expect("Invalid DELIM_RE regex"));

/// Split a delimiter-joined category value into trimmed, non-empty pieces.
///
/// Trailing delimiters and blank pieces are dropped, so `"Work, ,Home;"`
/// yields exactly `["Work", "Home"]`.
pub fn split_categories(value: &str) -> Vec<String> {
    DELIM_RE
        .split(value)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

impl Record {
    /// Categories from the first `CATEGORIES`/`CATEGORY` line, in written
    /// order and original case.
    pub fn categories(&self) -> Vec<String> {
        for line in self.lines() {
            if let Some(caps) = CATEGORIES_RE.captures(line) {
                return split_categories(caps[1].trim());
            }
        }
        Vec::new()
    }

    /// Lowercased category set used for matching.
    pub fn category_set(&self) -> BTreeSet<String> {
        self.categories()
            .iter()
            .map(|category| category.to_lowercase())
            .collect()
    }

    /// Display name: the first `FN` value, or `"given family"` synthesized
    /// from the first `N` line with empty components omitted, or an empty
    /// string when neither property is present.
    pub fn display_name(&self) -> String {
        for line in self.lines() {
            if let Some(caps) = FN_RE.captures(line) {
                return caps[1].trim().to_owned();
            }
        }
        for line in self.lines() {
            if let Some(caps) = N_RE.captures(line) {
                let parts: Vec<&str> = caps[1].split(';').map(str::trim).collect();
                let family = parts.first().copied().unwrap_or("");
                let given = parts.get(1).copied().unwrap_or("");
                return [given, family]
                    .iter()
                    .filter(|part| !part.is_empty())
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" ");
            }
        }
        String::new()
    }

    /// Telephone numbers in line order, trimmed, empty values skipped.
    /// Duplicates are kept.
    pub fn phone_numbers(&self) -> Vec<String> {
        self.lines()
            .filter_map(|line| TEL_RE.captures(line))
            .map(|caps| caps[1].trim().to_owned())
            .filter(|value| !value.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lines: &[&str]) -> Record {
        let mut text = String::from("BEGIN:VCARD\n");
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str("END:VCARD\n");
        Record::scan(&text).next().expect("one record")
    }

    #[test]
    fn test_categories_comma_delimited() {
        let rec = record(&["FN:Alice", "CATEGORIES:Friends,Work"]);
        assert_eq!(rec.categories(), vec!["Friends", "Work"]);
    }

    #[test]
    fn test_categories_semicolon_delimited() {
        let rec = record(&["FN:Alice", "CATEGORIES:Friends;Work"]);
        assert_eq!(rec.categories(), vec!["Friends", "Work"]);
    }

    #[test]
    fn test_category_singular_property() {
        let rec = record(&["CATEGORY:Family"]);
        assert_eq!(rec.categories(), vec!["Family"]);
    }

    #[test]
    fn test_categories_case_insensitive_property_name() {
        let rec = record(&["categories:Friends"]);
        assert_eq!(rec.categories(), vec!["Friends"]);
    }

    #[test]
    fn test_categories_first_line_wins() {
        let rec = record(&["CATEGORIES:Friends", "CATEGORIES:Work"]);
        assert_eq!(rec.categories(), vec!["Friends"]);
    }

    #[test]
    fn test_categories_no_phantom_empty_entries() {
        let rec = record(&["CATEGORIES:Work, ,Home;"]);
        assert_eq!(rec.categories(), vec!["Work", "Home"]);
    }

    #[test]
    fn test_categories_absent() {
        let rec = record(&["FN:NoCat"]);
        assert!(rec.categories().is_empty());
        assert!(rec.category_set().is_empty());
    }

    #[test]
    fn test_category_set_lowercases() {
        let rec = record(&["CATEGORIES:Friends,WORK"]);
        let set = rec.category_set();
        assert!(set.contains("friends"));
        assert!(set.contains("work"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_name_prefers_fn() {
        let rec = record(&["N:Doe;John", "FN:Johnny D"]);
        assert_eq!(rec.display_name(), "Johnny D");
    }

    #[test]
    fn test_display_name_trims_fn_value() {
        let rec = record(&["FN:  Alice  "]);
        assert_eq!(rec.display_name(), "Alice");
    }

    #[test]
    fn test_display_name_from_n_components() {
        let rec = record(&["N:Doe;John"]);
        assert_eq!(rec.display_name(), "John Doe");
    }

    #[test]
    fn test_display_name_n_family_only() {
        let rec = record(&["N:Doe"]);
        assert_eq!(rec.display_name(), "Doe");
    }

    #[test]
    fn test_display_name_n_given_only() {
        let rec = record(&["N:;John"]);
        assert_eq!(rec.display_name(), "John");
    }

    #[test]
    fn test_display_name_n_extra_components_ignored() {
        let rec = record(&["N:Doe;John;Quincy;Dr."]);
        assert_eq!(rec.display_name(), "John Doe");
    }

    #[test]
    fn test_display_name_absent() {
        let rec = record(&["TEL:555-0000"]);
        assert_eq!(rec.display_name(), "");
    }

    #[test]
    fn test_phone_numbers_with_and_without_params() {
        let rec = record(&["TEL;TYPE=cell:555-1234", "TEL:555-0000"]);
        assert_eq!(rec.phone_numbers(), vec!["555-1234", "555-0000"]);
    }

    #[test]
    fn test_phone_numbers_skip_empty_keep_duplicates() {
        let rec = record(&["TEL: ", "TEL:555-1234", "TEL;TYPE=home:555-1234"]);
        assert_eq!(rec.phone_numbers(), vec!["555-1234", "555-1234"]);
    }

    #[test]
    fn test_phone_numbers_ignore_other_properties() {
        let rec = record(&["TELEPHONE:nope", "TEL:555-1234"]);
        assert_eq!(rec.phone_numbers(), vec!["555-1234"]);
    }

    #[test]
    fn test_split_categories_handles_both_delimiters() {
        assert_eq!(split_categories("a;b,c"), vec!["a", "b", "c"]);
        assert!(split_categories(" ; , ").is_empty());
    }
}
