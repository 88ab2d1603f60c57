//! Metadata header parsing for markdown documents.
//!
//! Posts and pages open with a block of `key: value` lines; the block ends
//! at the first blank line (or the first line that isn't a `key: value`
//! pair), and everything after it is the markdown body:
//!
//! ```text
//! title: Hello World
//! date: 2021-03-01
//! tags: rust, blogging
//!
//! The post body starts here.
//! ```
//!
//! Keys are matched case-insensitively. List-valued fields split on
//! commas; surrounding whitespace is trimmed and empty elements dropped.
//! Absent keys read as empty.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// The parsed `key: value` header of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaBlock {
    fields: HashMap<String, String>,
}

impl MetaBlock {
    /// The value for `key`, or the empty string when absent.
    pub fn get(&self, key: &str) -> &str {
        self.fields
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The value for `key` split on commas, trimmed, empties dropped.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Split a document into its metadata header and markdown body.
///
/// A header line is `key: value` where the key has no whitespace. The
/// first blank line is consumed as the separator; a non-matching line
/// ends the header and stays part of the body. Repeated keys overwrite.
pub fn parse_document(input: &str) -> (MetaBlock, &str) {
    let mut fields = HashMap::new();
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            offset += line.len();
            break;
        }
        let Some((key, value)) = trimmed.split_once(':') else {
            break;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            break;
        }
        fields.insert(key.to_ascii_lowercase(), value.trim().to_string());
        offset += line.len();
    }
    (MetaBlock { fields }, &input[offset..])
}

/// Parse a `date:` metadata value.
///
/// Accepts RFC 3339 (`2021-03-01T09:30:00Z`), `2021-03-01 09:30`, or a
/// bare `2021-03-01` (taken as midnight).
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
