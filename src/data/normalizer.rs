//! Value Normalizer Module
//! Turns raw cells like "70-80 Traffic" into a numeric value and a label.

use log::debug;

/// A cell split into its numeric value and free-text label.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCell {
    pub value: f64,
    pub label: String,
}

/// Split a cell on its first whitespace into (numeric token, label).
pub fn split_cell(cell: &str) -> (&str, &str) {
    cell.split_once(char::is_whitespace).unwrap_or((cell, ""))
}

/// Extract a float from a numeric token.
///
/// Ranges ("70-80") and slash pairs ("1/2") both yield the mean of their two halves.
/// Anything without a parseable number yields 0.0.
pub fn extract_numeric(token: &str) -> f64 {
    let token = token.trim();

    if let Some((low, high)) = token.split_once('-') {
        return mean_of_pair(low, high);
    }
    if let Some((left, right)) = token.split_once('/') {
        return mean_of_pair(left, right);
    }
    parse_fragment(token)
}

/// Normalize a full cell.
pub fn parse_cell(cell: &str) -> NormalizedCell {
    let (token, label) = split_cell(cell);
    NormalizedCell {
        value: extract_numeric(token),
        label: label.to_string(),
    }
}

fn mean_of_pair(a: &str, b: &str) -> f64 {
    (parse_fragment(a) + parse_fragment(b)) / 2.0
}

fn strip_non_numeric(fragment: &str) -> String {
    fragment
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

fn parse_fragment(fragment: &str) -> f64 {
    let digits = strip_non_numeric(fragment);
    if digits.is_empty() {
        return 0.0;
    }
    digits.parse::<f64>().unwrap_or_else(|_| {
        debug!("Unparseable numeric fragment {:?}, using 0.0", fragment);
        0.0
    })
}
