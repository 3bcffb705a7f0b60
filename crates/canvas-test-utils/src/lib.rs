//! Testing utilities for the Code Canvas workspace
//!
//! Shared assertions over emitted pattern text.

#![allow(missing_docs)]

use serde_json::Value;

/// Assert emitted text equals `expected` byte for byte, with a readable diff
pub fn assert_output_eq(actual: &str, expected: &str) {
    pretty_assertions::assert_eq!(actual, expected);
}

/// Brackets open and close in order and never go negative
pub fn brackets_balanced(text: &str) -> bool {
    let mut depth: i64 = 0;
    for ch in text.chars() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// No `,]` sequence, ignoring whitespace between them
pub fn has_trailing_comma(text: &str) -> bool {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    compact.contains(",]")
}

/// Decode `[[x,y],...]` into integer pairs, panicking on any other shape
pub fn decode_pairs(text: &str) -> Vec<(i64, i64)> {
    let value: Value = serde_json::from_str(text).expect("output is not valid JSON");
    let items = value.as_array().expect("output is not a JSON array");
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let pair = item
                .as_array()
                .unwrap_or_else(|| panic!("element {i} is not an array"));
            assert_eq!(pair.len(), 2, "element {i} is not a pair");
            let x = pair[0].as_i64().unwrap_or_else(|| panic!("element {i} x is not an integer"));
            let y = pair[1].as_i64().unwrap_or_else(|| panic!("element {i} y is not an integer"));
            (x, y)
        })
        .collect()
}

/// All structural checks at once
pub fn assert_well_formed(text: &str) {
    assert!(brackets_balanced(text), "unbalanced brackets in {text}");
    assert!(!has_trailing_comma(text), "trailing comma in {text}");
    let _ = decode_pairs(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_unbalanced() {
        assert!(brackets_balanced("[[1,2]]"));
        assert!(!brackets_balanced("[[1,2]"));
        assert!(!brackets_balanced("]["));
    }

    #[test]
    fn detects_trailing_comma() {
        assert!(has_trailing_comma("[[1,2],]"));
        assert!(has_trailing_comma("[[1,2,], [3,4]]"));
        assert!(!has_trailing_comma("[[1,2],[3,4]]"));
    }

    #[test]
    fn decodes_pairs() {
        assert_eq!(decode_pairs("[[0,5],[1,5]]"), vec![(0, 5), (1, 5)]);
        assert!(decode_pairs("[]").is_empty());
    }

    #[test]
    #[should_panic(expected = "not a pair")]
    fn rejects_triples() {
        decode_pairs("[[1,2,3]]");
    }
}
