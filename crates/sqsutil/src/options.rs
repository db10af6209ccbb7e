//! Option strings: comma-separated `key=value` pairs, e.g. `foo=bar,hello="big world"`.
//!
//! Parsing is total. Malformed quoting is never an error; the raw text is kept instead.

use crate::quote::{quote, unquote};
use crate::trace;
use indexmap::IndexMap;

/// Parsed option string. Iteration follows first insertion; a repeated key keeps
/// its first position and takes the value of its last occurrence.
pub type OptionMap = IndexMap<String, String>;

/// Parse an option string into an [`OptionMap`].
pub fn parse(input: &str) -> OptionMap {
    let mut options = OptionMap::new();
    if input.is_empty() {
        return options;
    }

    let sanitized = unquote(input).unwrap_or_else(|e| {
        trace!("option string used as-is ({e})");
        input.to_string()
    });

    for field in sanitized.split(',') {
        let (key, value) = match field.split_once('=') {
            Some((key, raw)) => (key, unquote(raw).unwrap_or_else(|_| raw.to_string())),
            None => (field, String::new()),
        };
        options.insert(key.to_string(), value);
    }
    options
}

/// Split `input` on runs of whitespace.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Render `options` back into an option string with every value quoted.
///
/// Keys containing `,` or `=` and values containing `,` cannot be represented.
pub fn to_option_string(options: &OptionMap) -> String {
    options
        .iter()
        .map(|(key, value)| format!("{key}={}", quote(value)))
        .collect::<Vec<_>>()
        .join(",")
}
