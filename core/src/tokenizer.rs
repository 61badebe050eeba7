use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b\w+\b").expect("valid regex");
}

/// Lowercase `text` and split it into word tokens in order of appearance.
/// Duplicates are kept; term frequencies are computed from them downstream.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
}

/// Tokenize an arbitrary JSON value. Only strings carry text; anything else is empty.
pub fn tokenize_value(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => tokenize(s),
        _ => Vec::new(),
    }
}
