//! Parsed results of the quote and options fetch programs.
//!
//! Both programs print a single JSON object on stdout. Output that does not
//! parse is still logged verbatim by the store; it just never becomes a
//! snapshot. Python's `json.dumps` writes missing floats as bare `NaN` or
//! `Infinity`; those tokens are read as `null`.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::indicator::PriceSeries;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuoteSnapshot {
    pub symbol: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub last_price: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,
    /// RSI reported by the fetch program itself (fixed 14-period).
    #[serde(default)]
    pub rsi: Option<f64>,
    /// Finite closes only; `null` entries are skipped.
    #[serde(default, deserialize_with = "present_closes")]
    pub closes: Vec<f64>,
}

fn present_closes<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<f64>>> = Option::deserialize(deserializer)?;
    Ok(raw.into_iter().flatten().flatten().collect())
}

impl QuoteSnapshot {
    pub fn parse(output: &str) -> Option<Self> {
        serde_json::from_str(&nulls_for_non_finite(output.trim())).ok()
    }

    pub fn series(&self) -> PriceSeries {
        PriceSeries::from_closes(self.closes.iter().copied())
    }

    /// Absolute and percentage change against the previous close.
    pub fn change(&self) -> Option<(f64, f64)> {
        let last = self.last_price?;
        let prev = self.previous_close?;
        if prev == 0.0 || !last.is_finite() || !prev.is_finite() {
            return None;
        }
        let diff = last - prev;
        Some((diff, diff / prev * 100.0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OptionsPreview {
    #[serde(default)]
    pub straddle_head: Vec<Value>,
    #[serde(default)]
    pub stacked_head: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptionsSnapshot {
    pub symbol: String,
    #[serde(default)]
    pub straddle_rows: usize,
    #[serde(default)]
    pub stacked_rows: usize,
    #[serde(default)]
    pub preview: OptionsPreview,
    #[serde(default)]
    pub error: Option<String>,
}

impl OptionsSnapshot {
    pub fn parse(output: &str) -> Option<Self> {
        serde_json::from_str(&nulls_for_non_finite(output.trim())).ok()
    }

    pub fn has_data(&self) -> bool {
        self.error.is_none() && (self.straddle_rows > 0 || self.stacked_rows > 0)
    }
}

/// Replaces bare `NaN`, `Infinity` and `-Infinity` tokens outside string
/// literals with `null`.
pub fn nulls_for_non_finite(json: &str) -> Cow<'_, str> {
    const TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];
    if !TOKENS.iter().any(|t| json.contains(t)) {
        return Cow::Borrowed(json);
    }

    let mut out = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = json;
    while let Some(c) = rest.chars().next() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = TOKENS.iter().find(|t| rest.starts_with(**t)) {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    Cow::Owned(out)
}

/// Compact `key=value` rendering of one preview record, keys sorted.
pub fn summarize_record(record: &Value) -> String {
    match record {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            keys.into_iter()
                .map(|k| format!("{k}={}", scalar_text(&map[k])))
                .collect::<Vec<_>>()
                .join(" ")
        }
        other => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/quote.rs"]
mod tests;
