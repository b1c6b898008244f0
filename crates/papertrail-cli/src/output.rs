//! Rendering of command results
//!
//! Every command ends in one of three shapes: a yes/no outcome, a fetched
//! record, or a report with detail lines. Each shape renders to a single
//! string, either human text with ✓/✗ marks or a JSON object. Everything
//! goes to stdout; a negative result is an answer, not an error, and is
//! signalled through the exit status instead.

use serde_json::{json, Map, Value};

const CHECK: char = '\u{2713}';
const CROSS: char = '\u{2717}';

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }

    /// Result of an operation that either happened or did not
    pub fn outcome(self, ok: bool, message: &str) -> String {
        match self {
            OutputFormat::Human => format!("{} {message}", mark(ok)),
            OutputFormat::Json => json!({"success": ok, "message": message}).to_string(),
        }
    }

    /// A record fetched from the service
    ///
    /// Human output lists `fields` under `headline`; JSON output is `record`
    /// with `"success": true` added.
    pub fn record(self, headline: &str, fields: &[(&str, &str)], record: Value) -> String {
        match self {
            OutputFormat::Human => {
                let mut out = format!("{CHECK} {headline}");
                for (name, value) in fields {
                    out.push_str(&format!("\n  {name}: {value}"));
                }
                out
            }
            OutputFormat::Json => {
                let mut object = Map::new();
                object.insert("success".to_string(), Value::Bool(true));
                if let Value::Object(fields) = record {
                    object.extend(fields);
                }
                pretty(&Value::Object(object))
            }
        }
    }

    /// A report whose human form is a headline plus indented detail lines
    ///
    /// JSON output is `document` as given.
    pub fn report(self, ok: bool, headline: &str, details: &[String], document: &Value) -> String {
        match self {
            OutputFormat::Human => {
                let mut out = format!("{} {headline}", mark(ok));
                for line in details {
                    out.push('\n');
                    if !line.is_empty() {
                        out.push_str("  ");
                        out.push_str(line);
                    }
                }
                out
            }
            OutputFormat::Json => pretty(document),
        }
    }
}

fn mark(ok: bool) -> char {
    if ok {
        CHECK
    } else {
        CROSS
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
