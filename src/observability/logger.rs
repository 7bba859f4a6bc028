//! Structured JSON logger
//!
//! One log line = one event, written synchronously with deterministic
//! key ordering (event, severity, then fields alphabetically), so logs
//! diff cleanly across runs.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
    /// Unrecoverable, process exits
    Fatal,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger
pub struct Logger;

impl Logger {
    /// Logs an event to stdout
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::write_line(&mut io::stdout(), severity, event, fields);
    }

    /// Logs an event to stderr (errors and fatal diagnostics)
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::write_line(&mut io::stderr(), severity, event, fields);
    }

    fn write_line<W: Write>(writer: &mut W, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        // One write_all call per line
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Renders one event as a single JSON line.
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut pairs: Vec<(&str, &str)> = fields.to_vec();
        pairs.sort_unstable_by_key(|(key, _)| *key);

        let mut line = String::with_capacity(128);
        line.push('{');
        push_pair(&mut line, "event", event);
        line.push(',');
        push_pair(&mut line, "severity", severity.as_str());
        for (key, value) in pairs {
            line.push(',');
            push_pair(&mut line, key, value);
        }
        line.push_str("}\n");
        line
    }
}

fn push_pair(line: &mut String, key: &str, value: &str) {
    push_json_string(line, key);
    line.push(':');
    push_json_string(line, value);
}

fn push_json_string(line: &mut String, s: &str) {
    use fmt::Write as _;

    line.push('"');
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                line.push('\\');
                line.push(c);
            }
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            '\t' => line.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(line, "\\u{:04x}", c as u32);
            }
            c => line.push(c),
        }
    }
    line.push('"');
}
