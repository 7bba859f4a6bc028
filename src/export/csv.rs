//! Delimited-text encoding of catalogue views
//!
//! One dialect for both the on-disk tables and the download/export
//! surface: comma-delimited, header row first, fields quoted only when
//! they contain a delimiter, quote, or newline. Floats are printed in
//! shortest round-trip form, so re-parsing an export reproduces the
//! in-memory table exactly.

use std::str::FromStr;

use crate::catalogue::{SourceClass, SourceRecord};

/// Header of an exported classification view, identifier column included
pub const CLASSIFICATION_HEADER: &str = "name,ra,dec,class 1,CMP1,class 2,CMP2,SHAP";

/// Parse failure with a 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub reason: String,
}

impl ParseError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Quotes a field when the dialect requires it
pub fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Splits one record into fields, honouring quoting.
///
/// Returns a reason string on an unterminated quote or stray quote
/// character; the caller supplies line context.
pub fn split_record(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        if quoted {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        quoted = false;
                    }
                }
                other => field.push(other),
            }
        } else {
            match c {
                ',' => {
                    fields.push(std::mem::take(&mut field));
                }
                '"' => {
                    if field.is_empty() {
                        quoted = true;
                    } else {
                        return Err("quote inside unquoted field".to_string());
                    }
                }
                other => field.push(other),
            }
        }
    }
    if quoted {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(field);
    Ok(fields)
}

/// Encodes a classification view, header first, one row per source.
///
/// Byte-content equal to the in-memory rows: identifiers verbatim,
/// floats in shortest round-trip form, the explanation flag as
/// `true`/`false`.
pub fn encode_classification(rows: &[SourceRecord]) -> String {
    let mut out = String::with_capacity(64 * (rows.len() + 1));
    out.push_str(CLASSIFICATION_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&escape_field(&row.name));
        out.push(',');
        out.push_str(&format!(
            "{},{},{},{},{},{},{}",
            row.ra, row.dec, row.class1, row.cmp1, row.class2, row.cmp2, row.has_explanation
        ));
        out.push('\n');
    }
    out
}

/// Parses a classification view produced by [`encode_classification`]
/// (also the on-disk `classification.csv` format).
pub fn parse_classification(text: &str) -> Result<Vec<SourceRecord>, ParseError> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines
        .next()
        .ok_or_else(|| ParseError::new(1, "empty file"))?;
    if header != CLASSIFICATION_HEADER {
        return Err(ParseError::new(
            1,
            format!("bad header, expected '{}'", CLASSIFICATION_HEADER),
        ));
    }

    let mut rows = Vec::new();
    for (index, line) in lines {
        let line_no = index + 1;
        if line.is_empty() {
            continue;
        }
        let fields = split_record(line).map_err(|reason| ParseError::new(line_no, reason))?;
        if fields.len() != 8 {
            return Err(ParseError::new(
                line_no,
                format!("expected 8 fields, found {}", fields.len()),
            ));
        }
        let record = SourceRecord {
            name: fields[0].clone(),
            ra: parse_f64(&fields[1], "ra", line_no)?,
            dec: parse_f64(&fields[2], "dec", line_no)?,
            class1: parse_class(&fields[3], line_no)?,
            cmp1: parse_f64(&fields[4], "CMP1", line_no)?,
            class2: parse_class(&fields[5], line_no)?,
            cmp2: parse_f64(&fields[6], "CMP2", line_no)?,
            has_explanation: parse_bool(&fields[7], line_no)?,
        };
        record
            .validate()
            .map_err(|reason| ParseError::new(line_no, reason))?;
        rows.push(record);
    }
    Ok(rows)
}

fn parse_f64(field: &str, column: &str, line: usize) -> Result<f64, ParseError> {
    field
        .parse::<f64>()
        .map_err(|_| ParseError::new(line, format!("'{}' is not a number ({})", field, column)))
}

fn parse_class(field: &str, line: usize) -> Result<SourceClass, ParseError> {
    SourceClass::from_str(field).map_err(|e| ParseError::new(line, e.to_string()))
}

fn parse_bool(field: &str, line: usize) -> Result<bool, ParseError> {
    match field {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ParseError::new(
            line,
            format!("'{}' is not a boolean SHAP flag", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> SourceRecord {
        SourceRecord {
            name: name.to_string(),
            ra: 266.41683,
            dec: -29.00781,
            class1: SourceClass::Pulsar,
            cmp1: 0.87,
            class2: SourceClass::Lmxb,
            cmp2: 0.1,
            has_explanation: true,
        }
    }

    #[test]
    fn test_escape_only_when_needed() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_split_round_trips_quoted_fields() {
        let fields = split_record("\"a,b\",plain,\"q\"\"q\"").unwrap();
        assert_eq!(fields, ["a,b", "plain", "q\"q"]);
    }

    #[test]
    fn test_split_rejects_unterminated_quote() {
        assert!(split_record("\"open").is_err());
    }

    #[test]
    fn test_encode_parse_round_trip() {
        let rows = vec![record("2CXO J1745-2900"), record("2CXO J0534+2200")];
        let text = encode_classification(&rows);
        let parsed = parse_classification(&text).unwrap();
        assert_eq!(parsed, rows);
        // Re-encoding the parse is byte-identical
        assert_eq!(encode_classification(&parsed), text);
    }

    #[test]
    fn test_identifier_with_comma_survives() {
        let mut row = record("odd,name");
        row.name = "odd,name".to_string();
        let text = encode_classification(&[row.clone()]);
        let parsed = parse_classification(&text).unwrap();
        assert_eq!(parsed[0].name, "odd,name");
    }

    #[test]
    fn test_bad_header_rejected() {
        let err = parse_classification("nope\n").unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_bad_field_reports_line() {
        let text = format!(
            "{}\nsrc,badra,0,AGN,0.9,STAR,0.05,false\n",
            CLASSIFICATION_HEADER
        );
        let err = parse_classification(&text).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.reason.contains("ra"));
    }
}
