//! Display indentation driven by `$event` begin/end markers.

use crate::element::labels;
use crate::error::{InspectorError, Result};
use serde_json::Value;
use tracing::warn;

pub const DEFAULT_INDENT_STEP: usize = 4;

/// What to do with an `end` event that has no matching `begin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventNesting {
    /// Fail with [`InspectorError::UnbalancedEvent`].
    #[default]
    Strict,
    /// Keep the signed depth as is and emit no prefix while it is negative.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentOptions {
    pub step: usize,
    pub nesting: EventNesting,
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            step: DEFAULT_INDENT_STEP,
            nesting: EventNesting::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Begin,
    End,
}

fn marker(line: &str, line_number: usize) -> Result<Option<Marker>> {
    let value: Value = serde_json::from_str(line)
        .map_err(|source| InspectorError::MalformedLine { line: line_number, source })?;

    if value.get("label").and_then(Value::as_str) != Some(labels::EVENT) {
        return Ok(None);
    }

    Ok(match value.get("kind").and_then(Value::as_str) {
        Some(labels::BEGIN) => Some(Marker::Begin),
        Some(labels::END) => Some(Marker::End),
        _ => None,
    })
}

/// Prefixes every line with the current `$event` nesting depth in spaces.
///
/// The depth changes before the marker line itself is emitted, so a `begin`
/// line is already indented and an `end` line is already dedented. Output
/// has exactly one entry per input line, in input order.
pub fn indent_lines<S: AsRef<str>>(lines: &[S], options: &IndentOptions) -> Result<Vec<String>> {
    let step = options.step as isize;
    let mut depth: isize = 0;
    let mut below_zero = false;
    let mut output = Vec::with_capacity(lines.len());

    for (line_number, line) in lines.iter().enumerate() {
        let line = line.as_ref();

        match marker(line, line_number)? {
            Some(Marker::Begin) => depth += step,
            Some(Marker::End) => {
                depth -= step;
                if depth < 0 {
                    match options.nesting {
                        EventNesting::Strict => {
                            return Err(InspectorError::UnbalancedEvent {
                                line: line_number,
                                depth,
                            });
                        }
                        EventNesting::Lenient if !below_zero => {
                            warn!(line = line_number, depth, "`$event` nesting went below zero");
                        }
                        EventNesting::Lenient => {}
                    }
                }
            }
            None => {}
        }
        below_zero = depth < 0;

        let width = depth.max(0) as usize;
        output.push(format!("{:width$}{line}", ""));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEGIN: &str = r#"{"id":10,"type":"vertex","label":"$event","kind":"begin","scope":"document","data":1}"#;
    const END: &str = r#"{"id":11,"type":"vertex","label":"$event","kind":"end","scope":"document","data":1}"#;
    const DOC: &str = r#"{"id":1,"type":"vertex","label":"document"}"#;
    const RANGE: &str = r#"{"id":2,"type":"vertex","label":"range"}"#;

    fn leading_spaces(line: &str) -> usize {
        line.len() - line.trim_start_matches(' ').len()
    }

    #[test]
    fn test_plain_lines_untouched() {
        let output = indent_lines(&[DOC, RANGE], &IndentOptions::default()).unwrap();
        assert_eq!(output, vec![DOC.to_string(), RANGE.to_string()]);
    }

    #[test]
    fn test_begin_block_indents_contents() {
        let output = indent_lines(&[BEGIN, DOC, RANGE, END], &IndentOptions::default()).unwrap();
        let depths: Vec<usize> = output.iter().map(|l| leading_spaces(l)).collect();

        // begin is emitted at the new depth, end after dedenting
        assert_eq!(depths, vec![4, 4, 4, 0]);
        assert_eq!(output[1].trim_start(), DOC);
        assert_eq!(output[3], END);
    }

    #[test]
    fn test_nested_blocks() {
        let output =
            indent_lines(&[BEGIN, DOC, BEGIN, RANGE, END, END, DOC], &IndentOptions::default()).unwrap();
        let depths: Vec<usize> = output.iter().map(|l| leading_spaces(l)).collect();
        assert_eq!(depths, vec![4, 4, 8, 8, 4, 0, 0]);
    }

    #[test]
    fn test_custom_step() {
        let options = IndentOptions {
            step: 2,
            ..IndentOptions::default()
        };
        let output = indent_lines(&[BEGIN, DOC, END], &options).unwrap();
        assert_eq!(output[1], format!("  {DOC}"));
    }

    #[test]
    fn test_other_event_kinds_keep_depth() {
        let other = r#"{"id":12,"type":"vertex","label":"$event","kind":"progress"}"#;
        let output = indent_lines(&[BEGIN, other, DOC], &IndentOptions::default()).unwrap();
        assert!(output.iter().all(|l| leading_spaces(l) == 4));
    }

    #[test]
    fn test_kind_outside_event_is_ignored() {
        let moniker = r#"{"id":3,"type":"vertex","label":"moniker","kind":"begin"}"#;
        let output = indent_lines(&[moniker, DOC], &IndentOptions::default()).unwrap();
        assert_eq!(leading_spaces(&output[1]), 0);
    }

    #[test]
    fn test_unclosed_begin_is_tolerated() {
        let output = indent_lines(&[BEGIN, DOC], &IndentOptions::default()).unwrap();
        assert_eq!(output.len(), 2);
    }

    #[test]
    fn test_strict_rejects_unmatched_end() {
        let err = indent_lines(&[DOC, END, DOC], &IndentOptions::default()).unwrap_err();
        assert!(matches!(err, InspectorError::UnbalancedEvent { line: 1, depth: -4 }));
    }

    #[test]
    fn test_lenient_keeps_negative_depth() {
        let options = IndentOptions {
            nesting: EventNesting::Lenient,
            ..IndentOptions::default()
        };
        let output = indent_lines(&[END, DOC, BEGIN, RANGE, BEGIN, DOC], &options).unwrap();
        let depths: Vec<usize> = output.iter().map(|l| leading_spaces(l)).collect();

        // -4, -4, 0, 0, 4, 4: the first begin only climbs back to zero
        assert_eq!(depths, vec![0, 0, 0, 0, 4, 4]);
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        let err = indent_lines(&[DOC, "{not json"], &IndentOptions::default()).unwrap_err();
        assert!(matches!(err, InspectorError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_empty_input() {
        let lines: [&str; 0] = [];
        assert!(indent_lines(&lines, &IndentOptions::default()).unwrap().is_empty());
    }
}
