//! Line-oriented property file parser
//!
//! Reads the `key=value` text format used by the bootstrap files:
//!
//! - `#` and `!` start a comment line; blank lines are skipped
//! - the key ends at the first unescaped `=`, `:` or whitespace
//! - whitespace around the separator is ignored
//! - a line ending in an odd number of backslashes continues on the next
//!   line, whose leading whitespace is dropped
//! - escapes: `\t`, `\n`, `\r`, `\f`, `\uXXXX`; any other escaped character
//!   stands for itself
//!
//! A later duplicate key replaces an earlier one.

use crate::domain::{ConfigError, Result};
use std::collections::HashMap;

/// Raw key/value pairs read from a property source
pub type Properties = HashMap<String, String>;

/// Parses property file text
///
/// # Errors
///
/// Returns [`ConfigError::Bootstrap`] for a malformed `\uXXXX` escape.
///
/// # Examples
///
/// ```
/// use confinject::source::parse_properties;
///
/// let props = parse_properties("server.port = 8080\n# comment\nname:explorviz").unwrap();
/// assert_eq!(props["server.port"], "8080");
/// assert_eq!(props["name"], "explorviz");
/// ```
pub fn parse_properties(input: &str) -> Result<Properties> {
    let mut properties = Properties::new();

    for (line_no, line) in logical_lines(input) {
        let chars: Vec<char> = line.chars().collect();
        let (key_end, value_start) = split_key_value(&chars);

        let key = unescape(&chars[..key_end], line_no)?;
        let value = unescape(&chars[value_start..], line_no)?;
        properties.insert(key, value);
    }

    Ok(properties)
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Joins continued natural lines, drops comments and blank lines.
/// Each logical line is paired with the number of its first natural line.
fn logical_lines(input: &str) -> Vec<(usize, String)> {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, raw) in normalized.split('\n').enumerate() {
        let line = raw.trim_start_matches(is_whitespace);

        let (start, mut acc) = match pending.take() {
            Some(partial) => partial,
            None => {
                if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                    continue;
                }
                (idx + 1, String::new())
            }
        };

        if continues(line) {
            acc.push_str(&line[..line.len() - 1]);
            pending = Some((start, acc));
        } else {
            acc.push_str(line);
            lines.push((start, acc));
        }
    }

    if let Some(partial) = pending {
        lines.push(partial);
    }

    lines
}

/// Returns `(key_end, value_start)` indices into `chars`
fn split_key_value(chars: &[char]) -> (usize, usize) {
    let len = chars.len();
    let mut key_end = len;
    let mut value_start = len;
    let mut has_separator = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' {
            key_end = i;
            value_start = i + 1;
            has_separator = true;
            break;
        } else if is_whitespace(c) {
            key_end = i;
            value_start = i + 1;
            break;
        }
    }

    while value_start < len {
        let c = chars[value_start];
        if !is_whitespace(c) {
            if !has_separator && (c == '=' || c == ':') {
                has_separator = true;
            } else {
                break;
            }
        }
        value_start += 1;
    }

    (key_end, value_start)
}

fn unescape(chars: &[char], line_no: usize) -> Result<String> {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;

        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(&next) = chars.get(i) else {
            break;
        };
        i += 1;

        match next {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'f' => out.push('\x0c'),
            'u' => {
                let unit = hex_unit(chars, i, line_no)?;
                i += 4;

                if (0xD800..0xDC00).contains(&unit) {
                    // High surrogate: must be followed by an escaped low surrogate
                    let low = if chars.get(i) == Some(&'\\') && chars.get(i + 1) == Some(&'u') {
                        Some(hex_unit(chars, i + 2, line_no)?)
                    } else {
                        None
                    };
                    match low {
                        Some(low) if (0xDC00..0xE000).contains(&low) => {
                            i += 6;
                            let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                            out.push(to_char(code, line_no)?);
                        }
                        _ => return Err(malformed(line_no, "unpaired surrogate")),
                    }
                } else {
                    out.push(to_char(unit, line_no)?);
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

fn hex_unit(chars: &[char], start: usize, line_no: usize) -> Result<u32> {
    let digits = chars
        .get(start..start + 4)
        .ok_or_else(|| malformed(line_no, "expected four hex digits"))?;

    digits.iter().try_fold(0u32, |acc, c| {
        c.to_digit(16)
            .map(|d| (acc << 4) | d)
            .ok_or_else(|| malformed(line_no, "expected four hex digits"))
    })
}

fn to_char(code: u32, line_no: usize) -> Result<char> {
    char::from_u32(code).ok_or_else(|| malformed(line_no, "unpaired surrogate"))
}

fn malformed(line_no: usize, detail: &str) -> ConfigError {
    ConfigError::Bootstrap(format!(
        "Malformed \\uxxxx encoding on line {line_no}: {detail}"
    ))
}
