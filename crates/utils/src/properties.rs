//! Java `.properties` reading and writing.
//!
//! Output follows `java.util.Properties.store`: a `#` comment line with the
//! generation date, then one escaped `key=value` line per entry. Entries are
//! sorted by key so regenerated files only differ where values changed.

use std::{collections::BTreeMap, fmt::Write as _, path::Path};

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::generate_file;

/// Same layout as `java.util.Date::toString` in UTC.
const DATE_COMMENT_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

/// Renders `properties` with a date comment taken from `now`.
#[must_use]
pub fn store_properties(properties: &BTreeMap<String, String>, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{}", now.format(DATE_COMMENT_FORMAT));
    for (key, value) in properties {
        out.push_str(&escape(key, true));
        out.push('=');
        out.push_str(&escape(value, false));
        out.push('\n');
    }
    out
}

/// Generic property generator: writes `properties` to `path`, replacing any previous content.
///
/// # Errors
/// Returns error if the file or its parent directories cannot be written.
pub fn write_properties_file(path: &Path, properties: &BTreeMap<String, String>) -> Result<()> {
    generate_file(path, store_properties(properties, Utc::now()).as_bytes())
}

/// Reads `key=value` pairs, skipping comments and blank lines.
///
/// Handles the separators `=`, `:` and whitespace, escape sequences and
/// backslash line continuations.
#[must_use]
pub fn parse_properties(content: &str) -> BTreeMap<String, String> {
    let mut properties = BTreeMap::new();
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        let mut logical = line.trim_start().to_string();
        if logical.is_empty() || logical.starts_with('#') || logical.starts_with('!') {
            continue;
        }
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        properties.insert(unescape(key), unescape(value));
    }

    properties
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        match ch {
            ' ' if index == 0 || is_key => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{000c}' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{unit:04X}");
                }
            }
        }
    }
    out
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|ch| *ch == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (index, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..index], line[index + 1..].trim_start()),
            ' ' | '\t' | '\u{000c}' => {
                let rest = line[index..].trim_start();
                let rest = rest
                    .strip_prefix(['=', ':'])
                    .map_or(rest, str::trim_start);
                return (&line[..index], rest);
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            flush_units(&mut units, &mut out);
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u16::from_str_radix(&hex, 16) {
                    Ok(unit) => units.push(unit),
                    Err(_) => {
                        flush_units(&mut units, &mut out);
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => {
                flush_units(&mut units, &mut out);
                out.push(match other {
                    't' => '\t',
                    'n' => '\n',
                    'r' => '\r',
                    'f' => '\u{000c}',
                    c => c,
                });
            }
            None => flush_units(&mut units, &mut out),
        }
    }
    flush_units(&mut units, &mut out);
    out
}

fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    if !units.is_empty() {
        out.extend(char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or('\u{fffd}')));
    }
}
