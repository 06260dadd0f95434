//! Header and separator line coloring.
//!
//! A header like `@M00123:14:000-ABCDE:1:1101:15589:1331 1:N:0:1` is split on
//! the first space, then on `:`. Fields take palette colors by position, and
//! the description continues the cycle where the main part stopped.

use crate::palette::{dim, header_colour};
use std::fmt::Write;

const FIELD_DELIMITER: char = ':';

/// Paint `part`'s `:`-separated fields, starting the palette at `offset`.
/// Returns the number of fields painted.
fn paint_fields(out: &mut String, part: &str, offset: usize) -> usize {
    let mut count = 0;
    for (i, field) in part.split(FIELD_DELIMITER).enumerate() {
        if i > 0 {
            out.push(FIELD_DELIMITER);
        }
        // writing into a String cannot fail
        let _ = write!(out, "{}", header_colour(offset + i).paint(field));
        count += 1;
    }
    count
}

/// Colorize header content that has no leading marker.
pub fn colorize_fields(content: &str) -> String {
    let mut out = String::with_capacity(content.len() * 4);
    let (main, description) = match content.split_once(' ') {
        Some((main, desc)) => (main, Some(desc)),
        None => (content, None),
    };
    let main_fields = paint_fields(&mut out, main, 0);
    if let Some(desc) = description {
        out.push(' ');
        paint_fields(&mut out, desc, main_fields);
    }
    out
}

/// Colorize a header line. One leading `marker` is stripped if present and the
/// marker is always rendered dim in front of the fields.
pub fn colorize_header(line: &str, marker: char) -> String {
    if line.is_empty() {
        return String::new();
    }
    let content = line.strip_prefix(marker).unwrap_or(line);
    let mut out = dim().paint(marker.to_string()).to_string();
    out.push_str(&colorize_fields(content));
    out
}

/// Colorize a `+` separator line: a dim `+`, then any repeated header content.
pub fn colorize_separator(line: &str) -> String {
    let mut out = dim().paint("+").to_string();
    let mut chars = line.chars();
    chars.next();
    let rest = chars.as_str();
    if !rest.is_empty() {
        out.push_str(&colorize_fields(rest));
    }
    out
}

/// Remove `ESC[...m` sequences.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
