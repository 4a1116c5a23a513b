//! Structured style values and raw-text translation.
//!
//! [CSS Values and Units Level 4 § 2](https://www.w3.org/TR/css-values-4/#value-defs)
//!
//! A native style string like `"1px solid red"` is a flat serialization of a
//! structured value: an ordered sequence of scalars, possibly grouped into
//! comma-separated sub-sequences (`"1px 2px, 3px 4px"`). The translator
//! converts the raw string into that structure; display flattening is the
//! inverse. Round-tripping is lossless for values whose scalars carry no
//! redundant formatting.

use serde::Serialize;

/// A structured style value: a scalar or an ordered sequence of values.
///
/// [CSS Values and Units Level 4 § 2.2](https://www.w3.org/TR/css-values-4/#component-combinators)
///
/// Handlers receive and produce this type directly, so a handler declared for
/// a shorthand sees the whole sequence and a handler for a single-valued
/// property sees a scalar. The tagged representation replaces runtime shape
/// inspection of the incoming value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StyleValue {
    /// A bare numeric scalar (`0.5`, `3`). Dimensions like `1px` are text.
    Number(f64),
    /// A textual scalar: keyword, dimension, function notation, etc.
    Text(String),
    /// An ordered sequence of values; nesting one level expresses
    /// comma-separated groups of space-separated scalars.
    Sequence(Vec<StyleValue>),
}

impl StyleValue {
    /// Whether this value is a sequence (as opposed to a scalar).
    pub fn is_sequence(&self) -> bool {
        matches!(self, StyleValue::Sequence(_))
    }

    /// Flatten this value into a single native display string.
    ///
    /// Scalars display as themselves. For a sequence, each nested sequence is
    /// first joined with single spaces; the top level then joins with
    /// `", "` if any element was itself a sequence, otherwise with a single
    /// space. This mirrors how shorthand serializations group their
    /// comma-separated layers.
    pub fn to_display_string(&self) -> String {
        match self {
            StyleValue::Number(number) => number.to_string(),
            StyleValue::Text(text) => text.clone(),
            StyleValue::Sequence(items) => {
                let mut nested = false;
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        StyleValue::Sequence(inner) => {
                            nested = true;
                            inner
                                .iter()
                                .map(StyleValue::to_display_string)
                                .collect::<Vec<_>>()
                                .join(" ")
                        }
                        scalar => scalar.to_display_string(),
                    })
                    .collect();
                parts.join(if nested { ", " } else { " " })
            }
        }
    }
}

/// Translate a raw style string into its structured value.
///
/// Top-level commas delimit groups and whitespace delimits scalars within a
/// group; both splits ignore separators inside function notation, so
/// `rgb(0, 0, 0)` stays one scalar. A single bare token translates to the
/// scalar itself rather than a one-element sequence.
///
/// This is a pure function with no side effects; paired with
/// [`StyleValue::to_display_string`] it round-trips losslessly for values
/// the handler registry owns.
pub fn translate(raw: &str) -> StyleValue {
    let groups = split_top_level(raw, ',');
    if groups.len() > 1 {
        StyleValue::Sequence(groups.iter().map(|group| translate_group(group)).collect())
    } else {
        translate_group(raw)
    }
}

/// Translate one comma-delimited group: whitespace-separated scalars.
fn translate_group(group: &str) -> StyleValue {
    let tokens = split_top_level(group, ' ');
    match tokens.as_slice() {
        [] => StyleValue::Text(String::new()),
        [token] => scalar(token),
        many => StyleValue::Sequence(many.iter().map(|token| scalar(token)).collect()),
    }
}

/// A single scalar: numeric tokens become numbers, everything else text.
fn scalar(token: &str) -> StyleValue {
    token
        .parse::<f64>()
        .map_or_else(|_| StyleValue::Text(token.to_string()), StyleValue::Number)
}

/// Split `input` on `separator` at parenthesis depth zero, trimming the
/// pieces and dropping empty ones. A space separator also splits on any
/// other ASCII whitespace.
fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in input.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && (ch == separator || (separator == ' ' && ch.is_ascii_whitespace())) => {
                let piece = input[start..index].trim();
                if !piece.is_empty() {
                    pieces.push(piece);
                }
                start = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    let tail = input[start..].trim();
    if !tail.is_empty() {
        pieces.push(tail);
    }
    pieces
}

/// Parse the leading numeric prefix of a style string, if any.
///
/// Mirrors how host engines coerce dimension strings: `"12.5px"` parses as
/// `12.5`, `"auto"` as nothing. Leading whitespace and a sign are accepted.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&byte) = bytes.get(end) {
        if byte.is_ascii_digit() {
            seen_digit = true;
        } else if byte == b'.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    trimmed[..end].parse::<f64>().ok()
}
