//! Parsers for raw CSnap polar export text.
//!
//! Exports arrive as a flat stream of numeric tokens that alternate
//! between radius and angle, starting with a radius. Two delimiter
//! conventions exist in the wild:
//! - Underscore pairs: `radius_angle` pairs separated by commas
//! - Comma streams: every token separated by commas and line breaks
//!
//! Parsing is deliberately permissive. The exports come from student
//! drawing projects and frequently carry stray whitespace or garbage
//! tokens; an unparseable token becomes `0.0` rather than an error, and
//! a trailing radius with no matching angle is dropped.

use serde::{Deserialize, Serialize};

use super::points::PointSet;

/// Delimiter convention of a raw export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenFormat {
    /// `_` separates the radius and angle of one point, `,` separates
    /// points. Both characters end the current token.
    UnderscorePairs,
    /// `,` separates all tokens; line breaks also end tokens. Empty
    /// tokens are skipped.
    CommaStream,
}

/// Parses raw export text into a point set.
///
/// Tokens are assigned alternately to radii and angles, starting with a
/// radius. Each token is trimmed and parsed as `f32`; unparseable
/// tokens become `0.0`. An odd token count leaves a radius with no
/// matching angle, and that trailing value is dropped.
///
/// Parsing never fails: empty input yields an empty set.
pub fn parse_points(text: &str, format: TokenFormat) -> PointSet {
    match format {
        TokenFormat::UnderscorePairs => parse_underscore_pairs(text),
        TokenFormat::CommaStream => parse_comma_stream(text),
    }
}

/// Scanner for the `radius_angle,radius_angle` convention.
///
/// `_` and `,` both terminate the current token and are never part of
/// one. Any other character accumulates, so a token may carry interior
/// whitespace or line breaks; `parse_token` trims them away. A token
/// still open at end of input is parsed like any other.
fn parse_underscore_pairs(text: &str) -> PointSet {
    let mut values = Vec::new();
    let mut token = String::new();

    for c in text.chars() {
        if c == '_' || c == ',' {
            if !token.is_empty() {
                values.push(parse_token(&token));
                token.clear();
            }
        } else {
            token.push(c);
        }
    }
    if !token.is_empty() {
        values.push(parse_token(&token));
    }

    pair_up(&values)
}

/// Scanner for the comma stream convention.
///
/// Line breaks and commas both end tokens. Empty tokens (consecutive
/// delimiters, blank lines, delimiters at line edges) are skipped
/// entirely rather than parsed as zero; alternation continues across
/// line breaks.
fn parse_comma_stream(text: &str) -> PointSet {
    let mut values = Vec::new();

    for line in text.lines() {
        for token in line.split(',') {
            if token.trim().is_empty() {
                continue;
            }
            values.push(parse_token(token));
        }
    }

    pair_up(&values)
}

/// Parses one raw token, treating unparseable content as 0.0.
#[inline]
fn parse_token(token: &str) -> f32 {
    token.trim().parse().unwrap_or(0.0)
}

/// Pairs up a flat value stream: radius first, then angle, repeating.
/// The remainder of an odd-length stream is dropped.
fn pair_up(values: &[f32]) -> PointSet {
    let mut radii = Vec::with_capacity(values.len() / 2);
    let mut angles = Vec::with_capacity(values.len() / 2);
    for pair in values.chunks_exact(2) {
        radii.push(pair[0]);
        angles.push(pair[1]);
    }
    PointSet::from_parts(radii, angles)
}
