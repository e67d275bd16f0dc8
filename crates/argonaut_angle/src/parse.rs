//! Parsing of user-typed angles.
//!
//! Three notations are recognized, tried in this order:
//!
//! 1. a plain decimal number of degrees (`45.5`, `-12`, `1e1`);
//! 2. hours, minutes, seconds of time (`10h5m3.45s`, `10:05:03.45`, `10 5 3.45`),
//!    only when the caller allows hour angles;
//! 3. degrees, arcminutes, arcseconds (`15d43m15.8s`, `-15°43'15.8"`, `15:43:15.8`).
//!
//! The sexagesimal notations share one tokenizer. Each numeric component
//! is closed by a unit designator, a colon, whitespace or the end of the
//! input. A designator puts the component into its own slot; a colon or
//! whitespace puts it into the next free slot. A colon with no number in
//! front of it leaves that slot empty (zero). Slots must be filled in
//! order and at least one numeric component is required.

use std::fmt::{Display, Formatter};

use crate::convert::{dms_to_degrees, hms_to_degrees};

/// Notation an [`Angle`] was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleFormat {
    Degrees,
    HourMinuteSecond,
    DegreeMinuteSecond,
}

impl AngleFormat {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Degrees => "degrees",
            Self::HourMinuteSecond => "hour-minute-second",
            Self::DegreeMinuteSecond => "degree-minute-second",
        }
    }
}

/// A successfully parsed angle. `degrees` is always finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    pub degrees: f64,
    pub format: AngleFormat,
}

/// Outcome of [`parse_angle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedAngle {
    Valid(Angle),
    Invalid,
}

impl ParsedAngle {
    /// Value in degrees, `None` when invalid.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Valid(a) => Some(a.degrees),
            Self::Invalid => None,
        }
    }

    pub fn angle(&self) -> Option<Angle> {
        match self {
            Self::Valid(a) => Some(*a),
            Self::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Format tag: `degrees`, `hour-minute-second`, `degree-minute-second` or `invalid`.
    pub fn format_name(&self) -> &'static str {
        match self {
            Self::Valid(a) => a.format.name(),
            Self::Invalid => "invalid",
        }
    }
}

impl Display for ParsedAngle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid(a) => write!(f, "{} ({})", a.degrees, a.format.name()),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

/// Parse a user-typed angle.
///
/// `allow_hour_angle` enables the hour-minute-second notation and should be
/// set for right-ascension-like fields. The function never fails loudly;
/// anything unrecognized comes back as [`ParsedAngle::Invalid`].
pub fn parse_angle(text: &str, allow_hour_angle: bool) -> ParsedAngle {
    let text = text.trim();
    if text.is_empty() {
        return ParsedAngle::Invalid;
    }

    if let Ok(v) = text.parse::<f64>() {
        return finite(v, AngleFormat::Degrees);
    }

    if allow_hour_angle {
        if let Some((negative, [h, m, s])) = sexagesimal(text, Notation::Hours) {
            let deg = hms_to_degrees(h, m, s);
            return finite(if negative { -deg } else { deg }, AngleFormat::HourMinuteSecond);
        }
    }

    if let Some((negative, [d, m, s])) = sexagesimal(text, Notation::Degrees) {
        let deg = dms_to_degrees(d, m, s);
        return finite(if negative { -deg } else { deg }, AngleFormat::DegreeMinuteSecond);
    }

    ParsedAngle::Invalid
}

fn finite(degrees: f64, format: AngleFormat) -> ParsedAngle {
    if degrees.is_finite() {
        ParsedAngle::Valid(Angle { degrees, format })
    } else {
        ParsedAngle::Invalid
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notation {
    Hours,
    Degrees,
}

/// How a numeric component was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    /// Explicit unit: slot index 0, 1 or 2.
    Unit(usize),
    /// Colon, whitespace or end of input.
    Positional,
}

type Components = [Option<f64>; 3];

/// Split a sexagesimal string into its sign and up to three components.
fn sexagesimal(text: &str, notation: Notation) -> Option<(bool, Components)> {
    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    let negative = chars.first() == Some(&'-');
    if negative {
        pos += 1;
    }

    let mut fields: Components = [None; 3];
    let mut next_slot = 0;
    let mut seen_any = false;

    loop {
        pos = skip_whitespace(&chars, pos);
        if pos >= chars.len() {
            break;
        }

        // An empty positional field ("10::5") leaves its slot at zero.
        if chars[pos] == ':' {
            next_slot += 1;
            if next_slot > 2 {
                return None;
            }
            pos += 1;
            continue;
        }

        let (value, after_number) = read_number(&chars, pos)?;
        pos = after_number;

        let (terminator, after_term) = read_terminator(&chars, pos, notation)?;
        pos = after_term;

        let slot = match terminator {
            Terminator::Unit(slot) => slot,
            Terminator::Positional => next_slot,
        };
        if slot < next_slot || slot > 2 {
            return None;
        }
        fields[slot] = Some(value);
        next_slot = slot + 1;
        seen_any = true;
    }

    seen_any.then_some((negative, fields))
}

fn skip_whitespace(chars: &[char], mut pos: usize) -> usize {
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }
    pos
}

/// Read an unsigned decimal: digits with at most one point, at least one digit.
fn read_number(chars: &[char], start: usize) -> Option<(f64, usize)> {
    let mut pos = start;
    let mut digits = 0;
    let mut seen_point = false;
    while pos < chars.len() {
        match chars[pos] {
            c if c.is_ascii_digit() => digits += 1,
            '.' if !seen_point => seen_point = true,
            _ => break,
        }
        pos += 1;
    }
    if digits == 0 {
        return None;
    }
    let literal: String = chars[start..pos].iter().collect();
    literal.parse::<f64>().ok().map(|v| (v, pos))
}

fn read_terminator(chars: &[char], pos: usize, notation: Notation) -> Option<(Terminator, usize)> {
    let Some(&c) = chars.get(pos) else {
        return Some((Terminator::Positional, pos));
    };

    if c == ':' {
        return Some((Terminator::Positional, pos + 1));
    }

    if let Some(slot) = unit_slot(c, notation) {
        // '' is an alternative spelling of " for arcseconds.
        if notation == Notation::Degrees && c == '\'' && chars.get(pos + 1) == Some(&'\'') {
            return Some((Terminator::Unit(2), pos + 2));
        }
        return Some((Terminator::Unit(slot), pos + 1));
    }

    if c.is_whitespace() {
        let after = skip_whitespace(chars, pos);
        // "10 h 5 m" style: a designator may follow the gap.
        if let Some(&next) = chars.get(after) {
            if let Some(slot) = unit_slot(next, notation) {
                return Some((Terminator::Unit(slot), after + 1));
            }
            // "10 : 5" is one separator, not an empty field.
            if next == ':' {
                return Some((Terminator::Positional, after + 1));
            }
        }
        return Some((Terminator::Positional, after));
    }

    None
}

fn unit_slot(c: char, notation: Notation) -> Option<usize> {
    match notation {
        Notation::Hours => match c.to_ascii_lowercase() {
            'h' => Some(0),
            'm' => Some(1),
            's' => Some(2),
            _ => None,
        },
        Notation::Degrees => match c {
            'd' | 'D' | '°' => Some(0),
            'm' | 'M' | '\'' | '′' => Some(1),
            's' | 'S' | '"' | '″' => Some(2),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn value(p: ParsedAngle) -> f64 {
        p.value().unwrap_or(f64::NAN)
    }

    #[test]
    fn plain_degrees() {
        let p = parse_angle("45.5", false);
        assert_eq!(p.format_name(), "degrees");
        assert!((value(p) - 45.5).abs() < EPS);
    }

    #[test]
    fn plain_degrees_wins_over_hour_angle() {
        let p = parse_angle("  -12.25 ", true);
        assert_eq!(p.angle().map(|a| a.format), Some(AngleFormat::Degrees));
        assert!((value(p) + 12.25).abs() < EPS);
    }

    #[test]
    fn empty_is_invalid() {
        assert_eq!(parse_angle("", true), ParsedAngle::Invalid);
        assert_eq!(parse_angle("   ", false), ParsedAngle::Invalid);
        assert_eq!(parse_angle("", true).value(), None);
    }

    #[test]
    fn hms_with_designators() {
        let p = parse_angle("10h5m3.45s", true);
        assert_eq!(p.format_name(), "hour-minute-second");
        assert!((value(p) - 151.264375).abs() < EPS);
    }

    #[test]
    fn hms_with_colons_and_spaces() {
        for text in ["10:05:03.45", "10 05 03.45", "10h 05m 03.45s", "10 h 5 m 3.45 s"] {
            let p = parse_angle(text, true);
            assert_eq!(p.format_name(), "hour-minute-second", "{text}");
            assert!((value(p) - 151.264375).abs() < EPS, "{text}");
        }
    }

    #[test]
    fn hms_negative() {
        let p = parse_angle("-1h30m", true);
        assert!((value(p) + 22.5).abs() < EPS);
    }

    #[test]
    fn hms_designator_skips_slot() {
        // 10 hours and 30 seconds of time
        let p = parse_angle("10h30s", true);
        assert!((value(p) - (150.0 + 30.0 / 240.0)).abs() < EPS);
    }

    #[test]
    fn hms_not_tried_without_flag() {
        // Colon form falls through to degree-minute-second.
        let p = parse_angle("10:30", false);
        assert_eq!(p.format_name(), "degree-minute-second");
        assert!((value(p) - 10.5).abs() < EPS);
        // 'h' is not a degree designator.
        assert_eq!(parse_angle("10h30m", false), ParsedAngle::Invalid);
    }

    #[test]
    fn dms_with_designators() {
        let p = parse_angle("15d43m15.8s", false);
        assert_eq!(p.format_name(), "degree-minute-second");
        assert!((value(p) - 15.721_055_555_555_555).abs() < EPS);
    }

    #[test]
    fn dms_with_symbols() {
        for text in ["15°43'15.8\"", "15d43'15.8''", "15 43 15.8", "15:43:15.8"] {
            let p = parse_angle(text, false);
            assert_eq!(p.format_name(), "degree-minute-second", "{text}");
            assert!((value(p) - 15.721_055_555_555_555).abs() < EPS, "{text}");
        }
    }

    #[test]
    fn dms_negative_applies_to_whole_angle() {
        let p = parse_angle("-28d56m10s", false);
        let expected = -(28.0 + 56.0 / 60.0 + 10.0 / 3600.0);
        assert!((value(p) - expected).abs() < EPS);
    }

    #[test]
    fn hour_angle_field_falls_back_to_dms() {
        let p = parse_angle("15d43m", true);
        assert_eq!(p.format_name(), "degree-minute-second");
        assert!((value(p) - (15.0 + 43.0 / 60.0)).abs() < EPS);
    }

    #[test]
    fn trailing_separator_is_accepted() {
        let p = parse_angle("12h", true);
        assert!((value(p) - 180.0).abs() < EPS);
        let p = parse_angle("12:", false);
        assert!((value(p) - 12.0).abs() < EPS);
    }

    #[test]
    fn componentless_input_is_invalid() {
        for text in ["-", "h m s", "::", "d", "''", "- h"] {
            assert_eq!(parse_angle(text, true), ParsedAngle::Invalid, "{text:?}");
        }
    }

    #[test]
    fn empty_colon_field_counts_as_zero() {
        let p = parse_angle("10::5", true);
        assert_eq!(p.format_name(), "hour-minute-second");
        assert!((value(p) - (150.0 + 5.0 / 240.0)).abs() < EPS);

        let p = parse_angle("15::30", false);
        assert_eq!(p.format_name(), "degree-minute-second");
        assert!((value(p) - (15.0 + 30.0 / 3600.0)).abs() < EPS);

        let p = parse_angle(":30", false);
        assert!((value(p) - 0.5).abs() < EPS);
    }

    #[test]
    fn spaced_colon_is_one_separator() {
        let p = parse_angle("10 : 30", false);
        assert!((value(p) - 10.5).abs() < EPS);
    }

    #[test]
    fn too_many_empty_fields_are_invalid() {
        for text in [":::", "10:::", "10::5:1"] {
            assert_eq!(parse_angle(text, true), ParsedAngle::Invalid, "{text:?}");
        }
    }

    #[test]
    fn malformed_input_is_invalid() {
        for text in ["abc", "10x", "10h5h", "5m10h", "1.2.3", "10h5m3s4", "--5", "1 2 3 4"] {
            assert_eq!(parse_angle(text, true), ParsedAngle::Invalid, "{text:?}");
        }
    }

    #[test]
    fn non_finite_numbers_are_invalid() {
        assert_eq!(parse_angle("inf", false), ParsedAngle::Invalid);
        assert_eq!(parse_angle("NaN", true), ParsedAngle::Invalid);
    }

    #[test]
    fn display_includes_format() {
        assert_eq!(parse_angle("45.5", false).to_string(), "45.5 (degrees)");
        assert_eq!(parse_angle("?", false).to_string(), "invalid");
    }
}
