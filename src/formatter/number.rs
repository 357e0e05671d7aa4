//! Numeric formatting: standard specifiers and custom picture formats.
//!
//! The engine works over the rounded decimal string of the value. A
//! grouped writer inserts the thousands separator every three digits
//! counting down from the integral digit count; both the standard-spec
//! path and the picture path share it.

use crate::culture::Culture;

/// Formats a number using a standard specifier or custom picture string.
///
/// `spec` of `None` or `""` applies default formatting: no padding, no
/// grouping, up to 10 decimals. Non-finite values bypass culture
/// formatting entirely and use the native representation.
pub fn format_number(value: f64, spec: Option<&str>, culture: &Culture) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let spec = spec.unwrap_or("");
    if spec.is_empty() {
        return basic_format(value, 0, 0, 10, culture.radix_point, None);
    }

    let mut picture = spec;
    let mut radix = culture.radix_point;
    let mut thousands = culture.thousands_separator;

    if let Some((letter, precision)) = parse_standard_spec(spec) {
        match letter.to_ascii_uppercase() {
            // Integer, zero-padded to the precision. Non-integral values
            // are rounded rather than rejected.
            'D' => return basic_format(value, precision.unwrap_or(1), 0, 0, radix, None),
            'F' => {
                let p = precision.unwrap_or(2);
                return basic_format(value, 1, p, p, radix, None);
            }
            'N' => {
                let p = precision.unwrap_or(2);
                return basic_format(value, 1, p, p, radix, Some(thousands));
            }
            'G' | 'E' => return exponential(value, letter, precision, radix),
            'P' => {
                let p = precision.unwrap_or(2);
                let fixed = basic_format(value * 100.0, 1, p, p, radix, Some(thousands));
                return format!("{fixed} %");
            }
            'X' => return hexadecimal(value, letter, precision),
            // Currency substitutes the culture's picture format and
            // currency separators, then runs the picture interpreter.
            // Precision is ignored.
            'C' => {
                picture = &culture.currency_format;
                radix = culture.currency_radix_point;
                thousands = culture.currency_thousands_separator;
            }
            // Round-trippable: native shortest representation.
            'R' => return value.to_string(),
            // Unrecognized letters fall through to the picture
            // interpreter, which renders them as literals.
            _ => {}
        }
    }

    picture_format(value, picture, radix, thousands)
}

/// Splits a spec into a single letter and optional precision (clamped to
/// 15). Returns `None` for anything but `letter digits*`.
fn parse_standard_spec(spec: &str) -> Option<(char, Option<i32>)> {
    let mut chars = spec.chars();
    let letter = chars.next()?;
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let rest = chars.as_str();
    if rest.is_empty() {
        return Some((letter, None));
    }
    if !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let precision = rest.parse::<i32>().map_or(15, |p| p.min(15));
    Some((letter, Some(precision)))
}

/// Rounds `|value|` to at most `max_decimals` decimals and renders it
/// with the shortest-round-trip display (no trailing zeros, never
/// exponent notation).
fn abs_round(value: f64, max_decimals: i32) -> String {
    let factor = 10f64.powi(max_decimals.max(0));
    ((value.abs() * factor).round() / factor).to_string()
}

/// String builder that inserts the thousands separator every third digit,
/// counting down from the number of integral digits left to write.
struct GroupedWriter {
    out: String,
    /// Integral digits (or padded positions) left to write; a separator
    /// follows each digit that begins a new group of three.
    group: i32,
    sep: Option<char>,
}

impl GroupedWriter {
    fn new(sep: Option<char>) -> Self {
        GroupedWriter {
            out: String::new(),
            group: 0,
            sep,
        }
    }

    fn push(&mut self, c: char) {
        self.out.push(c);
        if self.group > 1 {
            let begins_group = self.group % 3 == 1;
            self.group -= 1;
            if begins_group {
                if let Some(sep) = self.sep {
                    self.out.push(sep);
                }
            }
        }
    }

    fn push_str(&mut self, s: &str) {
        for c in s.chars() {
            self.push(c);
        }
    }
}

/// Core fixed-point renderer shared by the standard specifiers.
///
/// Pads the integral part with leading zeros up to `min_integral`, the
/// decimal part with trailing zeros up to `min_decimals`, and rounds to
/// `max_decimals`. Grouping applies only when a separator is supplied.
pub(crate) fn basic_format(
    value: f64,
    min_integral: i32,
    min_decimals: i32,
    max_decimals: i32,
    radix: char,
    thousands: Option<char>,
) -> String {
    let mut writer = GroupedWriter::new(thousands);
    if value < 0.0 {
        writer.out.push('-');
    }

    let digits = abs_round(value, max_decimals);
    let integral_digits = digits.find('.').unwrap_or(digits.len());
    let decimals = digits.len() - integral_digits;
    let decimals = decimals.saturating_sub(1); // account for the point itself

    writer.group = integral_digits as i32;

    let mut pad = min_integral - integral_digits as i32;
    while pad > 0 {
        writer.push('0');
        pad -= 1;
    }

    writer.push_str(&digits[..integral_digits]);

    if min_decimals > 0 || decimals > 0 {
        writer.out.push(radix);

        let mut pad = min_decimals - decimals as i32;
        if decimals > 0 {
            writer.push_str(&digits[integral_digits + 1..]);
        }
        while pad > 0 {
            writer.push('0');
            pad -= 1;
        }
    }

    writer.out
}

/// `G`/`E` handling: normalize into coefficient and exponent, choose
/// plain or scientific form, and render both halves through the basic
/// formatter.
fn exponential(value: f64, letter: char, precision: Option<i32>, radix: char) -> String {
    let general = letter.eq_ignore_ascii_case(&'G');

    let mut exponent = 0i32;
    let mut coefficient = value.abs();
    // Zero has no normal form; leave it as coefficient 0, exponent 0.
    if coefficient != 0.0 {
        while coefficient >= 10.0 {
            coefficient /= 10.0;
            exponent += 1;
        }
        while coefficient < 1.0 {
            coefficient *= 10.0;
            exponent -= 1;
        }
    }

    let exponent_letter;
    let exponent_digits;
    let min_decimals;
    let max_decimals;

    if general {
        // G0 behaves as G without precision.
        let precision = precision.filter(|&p| p != 0);

        // Close-to-unit exponents render in plain fixed-point form with
        // the precision interpreted as total significant digits.
        if exponent > -5 && precision.map_or(true, |p| exponent < p) {
            let to_decimals = |p: i32| p - if exponent > 0 { exponent + 1 } else { 1 };
            return basic_format(
                value,
                1,
                precision.map_or(0, to_decimals),
                precision.map_or(10, to_decimals),
                radix,
                None,
            );
        }

        exponent_letter = if letter == 'G' { 'E' } else { 'e' };
        exponent_digits = 2;
        min_decimals = precision.unwrap_or(1) - 1;
        max_decimals = precision.unwrap_or(11) - 1;
    } else {
        exponent_letter = letter;
        exponent_digits = 3;
        min_decimals = precision.unwrap_or(6);
        max_decimals = min_decimals;
    }

    let coefficient = if value < 0.0 { -coefficient } else { coefficient };

    let mut out = basic_format(coefficient, 1, min_decimals, max_decimals, radix, None);
    out.push(exponent_letter);
    // Negative exponents pick up the minus from the number itself.
    if exponent >= 0 {
        out.push('+');
    }
    out.push_str(&basic_format(
        f64::from(exponent),
        exponent_digits,
        0,
        0,
        radix,
        None,
    ));
    out
}

/// `X`/`x`: round to integer, render hex digits cased per the spec
/// letter, zero-padded to the precision.
fn hexadecimal(value: f64, letter: char, precision: Option<i32>) -> String {
    let n = value.round() as i64;
    let digits = if letter == 'X' {
        format!("{:X}", n.abs())
    } else {
        format!("{:x}", n.abs())
    };
    let width = precision.unwrap_or(0).max(0) as usize;
    let sign = if n < 0 { "-" } else { "" };
    format!("{sign}{digits:0>width$}")
}

/// Custom picture entry point: applies the `,.` and `%` scaling rules,
/// selects the `positive;negative;zero` section, and decides grouping
/// before handing off to the section renderer.
fn picture_format(mut value: f64, picture: &str, radix: char, thousands: char) -> String {
    // Scale markers are detected on the whole picture, sections included.
    if picture.contains(",.") {
        value /= 1000.0;
    }
    if picture.contains('%') {
        value *= 100.0;
    }

    let sections: Vec<&str> = picture.split(';').collect();
    let section = if value < 0.0 && sections.len() > 1 {
        // The negative section renders the magnitude; the sign, if any,
        // comes from the section's own literals.
        value = -value;
        sections[1]
    } else if value == 0.0 && sections.len() > 2 {
        sections[2]
    } else {
        sections[0]
    };

    let grouping = grouping_enabled(section).then_some(thousands);
    render_picture(value, section, radix, grouping)
}

/// Grouping is enabled iff a digit placeholder, comma, digit placeholder
/// window occurs before the first decimal point of the section. Quoted
/// literals are deliberately not excluded from this scan; the rule is
/// preserved exactly as specified.
fn grouping_enabled(section: &str) -> bool {
    let chars: Vec<char> = section.chars().collect();
    for i in 0..chars.len() {
        if chars[i] == '.' {
            return false;
        }
        if matches!(chars[i], '0' | '#')
            && chars.get(i + 1) == Some(&',')
            && matches!(chars.get(i + 2), Some(&('0' | '#')))
        {
            return true;
        }
    }
    false
}

/// Renders one picture section against a value.
///
/// The first pass counts digit placeholders and locates the forced (`0`)
/// positions; the second walks the picture with a cursor into the rounded
/// decimal string, emitting digits, padding, literals, and the radix
/// point in picture order.
fn render_picture(value: f64, picture: &str, radix: char, thousands: Option<char>) -> String {
    let mut digits = 0i32;
    let mut first_forced_digit = -1i32;
    let mut decimals = 0i32;
    let mut forced_decimals = -1i32;
    let mut at_decimals = false;
    let mut in_literal = false;

    for c in picture.chars() {
        if c == '\'' {
            in_literal = !in_literal;
        } else if !in_literal {
            if c == '0' || c == '#' {
                if at_decimals {
                    decimals += 1;
                }
                if c == '0' {
                    if at_decimals {
                        forced_decimals = decimals;
                    } else if first_forced_digit < 0 {
                        first_forced_digit = digits;
                    }
                }
                if !at_decimals {
                    digits += 1;
                }
            }
            at_decimals = at_decimals || c == '.';
        }
    }

    // Forced integral positions run from the first `0` placeholder to the
    // end of the integral placeholders; with none, one digit is forced.
    let forced_digits = if first_forced_digit < 0 {
        1
    } else {
        digits - first_forced_digit
    };

    let mut writer = GroupedWriter::new(thousands);
    if value < 0.0 {
        writer.out.push('-');
    }

    let rounded = abs_round(value, decimals);
    let number: Vec<char> = rounded.chars().collect();
    let len = number.len() as i32;
    let integral_digits = number
        .iter()
        .position(|&c| c == '.')
        .unwrap_or(number.len()) as i32;

    // Cursor into the number string, aligned so that the k-th integral
    // placeholder maps to position k + (integral_digits - digits).
    // Negative positions are the forced-zero padding region.
    let mut i = integral_digits - digits;
    writer.group = integral_digits.max(forced_digits);

    let mut in_literal = false;
    let mut untouched = true;

    for c in picture.chars() {
        if c == '\'' {
            in_literal = !in_literal;
        } else if in_literal {
            writer.out.push(c);
        } else if c == '0' || c == '#' {
            if i < integral_digits {
                if i >= 0 {
                    // First digit written flushes any leading digits the
                    // placeholders did not cover.
                    if untouched {
                        for k in 0..i {
                            writer.push(number[k as usize]);
                        }
                    }
                    writer.push(number[i as usize]);
                } else if i >= integral_digits - forced_digits {
                    writer.push('0');
                }
                untouched = false;
            } else {
                let forced_remaining = forced_decimals;
                forced_decimals -= 1;
                if forced_remaining > 0 || i < len {
                    writer.push(if i >= len { '0' } else { number[i as usize] });
                }
            }
            i += 1;
        } else if c == '.' {
            i += 1;
            if len > i || forced_decimals > 0 {
                writer.out.push(radix);
            }
        } else if c != ',' {
            writer.out.push(c);
        }
    }

    writer.out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_round() {
        assert_eq!(abs_round(1234.5, 2), "1234.5");
        assert_eq!(abs_round(-0.145, 2), "0.14");
        assert_eq!(abs_round(2.5, 0), "3");
        assert_eq!(abs_round(42.0, 10), "42");
    }

    #[test]
    fn test_basic_format_grouping() {
        assert_eq!(basic_format(1234567.0, 1, 0, 0, '.', Some(',')), "1,234,567");
        assert_eq!(basic_format(1234.5, 1, 2, 2, '.', Some(',')), "1,234.50");
        assert_eq!(basic_format(-1234.5, 1, 2, 2, '.', None), "-1234.50");
    }

    #[test]
    fn test_basic_format_padding() {
        assert_eq!(basic_format(42.0, 5, 0, 0, '.', None), "00042");
        assert_eq!(basic_format(0.5, 0, 0, 10, '.', None), "0.5");
        assert_eq!(basic_format(3.0, 1, 3, 3, '.', None), "3.000");
    }

    #[test]
    fn test_parse_standard_spec() {
        assert_eq!(parse_standard_spec("N2"), Some(('N', Some(2))));
        assert_eq!(parse_standard_spec("x"), Some(('x', None)));
        assert_eq!(parse_standard_spec("D99"), Some(('D', Some(15))));
        assert_eq!(parse_standard_spec("#,##0"), None);
        assert_eq!(parse_standard_spec("N2x"), None);
    }

    #[test]
    fn test_grouping_enabled_window() {
        assert!(grouping_enabled("#,##0.00"));
        assert!(grouping_enabled("£#,0.00"));
        assert!(!grouping_enabled("0.0,0"));
        assert!(!grouping_enabled("#.#"));
        assert!(!grouping_enabled("0"));
    }
}
