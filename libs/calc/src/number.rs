//! Operand parsing and number formatting
//!
//! Operands echo back in shortest round-trip form via `ryu` (`3.0`, `0.1`),
//! negative operands in parentheses. Results always show two decimals,
//! rounded half-up on the shortest decimal digits (`0.125` -> `0.13`).

use crate::error::{CalcError, Result};

/// Parse a user token into an `f64`.
///
/// A leading `-` is first treated as negation of the remainder. If the
/// remainder does not parse, the whole token is parsed as-is so that `-`
/// alone and other malformed negatives fail the same way as any other
/// garbage.
///
/// Decimal literals beyond the `f64` range overflow to an infinity. The
/// words `inf`, `infinity` and `nan` are not numbers.
pub fn parse_number(token: &str) -> Result<f64> {
    if let Some(rest) = token.strip_prefix('-') {
        if let Some(value) = parse_decimal(rest) {
            return Ok(-value);
        }
    }
    parse_decimal(token).ok_or_else(|| CalcError::parse(token))
}

fn parse_decimal(text: &str) -> Option<f64> {
    let lower = text.to_ascii_lowercase();
    if lower.contains("inf") || lower.contains("nan") {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Format an operand for the result line
#[inline]
pub fn format_operand(value: f64) -> String {
    let mut buffer = ryu::Buffer::new();
    let text = buffer.format(value);
    if value < 0.0 {
        format!("({})", text)
    } else {
        text.to_string()
    }
}

/// Format a result with exactly two fractional digits
///
/// Non-finite results print as `inf`, `-inf` or `NaN`.
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        let mut buffer = ryu::Buffer::new();
        return buffer.format(value).to_string();
    }

    let (digits, point) = shortest_digits(value.abs());

    // Scale by 100: keep the digits up to the hundredths place, look at the
    // first dropped digit.
    let keep = point + 2;
    let (mut hundredths, dropped) = if keep <= 0 {
        let dropped = if keep == 0 { digits[0] } else { b'0' };
        (Vec::new(), dropped)
    } else {
        let keep = keep as usize;
        let mut kept: Vec<u8> = digits.iter().copied().take(keep).collect();
        kept.resize(keep, b'0');
        (kept, digits.get(keep).copied().unwrap_or(b'0'))
    };

    if dropped >= b'5' {
        increment_decimal(&mut hundredths);
    }
    while hundredths.len() < 3 {
        hundredths.insert(0, b'0');
    }

    let split = hundredths.len() - 2;
    let mut out = String::with_capacity(hundredths.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(hundredths[..split].iter().map(|&b| b as char));
    out.push('.');
    out.extend(hundredths[split..].iter().map(|&b| b as char));
    out
}

/// Shortest round-trip digits of a finite, non-negative value.
///
/// Returns `(digits, point)` with the value equal to `0.<digits> * 10^point`
/// and no leading zeros in `digits` (zero is `[b'0']`).
fn shortest_digits(value: f64) -> (Vec<u8>, i32) {
    let mut buffer = ryu::Buffer::new();
    let text = buffer.format_finite(value);

    let (mantissa, exponent) = match text.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (text, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();
    let mut point = int_part.len() as i32 + exponent;
    while digits.len() > 1 && digits[0] == b'0' {
        digits.remove(0);
        point -= 1;
    }
    (digits, point)
}

/// Add one to a big-endian ASCII decimal; an empty slice counts as zero
fn increment_decimal(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("3").unwrap(), 3.0);
        assert_eq!(parse_number("4.25").unwrap(), 4.25);
        assert_eq!(parse_number(".5").unwrap(), 0.5);
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
        assert_eq!(parse_number("+7").unwrap(), 7.0);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse_number("-5").unwrap(), -5.0);
        assert_eq!(parse_number("-0.125").unwrap(), -0.125);
        // remainder "-5" is itself numeric, so the outer sign negates it
        assert_eq!(parse_number("--5").unwrap(), 5.0);
    }

    #[test]
    fn test_parse_malformed_negative_falls_through() {
        for token in ["-", "-abc", "-5x", "-.", "- 5"] {
            match parse_number(token) {
                Err(CalcError::Parse(t)) => assert_eq!(t, token),
                other => panic!("expected parse error for {:?}, got {:?}", token, other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_garbage_and_special_words() {
        for token in ["", "abc", "1,5", "q", "nan", "NaN", "inf", "-inf", "Infinity"] {
            assert!(parse_number(token).is_err(), "token {:?}", token);
        }
    }

    #[test]
    fn test_parse_overflowing_literal_is_infinite() {
        let pos = parse_number("1e400").unwrap();
        assert!(pos.is_infinite() && pos.is_sign_positive());
        let neg = parse_number("-1e400").unwrap();
        assert!(neg.is_infinite() && neg.is_sign_negative());
    }

    #[test]
    fn test_format_operand() {
        assert_eq!(format_operand(3.0), "3.0");
        assert_eq!(format_operand(0.1), "0.1");
        assert_eq!(format_operand(1234.5), "1234.5");
        assert_eq!(format_operand(-5.0), "(-5.0)");
        assert_eq!(format_operand(-0.75), "(-0.75)");
        // negative zero is not less than zero
        assert_eq!(format_operand(-0.0), "-0.0");
        // plain decimal, no exponent, for these magnitudes
        assert_eq!(format_operand(1e7), "10000000.0");
        assert_eq!(format_operand(0.0001), "0.0001");
        assert_eq!(format_operand(f64::INFINITY), "inf");
        assert_eq!(format_operand(f64::NEG_INFINITY), "(-inf)");
    }

    #[test]
    fn test_format_result() {
        let cases = [
            (7.0, "7.00"),
            (-10.0, "-10.00"),
            (0.0, "0.00"),
            (2.0 / 3.0, "0.67"),
            (1.0 / 3.0, "0.33"),
            (1e6, "1000000.00"),
            (99.999, "100.00"),
            (9.995, "10.00"),
            (1e16, "10000000000000000.00"),
            (1.2e-7, "0.00"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_result(input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_format_result_rounds_half_up() {
        let cases = [
            (0.125, "0.13"),
            (1.005, "1.01"),
            (2.675, "2.68"),
            (0.005, "0.01"),
            (0.0049, "0.00"),
            (-0.125, "-0.13"),
            (-1.005, "-1.01"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_result(input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_format_result_negative_zero_keeps_sign() {
        assert_eq!(format_result(-0.0), "-0.00");
        assert_eq!(format_result(-0.001), "-0.00");
    }

    #[test]
    fn test_format_result_non_finite() {
        assert_eq!(format_result(f64::INFINITY), "inf");
        assert_eq!(format_result(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_result(f64::NAN), "NaN");
    }
}
