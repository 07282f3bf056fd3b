//! Lenient numeric parsing and en-GB style integer grouping.
use std::fmt::Write;

/// Parses text the way loosely typed log payloads are read as numbers.
///
/// Surrounding whitespace is ignored. Decimal floats (`12`, `-2.5`, `.5`,
/// `1e3`), `Infinity` with an optional sign, and unsigned `0x`/`0o`/`0b`
/// integer literals are accepted. Empty text and anything that would parse to
/// NaN are not numbers.
pub fn parse(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (sign, unsigned) = match text.as_bytes()[0] {
        b'-' => (-1.0, &text[1..]),
        b'+' => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    if unsigned.len() > 2 && unsigned.as_bytes()[0] == b'0' && text == unsigned {
        let radix = match unsigned.as_bytes()[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            let digits = &unsigned[2..];
            if !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return None;
            }
            return u64::from_str_radix(digits, radix)
                .ok()
                .map(|n| n as f64);
        }
    }

    // `f64::from_str` also accepts "inf" and "nan", which aren't numbers here.
    let decimal = unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal || !unsigned.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Formats a number rounded to an integer, with `,` between groups of three
/// digits.
///
/// Halves round away from zero. Negative values that round to zero keep their
/// sign.
///
/// ```
/// assert_eq!(concol::number::group(1234.7), "1,235");
/// assert_eq!(concol::number::group(-1234567.5), "-1,234,568");
/// assert_eq!(concol::number::group(999.0), "999");
/// ```
pub fn group(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let mut out = String::with_capacity(32);
    if value.is_sign_negative() {
        out.push('-');
    }

    if value.is_infinite() {
        out.push('∞');
        return out;
    }

    let mut digits = String::with_capacity(24);
    // `{:.0}` never switches to exponent notation for f64
    let _ = write!(digits, "{:.0}", value.abs().round());

    let len = digits.len();
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    out
}
