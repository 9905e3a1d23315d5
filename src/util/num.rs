/// Parses a floating-point number using the invariant (`.` decimal point)
/// format.
///
/// Accepted, around an unsigned decimal such as `12`, `1.5`, `.5` or `2e-3`:
/// - whitespace on either side,
/// - a leading or trailing `+` or `-`,
/// - enclosing parentheses, which negate,
/// - `,` group separators after the first integer digit.
///
/// `NaN` and `Infinity`, optionally signed, are matched without regard to
/// case. Abbreviations such as `inf` are not numbers.
///
/// ## Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the text is empty or not a number.
///
/// ## Example
/// ```
/// use seals::util::num::parse_invariant;
///
/// assert_eq!(parse_invariant(" 2.5 "), Some(2.5));
/// assert_eq!(parse_invariant("-1e3"), Some(-1000.0));
/// assert_eq!(parse_invariant(".5"), Some(0.5));
/// assert_eq!(parse_invariant("1,000"), Some(1000.0));
/// assert_eq!(parse_invariant("(5)"), Some(-5.0));
/// assert_eq!(parse_invariant("7-"), Some(-7.0));
/// assert_eq!(parse_invariant("1.2.3"), None);
/// assert_eq!(parse_invariant("inf"), None);
/// assert_eq!(parse_invariant(""), None);
/// ```
#[must_use]
pub fn parse_invariant(text: &str) -> Option<f64> {
    let (negative, body) = split_sign(text.trim());

    let magnitude = if body.eq_ignore_ascii_case("nan") {
        f64::NAN
    } else if body.eq_ignore_ascii_case("infinity") {
        f64::INFINITY
    } else {
        normalize_decimal(body)?.parse().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Strips one sign marker from `text`, reporting whether it negates.
fn split_sign(text: &str) -> (bool, &str) {
    if let Some(inner) = text.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        (true, inner)
    } else if let Some(rest) = text.strip_prefix('-').or_else(|| text.strip_suffix('-')) {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').or_else(|| text.strip_suffix('+')).unwrap_or(text))
    }
}

/// Rewrites an unsigned decimal into the plain form `str::parse` reads,
/// dropping group separators. Returns `None` if `text` is not one.
fn normalize_decimal(text: &str) -> Option<String> {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut has_digits = false;

    while let Some(&c) = chars.peek() {
        match c {
            '0'..='9' => {
                plain.push(c);
                has_digits = true;
            },
            ',' if has_digits => {},
            _ => break,
        }
        chars.next();
    }

    if chars.next_if_eq(&'.').is_some() {
        plain.push('.');
        while let Some(c) = chars.next_if(char::is_ascii_digit) {
            plain.push(c);
            has_digits = true;
        }
    }
    if !has_digits {
        return None;
    }

    if chars.next_if(|c| matches!(c, 'e' | 'E')).is_some() {
        plain.push('e');
        if let Some(sign) = chars.next_if(|c| matches!(c, '+' | '-')) {
            plain.push(sign);
        }
        let mut exponent_digits = false;
        while let Some(c) = chars.next_if(char::is_ascii_digit) {
            plain.push(c);
            exponent_digits = true;
        }
        if !exponent_digits {
            return None;
        }
    }

    chars.next().is_none().then_some(plain)
}

/// Renders a number as text.
///
/// Integral values are written without a fractional part or exponent, so
/// `7.0` becomes `7`. Other finite values use the shortest decimal form that
/// reads back to the same `f64`. Negative zero renders as `0`; NaN and the
/// infinities render as `NaN`, `Infinity` and `-Infinity`.
///
/// ## Example
/// ```
/// use seals::util::num::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1000000000000000000000");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Converts a numeric argument to a character index in `0..=upper`.
///
/// The fractional part is discarded (truncation toward zero) before the
/// value is clamped; NaN clamps to `0`.
///
/// ## Example
/// ```
/// use seals::util::num::clamp_to_index;
///
/// assert_eq!(clamp_to_index(2.9, 5), 2);
/// assert_eq!(clamp_to_index(-3.0, 5), 0);
/// assert_eq!(clamp_to_index(10.0, 5), 5);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_to_index(value: f64, upper: usize) -> usize {
    let truncated = value.trunc();
    if truncated.is_nan() || truncated <= 0.0 {
        return 0;
    }
    // Saturating float-to-int cast; anything past `upper` clamps below.
    let index = truncated as u64;
    usize::try_from(index).map_or(upper, |index| index.min(upper))
}
