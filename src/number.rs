//! Converting operands to and from text.
//!
//! Evaluation works on the text stored in each [`Node`](crate::Node), so every
//! intermediate result has to survive a trip through [`format_number()`] and
//! back through [`parse_number()`] without losing precision.

/// Exponents in this range are written out positionally.
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..17;

/// Strictly parse a number, requiring the entire string to be a float literal.
///
/// Literals which are out of range for an `f64` (they overflow to infinity or
/// underflow to zero) are rejected. The words `inf`, `infinity` and `nan` are
/// accepted so collapsed results like `1/0` can be evaluated further.
pub fn parse_number(text: &str) -> Option<f64> {
    let value: f64 = text.parse().ok()?;

    if value.is_infinite() && !names_infinity(text) {
        return None;
    }

    if value == 0.0 && has_significant_digits(text) {
        return None;
    }

    Some(value)
}

fn names_infinity(text: &str) -> bool {
    let unsigned = text.trim_start_matches(|c: char| c == '+' || c == '-');
    unsigned.eq_ignore_ascii_case("inf")
        || unsigned.eq_ignore_ascii_case("infinity")
}

fn has_significant_digits(text: &str) -> bool {
    text.chars()
        .take_while(|&c| !matches!(c, 'e' | 'E'))
        .any(|c| matches!(c, '1'..='9'))
}

/// Format a number using the fewest digits that still parse back to the
/// same value.
///
/// Very large and very small magnitudes switch to scientific notation with an
/// explicitly signed, two digit exponent (`1e+17`, `1.5e-07`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match split_exponent(&scientific) {
        Some(parts) => parts,
        None => return value.to_string(),
    };

    if POSITIONAL_EXPONENTS.contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

fn split_exponent(scientific: &str) -> Option<(&str, i32)> {
    let index = scientific.find('e')?;
    let exponent = scientific[index + 1..].parse().ok()?;

    Some((&scientific[..index], exponent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_numbers() {
        let inputs = vec![
            ("1", 1.0),
            ("0", 0.0),
            ("-0", 0.0),
            ("42", 42.0),
            ("3.25", 3.25),
            ("1.", 1.0),
            (".5", 0.5),
            ("-2.5", -2.5),
            ("1e3", 1000.0),
            ("1.5E-3", 0.0015),
            ("1e+16", 1e16),
        ];

        for (src, should_be) in inputs {
            let got = parse_number(src);
            assert_eq!(got, Some(should_be), "{}", src);
        }
    }

    #[test]
    fn parse_requires_the_whole_string() {
        let inputs = vec!["", "x", "1x", "1.2.3", "1+2", "(1)", " 1", "1 ", "e5"];

        for src in inputs {
            assert_eq!(parse_number(src), None, "{:?}", src);
        }
    }

    #[test]
    fn out_of_range_literals_are_rejected() {
        assert_eq!(parse_number("1e400"), None);
        assert_eq!(parse_number("-1e400"), None);
        assert_eq!(parse_number("1e-400"), None);
        // a literal zero is fine, however it is written
        assert_eq!(parse_number("0e-400"), Some(0.0));
        assert_eq!(parse_number("0.000"), Some(0.0));
    }

    #[test]
    fn special_values_parse() {
        assert_eq!(parse_number("inf"), Some(f64::INFINITY));
        assert_eq!(parse_number("-inf"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("infinity"), Some(f64::INFINITY));
        assert!(parse_number("NaN").unwrap().is_nan());
    }

    #[test]
    fn format_numbers() {
        let inputs = vec![
            (3.0, "3"),
            (-3.0, "-3"),
            (1.5, "1.5"),
            (0.5, "0.5"),
            (0.125, "0.125"),
            (1.0 / 3.0, "0.3333333333333333"),
            (0.1 + 0.2, "0.30000000000000004"),
            (0.0001, "0.0001"),
            (0.00001, "1e-05"),
            (1.5e-7, "1.5e-07"),
            (1e16, "10000000000000000"),
            (1e17, "1e+17"),
            (1.5e16, "15000000000000000"),
            (1.5e17, "1.5e+17"),
            (1e300, "1e+300"),
            (f64::INFINITY, "inf"),
            (f64::NEG_INFINITY, "-inf"),
            (f64::NAN, "NaN"),
        ];

        for (value, should_be) in inputs {
            let got = format_number(value);
            assert_eq!(got, should_be);
        }
    }

    #[test]
    fn formatted_numbers_parse_back_exactly() {
        let values = vec![
            1.0 / 3.0,
            2.0 / 3.0,
            std::f64::consts::PI,
            -1e-300,
            1.7976931348623157e308,
            5e-324,
            123456789.123456789,
            f64::INFINITY,
        ];

        for value in values {
            let text = format_number(value);
            let got = parse_number(&text);
            assert_eq!(got, Some(value), "{}", text);
        }
    }
}
