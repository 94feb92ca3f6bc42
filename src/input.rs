//! Turning user supplied text into sequences the sorts accept.

use crate::error::SortError;

/// Parses a comma separated list of numbers.
///
/// Each token is trimmed and read up to the end of its leading number, so `"12abc"` yields `12.0`
/// and `"1.5.3"` yields `1.5`. Tokens that do not start with a number are skipped, so
/// `"3, x, 1,,2"` yields `[3.0, 1.0, 2.0]`. Fails if no number is left or if a value is not
/// finite.
pub fn parse_sequence(text: &str) -> Result<Vec<f64>, SortError> {
    let values = text
        .split(',')
        .map(|token| numeric_prefix(token.trim()))
        .filter_map(|prefix| prefix.parse::<f64>().ok())
        .collect::<Vec<_>>();

    if values.is_empty() {
        return Err(SortError::InvalidInput(
            "please provide a comma separated list of numbers".to_string(),
        ));
    }

    validate_sequence(&values)?;

    Ok(values)
}

/// Rejects values that have no place in a total order, NaN and the infinities.
pub fn validate_sequence(values: &[f64]) -> Result<(), SortError> {
    match values.iter().position(|val| !val.is_finite()) {
        Some(idx) => Err(SortError::InvalidInput(format!(
            "value {} at index {idx} is not a finite number",
            values[idx]
        ))),
        None => Ok(()),
    }
}

// Longest prefix of `token` of the form `[+-](Infinity|digits[.digits][e[+-]digits])`, empty if
// there is none. An exponent without digits is not part of the number.
fn numeric_prefix(token: &str) -> &str {
    let bytes = token.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if token[end..].starts_with("Infinity") {
        return &token[..end + "Infinity".len()];
    }

    let int_digits = digit_count(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_count(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }

        let exp_digits = digit_count(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    &token[..end]
}

fn digit_count(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
