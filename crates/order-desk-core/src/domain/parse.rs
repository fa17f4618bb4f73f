//! Lenient Number Parsing
//!
//! Form fields and inline cells hand over raw text. Numbers are read from
//! the longest numeric prefix after leading whitespace, so `"12 pcs"`
//! yields 12 and `"pcs"` yields nothing.

/// Parse the longest decimal prefix (`[+-]digits[.digits][e[+-]digits]`)
pub fn number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Parse the longest integer prefix (`[+-]digits`), saturating at the
/// `i64` bounds
pub fn integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    // Only overflow can fail here
    Some(s[..sign + digits].parse().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_prefix() {
        assert_eq!(number("1.50"), Some(1.5));
        assert_eq!(number("  12abc"), Some(12.0));
        assert_eq!(number(".5"), Some(0.5));
        assert_eq!(number("3."), Some(3.0));
        assert_eq!(number("-2.25"), Some(-2.25));
        assert_eq!(number("1e3"), Some(1000.0));
        assert_eq!(number("4e"), Some(4.0));
    }

    #[test]
    fn test_number_rejects_garbage() {
        assert_eq!(number(""), None);
        assert_eq!(number("abc"), None);
        assert_eq!(number("."), None);
        assert_eq!(number("-"), None);
        assert_eq!(number("$5"), None);
    }

    #[test]
    fn test_integer_prefix() {
        assert_eq!(integer("10"), Some(10));
        assert_eq!(integer("10.7"), Some(10));
        assert_eq!(integer(" -3 units"), Some(-3));
        assert_eq!(integer("+0"), Some(0));
        assert_eq!(integer("x1"), None);
        assert_eq!(integer("99999999999999999999"), Some(i64::MAX));
        assert_eq!(integer("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(integer(""), None);
    }
}
