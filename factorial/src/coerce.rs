/// Whitespace as C's `isspace` sees it in the "C" locale.
pub(crate) const fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Lenient text to integer conversion with `atoi` semantics.
///
/// Leading C whitespace is skipped, then an optional sign, then as
/// many ASCII digits as follow. Scanning stops at the first non-digit.
/// A token with no leading digits yields 0. Values outside the `i32`
/// range saturate, the same clamp `strtol` applies.
pub fn coerce(text: &str) -> i32 {
    let mut cursor = text.chars().peekable();
    while cursor.next_if(|&c| is_c_space(c)).is_some() {}

    let negative = match cursor.next_if(|&c| c == '+' || c == '-') {
        Some(sign) => sign == '-',
        None => false,
    };

    // Accumulate towards the sign so that i32::MIN is reachable.
    let mut value: i32 = 0;
    while let Some(digit) = cursor.next_if(|c| c.is_ascii_digit()) {
        let digit = (digit as u8 - b'0') as i32;
        let next = value.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        });
        value = match next {
            Some(v) => v,
            None if negative => return i32::MIN,
            None => return i32::MAX,
        };
    }
    value
}

#[cfg(test)]
mod test_coerce {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(coerce("0"), 0);
        assert_eq!(coerce("5"), 5);
        assert_eq!(coerce("123456789"), 123456789);
    }

    #[test]
    fn signs() {
        assert_eq!(coerce("-7"), -7);
        assert_eq!(coerce("+7"), 7);
        assert_eq!(coerce("--7"), 0);
        assert_eq!(coerce("-"), 0);
    }

    #[test]
    fn unparseable_is_zero() {
        assert_eq!(coerce("abc"), 0);
        assert_eq!(coerce(""), 0);
        assert_eq!(coerce("x12"), 0);
    }

    #[test]
    fn leading_digits_only() {
        assert_eq!(coerce("12abc"), 12);
        assert_eq!(coerce("4.5"), 4);
        assert_eq!(coerce("  42"), 42);
        assert_eq!(coerce("\x0B\x0C-8"), -8);
    }

    #[test]
    fn saturates() {
        assert_eq!(coerce("2147483647"), i32::MAX);
        assert_eq!(coerce("-2147483648"), i32::MIN);
        assert_eq!(coerce("99999999999"), i32::MAX);
        assert_eq!(coerce("-99999999999"), i32::MIN);
    }
}
