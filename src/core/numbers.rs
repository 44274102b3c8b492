/// Parse the leading integer of a string the way browsers' `parseInt` does
/// when no radix is given.
///
/// Leading whitespace and a single sign are skipped, a `0x`/`0X` prefix
/// switches to base 16, and parsing stops at the first character that is not
/// a digit. Returns `None` when no digit is found or the value does not fit
/// in an `i64`.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let mut rest = input.trim_start();

    let negative = match rest.as_bytes().first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let radix = match rest.get(..2) {
        Some("0x") | Some("0X") => {
            rest = &rest[2..];
            16
        }
        _ => 10,
    };

    let digits_len = rest
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    if digits_len == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
