//! Permissive numeric evaluation for entry values.
//!
//! Values are never rejected for being non-numeric: an unparsable value
//! evaluates to zero, and trailing text after a number is ignored. A value
//! may chain literals with `+`, `-`, `*` and `/`, folded left to right
//! without precedence. Literals accept an optional sign and the `0x` and
//! leading-zero radix prefixes.

/// Evaluates `input` to an integer, saturating on overflow.
///
/// Division by zero yields zero rather than an error.
pub(crate) fn eval(input: &str) -> i64 {
    let Some((mut total, mut rest)) = literal(input) else {
        return 0;
    };
    loop {
        let after = rest.trim_start();
        let Some(op) = after.chars().next() else {
            break;
        };
        if !matches!(op, '+' | '-' | '*' | '/') {
            break;
        }
        let Some((value, next)) = literal(&after[1..]) else {
            break;
        };
        total = match op {
            '+' => total.saturating_add(value),
            '-' => total.saturating_sub(value),
            '*' => total.saturating_mul(value),
            _ => total.checked_div(value).unwrap_or(0),
        };
        rest = next;
    }
    total
}

/// Reads the leading integer literal of `input`, ignoring whatever follows.
///
/// No operator folding happens here, so `2*5` reads as 2 where [`eval`]
/// would fold it to 10. An unparsable value reads as zero.
pub(crate) fn integer(input: &str) -> i64 {
    literal(input).map_or(0, |(value, _)| value)
}

/// Reads one integer literal, returning it with the unconsumed remainder.
fn literal(input: &str) -> Option<(i64, &str)> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;
    let mut negative = false;
    match bytes.first() {
        Some(b'-') => {
            negative = true;
            pos += 1;
        }
        Some(b'+') => pos += 1,
        _ => {}
    }
    let mut radix = 10;
    if bytes.get(pos) == Some(&b'0') {
        match bytes.get(pos + 1) {
            Some(b'x' | b'X') if bytes.get(pos + 2).is_some_and(u8::is_ascii_hexdigit) => {
                radix = 16;
                pos += 2;
            }
            Some(_) => {
                // A bare zero before junk still counts as a literal, so the
                // octal scan below may legitimately consume nothing.
                radix = 8;
                pos += 1;
            }
            None => return Some((0, "")),
        }
    }
    // Accumulating toward the sign keeps `i64::MIN` representable and
    // makes overflow saturate at the matching bound.
    let start = pos;
    let mut value: i64 = 0;
    while let Some(digit) = bytes.get(pos).and_then(|b| char::from(*b).to_digit(radix)) {
        let digit = i64::from(digit);
        value = if negative {
            value.saturating_mul(i64::from(radix)).saturating_sub(digit)
        } else {
            value.saturating_mul(i64::from(radix)).saturating_add(digit)
        };
        pos += 1;
    }
    if pos == start && radix != 8 {
        return None;
    }
    Some((value, &s[pos..]))
}
