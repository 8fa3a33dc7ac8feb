//! Compound-unit duration strings such as `1h30m`, `1.5h` or `250ms`.

use chrono::TimeDelta;

use crate::error::DurationError;

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

/// Largest magnitude a duration may reach before the sign is applied
const MAGNITUDE_LIMIT: u64 = 1 << 63;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60_000_000_000),
        "h" => Some(3_600_000_000_000),
        _ => None,
    }
}

fn digit_count(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Consume leading digits; `None` when the value does not fit
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = digit_count(s);
    let mut value: u64 = 0;
    for b in s[..end].bytes() {
        if value > MAGNITUDE_LIMIT / 10 {
            return None;
        }
        value = value * 10 + u64::from(b - b'0');
        if value > MAGNITUDE_LIMIT {
            return None;
        }
    }
    Some((value, &s[end..]))
}

/// Consume fractional digits, returning the digits as an integer and the
/// power of ten they are scaled by. Digits past the representable precision
/// are dropped.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = digit_count(s);
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    for b in s[..end].bytes() {
        if overflow {
            continue;
        }
        if value > (i64::MAX as u64) / 10 {
            overflow = true;
            continue;
        }
        let next = value * 10 + u64::from(b - b'0');
        if next > MAGNITUDE_LIMIT {
            overflow = true;
            continue;
        }
        value = next;
        scale *= 10.0;
    }
    (value, scale, &s[end..])
}

/// Parse a duration string made of `<number><unit>` groups with an optional
/// leading sign. Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`.
pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationError> {
    let invalid = || DurationError::Invalid {
        input: input.to_string(),
    };

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let first = rest.as_bytes()[0];
        if first != b'.' && !first.is_ascii_digit() {
            return Err(invalid());
        }

        let (whole, after_whole) = leading_int(rest).ok_or_else(invalid)?;
        let has_whole = after_whole.len() != rest.len();
        rest = after_whole;

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut has_fraction = false;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, digits_scale, after) = leading_fraction(after_dot);
            has_fraction = after.len() != after_dot.len();
            fraction = digits;
            scale = digits_scale;
            rest = after;
        }
        if !has_whole && !has_fraction {
            return Err(invalid());
        }

        let unit_end = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let unit = &rest[..unit_end];
        if unit.is_empty() {
            return Err(DurationError::MissingUnit {
                input: input.to_string(),
            });
        }
        let nanos = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;
        rest = &rest[unit_end..];

        let mut value = whole
            .checked_mul(nanos)
            .filter(|v| *v <= MAGNITUDE_LIMIT)
            .ok_or_else(invalid)?;
        if fraction > 0 {
            value += (fraction as f64 * (nanos as f64 / scale)) as u64;
            if value > MAGNITUDE_LIMIT {
                return Err(invalid());
            }
        }
        total = total
            .checked_add(value)
            .filter(|t| *t <= MAGNITUDE_LIMIT)
            .ok_or_else(invalid)?;
    }

    if negative {
        // 1 << 63 wraps to i64::MIN, which is exactly its negation
        return Ok(TimeDelta::nanoseconds((total as i64).wrapping_neg()));
    }
    if total > i64::MAX as u64 {
        return Err(invalid());
    }
    Ok(TimeDelta::nanoseconds(total as i64))
}

/// Duration as fractional hours
pub fn hours(duration: TimeDelta) -> f64 {
    let whole = duration.num_hours();
    let rem = duration - TimeDelta::hours(whole);
    whole as f64 + rem.num_nanoseconds().unwrap_or(0) as f64 / NANOS_PER_HOUR
}
