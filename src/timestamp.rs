//! ISO-8601 local date-time parsing for the bracketed timestamp field.

use chrono::NaiveDateTime;

/// Formats tried in order. Seconds and fractional seconds are optional in the
/// ISO local date-time grammar; a zone or offset is never accepted.
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse `YYYY-MM-DDTHH:MM[:SS[.fffffffff]]` with no offset.
///
/// chrono accepts single-digit months, days and hours; the canonical form
/// requires two, so the fixed-width prefix is checked before handing off.
pub fn parse_local_timestamp(ts_str: &str) -> Option<NaiveDateTime> {
    if !has_canonical_shape(ts_str) {
        return None;
    }

    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(ts_str, fmt).ok())
}

/// `YYYY-MM-DDTHH:MM:SS.fffffffff`
const MAX_LEN: usize = 29;

fn has_canonical_shape(ts_str: &str) -> bool {
    let bytes = ts_str.as_bytes();
    if bytes.len() < 16 {
        return false;
    }

    let digit_positions = [0, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15];
    if !digit_positions.iter().all(|&i| bytes[i].is_ascii_digit()) {
        return false;
    }
    if bytes[4] != b'-' || bytes[7] != b'-' || bytes[10] != b'T' || bytes[13] != b':' {
        return false;
    }

    match bytes.len() {
        16 => true,
        len if (19..=MAX_LEN).contains(&len) => {
            // chrono's %S admits a leap second; the canonical form stops at 59
            bytes[16] == b':'
                && (b'0'..=b'5').contains(&bytes[17])
                && bytes[18].is_ascii_digit()
                && (len == 19 || has_fraction(&bytes[19..]))
        }
        _ => false,
    }
}

/// `.` followed by one to nine digits
fn has_fraction(tail: &[u8]) -> bool {
    match tail.split_first() {
        Some((b'.', digits)) => {
            (1..=9).contains(&digits.len()) && digits.iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}
