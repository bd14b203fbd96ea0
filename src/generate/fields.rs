//! Field generators for the synthetic identifier values.
//!
//! Each producer is a pure function of the injected randomness (and, for
//! the request id, the clock). Uniqueness across a batch is the registry's
//! concern, not theirs.

use chrono::{DateTime, Utc};

use crate::ports::random::RandomSource;

/// Fixed issuer prefix folded into the NPI checksum computation.
///
/// The prefix participates in the check digit only; it is not part of the
/// emitted identifier.
const NPI_ISSUER_PREFIX: &str = "80840";

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns `n` random decimal digits.
pub fn rand_digits(rng: &dyn RandomSource, n: usize) -> String {
    (0..n).map(|_| char::from(b'0' + u8::try_from(rng.below(10)).unwrap_or(0))).collect()
}

/// Returns `n` random uppercase ASCII letters.
pub fn rand_upper(rng: &dyn RandomSource, n: usize) -> String {
    (0..n).map(|_| char::from(UPPERCASE[rng.below(UPPERCASE.len())])).collect()
}

/// Builds a request id: `{prefix}-{YYYY-MM-DD}_{HHMM}_{letter}`, UTC.
///
/// Only the trailing letter varies within a minute, so the value space is
/// 26 per minute-prefix.
pub fn make_request_id(prefix: &str, now: DateTime<Utc>, rng: &dyn RandomSource) -> String {
    let suffix = rand_upper(rng, 1);
    format!("{prefix}-{}_{suffix}", now.format("%Y-%m-%d_%H%M"))
}

/// Builds a secondary id: 10 random digits followed by one uppercase letter.
pub fn make_sec_id(rng: &dyn RandomSource) -> String {
    format!("{}{}", rand_digits(rng, 10), rand_upper(rng, 1))
}

/// Computes the Luhn check digit for a numeric string (without check digit).
///
/// Traverses right to left, doubling every digit at an even 0-based index
/// from the right and subtracting 9 when the doubled value exceeds 9.
/// Non-digit characters contribute nothing.
pub fn luhn_check_digit(digits: &str) -> char {
    let mut total = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let mut d = c.to_digit(10).unwrap_or(0);
        if i % 2 == 0 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        total += d;
    }
    let check = (10 - (total % 10)) % 10;
    char::from_digit(check, 10).unwrap_or('0')
}

/// Builds an NPI: 9 random digits plus a Luhn check digit computed over
/// the issuer-prefixed form.
pub fn make_npi(rng: &dyn RandomSource) -> String {
    let first9 = rand_digits(rng, 9);
    let check = luhn_check_digit(&format!("{NPI_ISSUER_PREFIX}{first9}"));
    format!("{first9}{check}")
}

/// Builds an EDIPI-shaped identifier: `T` + 9 digits + `BLL` + 3 digits + `Z`.
pub fn make_edipi(rng: &dyn RandomSource) -> String {
    format!("T{}BLL{}Z", rand_digits(rng, 9), rand_digits(rng, 3))
}

/// Builds a middle-name placeholder: `UC` + 3 random digits.
pub fn make_middle_name(rng: &dyn RandomSource) -> String {
    format!("UC{}", rand_digits(rng, 3))
}

/// Normalizes an email local part.
///
/// Trims, replaces every run of non-alphanumeric characters with a single
/// period, strips leading/trailing periods, and upper-cases the result.
pub fn normalize_email_local(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.trim().chars() {
        if c.is_ascii_alphanumeric() {
            out.extend(c.to_uppercase());
        } else if !out.ends_with('.') {
            out.push('.');
        }
    }
    out.trim_matches('.').to_string()
}

/// Builds an email address from a name pair, a 1-based batch sequence
/// number, and a domain.
pub fn make_email(given: &str, sur: &str, seq: usize, domain: &str) -> String {
    let local = normalize_email_local(&format!("{given}.{sur}{seq}"));
    format!("{local}@{domain}")
}
