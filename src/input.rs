//! Text input handling.
//!
//! Helpers for turning user-typed values into simulation parameters, plus
//! random reference string generation.

use {
    crate::{ReferenceString, SimError, SimResult},
    rand::Rng,
};

/// Maximum length of a generated reference string.
pub const MAX_GENERATED_LEN: usize = 12;

/// Pages are drawn from the digits `0..=9`.
pub const GENERATED_PAGE_RANGE: std::ops::RangeInclusive<u8> = 0..=9;

/// Parses an unsigned decimal integer, without signs or separators.
fn parse_digits(text: &str) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Parses the number of frames.
///
/// Negative numbers and anything that is not a plain decimal integer are
/// rejected. Zero is allowed.
pub fn parse_capacity(text: &str) -> SimResult<usize> {
    parse_digits(text).ok_or_else(|| SimError::InvalidCapacity(text.to_owned()))
}

/// Parses the length of a reference string to generate.
pub fn parse_length(text: &str) -> SimResult<usize> {
    let len = parse_digits(text).ok_or_else(|| SimError::InvalidLength(text.to_owned()))?;
    check_length(len)?;
    Ok(len)
}

fn check_length(len: usize) -> SimResult<()> {
    if len > MAX_GENERATED_LEN {
        return Err(SimError::LengthExceeded {
            len,
            max: MAX_GENERATED_LEN,
        });
    }
    Ok(())
}

/// Generates a random reference string of single digit pages.
pub fn random_reference_string<R: Rng>(
    rng: &mut R,
    len: usize,
) -> SimResult<ReferenceString<String>> {
    check_length(len)?;
    Ok((0..len)
        .map(|_| rng.random_range(GENERATED_PAGE_RANGE).to_string())
        .collect())
}
