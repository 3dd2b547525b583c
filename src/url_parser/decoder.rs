use std::borrow::Cow;

use thiserror::Error;

/// Why a value could not be percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    #[error("incomplete escape sequence at index {0}")]
    InvalidEscape(usize),

    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Percent-decode a URL part.
///
/// Unlike [`urlencoding::decode`], a `%` that is not followed by two hex
/// digits is an error rather than literal text. `+` is left as is.
pub fn percent_decode(raw: &str) -> Result<Cow<'_, str>, DecodeFailure> {
    let bytes = raw.as_bytes();
    for (index, _) in raw.match_indices('%') {
        let well_formed = bytes
            .get(index + 1..index + 3)
            .is_some_and(|hex| hex.iter().all(|b| b.is_ascii_hexdigit()));
        if !well_formed {
            return Err(DecodeFailure::InvalidEscape(index));
        }
    }
    urlencoding::decode(raw).map_err(|_| DecodeFailure::InvalidUtf8)
}
