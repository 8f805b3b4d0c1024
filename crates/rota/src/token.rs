//! Staff code validation
//!
//! The search core accepts any token. Interactive callers look up staff by
//! their nine-digit code and reject anything else before searching.

use lazy_regex::regex_is_match;
use thiserror::Error;

/// Required length of a staff code
pub const CODE_LENGTH: usize = 9;

/// Why a code was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Only digits are allowed")]
    NonDigit,

    #[error("Expected exactly {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Validate a staff code
///
/// Leading and trailing whitespace is ignored. Blank input is `Ok(None)`,
/// meaning there is nothing to search for.
///
/// ```
/// use rota::token::{validate_code, TokenError};
///
/// assert_eq!(validate_code(" 123456789 "), Ok(Some("123456789")));
/// assert_eq!(validate_code(""), Ok(None));
/// assert_eq!(validate_code("12a"), Err(TokenError::NonDigit));
/// ```
pub fn validate_code(input: &str) -> Result<Option<&str>, TokenError> {
    let code = input.trim();
    if code.is_empty() {
        return Ok(None);
    }

    if !regex_is_match!(r"^[0-9]+$", code) {
        return Err(TokenError::NonDigit);
    }

    if code.len() != CODE_LENGTH {
        return Err(TokenError::WrongLength {
            expected: CODE_LENGTH,
            actual: code.len(),
        });
    }

    Ok(Some(code))
}
