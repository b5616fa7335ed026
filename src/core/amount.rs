//! Token count parsing and 18-decimal fixed-point scaling.

use num_bigint::{BigInt, Sign};
use thiserror::Error;

/// Decimal places of the on-chain token representation.
pub const DECIMALS: u32 = 18;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenParseError {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit found in string")]
    InvalidDigit,
}

/// Accepts `[+-]?[0-9]+` after trimming surrounding whitespace.
pub fn parse_tokens(raw: &str) -> std::result::Result<BigInt, TokenParseError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(TokenParseError::Empty);
    }
    // num-bigint would otherwise accept '_' separators
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TokenParseError::InvalidDigit);
    }

    BigInt::parse_bytes(trimmed.as_bytes(), 10).ok_or(TokenParseError::InvalidDigit)
}

/// Only strictly positive allocations make it into the manifest.
pub fn is_allocatable(tokens: &BigInt) -> bool {
    tokens.sign() == Sign::Plus
}

pub fn scale(tokens: &BigInt) -> BigInt {
    tokens * BigInt::from(10u8).pow(DECIMALS)
}
