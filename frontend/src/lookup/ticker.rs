use std::{fmt, str::FromStr};

use super::error::LookupError;

pub const MAX_TICKER_LEN: usize = 10;

/// Normalised cryptocurrency symbol: 1 to 10 uppercase ASCII letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TickerCode(String);

impl TickerCode {
    /// Trim and uppercase raw input, then check it against `[A-Z0-9]{1,10}`.
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        let normalized = trim_input(raw).to_uppercase();
        if normalized.is_empty() {
            return Err(LookupError::EmptyInput);
        }

        let well_formed = normalized.len() <= MAX_TICKER_LEN
            && normalized
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !well_formed {
            return Err(LookupError::InvalidFormat);
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strip the characters browsers treat as blank around a value. That set adds
/// the byte-order mark (common in pasted text) to Unicode whitespace, minus NEL.
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

impl fmt::Display for TickerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TickerCode {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
