//! Accepted HTTP status code set.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::config::constants::DEFAULT_ACCEPTED_STATUS_CODES;
use crate::error_handling::StatusCodeError;

/// Set of HTTP status codes that count as a successful probe.
///
/// Parsed once from a comma-separated list (`"200,301"`) and read-only
/// afterwards. Entries are trimmed; anything that is not an integer in
/// `100..=999` rejects the whole list rather than being mapped to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCodes(BTreeSet<u16>);

impl StatusCodes {
    pub fn new(codes: impl IntoIterator<Item = u16>) -> Self {
        Self(codes.into_iter().collect())
    }

    pub fn contains(&self, code: u16) -> bool {
        self.0.contains(&code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StatusCodes {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEPTED_STATUS_CODES.iter().copied())
    }
}

impl FromStr for StatusCodes {
    type Err = StatusCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut codes = BTreeSet::new();
        for entry in s.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                return Err(StatusCodeError::Empty);
            }
            let code: u16 = entry
                .parse()
                .map_err(|_| StatusCodeError::NotANumber(entry.to_string()))?;
            if !(100..=999).contains(&code) {
                return Err(StatusCodeError::OutOfRange(code));
            }
            codes.insert(code);
        }
        Ok(Self(codes))
    }
}

impl fmt::Display for StatusCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}
