//! Code token - normalized redeemable code string
//!
//! Raw input (scanned QR text or manual entry) is trimmed and uppercased
//! before any lookup, so ` kl-2026-xyz ` and `KL-2026-XYZ` refer to the
//! same stored code.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A normalized code token (trimmed, uppercase, non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeToken(String);

impl CodeToken {
    /// Normalize raw input into a token.
    ///
    /// # Errors
    /// Returns [`CodeTokenError::Empty`] if the input is empty after trimming.
    pub fn parse(raw: &str) -> Result<Self, CodeTokenError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(CodeTokenError::Empty);
        }
        Ok(Self(normalized))
    }

    /// Get the token as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token and return the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when normalizing a code token
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodeTokenError {
    #[error("code is empty")]
    Empty,
}

impl fmt::Display for CodeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CodeToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for CodeToken {
    type Err = CodeTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CodeToken::parse(s)
    }
}

impl Serialize for CodeToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CodeToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CodeToken::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Generate a random code token of the form `KL-XXXX-XXXX`.
///
/// The charset omits easily confused characters (`0/O`, `1/I`) since these
/// codes are printed on cards and typed by hand when scanning fails.
pub fn generate_code_token() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
    const GROUP_LEN: usize = 4;

    let mut rng = rand::thread_rng();
    let mut group = || -> String {
        (0..GROUP_LEN)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect()
    };

    let first = group();
    let second = group();
    format!("KL-{first}-{second}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_whitespace_and_case() {
        let token = CodeToken::parse(" kl-2026-xyz ").unwrap();
        assert_eq!(token.as_str(), "KL-2026-XYZ");
    }

    #[test]
    fn test_parse_already_normalized() {
        let token = CodeToken::parse("KL-2026-XYZ").unwrap();
        assert_eq!(token.as_str(), "KL-2026-XYZ");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(CodeToken::parse(""), Err(CodeTokenError::Empty));
        assert_eq!(CodeToken::parse("   "), Err(CodeTokenError::Empty));
        assert_eq!(CodeToken::parse("\t\n"), Err(CodeTokenError::Empty));
    }

    #[test]
    fn test_generated_token_shape() {
        let code = generate_code_token();
        let parts: Vec<&str> = code.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "KL");
        assert_eq!(parts[1].len(), 4);
        assert_eq!(parts[2].len(), 4);
        // Generated codes must survive their own normalization unchanged
        assert_eq!(CodeToken::parse(&code).unwrap().as_str(), code);
    }

    #[test]
    fn test_generated_tokens_differ() {
        let a = generate_code_token();
        let b = generate_code_token();
        // 32^8 combinations, a collision here means the generator is broken
        assert_ne!(a, b);
    }
}
