use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user-submitted credential, trimmed and guaranteed non-empty.
///
/// Uses the NewType pattern so the registry can only ever hold admitted keys.
/// `Debug` masks the value so keys don't leak into log output by accident;
/// `Display` shows the full key because that is what users are shown next to
/// their results.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CandidateKey(String);

impl CandidateKey {
    /// Trim `raw` and wrap it, rejecting blank input
    pub fn new(raw: &str) -> Result<Self, KeyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(KeyError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the raw key (use with caution)
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Mask the key for logging (shows only first 4 and last 4 characters)
    pub fn mask(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            "****".to_string()
        } else {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{}...{}", head, tail)
        }
    }
}

impl fmt::Debug for CandidateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CandidateKey").field(&self.mask()).finish()
    }
}

impl fmt::Display for CandidateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CandidateKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CandidateKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CandidateKey> for String {
    fn from(key: CandidateKey) -> Self {
        key.0
    }
}

impl AsRef<str> for CandidateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Candidate key errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    Empty,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::Empty => write!(f, "key is empty after trimming whitespace"),
        }
    }
}

impl std::error::Error for KeyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_key_trims_input() {
        let key = CandidateKey::new("  sk-abc \t\n").unwrap();
        assert_eq!(key.expose(), "sk-abc");
    }

    #[test]
    fn test_candidate_key_rejects_blank() {
        assert_eq!(CandidateKey::new(""), Err(KeyError::Empty));
        assert_eq!(CandidateKey::new("   "), Err(KeyError::Empty));
        assert!("\t".parse::<CandidateKey>().is_err());
    }

    #[test]
    fn test_candidate_key_masking() {
        let key = CandidateKey::new("abcdefghijklmnopqrstuvwxyz").unwrap();
        assert_eq!(key.mask(), "abcd...wxyz");

        let short = CandidateKey::new("short").unwrap();
        assert_eq!(short.mask(), "****");
    }

    #[test]
    fn test_candidate_key_debug_is_masked() {
        let key = CandidateKey::new("sk-0123456789secret").unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("0123456789"));
        assert_eq!(key.to_string(), "sk-0123456789secret");
    }

    #[test]
    fn test_candidate_key_mask_multibyte() {
        let key = CandidateKey::new("密钥密钥密钥密钥密钥").unwrap();
        assert_eq!(key.mask(), "密钥密钥...密钥密钥");
    }

    #[test]
    fn test_candidate_key_serde_rejects_blank() {
        let ok: CandidateKey = serde_json::from_str("\" sk-1 \"").unwrap();
        assert_eq!(ok.expose(), "sk-1");
        assert!(serde_json::from_str::<CandidateKey>("\"  \"").is_err());
    }
}
