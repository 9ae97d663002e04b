use crate::types::CandidateKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking one key in a validation batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub key: CandidateKey,
    pub is_valid: bool,
}

impl ValidationResult {
    pub fn new(key: CandidateKey, is_valid: bool) -> Self {
        Self { key, is_valid }
    }

    pub fn validity(&self) -> Validity {
        if self.is_valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

/// Display label for a result. Erroring and rejected keys both map to `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Validity {
    Valid,
    Invalid,
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validity::Valid => write!(f, "Valid"),
            Validity::Invalid => write!(f, "Invalid"),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.key, self.validity())
    }
}
