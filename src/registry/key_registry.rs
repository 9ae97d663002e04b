use crate::types::CandidateKey;
use log::debug;

/// Registry of candidate keys in submission order.
///
/// Keys are unique by exact (case-sensitive) match after trimming. Rejected
/// submissions are silent no-ops so an accidental double submit is harmless.
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    keys: Vec<CandidateKey>,
}

impl KeyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Trim `candidate` and append it unless it is blank or already present.
    ///
    /// Returns whether the key was admitted.
    pub fn add(&mut self, candidate: &str) -> bool {
        let key = match CandidateKey::new(candidate) {
            Ok(key) => key,
            Err(_) => return false,
        };

        if self.contains(&key) {
            debug!("Ignoring duplicate key {}", key.mask());
            return false;
        }

        debug!("Registered key {}", key.mask());
        self.keys.push(key);
        true
    }

    pub fn contains(&self, key: &CandidateKey) -> bool {
        self.keys.contains(key)
    }

    /// Keys in submission order
    pub fn keys(&self) -> &[CandidateKey] {
        &self.keys
    }

    /// Owned copy of the current contents, for handing to a validation batch
    pub fn snapshot(&self) -> Vec<CandidateKey> {
        self.keys.clone()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Remove every key
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
