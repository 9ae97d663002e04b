use async_trait::async_trait;
use crate::types::CandidateKey;

/// Trait for checking a single credential against a backend
/// This keeps the validator independent of the concrete HTTP client
#[async_trait]
pub trait KeyProbe: Send + Sync {
    /// Error type describing why a key was not accepted
    type Error: std::error::Error + Send + Sync + 'static;

    /// Check one key. `Ok(())` means the backend accepted it.
    async fn probe(&self, key: &CandidateKey) -> Result<(), Self::Error>;
}
