use futures_util::future::join_all;
use log::{debug, info};
use std::sync::Arc;
use std::time::Instant;

use crate::traits::KeyProbe;
use crate::types::{CandidateKey, ValidationResult};

/// Runs one probe per key concurrently and reports results in input order.
///
/// There is no concurrency cap, retry or timeout. Key lists are entered by
/// hand and stay small.
pub struct Validator<P: KeyProbe> {
    probe: Arc<P>,
}

impl<P: KeyProbe> Clone for Validator<P> {
    fn clone(&self) -> Self {
        Self {
            probe: Arc::clone(&self.probe),
        }
    }
}

impl<P: KeyProbe> Validator<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe: Arc::new(probe),
        }
    }

    pub fn from_arc(probe: Arc<P>) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Check every key and wait for all of them before returning.
    ///
    /// `results[i]` always corresponds to `keys[i]`. A failing probe only
    /// marks its own key invalid.
    pub async fn check_all(&self, keys: &[CandidateKey]) -> Vec<ValidationResult> {
        let started = Instant::now();
        info!("Checking {} key(s)", keys.len());

        let checks = keys.iter().map(|key| self.check_one(key));
        let results = join_all(checks).await;

        let valid = results.iter().filter(|r| r.is_valid).count();
        info!(
            "Checked {} key(s) in {:?}: {} valid, {} invalid",
            results.len(),
            started.elapsed(),
            valid,
            results.len() - valid
        );
        results
    }

    async fn check_one(&self, key: &CandidateKey) -> ValidationResult {
        match self.probe.probe(key).await {
            Ok(()) => ValidationResult::new(key.clone(), true),
            Err(e) => {
                debug!("Key {} rejected: {}", key.mask(), e);
                ValidationResult::new(key.clone(), false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockKeyProbe, MockOutcome, ProbeError};

    fn keys(raw: &[&str]) -> Vec<CandidateKey> {
        raw.iter().map(|k| CandidateKey::new(k).unwrap()).collect()
    }

    #[tokio::test]
    async fn test_check_all_empty() {
        let validator = Validator::new(MockKeyProbe::new());
        assert!(validator.check_all(&[]).await.is_empty());
    }

    #[tokio::test]
    async fn test_check_all_maps_outcomes() {
        let probe = MockKeyProbe::new();
        probe.set_outcome("sk-good", MockOutcome::valid()).await;
        probe
            .set_outcome("sk-bad", MockOutcome::invalid(ProbeError::MissingId))
            .await;
        let validator = Validator::new(probe);

        let results = validator.check_all(&keys(&["sk-good", "sk-bad"])).await;
        assert_eq!(results.len(), 2);
        assert!(results[0].is_valid);
        assert!(!results[1].is_valid);
    }

    #[tokio::test]
    async fn test_probes_every_key_once() {
        let probe = MockKeyProbe::new();
        let validator = Validator::new(probe.clone());
        validator.check_all(&keys(&["a", "b", "c"])).await;

        let mut calls = probe.calls().await;
        calls.sort();
        assert_eq!(calls, vec!["a", "b", "c"]);
    }
}
