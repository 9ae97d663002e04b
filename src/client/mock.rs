use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::client::error::ProbeError;
use crate::traits::KeyProbe;
use crate::types::CandidateKey;

/// Scripted response for one key
#[derive(Debug, Clone)]
pub struct MockOutcome {
    pub delay: Duration,
    pub result: Result<(), ProbeError>,
}

impl MockOutcome {
    pub fn valid() -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(()),
        }
    }

    pub fn invalid(error: ProbeError) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(error),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Mock implementation of KeyProbe for testing
///
/// Keys without a scripted outcome are rejected with `ProbeError::Status(401)`.
#[derive(Debug, Clone, Default)]
pub struct MockKeyProbe {
    outcomes: Arc<RwLock<HashMap<String, MockOutcome>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockKeyProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_outcome(&self, key: &str, outcome: MockOutcome) {
        let mut outcomes = self.outcomes.write().await;
        outcomes.insert(key.to_string(), outcome);
    }

    /// Keys probed so far, in the order the probes started
    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl KeyProbe for MockKeyProbe {
    type Error = ProbeError;

    async fn probe(&self, key: &CandidateKey) -> Result<(), Self::Error> {
        self.calls.write().await.push(key.expose().to_string());

        let outcome = {
            let outcomes = self.outcomes.read().await;
            outcomes
                .get(key.expose())
                .cloned()
                .unwrap_or_else(|| MockOutcome::invalid(ProbeError::Status(401)))
        };

        if !outcome.delay.is_zero() {
            tokio::time::sleep(outcome.delay).await;
        }
        outcome.result
    }
}
