//! Top-level session state: the key registry, the pending input buffer, the
//! busy flag and the latest results. The presentation layer reads through the
//! observers here and drives changes only through the operations.

use log::{info, warn};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::client::{ClientConfig, ConfigError, SiliconFlowClient};
use crate::registry::KeyRegistry;
use crate::traits::KeyProbe;
use crate::types::{CandidateKey, ValidationResult};
use crate::validator::Validator;

#[derive(Debug, Default)]
struct SessionState {
    registry: KeyRegistry,
    input: String,
    results: Vec<ValidationResult>,
}

/// Reasons a validation trigger is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    Busy,
    NoKeys,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Busy => write!(f, "a validation batch is already running"),
            SessionError::NoKeys => write!(f, "no keys to check"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Clears the busy flag when the batch settles or its future is dropped
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Key checking session. Cloning shares the same state.
pub struct Session<P: KeyProbe> {
    state: Arc<RwLock<SessionState>>,
    busy: Arc<AtomicBool>,
    validator: Validator<P>,
}

impl<P: KeyProbe> Clone for Session<P> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            busy: Arc::clone(&self.busy),
            validator: self.validator.clone(),
        }
    }
}

impl Session<SiliconFlowClient> {
    /// Session backed by the real SiliconFlow endpoint
    pub fn with_client(config: ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Validator::new(SiliconFlowClient::new(config)?)))
    }
}

impl<P: KeyProbe> Session<P> {
    pub fn new(validator: Validator<P>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            busy: Arc::new(AtomicBool::new(false)),
            validator,
        }
    }

    /// Replace the pending input buffer
    pub async fn set_input(&self, text: impl Into<String>) {
        self.state.write().await.input = text.into();
    }

    pub async fn input(&self) -> String {
        self.state.read().await.input.clone()
    }

    /// Submit the pending input to the registry.
    ///
    /// The buffer is cleared only when the key is admitted.
    pub async fn submit_input(&self) -> bool {
        let mut state = self.state.write().await;
        let input = std::mem::take(&mut state.input);
        if state.registry.add(&input) {
            true
        } else {
            state.input = input;
            false
        }
    }

    /// Submit a key directly, bypassing the input buffer
    pub async fn add_key(&self, candidate: &str) -> bool {
        self.state.write().await.registry.add(candidate)
    }

    /// Reset the registry. Previous results are left for display.
    pub async fn clear_keys(&self) {
        self.state.write().await.registry.clear();
    }

    pub async fn keys(&self) -> Vec<CandidateKey> {
        self.state.read().await.registry.snapshot()
    }

    pub async fn results(&self) -> Vec<ValidationResult> {
        self.state.read().await.results.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Whether the validation trigger is enabled
    pub async fn can_check(&self) -> bool {
        !self.is_busy() && !self.state.read().await.registry.is_empty()
    }

    /// Validate a snapshot of the registry and store the results.
    ///
    /// Keys added while the batch is in flight are not part of it. The new
    /// results replace the previous ones entirely.
    pub async fn check_keys(&self) -> Result<Vec<ValidationResult>, SessionError> {
        let snapshot = {
            let state = self.state.read().await;
            if state.registry.is_empty() {
                return Err(SessionError::NoKeys);
            }
            if self
                .busy
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                warn!("Ignoring check request while a batch is running");
                return Err(SessionError::Busy);
            }
            state.registry.snapshot()
        };
        let _busy = BusyGuard(self.busy.as_ref());

        info!("Starting validation batch of {} key(s)", snapshot.len());
        let results = self.validator.check_all(&snapshot).await;

        self.state.write().await.results = results.clone();
        Ok(results)
    }
}
