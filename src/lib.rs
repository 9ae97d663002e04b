pub mod client;
pub mod console;
pub mod logging;
pub mod presentation;
pub mod registry;
pub mod session;
pub mod traits;
pub mod types;
pub mod validator;

pub use client::{ClientConfig, ConfigError, MockKeyProbe, MockOutcome, ProbeError, SiliconFlowClient};
pub use logging::init_logging;
pub use registry::KeyRegistry;
pub use session::{Session, SessionError};
pub use traits::KeyProbe;
pub use types::{CandidateKey, KeyError, ValidationResult, Validity};
pub use validator::Validator;
