pub mod error;
pub mod mock;
pub mod siliconflow;

pub use error::{ConfigError, ProbeError};
pub use mock::{MockKeyProbe, MockOutcome};
pub use siliconflow::{ClientConfig, SiliconFlowClient, DEFAULT_BASE_URL, USER_INFO_PATH};
