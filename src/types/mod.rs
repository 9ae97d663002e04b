pub mod key;
pub mod result;

pub use key::{CandidateKey, KeyError};
pub use result::{ValidationResult, Validity};
