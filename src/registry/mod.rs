/// Ordered, deduplicated collection of candidate keys
pub mod key_registry;

pub use key_registry::KeyRegistry;
