/// Live test configuration.
pub mod config;
/// Recorded Graph payloads.
pub mod fixtures;
