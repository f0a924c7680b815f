//! Application configuration: TOML file discovery, parsing, validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, StorageConfig, UiConfig};
