//! Binary configuration

pub mod settings;

pub use settings::{ConfigError, Settings};
