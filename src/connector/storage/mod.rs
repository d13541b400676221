//! Storage implementations for provider settings.

mod file_config;
mod memory;

pub use file_config::*;
pub use memory::*;
