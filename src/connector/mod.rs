//! # Connector Layer
//!
//! External integrations implementing the application interfaces:
//! - OpenAI-compatible chat providers (custom endpoint and hosted default)
//! - Image generation (Gemini, public URL fallback)
//! - Settings storage (JSON file, in-memory)
//! - The CLI-facing api layer (container, router, controllers)

pub mod adapter;
pub mod api;
pub mod storage;

pub use adapter::*;
pub use storage::*;
