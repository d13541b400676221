//! Pure domain services: endpoint normalization, response extraction and
//! prompt templates.

mod endpoint;
mod json_extract;
mod prompts;

pub use endpoint::*;
pub use json_extract::*;
pub use prompts::*;
