mod gemini_image_generator;
mod openai_compatible_client;
mod pollinations_image_service;
mod provider_resolver;

pub use gemini_image_generator::*;
pub use openai_compatible_client::*;
pub use pollinations_image_service::*;
pub use provider_resolver::*;
