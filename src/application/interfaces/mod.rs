mod chat_provider;
mod config_provider;
mod image_generator;

pub use chat_provider::*;
pub use config_provider::*;
pub use image_generator::*;
