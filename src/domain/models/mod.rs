mod answer;
mod chat;
mod image;
mod provider_config;
mod questionnaire;
mod recommendation;
mod session;

pub use answer::*;
pub use chat::*;
pub use image::*;
pub use provider_config::*;
pub use questionnaire::*;
pub use recommendation::*;
pub use session::*;
