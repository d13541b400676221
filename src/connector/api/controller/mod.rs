pub mod chat_controller;
pub mod config_controller;
pub mod console;
pub mod image_controller;
pub mod questions_controller;
pub mod quiz_controller;
pub mod recommend_controller;

pub use chat_controller::ChatController;
pub use config_controller::{ConfigController, ConfigUpdate};
pub use image_controller::ImageController;
pub use questions_controller::QuestionsController;
pub use quiz_controller::QuizController;
pub use recommend_controller::RecommendController;
