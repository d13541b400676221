use anyhow::Result;

use crate::cli::{Commands, ConfigAction};
use crate::domain::DEFAULT_SYSTEM_PROMPT;

use super::container::Container;
use super::controller::{
    ChatController, ConfigController, ConfigUpdate, ImageController, QuestionsController,
    QuizController, RecommendController,
};

pub struct Router<'a> {
    questions_controller: QuestionsController,
    quiz_controller: QuizController<'a>,
    recommend_controller: RecommendController<'a>,
    chat_controller: ChatController<'a>,
    image_controller: ImageController<'a>,
    config_controller: ConfigController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            questions_controller: QuestionsController::new(),
            quiz_controller: QuizController::new(container),
            recommend_controller: RecommendController::new(container),
            chat_controller: ChatController::new(container),
            image_controller: ImageController::new(container),
            config_controller: ConfigController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Questions { format } => self.questions_controller.list(format).await,
            Commands::Quiz => self.quiz_controller.quiz().await,
            Commands::Recommend { answers, format } => {
                self.recommend_controller.recommend(answers, format).await
            }
            Commands::Chat {
                pet_name,
                pet_description,
                messages,
            } => {
                self.chat_controller
                    .chat(pet_name, pet_description, messages)
                    .await
            }
            Commands::Image {
                name,
                english_name,
                description,
                save,
            } => {
                self.image_controller
                    .image(name, english_name, description, save)
                    .await
            }
            Commands::Config { action } => self.route_config(action).await,
        }
    }

    async fn route_config(&self, action: ConfigAction) -> Result<String> {
        match action {
            ConfigAction::Show => self.config_controller.show().await,
            ConfigAction::Set {
                endpoint,
                api_key,
                model,
                system_prompt,
                default_prompt,
            } => {
                let system_prompt = if default_prompt {
                    Some(DEFAULT_SYSTEM_PROMPT.to_string())
                } else {
                    system_prompt
                };
                self.config_controller
                    .set(ConfigUpdate {
                        endpoint,
                        api_key,
                        model,
                        system_prompt,
                    })
                    .await
            }
            ConfigAction::Reset => self.config_controller.reset().await,
            ConfigAction::Test {
                endpoint,
                api_key,
                model,
            } => {
                self.config_controller
                    .test(ConfigUpdate {
                        endpoint,
                        api_key,
                        model,
                        system_prompt: None,
                    })
                    .await
            }
        }
    }
}
