use anyhow::Result;
use tracing::warn;

use crate::domain::{
    find_question, AppState, Conversation, Question, WizardSession, WizardStep, QUESTIONS,
};

use super::super::Container;
use super::chat_controller::chat_loop;
use super::console::{spinner, Console};
use super::image_controller::describe_image;
use super::recommend_controller::{format_details, format_recommendations};

const RESULTS_MENU: &str =
    "\n[number] select  [d] details  [i] image  [c] chat  [e] edit answers  [q] quit\n> ";
const ERROR_MENU: &str = "\n[r] retry  [e] edit answers  [q] quit\n> ";

pub struct QuizController<'a> {
    container: &'a Container,
}

impl<'a> QuizController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn quiz(&self) -> Result<String> {
        let mut console = Console::stdin();
        let mut session = WizardSession::new();

        println!("欢迎使用 PetMatch！回答 {} 个问题，找到最适合您的宠物。", QUESTIONS.len());
        session.start();
        if !self.ask_questions(&mut console, &mut session).await? {
            return Ok("Quiz cancelled.".to_string());
        }
        self.run_pipeline(&mut session).await?;

        loop {
            let prompt = match session.state() {
                AppState::Results => {
                    println!(
                        "\n{}",
                        format_recommendations(
                            session.recommendations(),
                            Some(session.selected_index())
                        )
                    );
                    RESULTS_MENU
                }
                AppState::Error => {
                    println!("\n{}", session.error().unwrap_or("Unknown error"));
                    ERROR_MENU
                }
                _ => break,
            };

            let Some(command) = console.ask(prompt).await? else {
                break;
            };

            match (session.state(), command.as_str()) {
                (_, "q") => break,
                (_, "e") => {
                    if !self.refine(&mut console, &mut session).await? {
                        break;
                    }
                    self.run_pipeline(&mut session).await?;
                }
                (AppState::Error, "r") => self.run_pipeline(&mut session).await?,
                (AppState::Results, "d") => {
                    if let Some(pet) = session.selected() {
                        println!("\n{}", format_details(pet));
                    }
                }
                (AppState::Results, "i") => {
                    let index = session.selected_index();
                    self.show_image(&mut session, index).await?;
                }
                (AppState::Results, "c") => self.chat(&mut console, &session).await?,
                (AppState::Results, other) => match other.parse::<usize>() {
                    Ok(n) if n >= 1 => {
                        if let Err(e) = self.select(&mut session, n - 1).await {
                            println!("{e}");
                        }
                    }
                    _ => println!("Unknown command: {other}"),
                },
                (_, other) => println!("Unknown command: {other}"),
            }
        }

        session.go_home();
        Ok("再见！".to_string())
    }

    /// Walks the questionnaire. `false` when input ends before the last
    /// answer.
    async fn ask_questions(
        &self,
        console: &mut Console,
        session: &mut WizardSession,
    ) -> Result<bool> {
        while let Some(question) = session.current_question() {
            println!(
                "\n[{}/{}] {}",
                session.current_question_index() + 1,
                QUESTIONS.len(),
                question.text
            );
            print_options(question);

            let Some(input) = console.ask("> ").await? else {
                return Ok(false);
            };
            let option_id = option_from_input(question, &input);
            match session.answer(option_id) {
                Ok(WizardStep::NextQuestion(_)) => {}
                Ok(WizardStep::Completed) => return Ok(true),
                Err(e) => println!("{e}"),
            }
        }
        Ok(true)
    }

    /// Lets the user change individual answers. `false` when input ends.
    async fn refine(&self, console: &mut Console, session: &mut WizardSession) -> Result<bool> {
        session.begin_refining();
        loop {
            println!("\n当前回答:");
            for (i, question) in QUESTIONS.iter().enumerate() {
                let current = session
                    .answers()
                    .get(question.id)
                    .map(|a| a.option_label())
                    .unwrap_or("-");
                println!("  {}. {} {}", i + 1, question.text, current);
            }

            let Some(input) = console
                .ask("\nQuestion number to change (empty to re-run) > ")
                .await?
            else {
                return Ok(false);
            };
            if input.is_empty() {
                return Ok(true);
            }

            let question = input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| QUESTIONS.get(i))
                .or_else(|| find_question(&input));
            let Some(question) = question else {
                println!("Unknown question: {input}");
                continue;
            };

            println!("\n{}", question.text);
            print_options(question);
            let Some(choice) = console.ask("> ").await? else {
                return Ok(false);
            };
            if let Err(e) = session.refine(question.id, option_from_input(question, &choice)) {
                println!("{e}");
            }
        }
    }

    /// Runs the recommendation pipeline for the session's answers, then
    /// loads the image of the first recommendation.
    pub async fn run_pipeline(&self, session: &mut WizardSession) -> Result<()> {
        session.begin_processing();
        let progress = spinner("正在为您匹配最合适的宠物...")?;
        let result = self
            .container
            .recommend_use_case()
            .execute(session.answers())
            .await;
        progress.finish_and_clear();

        match result {
            Ok(recommendations) => match session.apply_results(recommendations) {
                Ok(()) => self.show_image(session, 0).await?,
                Err(e) => warn!("{e}"),
            },
            Err(e) => session.fail(e.to_string()),
        }
        Ok(())
    }

    /// Makes `index` the active recommendation and loads its image unless
    /// it is cached.
    pub async fn select(&self, session: &mut WizardSession, index: usize) -> Result<()> {
        let pet = session.select(index)?;
        println!("\n{}", format_details(pet));
        self.show_image(session, index).await
    }

    async fn show_image(&self, session: &mut WizardSession, index: usize) -> Result<()> {
        let cached = session.image(index).is_some();
        let progress = (!cached).then(|| spinner("正在生成宠物图片...")).transpose()?;
        let locator = self
            .container
            .load_image_use_case()
            .execute(session, index)
            .await;
        if let Some(progress) = progress {
            progress.finish_and_clear();
        }

        match locator {
            Some(locator) => println!("\n{}", describe_image(&locator)),
            None => println!("\nNo image available."),
        }
        Ok(())
    }

    async fn chat(&self, console: &mut Console, session: &WizardSession) -> Result<()> {
        let Some(pet) = session.selected() else {
            return Ok(());
        };
        let mut conversation = Conversation::new(pet.name.clone(), pet.description.clone());
        chat_loop(&self.container.chat_use_case(), console, &mut conversation).await
    }
}

fn print_options(question: &Question) {
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}. {}", i + 1, option.label);
    }
}

/// Accepts a 1-based option number or an option id.
fn option_from_input<'q>(question: &'q Question, input: &'q str) -> &'q str {
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| question.options.get(i))
        .map(|o| o.id)
        .unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_accepts_number_or_id() {
        let question = &QUESTIONS[0];
        assert_eq!(option_from_input(question, "1"), question.options[0].id);
        assert_eq!(option_from_input(question, "small_apt"), "small_apt");
        assert_eq!(option_from_input(question, "0"), "0");
        assert_eq!(option_from_input(question, "99"), "99");
    }
}
