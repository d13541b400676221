use anyhow::Result;

use crate::application::ChatAboutPetUseCase;
use crate::domain::Conversation;

use super::super::Container;
use super::console::{spinner, Console};

const EXIT_WORDS: [&str; 3] = ["exit", "quit", "/q"];

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// With `messages`, sends them in order and returns the transcript.
    /// Without, chats interactively on stdin.
    pub async fn chat(
        &self,
        pet_name: String,
        pet_description: String,
        messages: Vec<String>,
    ) -> Result<String> {
        let use_case = self.container.chat_use_case();
        let mut conversation = Conversation::new(pet_name, pet_description);

        if messages.is_empty() {
            chat_loop(&use_case, &mut Console::stdin(), &mut conversation).await?;
            return Ok(String::new());
        }

        for message in &messages {
            use_case.execute(&mut conversation, message).await;
        }
        Ok(format_transcript(&conversation))
    }
}

/// Interactive chat until an exit word or end of input.
pub async fn chat_loop(
    use_case: &ChatAboutPetUseCase,
    console: &mut Console,
    conversation: &mut Conversation,
) -> Result<()> {
    if let Some(greeting) = conversation.last_reply() {
        println!("\n{greeting}");
    }
    println!("(type 'exit' to leave the chat)");

    while let Some(line) = console.ask("\n> ").await? {
        if line.is_empty() {
            continue;
        }
        if EXIT_WORDS.contains(&line.as_str()) {
            break;
        }
        let progress = spinner("...")?;
        let reply = use_case.execute(conversation, &line).await;
        progress.finish_and_clear();
        println!("{reply}");
    }
    Ok(())
}

fn format_transcript(conversation: &Conversation) -> String {
    conversation
        .messages()
        .iter()
        .map(|m| format!("[{}] {}", m.role.as_str(), m.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}
