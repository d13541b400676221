use serde::{Deserialize, Serialize};

/// Reply used when the chat provider cannot be reached or errors out.
pub const CHAT_FAILURE_REPLY: &str = "抱歉，连接聊天服务失败。";

/// Reply used when the provider answers but the reply text is empty.
pub const CHAT_EMPTY_REPLY: &str = "抱歉，我走神了，请再说一遍。";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// A non-streaming chat completion request. The model name is supplied by
/// whichever provider serves the request.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Chat history with the assistant for a single recommended pet.
#[derive(Debug, Clone)]
pub struct Conversation {
    pet_name: String,
    pet_description: String,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Starts a conversation seeded with the assistant's greeting.
    pub fn new(pet_name: impl Into<String>, pet_description: impl Into<String>) -> Self {
        let pet_name = pet_name.into();
        let greeting = format!(
            "你好！我是你的专属 AI 助手。关于{pet_name}，你有什么想问的吗？比如“它平时喜欢吃什么？”或“需要准备什么生活用品？”"
        );
        Self {
            pet_name,
            pet_description: pet_description.into(),
            messages: vec![ChatMessage::assistant(greeting)],
        }
    }

    pub fn pet_name(&self) -> &str {
        &self.pet_name
    }

    pub fn pet_description(&self) -> &str {
        &self.pet_description
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    pub fn last_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::Assistant)
            .map(|m| m.content.as_str())
    }
}
