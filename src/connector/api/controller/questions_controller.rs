use anyhow::Result;

use crate::cli::OutputFormat;
use crate::domain::{Question, QUESTIONS};

/// The questionnaire is static, so this controller needs no container.
pub struct QuestionsController;

impl QuestionsController {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(QUESTIONS)?),
            OutputFormat::Text => Ok(format_questions(QUESTIONS)),
        }
    }
}

impl Default for QuestionsController {
    fn default() -> Self {
        Self::new()
    }
}

fn format_questions(questions: &[Question]) -> String {
    let mut output = format!("{} questions:\n\n", questions.len());
    for (i, question) in questions.iter().enumerate() {
        output.push_str(&format!("{}. {} [{}]\n", i + 1, question.text, question.id));
        for option in question.options {
            output.push_str(&format!("   {:<14} {}\n", option.id, option.label));
        }
        output.push('\n');
    }
    output
}
