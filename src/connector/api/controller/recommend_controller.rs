use anyhow::Result;

use crate::cli::OutputFormat;
use crate::domain::{find_question, Answer, AnswerSet, DomainError, PetRecommendation};

use super::super::Container;
use super::console::spinner;

pub struct RecommendController<'a> {
    container: &'a Container,
}

impl<'a> RecommendController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn recommend(&self, answers: Vec<String>, format: OutputFormat) -> Result<String> {
        let mut answer_set = AnswerSet::new();
        for raw in &answers {
            answer_set.record(parse_answer(raw)?);
        }

        let progress = spinner("正在为您匹配最合适的宠物...")?;
        let result = self.container.recommend_use_case().execute(&answer_set).await;
        progress.finish_and_clear();
        let recommendations = result?;
        if recommendations.is_empty() {
            return Err(DomainError::recommendation_failed(DomainError::structured_output(
                "the model returned no recommendations",
            ))
            .into());
        }

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&recommendations)?),
            OutputFormat::Text => Ok(format_recommendations(&recommendations, None)),
        }
    }
}

/// Parses `<question-id>=<option-id>` against the catalog.
pub fn parse_answer(raw: &str) -> Result<Answer, DomainError> {
    let (question_id, option_id) = raw.split_once('=').ok_or_else(|| {
        DomainError::invalid_input(format!("expected QUESTION=OPTION, got '{raw}'"))
    })?;
    let (question_id, option_id) = (question_id.trim(), option_id.trim());

    let question = find_question(question_id)
        .ok_or_else(|| DomainError::invalid_input(format!("unknown question '{question_id}'")))?;
    question.answer(option_id).ok_or_else(|| {
        DomainError::invalid_input(format!(
            "unknown option '{option_id}' for question '{question_id}'"
        ))
    })
}

/// Numbered summary. `selected` marks the active entry.
pub fn format_recommendations(pets: &[PetRecommendation], selected: Option<usize>) -> String {
    let mut output = format!("Found {} recommendations:\n\n", pets.len());
    for (i, pet) in pets.iter().enumerate() {
        let marker = if selected == Some(i) { '*' } else { ' ' };
        output.push_str(&format!("{marker}{}. {}", i + 1, pet.name));
        if let Some(english) = pet.english_name() {
            output.push_str(&format!(" ({english})"));
        }
        output.push_str(&format!(" - {}\n", pet.species));
        output.push_str(&format!("   {}\n", pet.description));
        output.push_str(&format!(
            "   护理难度: {} | 运动需求: {} | 月开销: {}\n\n",
            pet.care_level, pet.exercise_needs, pet.estimated_cost
        ));
    }

    if selected.is_none() {
        if let Some(first) = pets.first() {
            output.push_str(&format_details(first));
        }
    }

    output
}

pub fn format_details(pet: &PetRecommendation) -> String {
    let guide = &pet.care_guide;
    let mut output = format!("== {} ==\n", pet.name);
    output.push_str(&format!("匹配理由: {}\n\n", pet.match_reason));
    output.push_str("饲养指南:\n");
    for (label, text) in [
        ("饮食", &guide.diet),
        ("美容", &guide.grooming),
        ("运动", &guide.exercise),
        ("健康", &guide.health),
        ("训练", &guide.training),
        ("作息", &guide.daily_schedule),
    ] {
        output.push_str(&format!("  {label}: {text}\n"));
    }

    if !pet.alternatives.is_empty() {
        output.push_str("\n类似品种:\n");
        for alternative in &pet.alternatives {
            output.push_str(&format!("  - {}: {}\n", alternative.name, alternative.reason));
        }
    }

    output
}
