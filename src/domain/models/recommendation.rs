use serde::{Deserialize, Serialize};

/// A similar breed suggested alongside a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativePet {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareGuide {
    pub diet: String,
    pub grooming: String,
    pub exercise: String,
    pub health: String,
    pub training: String,
    pub daily_schedule: String,
}

/// One pet recommendation as returned by the model.
///
/// Only produced by parsing a model response; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRecommendation {
    pub name: String,
    /// Optional in practice: models sometimes omit it, in which case image
    /// prompts fall back to `name`.
    #[serde(default)]
    pub english_name: String,
    pub species: String,
    pub description: String,
    pub match_reason: String,
    pub care_level: String,
    pub exercise_needs: String,
    pub estimated_cost: String,
    #[serde(default)]
    pub alternatives: Vec<AlternativePet>,
    pub care_guide: CareGuide,
}

impl PetRecommendation {
    pub fn english_name(&self) -> Option<&str> {
        let trimmed = self.english_name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Name used for image prompts.
    pub fn subject_name(&self) -> &str {
        self.english_name().unwrap_or(&self.name)
    }
}

/// Top-level shape the model is instructed to return.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<PetRecommendation>,
}
