use serde::{Deserialize, Serialize};

use super::{
    find_question, Answer, AnswerSet, ImageCache, ImageLocator, ImageTicket, PetRecommendation,
    Question, QUESTIONS,
};
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    Welcome,
    Questionnaire,
    Processing,
    Results,
    Refining,
    Error,
}

/// What happened after an answer was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    NextQuestion(usize),
    Completed,
}

/// State of one questionnaire run and its results.
///
/// The recommendation list and the image cache share positional indexing:
/// every new run clears the cache before anything else is written to it.
#[derive(Debug)]
pub struct WizardSession {
    state: AppState,
    current_question: usize,
    answers: AnswerSet,
    recommendations: Vec<PetRecommendation>,
    selected: usize,
    images: ImageCache,
    error: Option<String>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            state: AppState::Welcome,
            current_question: 0,
            answers: AnswerSet::new(),
            recommendations: Vec::new(),
            selected: 0,
            images: ImageCache::new(),
            error: None,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn recommendations(&self) -> &[PetRecommendation] {
        &self.recommendations
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&PetRecommendation> {
        self.recommendations.get(self.selected)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    pub fn image(&self, index: usize) -> Option<&ImageLocator> {
        self.images.get(index)
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            AppState::Questionnaire => QUESTIONS.get(self.current_question),
            _ => None,
        }
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question
    }

    pub fn go_home(&mut self) {
        self.state = AppState::Welcome;
    }

    /// Begins a fresh questionnaire, discarding earlier answers.
    pub fn start(&mut self) {
        self.state = AppState::Questionnaire;
        self.current_question = 0;
        self.answers.clear();
        self.error = None;
    }

    /// Records the chosen option for the current question and advances.
    pub fn answer(&mut self, option_id: &str) -> Result<WizardStep, DomainError> {
        let question = self
            .current_question()
            .ok_or_else(|| DomainError::invalid_input("no question is awaiting an answer"))?;
        let answer = question.answer(option_id).ok_or_else(|| {
            DomainError::invalid_input(format!(
                "unknown option '{option_id}' for question '{}'",
                question.id
            ))
        })?;

        self.answers.record(answer);

        if self.current_question + 1 < QUESTIONS.len() {
            self.current_question += 1;
            Ok(WizardStep::NextQuestion(self.current_question))
        } else {
            Ok(WizardStep::Completed)
        }
    }

    pub fn begin_refining(&mut self) {
        self.state = AppState::Refining;
    }

    /// Changes the answer to `question_id`, keeping the answer order.
    pub fn refine(&mut self, question_id: &str, option_id: &str) -> Result<(), DomainError> {
        let question = find_question(question_id)
            .ok_or_else(|| DomainError::invalid_input(format!("unknown question '{question_id}'")))?;
        let answer: Answer = question.answer(option_id).ok_or_else(|| {
            DomainError::invalid_input(format!(
                "unknown option '{option_id}' for question '{question_id}'"
            ))
        })?;
        self.answers.replace(answer);
        Ok(())
    }

    /// Enters the processing state for a new pipeline run. Clears all cached
    /// images and invalidates outstanding image tickets.
    pub fn begin_processing(&mut self) {
        self.state = AppState::Processing;
        self.images.reset();
        self.selected = 0;
        self.error = None;
    }

    /// Installs a pipeline result. An empty list has no valid rendering and
    /// moves the session to the error state instead.
    pub fn apply_results(&mut self, recommendations: Vec<PetRecommendation>) -> Result<(), DomainError> {
        if recommendations.is_empty() {
            let err = DomainError::recommendation_failed(DomainError::structured_output(
                "the model returned no recommendations",
            ));
            self.fail(err.to_string());
            return Err(err);
        }
        self.recommendations = recommendations;
        self.selected = 0;
        self.state = AppState::Results;
        Ok(())
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.state = AppState::Error;
    }

    pub fn select(&mut self, index: usize) -> Result<&PetRecommendation, DomainError> {
        if index >= self.recommendations.len() {
            return Err(DomainError::invalid_input(format!(
                "no recommendation at position {}",
                index + 1
            )));
        }
        self.selected = index;
        Ok(&self.recommendations[index])
    }

    /// Ticket for resolving the image at `index`, or `None` when cached or
    /// out of range.
    pub fn begin_image(&self, index: usize) -> Option<ImageTicket> {
        if index >= self.recommendations.len() {
            return None;
        }
        self.images.begin(index)
    }

    pub fn complete_image(&mut self, ticket: ImageTicket, locator: ImageLocator) -> bool {
        self.images.complete(ticket, locator)
    }
}
