use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

use crate::application::{ConfigProvider, ProviderClient};
use crate::domain::{AnswerSet, DomainError, PetRecommendation, ProviderConfig};

/// The answers-to-recommendations pipeline.
///
/// Every failure, whatever its cause, surfaces as
/// [`DomainError::RecommendationFailed`] wrapping that cause. The model's
/// list is returned as-is: no ranking, reordering or deduplication.
pub struct RecommendPetsUseCase {
    client: Arc<ProviderClient>,
    config_provider: Arc<dyn ConfigProvider>,
}

impl RecommendPetsUseCase {
    pub fn new(client: Arc<ProviderClient>, config_provider: Arc<dyn ConfigProvider>) -> Self {
        Self {
            client,
            config_provider,
        }
    }

    /// Runs the pipeline with the settings stored right now.
    pub async fn execute(&self, answers: &AnswerSet) -> Result<Vec<PetRecommendation>, DomainError> {
        let config = self
            .config_provider
            .load()
            .await
            .map_err(DomainError::recommendation_failed)?;
        self.run(answers, &config).await
    }

    pub async fn run(
        &self,
        answers: &AnswerSet,
        config: &ProviderConfig,
    ) -> Result<Vec<PetRecommendation>, DomainError> {
        if answers.is_empty() {
            return Err(DomainError::recommendation_failed(
                DomainError::invalid_input("no answers were provided"),
            ));
        }

        info!("Processing {} answers", answers.len());
        let start_time = Instant::now();

        let result = self
            .client
            .get_recommendations(answers, config)
            .await
            .map_err(|e| {
                error!("Recommendation retrieval failed: {e}");
                DomainError::recommendation_failed(e)
            })?;

        info!(
            "Pipeline finished with {} recommendations in {:.2}s",
            result.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(result)
    }
}
