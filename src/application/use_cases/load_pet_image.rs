use std::sync::Arc;

use tracing::debug;

use crate::application::ResolveImageUseCase;
use crate::domain::{ImageLocator, WizardSession};

/// Lazily fills the session's image cache for one recommendation.
pub struct LoadPetImageUseCase {
    resolver: Arc<ResolveImageUseCase>,
}

impl LoadPetImageUseCase {
    pub fn new(resolver: Arc<ResolveImageUseCase>) -> Self {
        Self { resolver }
    }

    /// Returns the locator for `index`, resolving it only when the cache has
    /// no entry yet. A result that lands after a new pipeline run started is
    /// discarded.
    pub async fn execute(&self, session: &mut WizardSession, index: usize) -> Option<ImageLocator> {
        let Some(ticket) = session.begin_image(index) else {
            debug!("Image for recommendation {} already cached", index);
            return session.image(index).cloned();
        };

        let pet = session.recommendations().get(index)?.clone();
        let locator = self
            .resolver
            .execute(&pet.name, &pet.description, pet.english_name())
            .await?;

        if session.complete_image(ticket, locator.clone()) {
            Some(locator)
        } else {
            debug!("Discarding stale image for recommendation {}", index);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::application::ImageGenerator;
    use crate::domain::{CareGuide, DomainError, PetRecommendation};

    #[derive(Default)]
    struct CountingGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageGenerator for CountingGenerator {
        fn name(&self) -> &str {
            "counting"
        }

        async fn generate(&self, subject: &str) -> Result<ImageLocator, DomainError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ImageLocator::Url(format!("https://img/{subject}/{n}")))
        }
    }

    fn pet(name: &str, english: &str) -> PetRecommendation {
        PetRecommendation {
            name: name.to_string(),
            english_name: english.to_string(),
            species: "狗".to_string(),
            description: "desc".to_string(),
            match_reason: String::new(),
            care_level: String::new(),
            exercise_needs: String::new(),
            estimated_cost: String::new(),
            alternatives: vec![],
            care_guide: CareGuide {
                diet: String::new(),
                grooming: String::new(),
                exercise: String::new(),
                health: String::new(),
                training: String::new(),
                daily_schedule: String::new(),
            },
        }
    }

    fn setup() -> (Arc<CountingGenerator>, LoadPetImageUseCase, WizardSession) {
        let generator = Arc::new(CountingGenerator::default());
        let use_case =
            LoadPetImageUseCase::new(Arc::new(ResolveImageUseCase::new(generator.clone())));
        let mut session = WizardSession::new();
        session.begin_processing();
        session
            .apply_results(vec![pet("柯基", "Corgi"), pet("柴犬", "Shiba Inu")])
            .unwrap();
        (generator, use_case, session)
    }

    #[tokio::test]
    async fn second_request_for_same_index_is_skipped() {
        let (generator, use_case, mut session) = setup();

        let first = use_case.execute(&mut session, 0).await;
        let second = use_case.execute(&mut session, 0).await;

        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
        assert_eq!(first, Some(ImageLocator::Url("https://img/Corgi/0".into())));
    }

    #[tokio::test]
    async fn indices_resolve_independently() {
        let (generator, use_case, mut session) = setup();

        use_case.execute(&mut session, 1).await;
        use_case.execute(&mut session, 0).await;

        assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
        assert!(session.image(0).is_some());
        assert!(session.image(1).is_some());
    }

    #[tokio::test]
    async fn new_run_resolves_again() {
        let (generator, use_case, mut session) = setup();
        use_case.execute(&mut session, 0).await;

        session.begin_processing();
        assert!(session.images().is_empty());
        session.apply_results(vec![pet("金鱼", "Goldfish")]).unwrap();
        let locator = use_case.execute(&mut session, 0).await;

        assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
        assert_eq!(locator, Some(ImageLocator::Url("https://img/Goldfish/1".into())));
    }

    #[tokio::test]
    async fn out_of_range_index_resolves_nothing() {
        let (generator, use_case, mut session) = setup();
        assert!(use_case.execute(&mut session, 7).await.is_none());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }
}
