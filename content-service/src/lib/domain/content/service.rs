use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::ContentError;
use super::models::CreateJourneyCommand;
use super::models::CreateScenarioCommand;
use super::models::CreateWordCommand;
use super::models::Journey;
use super::models::JourneyDetail;
use super::models::JourneyFilter;
use super::models::JourneyId;
use super::models::JourneyPage;
use super::models::JourneyStatus;
use super::models::Pagination;
use super::models::Scenario;
use super::models::ScenarioDetail;
use super::models::ScenarioId;
use super::models::Word;
use super::models::WordId;
use super::ports::ContentServicePort;
use super::ports::JourneyRepository;
use super::ports::ScenarioRepository;
use super::ports::WordRepository;
use crate::domain::lookup::bounded;
use crate::domain::patch::merge;
use crate::domain::patch::PatchMap;

/// Concrete implementation of ContentServicePort.
///
/// Generic over the three repositories for testability. Reads are bounded by
/// `lookup_timeout`; writes are left to the store's own timeouts.
pub struct ContentService<JR, SR, WR>
where
    JR: JourneyRepository,
    SR: ScenarioRepository,
    WR: WordRepository,
{
    journeys: Arc<JR>,
    scenarios: Arc<SR>,
    words: Arc<WR>,
    lookup_timeout: Duration,
}

impl<JR, SR, WR> ContentService<JR, SR, WR>
where
    JR: JourneyRepository,
    SR: ScenarioRepository,
    WR: WordRepository,
{
    pub fn new(
        journeys: Arc<JR>,
        scenarios: Arc<SR>,
        words: Arc<WR>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            journeys,
            scenarios,
            words,
            lookup_timeout,
        }
    }

    async fn journey(&self, id: &JourneyId) -> Result<Journey, ContentError> {
        bounded(
            "journey lookup",
            self.lookup_timeout,
            self.journeys.find_journey_by_id(id),
        )
        .await?
        .ok_or(ContentError::JourneyNotFound(*id))
    }

    async fn scenario(&self, id: &ScenarioId) -> Result<Scenario, ContentError> {
        bounded(
            "scenario lookup",
            self.lookup_timeout,
            self.scenarios.find_scenario_by_id(id),
        )
        .await?
        .ok_or(ContentError::ScenarioNotFound(*id))
    }

    async fn word(&self, id: &WordId) -> Result<Word, ContentError> {
        bounded(
            "word lookup",
            self.lookup_timeout,
            self.words.find_word_by_id(id),
        )
        .await?
        .ok_or(ContentError::WordNotFound(*id))
    }

    async fn words_of(&self, scenario_id: &ScenarioId) -> Result<Vec<Word>, ContentError> {
        bounded(
            "word listing",
            self.lookup_timeout,
            self.words.list_words_by_scenario(scenario_id),
        )
        .await
    }
}

#[async_trait]
impl<JR, SR, WR> ContentServicePort for ContentService<JR, SR, WR>
where
    JR: JourneyRepository,
    SR: ScenarioRepository,
    WR: WordRepository,
{
    async fn create_journey(&self, command: CreateJourneyCommand) -> Result<Journey, ContentError> {
        let now = Utc::now();
        let journey = Journey {
            id: JourneyId::new(),
            title: command.title,
            description: command.description,
            source_language: command.source_language,
            target_language: command.target_language,
            status: JourneyStatus::Draft,
            created_by: command.created_by,
            created_at: now,
            updated_at: now,
        };

        let journey = self.journeys.create_journey(journey).await?;
        tracing::info!(journey_id = %journey.id, created_by = %journey.created_by, "Journey created");
        Ok(journey)
    }

    async fn get_journey(&self, id: &JourneyId) -> Result<JourneyDetail, ContentError> {
        let journey = self.journey(id).await?;
        let scenarios = bounded(
            "scenario listing",
            self.lookup_timeout,
            self.scenarios.list_scenarios_by_journey(id),
        )
        .await?;

        let mut word_count = 0;
        for scenario in &scenarios {
            word_count += self.words_of(&scenario.id).await?.len();
        }

        Ok(JourneyDetail {
            journey,
            scenarios,
            word_count,
        })
    }

    async fn list_journeys(
        &self,
        filter: JourneyFilter,
        pagination: Pagination,
    ) -> Result<JourneyPage, ContentError> {
        let (journeys, total) = bounded(
            "journey listing",
            self.lookup_timeout,
            self.journeys.list_journeys(&filter, &pagination),
        )
        .await?;

        Ok(JourneyPage {
            journeys,
            total,
            pagination,
        })
    }

    async fn update_journey(
        &self,
        id: &JourneyId,
        patch: &PatchMap,
    ) -> Result<Journey, ContentError> {
        let current = self.journey(id).await?;
        let updated = merge(&current, patch)?;
        self.journeys.update_journey(updated).await
    }

    async fn delete_journey(&self, id: &JourneyId) -> Result<(), ContentError> {
        self.journey(id).await?;
        self.journeys.delete_journey(id).await?;
        tracing::info!(journey_id = %id, "Journey deleted");
        Ok(())
    }

    async fn create_scenario(
        &self,
        command: CreateScenarioCommand,
    ) -> Result<Scenario, ContentError> {
        self.journey(&command.journey_id).await?;

        let now = Utc::now();
        let scenario = Scenario {
            id: ScenarioId::new(),
            journey_id: command.journey_id,
            title: command.title,
            description: command.description,
            display_order: command.display_order,
            created_at: now,
            updated_at: now,
        };

        self.scenarios.create_scenario(scenario).await
    }

    async fn get_scenario(&self, id: &ScenarioId) -> Result<ScenarioDetail, ContentError> {
        let scenario = self.scenario(id).await?;
        let words = self.words_of(id).await?;
        Ok(ScenarioDetail { scenario, words })
    }

    async fn update_scenario(
        &self,
        id: &ScenarioId,
        patch: &PatchMap,
    ) -> Result<Scenario, ContentError> {
        let current = self.scenario(id).await?;
        let updated = merge(&current, patch)?;
        self.scenarios.update_scenario(updated).await
    }

    async fn delete_scenario(&self, id: &ScenarioId) -> Result<(), ContentError> {
        self.scenario(id).await?;
        self.scenarios.delete_scenario(id).await
    }

    async fn create_word(&self, command: CreateWordCommand) -> Result<Word, ContentError> {
        self.scenario(&command.scenario_id).await?;

        let now = Utc::now();
        let word = Word {
            id: WordId::new(),
            scenario_id: command.scenario_id,
            target_text: command.target_text,
            source_text: command.source_text,
            display_order: command.display_order,
            image_url: command.image_url,
            audio_url: command.audio_url,
            generation_method: command.generation_method,
            created_at: now,
            updated_at: now,
        };

        self.words.create_word(word).await
    }

    async fn get_word(&self, id: &WordId) -> Result<Word, ContentError> {
        self.word(id).await
    }

    async fn update_word(&self, id: &WordId, patch: &PatchMap) -> Result<Word, ContentError> {
        let current = self.word(id).await?;
        let updated = merge(&current, patch)?;
        self.words.update_word(updated).await
    }

    async fn delete_word(&self, id: &WordId) -> Result<(), ContentError> {
        self.word(id).await?;
        self.words.delete_word(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;
    use serde_json::json;

    use super::*;
    use crate::domain::patch::PatchError;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestJourneyRepository {}

        #[async_trait]
        impl JourneyRepository for TestJourneyRepository {
            async fn create_journey(&self, journey: Journey) -> Result<Journey, ContentError>;
            async fn find_journey_by_id(&self, id: &JourneyId) -> Result<Option<Journey>, ContentError>;
            async fn list_journeys(
                &self,
                filter: &JourneyFilter,
                pagination: &Pagination,
            ) -> Result<(Vec<Journey>, u64), ContentError>;
            async fn update_journey(&self, journey: Journey) -> Result<Journey, ContentError>;
            async fn delete_journey(&self, id: &JourneyId) -> Result<(), ContentError>;
        }
    }

    mock! {
        pub TestScenarioRepository {}

        #[async_trait]
        impl ScenarioRepository for TestScenarioRepository {
            async fn create_scenario(&self, scenario: Scenario) -> Result<Scenario, ContentError>;
            async fn find_scenario_by_id(&self, id: &ScenarioId) -> Result<Option<Scenario>, ContentError>;
            async fn list_scenarios_by_journey(&self, journey_id: &JourneyId) -> Result<Vec<Scenario>, ContentError>;
            async fn update_scenario(&self, scenario: Scenario) -> Result<Scenario, ContentError>;
            async fn delete_scenario(&self, id: &ScenarioId) -> Result<(), ContentError>;
        }
    }

    mock! {
        pub TestWordRepository {}

        #[async_trait]
        impl WordRepository for TestWordRepository {
            async fn create_word(&self, word: Word) -> Result<Word, ContentError>;
            async fn find_word_by_id(&self, id: &WordId) -> Result<Option<Word>, ContentError>;
            async fn list_words_by_scenario(&self, scenario_id: &ScenarioId) -> Result<Vec<Word>, ContentError>;
            async fn update_word(&self, word: Word) -> Result<Word, ContentError>;
            async fn delete_word(&self, id: &WordId) -> Result<(), ContentError>;
        }
    }

    type TestService =
        ContentService<MockTestJourneyRepository, MockTestScenarioRepository, MockTestWordRepository>;

    fn service(
        journeys: MockTestJourneyRepository,
        scenarios: MockTestScenarioRepository,
        words: MockTestWordRepository,
    ) -> TestService {
        ContentService::new(
            Arc::new(journeys),
            Arc::new(scenarios),
            Arc::new(words),
            Duration::from_secs(1),
        )
    }

    fn journey(created_by: UserId) -> Journey {
        let now = Utc::now();
        Journey {
            id: JourneyId::new(),
            title: "Basics".to_string(),
            description: String::new(),
            source_language: "en".to_string(),
            target_language: "es".to_string(),
            status: JourneyStatus::Draft,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    fn scenario(journey_id: JourneyId, display_order: i32) -> Scenario {
        let now = Utc::now();
        Scenario {
            id: ScenarioId::new(),
            journey_id,
            title: format!("Scenario {}", display_order),
            description: String::new(),
            display_order,
            created_at: now,
            updated_at: now,
        }
    }

    fn word(scenario_id: ScenarioId) -> Word {
        let now = Utc::now();
        Word {
            id: WordId::new(),
            scenario_id,
            target_text: "hola".to_string(),
            source_text: "hello".to_string(),
            display_order: 1,
            image_url: None,
            audio_url: None,
            generation_method: Default::default(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_journey_starts_as_draft_owned_by_caller() {
        let mut journeys = MockTestJourneyRepository::new();
        let creator = UserId::new();

        journeys
            .expect_create_journey()
            .withf(move |j| j.status == JourneyStatus::Draft && j.created_by == creator)
            .times(1)
            .returning(|j| Ok(j));

        let service = service(
            journeys,
            MockTestScenarioRepository::new(),
            MockTestWordRepository::new(),
        );
        let command = CreateJourneyCommand::new(
            "Basics".to_string(),
            String::new(),
            "en".to_string(),
            "es".to_string(),
            creator,
        )
        .unwrap();

        let created = service.create_journey(command).await.unwrap();
        assert_eq!(created.created_by, creator);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_get_journey_counts_scenarios_and_words() {
        let mut journeys = MockTestJourneyRepository::new();
        let mut scenarios = MockTestScenarioRepository::new();
        let mut words = MockTestWordRepository::new();

        let j = journey(UserId::new());
        let journey_id = j.id;
        let s1 = scenario(journey_id, 1);
        let s2 = scenario(journey_id, 2);
        let s1_id = s1.id;

        journeys
            .expect_find_journey_by_id()
            .with(eq(journey_id))
            .returning(move |_| Ok(Some(j.clone())));
        scenarios
            .expect_list_scenarios_by_journey()
            .returning(move |_| Ok(vec![s1.clone(), s2.clone()]));
        words
            .expect_list_words_by_scenario()
            .times(2)
            .returning(move |id| {
                if *id == s1_id {
                    Ok(vec![word(*id), word(*id)])
                } else {
                    Ok(vec![word(*id)])
                }
            });

        let detail = service(journeys, scenarios, words)
            .get_journey(&journey_id)
            .await
            .unwrap();

        assert_eq!(detail.scenario_count(), 2);
        assert_eq!(detail.word_count, 3);
    }

    #[tokio::test]
    async fn test_update_journey_invalid_status_is_not_stored() {
        let mut journeys = MockTestJourneyRepository::new();
        let j = journey(UserId::new());
        let journey_id = j.id;

        journeys
            .expect_find_journey_by_id()
            .returning(move |_| Ok(Some(j.clone())));
        journeys.expect_update_journey().times(0);

        let patch: PatchMap = serde_json::from_value(json!({"status": "bogus"})).unwrap();
        let result = service(
            journeys,
            MockTestScenarioRepository::new(),
            MockTestWordRepository::new(),
        )
        .update_journey(&journey_id, &patch)
        .await;

        assert!(matches!(
            result,
            Err(ContentError::Patch(PatchError::OutOfDomain { .. }))
        ));
    }

    #[tokio::test]
    async fn test_update_journey_persists_merged_entity() {
        let mut journeys = MockTestJourneyRepository::new();
        let j = journey(UserId::new());
        let journey_id = j.id;

        journeys
            .expect_find_journey_by_id()
            .returning(move |_| Ok(Some(j.clone())));
        journeys
            .expect_update_journey()
            .withf(move |j| j.id == journey_id && j.status == JourneyStatus::Published)
            .times(1)
            .returning(|j| Ok(j));

        let patch: PatchMap =
            serde_json::from_value(json!({"status": "published", "id": "attacker-id"})).unwrap();
        let updated = service(
            journeys,
            MockTestScenarioRepository::new(),
            MockTestWordRepository::new(),
        )
        .update_journey(&journey_id, &patch)
        .await
        .unwrap();

        assert_eq!(updated.id, journey_id);
    }

    #[tokio::test]
    async fn test_create_scenario_requires_existing_journey() {
        let mut journeys = MockTestJourneyRepository::new();
        let mut scenarios = MockTestScenarioRepository::new();

        journeys
            .expect_find_journey_by_id()
            .returning(|_| Ok(None));
        scenarios.expect_create_scenario().times(0);

        let command =
            CreateScenarioCommand::new(JourneyId::new(), "Market".to_string(), String::new(), 1)
                .unwrap();
        let result = service(journeys, scenarios, MockTestWordRepository::new())
            .create_scenario(command)
            .await;

        assert!(matches!(result, Err(ContentError::JourneyNotFound(_))));
    }

    #[tokio::test]
    async fn test_create_word_requires_existing_scenario() {
        let mut scenarios = MockTestScenarioRepository::new();
        let mut words = MockTestWordRepository::new();

        scenarios
            .expect_find_scenario_by_id()
            .returning(|_| Ok(None));
        words.expect_create_word().times(0);

        let command = CreateWordCommand::new(
            ScenarioId::new(),
            "hola".to_string(),
            "hello".to_string(),
            1,
            None,
            None,
            Default::default(),
        )
        .unwrap();
        let result = service(MockTestJourneyRepository::new(), scenarios, words)
            .create_word(command)
            .await;

        assert!(matches!(result, Err(ContentError::ScenarioNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_word_is_not_found() {
        let mut words = MockTestWordRepository::new();
        words.expect_find_word_by_id().returning(|_| Ok(None));
        words.expect_delete_word().times(0);

        let result = service(
            MockTestJourneyRepository::new(),
            MockTestScenarioRepository::new(),
            words,
        )
        .delete_word(&WordId::new())
        .await;

        assert!(matches!(result, Err(ContentError::WordNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_journeys_passes_normalized_pagination() {
        let mut journeys = MockTestJourneyRepository::new();
        journeys
            .expect_list_journeys()
            .withf(|filter, pagination| {
                filter.status == Some(JourneyStatus::Published)
                    && pagination.page() == 2
                    && pagination.limit() == 20
            })
            .times(1)
            .returning(|_, _| Ok((vec![], 25)));

        let page = service(
            journeys,
            MockTestScenarioRepository::new(),
            MockTestWordRepository::new(),
        )
        .list_journeys(
            JourneyFilter {
                status: Some(JourneyStatus::Published),
                created_by: None,
            },
            Pagination::new(Some(2), Some(500)),
        )
        .await
        .unwrap();

        assert_eq!(page.total, 25);
        assert_eq!(page.pagination.limit(), 20);
    }
}
