use async_trait::async_trait;

use crate::content::errors::ContentError;
use crate::content::models::CreateJourneyCommand;
use crate::content::models::CreateScenarioCommand;
use crate::content::models::CreateWordCommand;
use crate::content::models::Journey;
use crate::content::models::JourneyDetail;
use crate::content::models::JourneyFilter;
use crate::content::models::JourneyId;
use crate::content::models::JourneyPage;
use crate::content::models::Pagination;
use crate::content::models::Scenario;
use crate::content::models::ScenarioDetail;
use crate::content::models::ScenarioId;
use crate::content::models::Word;
use crate::content::models::WordId;
use crate::domain::patch::PatchMap;

/// Port for journey, scenario and word operations.
///
/// Authorization is not checked here; callers gate mutations first.
#[async_trait]
pub trait ContentServicePort: Send + Sync + 'static {
    /// Create a draft journey owned by `command.created_by`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_journey(&self, command: CreateJourneyCommand) -> Result<Journey, ContentError>;

    /// Retrieve a journey with its scenarios and word count.
    ///
    /// # Errors
    /// * `JourneyNotFound` - Journey does not exist
    async fn get_journey(&self, id: &JourneyId) -> Result<JourneyDetail, ContentError>;

    /// List journeys matching `filter`, newest first.
    async fn list_journeys(
        &self,
        filter: JourneyFilter,
        pagination: Pagination,
    ) -> Result<JourneyPage, ContentError>;

    /// Apply a partial update to a journey.
    ///
    /// # Errors
    /// * `JourneyNotFound` - Journey does not exist
    /// * `Patch` - A recognized field has an invalid value; nothing is stored
    async fn update_journey(&self, id: &JourneyId, patch: &PatchMap)
        -> Result<Journey, ContentError>;

    /// Delete a journey together with its scenarios and their words.
    ///
    /// # Errors
    /// * `JourneyNotFound` - Journey does not exist
    async fn delete_journey(&self, id: &JourneyId) -> Result<(), ContentError>;

    /// Create a scenario under an existing journey.
    ///
    /// # Errors
    /// * `JourneyNotFound` - Parent journey does not exist
    async fn create_scenario(&self, command: CreateScenarioCommand)
        -> Result<Scenario, ContentError>;

    /// Retrieve a scenario with its words.
    ///
    /// # Errors
    /// * `ScenarioNotFound` - Scenario does not exist
    async fn get_scenario(&self, id: &ScenarioId) -> Result<ScenarioDetail, ContentError>;

    /// # Errors
    /// * `ScenarioNotFound` - Scenario does not exist
    /// * `Patch` - A recognized field has an invalid value; nothing is stored
    async fn update_scenario(
        &self,
        id: &ScenarioId,
        patch: &PatchMap,
    ) -> Result<Scenario, ContentError>;

    /// Delete a scenario together with its words.
    async fn delete_scenario(&self, id: &ScenarioId) -> Result<(), ContentError>;

    /// Create a word under an existing scenario.
    ///
    /// # Errors
    /// * `ScenarioNotFound` - Parent scenario does not exist
    async fn create_word(&self, command: CreateWordCommand) -> Result<Word, ContentError>;

    async fn get_word(&self, id: &WordId) -> Result<Word, ContentError>;

    async fn update_word(&self, id: &WordId, patch: &PatchMap) -> Result<Word, ContentError>;

    async fn delete_word(&self, id: &WordId) -> Result<(), ContentError>;
}

/// Persistence operations for journeys.
#[async_trait]
pub trait JourneyRepository: Send + Sync + 'static {
    async fn create_journey(&self, journey: Journey) -> Result<Journey, ContentError>;

    /// # Returns
    /// Optional journey (None if not found)
    async fn find_journey_by_id(&self, id: &JourneyId) -> Result<Option<Journey>, ContentError>;

    /// # Returns
    /// One page of matching journeys ordered by `created_at` descending, and
    /// the total number of matches
    async fn list_journeys(
        &self,
        filter: &JourneyFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Journey>, u64), ContentError>;

    /// # Errors
    /// * `JourneyNotFound` - Journey does not exist
    async fn update_journey(&self, journey: Journey) -> Result<Journey, ContentError>;

    /// Delete a journey and everything below it.
    ///
    /// # Errors
    /// * `JourneyNotFound` - Journey does not exist
    async fn delete_journey(&self, id: &JourneyId) -> Result<(), ContentError>;
}

/// Persistence operations for scenarios.
#[async_trait]
pub trait ScenarioRepository: Send + Sync + 'static {
    async fn create_scenario(&self, scenario: Scenario) -> Result<Scenario, ContentError>;

    async fn find_scenario_by_id(&self, id: &ScenarioId)
        -> Result<Option<Scenario>, ContentError>;

    /// # Returns
    /// Scenarios of the journey ordered by `display_order`
    async fn list_scenarios_by_journey(
        &self,
        journey_id: &JourneyId,
    ) -> Result<Vec<Scenario>, ContentError>;

    async fn update_scenario(&self, scenario: Scenario) -> Result<Scenario, ContentError>;

    /// Delete a scenario and its words.
    async fn delete_scenario(&self, id: &ScenarioId) -> Result<(), ContentError>;
}

/// Persistence operations for words.
#[async_trait]
pub trait WordRepository: Send + Sync + 'static {
    async fn create_word(&self, word: Word) -> Result<Word, ContentError>;

    async fn find_word_by_id(&self, id: &WordId) -> Result<Option<Word>, ContentError>;

    /// # Returns
    /// Words of the scenario ordered by `display_order`
    async fn list_words_by_scenario(
        &self,
        scenario_id: &ScenarioId,
    ) -> Result<Vec<Word>, ContentError>;

    async fn update_word(&self, word: Word) -> Result<Word, ContentError>;

    async fn delete_word(&self, id: &WordId) -> Result<(), ContentError>;
}
