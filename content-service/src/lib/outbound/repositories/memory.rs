use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::content::errors::ContentError;
use crate::content::models::Journey;
use crate::content::models::JourneyFilter;
use crate::content::models::JourneyId;
use crate::content::models::Pagination;
use crate::content::models::Scenario;
use crate::content::models::ScenarioId;
use crate::content::models::Word;
use crate::content::models::WordId;
use crate::content::ports::JourneyRepository;
use crate::content::ports::ScenarioRepository;
use crate::content::ports::WordRepository;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    journeys: HashMap<JourneyId, Journey>,
    scenarios: HashMap<ScenarioId, Scenario>,
    words: HashMap<WordId, Word>,
}

/// Process-local store implementing every repository port.
///
/// Keeps the relational guarantees of the PostgreSQL schema: unique email,
/// parent existence on insert, cascading deletes. Used for tests and for
/// running the service without a database.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn remove_scenario_cascade(tables: &mut Tables, id: &ScenarioId) {
    tables.scenarios.remove(id);
    tables.words.retain(|_, w| w.scenario_id != *id);
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, user: User) -> Result<User, UserError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.tables.read().await.users.get(id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }
}

#[async_trait]
impl JourneyRepository for InMemoryStore {
    async fn create_journey(&self, journey: Journey) -> Result<Journey, ContentError> {
        self.tables
            .write()
            .await
            .journeys
            .insert(journey.id, journey.clone());
        Ok(journey)
    }

    async fn find_journey_by_id(&self, id: &JourneyId) -> Result<Option<Journey>, ContentError> {
        Ok(self.tables.read().await.journeys.get(id).cloned())
    }

    async fn list_journeys(
        &self,
        filter: &JourneyFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Journey>, u64), ContentError> {
        let tables = self.tables.read().await;
        let mut matching: Vec<&Journey> = tables
            .journeys
            .values()
            .filter(|j| filter.matches(j))
            .collect();
        matching.sort_by_key(|j| Reverse(j.created_at));

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .cloned()
            .collect();

        Ok((page, total))
    }

    async fn update_journey(&self, journey: Journey) -> Result<Journey, ContentError> {
        let mut tables = self.tables.write().await;
        match tables.journeys.get_mut(&journey.id) {
            Some(stored) => {
                *stored = journey.clone();
                Ok(journey)
            }
            None => Err(ContentError::JourneyNotFound(journey.id)),
        }
    }

    async fn delete_journey(&self, id: &JourneyId) -> Result<(), ContentError> {
        let mut tables = self.tables.write().await;
        if tables.journeys.remove(id).is_none() {
            return Err(ContentError::JourneyNotFound(*id));
        }

        let orphaned: Vec<ScenarioId> = tables
            .scenarios
            .values()
            .filter(|s| s.journey_id == *id)
            .map(|s| s.id)
            .collect();
        for scenario_id in &orphaned {
            remove_scenario_cascade(&mut tables, scenario_id);
        }

        Ok(())
    }
}

#[async_trait]
impl ScenarioRepository for InMemoryStore {
    async fn create_scenario(&self, scenario: Scenario) -> Result<Scenario, ContentError> {
        let mut tables = self.tables.write().await;
        if !tables.journeys.contains_key(&scenario.journey_id) {
            return Err(ContentError::JourneyNotFound(scenario.journey_id));
        }
        tables.scenarios.insert(scenario.id, scenario.clone());
        Ok(scenario)
    }

    async fn find_scenario_by_id(
        &self,
        id: &ScenarioId,
    ) -> Result<Option<Scenario>, ContentError> {
        Ok(self.tables.read().await.scenarios.get(id).cloned())
    }

    async fn list_scenarios_by_journey(
        &self,
        journey_id: &JourneyId,
    ) -> Result<Vec<Scenario>, ContentError> {
        let tables = self.tables.read().await;
        let mut scenarios: Vec<Scenario> = tables
            .scenarios
            .values()
            .filter(|s| s.journey_id == *journey_id)
            .cloned()
            .collect();
        scenarios.sort_by_key(|s| (s.display_order, s.created_at));
        Ok(scenarios)
    }

    async fn update_scenario(&self, scenario: Scenario) -> Result<Scenario, ContentError> {
        let mut tables = self.tables.write().await;
        match tables.scenarios.get_mut(&scenario.id) {
            Some(stored) => {
                *stored = scenario.clone();
                Ok(scenario)
            }
            None => Err(ContentError::ScenarioNotFound(scenario.id)),
        }
    }

    async fn delete_scenario(&self, id: &ScenarioId) -> Result<(), ContentError> {
        let mut tables = self.tables.write().await;
        if !tables.scenarios.contains_key(id) {
            return Err(ContentError::ScenarioNotFound(*id));
        }
        remove_scenario_cascade(&mut tables, id);
        Ok(())
    }
}

#[async_trait]
impl WordRepository for InMemoryStore {
    async fn create_word(&self, word: Word) -> Result<Word, ContentError> {
        let mut tables = self.tables.write().await;
        if !tables.scenarios.contains_key(&word.scenario_id) {
            return Err(ContentError::ScenarioNotFound(word.scenario_id));
        }
        tables.words.insert(word.id, word.clone());
        Ok(word)
    }

    async fn find_word_by_id(&self, id: &WordId) -> Result<Option<Word>, ContentError> {
        Ok(self.tables.read().await.words.get(id).cloned())
    }

    async fn list_words_by_scenario(
        &self,
        scenario_id: &ScenarioId,
    ) -> Result<Vec<Word>, ContentError> {
        let tables = self.tables.read().await;
        let mut words: Vec<Word> = tables
            .words
            .values()
            .filter(|w| w.scenario_id == *scenario_id)
            .cloned()
            .collect();
        words.sort_by_key(|w| (w.display_order, w.created_at));
        Ok(words)
    }

    async fn update_word(&self, word: Word) -> Result<Word, ContentError> {
        let mut tables = self.tables.write().await;
        match tables.words.get_mut(&word.id) {
            Some(stored) => {
                *stored = word.clone();
                Ok(word)
            }
            None => Err(ContentError::WordNotFound(word.id)),
        }
    }

    async fn delete_word(&self, id: &WordId) -> Result<(), ContentError> {
        match self.tables.write().await.words.remove(id) {
            Some(_) => Ok(()),
            None => Err(ContentError::WordNotFound(*id)),
        }
    }
}
