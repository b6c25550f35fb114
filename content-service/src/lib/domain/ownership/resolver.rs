use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::errors::OwnershipError;
use super::models::ResourceRef;
use super::ports::OwnershipPort;
use crate::content::models::JourneyId;
use crate::content::models::ScenarioId;
use crate::content::ports::JourneyRepository;
use crate::content::ports::ScenarioRepository;
use crate::content::ports::WordRepository;
use crate::domain::lookup::bounded;
use crate::domain::user::models::Identity;
use crate::domain::user::models::UserId;

/// Walks a resource up to its root journey and compares the creator.
///
/// Read-only. A word costs three lookups, a scenario two, a journey one.
pub struct OwnershipResolver<JR, SR, WR>
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

impl<JR, SR, WR> OwnershipResolver<JR, SR, WR>
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

    /// Resolve the creator of the journey that roots `resource`.
    ///
    /// # Errors
    /// * `NotFound` - Some hop on the chain is missing
    pub async fn root_creator(&self, resource: ResourceRef) -> Result<UserId, OwnershipError> {
        let journey_id = match resource {
            ResourceRef::Journey(id) => id,
            ResourceRef::Scenario(id) => self.journey_of(resource, id).await?,
            ResourceRef::Word(id) => {
                let word = bounded(
                    "ownership word lookup",
                    self.lookup_timeout,
                    self.words.find_word_by_id(&id),
                )
                .await?
                .ok_or(OwnershipError::NotFound {
                    requested: resource,
                    missing: resource,
                })?;
                self.journey_of(resource, word.scenario_id).await?
            }
        };

        let journey = bounded(
            "ownership journey lookup",
            self.lookup_timeout,
            self.journeys.find_journey_by_id(&journey_id),
        )
        .await?
        .ok_or(OwnershipError::NotFound {
            requested: resource,
            missing: ResourceRef::Journey(journey_id),
        })?;

        Ok(journey.created_by)
    }

    async fn journey_of(
        &self,
        requested: ResourceRef,
        scenario_id: ScenarioId,
    ) -> Result<JourneyId, OwnershipError> {
        bounded(
            "ownership scenario lookup",
            self.lookup_timeout,
            self.scenarios.find_scenario_by_id(&scenario_id),
        )
        .await?
        .map(|scenario| scenario.journey_id)
        .ok_or(OwnershipError::NotFound {
            requested,
            missing: ResourceRef::Scenario(scenario_id),
        })
    }
}

#[async_trait]
impl<JR, SR, WR> OwnershipPort for OwnershipResolver<JR, SR, WR>
where
    JR: JourneyRepository,
    SR: ScenarioRepository,
    WR: WordRepository,
{
    async fn owns(
        &self,
        identity: &Identity,
        resource: ResourceRef,
    ) -> Result<bool, OwnershipError> {
        let creator = self.root_creator(resource).await?;
        let owned = creator == identity.user_id;

        tracing::debug!(
            resource = %resource,
            user_id = %identity.user_id,
            owned,
            "Ownership resolved"
        );

        Ok(owned)
    }
}
