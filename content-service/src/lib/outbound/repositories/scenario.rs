use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use super::journey::database_error;
use crate::content::errors::ContentError;
use crate::content::models::JourneyId;
use crate::content::models::Scenario;
use crate::content::models::ScenarioId;
use crate::content::ports::ScenarioRepository;

pub struct PostgresScenarioRepository {
    pool: PgPool,
}

impl PostgresScenarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_scenario(row: PgRow) -> Result<Scenario, ContentError> {
        Ok(Scenario {
            id: ScenarioId(row.try_get("id").map_err(database_error)?),
            journey_id: JourneyId(row.try_get("journey_id").map_err(database_error)?),
            title: row.try_get("title").map_err(database_error)?,
            description: row.try_get("description").map_err(database_error)?,
            display_order: row.try_get("display_order").map_err(database_error)?,
            created_at: row.try_get("created_at").map_err(database_error)?,
            updated_at: row.try_get("updated_at").map_err(database_error)?,
        })
    }
}

#[async_trait]
impl ScenarioRepository for PostgresScenarioRepository {
    async fn create_scenario(&self, scenario: Scenario) -> Result<Scenario, ContentError> {
        sqlx::query(
            r#"
            INSERT INTO scenarios (id, journey_id, title, description, display_order,
                                   created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(scenario.id.0)
        .bind(scenario.journey_id.0)
        .bind(&scenario.title)
        .bind(&scenario.description)
        .bind(scenario.display_order)
        .bind(scenario.created_at)
        .bind(scenario.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The parent can vanish between the existence check and the insert.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return ContentError::JourneyNotFound(scenario.journey_id);
                }
            }
            database_error(e)
        })?;

        Ok(scenario)
    }

    async fn find_scenario_by_id(
        &self,
        id: &ScenarioId,
    ) -> Result<Option<Scenario>, ContentError> {
        sqlx::query(
            r#"
            SELECT id, journey_id, title, description, display_order, created_at, updated_at
            FROM scenarios
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Self::row_to_scenario)
        .transpose()
    }

    async fn list_scenarios_by_journey(
        &self,
        journey_id: &JourneyId,
    ) -> Result<Vec<Scenario>, ContentError> {
        sqlx::query(
            r#"
            SELECT id, journey_id, title, description, display_order, created_at, updated_at
            FROM scenarios
            WHERE journey_id = $1
            ORDER BY display_order ASC, created_at ASC
            "#,
        )
        .bind(journey_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?
        .into_iter()
        .map(Self::row_to_scenario)
        .collect()
    }

    async fn update_scenario(&self, scenario: Scenario) -> Result<Scenario, ContentError> {
        let result = sqlx::query(
            r#"
            UPDATE scenarios
            SET title = $2, description = $3, display_order = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(scenario.id.0)
        .bind(&scenario.title)
        .bind(&scenario.description)
        .bind(scenario.display_order)
        .bind(scenario.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ContentError::ScenarioNotFound(scenario.id));
        }

        Ok(scenario)
    }

    async fn delete_scenario(&self, id: &ScenarioId) -> Result<(), ContentError> {
        let result = sqlx::query("DELETE FROM scenarios WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ContentError::ScenarioNotFound(*id));
        }

        Ok(())
    }
}
