use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::content::errors::ContentError;
use crate::content::models::Journey;
use crate::content::models::JourneyFilter;
use crate::content::models::JourneyId;
use crate::content::models::JourneyStatus;
use crate::content::models::Pagination;
use crate::content::ports::JourneyRepository;
use crate::domain::user::models::UserId;

pub struct PostgresJourneyRepository {
    pool: PgPool,
}

impl PostgresJourneyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_journey(row: PgRow) -> Result<Journey, ContentError> {
        let status: String = row.try_get("status").map_err(database_error)?;
        Ok(Journey {
            id: JourneyId(row.try_get("id").map_err(database_error)?),
            title: row.try_get("title").map_err(database_error)?,
            description: row.try_get("description").map_err(database_error)?,
            source_language: row.try_get("source_language").map_err(database_error)?,
            target_language: row.try_get("target_language").map_err(database_error)?,
            status: status.parse::<JourneyStatus>()?,
            created_by: UserId(row.try_get("created_by").map_err(database_error)?),
            created_at: row.try_get("created_at").map_err(database_error)?,
            updated_at: row.try_get("updated_at").map_err(database_error)?,
        })
    }
}

pub(super) fn database_error(e: sqlx::Error) -> ContentError {
    ContentError::DatabaseError(e.to_string())
}

#[async_trait]
impl JourneyRepository for PostgresJourneyRepository {
    async fn create_journey(&self, journey: Journey) -> Result<Journey, ContentError> {
        sqlx::query(
            r#"
            INSERT INTO journeys (id, title, description, source_language, target_language,
                                  status, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(journey.id.0)
        .bind(&journey.title)
        .bind(&journey.description)
        .bind(&journey.source_language)
        .bind(&journey.target_language)
        .bind(journey.status.as_str())
        .bind(journey.created_by.0)
        .bind(journey.created_at)
        .bind(journey.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(journey)
    }

    async fn find_journey_by_id(&self, id: &JourneyId) -> Result<Option<Journey>, ContentError> {
        sqlx::query(
            r#"
            SELECT id, title, description, source_language, target_language,
                   status, created_by, created_at, updated_at
            FROM journeys
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Self::row_to_journey)
        .transpose()
    }

    async fn list_journeys(
        &self,
        filter: &JourneyFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Journey>, u64), ContentError> {
        let status = filter.status.map(|s| s.as_str());
        let created_by = filter.created_by.map(|u| u.0);

        let total: i64 = sqlx::query(
            r#"
            SELECT COUNT(*) AS total
            FROM journeys
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR created_by = $2)
            "#,
        )
        .bind(status)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
        .and_then(|row| row.try_get("total"))
        .map_err(database_error)?;

        let rows = sqlx::query(
            r#"
            SELECT id, title, description, source_language, target_language,
                   status, created_by, created_at, updated_at
            FROM journeys
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR created_by = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(status)
        .bind(created_by)
        .bind(pagination.limit() as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let journeys = rows
            .into_iter()
            .map(Self::row_to_journey)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((journeys, total as u64))
    }

    async fn update_journey(&self, journey: Journey) -> Result<Journey, ContentError> {
        let result = sqlx::query(
            r#"
            UPDATE journeys
            SET title = $2, description = $3, source_language = $4, target_language = $5,
                status = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(journey.id.0)
        .bind(&journey.title)
        .bind(&journey.description)
        .bind(&journey.source_language)
        .bind(&journey.target_language)
        .bind(journey.status.as_str())
        .bind(journey.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ContentError::JourneyNotFound(journey.id));
        }

        Ok(journey)
    }

    async fn delete_journey(&self, id: &JourneyId) -> Result<(), ContentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM journeys
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ContentError::JourneyNotFound(*id));
        }

        Ok(())
    }
}
