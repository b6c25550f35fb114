use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use super::journey::database_error;
use crate::content::errors::ContentError;
use crate::content::models::GenerationMethod;
use crate::content::models::ScenarioId;
use crate::content::models::Word;
use crate::content::models::WordId;
use crate::content::ports::WordRepository;

pub struct PostgresWordRepository {
    pool: PgPool,
}

impl PostgresWordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_word(row: PgRow) -> Result<Word, ContentError> {
        let generation_method: String = row.try_get("generation_method").map_err(database_error)?;
        Ok(Word {
            id: WordId(row.try_get("id").map_err(database_error)?),
            scenario_id: ScenarioId(row.try_get("scenario_id").map_err(database_error)?),
            target_text: row.try_get("target_text").map_err(database_error)?,
            source_text: row.try_get("source_text").map_err(database_error)?,
            display_order: row.try_get("display_order").map_err(database_error)?,
            image_url: row.try_get("image_url").map_err(database_error)?,
            audio_url: row.try_get("audio_url").map_err(database_error)?,
            generation_method: generation_method.parse::<GenerationMethod>()?,
            created_at: row.try_get("created_at").map_err(database_error)?,
            updated_at: row.try_get("updated_at").map_err(database_error)?,
        })
    }
}

#[async_trait]
impl WordRepository for PostgresWordRepository {
    async fn create_word(&self, word: Word) -> Result<Word, ContentError> {
        sqlx::query(
            r#"
            INSERT INTO words (id, scenario_id, target_text, source_text, display_order,
                               image_url, audio_url, generation_method, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(word.id.0)
        .bind(word.scenario_id.0)
        .bind(&word.target_text)
        .bind(&word.source_text)
        .bind(word.display_order)
        .bind(&word.image_url)
        .bind(&word.audio_url)
        .bind(word.generation_method.as_str())
        .bind(word.created_at)
        .bind(word.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return ContentError::ScenarioNotFound(word.scenario_id);
                }
            }
            database_error(e)
        })?;

        Ok(word)
    }

    async fn find_word_by_id(&self, id: &WordId) -> Result<Option<Word>, ContentError> {
        sqlx::query(
            r#"
            SELECT id, scenario_id, target_text, source_text, display_order,
                   image_url, audio_url, generation_method, created_at, updated_at
            FROM words
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Self::row_to_word)
        .transpose()
    }

    async fn list_words_by_scenario(
        &self,
        scenario_id: &ScenarioId,
    ) -> Result<Vec<Word>, ContentError> {
        sqlx::query(
            r#"
            SELECT id, scenario_id, target_text, source_text, display_order,
                   image_url, audio_url, generation_method, created_at, updated_at
            FROM words
            WHERE scenario_id = $1
            ORDER BY display_order ASC, created_at ASC
            "#,
        )
        .bind(scenario_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?
        .into_iter()
        .map(Self::row_to_word)
        .collect()
    }

    async fn update_word(&self, word: Word) -> Result<Word, ContentError> {
        let result = sqlx::query(
            r#"
            UPDATE words
            SET target_text = $2, source_text = $3, display_order = $4, image_url = $5,
                audio_url = $6, generation_method = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(word.id.0)
        .bind(&word.target_text)
        .bind(&word.source_text)
        .bind(word.display_order)
        .bind(&word.image_url)
        .bind(&word.audio_url)
        .bind(word.generation_method.as_str())
        .bind(word.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ContentError::WordNotFound(word.id));
        }

        Ok(word)
    }

    async fn delete_word(&self, id: &WordId) -> Result<(), ContentError> {
        let result = sqlx::query("DELETE FROM words WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ContentError::WordNotFound(*id));
        }

        Ok(())
    }
}
