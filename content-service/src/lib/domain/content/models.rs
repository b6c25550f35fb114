use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::content::errors::ContentError;
use crate::content::errors::IdError;
use crate::content::errors::UnknownVariantError;
use crate::domain::user::models::UserId;

macro_rules! content_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a new random ID.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parse an ID from string.
            ///
            /// # Errors
            /// * `InvalidFormat` - String is not a valid UUID
            pub fn from_string(s: &str) -> Result<Self, IdError> {
                Uuid::parse_str(s).map($name).map_err(|_| IdError::InvalidFormat {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

content_id!(
    /// Journey unique identifier type
    JourneyId,
    "journey"
);
content_id!(
    /// Scenario unique identifier type
    ScenarioId,
    "scenario"
);
content_id!(
    /// Word unique identifier type
    WordId,
    "word"
);

/// Publication state of a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JourneyStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl JourneyStatus {
    pub const NAMES: &'static [&'static str] = &["draft", "published", "archived"];

    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyStatus::Draft => "draft",
            JourneyStatus::Published => "published",
            JourneyStatus::Archived => "archived",
        }
    }
}

impl FromStr for JourneyStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(JourneyStatus::Draft),
            "published" => Ok(JourneyStatus::Published),
            "archived" => Ok(JourneyStatus::Archived),
            other => Err(UnknownVariantError {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for JourneyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a word's media was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenerationMethod {
    #[default]
    Manual,
    AiImage,
    AiAudio,
    AiBoth,
}

impl GenerationMethod {
    pub const NAMES: &'static [&'static str] = &["manual", "ai_image", "ai_audio", "ai_both"];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMethod::Manual => "manual",
            GenerationMethod::AiImage => "ai_image",
            GenerationMethod::AiAudio => "ai_audio",
            GenerationMethod::AiBoth => "ai_both",
        }
    }
}

impl FromStr for GenerationMethod {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(GenerationMethod::Manual),
            "ai_image" => Ok(GenerationMethod::AiImage),
            "ai_audio" => Ok(GenerationMethod::AiAudio),
            "ai_both" => Ok(GenerationMethod::AiBoth),
            other => Err(UnknownVariantError {
                field: "generationMethod",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root of the content tree. The only level that records its creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    pub id: JourneyId,
    pub title: String,
    pub description: String,
    pub source_language: String,
    pub target_language: String,
    pub status: JourneyStatus,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub id: ScenarioId,
    pub journey_id: JourneyId,
    pub title: String,
    pub description: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: WordId,
    pub scenario_id: ScenarioId,
    pub target_text: String,
    pub source_text: String,
    pub display_order: i32,
    pub image_url: Option<String>,
    pub audio_url: Option<String>,
    pub generation_method: GenerationMethod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn require(field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::MissingField(field));
    }
    Ok(())
}

/// Command to create a journey with validated fields
#[derive(Debug, Clone)]
pub struct CreateJourneyCommand {
    pub title: String,
    pub description: String,
    pub source_language: String,
    pub target_language: String,
    pub created_by: UserId,
}

impl CreateJourneyCommand {
    /// Validate required fields.
    ///
    /// # Errors
    /// * `MissingField` - Title or either language is blank
    pub fn new(
        title: String,
        description: String,
        source_language: String,
        target_language: String,
        created_by: UserId,
    ) -> Result<Self, ContentError> {
        require("title", &title)?;
        require("source language", &source_language)?;
        require("target language", &target_language)?;
        Ok(Self {
            title,
            description,
            source_language,
            target_language,
            created_by,
        })
    }
}

/// Command to create a scenario under an existing journey
#[derive(Debug, Clone)]
pub struct CreateScenarioCommand {
    pub journey_id: JourneyId,
    pub title: String,
    pub description: String,
    pub display_order: i32,
}

impl CreateScenarioCommand {
    /// # Errors
    /// * `MissingField` - Title is blank
    pub fn new(
        journey_id: JourneyId,
        title: String,
        description: String,
        display_order: i32,
    ) -> Result<Self, ContentError> {
        require("title", &title)?;
        Ok(Self {
            journey_id,
            title,
            description,
            display_order,
        })
    }
}

/// Command to create a word under an existing scenario
#[derive(Debug, Clone)]
pub struct CreateWordCommand {
    pub scenario_id: ScenarioId,
    pub target_text: String,
    pub source_text: String,
    pub display_order: i32,
    pub image_url: Option<String>,
    pub audio_url: Option<String>,
    pub generation_method: GenerationMethod,
}

impl CreateWordCommand {
    /// # Errors
    /// * `MissingField` - Target text is blank
    pub fn new(
        scenario_id: ScenarioId,
        target_text: String,
        source_text: String,
        display_order: i32,
        image_url: Option<String>,
        audio_url: Option<String>,
        generation_method: GenerationMethod,
    ) -> Result<Self, ContentError> {
        require("target text", &target_text)?;
        Ok(Self {
            scenario_id,
            target_text,
            source_text,
            display_order,
            image_url,
            audio_url,
            generation_method,
        })
    }
}

/// Journey list filter. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneyFilter {
    pub status: Option<JourneyStatus>,
    pub created_by: Option<UserId>,
}

impl JourneyFilter {
    pub fn matches(&self, journey: &Journey) -> bool {
        self.status.map_or(true, |s| journey.status == s)
            && self.created_by.map_or(true, |c| journey.created_by == c)
    }
}

/// One-based page window over a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MAX_LIMIT: u32 = 100;

    /// Normalize raw paging input.
    ///
    /// A page below 1 becomes 1. A limit outside `1..=100` falls back to 20.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page
            .filter(|p| *p >= 1)
            .and_then(|p| u32::try_from(p).ok())
            .unwrap_or(1);
        let limit = limit
            .filter(|l| (1..=Self::MAX_LIMIT as i64).contains(l))
            .map(|l| l as u32)
            .unwrap_or(Self::DEFAULT_LIMIT);
        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// A page of journeys, newest first, plus the unpaged match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyPage {
    pub journeys: Vec<Journey>,
    pub total: u64,
    pub pagination: Pagination,
}

/// A journey with its scenarios in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyDetail {
    pub journey: Journey,
    pub scenarios: Vec<Scenario>,
    pub word_count: usize,
}

impl JourneyDetail {
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }
}

/// A scenario with its words in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioDetail {
    pub scenario: Scenario,
    pub words: Vec<Word>,
}
