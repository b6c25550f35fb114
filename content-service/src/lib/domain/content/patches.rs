//! Mutable field tables for the content entities.

use chrono::DateTime;
use chrono::Utc;

use crate::content::models::GenerationMethod;
use crate::content::models::Journey;
use crate::content::models::JourneyStatus;
use crate::content::models::Scenario;
use crate::content::models::Word;
use crate::domain::patch::FieldKind;
use crate::domain::patch::FieldSpec;
use crate::domain::patch::FieldValue;
use crate::domain::patch::PatchError;
use crate::domain::patch::Patchable;

fn out_of_domain(field: &'static str, value: String, allowed: &'static [&'static str]) -> PatchError {
    PatchError::OutOfDomain {
        field,
        value,
        allowed,
    }
}

impl Patchable for Journey {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", FieldKind::RequiredText),
        FieldSpec::new("description", FieldKind::Text),
        FieldSpec::new("status", FieldKind::OneOf(JourneyStatus::NAMES)),
        FieldSpec::new("sourceLanguage", FieldKind::RequiredText),
        FieldSpec::new("targetLanguage", FieldKind::RequiredText),
    ];

    fn apply(&mut self, field: &'static str, value: FieldValue) -> Result<(), PatchError> {
        match (field, value) {
            ("title", FieldValue::Text(v)) => self.title = v,
            ("description", FieldValue::Text(v)) => self.description = v,
            ("status", FieldValue::Text(v)) => {
                self.status = v
                    .parse::<JourneyStatus>()
                    .map_err(|_| out_of_domain(field, v, JourneyStatus::NAMES))?
            }
            ("sourceLanguage", FieldValue::Text(v)) => self.source_language = v,
            ("targetLanguage", FieldValue::Text(v)) => self.target_language = v,
            (field, _) => return Err(PatchError::Unsupported { field }),
        }
        Ok(())
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Patchable for Scenario {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", FieldKind::RequiredText),
        FieldSpec::new("description", FieldKind::Text),
        FieldSpec::new("displayOrder", FieldKind::Integer),
    ];

    fn apply(&mut self, field: &'static str, value: FieldValue) -> Result<(), PatchError> {
        match (field, value) {
            ("title", FieldValue::Text(v)) => self.title = v,
            ("description", FieldValue::Text(v)) => self.description = v,
            ("displayOrder", FieldValue::Integer(v)) => self.display_order = v,
            (field, _) => return Err(PatchError::Unsupported { field }),
        }
        Ok(())
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Patchable for Word {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("targetText", FieldKind::RequiredText),
        FieldSpec::new("sourceText", FieldKind::Text),
        FieldSpec::new("displayOrder", FieldKind::Integer),
        FieldSpec::new("imageUrl", FieldKind::NullableText),
        FieldSpec::new("audioUrl", FieldKind::NullableText),
        FieldSpec::new("generationMethod", FieldKind::OneOf(GenerationMethod::NAMES)),
    ];

    fn apply(&mut self, field: &'static str, value: FieldValue) -> Result<(), PatchError> {
        match (field, value) {
            ("targetText", FieldValue::Text(v)) => self.target_text = v,
            ("sourceText", FieldValue::Text(v)) => self.source_text = v,
            ("displayOrder", FieldValue::Integer(v)) => self.display_order = v,
            ("imageUrl", FieldValue::NullableText(v)) => self.image_url = v,
            ("audioUrl", FieldValue::NullableText(v)) => self.audio_url = v,
            ("generationMethod", FieldValue::Text(v)) => {
                self.generation_method = v
                    .parse::<GenerationMethod>()
                    .map_err(|_| out_of_domain(field, v, GenerationMethod::NAMES))?
            }
            (field, _) => return Err(PatchError::Unsupported { field }),
        }
        Ok(())
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
